use crate::entities::{Instance, PlacedItem, Solution};
use itertools::Itertools;

/// No two placed items share a region of non-zero area.
pub fn placements_disjoint(placed: &[PlacedItem]) -> bool {
    placed
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !a.rect().overlaps(&b.rect()))
}

/// All placed items lie within the nominal `width` x `height` bounds.
pub fn placements_within(placed: &[PlacedItem], width: u64, height: u64) -> bool {
    placed
        .iter()
        .all(|pi| pi.x + pi.width <= width && pi.y + pi.height <= height)
}

/// Every demand item appears exactly once across all panels of the solution,
/// with its area conserved under rotation.
pub fn solution_matches_instance(solution: &Solution, instance: &Instance) -> bool {
    let placed = solution
        .panels
        .iter()
        .flat_map(|panel| &panel.placed)
        .map(|pi| (pi.id.as_str(), pi.area()))
        .sorted()
        .collect_vec();
    let demanded = instance
        .items
        .iter()
        .map(|item| (item.id.as_str(), item.area()))
        .sorted()
        .collect_vec();

    placed == demanded
}
