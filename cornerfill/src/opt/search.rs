use crate::opt::waste::Waste;
use panelpack::entities::{Item, Panel};

/// A legal position for an item in a panel, with the orientation that produced it.
#[derive(Clone, Copy, Debug)]
pub struct Placement {
    pub x: u64,
    pub y: u64,
    pub waste: Waste,
    /// Whether the item's dimensions were swapped for this placement
    pub rotated: bool,
}

/// Corner-derived candidate positions for the current panel state: the origin
/// plus, for every placed item, the point right of it and the point above it.
/// Points outside the nominal bounds are dropped, duplicates collapsed, and
/// the rest sorted bottom-to-top then left-to-right.
pub fn placement_points(panel: &Panel) -> Vec<(u64, u64)> {
    let mut points = vec![(0, 0)];
    for placed in &panel.placed {
        points.push((placed.x + placed.width, placed.y));
        points.push((placed.x, placed.y + placed.height));
    }
    points.retain(|&(x, y)| x < panel.width && y < panel.height);
    points.sort_unstable_by_key(|&(x, y)| (y, x));
    points.dedup();
    points
}

/// Scans the candidate points in order and returns the legal position with
/// minimal waste. On equal waste the earlier point in scan order wins.
pub fn find_best_position(
    panel: &Panel,
    width: u64,
    height: u64,
    eval_counter: &mut usize,
) -> Option<(u64, u64, Waste)> {
    let mut best: Option<(u64, u64, Waste)> = None;

    for (x, y) in placement_points(panel) {
        if panel.can_place(width, height, x, y) {
            *eval_counter += 1;
            let waste = Waste::evaluate(panel, width, height, x, y);
            if best.is_none_or(|(_, _, best_waste)| waste < best_waste) {
                best = Some((x, y, waste));
            }
        }
    }

    best
}

/// Evaluates both orientations of an item and keeps the one with lower waste.
/// The unrotated orientation wins ties.
pub fn best_placement(panel: &Panel, item: &Item, eval_counter: &mut usize) -> Option<Placement> {
    let unrotated =
        find_best_position(panel, item.width, item.height, eval_counter).map(|(x, y, waste)| {
            Placement {
                x,
                y,
                waste,
                rotated: false,
            }
        });
    let rotated =
        find_best_position(panel, item.height, item.width, eval_counter).map(|(x, y, waste)| {
            Placement {
                x,
                y,
                waste,
                rotated: true,
            }
        });

    match (unrotated, rotated) {
        (Some(u), Some(r)) => match r.waste < u.waste {
            true => Some(r),
            false => Some(u),
        },
        (u, r) => u.or(r),
    }
}
