use crate::entities::Solution;
use crate::io::ext_repr::{ExtPanel, ExtPlacedItem, ExtSolution};
use std::time::Instant;

/// Exports a solution out of the library.
pub fn export(solution: &Solution, epoch: Instant) -> ExtSolution {
    ExtSolution {
        panels: solution
            .panels
            .iter()
            .map(|panel| ExtPanel {
                width: panel.width,
                height: panel.height,
                utilization: panel.utilization(),
                items: panel
                    .placed
                    .iter()
                    .map(|pi| ExtPlacedItem {
                        id: pi.id.clone(),
                        x: pi.x,
                        y: pi.y,
                        width: pi.width,
                        height: pi.height,
                        rotated: pi.rotated,
                    })
                    .collect(),
            })
            .collect(),
        avg_utilization: solution.avg_utilization(),
        run_time_sec: epoch.elapsed().as_secs(),
    }
}
