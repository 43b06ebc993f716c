use serde::{Deserialize, Serialize};

/// Configuration for the cornerfill optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct CornerfillConfig {
    /// Grid step along the panel length axis of the dimension search
    pub length_step: u64,
    /// Grid step along the panel width axis of the dimension search
    pub width_step: u64,
    /// Hard per-panel utilization floor in percent. Trials with any panel below it are rejected.
    pub min_panel_utilization: f32,
}

impl Default for CornerfillConfig {
    fn default() -> Self {
        Self {
            length_step: 1000,
            width_step: 100,
            min_panel_utilization: 50.0,
        }
    }
}
