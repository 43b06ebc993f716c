use crate::entities::SearchBounds;
use serde::{Deserialize, Serialize};

/// Cutting-stock problem instance
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Demand rows, each expanded into `count` individual items on import
    pub demands: Vec<ExtDemand>,
    /// Bounds of the panel dimension search grid
    #[serde(flatten)]
    pub bounds: SearchBounds,
}

/// One row of demand: a rectangle size and how many copies are required
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtDemand {
    pub width: u64,
    pub height: u64,
    /// Amount of times this rectangle has to be produced
    pub count: u64,
}

/// Cutting-stock solution
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSolution {
    /// Panels which compose the solution, in creation order
    pub panels: Vec<ExtPanel>,
    /// Average utilization over all panels, in percent
    pub avg_utilization: f32,
    /// The time it took to generate the solution in seconds
    pub run_time_sec: u64,
}

/// A single filled panel with its effective dimensions
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPanel {
    pub width: u64,
    pub height: u64,
    /// Used area over effective panel area, in percent
    pub utilization: f32,
    pub items: Vec<ExtPlacedItem>,
}

/// A placed item: final position and dimensions after any rotation
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPlacedItem {
    pub id: String,
    pub x: u64,
    pub y: u64,
    pub width: u64,
    pub height: u64,
    /// Whether the item was rotated 90° with respect to its demand row
    pub rotated: bool,
}
