use crate::entities::Item;
use serde::{Deserialize, Serialize};

/// The static (unmodifiable) representation of a problem instance:
/// the expanded demand items and the panel dimension search space.
#[derive(Clone, Debug)]
pub struct Instance {
    /// Every demand rectangle, one entry per copy to be produced
    pub items: Vec<Item>,
    pub bounds: SearchBounds,
}

impl Instance {
    pub fn new(items: Vec<Item>, bounds: SearchBounds) -> Self {
        Instance { items, bounds }
    }

    pub fn total_item_qty(&self) -> usize {
        self.items.len()
    }

    pub fn total_item_area(&self) -> u64 {
        self.items.iter().map(|item| item.area()).sum()
    }
}

/// Inclusive bounds of the candidate panel dimension grid.
/// `length` spans the panel's x-axis, `width` its y-axis.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SearchBounds {
    pub min_length: u64,
    pub max_length: u64,
    pub min_width: u64,
    pub max_width: u64,
}
