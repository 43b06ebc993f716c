use crate::entities::Item;
use crate::geometry::Rect;

/// Represents an [`Item`] that has been assigned a position in a panel.
/// `width`/`height` are the dimensions as placed: a 90° rotation swaps them
/// permanently for this copy, identity is preserved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedItem {
    /// ID of the `Item` this placement originates from
    pub id: String,
    /// x-coordinate of the lower-left corner, panel-local
    pub x: u64,
    /// y-coordinate of the lower-left corner, panel-local
    pub y: u64,
    pub width: u64,
    pub height: u64,
    /// Whether the item was rotated 90° with respect to its demand row
    pub rotated: bool,
}

impl PlacedItem {
    pub fn new(item: &Item, x: u64, y: u64, rotated: bool) -> Self {
        let (width, height) = match rotated {
            false => (item.width, item.height),
            true => (item.height, item.width),
        };
        PlacedItem {
            id: item.id.clone(),
            x,
            y,
            width,
            height,
            rotated,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn area(&self) -> u64 {
        self.width * self.height
    }
}
