use crate::opt::filler::fill_panel;
use itertools::Itertools;
use panelpack::entities::{Item, Panel, PanelLayout};
use std::cmp::Reverse;
use std::fmt;

/// Packs all items into successive panels of the given nominal dimensions.
/// Items are sorted once, descending by area with the smaller side as
/// tie-break, and keep their relative order across panels. Each finalized
/// panel gets its effective dimensions, floored at `min_width`/`min_height`.
///
/// A fill pass that places nothing means the remaining items fit the nominal
/// dimensions in neither orientation; this aborts the packing instead of
/// opening empty panels forever.
pub fn pack(
    items: Vec<Item>,
    panel_width: u64,
    panel_height: u64,
    min_width: u64,
    min_height: u64,
    eval_counter: &mut usize,
) -> Result<Vec<PanelLayout>, UnplaceableItem> {
    let mut remaining = items
        .into_iter()
        .sorted_by_key(|item| Reverse((item.area(), item.min_side())))
        .collect_vec();

    let mut layouts = vec![];
    while !remaining.is_empty() {
        let mut panel = Panel::new(panel_width, panel_height);
        let deferred = fill_panel(&mut panel, remaining, eval_counter);
        if panel.is_empty() {
            let item = &deferred[0];
            return Err(UnplaceableItem {
                id: item.id.clone(),
                width: item.width,
                height: item.height,
            });
        }
        layouts.push(PanelLayout::from_panel(panel, min_width, min_height));
        remaining = deferred;
    }

    Ok(layouts)
}

/// A demand item that cannot be placed in any admissible panel,
/// in either orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnplaceableItem {
    pub id: String,
    pub width: u64,
    pub height: u64,
}

impl fmt::Display for UnplaceableItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "item {} ({}x{}) fits no admissible panel in either orientation",
            self.id, self.width, self.height
        )
    }
}

impl std::error::Error for UnplaceableItem {}
