use crate::opt::search;
use log::debug;
use panelpack::entities::{Item, Panel, PlacedItem};

/// Greedily fills a single panel: every item is tried in both orientations at
/// every candidate position and placed where it wastes least. Items that fit
/// nowhere are deferred and returned in their original order.
pub fn fill_panel(panel: &mut Panel, items: Vec<Item>, eval_counter: &mut usize) -> Vec<Item> {
    let mut deferred = vec![];

    for item in items {
        match search::best_placement(panel, &item, eval_counter) {
            Some(placement) => {
                debug!(
                    "[CF] placing {} at ({}, {}){}",
                    item.id,
                    placement.x,
                    placement.y,
                    if placement.rotated { " (rotated)" } else { "" }
                );
                panel.place(PlacedItem::new(
                    &item,
                    placement.x,
                    placement.y,
                    placement.rotated,
                ));
            }
            None => deferred.push(item),
        }
    }

    deferred
}
