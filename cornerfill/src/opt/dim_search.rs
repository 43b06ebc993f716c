use std::cmp::Reverse;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use crate::config::CornerfillConfig;
use crate::opt::packer::{UnplaceableItem, pack};
use itertools::Itertools;
use log::{debug, info};
use ordered_float::OrderedFloat;
use panelpack::entities::{Instance, Item, Solution};
use panelpack::util::assertions;
use rayon::prelude::*;
use thousands::Separable;

/// Dimension-search optimizer: tries every panel dimension in the instance's
/// grid and keeps the best feasible packing.
pub struct CornerfillOptimizer {
    pub instance: Instance,
    pub config: CornerfillConfig,
}

struct TrialSolution {
    grid_idx: usize,
    avg_utilization: f32,
    solution: Solution,
}

impl CornerfillOptimizer {
    pub fn new(instance: Instance, config: CornerfillConfig) -> Self {
        assert!(config.length_step > 0 && config.width_step > 0);
        Self { instance, config }
    }

    /// Runs one independent packing trial per grid cell and reduces to the
    /// feasible trial with the highest average utilization. Returns `None`
    /// when no trial satisfies the per-panel utilization floor.
    ///
    /// Trials are evaluated in parallel; the earliest grid-scan position wins
    /// on equal average utilization, so the outcome is deterministic.
    pub fn solve(&self) -> Result<Option<Solution>, UnplaceableItem> {
        let start = Instant::now();
        let bounds = self.instance.bounds;

        //an item that does not fit the largest grid cell fits no cell
        if let Some(item) = self
            .instance
            .items
            .iter()
            .find(|item| !fits_within(item, bounds.max_length, bounds.max_width))
        {
            return Err(UnplaceableItem {
                id: item.id.clone(),
                width: item.width,
                height: item.height,
            });
        }

        let cells = (bounds.min_length..=bounds.max_length)
            .step_by(self.config.length_step as usize)
            .flat_map(|length| {
                (bounds.min_width..=bounds.max_width)
                    .step_by(self.config.width_step as usize)
                    .map(move |width| (length, width))
            })
            .collect_vec();

        info!(
            "[CF] searching {} candidate panel dimensions for {} items",
            cells.len(),
            self.instance.total_item_qty()
        );

        let eval_counter = AtomicUsize::new(0);

        let best = cells
            .par_iter()
            .enumerate()
            .filter_map(|(grid_idx, &(length, width))| {
                self.run_trial(grid_idx, length, width, &eval_counter)
            })
            .max_by_key(|trial| (OrderedFloat(trial.avg_utilization), Reverse(trial.grid_idx)));

        info!(
            "[CF] dimension search finished in {:.3}ms ({} placements evaluated)",
            start.elapsed().as_secs_f64() * 1000.0,
            eval_counter.load(Ordering::Relaxed).separate_with_commas()
        );

        match &best {
            Some(trial) => info!(
                "[CF] best panel dimensions {}x{}: {} panels, avg utilization {:.1}%",
                trial.solution.panel_width,
                trial.solution.panel_height,
                trial.solution.n_panels(),
                trial.avg_utilization
            ),
            None => info!(
                "[CF] no trial satisfied the {:.0}% per-panel utilization floor",
                self.config.min_panel_utilization
            ),
        }

        Ok(best.map(|trial| trial.solution))
    }

    fn run_trial(
        &self,
        grid_idx: usize,
        length: u64,
        width: u64,
        eval_counter: &AtomicUsize,
    ) -> Option<TrialSolution> {
        let mut n_evals = 0;
        //every trial works on a fresh copy of the demand list
        let result = pack(
            self.instance.items.clone(),
            length,
            width,
            self.instance.bounds.min_length,
            self.instance.bounds.min_width,
            &mut n_evals,
        );
        eval_counter.fetch_add(n_evals, Ordering::Relaxed);

        let panels = match result {
            Ok(panels) => panels,
            Err(unplaceable) => {
                //a larger cell may still host every item
                debug!("[CF] trial {length}x{width} aborted: {unplaceable}");
                return None;
            }
        };

        if let Some(below) = panels
            .iter()
            .find(|p| p.utilization() < self.config.min_panel_utilization)
        {
            debug!(
                "[CF] trial {length}x{width} infeasible: panel at {:.1}% utilization",
                below.utilization()
            );
            return None;
        }

        let solution = Solution::new(length, width, panels);
        debug_assert!(assertions::solution_matches_instance(
            &solution,
            &self.instance
        ));

        let avg_utilization = solution.avg_utilization();
        debug!(
            "[CF] trial {length}x{width}: {} panels, avg utilization {avg_utilization:.1}%",
            solution.n_panels()
        );

        Some(TrialSolution {
            grid_idx,
            avg_utilization,
            solution,
        })
    }
}

fn fits_within(item: &Item, length: u64, width: u64) -> bool {
    (item.width <= length && item.height <= width)
        || (item.height <= length && item.width <= width)
}
