#[cfg(test)]
mod tests {
    use std::path::Path;

    use float_cmp::approx_eq;
    use test_case::test_case;

    use cornerfill::config::CornerfillConfig;
    use cornerfill::io;
    use cornerfill::opt::dim_search::CornerfillOptimizer;
    use cornerfill::opt::packer::UnplaceableItem;
    use panelpack::entities::{Instance, SearchBounds, Solution};
    use panelpack::io::ext_repr::{ExtDemand, ExtInstance};
    use panelpack::io::import;
    use panelpack::util::assertions;

    fn instance(demands: &[(u64, u64, u64)], bounds: SearchBounds) -> Instance {
        let ext = ExtInstance {
            name: "test".into(),
            demands: demands
                .iter()
                .map(|&(width, height, count)| ExtDemand {
                    width,
                    height,
                    count,
                })
                .collect(),
            bounds,
        };
        import::import(&ext).unwrap()
    }

    fn solve(
        demands: &[(u64, u64, u64)],
        bounds: SearchBounds,
    ) -> Result<Option<Solution>, UnplaceableItem> {
        let instance = instance(demands, bounds);
        CornerfillOptimizer::new(instance, CornerfillConfig::default()).solve()
    }

    fn assert_invariants(solution: &Solution, instance: &Instance) {
        assert!(assertions::solution_matches_instance(solution, instance));
        for panel in &solution.panels {
            assert!(assertions::placements_disjoint(&panel.placed));
            assert!(assertions::placements_within(
                &panel.placed,
                solution.panel_width,
                solution.panel_height
            ));
            assert!(panel.utilization() > 0.0 && panel.utilization() <= 100.0);
            assert!(panel.utilization() >= CornerfillConfig::default().min_panel_utilization);
        }
    }

    #[test_case(2; "two items")]
    #[test_case(3; "three items")]
    #[test_case(4; "four items")]
    fn identical_items_tile_side_by_side(n: u64) {
        let bounds = SearchBounds {
            min_length: 100 * n,
            max_length: 100 * n,
            min_width: 50,
            max_width: 50,
        };
        let solution = solve(&[(100, 50, n)], bounds).unwrap().unwrap();

        assert_eq!(solution.n_panels(), 1);
        let panel = &solution.panels[0];
        assert_eq!(panel.placed.len(), n as usize);
        assert!(approx_eq!(f32, panel.utilization(), 100.0, ulps = 2));
        //one row along the bottom edge
        for (i, pi) in panel.placed.iter().enumerate() {
            assert_eq!((pi.x, pi.y), (100 * i as u64, 0));
        }
    }

    #[test]
    fn oversized_item_is_unplaceable() {
        let bounds = SearchBounds {
            min_length: 100,
            max_length: 100,
            min_width: 100,
            max_width: 100,
        };
        let err = solve(&[(300, 300, 1)], bounds).unwrap_err();
        assert_eq!(
            err,
            UnplaceableItem {
                id: "R1".into(),
                width: 300,
                height: 300
            }
        );
    }

    #[test]
    fn empty_demand_list_is_rejected_at_import() {
        let ext = ExtInstance {
            name: "empty".into(),
            demands: vec![],
            bounds: SearchBounds {
                min_length: 1000,
                max_length: 2000,
                min_width: 100,
                max_width: 500,
            },
        };
        assert!(import::import(&ext).is_err());
    }

    #[test]
    fn exhausted_grid_without_feasible_trial_is_no_solution() {
        //a lone 100x100 item in a panel floored at 1000x100: 10% utilization
        let bounds = SearchBounds {
            min_length: 1000,
            max_length: 1000,
            min_width: 100,
            max_width: 100,
        };
        let outcome = solve(&[(100, 100, 1)], bounds).unwrap();
        assert!(outcome.is_none());
    }

    #[test]
    fn best_dimensions_win_with_deterministic_tie_break() {
        let bounds = SearchBounds {
            min_length: 1000,
            max_length: 3000,
            min_width: 100,
            max_width: 300,
        };
        let instance = instance(&[(900, 100, 4)], bounds);
        let solution = CornerfillOptimizer::new(instance.clone(), CornerfillConfig::default())
            .solve()
            .unwrap()
            .unwrap();

        //several grid cells reach 100% average utilization; the earliest in
        //grid-scan order (length-major) must be retained
        assert_eq!(
            (solution.panel_width, solution.panel_height),
            (2000, 100)
        );
        assert_eq!(solution.n_panels(), 2);
        assert!(approx_eq!(f32, solution.avg_utilization(), 100.0, ulps = 2));
        assert_invariants(&solution, &instance);
    }

    #[test]
    fn rotation_is_permanent_and_conserves_area() {
        let bounds = SearchBounds {
            min_length: 200,
            max_length: 200,
            min_width: 50,
            max_width: 50,
        };
        let solution = solve(&[(50, 100, 2)], bounds).unwrap().unwrap();

        let panel = &solution.panels[0];
        assert_eq!(panel.placed.len(), 2);
        for pi in &panel.placed {
            assert!(pi.rotated);
            assert_eq!((pi.width, pi.height), (100, 50));
            assert_eq!(pi.area(), 50 * 100);
        }
        assert!(approx_eq!(f32, panel.utilization(), 100.0, ulps = 2));
    }

    #[test]
    fn trials_too_small_for_an_item_do_not_abort_the_search() {
        //the 1500x100 item overflows the 1000-long cell but fits the 2000-long one
        let bounds = SearchBounds {
            min_length: 1000,
            max_length: 2000,
            min_width: 100,
            max_width: 100,
        };
        let instance = instance(&[(1500, 100, 1), (800, 100, 1)], bounds);
        let solution = CornerfillOptimizer::new(instance.clone(), CornerfillConfig::default())
            .solve()
            .unwrap()
            .unwrap();

        assert_eq!(
            (solution.panel_width, solution.panel_height),
            (2000, 100)
        );
        assert_eq!(solution.n_panels(), 2);
        assert_invariants(&solution, &instance);
    }

    #[test]
    fn identical_runs_produce_identical_solutions() {
        let bounds = SearchBounds {
            min_length: 1000,
            max_length: 2000,
            min_width: 400,
            max_width: 600,
        };
        let demands = [(600, 400, 3), (500, 300, 5), (300, 200, 7), (200, 100, 10)];

        let solve_once = || {
            CornerfillOptimizer::new(instance(&demands, bounds), CornerfillConfig::default())
                .solve()
                .unwrap()
        };
        let (a, b) = (solve_once(), solve_once());

        let placements = |solution: &Option<Solution>| {
            solution.as_ref().map(|s| {
                (
                    s.panel_width,
                    s.panel_height,
                    s.panels
                        .iter()
                        .map(|p| (p.width, p.height, p.placed.clone()))
                        .collect::<Vec<_>>(),
                )
            })
        };
        assert_eq!(placements(&a), placements(&b));
    }

    #[test]
    fn boards_instance() {
        let _ = env_logger::builder().is_test(true).try_init();
        let ext = io::read_instance(Path::new("../assets/boards.json")).unwrap();
        let instance = import::import(&ext).unwrap();
        let solution = CornerfillOptimizer::new(instance.clone(), CornerfillConfig::default())
            .solve()
            .unwrap()
            .expect("boards instance should have a feasible packing");

        assert_invariants(&solution, &instance);
        assert_eq!(solution.total_placed_qty(), instance.total_item_qty());
    }
}
