use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use cornerfill::config::CornerfillConfig;
use cornerfill::io::cli::Cli;
use cornerfill::io::output::Output;
use cornerfill::io::svg_export::panel_to_svg;
use cornerfill::opt::dim_search::CornerfillOptimizer;
use cornerfill::{EPOCH, io};
use log::{info, warn};
use panelpack::io::{export, import};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CornerfillConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed CornerfillConfig: {config:?}");

    let input_file_stem = args.input_file.file_stem().unwrap().to_str().unwrap();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).unwrap_or_else(|_| {
            panic!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        });
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let instance = import::import(&ext_instance)?;

    let optimizer = CornerfillOptimizer::new(instance, config);

    match optimizer.solve()? {
        Some(solution) => {
            for (i, panel) in solution.panels.iter().enumerate() {
                info!(
                    "[MAIN] panel {}: {}x{}, utilization {:.1}%",
                    i + 1,
                    panel.width,
                    panel.height,
                    panel.utilization()
                );
            }
            info!(
                "[MAIN] average utilization over {} panels: {:.1}%",
                solution.n_panels(),
                solution.avg_utilization()
            );

            let output = Output {
                instance: ext_instance,
                solution: export::export(&solution, *EPOCH),
                config,
            };
            let solution_path = args
                .solution_folder
                .join(format!("sol_{input_file_stem}.json"));
            io::write_json(&output, Path::new(&solution_path))?;

            for (i, panel) in solution.panels.iter().enumerate() {
                let svg_path = args
                    .solution_folder
                    .join(format!("sol_{input_file_stem}_{i}.svg"));
                let svg = panel_to_svg(panel, &format!("panel {}", i + 1));
                io::write_svg(&svg, Path::new(&svg_path))?;
            }
        }
        None => warn!("[MAIN] no feasible solution found, nothing written"),
    }

    Ok(())
}
