use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result, ensure};
use clap::Parser as ClapParser;
use log::{error, info, warn};

use knapsack_rs::io::export;
use packer::config::PackerConfig;
use packer::io;
use packer::io::cli::Cli;
use packer::io::output::{KPOutput, PackerOutput};
use packer::opt::batch;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PackerConfig::default()
        }
        Some(config_file) => {
            let file = File::open(&config_file)
                .with_context(|| format!("could not open config file: {}", config_file.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed PackerConfig: {config:?}");

    let ext_instances = io::read_instances(&args.input_file)?;
    info!(
        "[MAIN] read {} instances from {}",
        ext_instances.len(),
        args.input_file.display()
    );

    let outcomes = batch::solve_all(&ext_instances, config);

    for outcome in &outcomes {
        match outcome {
            Ok(solution) => println!("{solution}"),
            Err(err) => error!("[MAIN] {err:#}"),
        }
    }
    let n_rejected = outcomes.iter().filter(|o| o.is_err()).count();

    if let Some(solution_folder) = args.solution_folder {
        if !solution_folder.exists() {
            fs::create_dir_all(&solution_folder).with_context(|| {
                format!("could not create solution folder: {}", solution_folder.display())
            })?;
        }
        let input_stem = args
            .input_file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .context("input file has no valid name")?;

        let output = PackerOutput {
            outputs: ext_instances
                .into_iter()
                .zip(&outcomes)
                .filter_map(|(instance, outcome)| {
                    outcome.as_ref().ok().map(|solution| KPOutput {
                        instance,
                        solution: export(solution),
                    })
                })
                .collect(),
            config,
        };

        let solution_path = solution_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, &solution_path)?;
    }

    ensure!(
        n_rejected == 0,
        "{n_rejected} of {} instances violate the constraints",
        outcomes.len()
    );
    Ok(())
}
