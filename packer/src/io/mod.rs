use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;

use crate::EPOCH;
use knapsack_rs::io::ext_repr::ExtKPInstance;
use knapsack_rs::io::parser;

pub mod cli;
pub mod output;

/// Reads all instances from a file: a JSON list of [`ExtKPInstance`]s if the extension is `json`,
/// otherwise one `capacity : (id,weight,€value) ...` row per line.
pub fn read_instances(path: &Path) -> Result<Vec<ExtKPInstance>> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => {
            let file = File::open(path)
                .with_context(|| format!("could not open instance file: {}", path.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader)
                .with_context(|| format!("could not parse instance file: {}", path.display()))
        }
        _ => {
            let input = fs::read_to_string(path)
                .with_context(|| format!("could not open instance file: {}", path.display()))?;
            parser::parse_rows(&input)
                .with_context(|| format!("could not parse instance file: {}", path.display()))
        }
    }
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!(
        "[IO] solution written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

/// Logs to stderr, stdout is reserved for the solutions
pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stderr())
        .apply()?;
    info!("[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}
