use anyhow::{Context, Result};
use log::{error, info};
use rayon::prelude::*;

use crate::config::PackerConfig;
use crate::opt::dp_optimizer::DPOptimizer;
use knapsack_rs::entities::KPSolution;
use knapsack_rs::io::ext_repr::ExtKPInstance;
use knapsack_rs::io::import;

/// Imports and solves every instance, the outcomes are returned in the order of the instances.
/// An instance violating the constraints yields an error in its own slot, the others are still solved.
/// Instances are independent and solved in parallel if configured, each on its own table.
pub fn solve_all(ext_instances: &[ExtKPInstance], config: PackerConfig) -> Vec<Result<KPSolution>> {
    let solve_one = |ext_instance: &ExtKPInstance| -> Result<KPSolution> {
        let instance = import(ext_instance, &config.constraints).with_context(|| {
            format!("instance {} violates the constraints", ext_instance.name)
        })?;
        info!("[BATCH] solving instance {}", ext_instance.name);
        Ok(DPOptimizer::new(instance, config).solve())
    };

    let outcomes = match config.parallel {
        true => ext_instances.par_iter().map(solve_one).collect::<Vec<_>>(),
        false => ext_instances.iter().map(solve_one).collect::<Vec<_>>(),
    };

    let n_rejected = outcomes.iter().filter(|o| o.is_err()).count();
    match n_rejected {
        0 => info!("[BATCH] solved {} instances", outcomes.len()),
        _ => error!(
            "[BATCH] solved {} instances, rejected {}",
            outcomes.len() - n_rejected,
            n_rejected
        ),
    }
    outcomes
}
