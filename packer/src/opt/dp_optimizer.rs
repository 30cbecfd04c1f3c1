use std::time::Instant;

use log::info;

use crate::config::PackerConfig;
use knapsack_rs::entities::{KPInstance, KPProblem, KPSolution};
use knapsack_rs::util::FixedPoint;

/// Exact optimizer for a single 0/1 knapsack instance.
/// Every call of [`DPOptimizer::solve`] builds its own table and drops it afterwards.
pub struct DPOptimizer {
    pub instance: KPInstance,
    pub problem: KPProblem,
    pub config: PackerConfig,
}

impl DPOptimizer {
    pub fn new(instance: KPInstance, config: PackerConfig) -> Self {
        let instance = instance.ordered(config.item_order);
        let problem = KPProblem::new(instance.clone());
        Self {
            instance,
            problem,
            config,
        }
    }

    pub fn solve(&mut self) -> KPSolution {
        let start = Instant::now();

        let solution = self.problem.solve().clone();

        info!(
            "[DP] selected {}/{} items (weight {}/{}, value {}) in {:.3}ms",
            solution.n_items(),
            self.instance.n_items(),
            FixedPoint(solution.total_weight()),
            FixedPoint(self.instance.capacity()),
            solution.total_value(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knapsack_rs::entities::Item;

    #[test]
    fn problem_is_solved_after_solve() {
        let instance = KPInstance::new(800, vec![Item::new(1, 1530, 34)]);
        let mut optimizer = DPOptimizer::new(instance, PackerConfig::default());
        assert!(!optimizer.problem.is_solved());

        let solution = optimizer.solve();
        assert!(solution.is_empty());
        assert_eq!(optimizer.problem.solution(), Some(&solution));
    }
}
