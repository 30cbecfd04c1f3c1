use crate::dp;
use crate::entities::{KPInstance, KPSolution};

/// Pairs a [`KPInstance`] with the outcome of solving it.
/// Distinguishes "not solved yet" (`None`) from "solved, nothing fits" (an empty [`KPSolution`]).
#[derive(Debug, Clone)]
pub struct KPProblem {
    pub instance: KPInstance,
    solution: Option<KPSolution>,
}

impl KPProblem {
    pub fn new(instance: KPInstance) -> Self {
        Self {
            instance,
            solution: None,
        }
    }

    /// Solves the instance exactly, replacing any earlier solution
    pub fn solve(&mut self) -> &KPSolution {
        let solution = dp::solve(&self.instance);
        self.solution.insert(solution)
    }

    pub fn solution(&self) -> Option<&KPSolution> {
        self.solution.as_ref()
    }

    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    pub fn into_solution(self) -> Option<KPSolution> {
        self.solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Item;

    #[test]
    fn unsolved_differs_from_empty_solution() {
        let instance = KPInstance::new(800, vec![Item::new(1, 1530, 34)]);
        let mut problem = KPProblem::new(instance);
        assert!(!problem.is_solved());
        assert_eq!(problem.solution(), None);

        let solution = problem.solve();
        assert!(solution.is_empty());
        assert!(problem.is_solved());
        assert_eq!(problem.into_solution(), Some(KPSolution::new(vec![])));
    }
}
