use crate::entities::KPSolution;
use crate::io::ext_repr::ExtKPSolution;

/// Exports a solution out of the library
pub fn export(solution: &KPSolution) -> ExtKPSolution {
    ExtKPSolution {
        item_ids: solution.item_ids().collect(),
        total_weight: solution.total_weight(),
        total_value: solution.total_value(),
        selection: solution.to_string(),
    }
}
