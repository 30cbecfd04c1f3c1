use itertools::Itertools;
use log::error;

use crate::dp::DPTable;
use crate::entities::{Item, KPSolution};

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn item_ids_unique(items: &[Item]) -> bool {
    items.iter().map(|item| item.id).all_unique()
}

pub fn total_value_fits(items: &[Item]) -> bool {
    items
        .iter()
        .try_fold(0u64, |acc, item| acc.checked_add(item.value))
        .is_some()
}

/// Row 0 is zero, rows are non-decreasing in the budget and columns non-decreasing in the item prefix.
pub fn table_is_consistent(table: &DPTable) -> bool {
    if table.row(0).iter().any(|&v| v != 0) {
        error!("[DP] first row of table is not zero");
        return false;
    }
    for i in 0..=table.n_items() {
        let row = table.row(i);
        if row.iter().tuple_windows().any(|(a, b)| a > b) {
            error!("[DP] row {i} of table is not monotone");
            return false;
        }
        if i > 0 && row.iter().zip(table.row(i - 1).iter()).any(|(cur, prev)| cur < prev) {
            error!("[DP] row {i} of table has a lower value than row {}", i - 1);
            return false;
        }
    }
    true
}

pub fn solution_matches_table(solution: &KPSolution, table: &DPTable, capacity: u64) -> bool {
    if solution.total_weight() > capacity {
        error!(
            "[DP] solution weight {} exceeds capacity {}",
            solution.total_weight(),
            capacity
        );
        return false;
    }
    if solution.total_value() != table.value(table.n_items(), capacity) {
        error!(
            "[DP] solution value {} differs from the table optimum {}",
            solution.total_value(),
            table.value(table.n_items(), capacity)
        );
        return false;
    }
    item_ids_unique(solution.items())
}
