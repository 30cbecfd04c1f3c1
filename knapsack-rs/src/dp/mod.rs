mod reconstruct;
mod table;

#[doc(inline)]
pub use reconstruct::reconstruct_selection;
#[doc(inline)]
pub use table::DPTable;
#[doc(inline)]
pub use table::build_table;

use crate::entities::{KPInstance, KPSolution};
use crate::util::assertions;

/// Solves the instance exactly: builds the table, walks it back and drops it.
pub fn solve(instance: &KPInstance) -> KPSolution {
    let table = build_table(instance.capacity(), instance.items());
    let solution = reconstruct_selection(&table, instance.items(), instance.capacity());

    debug_assert!(assertions::solution_matches_table(
        &solution,
        &table,
        instance.capacity()
    ));

    solution
}
