use std::cmp::max;

use log::debug;
use ndarray::{Array2, ArrayView1};
use thousands::Separable;

use crate::entities::Item;
use crate::util::assertions;

/// Memoization grid of the 0/1 knapsack recurrence, dimensions `(n + 1) x (capacity + 1)`.
/// Entry `[i][j]` is the maximum value achievable using only the first `i` items within weight budget `j`.
#[derive(Debug, Clone)]
pub struct DPTable {
    values: Array2<u64>,
}

impl DPTable {
    /// Number of items the table was built for (one less than the number of rows)
    pub fn n_items(&self) -> usize {
        self.values.nrows() - 1
    }

    /// Largest weight budget covered by the table
    pub fn capacity(&self) -> u64 {
        (self.values.ncols() - 1) as u64
    }

    pub fn value(&self, i: usize, j: u64) -> u64 {
        self.values[[i, j as usize]]
    }

    pub fn row(&self, i: usize) -> ArrayView1<'_, u64> {
        self.values.row(i)
    }

    /// Optimal value of the whole instance, `[n][capacity]`
    pub fn optimum(&self) -> u64 {
        self.value(self.n_items(), self.capacity())
    }
}

/// Builds the table for `items` (in the given order) and weight budgets `0..=capacity`.
/// The sum of all item values has to fit in a `u64`, every entry is bounded by it.
pub fn build_table(capacity: u64, items: &[Item]) -> DPTable {
    assert!(
        assertions::total_value_fits(items),
        "total value of the items overflows u64"
    );

    let width = capacity as usize + 1;
    let mut values = Array2::<u64>::zeros((items.len() + 1, width));

    for (i, item) in (1..).zip(items) {
        let weight = item.weight as usize;
        for j in 0..width {
            values[[i, j]] = match weight > j {
                // does not fit, best of the previous prefix carries over
                true => values[[i - 1, j]],
                // on ties the exclusion is kept
                false => max(values[[i - 1, j]], values[[i - 1, j - weight]] + item.value),
            };
        }
    }

    let table = DPTable { values };
    debug!(
        "[DP] built {}x{} table ({} cells), optimum: {}",
        items.len() + 1,
        width,
        (items.len() + 1).saturating_mul(width).separate_with_commas(),
        table.optimum()
    );
    debug_assert!(assertions::table_is_consistent(&table));

    table
}
