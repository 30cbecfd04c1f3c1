use log::trace;

use crate::dp::DPTable;
use crate::entities::{Item, KPSolution};

/// Walks the table backward from `[n][capacity]` and collects the items of an optimal selection.
///
/// Item `i` is taken whenever it fits the remaining budget `j` and `[i][j] - [i-1][j - weight(i)]`
/// equals its value, so on ties the item with the higher index is retained.
/// `items` must be the slice (in the same order) the table was built from and
/// `capacity` may not exceed the capacity of the table.
pub fn reconstruct_selection(table: &DPTable, items: &[Item], capacity: u64) -> KPSolution {
    assert_eq!(
        table.n_items(),
        items.len(),
        "table was built for a different item list"
    );
    assert!(
        capacity <= table.capacity(),
        "capacity {} exceeds the table ({})",
        capacity,
        table.capacity()
    );

    let mut selected = vec![];
    let mut i = items.len();
    let mut j = capacity;

    while i > 0 {
        let item = &items[i - 1];
        // [i][j] >= [i-1][j - weight] + value whenever the item fits, the difference cannot underflow
        if item.weight <= j && table.value(i, j) - table.value(i - 1, j - item.weight) == item.value {
            trace!("[DP] item {} selected at budget {}", item.id, j);
            selected.push(*item);
            i -= 1;
            j -= items[i].weight;
        } else {
            i -= 1;
        }
    }

    KPSolution::new(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dp::build_table;
    use itertools::Itertools;

    fn selected_ids(capacity: u64, items: &[Item]) -> Vec<u64> {
        let table = build_table(capacity, items);
        reconstruct_selection(&table, items, capacity)
            .item_ids()
            .collect_vec()
    }

    #[test]
    fn classic_instance() {
        let items = [Item::new(1, 1000, 60), Item::new(2, 2000, 100), Item::new(3, 3000, 100)];
        assert_eq!(selected_ids(5000, &items), vec![2, 3]);
    }

    #[test]
    fn nothing_fits() {
        assert_eq!(selected_ids(800, &[Item::new(1, 1530, 34)]), Vec::<u64>::new());
    }

    #[test]
    fn ties_prefer_later_items() {
        let items = [Item::new(1, 3, 5), Item::new(2, 3, 5), Item::new(3, 6, 10)];
        assert_eq!(selected_ids(6, &items), vec![3]);

        let items = [Item::new(1, 5, 10), Item::new(2, 5, 10), Item::new(3, 5, 10)];
        assert_eq!(selected_ids(10, &items), vec![2, 3]);
    }

    #[test]
    fn smaller_budget_than_table() {
        let items = [Item::new(1, 1000, 60), Item::new(2, 2000, 100), Item::new(3, 3000, 100)];
        let table = build_table(5000, &items);
        let solution = reconstruct_selection(&table, &items, 3000);
        assert_eq!(solution.item_ids().collect_vec(), vec![1, 2]);
        assert_eq!(solution.total_value(), table.value(3, 3000));
    }

    #[test]
    #[should_panic(expected = "different item list")]
    fn mismatched_items() {
        let table = build_table(10, &[Item::new(1, 1, 1)]);
        reconstruct_selection(&table, &[], 10);
    }
}
