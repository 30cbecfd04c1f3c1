use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::entities::Item;

/// Rendering of a solution in which no item was selected
pub const EMPTY_SELECTION_SYMBOL: &str = "-";

/// Items selected by a completed solve, sorted by id.
/// Totals are summed over the selection, not read from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KPSolution {
    items: Vec<Item>,
    total_weight: u64,
    total_value: u64,
}

impl KPSolution {
    pub fn new(mut items: Vec<Item>) -> Self {
        items.sort();
        let total_weight = items.iter().map(|item| item.weight).sum();
        let total_value = items.iter().map(|item| item.value).sum();
        Self {
            items,
            total_weight,
            total_value,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.items.iter().map(|item| item.id)
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    /// True if the solve completed without selecting anything
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn total_value(&self) -> u64 {
        self.total_value
    }
}

impl Display for KPSolution {
    /// Comma-joined ids, or [`EMPTY_SELECTION_SYMBOL`] if nothing was selected
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.is_empty() {
            true => f.write_str(EMPTY_SELECTION_SYMBOL),
            false => write!(f, "{}", self.item_ids().join(",")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_by_id_with_totals() {
        let solution = KPSolution::new(vec![Item::new(3, 3000, 100), Item::new(2, 2000, 100)]);
        assert_eq!(solution.item_ids().collect_vec(), vec![2, 3]);
        assert_eq!(solution.total_weight(), 5000);
        assert_eq!(solution.total_value(), 200);
        assert_eq!(solution.to_string(), "2,3");
    }

    #[test]
    fn empty_selection_renders_placeholder() {
        let solution = KPSolution::new(vec![]);
        assert!(solution.is_empty());
        assert_eq!(solution.total_value(), 0);
        assert_eq!(solution.to_string(), EMPTY_SELECTION_SYMBOL);
    }
}
