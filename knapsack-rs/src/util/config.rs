use serde::{Deserialize, Serialize};

/// Limits an instance has to respect before it is handed to the solver.
/// Weights and capacity in fixed-point units, see [`FixedPoint`](crate::util::FixedPoint).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct KPConstraints {
    /// Maximum capacity of the knapsack
    pub max_capacity: u64,
    /// Maximum number of items in a single instance
    pub max_n_items: usize,
    /// Maximum weight of a single item
    pub max_item_weight: u64,
    /// Maximum value of a single item
    pub max_item_value: u64,
}

impl Default for KPConstraints {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            max_n_items: 15,
            max_item_weight: 10_000,
            max_item_value: 100,
        }
    }
}

/// Order in which the solver enumerates the items of an instance.
/// Only affects which optimal selection is returned when several exist.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ItemOrder {
    /// Keep the order of the input
    #[default]
    AsGiven,
    /// Ascending id
    ById,
    /// Ascending weight, then value, then id
    ByWeightValueId,
}
