use serde::{Deserialize, Serialize};

use knapsack_rs::util::{ItemOrder, KPConstraints};

/// Configuration for the packer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PackerConfig {
    /// Limits every instance has to respect, instances violating them are rejected before solving
    pub constraints: KPConstraints,
    /// Order in which the items of an instance are enumerated by the solver
    pub item_order: ItemOrder,
    /// Solve the instances of an input file in parallel
    pub parallel: bool,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            constraints: KPConstraints::default(),
            item_order: ItemOrder::AsGiven,
            parallel: true,
        }
    }
}
