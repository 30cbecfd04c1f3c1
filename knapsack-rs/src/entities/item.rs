use std::fmt::{Display, Formatter};

use crate::util::FixedPoint;

/// Item which can be selected at most once.
/// The derived ordering compares `(id, weight, value)` lexicographically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Item {
    pub id: u64,
    /// Weight in fixed-point units, see [`FixedPoint`]
    pub weight: u64,
    pub value: u64,
}

impl Item {
    pub fn new(id: u64, weight: u64, value: u64) -> Self {
        Self { id, weight, value }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{},€{})",
            self.id,
            FixedPoint(self.weight),
            self.value
        )
    }
}
