/// Checks to verify the correctness of tables and solutions, used in `debug_assert!()` blocks
pub mod assertions;

/// Configuration of the limits imposed on instances and the enumeration order of their items
pub mod config;

/// Exact conversion between decimal quantities and fixed-point integers
pub mod fixed_point;

#[doc(inline)]
pub use config::{ItemOrder, KPConstraints};
#[doc(inline)]
pub use fixed_point::FixedPoint;
