mod export;
mod import;

/// External (serializable) representations of all knapsack related entities.
pub mod ext_repr;

/// Parsing of the textual `capacity : (id,weight,€value) ...` row format.
pub mod parser;

/// Exports a knapsack solution out of the library.
pub use export::export;

/// Imports a knapsack instance into the library.
pub use import::import;

#[doc(inline)]
pub use import::ConstraintViolation;
