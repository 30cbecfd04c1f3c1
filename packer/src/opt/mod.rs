/// Solving of all instances of an input file
pub mod batch;

/// Dynamic programming optimizer for a single instance
pub mod dp_optimizer;
