//! Exact solver for the 0/1 Knapsack Problem (KP), based on the classic O(n·W) dynamic programming table.

/// Construction of the dynamic programming table and reconstruction of the optimal selection
pub mod dp;

/// Entities to model the 0/1 Knapsack Problem
pub mod entities;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
