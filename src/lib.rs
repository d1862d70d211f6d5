//! Name score calculator: reads comma-separated quoted names from a file,
//! sorts them and sums rank-weighted alphabet scores into a single total.

pub mod process;
pub mod types;
