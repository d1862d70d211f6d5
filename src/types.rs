//! Global type definitions.

/// A single name token taken from the input file, quotes already stripped.
/// May be empty if the input contains stray commas.
pub type Name = String;

/// The full list of names from one input file, sorted in place before scoring.
pub type Names = Vec<Name>;

/// Scores are signed and 64-bit wide: non-alphabetic characters contribute
/// negative values, and the rank-weighted total must not silently wrap.
pub type Score = i64;
