//! Recursive equal-area partition search.
//!
//! Control flow: `search::plan_cuts` validates input, then recursively calls
//! `candidates::candidate_chords` (probe-line sweeps) →
//! `filter::filter_chords` (minimum-area feasibility) → `Polygon::split` →
//! itself on both sub-pieces, backtracking over candidate chords and over the
//! assignment of final-piece counts to each side. "No plan" is an ordinary
//! outcome, not an error.

mod candidates;
mod filter;
mod search;
mod types;

pub use candidates::candidate_chords;
pub use filter::filter_chords;
pub use search::plan_cuts;
pub use types::{ChordOracle, CutPlan, InteriorOracle, InvalidInput, OracleError, SearchCfg};

#[cfg(test)]
mod tests;
