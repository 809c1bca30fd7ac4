//! Candidate evaluation for the heuristic opponent
//!
//! - [`patterns`]: line score table
//! - [`heuristic`]: per-cell scoring over the four axes

pub mod heuristic;
pub mod patterns;

pub use heuristic::score_cell;
pub use patterns::{line_value, LineScore};
