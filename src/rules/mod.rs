//! Game rules for freestyle Gomoku
//!
//! Five or more in a row wins. There are no captures and no
//! forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{find_five_line_at_pos, has_five_at_pos};
