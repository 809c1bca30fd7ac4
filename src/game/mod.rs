//! Game flow: move validation, win/draw detection, undo and the
//! delayed heuristic opponent

pub mod scheduler;
pub mod state;


pub use scheduler::{AiTask, TaskPoll};
pub use state::{GameMode, GameState, MoveRejected, Outcome, Settings, DEFAULT_AI_DELAY};
