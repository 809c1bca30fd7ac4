//! Gomoku (connect five) game engine
//!
//! A freestyle Gomoku implementation:
//! - Fixed 15x15 board
//! - 5-in-a-row to win (overlines allowed)
//! - Draw when the board fills up without a five
//! - Single-step undo and a per-player score tally across rounds
//! - Optional heuristic opponent playing the second player
//!
//! # Architecture
//!
//! - [`board`]: Board grid, players and positions
//! - [`rules`]: Win detection at the last move
//! - [`eval`]: Line scoring for candidate cells
//! - [`engine`]: Single-ply heuristic move selector
//! - [`game`]: Game state machine and the delayed opponent task
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameMode, GameState, Outcome, Player, Settings};
//! use std::time::Duration;
//!
//! let mut game = GameState::new(Settings {
//!     ai_delay: Duration::ZERO,
//!     seed: Some(42),
//!     mode: GameMode::HumanVsAi,
//! });
//!
//! assert_eq!(game.select_cell(7, 7), Ok(Outcome::InProgress));
//!
//! // The opponent answers after its delay
//! let reply = game.wait_for_ai().unwrap();
//! println!("AI plays at ({}, {})", reply.row, reply.col);
//! assert_eq!(game.current_player(), Player::One);
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult, AI_PLAYER};
pub use game::{GameMode, GameState, MoveRejected, Outcome, Settings};
