//! GUI module for the Gomoku game
//!
//! A thin egui/eframe front end. All game logic lives in [`crate::game`];
//! this module only forwards input and renders state.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
