//! Heuristic opponent
//!
//! A single-ply move selector. Every empty cell is scored twice with
//! [`score_cell`]: once for the engine's own stones (offense) and once for
//! the opponent's (defense). The two are combined into a priority that
//! favours offense by 10%, and the move is drawn uniformly from all cells
//! sharing the highest priority.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Cell, Player, Pos};
//!
//! let mut engine = AIEngine::with_seed(Player::Two, 7);
//! let mut board = Board::new();
//! board.set(Pos::new(7, 7), Cell::Stone(Player::One));
//!
//! let result = engine.get_move_with_stats(&board);
//! let pos = result.best_move.unwrap();
//! assert!(board.is_empty(pos));
//! ```

use crate::board::{Board, Player, Pos};
use crate::eval::score_cell;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::Instant;
use tracing::debug;

/// Player the heuristic opponent controls
pub const AI_PLAYER: Player = Player::Two;

/// Combine offense and defense into a priority, in tenths.
///
/// `offense * 1.1 + defense` scaled by ten so that ties stay exact.
#[inline]
pub fn priority(offense: i32, defense: i32) -> i32 {
    offense * 11 + defense * 10
}

/// Result of a move selection with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen move, `None` when the board is full
    pub best_move: Option<Pos>,
    /// Priority of the chosen move (tenths, see [`priority`])
    pub priority: i32,
    /// Offense score of the chosen move
    pub offense: i32,
    /// Defense score of the chosen move
    pub defense: i32,
    /// Number of cells sharing the best priority
    pub candidates: usize,
    /// Number of empty cells scored
    pub scanned: usize,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    /// Result for a full board
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            priority: 0,
            offense: 0,
            defense: 0,
            candidates: 0,
            scanned: 0,
            time_ms,
        }
    }
}

/// Single-ply heuristic engine for Gomoku.
///
/// Randomness comes from an owned [`StdRng`], so a fixed seed yields a
/// reproducible sequence of choices.
pub struct AIEngine {
    player: Player,
    rng: StdRng,
}

impl AIEngine {
    /// Engine playing `player`, seeded from OS entropy.
    #[must_use]
    pub fn new(player: Player) -> Self {
        Self::with_rng(player, StdRng::from_entropy())
    }

    /// Engine with a fixed seed.
    #[must_use]
    pub fn with_seed(player: Player, seed: u64) -> Self {
        Self::with_rng(player, StdRng::seed_from_u64(seed))
    }

    /// Engine with an explicit random source.
    #[must_use]
    pub fn with_rng(player: Player, rng: StdRng) -> Self {
        Self { player, rng }
    }

    /// Player this engine moves for
    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Pick a move. Returns `None` only when the board is full.
    pub fn get_move(&mut self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Pick a move and report how it was chosen.
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let opponent = self.player.opponent();

        let mut best_priority = i32::MIN;
        let mut best: Vec<(Pos, i32, i32)> = Vec::new();
        let mut scanned = 0;

        for pos in board.empty_cells() {
            scanned += 1;
            let offense = score_cell(board, pos, self.player);
            let defense = score_cell(board, pos, opponent);
            let p = priority(offense, defense);

            if p > best_priority {
                best_priority = p;
                best.clear();
                best.push((pos, offense, defense));
            } else if p == best_priority {
                best.push((pos, offense, defense));
            }
        }

        let time_ms = start.elapsed().as_millis() as u64;
        let Some(&(pos, offense, defense)) = best.choose(&mut self.rng) else {
            return MoveResult::no_move(time_ms);
        };

        debug!(
            player = self.player.number(),
            row = pos.row,
            col = pos.col,
            priority = best_priority,
            ties = best.len(),
            "heuristic move selected"
        );

        MoveResult {
            best_move: Some(pos),
            priority: best_priority,
            offense,
            defense,
            candidates: best.len(),
            scanned,
            time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, TOTAL_CELLS};
    use crate::eval::LineScore;
    use std::collections::HashSet;

    fn place(board: &mut Board, row: u8, col: u8, player: Player) {
        board.set(Pos::new(row, col), Cell::Stone(player));
    }

    #[test]
    fn test_priority_offense_bias() {
        assert_eq!(priority(100, 0), 1_100);
        assert_eq!(priority(0, 100), 1_000);
        assert!(priority(1_000, 0) > priority(0, 1_000));
    }

    #[test]
    fn test_empty_board_all_cells_tie() {
        let mut engine = AIEngine::with_seed(AI_PLAYER, 1);
        let result = engine.get_move_with_stats(&Board::new());

        assert!(result.best_move.is_some());
        assert_eq!(result.priority, 0);
        assert_eq!(result.candidates, TOTAL_CELLS);
        assert_eq!(result.scanned, TOTAL_CELLS);
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS {
            board.set(Pos::from_index(idx), Cell::Stone(Player::One));
        }
        let mut engine = AIEngine::with_seed(AI_PLAYER, 1);
        let result = engine.get_move_with_stats(&board);
        assert_eq!(result.best_move, None);
        assert_eq!(result.candidates, 0);
    }

    #[test]
    fn test_single_empty_cell_is_chosen() {
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS - 1 {
            let player = if idx % 3 == 0 { Player::One } else { Player::Two };
            board.set(Pos::from_index(idx), player.into());
        }
        let mut engine = AIEngine::with_seed(AI_PLAYER, 3);
        assert_eq!(engine.get_move(&board), Some(Pos::new(14, 14)));
    }

    #[test]
    fn test_same_seed_same_choice() {
        let mut board = Board::new();
        place(&mut board, 7, 7, Player::One);

        let mut a = AIEngine::with_seed(AI_PLAYER, 42);
        let mut b = AIEngine::with_seed(AI_PLAYER, 42);
        for _ in 0..5 {
            assert_eq!(a.get_move(&board), b.get_move(&board));
        }
    }

    #[test]
    fn test_tie_break_varies_with_seed() {
        let board = Board::new();
        let picks: HashSet<Pos> = (0..20)
            .filter_map(|seed| AIEngine::with_seed(AI_PLAYER, seed).get_move(&board))
            .collect();
        assert!(picks.len() > 1);
    }

    #[test]
    fn test_blocks_open_four() {
        let mut board = Board::new();
        for c in 3..7 {
            place(&mut board, 7, c, Player::One);
        }
        let mut engine = AIEngine::with_seed(AI_PLAYER, 9);
        let result = engine.get_move_with_stats(&board);

        let pos = result.best_move.unwrap();
        assert!(pos == Pos::new(7, 2) || pos == Pos::new(7, 7));
        assert_eq!(result.defense, LineScore::FIVE);
        assert_eq!(result.candidates, 2);
    }

    #[test]
    fn test_prefers_own_win_over_block() {
        let mut board = Board::new();
        for c in 3..7 {
            place(&mut board, 9, c, Player::One);
            place(&mut board, 3, c, Player::Two);
        }
        let mut engine = AIEngine::with_seed(AI_PLAYER, 5);
        let pos = engine.get_move(&board).unwrap();
        assert!(pos == Pos::new(3, 2) || pos == Pos::new(3, 7));
    }

    #[test]
    fn test_offense_bias_breaks_equal_threats() {
        // Both sides hold an open three; extending our own beats blocking
        let mut board = Board::new();
        for c in 2..5 {
            place(&mut board, 2, c, Player::Two);
            place(&mut board, 10, c, Player::One);
        }
        let mut engine = AIEngine::with_seed(AI_PLAYER, 11);
        let result = engine.get_move_with_stats(&board);

        let pos = result.best_move.unwrap();
        assert!(pos == Pos::new(2, 1) || pos == Pos::new(2, 5));
        assert_eq!(result.offense, LineScore::OPEN_FOUR);
    }

    #[test]
    fn test_never_picks_occupied_cell() {
        let mut board = Board::new();
        let mut engine = AIEngine::with_seed(AI_PLAYER, 2024);
        let mut player = Player::One;

        while let Some(pos) = engine.get_move(&board) {
            assert!(board.is_empty(pos));
            board.set(pos, player.into());
            player = player.opponent();
        }
        assert!(board.is_full());
    }
}
