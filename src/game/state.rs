//! Game state machine
//!
//! [`GameState`] is the single authority over a game: it validates and
//! applies moves, detects wins and draws, keeps the undo history and the
//! score tally, and drives the heuristic opponent in human-vs-AI mode.

use crate::board::{Board, Cell, Player, Pos};
use crate::engine::{MoveResult, AI_PLAYER};
use crate::rules::{find_five_line_at_pos, has_five_at_pos};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, trace, warn};

use super::scheduler::{AiTask, TaskPoll};

/// Pacing delay before the opponent answers
pub const DEFAULT_AI_DELAY: Duration = Duration::from_millis(500);

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Two humans sharing the board (hotseat)
    TwoHuman,
    /// Human plays [`Player::One`], the heuristic plays [`AI_PLAYER`]
    #[default]
    HumanVsAi,
}

/// Current result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Won(Player),
    Draw,
}

impl Outcome {
    /// Won or drawn: no further moves until restart
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Why an input was ignored.
///
/// Rejections leave the state untouched. They are reported so callers can
/// trace them; none of them needs handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejected {
    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },
    #[error("the game is over")]
    GameOver,
    #[error("the opponent is about to move")]
    AiPending,
    #[error("it is not the human player's turn")]
    NotYourTurn,
}

/// Game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Delay before the heuristic opponent moves
    pub ai_delay: Duration,
    /// Fixed seed for reproducible play; `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// Mode for the first game
    pub mode: GameMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ai_delay: DEFAULT_AI_DELAY,
            seed: None,
            mode: GameMode::default(),
        }
    }
}

/// One applied move, with what is needed to take it back
#[derive(Debug, Clone, Copy)]
struct HistoryEntry {
    /// Board before the move
    board: Board,
    /// Who moved
    mover: Player,
    /// Where
    pos: Pos,
}

/// Main game state
pub struct GameState {
    board: Board,
    mode: GameMode,
    current_turn: Player,
    outcome: Outcome,
    history: Vec<HistoryEntry>,
    scores: [u32; 2],
    winning_line: Option<Vec<Pos>>,
    ai_task: Option<AiTask>,
    last_ai_result: Option<MoveResult>,
    ai_delay: Duration,
    rng: StdRng,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl GameState {
    pub fn new(settings: Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut state = Self {
            board: Board::new(),
            mode: settings.mode,
            current_turn: Player::One,
            outcome: Outcome::InProgress,
            history: Vec::new(),
            scores: [0; 2],
            winning_line: None,
            ai_task: None,
            last_ai_result: None,
            ai_delay: settings.ai_delay,
            rng,
        };
        state.schedule_ai_if_needed();
        state
    }

    // ---- Inbound -------------------------------------------------------

    /// Human move attempt at `(row, col)`
    pub fn select_cell(&mut self, row: usize, col: usize) -> Result<Outcome, MoveRejected> {
        let Some(pos) = Pos::checked(row, col) else {
            return self.reject(MoveRejected::OutOfBounds { row, col });
        };
        if self.is_ai_pending() {
            return self.reject(MoveRejected::AiPending);
        }
        if self.outcome.is_terminal() {
            return self.reject(MoveRejected::GameOver);
        }
        if self.is_ai_turn() {
            return self.reject(MoveRejected::NotYourTurn);
        }
        self.apply_move(pos)
    }

    /// Undo back to the human's turn.
    ///
    /// In human-vs-AI mode this takes back the opponent's reply together
    /// with the human move before it, one history entry at a time. In
    /// two-human mode it is a single [`undo`](Self::undo).
    pub fn request_undo(&mut self) -> bool {
        if !self.can_undo() {
            trace!("undo ignored");
            return false;
        }
        self.cancel_ai();
        self.step_back();
        if self.is_ai_turn() && self.can_undo() {
            self.step_back();
        }
        self.schedule_ai_if_needed();
        true
    }

    /// Start a new round in the current mode
    pub fn request_restart(&mut self) {
        self.restart();
    }

    /// Switch mode; always starts a new round
    pub fn set_mode(&mut self, mode: GameMode) {
        info!(?mode, "mode changed");
        self.mode = mode;
        self.restart();
    }

    // ---- Move engine ---------------------------------------------------

    /// Apply a move for the player to move.
    ///
    /// Ignored (state untouched) when the cell is taken, the game is over,
    /// or an opponent move is pending.
    pub fn apply_move(&mut self, pos: Pos) -> Result<Outcome, MoveRejected> {
        if self.outcome.is_terminal() {
            return self.reject(MoveRejected::GameOver);
        }
        if self.is_ai_pending() {
            return self.reject(MoveRejected::AiPending);
        }
        if !self.board.is_empty(pos) {
            return self.reject(MoveRejected::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }

        let mover = self.current_turn;
        self.history.push(HistoryEntry {
            board: self.board,
            mover,
            pos,
        });
        self.board.set(pos, Cell::Stone(mover));
        debug!(player = mover.number(), row = pos.row, col = pos.col, "move applied");

        if has_five_at_pos(&self.board, pos, mover) {
            self.outcome = Outcome::Won(mover);
            self.scores[Self::slot(mover)] += 1;
            self.winning_line = find_five_line_at_pos(&self.board, pos, mover);
            info!(player = mover.number(), score = self.score(mover), "five in a row");
        } else if self.board.is_full() {
            self.outcome = Outcome::Draw;
            info!("board full, draw");
        } else {
            self.current_turn = mover.opponent();
            self.schedule_ai_if_needed();
        }

        Ok(self.outcome)
    }

    /// Take back exactly one move.
    ///
    /// Ignored when there is nothing to undo or the game is over. Cancels a
    /// pending opponent move; reschedules it if the opponent is to move
    /// afterwards.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            trace!("undo ignored");
            return false;
        }
        self.cancel_ai();
        self.step_back();
        self.schedule_ai_if_needed();
        true
    }

    /// Fresh board, player one to move. Scores are kept.
    pub fn restart(&mut self) {
        self.cancel_ai();
        self.board = Board::new();
        self.current_turn = Player::One;
        self.outcome = Outcome::InProgress;
        self.history.clear();
        self.winning_line = None;
        self.last_ai_result = None;
        info!(mode = ?self.mode, "new round");
        self.schedule_ai_if_needed();
    }

    /// Clear the score tally
    pub fn reset_scores(&mut self) {
        self.scores = [0; 2];
    }

    fn step_back(&mut self) {
        if let Some(entry) = self.history.pop() {
            self.board = entry.board;
            self.current_turn = entry.mover;
            debug!(player = entry.mover.number(), row = entry.pos.row, col = entry.pos.col, "move undone");
        }
    }

    fn reject(&self, reason: MoveRejected) -> Result<Outcome, MoveRejected> {
        trace!(%reason, "input ignored");
        Err(reason)
    }

    #[inline]
    fn slot(player: Player) -> usize {
        match player {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    // ---- Opponent ------------------------------------------------------

    fn schedule_ai_if_needed(&mut self) {
        if !self.is_ai_turn() || self.is_ai_pending() || self.outcome.is_terminal() {
            return;
        }
        let seed = self.rng.gen::<u64>();
        self.ai_task = Some(AiTask::spawn(self.board, self.current_turn, seed, self.ai_delay));
        trace!(delay_ms = self.ai_delay.as_millis() as u64, "opponent move scheduled");
    }

    fn cancel_ai(&mut self) {
        if self.ai_task.take().is_some() {
            debug!("pending opponent move cancelled");
        }
    }

    /// Apply the opponent's move if it is ready. Call once per frame.
    ///
    /// Returns the applied move.
    pub fn poll_ai(&mut self) -> Option<Pos> {
        let poll = self.ai_task.as_ref()?.try_result();
        self.finish_ai(poll)
    }

    /// Block until the pending opponent move is applied.
    ///
    /// Returns `None` if nothing was pending.
    pub fn wait_for_ai(&mut self) -> Option<Pos> {
        let poll = self.ai_task.as_ref()?.wait();
        self.finish_ai(poll)
    }

    fn finish_ai(&mut self, poll: TaskPoll) -> Option<Pos> {
        let result = match poll {
            TaskPoll::Pending => return None,
            TaskPoll::Ready(result) => result,
            TaskPoll::Lost => {
                warn!("opponent worker exited without a move, rescheduling");
                self.ai_task = None;
                self.schedule_ai_if_needed();
                return None;
            }
        };

        let task = self.ai_task.take()?;
        if self.outcome.is_terminal() || !self.is_ai_turn() || task.player() != self.current_turn {
            debug!("stale opponent move discarded");
            return None;
        }

        let pos = result.best_move;
        self.last_ai_result = Some(result);
        let pos = pos?;
        self.apply_move(pos).ok().map(|_| pos)
    }

    // ---- Outbound ------------------------------------------------------

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_turn
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Rounds won by `player` since the last score reset
    #[inline]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[Self::slot(player)]
    }

    /// True while an opponent move is scheduled and not yet applied
    #[inline]
    pub fn is_ai_pending(&self) -> bool {
        self.ai_task.is_some()
    }

    /// Whether the heuristic is to move
    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::HumanVsAi && self.current_turn == AI_PLAYER
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty() && !self.outcome.is_terminal()
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|entry| entry.pos)
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    /// Time the pending opponent move has been waiting
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        self.ai_task.as_ref().map(AiTask::elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lost_worker_is_rescheduled() {
        let mut game = GameState::new(Settings {
            ai_delay: Duration::ZERO,
            seed: Some(3),
            mode: GameMode::HumanVsAi,
        });
        game.select_cell(7, 7).unwrap();
        game.ai_task = Some(AiTask::lost(AI_PLAYER));

        assert_eq!(game.poll_ai(), None);
        assert!(game.is_ai_pending());
        assert!(game.is_ai_turn());

        let reply = game.wait_for_ai().unwrap();
        assert_eq!(game.board().get(reply), Cell::Stone(AI_PLAYER));
        assert_eq!(game.current_player(), Player::One);
        assert!(!game.is_ai_pending());
    }
}
