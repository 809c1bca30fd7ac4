//! Delayed, cancellable opponent move
//!
//! The heuristic opponent does not answer synchronously. An [`AiTask`]
//! sleeps for a short pacing delay on a worker thread, computes its move on
//! a snapshot of the board and sends the result back over a channel. The
//! owner polls the handle; dropping it cancels the task.

use crate::board::{Board, Player};
use crate::engine::{AIEngine, MoveResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::trace;

/// State of a pending task when polled
#[derive(Debug)]
pub enum TaskPoll {
    /// Still sleeping or computing
    Pending,
    /// Move computed
    Ready(MoveResult),
    /// Worker went away without a result
    Lost,
}

/// Handle to a scheduled opponent move.
pub struct AiTask {
    player: Player,
    receiver: Receiver<MoveResult>,
    cancelled: Arc<AtomicBool>,
    start_time: Instant,
}

impl AiTask {
    /// Schedule a move for `player` on `board`, to be computed after `delay`.
    ///
    /// `seed` drives the engine's tie-break so that a seeded game replays
    /// identically.
    pub fn spawn(board: Board, player: Player, seed: u64, delay: Duration) -> Self {
        let (tx, rx) = channel();
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        thread::spawn(move || {
            thread::sleep(delay);
            if flag.load(Ordering::Acquire) {
                trace!("opponent task cancelled before computing");
                return;
            }
            let result = AIEngine::with_seed(player, seed).get_move_with_stats(&board);
            // Receiver is gone if the task was cancelled meanwhile
            let _ = tx.send(result);
        });

        Self {
            player,
            receiver: rx,
            cancelled,
            start_time: Instant::now(),
        }
    }

    /// Handle whose worker has already gone away
    #[cfg(test)]
    pub(crate) fn lost(player: Player) -> Self {
        let (tx, rx) = channel();
        drop(tx);
        Self {
            player,
            receiver: rx,
            cancelled: Arc::new(AtomicBool::new(false)),
            start_time: Instant::now(),
        }
    }

    /// Player the task is moving for
    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Time since the task was scheduled
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Non-blocking check for the result
    pub fn try_result(&self) -> TaskPoll {
        match self.receiver.try_recv() {
            Ok(result) => TaskPoll::Ready(result),
            Err(TryRecvError::Empty) => TaskPoll::Pending,
            Err(TryRecvError::Disconnected) => TaskPoll::Lost,
        }
    }

    /// Block until the result arrives
    pub fn wait(&self) -> TaskPoll {
        match self.receiver.recv() {
            Ok(result) => TaskPoll::Ready(result),
            Err(_) => TaskPoll::Lost,
        }
    }
}

impl Drop for AiTask {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Pos};

    #[test]
    fn test_task_delivers_move() {
        let mut board = Board::new();
        board.set(Pos::new(7, 7), Cell::Stone(Player::One));

        let task = AiTask::spawn(board, Player::Two, 1, Duration::ZERO);
        match task.wait() {
            TaskPoll::Ready(result) => {
                let pos = result.best_move.unwrap();
                assert!(board.is_empty(pos));
            }
            other => panic!("expected a move, got {other:?}"),
        }
    }

    #[test]
    fn test_task_is_pending_during_delay() {
        let task = AiTask::spawn(Board::new(), Player::Two, 1, Duration::from_millis(300));
        assert!(matches!(task.try_result(), TaskPoll::Pending));
        assert_eq!(task.player(), Player::Two);
    }

    #[test]
    fn test_lost_task_reports_lost() {
        let task = AiTask::lost(Player::Two);
        assert!(matches!(task.try_result(), TaskPoll::Lost));
        assert!(matches!(task.wait(), TaskPoll::Lost));
    }

    #[test]
    fn test_same_seed_same_move() {
        let a = AiTask::spawn(Board::new(), Player::Two, 99, Duration::ZERO);
        let b = AiTask::spawn(Board::new(), Player::Two, 99, Duration::ZERO);
        let pick = |t: &AiTask| match t.wait() {
            TaskPoll::Ready(r) => r.best_move,
            _ => None,
        };
        assert_eq!(pick(&a), pick(&b));
    }
}
