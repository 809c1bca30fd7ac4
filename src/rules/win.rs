//! Win condition checking
//!
//! Five or more stones in a row wins; overlines count.
//! Only the axes through the stone just played are examined.

use crate::board::{Board, Cell, Player, Pos, DIRECTIONS, WIN_LENGTH};

/// Count consecutive `player` stones from `pos` along `(dr, dc)`,
/// excluding `pos` itself.
#[inline]
fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, player: Player) -> usize {
    (1..)
        .map_while(|n| pos.offset(dr, dc, n))
        .take_while(|&p| board.get(p) == Cell::Stone(player))
        .count()
}

/// Fast five-in-a-row check at a specific position.
///
/// Checks the 4 axes through `pos` only. No allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, player: Player) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + run_length(board, pos, dr, dc, player) + run_length(board, pos, -dr, -dc, player)
            >= WIN_LENGTH
    })
}

/// Find the full winning run through `pos`, ordered from one end to the other.
///
/// Returns `None` if no axis through `pos` holds five or more.
pub fn find_five_line_at_pos(board: &Board, pos: Pos, player: Player) -> Option<Vec<Pos>> {
    for &(dr, dc) in &DIRECTIONS {
        let back = run_length(board, pos, -dr, -dc, player) as i32;
        let forward = run_length(board, pos, dr, dc, player) as i32;

        if (1 + back + forward) as usize >= WIN_LENGTH {
            let line: Vec<Pos> = (-back..=forward)
                .filter_map(|n| pos.offset(dr, dc, n))
                .collect();
            return Some(line);
        }
    }
    None
}
