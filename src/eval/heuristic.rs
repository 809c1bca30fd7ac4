//! Single-cell heuristic: how much is occupying an empty cell worth?

use crate::board::{Board, Cell, Player, Pos, DIRECTIONS};

use super::patterns::line_value;

/// Score a hypothetical placement of `player` at the empty cell `pos`.
///
/// Sums the line value of each of the four axes through `pos`, counting
/// the placed stone itself. The board is not modified.
pub fn score_cell(board: &Board, pos: Pos, player: Player) -> i32 {
    debug_assert!(board.is_empty(pos), "scored cell must be empty");

    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| {
            let (back, back_open) = scan(board, pos, -dr, -dc, player);
            let (forward, forward_open) = scan(board, pos, dr, dc, player);
            let open_ends = u8::from(back_open) + u8::from(forward_open);
            line_value(1 + back + forward, open_ends)
        })
        .sum()
}

/// Walk from `pos` (exclusive) along `(dr, dc)` over `player` stones.
///
/// Returns the run length and whether the walk stopped on an in-bounds
/// empty cell. Stopping on the edge or an opposing stone is a closed end.
fn scan(board: &Board, pos: Pos, dr: i32, dc: i32, player: Player) -> (usize, bool) {
    let mut count = 0;
    let mut n = 1;
    while let Some(p) = pos.offset(dr, dc, n) {
        match board.get(p) {
            Cell::Stone(owner) if owner == player => count += 1,
            Cell::Empty => return (count, true),
            Cell::Stone(_) => return (count, false),
        }
        n += 1;
    }
    (count, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::LineScore;

    fn place(board: &mut Board, row: u8, col: u8, player: Player) {
        board.set(Pos::new(row, col), Cell::Stone(player));
    }

    #[test]
    fn test_isolated_stone_scores_zero() {
        let board = Board::new();
        assert_eq!(score_cell(&board, Pos::new(7, 7), Player::One), 0);
        assert_eq!(score_cell(&board, Pos::new(0, 0), Player::Two), 0);
    }

    #[test]
    fn test_completing_open_four_scores_five() {
        // Player one at (7,3)..(7,6) with (7,2) and (7,7) empty. The placed
        // stone counts, so (7,7) completes a five and outranks the open-four term.
        let mut board = Board::new();
        for c in 3..7 {
            place(&mut board, 7, c, Player::One);
        }
        let score = score_cell(&board, Pos::new(7, 7), Player::One);
        assert_eq!(score, LineScore::FIVE);
        assert!(score >= LineScore::OPEN_FOUR);
        assert_eq!(score_cell(&board, Pos::new(7, 2), Player::One), LineScore::FIVE);
    }

    #[test]
    fn test_open_four_term() {
        // Three stones with both ends open: the hypothetical fourth makes an open four
        let mut board = Board::new();
        for c in 3..6 {
            place(&mut board, 7, c, Player::One);
        }
        assert_eq!(score_cell(&board, Pos::new(7, 6), Player::One), LineScore::OPEN_FOUR);
        assert_eq!(score_cell(&board, Pos::new(7, 2), Player::One), LineScore::OPEN_FOUR);
    }

    #[test]
    fn test_closed_ends() {
        // Opponent at (7,2): the run through (7,5) is closed on one side
        let mut board = Board::new();
        place(&mut board, 7, 2, Player::Two);
        place(&mut board, 7, 3, Player::One);
        place(&mut board, 7, 4, Player::One);
        assert_eq!(score_cell(&board, Pos::new(7, 5), Player::One), LineScore::CLOSED_THREE);

        // Board edge closes the run as well
        let mut board = Board::new();
        place(&mut board, 0, 0, Player::One);
        assert_eq!(score_cell(&board, Pos::new(0, 1), Player::One), LineScore::CLOSED_TWO);
    }

    #[test]
    fn test_dead_line_scores_zero() {
        let mut board = Board::new();
        place(&mut board, 7, 2, Player::Two);
        for c in 3..6 {
            place(&mut board, 7, c, Player::One);
        }
        place(&mut board, 7, 7, Player::Two);
        assert_eq!(score_cell(&board, Pos::new(7, 6), Player::One), 0);
    }

    #[test]
    fn test_axes_sum() {
        // Open two horizontally and open two vertically through (7,7)
        let mut board = Board::new();
        place(&mut board, 7, 6, Player::Two);
        place(&mut board, 6, 7, Player::Two);
        assert_eq!(score_cell(&board, Pos::new(7, 7), Player::Two), 2 * LineScore::OPEN_TWO);
        // The same cell is worth nothing to the other player
        assert_eq!(score_cell(&board, Pos::new(7, 7), Player::One), 0);
    }
}
