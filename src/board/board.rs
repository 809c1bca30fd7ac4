//! Board structure: a fixed grid of cells

use super::{Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Game board.
///
/// `Copy` so that history snapshots and the opponent's working view are
/// plain value copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    /// Occupied cells, kept in step with `cells`
    filled: u16,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Overwrite a cell
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        let slot = &mut self.cells[pos.row as usize][pos.col as usize];
        match (*slot, cell) {
            (Cell::Empty, Cell::Stone(_)) => self.filled += 1,
            (Cell::Stone(_), Cell::Empty) => self.filled -= 1,
            _ => {}
        }
        *slot = cell;
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// True when no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled as usize == TOTAL_CELLS
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        u32::from(self.filled)
    }

    /// Check if board has no stones
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.filled == 0
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &cell)| (Pos::new(row as u8, col as u8), cell))
        })
    }

    /// Positions of `player`'s stones in row-major order
    pub fn stones(&self, player: Player) -> impl Iterator<Item = Pos> + '_ {
        self.cells()
            .filter(move |&(_, cell)| cell == Cell::Stone(player))
            .map(|(pos, _)| pos)
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells()
            .filter(|&(_, cell)| cell == Cell::Empty)
            .map(|(pos, _)| pos)
    }
}
