use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::One.opponent(), Player::Two);
    assert_eq!(Player::Two.opponent(), Player::One);
    assert_eq!(Player::One.number(), 1);
    assert_eq!(Player::Two.number(), 2);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));

    assert_eq!(Pos::checked(14, 3), Some(Pos::new(14, 3)));
    assert_eq!(Pos::checked(15, 3), None);
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 14);
    assert_eq!(pos.offset(1, -1, 2), Some(Pos::new(2, 12)));
    assert_eq!(pos.offset(0, 1, 1), None);
    assert_eq!(pos.offset(-1, 0, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 14).to_index(), 14);
    assert_eq!(Pos::new(14, 0).to_index(), 210);
    assert_eq!(Pos::new(14, 14).to_index(), 224);
}

#[test]
fn test_set_and_get() {
    let mut board = Board::new();
    let pos = Pos::new(3, 4);
    assert_eq!(board.get(pos), Cell::Empty);

    board.set(pos, Cell::Stone(Player::One));
    assert_eq!(board.get(pos), Cell::Stone(Player::One));
    assert!(!board.is_empty(pos));

    // Overwrite replaces rather than stacks
    board.set(pos, Player::Two.into());
    assert_eq!(board.get(pos), Cell::Stone(Player::Two));
    assert_eq!(board.stone_count(), 1);

    board.set(pos, Cell::Empty);
    assert!(board.is_board_empty());
}

#[test]
fn test_snapshot_is_independent() {
    let mut board = Board::new();
    board.set(Pos::new(1, 1), Cell::Stone(Player::One));
    let snapshot = board;
    board.set(Pos::new(2, 2), Cell::Stone(Player::Two));

    assert_eq!(snapshot.stone_count(), 1);
    assert_eq!(board.stone_count(), 2);
    assert_ne!(snapshot, board);
}

#[test]
fn test_is_full_and_empty_cells() {
    let mut board = Board::new();
    assert_eq!(board.empty_cells().count(), TOTAL_CELLS);

    for idx in 0..TOTAL_CELLS - 1 {
        let player = if idx % 2 == 0 { Player::One } else { Player::Two };
        board.set(Pos::from_index(idx), player.into());
    }
    assert!(!board.is_full());
    assert_eq!(board.empty_cells().collect::<Vec<_>>(), vec![Pos::new(14, 14)]);

    board.set(Pos::new(14, 14), Cell::Stone(Player::One));
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}

#[test]
fn test_stones_iteration() {
    let mut board = Board::new();
    board.set(Pos::new(14, 14), Cell::Stone(Player::Two));
    board.set(Pos::new(0, 0), Cell::Stone(Player::Two));
    board.set(Pos::new(7, 7), Cell::Stone(Player::One));

    let two: Vec<Pos> = board.stones(Player::Two).collect();
    assert_eq!(two, vec![Pos::new(0, 0), Pos::new(14, 14)]);
    let one: Vec<Pos> = board.stones(Player::One).collect();
    assert_eq!(one, vec![Pos::new(7, 7)]);
}

#[test]
fn test_stone_count_tracks_overwrites() {
    let mut board = Board::new();
    let pos = Pos::new(9, 2);
    board.set(pos, Cell::Empty);
    assert_eq!(board.stone_count(), 0);

    board.set(pos, Cell::Stone(Player::One));
    board.set(pos, Cell::Stone(Player::One));
    assert_eq!(board.stone_count(), 1);

    board.set(Pos::new(0, 0), Cell::Stone(Player::Two));
    assert_eq!(board.stone_count(), 2);
    assert_eq!(board.cells().filter(|&(_, c)| c != Cell::Empty).count(), 2);
    assert_eq!(board.empty_cells().count(), TOTAL_CELLS - 2);
}
