use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
}

#[test]
fn test_cell_player_roundtrip() {
    assert_eq!(Cell::from(Player::Black).player(), Some(Player::Black));
    assert_eq!(Cell::from(Player::White).player(), Some(Player::White));
    assert_eq!(Cell::Empty.player(), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.to_index(), 3 * 8 + 4);
    assert_eq!(pos.to_index(), 28);

    let pos2 = Pos::from_index(28);
    assert_eq!(pos2.row, 3);
    assert_eq!(pos2.col, 4);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(8, 0));
    assert!(!Pos::is_valid(0, 8));
}

#[test]
fn test_pos_offset() {
    assert_eq!(Pos::new(0, 0).offset(1, 1), Some(Pos::new(1, 1)));
    assert_eq!(Pos::new(0, 0).offset(-1, 0), None);
    assert_eq!(Pos::new(7, 7).offset(0, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 8);
    assert_eq!(TOTAL_CELLS, 64);
    assert_eq!(Pos::all().count(), TOTAL_CELLS);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_edges() {
    assert!(Pos::new(0, 0).is_edge());
    assert!(Pos::new(0, 4).is_edge());
    assert!(Pos::new(5, 7).is_edge());
    assert!(!Pos::new(1, 1).is_edge());
    assert!(!Pos::new(6, 6).is_edge());
    assert_eq!(Pos::all().filter(|p| p.is_edge()).count(), 28);
}

#[test]
fn test_pos_notation() {
    assert_eq!(Pos::new(0, 0).to_string(), "a1");
    assert_eq!(Pos::new(2, 3).to_string(), "d3");
    assert_eq!("d3".parse::<Pos>().unwrap(), Pos::new(2, 3));
    assert_eq!("H8".parse::<Pos>().unwrap(), Pos::new(7, 7));
    assert!("i1".parse::<Pos>().is_err());
    assert!("a9".parse::<Pos>().is_err());
    assert!("a10".parse::<Pos>().is_err());
    assert!("".parse::<Pos>().is_err());
}

#[test]
fn test_initial_board() {
    let board = Board::initial();
    assert_eq!(board.get(Pos::new(3, 3)), Cell::White);
    assert_eq!(board.get(Pos::new(3, 4)), Cell::Black);
    assert_eq!(board.get(Pos::new(4, 3)), Cell::Black);
    assert_eq!(board.get(Pos::new(4, 4)), Cell::White);
    assert_eq!(board.piece_count(), 4);
    assert_eq!(board.empty_count(), 60);
}

#[test]
fn test_board_layout_roundtrip() {
    let board = Board::initial();
    let text = board.to_string();
    assert_eq!(text.lines().nth(3), Some("...OX..."));
    assert_eq!(text.parse::<Board>().unwrap(), board);
}

#[test]
fn test_board_layout_errors() {
    assert!("XO".parse::<Board>().is_err());
    let bad_symbol = "........\n".repeat(7) + "...?....\n";
    assert!(bad_symbol.parse::<Board>().is_err());
    let short_row = "........\n".repeat(7) + ".......\n";
    assert!(short_row.parse::<Board>().is_err());
}
