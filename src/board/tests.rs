use super::*;

#[test]
fn new_empty_has_no_pieces_and_white_to_move() {
    let board = Board::new_empty();
    assert_eq!(board.occupied(), 0);
    assert_eq!(board.side_to_move, Color::White);
    assert_eq!(board.castling_rights, 0);
    assert!(board.en_passant.is_none());
    assert!(board.history.is_empty());
}

#[test]
fn new_is_the_standard_starting_position() {
    let board = Board::new();
    assert_eq!(board.occupancy(Color::White).count_ones(), 16);
    assert_eq!(board.occupancy(Color::Black).count_ones(), 16);
    assert_eq!(board.occupied().count_ones(), 32);
    assert!(board.has_kingside_castle(Color::White));
    assert!(board.has_queenside_castle(Color::White));
    assert!(board.has_kingside_castle(Color::Black));
    assert!(board.has_queenside_castle(Color::Black));
    assert!(board.validate().is_ok());
}

#[test]
fn piece_at_reports_placed_pieces() {
    let board = Board::new();
    assert_eq!(
        board.piece_at(Square::from_index(4)),
        Some((Color::White, Piece::King))
    );
    assert_eq!(
        board.piece_at(Square::from_index(60)),
        Some((Color::Black, Piece::King))
    );
    assert_eq!(board.piece_at(Square::from_index(27)), None);
}

#[test]
fn king_square_matches_king_bitboard() {
    let board = Board::new();
    assert_eq!(board.king_square(Color::White), Square::from_index(4));
    assert_eq!(board.king_square(Color::Black), Square::from_index(60));
}

#[test]
fn set_bb_updates_occupancy_and_piece_on_sq() {
    let mut board = Board::new_empty();
    board.set_bb(Color::White, Piece::Rook, (1u64 << 0) | (1u64 << 7));
    assert_eq!(board.occupancy(Color::White), 0b1000_0001);
    assert_eq!(board.occupied(), 0b1000_0001);
    assert_eq!(
        board.piece_at(Square::from_index(0)),
        Some((Color::White, Piece::Rook))
    );
    assert_eq!(
        board.piece_at(Square::from_index(7)),
        Some((Color::White, Piece::Rook))
    );
}

#[test]
fn validate_detects_overlapping_bitboards() {
    let mut board = Board::new_empty();
    board.set_bb(Color::White, Piece::Pawn, 1u64 << 10);
    board.set_bb(Color::White, Piece::Knight, 1u64 << 10);
    assert!(board.validate().is_err());
}

#[test]
fn zobrist_hash_changes_when_a_piece_moves() {
    let start = Board::new();
    let mut moved = Board::new();
    moved.set_bb(Color::White, Piece::Pawn, WHITE_PAWN_MASK & !(1 << 12) | (1 << 28));
    moved.refresh_zobrist();
    assert_ne!(start.zobrist, moved.zobrist);
}

#[test]
fn repetition_count_is_zero_with_empty_history() {
    let board = Board::new();
    assert_eq!(board.repetition_count(), 0);
    assert!(!board.is_repetition());
    assert!(!board.is_threefold());
}

#[test]
fn repetition_count_counts_matching_hashes_in_history() {
    let mut board = Board::new();
    board.history.push(board.zobrist);
    board.history.push(board.zobrist);
    assert_eq!(board.repetition_count(), 2);
    assert!(board.is_repetition());
    assert!(board.is_threefold());
}

#[test]
fn default_matches_new_empty() {
    assert_eq!(Board::default(), Board::new_empty());
}

#[test]
fn display_and_from_str_round_trip() {
    let board = Board::new();
    let text = board.to_string();
    let parsed: Board = text.parse().unwrap();
    assert_eq!(board, parsed);
}
