use super::*;

#[test]
fn test_startpos_fen_matches_new_game() {
    let state = GameState::from_fen(START_FEN).unwrap();
    assert_eq!(state.board, Board::startpos());
    assert_eq!(state.turn, Color::White);
    assert_eq!(state.castling, CastlingRights::ALL);
    assert_eq!(GameState::new().to_fen(), START_FEN);
}

#[test]
fn test_fen_fields_parsed() {
    let state =
        GameState::from_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w Kq e6 3 7").unwrap();
    assert_eq!(state.en_passant, parse_square("e6"));
    assert_eq!(state.castling, CastlingRights { wk: true, wq: false, bk: false, bq: true });
    assert_eq!(state.halfmove_clock, 3);
    assert_eq!(state.fullmove_number, 7);
    assert_eq!(
        state.piece_at(parse_square("e5").unwrap()),
        Some(Piece::new(Color::Black, PieceKind::Pawn))
    );
}

#[test]
fn test_clocks_default_when_missing() {
    let state = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 b - -").unwrap();
    assert_eq!(state.turn, Color::Black);
    assert_eq!(state.halfmove_clock, 0);
    assert_eq!(state.fullmove_number, 1);
    assert_eq!(state.to_fen(), "4k3/8/8/8/8/8/8/4K3 b - - 0 1");
}

#[test]
fn test_kiwipete_roundtrip() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    assert_eq!(GameState::from_fen(fen).unwrap().to_fen(), fen);
}

#[test]
fn test_invalid_fens_rejected() {
    let bad = [
        "",
        "8/8/8/8/8/8/8 w - - 0 1",
        "9/8/8/8/8/8/8/8 w - - 0 1",
        "7/8/8/8/8/8/8/8 w - - 0 1",
        "x7/8/8/8/8/8/8/8 w - - 0 1",
        "8/8/8/8/8/8/8/8 x - - 0 1",
        "8/8/8/8/8/8/8/8 w Z - 0 1",
        "8/8/8/8/8/8/8/8 w - z9 0 1",
        "8/8/8/8/8/8/8/8 w - - a 1",
    ];
    for fen in bad {
        assert!(
            matches!(GameState::from_fen(fen), Err(RulesError::InvalidFen(_))),
            "accepted {fen:?}"
        );
    }
}
