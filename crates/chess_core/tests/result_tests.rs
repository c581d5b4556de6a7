//! Game termination: checkmate, stalemate, fifty-move rule and threefold
//! repetition, driven through the public API only.

use chess_core::{
    Color, GameResult, GameState, apply_move, get_game_result, get_valid_moves, is_in_check,
    move_to_coord,
};

fn play(state: &GameState, moves: &[&str]) -> GameState {
    let mut st = state.clone();
    for coord in moves {
        let mv = get_valid_moves(&st, st.turn)
            .unwrap()
            .into_iter()
            .find(|m| move_to_coord(m) == *coord)
            .unwrap_or_else(|| panic!("{coord} is not legal in {}", st.to_fen()));
        st = apply_move(&st, &mv).unwrap();
    }
    st
}

// =============================================================================
// Checkmate
// =============================================================================

#[test]
fn test_fools_mate() {
    let state = play(&GameState::new(), &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(is_in_check(&state, Color::White).unwrap());
    assert_eq!(
        get_game_result(&state).unwrap(),
        GameResult::Checkmate {
            winner: Color::Black
        }
    );
}

#[test]
fn test_back_rank_mate() {
    let state = GameState::from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();
    assert_eq!(get_game_result(&state).unwrap(), GameResult::Ongoing);
    let state = play(&state, &["a1a8"]);
    let result = get_game_result(&state).unwrap();
    assert_eq!(result.winner(), Some(Color::White));
    assert_eq!(result.describe(), "Checkmate! White wins!");
}

#[test]
fn test_mate_takes_precedence_over_fifty_move_rule() {
    let state = GameState::from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 49 80").unwrap();
    let state = play(&state, &["a1a8"]);
    assert_eq!(state.halfmove_clock, 50);
    assert!(matches!(
        get_game_result(&state).unwrap(),
        GameResult::Checkmate { .. }
    ));
}

// =============================================================================
// Stalemate
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king on a8, white queen on b6, white king on c7
    let state = GameState::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(get_valid_moves(&state, Color::Black).unwrap().is_empty());
    assert!(!is_in_check(&state, Color::Black).unwrap());
    let result = get_game_result(&state).unwrap();
    assert_eq!(result, GameResult::Stalemate);
    assert!(result.is_draw());
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    let state = GameState::from_fen("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(get_game_result(&state).unwrap(), GameResult::Stalemate);
}

// =============================================================================
// Fifty-move rule
// =============================================================================

#[test]
fn test_fifty_quiet_plies_draw() {
    let state = GameState::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 48 60").unwrap();
    let state = play(&state, &["e3d3"]);
    assert_eq!(get_game_result(&state).unwrap(), GameResult::Ongoing);
    let state = play(&state, &["e5d5"]);
    assert_eq!(state.halfmove_clock, 50);
    assert_eq!(get_game_result(&state).unwrap(), GameResult::FiftyMoveRule);
}

#[test]
fn test_pawn_move_resets_clock() {
    let state = GameState::from_fen("8/8/8/4k3/8/2K5/4P3/8 w - - 49 60").unwrap();
    let state = play(&state, &["e2e3"]);
    assert_eq!(state.halfmove_clock, 0);
    assert_eq!(get_game_result(&state).unwrap(), GameResult::Ongoing);
}

// =============================================================================
// Threefold repetition
// =============================================================================

#[test]
fn test_knight_shuffle_threefold() {
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
    let once = play(&GameState::new(), &shuffle);
    assert_eq!(get_game_result(&once).unwrap(), GameResult::Ongoing);

    let twice = play(&once, &shuffle);
    assert_eq!(twice.repetition_count(), 3);
    assert_eq!(
        get_game_result(&twice).unwrap(),
        GameResult::ThreefoldRepetition
    );
}

#[test]
fn test_different_side_to_move_is_not_a_repetition() {
    // The rook loses a tempo, so the start placement returns with black to move
    let start = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    let state = play(&start, &["a1a2", "e8d8", "a2a3", "d8e8", "a3a1"]);
    assert_eq!(state.board, start.board);
    assert_eq!(state.turn, Color::Black);
    assert_eq!(state.repetition_count(), 1);
    assert_eq!(get_game_result(&state).unwrap(), GameResult::Ongoing);
}
