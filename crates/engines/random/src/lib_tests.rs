use super::*;
use chess_core::{move_to_coord, Move};

fn search(engine: &mut dyn Engine, fen: &str) -> Option<Move> {
    let state = GameState::from_fen(fen).unwrap();
    engine
        .search(&state, state.turn, SearchLimits::depth(1))
        .unwrap()
        .best_move
}

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let state = GameState::new();

    let result = engine
        .search(&state, Color::White, SearchLimits::depth(1))
        .unwrap();

    let legal_moves = get_valid_moves(&state, Color::White).unwrap();
    assert!(legal_moves.contains(&result.best_move.unwrap()));
    assert_eq!(result.nodes, 20);
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::new();
    let fen = "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1";
    assert!(search(&mut engine, fen).is_none());
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::new();
    assert!(search(&mut engine, "k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").is_none());
}

#[test]
fn single_legal_move_is_played() {
    let fen = "k7/8/8/8/8/8/8/KQ6 b - - 0 1";
    let mv = search(&mut RandomEngine::new(), fen).unwrap();
    assert_eq!(move_to_coord(&mv), "a8a7");
    let mv = search(&mut AggressiveEngine::new(), fen).unwrap();
    assert_eq!(move_to_coord(&mv), "a8a7");
}

#[test]
fn aggressive_engine_prefers_capture() {
    let mut engine = AggressiveEngine::new();
    for _ in 0..20 {
        let mv = search(&mut engine, "4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(move_to_coord(&mv), "e4d5");
    }
}

#[test]
fn aggressive_engine_prefers_check_without_captures() {
    let mut engine = AggressiveEngine::new();
    for _ in 0..20 {
        let mv = search(&mut engine, "4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        assert_eq!(move_to_coord(&mv), "a1a8");
    }
}

#[test]
fn pacing_is_capped_by_half_the_limit() {
    let random = RandomEngine::new();
    let aggressive = AggressiveEngine::new();
    assert_eq!(random.pacing(Duration::from_secs(5)), Duration::from_millis(300));
    assert_eq!(random.pacing(Duration::from_millis(200)), Duration::from_millis(100));
    assert_eq!(aggressive.pacing(Duration::from_secs(5)), Duration::from_millis(500));
    assert_eq!(aggressive.pacing(Duration::from_millis(600)), Duration::from_millis(300));
}
