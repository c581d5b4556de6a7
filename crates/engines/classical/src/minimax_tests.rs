use super::*;
use chess_core::move_to_coord;
use std::time::Duration;

const MATE_IN_ONE: &str = "6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1";

fn best(engine: &mut MinimaxEngine, fen: &str) -> SearchResult {
    let state = GameState::from_fen(fen).unwrap();
    engine
        .search(&state, state.turn, SearchLimits::depth(engine.depth()))
        .unwrap()
}

#[test]
fn test_finds_mate_in_one() {
    for depth in 1..=3 {
        let mut engine = MinimaxEngine::new(depth);
        let result = best(&mut engine, MATE_IN_ONE);
        assert_eq!(move_to_coord(&result.best_move.unwrap()), "e1e8", "depth {depth}");
        assert!(result.score > 9_000);
    }
}

#[test]
fn test_finds_mate_for_black() {
    let mut engine = MinimaxEngine::new(2);
    let result = best(&mut engine, "4q1k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1");
    assert_eq!(move_to_coord(&result.best_move.unwrap()), "e8e1");
    // Scores are reported from white's point of view
    assert!(result.score < -9_000);
}

#[test]
fn test_captures_hanging_queen() {
    let mut engine = MinimaxEngine::new(2);
    let result = best(&mut engine, "4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
    assert_eq!(move_to_coord(&result.best_move.unwrap()), "d1d5");
}

#[test]
fn test_start_position_returns_legal_move() {
    let mut engine = MinimaxEngine::new(2);
    let state = GameState::new();
    let result = engine.search(&state, Color::White, SearchLimits::depth(2)).unwrap();
    let legal = get_valid_moves(&state, Color::White).unwrap();
    assert!(legal.contains(&result.best_move.unwrap()));
    assert!(result.nodes > 0);
}

#[test]
fn test_single_legal_move_skips_search() {
    let mut engine = MinimaxEngine::new(4);
    let result = best(&mut engine, "k7/8/8/8/8/8/8/KQ6 b - - 0 1");
    assert_eq!(move_to_coord(&result.best_move.unwrap()), "a8a7");
    assert_eq!(result.nodes, 0);
}

#[test]
fn test_no_moves_returns_none() {
    let mut engine = MinimaxEngine::new(2);
    assert!(best(&mut engine, "k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").best_move.is_none());
}

#[test]
fn test_exhausted_budget_still_answers() {
    let mut engine = MinimaxEngine::new(4);
    let state = GameState::new();
    let limits = SearchLimits::time(Duration::from_nanos(1));
    let result = engine.search(&state, Color::White, limits).unwrap();
    let legal = get_valid_moves(&state, Color::White).unwrap();
    assert!(legal.contains(&result.best_move.unwrap()));
}

#[test]
fn test_depth_setting() {
    let mut engine = MinimaxEngine::new(2);
    assert_eq!(engine.settings()[0].key, "depth");
    assert_eq!(engine.settings()[0].value, 2);

    assert!(engine.set_option("depth", "5"));
    assert_eq!(engine.depth(), 5);
    assert_eq!(engine.name(), "Minimax (5)");

    assert!(!engine.set_option("depth", "11"));
    assert!(!engine.set_option("depth", "zero"));
    assert!(!engine.set_option("hash", "64"));
    assert_eq!(engine.depth(), 5);
}

#[test]
fn test_search_depth_capped_by_limits() {
    let mut engine = MinimaxEngine::new(2);
    let state = GameState::new();
    let shallow = engine.search(&state, Color::White, SearchLimits::depth(1)).unwrap();
    assert_eq!(shallow.depth, 1);
    // One node per root move at depth 1
    assert_eq!(shallow.nodes, 20);

    // A deeper limit does not extend the configured depth
    let full = engine.search(&state, Color::White, SearchLimits::depth(10)).unwrap();
    assert_eq!(full.depth, 2);
}
