use super::*;
use chess_core::{move_to_coord, parse_square};
use std::time::Duration;

const MATE_IN_ONE: &str = "6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1";
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn coord_move(state: &GameState, coord: &str) -> Move {
    get_valid_moves(state, state.turn)
        .unwrap()
        .into_iter()
        .find(|m| move_to_coord(m) == coord)
        .unwrap()
}

#[test]
fn test_finds_mate_in_one_and_stops() {
    let mut engine = IterativeDeepeningEngine::new(6);
    let state = GameState::from_fen(MATE_IN_ONE).unwrap();
    let result = engine
        .search(&state, Color::White, SearchLimits::depth(6))
        .unwrap();
    assert_eq!(move_to_coord(&result.best_move.unwrap()), "e1e8");
    assert_eq!(result.depth, 1);
    assert!(result.score > MATE_THRESHOLD);
    assert!(!result.stopped);
}

#[test]
fn test_single_legal_move_skips_search() {
    let mut engine = IterativeDeepeningEngine::new(8);
    let state = GameState::from_fen("k7/8/8/8/8/8/8/KQ6 b - - 0 1").unwrap();
    let result = engine
        .search(&state, Color::Black, SearchLimits::depth(8))
        .unwrap();
    assert_eq!(move_to_coord(&result.best_move.unwrap()), "a8a7");
    assert_eq!(result.nodes, 0);
}

#[test]
fn test_expired_budget_falls_back_to_first_move() {
    let mut engine = IterativeDeepeningEngine::new(8);
    let state = GameState::new();
    let limits = SearchLimits::time(Duration::from_nanos(1));
    let result = engine.search(&state, Color::White, limits).unwrap();
    assert!(result.stopped);
    let legal = get_valid_moves(&state, Color::White).unwrap();
    assert!(legal.contains(&result.best_move.unwrap()));
}

#[test]
fn test_completed_depth_survives_interrupted_one() {
    let mut engine = IterativeDeepeningEngine::new(10);
    let state = GameState::from_fen(KIWIPETE).unwrap();
    let limits = SearchLimits::time(Duration::from_millis(300));
    let result = engine.search(&state, Color::White, limits).unwrap();

    assert!(result.stopped);
    assert!(result.depth >= 1 && result.depth < 10);
    assert_eq!(result.pv.first(), result.best_move.as_ref());
    assert_eq!(engine.principal_variation(), result.pv.as_slice());
    let legal = get_valid_moves(&state, Color::White).unwrap();
    assert!(legal.contains(&result.best_move.unwrap()));
}

#[test]
fn test_principal_variation_is_playable() {
    let mut engine = IterativeDeepeningEngine::new(3);
    let state = GameState::new();
    let result = engine
        .search(&state, Color::White, SearchLimits::depth(3))
        .unwrap();
    assert_eq!(result.depth, 3);

    let mut st = state;
    for mv in &result.pv {
        assert!(get_valid_moves(&st, st.turn).unwrap().contains(mv));
        st = apply_move(&st, mv).unwrap();
    }
}

#[test]
fn test_ordering_priorities() {
    let mut engine = IterativeDeepeningEngine::new(4);
    let state = GameState::from_fen(KIWIPETE).unwrap();

    let pv_move = coord_move(&state, "a2a3");
    let killer = coord_move(&state, "g2g3");
    let queen_takes_pawn = coord_move(&state, "f3h3");
    let bishop_takes_bishop = coord_move(&state, "e2a6");
    let castle = coord_move(&state, "e1g1");
    let quiet = coord_move(&state, "b2b3");

    engine.pv = vec![pv_move];
    engine.killers.insert(4, killer);

    let mut moves = vec![quiet, castle, queen_takes_pawn, killer, bishop_takes_bishop, pv_move];
    engine.order_moves(&mut moves, 4, 0);
    assert_eq!(
        moves,
        vec![pv_move, bishop_takes_bishop, queen_takes_pawn, killer, castle, quiet]
    );

    // PV bonus only applies at the ply it was found at
    assert_eq!(engine.order_score(&pv_move, 4, 1), 0);
    // Killers are per depth
    assert_eq!(engine.order_score(&killer, 3, 0), 0);
}

#[test]
fn test_every_capture_outranks_lower_classes() {
    let mut engine = IterativeDeepeningEngine::new(4);
    // Rook can take the queen; the a-pawn can promote; d1d4 is a quiet center move
    let state = GameState::from_fen("3q3k/P7/8/8/8/8/8/3R3K w - - 0 1").unwrap();
    let rook_takes_queen = coord_move(&state, "d1d8");
    let promotion = coord_move(&state, "a7a8q");
    let killer = coord_move(&state, "h1g1");
    let center = coord_move(&state, "d1d4");
    engine.killers.insert(2, killer);

    let mut moves = vec![center, killer, promotion, rook_takes_queen];
    engine.order_moves(&mut moves, 2, 0);
    assert_eq!(moves, vec![rook_takes_queen, killer, promotion, center]);

    // Cheapest capture still beats a quiet center move and castling
    let kiwi = GameState::from_fen(KIWIPETE).unwrap();
    let queen_takes_pawn = coord_move(&kiwi, "f3h3");
    let castle = coord_move(&kiwi, "e1g1");
    assert!(engine.order_score(&queen_takes_pawn, 1, 0) > engine.order_score(&castle, 1, 0));
    assert!(engine.order_score(&queen_takes_pawn, 1, 0) > CENTER_SCORE);
}

#[test]
fn test_center_destination_bonus() {
    let engine = IterativeDeepeningEngine::new(4);
    let state = GameState::new();
    let e4 = coord_move(&state, "e2e4");
    let e3 = coord_move(&state, "e2e3");
    assert_eq!(e4.to, parse_square("e4").unwrap());
    assert_eq!(engine.order_score(&e4, 1, 0), CENTER_SCORE);
    assert_eq!(engine.order_score(&e3, 1, 0), 0);
}

#[test]
fn test_search_depth_capped_by_limits() {
    let mut engine = IterativeDeepeningEngine::new(6);
    let state = GameState::new();
    let result = engine
        .search(&state, Color::White, SearchLimits::depth(2))
        .unwrap();
    assert_eq!(result.depth, 2);
    assert!(!result.stopped);
}

#[test]
fn test_repeated_positions_stay_out_of_table() {
    let mut state = GameState::new();
    for coord in ["g1f3", "g8f6", "f3g1", "f6g8"] {
        let mv = coord_move(&state, coord);
        state = apply_move(&state, &mv).unwrap();
    }
    assert_eq!(state.repetition_count(), 2);

    let mut engine = IterativeDeepeningEngine::new(3);
    engine
        .search(&state, Color::White, SearchLimits::depth(2))
        .unwrap();
    let root = state.repetition_key();
    assert!(engine.tt.keys().all(|k| k.position != root));

    // The same position without the history is cached as usual
    let fresh = GameState::new();
    engine
        .search(&fresh, Color::White, SearchLimits::depth(2))
        .unwrap();
    assert!(engine.tt.keys().any(|k| k.position == fresh.repetition_key()));
}

#[test]
fn test_max_depth_setting() {
    let mut engine = IterativeDeepeningEngine::new(6);
    let setting = &engine.settings()[0];
    assert_eq!((setting.key, setting.min, setting.max, setting.value), ("max_depth", 3, 10, 6));

    assert!(engine.set_option("max_depth", "8"));
    assert_eq!(engine.max_depth(), 8);
    assert_eq!(engine.name(), "Iterative Deepening (8)");
    assert!(!engine.set_option("max_depth", "2"));
    assert_eq!(engine.max_depth(), 8);
}
