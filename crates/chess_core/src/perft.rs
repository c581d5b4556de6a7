use crate::error::RulesResult;
use crate::state::{GameState, apply_move, get_valid_moves};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(state: &GameState, depth: u8) -> RulesResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = get_valid_moves(state, state.turn)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in &moves {
        let next = apply_move(state, mv)?;
        nodes += perft(&next, depth - 1)?;
    }
    Ok(nodes)
}

/// Per-root-move node counts, for locating generator bugs against a reference.
pub fn divide(state: &GameState, depth: u8) -> RulesResult<Vec<(String, u64)>> {
    let mut out = Vec::new();
    for mv in get_valid_moves(state, state.turn)? {
        let next = apply_move(state, &mv)?;
        let nodes = perft(&next, depth.saturating_sub(1))?;
        out.push((crate::notation::move_to_coord(&mv), nodes));
    }
    Ok(out)
}
