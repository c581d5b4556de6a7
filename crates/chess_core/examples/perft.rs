//! Perft driver for checking move generation against published counts.
//!
//! Usage:
//!   cargo run --release --example perft -p chess_core -- [depth] [fen]
//!   cargo run --release --example perft -p chess_core -- 3 "<fen>" divide
//!
//! Without a FEN it walks a small suite of well-known positions.

use std::env;
use std::time::Instant;

use chess_core::{GameState, RulesResult, START_FEN, divide, perft};

const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Starting position", START_FEN),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    ),
    ("Position 3", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
    (
        "Position 4",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq -",
    ),
];

fn main() -> RulesResult<()> {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);

    match (args.get(2), args.get(3).map(String::as_str)) {
        (Some(fen), Some("divide")) => run_divide(fen, depth),
        (Some(fen), _) => run_single_position(fen, depth),
        (None, _) => run_all_positions(depth),
    }
}

fn nps(nodes: u64, secs: f64) -> f64 {
    if secs > 0.0 { nodes as f64 / secs } else { 0.0 }
}

fn run_single_position(fen: &str, depth: u8) -> RulesResult<()> {
    let state = GameState::from_fen(fen)?;
    println!("Position: {fen}");
    println!("Depth: {depth}");

    let start = Instant::now();
    let nodes = perft(&state, depth)?;
    let elapsed = start.elapsed();

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(nodes, elapsed.as_secs_f64()));
    Ok(())
}

fn run_divide(fen: &str, depth: u8) -> RulesResult<()> {
    let state = GameState::from_fen(fen)?;
    let mut total = 0;
    for (mv, nodes) in divide(&state, depth)? {
        println!("{mv}: {nodes}");
        total += nodes;
    }
    println!();
    println!("Total: {total}");
    Ok(())
}

fn run_all_positions(depth: u8) -> RulesResult<()> {
    println!("=== Perft Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, fen) in TEST_POSITIONS {
        let state = GameState::from_fen(fen)?;
        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&state, depth)?;
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;
        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed.as_secs_f64())
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time.as_secs_f64())
    );
    Ok(())
}
