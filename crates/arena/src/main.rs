//! Arena CLI
//!
//! List the built-in engines and run matches between them.

use std::env;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use arena::{EngineRegistry, MatchConfig, MatchRunner};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("ML-chess Arena");
    println!();
    println!("Usage:");
    println!("  arena engines");
    println!("  arena match <engine1> <engine2> [options]");
    println!();
    println!("Match options:");
    println!("  --games N, -g N       number of games (default 10)");
    println!("  --time MS, -t MS      time per move in milliseconds (default 1000)");
    println!("  --max-plies N         plies before a game is drawn (default 200)");
    println!("  --config FILE         read match settings from a TOML file");
    println!("  --out FILE            write the result as JSON");
    println!("  --pacing              honour engine pacing delays");
    println!("  --verbose, -v         log every move");
    println!();
    println!("Examples:");
    println!("  arena match minimax-3 random --games 20");
    println!("  arena match iterative-6 minimax-4 --time 250 --out result.json");
}

fn list_engines() {
    let registry = EngineRegistry::with_defaults();
    println!("{:<14} {:<26} Description", "Id", "Name");
    for info in registry.list() {
        println!("{:<14} {:<26} {}", info.id, info.name, info.description);
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = value.with_context(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .with_context(|| format!("invalid value for {flag}: {value}"))
}

async fn run_match(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("match requires two engine ids");
    }
    let engine1 = &args[0];
    let engine2 = &args[1];

    // The config file is read first so flags can override it
    let mut config = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = args.get(i + 1).context("--config needs a value")?;
            MatchConfig::from_file(path)
                .with_context(|| format!("failed to load match config {path}"))?
        }
        None => MatchConfig::default(),
    };
    let mut out = None;
    let mut pacing = false;

    let mut i = 2;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--games" | "-g" => {
                config.games = parse_value(flag, args.get(i + 1))?;
                i += 1;
            }
            "--time" | "-t" => {
                config.move_time_ms = parse_value(flag, args.get(i + 1))?;
                i += 1;
            }
            "--max-plies" => {
                config.max_plies = parse_value(flag, args.get(i + 1))?;
                i += 1;
            }
            "--out" | "-o" => {
                out = Some(args.get(i + 1).context("--out needs a value")?.clone());
                i += 1;
            }
            "--config" => i += 1,
            "--pacing" => pacing = true,
            "--verbose" | "-v" => config.verbose = true,
            other => bail!("unknown option: {other}"),
        }
        i += 1;
    }

    println!("=== Match: {} vs {} ===", engine1, engine2);
    println!(
        "Games: {}, Time per move: {} ms, Ply limit: {}",
        config.games, config.move_time_ms, config.max_plies
    );
    println!();

    let mut registry = EngineRegistry::with_defaults();
    let runner = MatchRunner::new(config);
    let result = if pacing {
        runner
            .run_match(&mut registry, engine1, engine2, tokio::time::sleep)
            .await?
    } else {
        runner
            .run_match(&mut registry, engine1, engine2, |_: Duration| async {})
            .await?
    };

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    if let Some(path) = out {
        let json = serde_json::to_string_pretty(&result)?;
        std::fs::write(&path, json).with_context(|| format!("failed to write {path}"))?;
        println!("Result written to {path}");
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "engines" | "list" => list_engines(),
        "match" => run_match(&args[2..]).await?,
        "help" | "--help" | "-h" => print_usage(),
        other => {
            print_usage();
            bail!("unknown command: {other}");
        }
    }
    Ok(())
}
