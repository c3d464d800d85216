//! Headless game runner (default binary).
//!
//! Plays one or more seeded games to termination, records each final max
//! tile into the score history, and prints a summary. Useful for smoke
//! testing the engine and for collecting policy baselines without any UI.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use z048::core::{parse_direction, Game, GameConfig};
use z048::history::{CsvHistory, HistoryStore};
use z048::types::Direction;

#[derive(Parser, Debug)]
#[command(name = "z048", about = "Play headless 2048 games and track score history")]
struct Args {
    /// Board rows (minimum 2).
    #[arg(long, default_value_t = 4)]
    rows: usize,
    /// Board columns (minimum 2).
    #[arg(long, default_value_t = 4)]
    cols: usize,
    /// Probability that a spawned tile is a 2 rather than a 4.
    #[arg(long, default_value_t = 0.8)]
    spawn_bias: f64,
    /// Number of games to play; game i uses seed + i.
    #[arg(long, default_value_t = 1)]
    games: u64,
    /// RNG seed for the first game.
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Move policy: "random", or a comma-separated direction cycle
    /// such as "left,down,right,down".
    #[arg(long, default_value = "random")]
    policy: String,
    /// Score history file (max tile -> finished game count).
    #[arg(long, default_value = "history.csv")]
    history: PathBuf,
    /// Skip reading and writing the score history file.
    #[arg(long, default_value_t = false)]
    no_history: bool,
}

enum Policy {
    /// Uniform choice among the currently legal directions
    Random,
    /// Fixed direction rotation, skipping entries that do not move
    Cycle(Vec<Direction>),
}

fn parse_policy(raw: &str) -> Result<Policy> {
    if raw.eq_ignore_ascii_case("random") {
        return Ok(Policy::Random);
    }
    let dirs = raw
        .split(',')
        .map(|token| parse_direction(token.trim()))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("invalid --policy {raw:?}"))?;
    if dirs.is_empty() {
        bail!("--policy cycle must name at least one direction");
    }
    Ok(Policy::Cycle(dirs))
}

fn main() -> Result<()> {
    run(Args::parse())
}

fn run(args: Args) -> Result<()> {
    let policy = parse_policy(&args.policy)?;
    let config = GameConfig {
        rows: args.rows,
        cols: args.cols,
        spawn_bias: args.spawn_bias,
    };
    let store = (!args.no_history).then(|| CsvHistory::new(&args.history));

    for i in 0..args.games {
        let seed = args.seed.wrapping_add(i);
        let mut game = Game::new(config, seed).context("could not create game")?;
        play_out(&mut game, &policy, seed);

        println!(
            "game {}: seed {} score {} max tile {} in {} moves",
            i + 1,
            seed,
            game.score(),
            game.max_tile(),
            game.move_count(),
        );

        if let Some(store) = &store {
            store
                .record(game.max_tile())
                .with_context(|| format!("could not update {}", args.history.display()))?;
        }
    }

    if let Some(store) = &store {
        let history = store.load()?;
        println!("history ({}):", args.history.display());
        for (tile, count) in &history {
            println!("  {tile}: {count}");
        }
    }
    Ok(())
}

/// Drive one game to its end (or until the policy stalls).
fn play_out(game: &mut Game, policy: &Policy, seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15);
    let mut cycle_pos = 0usize;

    while !game.is_over() {
        match policy {
            Policy::Random => {
                let legal = game.legal_directions();
                let Some(&dir) = legal.get(rng.gen_range(0..legal.len().max(1))) else {
                    break;
                };
                game.step(dir);
            }
            Policy::Cycle(dirs) => {
                // A full lap without movement means this cycle is stuck.
                let mut moved = false;
                for _ in 0..dirs.len() {
                    let dir = dirs[cycle_pos % dirs.len()];
                    cycle_pos += 1;
                    if game.step(dir).moved {
                        moved = true;
                        break;
                    }
                }
                if !moved {
                    break;
                }
            }
        }
    }
}
