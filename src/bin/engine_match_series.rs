//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --games 20 --seed 7 --verbose`

use tracing_subscriber::EnvFilter;

use plum_checkers::engines::difficulty::Difficulty;
use plum_checkers::engines::engine_minimax::MinimaxEngine;
use plum_checkers::engines::engine_random::RandomEngine;
use plum_checkers::engines::engine_trait::Engine;
use plum_checkers::game_state::checkers_types::RuleSet;
use plum_checkers::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = MatchSeriesConfig {
        games: 10,
        base_seed: 1234,
        per_game: MatchConfig {
            max_plies: 200,
            opening_min_plies: 0,
            opening_max_plies: 4,
            ..MatchConfig::default()
        },
        verbose: false,
    };
    let mut player1 = Difficulty::Medium;
    let mut player2: Option<Difficulty> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = || args.next().ok_or_else(|| format!("{arg} needs a value"));
        match arg.as_str() {
            "--verbose" | "-v" => config.verbose = true,
            "--forced-captures" => config.per_game.rules = RuleSet { forced_captures: true },
            "--games" => {
                config.games = value()?.parse::<u16>().map_err(|e| format!("--games: {e}"))?;
            }
            "--seed" => {
                config.base_seed = value()?.parse::<u64>().map_err(|e| format!("--seed: {e}"))?;
            }
            "--player1" => {
                player1 = value()?.parse::<Difficulty>().map_err(|e| format!("--player1: {e}"))?;
            }
            "--player2" => {
                let label = value()?;
                player2 = if label == "random" {
                    None
                } else {
                    Some(label.parse::<Difficulty>().map_err(|e| format!("--player2: {e}"))?)
                };
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    let seed = config.base_seed;
    let stats = play_engine_match_series(
        || Box::new(MinimaxEngine::new(player1)) as Box<dyn Engine>,
        || match player2 {
            Some(difficulty) => Box::new(MinimaxEngine::new(difficulty)) as Box<dyn Engine>,
            None => Box::new(RandomEngine::seeded(seed)) as Box<dyn Engine>,
        },
        config,
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
