//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other with an optional
//! seeded random opening prefix, alternating colors across a series.

use std::time::Instant;

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::try_apply_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWin,
    BlackWin,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Player },
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub rules: RuleSet,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 0,
            opening_max_plies: 4,
            rules: RuleSet::default(),
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves: Vec<Move>,
    pub played_moves: Vec<Move>,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 1,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games {} | player1 wins {} | player2 wins {} | draws {}",
            self.games, self.player1_wins, self.player2_wins, self.draws
        )
    }
}

/// Play one game, `white` moving first.
pub fn play_engine_match(
    white: &mut dyn Engine,
    black: &mut dyn Engine,
    config: &MatchConfig,
    seed: u64,
) -> Result<MatchResult, String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::new_game_with_rules(config.rules);
    white.new_game();
    black.new_game();

    let opening_plies = if config.opening_max_plies > config.opening_min_plies {
        rng.random_range(config.opening_min_plies..=config.opening_max_plies)
    } else {
        config.opening_min_plies
    };

    let mut opening_moves = Vec::new();
    for _ in 0..opening_plies {
        let Some(mv) = state.legal_moves.choose(&mut rng).cloned() else {
            break;
        };
        state = try_apply_move(&state, &mv).map_err(|e| e.to_string())?;
        opening_moves.push(mv);
    }

    let mut played_moves = Vec::new();
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;
    let mut plies = opening_moves.len() as u16;

    while state.winner.is_none() && plies < config.max_plies {
        let engine: &mut dyn Engine = match state.turn {
            Player::White => &mut *white,
            Player::Black => &mut *black,
        };

        let started = Instant::now();
        let output = engine.choose_move(&state, &config.go_params)?;
        let spent = started.elapsed().as_nanos();
        match state.turn {
            Player::White => white_total_time_ns += spent,
            Player::Black => black_total_time_ns += spent,
        }

        let mv = output
            .best_move
            .ok_or_else(|| format!("{} returned no move in a live position", engine.name()))?;
        state = try_apply_move(&state, &mv).map_err(|e| e.to_string())?;
        played_moves.push(mv);
        plies += 1;
    }

    let outcome = match state.winner {
        Some(Player::White) => MatchOutcome::WhiteWin,
        Some(Player::Black) => MatchOutcome::BlackWin,
        None => MatchOutcome::DrawMaxPlies,
    };
    debug!(?outcome, plies, "match finished");

    Ok(MatchResult {
        outcome,
        final_state: state,
        opening_moves,
        played_moves,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Play a series, swapping colors every game. Engines are rebuilt per game.
pub fn play_engine_match_series<F1, F2>(
    make_player1: F1,
    make_player2: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats::default();

    for game_idx in 0..config.games {
        let mut p1 = make_player1();
        let mut p2 = make_player2();
        let player1_is_white = game_idx % 2 == 0;
        let seed = config.base_seed.wrapping_add(u64::from(game_idx));

        let result = if player1_is_white {
            play_engine_match(p1.as_mut(), p2.as_mut(), &config.per_game, seed)?
        } else {
            play_engine_match(p2.as_mut(), p1.as_mut(), &config.per_game, seed)?
        };

        let series_outcome = match result.outcome {
            MatchOutcome::DrawMaxPlies => SeriesOutcome::DrawMaxPlies,
            MatchOutcome::WhiteWin | MatchOutcome::BlackWin => {
                let color = if result.outcome == MatchOutcome::WhiteWin {
                    Player::White
                } else {
                    Player::Black
                };
                let player = if (color == Player::White) == player1_is_white {
                    PlayerId::Player1
                } else {
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, color }
            }
        };

        match series_outcome {
            SeriesOutcome::PlayerWin {
                player: PlayerId::Player1,
                ..
            } => stats.player1_wins += 1,
            SeriesOutcome::PlayerWin {
                player: PlayerId::Player2,
                ..
            } => stats.player2_wins += 1,
            SeriesOutcome::DrawMaxPlies => stats.draws += 1,
        }
        stats.games += 1;
        stats.outcomes.push(series_outcome);

        if config.verbose {
            info!(
                game = game_idx + 1,
                ?series_outcome,
                plies = result.opening_moves.len() + result.played_moves.len(),
                "series game finished"
            );
        }
    }

    Ok(stats)
}
