//! Interactive terminal game: a human plays White by entering cell indices,
//! the engine answers as Black.
//!
//! Run with:
//! `cargo run --release -- --difficulty hard --forced-captures`
//!
//! Input: one or more cell indices per line (a click each), `m` to list the
//! legal moves, `r` to reset, `q` to quit. Set `RUST_LOG=debug` for engine
//! diagnostics on stderr.

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use plum_checkers::session::game_session::{ClickOutcome, GameSession};
use plum_checkers::utils::render_game_state::render_board;
use plum_checkers::{Difficulty, Player, RuleSet};

struct Options {
    difficulty: Difficulty,
    rules: RuleSet,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        difficulty: Difficulty::default(),
        rules: RuleSet::default(),
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--difficulty" | "-d" => {
                let label = args
                    .next()
                    .ok_or("--difficulty needs a value (easy, medium, hard, expert)")?;
                options.difficulty = label.parse::<Difficulty>().map_err(|e| e.to_string())?;
            }
            "--forced-captures" | "-f" => options.rules.forced_captures = true,
            other => return Err(format!("unknown argument '{other}'")),
        }
    }
    Ok(options)
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let options = parse_args()?;
    let mut session = GameSession::new(options.rules);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", render_board(session.preview_board()));
        println!("{}", session.status_message());

        let ai_to_move = session.turn() == Player::Black && !session.is_capturing();
        if session.winner().is_none() && ai_to_move {
            match session.play_ai(options.difficulty) {
                Ok(mv) => println!("Black plays {mv}"),
                Err(e) => return Err(format!("engine could not move: {e}")),
            }
            continue;
        }

        print!("> ");
        io::stdout().flush().ok();
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.map_err(|e| e.to_string())?;

        match line.trim() {
            "q" | "quit" => return Ok(()),
            "r" | "reset" => {
                session.reset();
                continue;
            }
            "m" | "moves" => {
                let listed: Vec<String> = session
                    .state()
                    .legal_moves
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                println!("legal: {}", listed.join(" "));
                continue;
            }
            _ => {}
        }

        for token in line.split_whitespace() {
            let Ok(cell) = token.parse::<usize>() else {
                println!("not a cell index: '{token}'");
                break;
            };
            match session.click(cell) {
                Ok(ClickOutcome::Selected { destinations }) => {
                    println!("selected {cell}, destinations {destinations:?}");
                }
                Ok(ClickOutcome::HopPlayed { at, next_hops }) => {
                    println!("hopped to {at}, continue with one of {next_hops:?}");
                }
                Ok(ClickOutcome::Committed(mv)) => println!("White plays {mv}"),
                Err(e) => {
                    println!("{e}");
                    break;
                }
            }
        }
    }
}
