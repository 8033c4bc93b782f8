//! Random-game simulator (default binary).
//!
//! Plays a number of bowling games with rolls drawn from a bounded uniform
//! generator, printing one JSON snapshot per finished game and a summary.
//! Illegal draws (more pins than are standing) are discarded and redrawn,
//! so every printed game is a legal one.
//!
//! Usage: `bowling-sim [games] [seed]`

use anyhow::{Context, Result};

use bowling::core::{Game, GameSnapshot, RollGenerator};
use bowling::types::{PERFECT_SCORE, PINS_PER_FRAME, RollError};

struct GameOutcome {
    snapshot: GameSnapshot,
    rejected_draws: u32,
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);

    let games: u32 = match args.next() {
        Some(raw) => raw.parse().context("games must be a number")?,
        None => 10,
    };
    let seed: Option<u64> = match args.next() {
        Some(raw) => Some(raw.parse().context("seed must be a number")?),
        None => None,
    };

    run(games, seed)
}

fn run(games: u32, seed: Option<u64>) -> Result<()> {
    let mut generator = match seed {
        Some(seed) => RollGenerator::with_seed(0, PINS_PER_FRAME, seed),
        None => RollGenerator::new(0, PINS_PER_FRAME),
    };

    let mut total: u64 = 0;
    let mut best: u32 = 0;
    let mut perfect = 0u32;
    let mut rejected = 0u32;

    for _ in 0..games {
        let outcome = play_one(&mut generator);
        let score = outcome.snapshot.total_score;

        total += u64::from(score);
        best = best.max(score);
        if score == PERFECT_SCORE {
            perfect += 1;
        }
        rejected += outcome.rejected_draws;

        println!("{}", serde_json::to_string(&outcome.snapshot)?);
    }

    if games > 0 {
        eprintln!(
            "{} game(s): mean score {:.1}, best {}, perfect {}, rejected draws {}",
            games,
            total as f64 / f64::from(games),
            best,
            perfect,
            rejected,
        );
    }

    Ok(())
}

/// Play one game to completion, redrawing rejected rolls.
fn play_one(generator: &mut RollGenerator) -> GameOutcome {
    let mut game = Game::new();
    let mut rejected_draws = 0u32;

    while !game.is_game_over() {
        let pins = generator.generate();
        match game.record_roll(pins) {
            Ok(()) => {}
            Err(RollError::InvalidRoll { .. }) => rejected_draws += 1,
            // Unreachable given the loop condition, but harmless.
            Err(RollError::GameOver) => break,
        }
    }

    GameOutcome {
        snapshot: game.snapshot(),
        rejected_draws,
    }
}
