//! Snapshot module - read-only views of a game for observers
//!
//! Snapshots decouple observers (the simulator's JSON output, scoreboards,
//! tests) from the live game: they are plain serializable data with no
//! back-reference into the `Game`. Capturing twice without an intervening
//! roll yields equal snapshots.

use serde::{Deserialize, Serialize};

use crate::core::{Frame, Game};

/// One frame's state: rolls, score with bonus, classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub rolls: Vec<u32>,
    pub score: u32,
    pub is_strike: bool,
    pub is_spare: bool,
}

impl From<&Frame> for FrameSnapshot {
    fn from(frame: &Frame) -> Self {
        Self {
            rolls: frame.rolls().to_vec(),
            score: frame.score(),
            is_strike: frame.is_strike(),
            is_spare: frame.is_spare(),
        }
    }
}

/// Full game state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub frames: Vec<FrameSnapshot>,
    pub total_score: u32,
    pub current_frame: usize,
    pub game_over: bool,
    pub perfect_so_far: bool,
    pub all_rolls: Vec<u32>,
}

impl GameSnapshot {
    /// Capture the current state of `game`
    pub fn capture(game: &Game) -> Self {
        Self {
            frames: game.frames().iter().map(FrameSnapshot::from).collect(),
            total_score: game.total_score(),
            current_frame: game.current_frame_index(),
            game_over: game.is_game_over(),
            perfect_so_far: game.is_perfect_so_far(),
            all_rolls: game.all_rolls().to_vec(),
        }
    }
}
