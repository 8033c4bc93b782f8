//! Core types shared across the crate
//!
//! Constants that define the shape of a ten-pin game, plus the error type
//! returned by [`crate::core::Game::record_roll`].

use thiserror::Error;

/// Number of frames in a game
pub const TOTAL_FRAMES: usize = 10;

/// Pins standing at the start of a frame
pub const PINS_PER_FRAME: u32 = 10;

/// Score of a twelve-strike game
pub const PERFECT_SCORE: u32 = 300;

/// Maximum rolls in frames 1-9
pub const MAX_ROLLS_PER_FRAME: usize = 2;

/// Maximum rolls in the tenth frame (bonus roll after a strike or spare)
pub const MAX_ROLLS_TENTH_FRAME: usize = 3;

/// Upper bound on rolls in one game: 9 two-roll frames + 3 in the tenth
pub const MAX_ROLLS: usize = 21;

/// Why a roll was rejected.
///
/// Both variants leave the game untouched: the caller can drop the roll and
/// (for [`RollError::InvalidRoll`]) retry with a corrected pin count.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollError {
    /// The game already satisfies its completion predicate.
    #[error("game is over, no more rolls allowed")]
    GameOver,

    /// The pin count is above 10, or would knock down more pins than are
    /// still standing in the current frame.
    #[error("invalid roll: {pins} exceeds the pins available")]
    InvalidRoll { pins: u32 },
}
