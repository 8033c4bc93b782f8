//! Frame module - one scoring unit of a bowling game
//!
//! A frame records its own rolls and an accumulated score. The score can
//! exceed the sum of the rolls because later rolls are credited back into a
//! strike or spare frame as bonus pins. Legality of rolls is the game's
//! responsibility; a frame stores whatever the game hands it.

use arrayvec::ArrayVec;

use crate::types::{MAX_ROLLS_TENTH_FRAME, PINS_PER_FRAME};

/// A single frame: up to two rolls (three in the tenth) plus bonus credit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    rolls: ArrayVec<u32, MAX_ROLLS_TENTH_FRAME>,
    score: u32,
}

impl Frame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a roll and count it toward this frame's score.
    ///
    /// No validation here: the game checks legality (and the three-roll
    /// capacity) before calling.
    pub fn record_roll(&mut self, pins: u32) {
        self.rolls.push(pins);
        self.score += pins;
    }

    /// Credit bonus pins from a later roll without recording the roll here.
    pub fn add_bonus(&mut self, pins: u32) {
        self.score += pins;
    }

    /// Score including bonus credit
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of rolls recorded in this frame
    pub fn roll_count(&self) -> usize {
        self.rolls.len()
    }

    /// Pins for the roll at `index`, or 0 if that roll has not happened yet.
    pub fn roll(&self, index: usize) -> u32 {
        self.rolls.get(index).copied().unwrap_or(0)
    }

    /// Sum of this frame's own rolls, excluding bonus credit
    pub fn pins_down(&self) -> u32 {
        self.rolls.iter().sum()
    }

    /// First roll knocked down all ten pins
    pub fn is_strike(&self) -> bool {
        self.rolls.first() == Some(&PINS_PER_FRAME)
    }

    /// First two rolls together knocked down all ten pins, without a strike
    pub fn is_spare(&self) -> bool {
        self.rolls.len() >= 2 && !self.is_strike() && self.roll(0) + self.roll(1) == PINS_PER_FRAME
    }

    /// The rolls recorded so far
    pub fn rolls(&self) -> &[u32] {
        &self.rolls
    }
}
