//! Game module - the scoring state machine
//!
//! Owns the ten frames and the flat roll history, routes each roll to the
//! current frame, credits bonus pins back to earlier strike/spare frames,
//! and decides when the game is over.
//!
//! [`Game::record_roll`] is the only mutator. Validation runs first and a
//! failed roll leaves the game exactly as it was; once validation passes
//! the whole mutation sequence (history append, bonus propagation, frame
//! recording, frame advancement) completes before the call returns.

use arrayvec::ArrayVec;

use crate::core::snapshot::GameSnapshot;
use crate::core::Frame;
use crate::types::{RollError, MAX_ROLLS, PINS_PER_FRAME, TOTAL_FRAMES};

/// A single ten-pin game scored incrementally, roll by roll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    frames: [Frame; TOTAL_FRAMES],
    all_rolls: ArrayVec<u32, MAX_ROLLS>,
    current_frame: usize,
}

impl Game {
    /// Create a fresh game: ten empty frames, no rolls, frame index 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one roll.
    ///
    /// Fails with [`RollError::GameOver`] once [`Game::is_game_over`] holds,
    /// and with [`RollError::InvalidRoll`] when `pins` is above 10 or would
    /// exceed the pins still standing in the current frame. On failure no
    /// state changes; the caller may retry with a corrected value.
    pub fn record_roll(&mut self, pins: u32) -> Result<(), RollError> {
        if self.is_game_over() {
            return Err(RollError::GameOver);
        }

        if pins > PINS_PER_FRAME {
            return Err(RollError::InvalidRoll { pins });
        }

        let frame = &self.frames[self.current_frame];

        if self.current_frame < TOTAL_FRAMES - 1 {
            // Frames 1-9: a second roll cannot exceed the pins left standing.
            if frame.roll_count() == 1 && frame.roll(0) + pins > PINS_PER_FRAME {
                return Err(RollError::InvalidRoll { pins });
            }
        } else {
            // Tenth frame: a strike or spare resets the pin deck, so only the
            // rolls sharing a deck are bounded together.
            if frame.roll_count() == 1
                && !frame.is_strike()
                && frame.roll(0) + pins > PINS_PER_FRAME
            {
                return Err(RollError::InvalidRoll { pins });
            }
            if frame.roll_count() == 2 && frame.is_spare() && pins > PINS_PER_FRAME {
                return Err(RollError::InvalidRoll { pins });
            }
            if frame.roll_count() == 2
                && frame.is_strike()
                && frame.roll(1) < PINS_PER_FRAME
                && frame.roll(1) + pins > PINS_PER_FRAME
            {
                // After a strike the second roll starts a fresh deck; the
                // third is only unconstrained if the second was also a strike.
                return Err(RollError::InvalidRoll { pins });
            }
        }

        self.all_rolls.push(pins);

        // Bonus propagation runs against the roll count *before* this roll
        // lands in its own frame. The three checks are independent: one roll
        // can credit two earlier frames (double strike).
        let rolls_in_frame = self.frames[self.current_frame].roll_count();

        if self.current_frame >= 1 {
            if rolls_in_frame == 0 && self.frames[self.current_frame - 1].is_spare() {
                self.frames[self.current_frame - 1].add_bonus(pins);
            }
            if rolls_in_frame <= 1 && self.frames[self.current_frame - 1].is_strike() {
                self.frames[self.current_frame - 1].add_bonus(pins);
            }
        }
        if self.current_frame >= 2
            && rolls_in_frame == 0
            && self.frames[self.current_frame - 2].is_strike()
            && self.frames[self.current_frame - 1].is_strike()
        {
            self.frames[self.current_frame - 2].add_bonus(pins);
        }

        self.frames[self.current_frame].record_roll(pins);

        // Advance out of a finished frame. The tenth frame never advances;
        // the game ends through the completion predicate instead.
        if self.current_frame < TOTAL_FRAMES - 1 {
            let frame = &self.frames[self.current_frame];
            if frame.is_strike() || frame.roll_count() == 2 {
                self.current_frame += 1;
            }
        }

        Ok(())
    }

    /// Whether the completion predicate holds: three rolls in the tenth
    /// frame, or two rolls that left no bonus roll earned.
    pub fn is_game_over(&self) -> bool {
        if self.current_frame < TOTAL_FRAMES - 1 {
            return false;
        }

        let tenth = &self.frames[TOTAL_FRAMES - 1];
        if tenth.roll_count() == 3 {
            return true;
        }
        tenth.roll_count() == 2 && tenth.pins_down() < PINS_PER_FRAME
    }

    /// Sum of all frame scores, valid mid-game: it reflects only the bonus
    /// pins credited so far.
    pub fn total_score(&self) -> u32 {
        self.frames.iter().map(Frame::score).sum()
    }

    /// All ten frames in order
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// One frame by 0-based position
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// 0-based index of the frame currently receiving rolls
    pub fn current_frame_index(&self) -> usize {
        self.current_frame
    }

    /// Flat chronological list of every roll recorded
    pub fn all_rolls(&self) -> &[u32] {
        &self.all_rolls
    }

    /// True while every roll so far is a strike (trivially true before the
    /// first roll).
    pub fn is_perfect_so_far(&self) -> bool {
        self.all_rolls.iter().all(|&pins| pins == PINS_PER_FRAME)
    }

    /// Capture a read-only, serializable view of the current state
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }
}
