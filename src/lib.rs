//! Incremental ten-pin bowling scorer.
//!
//! Feed rolls one at a time into [`core::Game`]; it validates each roll,
//! credits strike and spare bonuses back to earlier frames, and answers
//! scoring queries at any point mid-game. [`core::RollGenerator`] is a
//! separate collaborator for synthesizing roll sequences in simulations.
//!
//! # Example
//!
//! ```
//! use bowling::core::Game;
//!
//! let mut game = Game::new();
//! game.record_roll(5)?;
//! game.record_roll(5)?; // spare
//! game.record_roll(3)?;
//! assert_eq!(game.frame(0).unwrap().score(), 13);
//! assert_eq!(game.total_score(), 16);
//! # Ok::<(), bowling::types::RollError>(())
//! ```

pub mod core;
pub mod types;
