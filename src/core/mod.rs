//! Core module - pure scoring logic with no I/O
//!
//! - [`frame`]: one scoring unit, with bonus credit and classification
//! - [`game`]: the roll-by-roll state machine over ten frames
//! - [`rng`]: bounded uniform integers for simulations (not part of scoring)
//! - [`snapshot`]: read-only serializable views for observers

pub mod frame;
pub mod game;
pub mod rng;
pub mod snapshot;

// Re-export commonly used types
pub use frame::Frame;
pub use game::Game;
pub use rng::RollGenerator;
pub use snapshot::{FrameSnapshot, GameSnapshot};
