//! Core module - pure game logic with no I/O
//!
//! Game rules, state management and geometry. Everything here is
//! deterministic given a seed and a sequence of input events.

pub mod dice;
pub mod drag;
pub mod game_state;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod token;
pub mod zones;

// Re-export commonly used types
pub use dice::{RollSequencer, RoundRule};
pub use drag::{DragGesture, DragTracker, DropOutcome};
pub use game_state::GameState;
pub use player::Player;
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
pub use token::Token;
pub use zones::{CornerZones, ZoneLookup};
