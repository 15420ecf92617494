//! Bubble Match: a terminal color/shape matching party game.
//!
//! Tokens scatter across the screen, a two-die roll fixes the current match
//! rule, and players drag matching tokens into their corner zones with the
//! mouse. `core` holds the pure game logic; `term` and `input` are the
//! terminal boundary.

pub mod audio;
pub mod core;
pub mod input;
pub mod term;
pub mod types;
