//! Input module - crossterm key/mouse events mapped to game inputs.

pub mod handler;

pub use handler::{map_event, should_quit, UiEvent};
