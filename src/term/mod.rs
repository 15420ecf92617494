//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer. It avoids widget/layout
//! frameworks and instead renders into a simple framebuffer that is
//! diff-flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Own the percent-space <-> cell mapping in one place (`Viewport`)
//! - Cheap frames: a still table diffs to nothing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
