//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Number of tokens spawned at game start.
pub const TOTAL_TOKENS: usize = 40;

/// Token spawn bounds in percent-of-viewport space.
///
/// Chosen to keep spawned tokens clear of the top dice HUD and the four
/// corner player zones.
pub const SPAWN_MIN_X_PCT: f32 = 10.0;
pub const SPAWN_MAX_X_PCT: f32 = 90.0;
pub const SPAWN_MIN_Y_PCT: f32 = 22.0;
pub const SPAWN_MAX_Y_PCT: f32 = 78.0;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const ROLL_FRAME_MS: u32 = 80;
pub const ROLL_FRAMES: u32 = 16;
pub const REJECT_FLASH_MS: u32 = 500;

/// A roll-rattle sound fires once every this many animation frames.
pub const ROLL_SOUND_EVERY: u32 = 4;

/// Blank-face odds: 1 in `FINAL_BLANK_ODDS` for the settled faces,
/// 1 in `FRAME_BLANK_ODDS` for the transient animation faces.
pub const FINAL_BLANK_ODDS: u32 = 6;
pub const FRAME_BLANK_ODDS: u32 = 5;

/// Player zone dimensions in percent-of-viewport space.
pub const ZONE_W_PCT: f32 = 22.0;
pub const ZONE_H_PCT: f32 = 18.0;

/// Pointer pick radius around a token, percent space. Wider in x than y to
/// compensate for terminal glyph aspect ratio.
pub const PICK_RADIUS_X_PCT: f32 = 3.0;
pub const PICK_RADIUS_Y_PCT: f32 = 4.5;

/// Allowed player counts.
pub const MIN_PLAYERS: u8 = 2;
pub const MAX_PLAYERS: u8 = 4;

/// Token colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenColor {
    Red,
    Blue,
    Yellow,
    Green,
    Purple,
}

/// All token colors, in die-face order.
pub const COLORS: [TokenColor; 5] = [
    TokenColor::Red,
    TokenColor::Blue,
    TokenColor::Yellow,
    TokenColor::Green,
    TokenColor::Purple,
];

impl TokenColor {
    /// Convert to lowercase display string
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenColor::Red => "red",
            TokenColor::Blue => "blue",
            TokenColor::Yellow => "yellow",
            TokenColor::Green => "green",
            TokenColor::Purple => "purple",
        }
    }
}

/// Token shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenShape {
    Circle,
    Square,
    Triangle,
    Star,
    Hexagon,
}

/// All token shapes, in die-face order.
pub const SHAPES: [TokenShape; 5] = [
    TokenShape::Circle,
    TokenShape::Square,
    TokenShape::Triangle,
    TokenShape::Star,
    TokenShape::Hexagon,
];

impl TokenShape {
    /// Convert to lowercase display string
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenShape::Circle => "circle",
            TokenShape::Square => "square",
            TokenShape::Triangle => "triangle",
            TokenShape::Star => "star",
            TokenShape::Hexagon => "hexagon",
        }
    }
}

/// Game lifecycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Setup,
    Playing,
    Ended,
}

/// Fixed screen-corner assignment for a player zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Game actions (button/keyboard surface; pointer gestures are separate)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Setup only: choose the player count for the next game.
    SelectPlayers(u8),
    /// Setup -> Playing.
    Start,
    /// Playing: start a dice roll (ignored while one is animating).
    Roll,
    /// Ended -> Playing with the same player count.
    PlayAgain,
    /// Ended -> Setup.
    Lobby,
    /// Allowed in every phase.
    ToggleMute,
}

/// Unique, immutable token identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(pub u32);

/// Player identifier (1-based, matches the config table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u8);
