//! Token module - the draggable game pieces
//!
//! Tokens are created in one batch of `TOTAL_TOKENS` at game start, removed
//! when matched, and only ever mutated by a released drag updating their
//! position.

use crate::core::rng::SimpleRng;
use crate::types::{
    TokenColor, TokenId, TokenShape, COLORS, SHAPES, SPAWN_MAX_X_PCT, SPAWN_MAX_Y_PCT,
    SPAWN_MIN_X_PCT, SPAWN_MIN_Y_PCT, TOTAL_TOKENS,
};

/// A draggable game piece with a color and shape.
///
/// `x`/`y` are percent-of-viewport coordinates in [0, 100]; `rotation` is
/// cosmetic degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub id: TokenId,
    pub color: TokenColor,
    pub shape: TokenShape,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
}

/// Spawn the full starting batch with random color, shape, position and
/// rotation inside the safe spawn rectangle.
///
/// Ids restart from 0 each batch; a batch never outlives the game that
/// spawned it.
pub fn spawn_batch(rng: &mut SimpleRng) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(TOTAL_TOKENS);
    for i in 0..TOTAL_TOKENS {
        tokens.push(Token {
            id: TokenId(i as u32),
            color: rng.pick(&COLORS),
            shape: rng.pick(&SHAPES),
            x: rng.next_f32_range(SPAWN_MIN_X_PCT, SPAWN_MAX_X_PCT),
            y: rng.next_f32_range(SPAWN_MIN_Y_PCT, SPAWN_MAX_Y_PCT),
            rotation: rng.next_f32_range(0.0, 360.0),
        });
    }
    tokens
}

/// Find a token by id.
pub fn find(tokens: &[Token], id: TokenId) -> Option<&Token> {
    tokens.iter().find(|t| t.id == id)
}

/// Move a token to new percent coordinates. Rotation is left unchanged.
/// Returns false if the id is not in the active set.
pub fn set_position(tokens: &mut [Token], id: TokenId, x: f32, y: f32) -> bool {
    match tokens.iter_mut().find(|t| t.id == id) {
        Some(token) => {
            token.x = x;
            token.y = y;
            true
        }
        None => false,
    }
}

/// Remove a token from the active set. Returns false if it was not present.
pub fn remove(tokens: &mut Vec<Token>, id: TokenId) -> bool {
    let before = tokens.len();
    tokens.retain(|t| t.id != id);
    tokens.len() != before
}

/// Topmost token under the pointer, if any.
///
/// Later tokens draw on top, so the scan runs back to front. The pick box is
/// elliptical in percent space (wider in x) to match the glyph footprint on
/// a terminal grid.
pub fn topmost_at(tokens: &[Token], x: f32, y: f32, rx: f32, ry: f32) -> Option<TokenId> {
    tokens
        .iter()
        .rev()
        .find(|t| {
            let dx = (t.x - x) / rx;
            let dy = (t.y - y) / ry;
            dx * dx + dy * dy <= 1.0
        })
        .map(|t| t.id)
}
