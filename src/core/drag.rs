//! Drag module - single-slot pointer gesture tracking and drop resolution
//!
//! At most one gesture is live process-wide. Only start/current coordinates
//! are kept; the pointer path is not recorded.

use crate::core::dice::RoundRule;
use crate::core::token::Token;
use crate::core::zones::ZoneLookup;
use crate::types::{PlayerId, TokenId};

/// One continuous pointer interaction from press to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pub token_id: TokenId,
    pub start_x: f32,
    pub start_y: f32,
    pub current_x: f32,
    pub current_y: f32,
}

/// Single-slot gesture tracker: the first gesture wins until released.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    active: Option<DragGesture>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&DragGesture> {
        self.active.as_ref()
    }

    /// Begin a gesture. Ignored (returns false) while one is already live.
    pub fn begin(&mut self, token_id: TokenId, x: f32, y: f32) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(DragGesture {
            token_id,
            start_x: x,
            start_y: y,
            current_x: x,
            current_y: y,
        });
        true
    }

    /// Update the current pointer coordinates of the live gesture.
    pub fn update(&mut self, x: f32, y: f32) -> bool {
        match self.active.as_mut() {
            Some(gesture) => {
                gesture.current_x = x;
                gesture.current_y = y;
                true
            }
            None => false,
        }
    }

    /// End the gesture and take it out of the slot.
    pub fn release(&mut self) -> Option<DragGesture> {
        self.active.take()
    }

    /// Discard the gesture with no further effect (pointer cancel).
    pub fn cancel(&mut self) {
        self.active = None;
    }
}

/// How a released gesture resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropOutcome {
    /// No zone under the release point: the token settles where it was
    /// dropped.
    Moved { x: f32, y: f32 },
    /// Zone hit and the rule accepted the token.
    Matched { player: PlayerId },
    /// Zone hit but the rule rejected the token; it snaps back.
    Rejected { player: PlayerId },
}

/// Resolve a released gesture against the zone geometry and the round rule.
pub fn resolve_drop(
    gesture: &DragGesture,
    token: &Token,
    rule: &RoundRule,
    zones: &impl ZoneLookup,
) -> DropOutcome {
    let (x, y) = (gesture.current_x, gesture.current_y);
    match zones.player_at(x, y) {
        Some(player) => {
            if rule.matches(token) {
                DropOutcome::Matched { player }
            } else {
                DropOutcome::Rejected { player }
            }
        }
        None => DropOutcome::Moved { x, y },
    }
}
