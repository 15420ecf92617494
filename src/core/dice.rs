//! Dice module - round rule, match predicate, and the roll sequencer
//!
//! A round rule is a pair of die faces, each either a concrete value or
//! blank (wildcard). The sequencer animates a roll over a fixed number of
//! frames before settling on the final faces.

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::core::token::Token;
use crate::types::{
    TokenColor, TokenShape, COLORS, FINAL_BLANK_ODDS, FRAME_BLANK_ODDS, ROLL_FRAMES,
    ROLL_FRAME_MS, ROLL_SOUND_EVERY, SHAPES,
};

/// The currently active color/shape match criterion.
///
/// `None` on a die means blank (wildcard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundRule {
    pub color: Option<TokenColor>,
    pub shape: Option<TokenShape>,
}

impl RoundRule {
    pub fn new(color: Option<TokenColor>, shape: Option<TokenShape>) -> Self {
        Self { color, shape }
    }

    /// The match predicate. Total over the four blank/non-blank branches:
    ///
    /// - both blank: any token qualifies
    /// - color blank, shape set: shape must match
    /// - shape blank, color set: color must match
    /// - both set: both must match
    pub fn matches(&self, token: &Token) -> bool {
        match (self.color, self.shape) {
            (None, None) => true,
            (None, Some(shape)) => token.shape == shape,
            (Some(color), None) => token.color == color,
            (Some(color), Some(shape)) => token.color == color && token.shape == shape,
        }
    }

    /// Advisory rule text shown under the dice.
    pub fn describe(&self) -> String {
        match (self.color, self.shape) {
            (Some(color), Some(shape)) => {
                format!("Find {} {}s!", color.as_str(), shape.as_str())
            }
            (None, Some(shape)) => format!("Find ANY {}!", shape.as_str()),
            (Some(color), None) => format!("Find ANY {} item!", color.as_str()),
            (None, None) => "Free for all! Grab anything!".to_string(),
        }
    }
}

/// Roll both dice: each face independently blank with probability
/// 1 in `blank_odds`, otherwise uniform over the five values.
pub fn roll_faces(rng: &mut SimpleRng, blank_odds: u32) -> RoundRule {
    let color = if rng.one_in(blank_odds) {
        None
    } else {
        Some(rng.pick(&COLORS))
    };
    let shape = if rng.one_in(blank_odds) {
        None
    } else {
        Some(rng.pick(&SHAPES))
    };
    RoundRule::new(color, shape)
}

/// Events produced by advancing the roll animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollEvent {
    /// Transient faces shown for one animation frame.
    Frame(RoundRule),
    /// Rattle sound cue (every `ROLL_SOUND_EVERY` frames).
    Rattle,
    /// Final faces; the roll is no longer animating.
    Settled(RoundRule),
}

/// Tick-driven roll animation.
///
/// A roll request while a roll is animating is rejected outright; re-entry
/// is impossible because `rolling` is only cleared when the roll settles.
#[derive(Debug, Clone, Default)]
pub struct RollSequencer {
    rolling: bool,
    frame_timer_ms: u32,
    frames_shown: u32,
}

impl RollSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_rolling(&self) -> bool {
        self.rolling
    }

    /// Begin a roll. Returns false (and does nothing) if one is in flight.
    pub fn start(&mut self) -> bool {
        if self.rolling {
            return false;
        }
        self.rolling = true;
        self.frame_timer_ms = 0;
        self.frames_shown = 0;
        true
    }

    /// Advance the animation by `elapsed_ms`, drawing transient faces from
    /// `rng`. Emits at most one `Settled` event, after `ROLL_FRAMES` frames.
    pub fn tick(&mut self, elapsed_ms: u32, rng: &mut SimpleRng) -> ArrayVec<RollEvent, 32> {
        let mut events = ArrayVec::new();
        if !self.rolling {
            return events;
        }

        self.frame_timer_ms += elapsed_ms;
        while self.frame_timer_ms >= ROLL_FRAME_MS {
            self.frame_timer_ms -= ROLL_FRAME_MS;

            if self.frames_shown % ROLL_SOUND_EVERY == 0 {
                let _ = events.try_push(RollEvent::Rattle);
            }
            let _ = events.try_push(RollEvent::Frame(roll_faces(rng, FRAME_BLANK_ODDS)));

            self.frames_shown += 1;
            if self.frames_shown >= ROLL_FRAMES {
                self.rolling = false;
                let _ = events.try_push(RollEvent::Settled(roll_faces(rng, FINAL_BLANK_ODDS)));
                break;
            }
        }

        events
    }
}
