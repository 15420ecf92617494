//! Audio seam - discrete sound-event notifications
//!
//! The core emits `SoundEvent`s; a sink decides what (if anything) to do
//! with them. Sinks have no return channel into the game and their failures
//! are ignored, so audio can never corrupt core state.

use std::io::Write;

/// Discrete audio cues emitted by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEvent {
    /// UI button press.
    Click,
    /// Token picked up.
    Pickup,
    /// Match accepted, token scored.
    Accept,
    /// Drop rejected by the round rule.
    Reject,
    /// Game over fanfare.
    Win,
    /// Dice rattle during the roll animation.
    RollTick,
    MusicStart,
    MusicStop,
    MuteToggle,
}

/// Receives sound events. No return value; implementations swallow their
/// own failures.
pub trait AudioSink {
    fn play(&mut self, event: SoundEvent);
}

/// Discards every event.
#[derive(Debug, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&mut self, _event: SoundEvent) {}
}

/// Minimal terminal "audio": rings the bell on the cues that matter while
/// playing. Write errors are deliberately dropped.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl AudioSink for TerminalBell {
    fn play(&mut self, event: SoundEvent) {
        let ring = matches!(
            event,
            SoundEvent::Accept | SoundEvent::Reject | SoundEvent::Win
        );
        if ring {
            let mut out = std::io::stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
    }
}

/// Test sink that records everything it is handed.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<SoundEvent>,
}

impl AudioSink for RecordingSink {
    fn play(&mut self, event: SoundEvent) {
        self.events.push(event);
    }
}
