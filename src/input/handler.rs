//! Key/mouse mapping for terminal environments.
//!
//! Keys drive the button surface (setup, roll, restart); the mouse is the
//! pointer source for token drags. Mapping is phase-aware so each key can
//! mean the obvious thing on the screen the player is looking at; actions
//! that slip through in the wrong phase are ignored by the core anyway.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::types::{GameAction, GamePhase};

/// A terminal event translated into game terms.
///
/// Pointer coordinates are raw terminal cells; the caller converts them to
/// percent space against the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Action(GameAction),
    PointerDown { col: u16, row: u16 },
    PointerMove { col: u16, row: u16 },
    PointerUp { col: u16, row: u16 },
    Resize { width: u16, height: u16 },
    Quit,
}

/// Quit on `q`, `Esc`, or Ctrl-C in any phase.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn map_key(key: KeyEvent, phase: GamePhase) -> Option<GameAction> {
    // Global keys first.
    if let KeyCode::Char('m') | KeyCode::Char('M') = key.code {
        return Some(GameAction::ToggleMute);
    }

    match phase {
        GamePhase::Setup => match key.code {
            KeyCode::Char(c @ '2'..='4') => {
                Some(GameAction::SelectPlayers(c as u8 - b'0'))
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Start),
            _ => None,
        },
        GamePhase::Playing => match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char(' ') => {
                Some(GameAction::Roll)
            }
            _ => None,
        },
        GamePhase::Ended => match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
                Some(GameAction::PlayAgain)
            }
            KeyCode::Char('l') | KeyCode::Char('L') => Some(GameAction::Lobby),
            _ => None,
        },
    }
}

fn map_mouse(mouse: MouseEvent) -> Option<UiEvent> {
    let (col, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(UiEvent::PointerDown { col, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(UiEvent::PointerMove { col, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(UiEvent::PointerUp { col, row }),
        _ => None,
    }
}

/// Translate one crossterm event for the given phase.
pub fn map_event(event: &Event, phase: GamePhase) -> Option<UiEvent> {
    match event {
        Event::Key(key) => {
            // Key repeat/release are irrelevant to a click-style surface.
            if key.kind != KeyEventKind::Press {
                return None;
            }
            if should_quit(*key) {
                return Some(UiEvent::Quit);
            }
            map_key(*key, phase).map(UiEvent::Action)
        }
        Event::Mouse(mouse) => map_mouse(*mouse),
        Event::Resize(width, height) => Some(UiEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}
