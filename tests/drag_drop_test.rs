//! Integration tests for pointer gesture handling.

use tui_bubble_match::core::token::{topmost_at, Token};
use tui_bubble_match::core::GameState;
use tui_bubble_match::types::{
    GameAction, GamePhase, PICK_RADIUS_X_PCT, PICK_RADIUS_Y_PCT, TICK_MS, TOTAL_TOKENS,
};

fn start_game(seed: u32) -> GameState {
    let mut state = GameState::new(seed);
    state.apply_action(GameAction::SelectPlayers(2));
    state.apply_action(GameAction::Start);
    state
}

fn pickable_token(state: &GameState) -> Token {
    *state
        .tokens()
        .iter()
        .rev()
        .find(|t| {
            topmost_at(state.tokens(), t.x, t.y, PICK_RADIUS_X_PCT, PICK_RADIUS_Y_PCT)
                == Some(t.id)
        })
        .expect("fresh table always has a pickable token")
}

#[test]
fn test_drop_outside_zones_moves_the_token() {
    let mut state = start_game(31);
    let token = pickable_token(&state);

    assert!(state.pointer_down(token.x, token.y));
    assert!(state.pointer_move(55.0, 50.0));
    assert!(state.pointer_up(60.0, 50.0));

    let moved = state.tokens().iter().find(|t| t.id == token.id).unwrap();
    assert_eq!((moved.x, moved.y), (60.0, 50.0));
    assert_eq!(state.tokens().len(), TOTAL_TOKENS);
    assert!(state.active_drag().is_none());
}

#[test]
fn test_press_on_empty_felt_starts_nothing() {
    let mut state = start_game(31);
    // Above the spawn band and between the top zones: guaranteed empty.
    assert!(!state.pointer_down(50.0, 5.0));
    assert!(state.active_drag().is_none());
    assert!(!state.pointer_up(50.0, 5.0));
}

#[test]
fn test_no_picking_while_dice_are_rolling() {
    let mut state = start_game(31);
    let token = pickable_token(&state);

    state.apply_action(GameAction::Roll);
    state.tick(TICK_MS);
    assert!(state.is_rolling());
    assert!(!state.pointer_down(token.x, token.y));
}

#[test]
fn test_second_press_cannot_steal_a_live_gesture() {
    let mut state = start_game(31);
    let token = pickable_token(&state);

    assert!(state.pointer_down(token.x, token.y));
    let first = state.active_drag().copied().unwrap();
    assert!(!state.pointer_down(token.x, token.y));
    assert_eq!(state.active_drag().copied(), Some(first));
}

#[test]
fn test_cancel_discards_gesture_without_moving_token() {
    let mut state = start_game(31);
    let token = pickable_token(&state);

    assert!(state.pointer_down(token.x, token.y));
    state.pointer_move(70.0, 60.0);
    state.pointer_cancel();

    let kept = state.tokens().iter().find(|t| t.id == token.id).unwrap();
    assert_eq!((kept.x, kept.y), (token.x, token.y));
    assert!(state.active_drag().is_none());
    // Release after cancel is a no-op.
    assert!(!state.pointer_up(70.0, 60.0));
}

#[test]
fn test_no_dragging_outside_play_phase() {
    let mut state = GameState::new(31);
    assert!(!state.pointer_down(50.0, 50.0));

    let mut state = start_game(31);
    let token = pickable_token(&state);
    assert_eq!(state.phase(), GamePhase::Playing);
    // Gesture survives into move/up only when one began.
    assert!(!state.pointer_move(token.x, token.y));
}

#[test]
fn test_drag_gesture_tracks_pointer() {
    let mut state = start_game(31);
    let token = pickable_token(&state);

    state.pointer_down(token.x, token.y);
    state.pointer_move(40.0, 45.0);
    let gesture = state.active_drag().unwrap();
    assert_eq!(gesture.token_id, token.id);
    assert_eq!((gesture.current_x, gesture.current_y), (40.0, 45.0));
    assert_eq!((gesture.start_x, gesture.start_y), (token.x, token.y));
    // The token itself does not move until release.
    let held = state.tokens().iter().find(|t| t.id == token.id).unwrap();
    assert_eq!((held.x, held.y), (token.x, token.y));
}
