//! Player module - roster, score ledger, winner selection

use crate::types::{Corner, PlayerId, MAX_PLAYERS, MIN_PLAYERS};

/// A seated player with a fixed corner zone and a running score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: &'static str,
    pub score: u32,
    pub corner: Corner,
}

/// Static seat configuration: id, display name, corner.
///
/// A game of N players takes the first N entries.
const SEAT_CONFIGS: [(u8, &str, Corner); MAX_PLAYERS as usize] = [
    (1, "P1", Corner::TopLeft),
    (2, "P2", Corner::TopRight),
    (3, "P3", Corner::BottomLeft),
    (4, "P4", Corner::BottomRight),
];

/// Build the roster for a game. `count` is clamped to the allowed 2..=4.
pub fn build_roster(count: u8) -> Vec<Player> {
    let count = count.clamp(MIN_PLAYERS, MAX_PLAYERS) as usize;
    SEAT_CONFIGS[..count]
        .iter()
        .map(|&(id, name, corner)| Player {
            id: PlayerId(id),
            name,
            score: 0,
            corner,
        })
        .collect()
}

/// Increment a player's score by one. Returns false for an unknown id.
pub fn add_point(players: &mut [Player], id: PlayerId) -> bool {
    match players.iter_mut().find(|p| p.id == id) {
        Some(player) => {
            player.score += 1;
            true
        }
        None => false,
    }
}

/// Sum of all scores.
pub fn total_score(players: &[Player]) -> u32 {
    players.iter().map(|p| p.score).sum()
}

/// The player with the maximum score; ties go to the first occurrence in
/// player order.
pub fn winner(players: &[Player]) -> Option<&Player> {
    let mut best: Option<&Player> = None;
    for player in players {
        match best {
            Some(b) if player.score <= b.score => {}
            _ => best = Some(player),
        }
    }
    best
}
