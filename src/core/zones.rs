//! Zone module - player drop-zone geometry
//!
//! The sole spatial query drop resolution depends on: given percent-space
//! pointer coordinates, which player's zone (if any) contains them.

use crate::core::player::Player;
use crate::types::{Corner, PlayerId, ZONE_H_PCT, ZONE_W_PCT};

/// Axis-aligned rectangle in percent-of-viewport space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl ZoneRect {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.w && y >= self.y && y <= self.y + self.h
    }
}

/// Percent-space rectangle for a corner zone.
pub fn corner_rect(corner: Corner) -> ZoneRect {
    let (x, y) = match corner {
        Corner::TopLeft => (0.0, 0.0),
        Corner::TopRight => (100.0 - ZONE_W_PCT, 0.0),
        Corner::BottomLeft => (0.0, 100.0 - ZONE_H_PCT),
        Corner::BottomRight => (100.0 - ZONE_W_PCT, 100.0 - ZONE_H_PCT),
    };
    ZoneRect {
        x,
        y,
        w: ZONE_W_PCT,
        h: ZONE_H_PCT,
    }
}

/// Resolves pointer coordinates to the player zone containing them.
pub trait ZoneLookup {
    fn player_at(&self, x: f32, y: f32) -> Option<PlayerId>;
}

/// Static corner zones, one per seated player. On overlap (not possible
/// with the stock corner layout) the first registered zone wins, mirroring
/// topmost-first hit testing.
#[derive(Debug, Clone, Default)]
pub struct CornerZones {
    zones: Vec<(PlayerId, ZoneRect)>,
}

impl CornerZones {
    pub fn for_players(players: &[Player]) -> Self {
        Self {
            zones: players
                .iter()
                .map(|p| (p.id, corner_rect(p.corner)))
                .collect(),
        }
    }

    pub fn rects(&self) -> &[(PlayerId, ZoneRect)] {
        &self.zones
    }
}

impl ZoneLookup for CornerZones {
    fn player_at(&self, x: f32, y: f32) -> Option<PlayerId> {
        self.zones
            .iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(id, _)| *id)
    }
}
