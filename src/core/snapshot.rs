//! Read-only state snapshot consumed by the renderer and by observers.

use crate::core::dice::RoundRule;
use crate::core::drag::DragGesture;
use crate::core::player::Player;
use crate::core::token::Token;
use crate::types::{GamePhase, TokenId};

/// Full picture of the game for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub player_count: u8,
    pub players: Vec<Player>,
    pub tokens: Vec<Token>,
    /// Faces currently shown on the dice (transient while rolling).
    pub rule: RoundRule,
    pub rule_text: String,
    /// False until the first roll has settled.
    pub has_rolled: bool,
    pub rolling: bool,
    pub drag: Option<DragGesture>,
    /// Token currently flashing a rejection marker.
    pub reject_token: Option<TokenId>,
    pub winner: Option<Player>,
    pub muted: bool,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.phase = GamePhase::Setup;
        self.player_count = 0;
        self.players.clear();
        self.tokens.clear();
        self.rule = RoundRule::default();
        self.rule_text.clear();
        self.has_rolled = false;
        self.rolling = false;
        self.drag = None;
        self.reject_token = None;
        self.winner = None;
        self.muted = false;
        self.seed = 0;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            phase: GamePhase::Setup,
            player_count: 0,
            players: Vec::new(),
            tokens: Vec::new(),
            rule: RoundRule::default(),
            rule_text: String::new(),
            has_rolled: false,
            rolling: false,
            drag: None,
            reject_token: None,
            winner: None,
            muted: false,
            seed: 0,
        }
    }
}
