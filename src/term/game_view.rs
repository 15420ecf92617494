//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The game board lives in percent-of-viewport space; `Viewport` owns the
//! conversion between percent coordinates and terminal cells, in both
//! directions (rendering goes one way, mouse input the other).

use crate::core::snapshot::GameSnapshot;
use crate::core::token::Token;
use crate::core::zones::{corner_rect, ZoneRect};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Corner, GamePhase, TokenColor, TokenShape, MAX_PLAYERS, MIN_PLAYERS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Percent-space point to the nearest terminal cell.
    pub fn pct_to_cell(&self, x_pct: f32, y_pct: f32) -> (u16, u16) {
        let w = self.width.max(1) as f32;
        let h = self.height.max(1) as f32;
        let col = (x_pct.clamp(0.0, 100.0) / 100.0 * (w - 1.0)).round() as u16;
        let row = (y_pct.clamp(0.0, 100.0) / 100.0 * (h - 1.0)).round() as u16;
        (col, row)
    }

    /// Terminal cell center to percent space. Inverse of `pct_to_cell`.
    pub fn cell_to_pct(&self, col: u16, row: u16) -> (f32, f32) {
        let x = if self.width > 1 {
            col as f32 / (self.width - 1) as f32 * 100.0
        } else {
            0.0
        };
        let y = if self.height > 1 {
            row as f32 / (self.height - 1) as f32 * 100.0
        } else {
            0.0
        };
        (x.clamp(0.0, 100.0), y.clamp(0.0, 100.0))
    }
}

fn token_fg(color: TokenColor) -> Rgb {
    match color {
        TokenColor::Red => Rgb::new(239, 68, 68),
        TokenColor::Blue => Rgb::new(59, 130, 246),
        TokenColor::Yellow => Rgb::new(250, 204, 21),
        TokenColor::Green => Rgb::new(34, 197, 94),
        TokenColor::Purple => Rgb::new(168, 85, 247),
    }
}

fn shape_glyph(shape: TokenShape) -> char {
    match shape {
        TokenShape::Circle => '●',
        TokenShape::Square => '■',
        TokenShape::Triangle => '▲',
        TokenShape::Star => '★',
        TokenShape::Hexagon => '⬢',
    }
}

fn zone_fg(corner: Corner) -> Rgb {
    match corner {
        Corner::TopLeft => Rgb::new(225, 29, 72),
        Corner::TopRight => Rgb::new(2, 132, 199),
        Corner::BottomLeft => Rgb::new(5, 150, 105),
        Corner::BottomRight => Rgb::new(217, 119, 6),
    }
}

/// Darker companion used as the zone floor so tokens stay readable on top.
fn zone_bg(corner: Corner) -> Rgb {
    let c = zone_fg(corner);
    Rgb::new(c.r / 4, c.g / 4, c.b / 4)
}

/// Renders snapshots into framebuffers.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render `snap` into `fb`, resizing it to the viewport first.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        match snap.phase {
            GamePhase::Setup => self.draw_setup(snap, fb),
            GamePhase::Playing => self.draw_table(snap, viewport, fb),
            GamePhase::Ended => {
                self.draw_table(snap, viewport, fb);
                self.draw_winner_overlay(snap, fb);
            }
        }

        if snap.muted {
            let tag = "[muted]";
            let x = viewport.width.saturating_sub(tag.chars().count() as u16);
            fb.put_str(
                x,
                0,
                tag,
                CellStyle {
                    dim: true,
                    ..CellStyle::default()
                },
            );
        }
    }

    /// Convenience for tests and one-shot callers.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_setup(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        let title = CellStyle {
            fg: Rgb::new(250, 204, 21),
            bold: true,
            ..CellStyle::default()
        };
        let plain = CellStyle::default();
        let y0 = fb.height() / 3;

        fb.put_str_centered(y0, "B U B B L E   M A T C H", title);
        fb.put_str_centered(y0 + 2, "How many players?", plain);

        let selected = if snap.player_count == 0 {
            MIN_PLAYERS
        } else {
            snap.player_count
        };
        let mut x = fb.width().saturating_sub(11) / 2;
        for n in MIN_PLAYERS..=MAX_PLAYERS {
            let style = if n == selected {
                CellStyle {
                    fg: Rgb::new(30, 27, 75),
                    bg: Rgb::new(250, 204, 21),
                    bold: true,
                    dim: false,
                }
            } else {
                plain
            };
            fb.put_str(x, y0 + 4, &format!(" {n} "), style);
            x += 4;
        }

        fb.put_str_centered(
            fb.height().saturating_sub(2),
            "[2-4] players   [Enter] start   [m] mute   [q] quit",
            CellStyle {
                dim: true,
                ..plain
            },
        );
    }

    fn draw_table(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        // Zones first so tokens and HUD draw on top.
        for player in &snap.players {
            self.draw_zone(player.corner, &format!("{} {}", player.name, player.score), viewport, fb);
        }

        self.draw_dice_hud(snap, fb);

        // Dragged token is skipped here and drawn last, at the pointer.
        let dragged = snap.drag.as_ref().map(|g| g.token_id);
        for token in &snap.tokens {
            if Some(token.id) == dragged {
                continue;
            }
            let rejected = snap.reject_token == Some(token.id);
            self.draw_token(token, token.x, token.y, rejected, false, viewport, fb);
        }

        if let Some(gesture) = &snap.drag {
            if let Some(token) = snap.tokens.iter().find(|t| t.id == gesture.token_id) {
                self.draw_token(
                    token,
                    gesture.current_x,
                    gesture.current_y,
                    false,
                    true,
                    viewport,
                    fb,
                );
            }
        }
    }

    fn draw_zone(&self, corner: Corner, label: &str, viewport: Viewport, fb: &mut FrameBuffer) {
        let rect = corner_rect(corner);
        let (x0, y0, w, h) = zone_cells(rect, viewport);

        let floor = CellStyle {
            fg: zone_fg(corner),
            bg: zone_bg(corner),
            bold: false,
            dim: false,
        };
        fb.fill_rect(x0, y0, w, h, ' ', floor);

        let label_style = CellStyle {
            bold: true,
            ..floor
        };
        // Label hugs the screen corner the zone sits in.
        let label_w = label.chars().count() as u16;
        let (lx, ly) = match corner {
            Corner::TopLeft => (x0 + 1, y0),
            Corner::TopRight => (x0 + w.saturating_sub(label_w + 1), y0),
            Corner::BottomLeft => (x0 + 1, y0 + h.saturating_sub(1)),
            Corner::BottomRight => (
                x0 + w.saturating_sub(label_w + 1),
                y0 + h.saturating_sub(1),
            ),
        };
        fb.put_str(lx, ly, label, label_style);
    }

    fn draw_dice_hud(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        let plain = CellStyle::default();

        let color_face = match snap.rule.color {
            Some(c) => c.as_str().to_uppercase(),
            None => "ANY".to_string(),
        };
        let shape_face = match snap.rule.shape {
            Some(s) => shape_glyph(s).to_string(),
            None => "ANY".to_string(),
        };

        if snap.rolling || snap.has_rolled {
            let face_style = CellStyle {
                fg: snap.rule.color.map(token_fg).unwrap_or(Rgb::new(226, 232, 240)),
                bold: true,
                ..plain
            };
            let dice = format!("[ {color_face} ] [ {shape_face} ]");
            let x = fb.width().saturating_sub(dice.chars().count() as u16) / 2;
            fb.put_str(x, 0, &dice, face_style);
        }

        let text_style = if snap.rolling {
            CellStyle { dim: true, ..plain }
        } else {
            CellStyle { bold: true, ..plain }
        };
        fb.put_str_centered(1, &snap.rule_text, text_style);

        if snap.phase == GamePhase::Playing && !snap.rolling {
            fb.put_str_centered(
                2,
                "[r] roll   [m] mute   [q] quit",
                CellStyle { dim: true, ..plain },
            );
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_token(
        &self,
        token: &Token,
        x_pct: f32,
        y_pct: f32,
        rejected: bool,
        lifted: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let (col, row) = viewport.pct_to_cell(x_pct, y_pct);
        let style = if rejected {
            CellStyle {
                fg: Rgb::new(255, 255, 255),
                bg: Rgb::new(190, 18, 60),
                bold: true,
                dim: false,
            }
        } else {
            CellStyle {
                fg: token_fg(token.color),
                bold: lifted,
                // Lifted tokens keep the table background so they read the
                // same over zones.
                ..CellStyle::default()
            }
        };
        fb.put_char(col, row, shape_glyph(token.shape), style);
    }

    fn draw_winner_overlay(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        let Some(winner) = &snap.winner else {
            return;
        };

        let banner = CellStyle {
            fg: Rgb::new(250, 204, 21),
            bold: true,
            ..CellStyle::default()
        };
        let plain = CellStyle::default();
        let mid = fb.height() / 2;

        fb.put_str_centered(mid.saturating_sub(1), &format!("{} WINS!", winner.name), banner);

        let mut scores = String::new();
        for player in &snap.players {
            if !scores.is_empty() {
                scores.push_str("   ");
            }
            scores.push_str(&format!("{} {}", player.name, player.score));
        }
        fb.put_str_centered(mid + 1, &scores, plain);
        fb.put_str_centered(
            mid + 3,
            "[Enter] play again   [l] lobby   [q] quit",
            CellStyle { dim: true, ..plain },
        );
    }
}

/// Percent-space zone rect to an inclusive cell rect.
fn zone_cells(rect: ZoneRect, viewport: Viewport) -> (u16, u16, u16, u16) {
    let (x0, y0) = viewport.pct_to_cell(rect.x, rect.y);
    let (x1, y1) = viewport.pct_to_cell(rect.x + rect.w, rect.y + rect.h);
    (x0, y0, x1.saturating_sub(x0) + 1, y1.saturating_sub(y0) + 1)
}
