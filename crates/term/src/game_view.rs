//! GameView: maps an [`EngineSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::catalog::color;
use crate::engine::EngineSnapshot;
use crate::fb::{FrameBuffer, Glyph, Style};
use crate::types::Rgb;

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
const DOT_FG: Rgb = Rgb::new(70, 70, 80);
const BORDER_FG: Rgb = Rgb::new(200, 200, 200);
const TEXT_FG: Rgb = Rgb::new(220, 220, 220);
const MUTED_FG: Rgb = Rgb::new(140, 140, 150);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Settled cells whose id has no recorded color
const FALLBACK_FG: Rgb = Rgb::new(160, 160, 160);

/// Past games listed in the side panel
const HISTORY_ROWS: usize = 5;

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
}

/// Screen position of the field frame
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Draws the field, the side panel and the game-over overlay.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport
    pub fn render_into(&self, snap: &EngineSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let game = &snap.game;
        let field_w = clamp_u16(game.width).saturating_mul(self.cell_w);
        let field_h = clamp_u16(game.height);
        let frame = Frame {
            x: viewport.width.saturating_sub(field_w.saturating_add(2)) / 2,
            y: viewport.height.saturating_sub(field_h.saturating_add(2)) / 2,
            w: field_w.saturating_add(2),
            h: field_h.saturating_add(2),
        };
        // Cells past the viewport edge are never visible.
        let cols = game.width.min(viewport.width as usize);
        let rows = game.height.min(viewport.height as usize);

        self.draw_border(fb, frame);

        for y in 0..rows {
            for x in 0..cols {
                match game.cell(x, y) {
                    0 => self.draw_cell(fb, frame, x as u16, y as u16, '·', DOT_FG),
                    id => {
                        let fg = game.color_of(id).unwrap_or(FALLBACK_FG);
                        self.draw_cell(fb, frame, x as u16, y as u16, '█', fg);
                    }
                }
            }
        }

        if let Some(active) = &game.active {
            let fg = game.color_of(active.id).unwrap_or_else(|| color(active.kind));
            for (x, y) in active.cells() {
                if x < 0 || y < 0 || x as usize >= cols || y as usize >= rows {
                    continue;
                }
                self.draw_cell(fb, frame, x as u16, y as u16, '█', fg);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if game.game_over {
            self.draw_game_over(fb, snap, frame);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &EngineSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let style = Style::new(BORDER_FG, BLACK);
        let Frame { x, y, w, h } = frame;
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        fb.set(x, y, Glyph::new('┌', style));
        fb.set(right, y, Glyph::new('┐', style));
        fb.set(x, bottom, Glyph::new('└', style));
        fb.set(right, bottom, Glyph::new('┘', style));
        for cx in x.saturating_add(1)..right {
            fb.set(cx, y, Glyph::new('─', style));
            fb.set(cx, bottom, Glyph::new('─', style));
        }
        for cy in y.saturating_add(1)..bottom {
            fb.set(x, cy, Glyph::new('│', style));
            fb.set(right, cy, Glyph::new('│', style));
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, ch: char, fg: Rgb) {
        let px = frame
            .x
            .saturating_add(1)
            .saturating_add(x.saturating_mul(self.cell_w));
        let py = frame.y.saturating_add(1).saturating_add(y);
        fb.fill_rect(px, py, self.cell_w, 1, Glyph::new(ch, Style::new(fg, FIELD_BG)));
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &EngineSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if viewport.width.saturating_sub(panel_x) < 10 {
            return;
        }

        let label = Style::new(TEXT_FG, BLACK).bold();
        let value = Style::new(TEXT_FG, BLACK);
        let muted = Style::new(MUTED_FG, BLACK);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_str(panel_x, y + 1, &snap.game.score.to_string(), value);
        y += 3;

        let history = &snap.score_history;
        if let Some(best) = history.iter().max() {
            fb.put_str(panel_x, y, "BEST", label);
            fb.put_str(panel_x, y + 1, &best.to_string(), value);
            y += 3;
        }

        fb.put_str(panel_x, y, "GAMES", label);
        y += 1;
        if history.is_empty() {
            fb.put_str(panel_x, y, "-", muted);
        }
        for (n, score) in history.iter().enumerate().rev().take(HISTORY_ROWS) {
            fb.put_str(panel_x, y, &format!("#{:<3} {}", n + 1, score), value);
            y += 1;
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &EngineSnapshot, frame: Frame) {
        let title = Style::new(WHITE, BLACK).bold();
        let body = Style::new(TEXT_FG, BLACK);
        let mid = frame.y.saturating_add(frame.h / 2);

        let final_score = snap.score_history.last().copied().unwrap_or(snap.game.score);
        self.put_centered(fb, frame, mid.saturating_sub(1), "GAME OVER", title);
        self.put_centered(fb, frame, mid, &format!("Score {final_score}"), body);
        if let Some(left) = snap.restart_in {
            let secs = left.as_millis().div_ceil(1000);
            self.put_centered(fb, frame, mid.saturating_add(1), &format!("New game in {secs}..."), body);
        }
    }

    fn put_centered(&self, fb: &mut FrameBuffer, frame: Frame, y: u16, text: &str, style: Style) {
        let len = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(len) / 2);
        fb.put_str(x, y, text, style);
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ActiveSnapshot, GameSnapshot, Occupancy};
    use crate::types::{PieceKind, Rotation};
    use std::time::Duration;

    fn snapshot(width: usize, height: usize) -> EngineSnapshot {
        EngineSnapshot {
            game: GameSnapshot {
                width,
                height,
                cells: vec![0; width * height],
                ..GameSnapshot::default()
            },
            ..EngineSnapshot::default()
        }
    }

    fn screen(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn frame_matches_field_size() {
        let fb = GameView::default().render(&snapshot(6, 10), Viewport::new(14, 12));
        assert_eq!(fb.row_text(0), format!("┌{}┐", "─".repeat(12)));
        assert_eq!(fb.row_text(11), format!("└{}┘", "─".repeat(12)));
        assert_eq!(fb.row_text(1), format!("│{}│", "·".repeat(12)));
    }

    #[test]
    fn settled_and_active_cells_use_piece_colors() {
        let mut snap = snapshot(6, 10);
        let red = Rgb::new(255, 0, 0);
        snap.game.cells[9 * 6] = 1;
        snap.game.colors.insert(1, red);
        snap.game.active = Some(ActiveSnapshot {
            id: 2,
            kind: PieceKind::O,
            rotation: Rotation::R0,
            x: 4,
            y: 0,
            occupancy: Occupancy::from_rows(&[&[1u32, 1], &[1, 1]]),
        });

        let fb = GameView::default().render(&snap, Viewport::new(14, 12));

        let settled = fb.get(1, 10).unwrap();
        assert_eq!(settled.ch, '█');
        assert_eq!(settled.style.fg, red);
        let active = fb.get(9, 1).unwrap();
        assert_eq!(active.ch, '█');
        assert_eq!(active.style.fg, color(PieceKind::O));
    }

    #[test]
    fn side_panel_lists_score_and_history() {
        let mut snap = snapshot(6, 10);
        snap.game.score = 3;
        snap.score_history = vec![4, 9, 2];

        let text = screen(&GameView::default().render(&snap, Viewport::new(40, 12)));
        assert!(text.contains("SCORE"));
        assert!(text.contains("BEST"));
        assert!(text.contains("#3   2"));
        assert!(text.contains("#1   4"));
    }

    #[test]
    fn game_over_overlay_shows_countdown() {
        let mut snap = snapshot(10, 20);
        snap.game.game_over = true;
        snap.score_history = vec![7];
        snap.restart_in = Some(Duration::from_millis(2300));

        let text = screen(&GameView::default().render(&snap, Viewport::new(40, 24)));
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Score 7"));
        assert!(text.contains("New game in 3..."));
    }

    #[test]
    fn oversized_field_is_clipped() {
        let fb = GameView::default().render(&snapshot(70_000, 12), Viewport::new(40, 16));
        assert_eq!((fb.width(), fb.height()), (40, 16));
        assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
        assert_eq!(fb.get(1, 2).unwrap().ch, '·');
        assert_eq!(fb.get(39, 1).unwrap().ch, '─');

        let fb = GameView::new(3).render(&snapshot(10, 70_000), Viewport::new(40, 10));
        assert_eq!(fb.get(4, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(4, 9).unwrap().ch, '│');
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let fb = GameView::default().render(&snapshot(10, 20), Viewport::new(3, 2));
        assert_eq!((fb.width(), fb.height()), (3, 2));
    }
}
