//! GameView: maps a `core::GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::FrameCanvas;
use crate::core::{DropOutcome, DropZoneView, GameSession, Paint, VisualState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{RectF, ShapeKind};

/// Columns reserved for the side panel.
const PANEL_W: u16 = 20;

/// Narrowest play area (in columns) that still gets a side panel.
const MIN_PLAY_W_WITH_PANEL: u16 = 40;

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

/// A lightweight terminal renderer for the shape-sorting game.
pub struct GameView {
    /// Terminal columns per layout unit.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per unit compensates for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    fn play_cols(&self, viewport: Viewport) -> u16 {
        if self.has_panel(viewport) {
            viewport.width - PANEL_W
        } else {
            viewport.width
        }
    }

    fn has_panel(&self, viewport: Viewport) -> bool {
        viewport.width >= MIN_PLAY_W_WITH_PANEL + PANEL_W
    }

    /// Size of the play area in layout units, for [`GameSession::layout`].
    pub fn play_area(&self, viewport: Viewport) -> (f32, f32) {
        (
            (self.play_cols(viewport) / self.cell_w) as f32,
            viewport.height as f32,
        )
    }

    /// Map a terminal cell to the layout point at its center.
    pub fn to_layout(&self, col: u16, row: u16) -> (f32, f32) {
        (
            (col as f32 + 0.5) / self.cell_w as f32,
            row as f32 + 0.5,
        )
    }

    /// Render the session into an existing framebuffer.
    pub fn render_into(&self, session: &GameSession, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        for view in session.zones() {
            self.draw_zone(fb, view);
        }

        let held = session.held_index();
        for (i, token) in session.tray().iter().enumerate() {
            if Some(i) == held {
                // Leave a faint slot where the token came from.
                let mut canvas = FrameCanvas::new(fb, self.cell_w);
                draw_kind(&mut canvas, token.kind, token.bounds, Paint::stroke(Rgb::new(70, 70, 80)));
                continue;
            }
            let mut canvas = FrameCanvas::new(fb, self.cell_w);
            draw_kind(&mut canvas, token.kind, token.bounds, Paint::fill(shape_color(token.kind)));
        }

        if let Some(token) = session.held_token() {
            let mut canvas = FrameCanvas::new(fb, self.cell_w);
            draw_kind(&mut canvas, token.kind, token.bounds, Paint::fill(shape_color(token.kind)));
        }

        if self.has_panel(viewport) {
            self.draw_side_panel(fb, session, viewport);
        }

        if session.is_level_complete() {
            self.draw_overlay(fb, viewport);
        }

        self.draw_help(fb, viewport);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &GameSession, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_zone(&self, fb: &mut FrameBuffer, view: &DropZoneView) {
        let Some(zone) = view.drop_zone() else {
            return;
        };
        let kind = zone.expected_shape();
        let hovered = view.visual_state() == VisualState::Hovered;

        let border = CellStyle {
            fg: if hovered {
                Rgb::new(250, 230, 120)
            } else {
                Rgb::new(130, 130, 140)
            },
            bold: hovered,
            ..CellStyle::default()
        };
        let cw = self.cell_w as f32;
        let r = view.scaled_bounds();
        let x0 = ((r.left * cw).floor() - 1.0) as u16;
        let y0 = (r.top.floor() - 1.0) as u16;
        let x1 = (r.right * cw).ceil() as u16;
        let y1 = r.bottom.ceil() as u16;
        draw_border(fb, x0, y0, x1, y1, border);

        let mut canvas = FrameCanvas::new(fb, self.cell_w);
        view.draw(&mut canvas, &Paint::stroke(shape_color(kind)));

        let label = zone.shape_name();
        let b = view.bounds();
        let label_w = label.chars().count() as f32;
        let lx = ((b.center_x() * cw) - label_w / 2.0).max(0.0) as u16;
        let ly = (b.bottom.ceil() + 1.0) as u16;
        fb.put_str(lx, ly, label, CellStyle::fg(shape_color(kind)));
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, session: &GameSession, viewport: Viewport) {
        let panel_x = viewport.width - PANEL_W + 2;
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let mut y = 1u16;
        let mut row = |fb: &mut FrameBuffer, name: &str, n: u32| {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        };
        row(fb, "LEVEL", session.level().number() as u32);
        row(fb, "SCORE", session.score());
        row(fb, "MISSES", session.misses());
        row(fb, "LEFT", session.remaining() as u32);

        fb.put_str(panel_x, y, "LAST", label);
        let (text, style) = match session.last_drop() {
            Some(last) => match last.outcome {
                Some(DropOutcome::Matched) => ("MATCH!", CellStyle::fg(Rgb::new(120, 220, 140))),
                Some(DropOutcome::Mismatched(_)) | Some(DropOutcome::Empty) => {
                    ("MISS", CellStyle::fg(Rgb::new(230, 90, 90)))
                }
                None => ("-", value),
            },
            None => ("-", value),
        };
        fb.put_str(panel_x, y.saturating_add(1), text, style);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bold: true,
            ..CellStyle::default()
        };
        let play_w = self.play_cols(viewport);
        let mid_y = viewport.height / 2;
        fb.fill_rect(
            0,
            mid_y.saturating_sub(1),
            play_w,
            4,
            ' ',
            CellStyle {
                bg: Rgb::new(30, 30, 50),
                ..CellStyle::default()
            },
        );
        let style = CellStyle {
            bg: Rgb::new(30, 30, 50),
            ..style
        };
        for (dy, text) in ["LEVEL COMPLETE", "n: next level   r: play again"]
            .iter()
            .enumerate()
        {
            let text_w = text.chars().count() as u16;
            let x = play_w.saturating_sub(text_w) / 2;
            fb.put_str(x, mid_y.saturating_add(dy as u16), text, style);
        }
    }

    fn draw_help(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        if viewport.height < 2 {
            return;
        }
        let style = CellStyle {
            dim: true,
            ..CellStyle::default()
        };
        fb.put_str(
            1,
            viewport.height - 1,
            "drag shapes onto their zones | r restart | n/p level | q quit",
            style,
        );
    }
}

fn draw_kind(canvas: &mut FrameCanvas<'_>, kind: ShapeKind, rect: RectF, paint: Paint) {
    if rect.is_degenerate() {
        return;
    }
    crate::core::drawable_for(kind).draw(canvas, rect, &paint);
}

fn draw_border(fb: &mut FrameBuffer, x0: u16, y0: u16, x1: u16, y1: u16, style: CellStyle) {
    if x1 <= x0 + 1 || y1 <= y0 + 1 {
        return;
    }
    fb.put_char(x0, y0, '┌', style);
    fb.put_char(x1, y0, '┐', style);
    fb.put_char(x0, y1, '└', style);
    fb.put_char(x1, y1, '┘', style);
    for x in x0 + 1..x1 {
        fb.put_char(x, y0, '─', style);
        fb.put_char(x, y1, '─', style);
    }
    for y in y0 + 1..y1 {
        fb.put_char(x0, y, '│', style);
        fb.put_char(x1, y, '│', style);
    }
}

/// Display color of a shape kind.
pub fn shape_color(kind: ShapeKind) -> Rgb {
    match kind {
        ShapeKind::Rectangle => Rgb::new(80, 160, 240),
        ShapeKind::Triangle => Rgb::new(240, 200, 80),
        ShapeKind::Circle => Rgb::new(220, 90, 90),
        ShapeKind::Diamond => Rgb::new(120, 220, 140),
    }
}
