//! Rasterizing [`Canvas`] over a terminal framebuffer.
//!
//! Layout units map to `cell_w` columns by one row, which compensates for the
//! usual terminal glyph aspect ratio. Every column is sampled at its own
//! center, so horizontal edges get `cell_w` times the vertical resolution.

use crate::core::{Canvas, Paint, PaintStyle};
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::RectF;

pub const FILL_CHAR: char = '█';
pub const STROKE_CHAR: char = '▒';

/// Draws shapes into a [`FrameBuffer`].
pub struct FrameCanvas<'a> {
    fb: &'a mut FrameBuffer,
    origin_x: u16,
    origin_y: u16,
    cell_w: u16,
    painted: usize,
}

impl<'a> FrameCanvas<'a> {
    pub fn new(fb: &'a mut FrameBuffer, cell_w: u16) -> Self {
        Self {
            fb,
            origin_x: 0,
            origin_y: 0,
            cell_w: cell_w.max(1),
            painted: 0,
        }
    }

    /// Offset (in terminal cells) of layout point (0, 0).
    pub fn with_origin(mut self, x: u16, y: u16) -> Self {
        self.origin_x = x;
        self.origin_y = y;
        self
    }

    /// Number of cells written so far.
    pub fn painted(&self) -> usize {
        self.painted
    }

    fn rasterize(&mut self, bounds: RectF, paint: &Paint, inside: impl Fn(f32, f32) -> bool) {
        let cw = self.cell_w as f32;
        let ox = self.origin_x as f32;
        let oy = self.origin_y as f32;

        let col0 = (ox + bounds.left * cw).floor().max(0.0) as u16;
        let col1 = (ox + bounds.right * cw).ceil().clamp(0.0, self.fb.width() as f32) as u16;
        let row0 = (oy + bounds.top).floor().max(0.0) as u16;
        let row1 = (oy + bounds.bottom).ceil().clamp(0.0, self.fb.height() as f32) as u16;

        let (ch, dx, dy) = match paint.style {
            PaintStyle::Fill => (FILL_CHAR, 0.0, 0.0),
            PaintStyle::Stroke => (STROKE_CHAR, 1.0 / cw, 1.0),
        };
        let style = CellStyle {
            fg: paint.color,
            ..CellStyle::default()
        };

        for row in row0..row1 {
            let y = row as f32 - oy + 0.5;
            for col in col0..col1 {
                let x = (col as f32 - ox + 0.5) / cw;
                if !inside(x, y) {
                    continue;
                }
                let draw = match paint.style {
                    PaintStyle::Fill => true,
                    PaintStyle::Stroke => {
                        !inside(x - dx, y)
                            || !inside(x + dx, y)
                            || !inside(x, y - dy)
                            || !inside(x, y + dy)
                    }
                };
                if draw {
                    self.fb.put_char(col, row, ch, style);
                    self.painted += 1;
                }
            }
        }
    }
}

impl Canvas for FrameCanvas<'_> {
    fn draw_rect(&mut self, rect: RectF, paint: &Paint) {
        self.rasterize(rect, paint, |x, y| rect.contains(x, y));
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) {
        let bounds = RectF::new(cx - radius, cy - radius, cx + radius, cy + radius);
        let r2 = radius * radius;
        self.rasterize(bounds, paint, |x, y| {
            let (dx, dy) = (x - cx, y - cy);
            dx * dx + dy * dy <= r2
        });
    }

    fn draw_polygon(&mut self, points: &[(f32, f32)], paint: &Paint) {
        if points.len() < 3 {
            return;
        }
        let bounds = points.iter().fold(
            RectF::new(f32::MAX, f32::MAX, f32::MIN, f32::MIN),
            |b, &(x, y)| RectF::new(b.left.min(x), b.top.min(y), b.right.max(x), b.bottom.max(y)),
        );
        self.rasterize(bounds, paint, |x, y| point_in_polygon(points, x, y));
    }
}

/// Even-odd crossing test.
fn point_in_polygon(points: &[(f32, f32)], x: f32, y: f32) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb;

    const WHITE: Rgb = Rgb::new(255, 255, 255);

    fn count(fb: &FrameBuffer, ch: char) -> usize {
        (0..fb.height())
            .map(|y| fb.row_text(y).chars().filter(|&c| c == ch).count())
            .sum()
    }

    #[test]
    fn filled_rect_covers_exact_cells() {
        let mut fb = FrameBuffer::new(20, 10);
        let mut canvas = FrameCanvas::new(&mut fb, 2);
        canvas.draw_rect(RectF::new(1.0, 1.0, 4.0, 3.0), &Paint::fill(WHITE));
        assert_eq!(canvas.painted(), 3 * 2 * 2);
        assert_eq!(fb.get(2, 1).unwrap().ch, FILL_CHAR);
        assert_eq!(fb.get(7, 2).unwrap().ch, FILL_CHAR);
        assert_eq!(fb.get(8, 2).unwrap().ch, ' ');
        assert_eq!(fb.get(2, 3).unwrap().ch, ' ');
        assert_eq!(fb.get(2, 1).unwrap().style.fg, WHITE);
    }

    #[test]
    fn stroke_leaves_interior_empty() {
        let mut fb = FrameBuffer::new(40, 20);
        let mut canvas = FrameCanvas::new(&mut fb, 2);
        canvas.draw_rect(RectF::new(0.0, 0.0, 10.0, 10.0), &Paint::stroke(WHITE));
        assert!(canvas.painted() > 0);
        assert_eq!(fb.get(0, 0).unwrap().ch, STROKE_CHAR);
        assert_eq!(fb.get(10, 5).unwrap().ch, ' ');
        assert_eq!(count(&fb, FILL_CHAR), 0);
    }

    #[test]
    fn origin_shifts_output() {
        let mut fb = FrameBuffer::new(20, 10);
        let mut canvas = FrameCanvas::new(&mut fb, 1).with_origin(5, 2);
        canvas.draw_rect(RectF::new(0.0, 0.0, 1.0, 1.0), &Paint::fill(WHITE));
        assert_eq!(fb.get(5, 2).unwrap().ch, FILL_CHAR);
        assert_eq!(count(&fb, FILL_CHAR), 1);
    }

    #[test]
    fn off_screen_shapes_are_clipped() {
        let mut fb = FrameBuffer::new(10, 5);
        let mut canvas = FrameCanvas::new(&mut fb, 2);
        canvas.draw_circle(0.0, 0.0, 3.0, &Paint::fill(WHITE));
        canvas.draw_rect(RectF::new(100.0, 100.0, 120.0, 120.0), &Paint::fill(WHITE));
        assert!(canvas.painted() > 0);
        assert!(canvas.painted() < 10 * 5);
    }

    #[test]
    fn polygon_test_handles_triangle() {
        let tri = [(5.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        assert!(point_in_polygon(&tri, 5.0, 5.0));
        assert!(!point_in_polygon(&tri, 1.0, 1.0));
        assert!(!point_in_polygon(&tri, 5.0, 11.0));
    }
}
