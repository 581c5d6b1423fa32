//! Drawable shapes and the canvas they draw onto.
//!
//! Each [`ShapeKind`] resolves to exactly one [`DrawableShape`] through an
//! exhaustive match, so a missing case is a compile error rather than a
//! runtime fallback. Name-based resolution ([`resolve_name`]) is the only
//! fallible path.

use arrayvec::ArrayVec;

use crate::error::ShapeError;
use crate::types::{RectF, Rgb, ShapeKind};

/// Polygons up to this many points are scaled without allocating.
const SMALL_POLYGON: usize = 8;

/// How a shape's area is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    /// Cover the interior.
    Fill,
    /// Trace the outline only.
    Stroke,
}

/// Color and style used for a draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub color: Rgb,
    pub style: PaintStyle,
}

impl Paint {
    pub const fn fill(color: Rgb) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
        }
    }

    pub const fn stroke(color: Rgb) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke,
        }
    }
}

/// A rendering surface accepting primitive draw commands in layout units.
pub trait Canvas {
    fn draw_rect(&mut self, rect: RectF, paint: &Paint);

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint);

    /// Draw a closed polygon through `points` (last point joins the first).
    fn draw_polygon(&mut self, points: &[(f32, f32)], paint: &Paint);
}

/// Canvas adapter that scales every draw call about a fixed point.
///
/// Shapes keep choosing their geometry from the unscaled bounds; only the
/// emitted coordinates grow or shrink.
pub struct ScaledCanvas<'a> {
    inner: &'a mut dyn Canvas,
    cx: f32,
    cy: f32,
    factor: f32,
}

impl<'a> ScaledCanvas<'a> {
    pub fn new(inner: &'a mut dyn Canvas, cx: f32, cy: f32, factor: f32) -> Self {
        Self {
            inner,
            cx,
            cy,
            factor,
        }
    }

    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.cx + (x - self.cx) * self.factor,
            self.cy + (y - self.cy) * self.factor,
        )
    }
}

impl Canvas for ScaledCanvas<'_> {
    fn draw_rect(&mut self, rect: RectF, paint: &Paint) {
        let (left, top) = self.map(rect.left, rect.top);
        let (right, bottom) = self.map(rect.right, rect.bottom);
        self.inner.draw_rect(RectF::new(left, top, right, bottom), paint);
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) {
        let (x, y) = self.map(cx, cy);
        self.inner.draw_circle(x, y, radius * self.factor, paint);
    }

    fn draw_polygon(&mut self, points: &[(f32, f32)], paint: &Paint) {
        let mapped = points.iter().map(|&(x, y)| self.map(x, y));
        if points.len() <= SMALL_POLYGON {
            let mapped: ArrayVec<(f32, f32), SMALL_POLYGON> = mapped.collect();
            self.inner.draw_polygon(&mapped, paint);
        } else {
            let mapped: Vec<(f32, f32)> = mapped.collect();
            self.inner.draw_polygon(&mapped, paint);
        }
    }
}

/// A shape that knows how to draw itself inside a bounding rectangle.
pub trait DrawableShape: Sync {
    fn kind(&self) -> ShapeKind;

    fn draw(&self, canvas: &mut dyn Canvas, rect: RectF, paint: &Paint);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Rectangle;

#[derive(Debug, Clone, Copy, Default)]
pub struct Triangle;

#[derive(Debug, Clone, Copy, Default)]
pub struct Circle;

#[derive(Debug, Clone, Copy, Default)]
pub struct Diamond;

impl DrawableShape for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    /// Square bounds collapse to the middle horizontal band so the rectangle
    /// never looks like a square.
    fn draw(&self, canvas: &mut dyn Canvas, rect: RectF, paint: &Paint) {
        if rect.is_square() {
            let cy = rect.center_y();
            canvas.draw_rect(
                RectF::new(
                    rect.left,
                    (rect.top + cy) / 2.0,
                    rect.right,
                    (rect.bottom + cy) / 2.0,
                ),
                paint,
            );
        } else {
            canvas.draw_rect(rect, paint);
        }
    }
}

impl DrawableShape for Triangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }

    fn draw(&self, canvas: &mut dyn Canvas, rect: RectF, paint: &Paint) {
        let points = [
            (rect.center_x(), rect.top),
            (rect.right, rect.bottom),
            (rect.left, rect.bottom),
        ];
        canvas.draw_polygon(&points, paint);
    }
}

impl DrawableShape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn draw(&self, canvas: &mut dyn Canvas, rect: RectF, paint: &Paint) {
        let radius = rect.width().min(rect.height()) / 2.0;
        canvas.draw_circle(rect.center_x(), rect.center_y(), radius, paint);
    }
}

impl DrawableShape for Diamond {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Diamond
    }

    fn draw(&self, canvas: &mut dyn Canvas, rect: RectF, paint: &Paint) {
        let cx = rect.center_x();
        let cy = rect.center_y();
        let points = [
            (cx, rect.top),
            (rect.right, cy),
            (cx, rect.bottom),
            (rect.left, cy),
        ];
        canvas.draw_polygon(&points, paint);
    }
}

/// Resolve the drawable for a shape kind.
pub fn drawable_for(kind: ShapeKind) -> &'static dyn DrawableShape {
    match kind {
        ShapeKind::Rectangle => &Rectangle,
        ShapeKind::Triangle => &Triangle,
        ShapeKind::Circle => &Circle,
        ShapeKind::Diamond => &Diamond,
    }
}

/// Resolve a shape kind from its name.
///
/// Fails with [`ShapeError::UnsupportedShape`] when no drawable exists for the
/// name.
pub fn resolve_name(name: &str) -> Result<ShapeKind, ShapeError> {
    ShapeKind::from_str(name).ok_or_else(|| ShapeError::UnsupportedShape(name.trim().to_string()))
}

/// Parse a comma-separated list of shape names.
///
/// Empty entries are skipped; duplicates are dropped keeping the first
/// occurrence.
pub fn parse_shape_list(list: &str) -> Result<Vec<ShapeKind>, ShapeError> {
    let mut shapes = Vec::new();
    for name in list.split(',').filter(|s| !s.trim().is_empty()) {
        let kind = resolve_name(name)?;
        if !shapes.contains(&kind) {
            shapes.push(kind);
        }
    }
    Ok(shapes)
}
