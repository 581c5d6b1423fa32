//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Timing and Scale Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SCALE_ANIMATION_DURATION_MS` | 300 | Drop zone scale tween length |
//! | `HOVER_SCALE` | 1.2 | Zone scale while a shape hovers over it |
//! | `NEUTRAL_SCALE` | 1.0 | Zone scale at rest |
//! | `OVERSHOOT_TENSION` | 2.0 | Overshoot interpolator tension |
//!
//! # Game Levels
//!
//! | Level | Shapes in play |
//! |-------|----------------|
//! | 1 | Rectangle, Circle |
//! | 2 | Rectangle, Triangle, Circle |
//! | 3 | Rectangle, Triangle, Circle, Diamond |
//!
//! # Examples
//!
//! ```
//! use shapi_types::{GameLevel, ShapeKind, RectF};
//!
//! let kind = ShapeKind::from_str("Circle").unwrap();
//! assert_eq!(kind, ShapeKind::Circle);
//! assert_eq!(kind.name(), "Circle");
//!
//! let level = GameLevel::from_number(2).unwrap();
//! assert!(level.shapes().contains(&ShapeKind::Triangle));
//! assert_eq!(level.next(), GameLevel::Level3);
//!
//! let rect = RectF::new(0.0, 0.0, 100.0, 100.0);
//! assert!(rect.is_square());
//! ```

use std::fmt;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Duration of the drop zone scale animation in milliseconds
pub const SCALE_ANIMATION_DURATION_MS: u32 = 300;

/// Scale applied to a drop zone while a droppable shape hovers over it
pub const HOVER_SCALE: f32 = 1.2;

/// Resting scale of a drop zone
pub const NEUTRAL_SCALE: f32 = 1.0;

/// Tension of the overshoot interpolator (matches the common platform default)
pub const OVERSHOOT_TENSION: f32 = 2.0;

/// Default number of tray tokens dealt per shape kind in a round
pub const DEFAULT_TOKENS_PER_SHAPE: u8 = 2;

/// Most tray tokens dealt per shape kind in a round
pub const MAX_TOKENS_PER_SHAPE: u8 = 9;


/// The closed set of draggable shapes
///
/// - **Rectangle**: drawn as a horizontal band when its bounds are square
/// - **Triangle**: isosceles, pointing up
/// - **Circle**: inscribed in the bounds
/// - **Diamond**: rhombus touching the middle of each side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Rectangle,
    Triangle,
    Circle,
    Diamond,
}

impl ShapeKind {
    /// Every shape kind in canonical order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
        ShapeKind::Circle,
        ShapeKind::Diamond,
    ];

    /// Parse shape kind from string (case-insensitive, surrounding whitespace ignored)
    ///
    /// # Examples
    ///
    /// ```
    /// use shapi_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("rectangle"), Some(ShapeKind::Rectangle));
    /// assert_eq!(ShapeKind::from_str("Triangle"), Some(ShapeKind::Triangle));
    /// assert_eq!(ShapeKind::from_str("star"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rectangle" => Some(ShapeKind::Rectangle),
            "triangle" => Some(ShapeKind::Triangle),
            "circle" => Some(ShapeKind::Circle),
            "diamond" => Some(ShapeKind::Diamond),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Diamond => "diamond",
        }
    }

    /// Display name, as shown on drop zones.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Diamond => "Diamond",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Difficulty levels
///
/// A level decides which shape kinds are in play. Levels are a closed set,
/// so an out-of-range level number cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GameLevel {
    Level1,
    Level2,
    Level3,
}

impl GameLevel {
    pub const ALL: [GameLevel; 3] = [GameLevel::Level1, GameLevel::Level2, GameLevel::Level3];

    /// Look up a level by its number (1-based).
    ///
    /// # Examples
    ///
    /// ```
    /// use shapi_types::GameLevel;
    ///
    /// assert_eq!(GameLevel::from_number(1), Some(GameLevel::Level1));
    /// assert_eq!(GameLevel::from_number(9), None);
    /// ```
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(GameLevel::Level1),
            2 => Some(GameLevel::Level2),
            3 => Some(GameLevel::Level3),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            GameLevel::Level1 => 1,
            GameLevel::Level2 => 2,
            GameLevel::Level3 => 3,
        }
    }

    /// Shape kinds in play at this level, in canonical order.
    pub fn shapes(&self) -> &'static [ShapeKind] {
        match self {
            GameLevel::Level1 => &[ShapeKind::Rectangle, ShapeKind::Circle],
            GameLevel::Level2 => &[ShapeKind::Rectangle, ShapeKind::Triangle, ShapeKind::Circle],
            GameLevel::Level3 => &ShapeKind::ALL,
        }
    }

    /// The following level, saturating at the hardest one.
    pub fn next(&self) -> Self {
        match self {
            GameLevel::Level1 => GameLevel::Level2,
            GameLevel::Level2 | GameLevel::Level3 => GameLevel::Level3,
        }
    }

    /// The preceding level, saturating at the easiest one.
    pub fn previous(&self) -> Self {
        match self {
            GameLevel::Level1 | GameLevel::Level2 => GameLevel::Level1,
            GameLevel::Level3 => GameLevel::Level2,
        }
    }
}

impl Default for GameLevel {
    fn default() -> Self {
        GameLevel::Level1
    }
}

/// Axis-aligned rectangle in layout units.
///
/// `right` and `bottom` are exclusive for [`RectF::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build a rectangle from its origin and size.
    pub fn from_origin(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    /// True when the rectangle has no positive area.
    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Scale width and height by `factor`, keeping the center fixed.
    pub fn scaled_about_center(&self, factor: f32) -> Self {
        let half_w = self.width() * factor / 2.0;
        let half_h = self.height() * factor / 2.0;
        let cx = self.center_x();
        let cy = self.center_y();
        Self::new(cx - half_w, cy - half_h, cx + half_w, cy + half_h)
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Game actions triggered from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Deal the current level again with a fresh tray
    Restart,
    /// Advance to the next level (saturating)
    NextLevel,
    /// Go back to the previous level (saturating)
    PreviousLevel,
}

/// Pointer input in layout units.
///
/// Produced by the input layer from mouse events, consumed by the game session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed
    Down { x: f32, y: f32 },
    /// Pointer moved with the primary button held
    Move { x: f32, y: f32 },
    /// Primary button released
    Up { x: f32, y: f32 },
}
