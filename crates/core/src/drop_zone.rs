//! Drop zone data: which shape a zone expects and which shapes can be dropped.

use crate::error::ShapeError;
use crate::types::{GameLevel, ShapeKind};

/// An area where the player can drop a shape.
///
/// Immutable once built. The expected shape is always one of the available
/// shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropZone {
    expected: ShapeKind,
    available: Vec<ShapeKind>,
    level: GameLevel,
}

/// Result of comparing a dropped shape with a zone's expected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The dropped shape is the one the zone expects.
    Matched,
    /// A different shape was dropped.
    Mismatched(ShapeKind),
    /// The drop carried no shape.
    Empty,
}

impl DropZone {
    /// Build a drop zone.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapi_core::DropZone;
    /// use shapi_core::types::{GameLevel, ShapeKind};
    ///
    /// let zone = DropZone::new(
    ///     ShapeKind::Circle,
    ///     vec![ShapeKind::Rectangle, ShapeKind::Circle],
    ///     GameLevel::Level1,
    /// )
    /// .unwrap();
    /// assert_eq!(zone.shape_name(), "Circle");
    ///
    /// assert!(DropZone::new(ShapeKind::Diamond, vec![ShapeKind::Circle], GameLevel::Level1).is_err());
    /// ```
    pub fn new(
        expected: ShapeKind,
        available: Vec<ShapeKind>,
        level: GameLevel,
    ) -> Result<Self, ShapeError> {
        if !available.contains(&expected) {
            return Err(ShapeError::InvalidZoneConfiguration { expected });
        }
        Ok(Self {
            expected,
            available,
            level,
        })
    }

    /// Shape allowed in this area.
    pub fn expected_shape(&self) -> ShapeKind {
        self.expected
    }

    /// Display name of the shape allowed in this area.
    pub fn shape_name(&self) -> &'static str {
        self.expected.name()
    }

    /// Shape kinds that can be dropped in the zone.
    pub fn available_shapes(&self) -> &[ShapeKind] {
        &self.available
    }

    pub fn game_level(&self) -> GameLevel {
        self.level
    }

    /// Whether a shape of this kind can be dropped here at all.
    pub fn accepts(&self, kind: ShapeKind) -> bool {
        self.available.contains(&kind)
    }

    pub fn evaluate(&self, dropped: Option<ShapeKind>) -> DropOutcome {
        match dropped {
            Some(kind) if kind == self.expected => DropOutcome::Matched,
            Some(kind) => DropOutcome::Mismatched(kind),
            None => DropOutcome::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level2_zone(expected: ShapeKind) -> Result<DropZone, ShapeError> {
        DropZone::new(expected, GameLevel::Level2.shapes().to_vec(), GameLevel::Level2)
    }

    #[test]
    fn accessors_return_stored_values() {
        let zone = level2_zone(ShapeKind::Triangle).unwrap();
        assert_eq!(zone.expected_shape(), ShapeKind::Triangle);
        assert_eq!(zone.shape_name(), "Triangle");
        assert_eq!(
            zone.available_shapes(),
            &[ShapeKind::Rectangle, ShapeKind::Triangle, ShapeKind::Circle]
        );
        assert_eq!(zone.game_level(), GameLevel::Level2);
    }

    #[test]
    fn rejects_expected_shape_outside_available() {
        assert_eq!(
            level2_zone(ShapeKind::Diamond),
            Err(ShapeError::InvalidZoneConfiguration {
                expected: ShapeKind::Diamond
            })
        );
        assert!(DropZone::new(ShapeKind::Circle, Vec::new(), GameLevel::Level1).is_err());
    }

    #[test]
    fn evaluate_compares_with_expected_shape() {
        let zone = level2_zone(ShapeKind::Circle).unwrap();
        assert_eq!(zone.evaluate(Some(ShapeKind::Circle)), DropOutcome::Matched);
        assert_eq!(
            zone.evaluate(Some(ShapeKind::Rectangle)),
            DropOutcome::Mismatched(ShapeKind::Rectangle)
        );
        assert_eq!(zone.evaluate(None), DropOutcome::Empty);
    }

    #[test]
    fn accepts_follows_available_shapes() {
        let zone = level2_zone(ShapeKind::Circle).unwrap();
        assert!(zone.accepts(ShapeKind::Triangle));
        assert!(!zone.accepts(ShapeKind::Diamond));
    }
}
