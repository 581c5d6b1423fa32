//! Level layouts: the drop zones dealt for a level.

use crate::drop_zone::DropZone;
use crate::error::ShapeError;
use crate::types::{GameLevel, ShapeKind};

/// One zone per shape in play; every zone lists all in-play shapes as
/// droppable so a wrong shape can still be dropped (and scored as a miss).
pub fn level_zones(level: GameLevel, shapes: &[ShapeKind]) -> Result<Vec<DropZone>, ShapeError> {
    shapes
        .iter()
        .map(|&expected| DropZone::new(expected, shapes.to_vec(), level))
        .collect()
}
