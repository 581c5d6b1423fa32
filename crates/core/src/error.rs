//! Error types for drop zone configuration and shape resolution.

use thiserror_no_std::Error;

use crate::types::ShapeKind;

/// Errors raised while building drop zones or resolving shapes.
///
/// Both variants describe programming or configuration mistakes. Neither is a
/// condition a player can trigger during a round.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A drop zone expects a shape that is not among its available shapes.
    #[error("invalid drop zone configuration: expected shape {expected} is not an available shape")]
    InvalidZoneConfiguration { expected: ShapeKind },

    /// A shape name that maps to no drawable shape.
    #[error("unsupported shape: {0:?}")]
    UnsupportedShape(String),
}
