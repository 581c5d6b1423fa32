//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the shape-sorting rules, the drop zone views and the
//! drag relay that drives them. It has **zero dependencies** on terminal I/O,
//! making it:
//!
//! - **Deterministic**: animations advance on an explicit tick, trays shuffle from a seed
//! - **Testable**: every drag callback can be driven directly
//! - **Portable**: anything implementing [`Canvas`] can render the shapes
//!
//! # Module Structure
//!
//! - [`shape`]: drawable shapes and the [`Canvas`] they draw onto
//! - [`drop_zone`]: zone data (expected shape, droppable shapes, level) and drop outcomes
//! - [`drag`]: registration-based drag relay and the [`DragObserver`] capability
//! - [`zone_view`]: a zone's visual state, scale feedback and drop relay
//! - [`presenter`]: attaches zone views to the drag relay
//! - [`animation`]: overshoot-eased scale animation
//! - [`levels`]: zones dealt per level
//! - [`session`]: one round of play, judging drops
//! - [`config`]: environment configuration
//! - [`rng`]: deterministic tray shuffling
//!
//! # Example
//!
//! ```
//! use shapi_core::{GameConfig, GameSession};
//!
//! let mut session = GameSession::new(GameConfig::default()).unwrap();
//! session.layout(80.0, 30.0);
//!
//! // Drag the first token onto the zone that expects it.
//! let token = session.tray()[0];
//! let zone = session
//!     .zones()
//!     .iter()
//!     .find(|v| v.drop_zone().unwrap().expected_shape() == token.kind)
//!     .unwrap()
//!     .bounds();
//!
//! session.pointer_down(token.bounds.center_x(), token.bounds.center_y());
//! session.pointer_move(zone.center_x(), zone.center_y());
//! session.pointer_up(zone.center_x(), zone.center_y());
//!
//! assert_eq!(session.score(), 1);
//! ```

pub mod animation;
pub mod config;
pub mod drag;
pub mod drop_zone;
pub mod error;
pub mod levels;
pub mod presenter;
pub mod rng;
pub mod session;
pub mod shape;
pub mod zone_view;

pub use shapi_types as types;

// Re-export commonly used types for convenience
pub use animation::{OvershootInterpolator, ScaleAnimator};
pub use config::GameConfig;
pub use drag::{DragEvent, DragHelper, DragObserver, DragPayload, ZoneId};
pub use drop_zone::{DropOutcome, DropZone};
pub use error::ShapeError;
pub use levels::level_zones;
pub use presenter::DropZonePresenter;
pub use rng::SimpleRng;
pub use session::{GameSession, LastDrop, TrayToken};
pub use shape::{drawable_for, Canvas, DrawableShape, Paint, PaintStyle, ScaledCanvas};
pub use zone_view::{drop_channel, DropZoneListener, DropZoneView, ShapeDropped, VisualState};
