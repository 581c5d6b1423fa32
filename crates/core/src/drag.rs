//! Drag-and-drop relay.
//!
//! Views register a hit area together with the shape kinds they accept. While
//! a drag is in progress the helper hit-tests the pointer against those
//! registrations and reports which observer should see an enter, exit or drop
//! callback. The helper never owns the observers: callers deliver the returned
//! events themselves, which keeps every callback on the caller's thread and
//! free of shared ownership.

use arrayvec::ArrayVec;
use log::debug;

use crate::types::{RectF, ShapeKind};

/// Data carried by a drag. `None` models a drag without a shape payload.
pub type DragPayload = Option<ShapeKind>;

/// Identifies a registered drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneId(pub usize);

/// Receives drag callbacks for a registered target.
pub trait DragObserver {
    fn on_drag_entered(&mut self, payload: DragPayload);

    fn on_drag_exited(&mut self, payload: DragPayload);

    fn on_drag_dropped(&mut self, payload: DragPayload);
}

/// A callback owed to one observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Entered(DragPayload),
    Exited(DragPayload),
    Dropped(DragPayload),
}

impl DragEvent {
    /// Invoke the matching observer method.
    pub fn deliver(self, observer: &mut dyn DragObserver) {
        match self {
            DragEvent::Entered(payload) => observer.on_drag_entered(payload),
            DragEvent::Exited(payload) => observer.on_drag_exited(payload),
            DragEvent::Dropped(payload) => observer.on_drag_dropped(payload),
        }
    }
}

/// Callbacks produced by a single pointer update: at most an exit followed by
/// an enter, or a single drop.
pub type Dispatch = ArrayVec<(ZoneId, DragEvent), 2>;

#[derive(Debug, Clone)]
struct Registration {
    id: ZoneId,
    bounds: RectF,
    accepted: Vec<ShapeKind>,
}

impl Registration {
    fn accepts(&self, payload: DragPayload) -> bool {
        payload.is_some_and(|kind| self.accepted.contains(&kind))
    }
}

#[derive(Debug, Clone, Copy)]
struct DragSession {
    payload: DragPayload,
    hovered: Option<ZoneId>,
}

/// Registration-based drag relay.
#[derive(Debug, Clone, Default)]
pub struct DragHelper {
    registrations: Vec<Registration>,
    session: Option<DragSession>,
}

impl DragHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a drop target, replacing any previous registration for `id`.
    pub fn register(&mut self, id: ZoneId, bounds: RectF, accepted: &[ShapeKind]) {
        let registration = Registration {
            id,
            bounds,
            accepted: accepted.to_vec(),
        };
        match self.registrations.iter_mut().find(|r| r.id == id) {
            Some(existing) => *existing = registration,
            None => self.registrations.push(registration),
        }
        debug!("drag target {:?} registered for {:?}", id, accepted);
    }

    /// Remove a drop target. A hovered target stops being hovered silently.
    pub fn unregister(&mut self, id: ZoneId) {
        self.registrations.retain(|r| r.id != id);
        if let Some(session) = self.session.as_mut() {
            if session.hovered == Some(id) {
                session.hovered = None;
            }
        }
    }

    /// Update the hit area of a registered target. Unknown ids are ignored.
    pub fn set_bounds(&mut self, id: ZoneId, bounds: RectF) {
        if let Some(r) = self.registrations.iter_mut().find(|r| r.id == id) {
            r.bounds = bounds;
        }
    }

    pub fn is_registered(&self, id: ZoneId) -> bool {
        self.registrations.iter().any(|r| r.id == id)
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Target currently hovered by the drag in progress.
    pub fn hovered(&self) -> Option<ZoneId> {
        self.session.and_then(|s| s.hovered)
    }

    /// Begin a drag. Any drag already in progress is cancelled first.
    pub fn start_drag(&mut self, payload: DragPayload) -> Dispatch {
        let dispatch = self.cancel_drag();
        self.session = Some(DragSession {
            payload,
            hovered: None,
        });
        dispatch
    }

    /// Move the pointer of the drag in progress.
    pub fn drag_to(&mut self, x: f32, y: f32) -> Dispatch {
        let mut dispatch = Dispatch::new();
        let Some(session) = self.session else {
            return dispatch;
        };

        let target = self.target_at(x, y, session.payload);
        if target == session.hovered {
            return dispatch;
        }

        if let Some(prev) = session.hovered {
            dispatch.push((prev, DragEvent::Exited(session.payload)));
        }
        if let Some(next) = target {
            dispatch.push((next, DragEvent::Entered(session.payload)));
        }
        debug!("drag hover {:?} -> {:?}", session.hovered, target);
        self.session = Some(DragSession {
            hovered: target,
            ..session
        });
        dispatch
    }

    /// Release the drag at the given position and end the session.
    ///
    /// The target under the pointer receives a drop. A target hovered earlier
    /// but no longer under the pointer receives an exit instead.
    pub fn drop_at(&mut self, x: f32, y: f32) -> Dispatch {
        let mut dispatch = Dispatch::new();
        let Some(session) = self.session.take() else {
            return dispatch;
        };

        let target = self.target_at(x, y, session.payload);
        if let Some(prev) = session.hovered {
            if Some(prev) != target {
                dispatch.push((prev, DragEvent::Exited(session.payload)));
            }
        }
        if let Some(id) = target {
            dispatch.push((id, DragEvent::Dropped(session.payload)));
        }
        debug!("drag dropped on {:?}", target);
        dispatch
    }

    /// Abandon the drag in progress, exiting the hovered target if any.
    pub fn cancel_drag(&mut self) -> Dispatch {
        let mut dispatch = Dispatch::new();
        if let Some(session) = self.session.take() {
            if let Some(prev) = session.hovered {
                dispatch.push((prev, DragEvent::Exited(session.payload)));
            }
        }
        dispatch
    }

    /// Last registered target under the point that accepts the payload.
    fn target_at(&self, x: f32, y: f32, payload: DragPayload) -> Option<ZoneId> {
        self.registrations
            .iter()
            .rev()
            .find(|r| r.bounds.contains(x, y) && r.accepts(payload))
            .map(|r| r.id)
    }
}
