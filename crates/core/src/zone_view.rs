//! DropZoneView: visual representation of a [`DropZone`].
//!
//! The view renders the zone's expected shape, scales itself up while a
//! droppable shape hovers over it, and relays drops to a single listener. It
//! does not decide whether a drop is correct; the listener does.
//!
//! Visual state machine, driven only by drag callbacks:
//!
//! ```text
//! Idle --enter--> Hovered --drop--> Idle
//!                 Hovered --exit--> Idle
//! ```

use std::fmt;
use std::sync::mpsc;

use log::{debug, warn};

use crate::animation::ScaleAnimator;
use crate::drag::{DragHelper, DragObserver, DragPayload, ZoneId};
use crate::drop_zone::DropZone;
use crate::presenter::DropZonePresenter;
use crate::shape::{drawable_for, Canvas, DrawableShape, Paint, ScaledCanvas};
use crate::types::{RectF, ShapeKind, HOVER_SCALE, NEUTRAL_SCALE};

/// Receives "shape dropped" notifications from a [`DropZoneView`].
pub trait DropZoneListener {
    /// Called when the player dropped a shape in the given zone.
    fn on_shape_dropped(&mut self, zone: &DropZone, shape: Option<ShapeKind>);
}

impl<F> DropZoneListener for F
where
    F: FnMut(&DropZone, Option<ShapeKind>),
{
    fn on_shape_dropped(&mut self, zone: &DropZone, shape: Option<ShapeKind>) {
        self(zone, shape)
    }
}

/// A drop relayed by a zone view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeDropped {
    pub zone: DropZone,
    pub shape: Option<ShapeKind>,
}

/// Listener forwarding drops into a channel.
#[derive(Debug, Clone)]
pub struct DropSender(mpsc::Sender<ShapeDropped>);

impl DropZoneListener for DropSender {
    fn on_shape_dropped(&mut self, zone: &DropZone, shape: Option<ShapeKind>) {
        let dropped = ShapeDropped {
            zone: zone.clone(),
            shape,
        };
        if self.0.send(dropped).is_err() {
            warn!("drop on {} zone lost: receiver gone", zone.shape_name());
        }
    }
}

/// Create a channel for drop notifications.
pub fn drop_channel() -> (DropSender, mpsc::Receiver<ShapeDropped>) {
    let (tx, rx) = mpsc::channel();
    (DropSender(tx), rx)
}

/// Visual state of a zone view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    Idle,
    Hovered,
}

pub struct DropZoneView {
    presenter: DropZonePresenter,
    zone: Option<DropZone>,
    shape: Option<&'static dyn DrawableShape>,
    listener: Option<Box<dyn DropZoneListener>>,
    animator: ScaleAnimator,
    state: VisualState,
    bounds: RectF,
}

impl fmt::Debug for DropZoneView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropZoneView")
            .field("id", &self.presenter.id())
            .field("zone", &self.zone)
            .field("state", &self.state)
            .field("scale", &self.animator.scale())
            .field("bounds", &self.bounds)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl DropZoneView {
    pub fn new(presenter: DropZonePresenter) -> Self {
        Self {
            presenter,
            zone: None,
            shape: None,
            listener: None,
            animator: ScaleAnimator::default(),
            state: VisualState::Idle,
            bounds: RectF::default(),
        }
    }

    pub fn id(&self) -> ZoneId {
        self.presenter.id()
    }

    /// Set the zone this view represents and resolve its shape.
    pub fn set_drop_zone(&mut self, zone: DropZone) {
        self.shape = Some(drawable_for(zone.expected_shape()));
        self.zone = Some(zone);
    }

    pub fn drop_zone(&self) -> Option<&DropZone> {
        self.zone.as_ref()
    }

    /// Drawable resolved for the zone's expected shape.
    pub fn shape(&self) -> Option<&'static dyn DrawableShape> {
        self.shape
    }

    /// Set the listener, replacing the previous one.
    pub fn set_listener(&mut self, listener: impl DropZoneListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    pub fn visual_state(&self) -> VisualState {
        self.state
    }

    /// Current visual scale.
    pub fn scale(&self) -> f32 {
        self.animator.scale()
    }

    /// Scale the view is animating towards.
    pub fn target_scale(&self) -> f32 {
        self.animator.target()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn bounds(&self) -> RectF {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: RectF) {
        self.bounds = bounds;
    }

    /// Bounds grown or shrunk by the current scale.
    pub fn scaled_bounds(&self) -> RectF {
        self.bounds.scaled_about_center(self.animator.scale())
    }

    /// Register with the drag system through the presenter.
    pub fn attach(&self, drag: &mut DragHelper) {
        self.presenter.attach_view(self, drag);
    }

    pub fn detach(&self, drag: &mut DragHelper) {
        self.presenter.detach_view(drag);
    }

    /// Advance the scale animation.
    pub fn tick(&mut self, dt_ms: u32) {
        self.animator.tick(dt_ms);
    }

    /// Draw the expected shape into the bounds, then scale it about their
    /// center. The shape sees the unscaled bounds on every frame.
    pub fn draw(&self, canvas: &mut dyn Canvas, paint: &Paint) {
        let Some(shape) = self.shape else {
            return;
        };
        let rect = self.bounds;
        if rect.is_degenerate() {
            return;
        }
        let mut scaled = ScaledCanvas::new(canvas, rect.center_x(), rect.center_y(), self.scale());
        shape.draw(&mut scaled, rect, paint);
    }

    fn animate_scale(&mut self, scale: f32) {
        self.animator.animate_to(scale);
    }
}

impl DragObserver for DropZoneView {
    fn on_drag_entered(&mut self, payload: DragPayload) {
        debug!("zone {:?} entered by {:?}", self.id(), payload);
        self.state = VisualState::Hovered;
        self.animate_scale(HOVER_SCALE);
    }

    fn on_drag_exited(&mut self, payload: DragPayload) {
        debug!("zone {:?} exited by {:?}", self.id(), payload);
        self.state = VisualState::Idle;
        self.animate_scale(NEUTRAL_SCALE);
    }

    fn on_drag_dropped(&mut self, payload: DragPayload) {
        self.state = VisualState::Idle;
        self.animate_scale(NEUTRAL_SCALE);

        let Some(zone) = self.zone.as_ref() else {
            warn!("drop on zone {:?} ignored: no drop zone set", self.id());
            return;
        };
        if let Some(listener) = self.listener.as_mut() {
            listener.on_shape_dropped(zone, payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameLevel, SCALE_ANIMATION_DURATION_MS};

    fn view_for(expected: ShapeKind) -> DropZoneView {
        let mut view = DropZoneView::new(DropZonePresenter::new(ZoneId(3)));
        let zone = DropZone::new(expected, ShapeKind::ALL.to_vec(), GameLevel::Level3).unwrap();
        view.set_drop_zone(zone);
        view
    }

    #[test]
    fn set_drop_zone_resolves_expected_shape() {
        for kind in ShapeKind::ALL {
            let view = view_for(kind);
            assert_eq!(view.shape().map(|s| s.kind()), Some(kind));
        }
    }

    #[test]
    fn hover_state_follows_callbacks() {
        let mut view = view_for(ShapeKind::Circle);
        assert_eq!(view.visual_state(), VisualState::Idle);

        view.on_drag_entered(Some(ShapeKind::Circle));
        assert_eq!(view.visual_state(), VisualState::Hovered);
        assert_eq!(view.target_scale(), HOVER_SCALE);

        view.on_drag_exited(Some(ShapeKind::Circle));
        assert_eq!(view.visual_state(), VisualState::Idle);
        assert_eq!(view.target_scale(), NEUTRAL_SCALE);
    }

    #[test]
    fn enter_scales_up_after_animation() {
        let mut view = view_for(ShapeKind::Circle);
        view.on_drag_entered(Some(ShapeKind::Circle));
        view.tick(SCALE_ANIMATION_DURATION_MS);
        assert_eq!(view.scale(), HOVER_SCALE);
        assert!(!view.is_animating());
    }

    #[test]
    fn drop_without_zone_does_not_notify() {
        let mut view = DropZoneView::new(DropZonePresenter::new(ZoneId(0)));
        let (tx, rx) = drop_channel();
        view.set_listener(tx);
        view.on_drag_dropped(Some(ShapeKind::Circle));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn channel_listener_forwards_drop() {
        let mut view = view_for(ShapeKind::Diamond);
        let (tx, rx) = drop_channel();
        view.set_listener(tx);
        view.on_drag_dropped(Some(ShapeKind::Triangle));

        let dropped = rx.try_recv().unwrap();
        assert_eq!(dropped.zone.expected_shape(), ShapeKind::Diamond);
        assert_eq!(dropped.shape, Some(ShapeKind::Triangle));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn scaled_bounds_grow_about_center() {
        let mut view = view_for(ShapeKind::Rectangle);
        view.set_bounds(RectF::new(0.0, 0.0, 10.0, 10.0));
        view.on_drag_entered(Some(ShapeKind::Rectangle));
        view.tick(SCALE_ANIMATION_DURATION_MS);
        let r = view.scaled_bounds();
        assert!((r.left + 1.0).abs() < 1e-5);
        assert!((r.right - 11.0).abs() < 1e-5);
    }
}
