//! Drop zone presenter: connects a zone view to the drag relay.

use log::warn;

use crate::drag::{DragHelper, ZoneId};
use crate::zone_view::DropZoneView;

/// Registers a [`DropZoneView`] with the drag relay when attached and removes
/// it when detached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropZonePresenter {
    id: ZoneId,
}

impl DropZonePresenter {
    pub fn new(id: ZoneId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> ZoneId {
        self.id
    }

    /// Register the view's bounds for the shapes its zone accepts.
    ///
    /// Attaching again refreshes the registration.
    pub fn attach_view(&self, view: &DropZoneView, drag: &mut DragHelper) {
        match view.drop_zone() {
            Some(zone) => drag.register(self.id, view.bounds(), zone.available_shapes()),
            None => warn!("zone {:?} attached without a drop zone", self.id),
        }
    }

    pub fn detach_view(&self, drag: &mut DragHelper) {
        drag.unregister(self.id);
    }
}
