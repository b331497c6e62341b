use super::{Controller, STATUS_INITIAL};
use crate::api::ResetAPI;
use crate::entities::Selection;
use crate::map::{MapSurface, StatusPanel};

impl<M: MapSurface, P: StatusPanel> ResetAPI for Controller<M, P> {
    #[tracing::instrument(skip(self))]
    fn reset(&mut self) {
        if let Some(marker) = self.selection.start_marker() {
            self.map.remove_marker(marker);
        }

        if let Some(marker) = self.selection.end_marker() {
            self.map.remove_marker(marker);
        }

        if let Some(overlay) = self.route_overlay.take() {
            self.map.remove_polyline(overlay);
        }

        self.selection = Selection::Empty;
        self.panel.clear_distance();
        self.panel.set_status(STATUS_INITIAL);
    }
}
