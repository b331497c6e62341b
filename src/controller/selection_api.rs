use super::{Controller, STATUS_END_SET, STATUS_START_SET};
use crate::api::SelectionAPI;
use crate::entities::{GeoPoint, Selection};
use crate::map::{MapSurface, MarkerIcon, StatusPanel};

impl<M: MapSurface, P: StatusPanel> SelectionAPI for Controller<M, P> {
    #[tracing::instrument(skip(self), fields(selection = self.selection.name()))]
    fn handle_map_click(&mut self, point: GeoPoint) {
        match self.selection {
            Selection::Empty => {
                let start = self.map.add_marker(point, MarkerIcon::Start, "Start Point");

                self.selection = Selection::StartSet { start };
                self.panel.set_status(STATUS_START_SET);
            }
            Selection::StartSet { start } => {
                let end = self.map.add_marker(point, MarkerIcon::End, "End Point");

                self.selection = Selection::Complete { start, end };
                self.panel.set_status(STATUS_END_SET);
            }
            // re-picking points requires an explicit reset
            Selection::Complete { .. } => {
                tracing::debug!("selection already complete, ignoring click");
            }
        }
    }
}
