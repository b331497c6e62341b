use async_trait::async_trait;

use super::{
    Controller, FIT_PADDING, STATUS_CALCULATED, STATUS_CALCULATING, STATUS_ERROR,
    STATUS_NEED_POINTS,
};
use crate::api::RouteAPI;
use crate::entities::{Route, RouteRequest};
use crate::map::{Bounds, MapSurface, StatusPanel};

#[async_trait]
impl<M: MapSurface + Send, P: StatusPanel + Send> RouteAPI for Controller<M, P> {
    #[tracing::instrument(skip(self))]
    async fn calculate_route(&mut self) {
        // markers are draggable, so positions are read at request time
        let positions = self.selection.markers().and_then(|(start, end)| {
            self.map
                .marker_position(start)
                .zip(self.map.marker_position(end))
        });

        let Some((start, end)) = positions else {
            self.panel.set_status(STATUS_NEED_POINTS);
            return;
        };

        self.panel.set_status(STATUS_CALCULATING);

        let result = self
            .routes
            .calculate_route(RouteRequest::new(start, end))
            .await;

        match result {
            Ok(route) => self.render_route(route),
            Err(err) if err.is_user_facing() => self.panel.set_status(&err.message),
            Err(err) => {
                tracing::error!(code = err.code, message = %err.message, "route calculation failed");
                self.panel.set_status(STATUS_ERROR);
            }
        }
    }
}

impl<M: MapSurface, P: StatusPanel> Controller<M, P> {
    fn render_route(&mut self, route: Route) {
        // at most one route overlay exists at a time
        if let Some(overlay) = self.route_overlay.take() {
            self.map.remove_polyline(overlay);
        }

        self.route_overlay = Some(self.map.add_polyline(&route.path));

        self.panel
            .set_distance(&format!("Distance: {:.2} km", route.distance_km()));
        self.panel.set_status(STATUS_CALCULATED);

        if let Some(bounds) = Bounds::from_path(&route.path) {
            self.map.fit_bounds(bounds, FIT_PADDING);
        }
    }
}
