mod reset_api;
mod route_api;
mod selection_api;

use crate::api::{DynRouteService, API};
use crate::entities::Selection;
use crate::map::{MapSurface, OverlayId, StatusPanel};

pub const STATUS_INITIAL: &str = "Click on map to set start point.";
pub const STATUS_START_SET: &str = "Start point set. Click to set end point.";
pub const STATUS_END_SET: &str = "End point set. Click Calculate Route to find path.";
pub const STATUS_NEED_POINTS: &str = "Please set both start and end points first.";
pub const STATUS_CALCULATING: &str = "Calculating shortest path...";
pub const STATUS_CALCULATED: &str = "Route calculated successfully!";
pub const STATUS_ERROR: &str = "Error calculating route.";

const FIT_PADDING: u32 = 50;

/// Owns every piece of client state: the current selection, the route
/// overlay, and handles to the map surface, status panel and routing
/// service.
pub struct Controller<M: MapSurface, P: StatusPanel> {
    map: M,
    panel: P,
    routes: DynRouteService,
    selection: Selection,
    route_overlay: Option<OverlayId>,
}

impl<M: MapSurface, P: StatusPanel> Controller<M, P> {
    pub fn new(map: M, mut panel: P, routes: DynRouteService) -> Self {
        panel.set_status(STATUS_INITIAL);

        Self {
            map,
            panel,
            routes,
            selection: Selection::Empty,
            route_overlay: None,
        }
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    /// Mutable surface access, for host environments that deliver marker
    /// drags directly to the surface.
    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }
}

impl<M: MapSurface + Send, P: StatusPanel + Send> API for Controller<M, P> {}
