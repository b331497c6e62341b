use std::collections::HashMap;

use crate::entities::GeoPoint;
use crate::map::{Bounds, MapSurface, MarkerIcon, MarkerId, OverlayId, StatusPanel};

#[derive(Clone, Debug)]
struct Marker {
    point: GeoPoint,
    icon: MarkerIcon,
    popup: String,
}

/// In-memory map surface backing the terminal session and the test suite.
/// Deployments with a real basemap supply their own `MapSurface`.
#[derive(Debug, Default)]
pub struct HeadlessMap {
    markers: HashMap<MarkerId, Marker>,
    polylines: HashMap<OverlayId, Vec<GeoPoint>>,
    viewport: Option<(Bounds, u32)>,
}

impl HeadlessMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates the user dragging a marker to a new position.
    pub fn move_marker(&mut self, id: MarkerId, point: GeoPoint) -> bool {
        match self.markers.get_mut(&id) {
            Some(marker) => {
                marker.point = point;
                true
            }
            None => false,
        }
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn markers_with_icon(&self, icon: MarkerIcon) -> usize {
        self.markers.values().filter(|m| m.icon == icon).count()
    }

    pub fn polyline_count(&self) -> usize {
        self.polylines.len()
    }

    pub fn polyline_paths(&self) -> Vec<&[GeoPoint]> {
        self.polylines.values().map(Vec::as_slice).collect()
    }

    pub fn viewport(&self) -> Option<(Bounds, u32)> {
        self.viewport
    }
}

impl MapSurface for HeadlessMap {
    fn add_marker(&mut self, point: GeoPoint, icon: MarkerIcon, popup: &str) -> MarkerId {
        let id = MarkerId::new();

        tracing::info!(?id, ?point, ?icon, "marker added");
        self.markers.insert(
            id,
            Marker {
                point,
                icon,
                popup: popup.into(),
            },
        );

        id
    }

    fn remove_marker(&mut self, id: MarkerId) {
        if let Some(marker) = self.markers.remove(&id) {
            tracing::info!(?id, popup = %marker.popup, "marker removed");
        }
    }

    fn marker_position(&self, id: MarkerId) -> Option<GeoPoint> {
        self.markers.get(&id).map(|m| m.point)
    }

    fn add_polyline(&mut self, path: &[GeoPoint]) -> OverlayId {
        let id = OverlayId::new();

        tracing::info!(?id, points = path.len(), "polyline added");
        self.polylines.insert(id, path.to_vec());

        id
    }

    fn remove_polyline(&mut self, id: OverlayId) {
        if self.polylines.remove(&id).is_some() {
            tracing::info!(?id, "polyline removed");
        }
    }

    fn fit_bounds(&mut self, bounds: Bounds, padding: u32) {
        tracing::info!(?bounds, padding, "viewport fitted");
        self.viewport = Some((bounds, padding));
    }
}

/// Writes the status and distance fields to stdout and keeps the latest
/// values readable for assertions.
#[derive(Debug, Default)]
pub struct ConsolePanel {
    status: String,
    distance: String,
}

impl ConsolePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn distance(&self) -> &str {
        &self.distance
    }
}

impl StatusPanel for ConsolePanel {
    fn set_status(&mut self, text: &str) {
        println!("status: {text}");
        self.status = text.into();
    }

    fn set_distance(&mut self, text: &str) {
        println!("{text}");
        self.distance = text.into();
    }

    fn clear_distance(&mut self) {
        println!();
        self.distance.clear();
    }
}
