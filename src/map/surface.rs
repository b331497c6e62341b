use uuid::Uuid;

use crate::entities::GeoPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarkerId(Uuid);

impl MarkerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OverlayId(Uuid);

impl OverlayId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerIcon {
    Start,
    End,
}

/// Axis-aligned bounding box of a set of points, used for viewport fitting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl Bounds {
    pub fn from_path(path: &[GeoPoint]) -> Option<Self> {
        let first = path.first()?;

        let mut south_west = *first;
        let mut north_east = *first;

        for point in &path[1..] {
            south_west.latitude = south_west.latitude.min(point.latitude);
            south_west.longitude = south_west.longitude.min(point.longitude);
            north_east.latitude = north_east.latitude.max(point.latitude);
            north_east.longitude = north_east.longitude.max(point.longitude);
        }

        Some(Self {
            south_west,
            north_east,
        })
    }
}

/// The rendered map the user interacts with. Tile rendering and click
/// delivery live behind this seam; the client only manipulates overlays.
pub trait MapSurface {
    fn add_marker(&mut self, point: GeoPoint, icon: MarkerIcon, popup: &str) -> MarkerId;

    fn remove_marker(&mut self, id: MarkerId);

    /// Current position of a marker. Markers are draggable, so this may
    /// differ from the coordinates the marker was placed at.
    fn marker_position(&self, id: MarkerId) -> Option<GeoPoint>;

    fn add_polyline(&mut self, path: &[GeoPoint]) -> OverlayId;

    fn remove_polyline(&mut self, id: OverlayId);

    fn fit_bounds(&mut self, bounds: Bounds, padding: u32);
}

/// The status and distance text fields next to the map.
pub trait StatusPanel {
    fn set_status(&mut self, text: &str);

    fn set_distance(&mut self, text: &str);

    fn clear_distance(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_every_point_in_the_path() {
        let path = vec![
            GeoPoint::new(40.75, -73.98).unwrap(),
            GeoPoint::new(40.755, -73.97).unwrap(),
            GeoPoint::new(40.76, -73.96).unwrap(),
        ];

        let bounds = Bounds::from_path(&path).unwrap();

        assert_eq!(bounds.south_west.latitude, 40.75);
        assert_eq!(bounds.south_west.longitude, -73.98);
        assert_eq!(bounds.north_east.latitude, 40.76);
        assert_eq!(bounds.north_east.longitude, -73.96);
    }

    #[test]
    fn bounds_of_an_empty_path_are_absent() {
        assert_eq!(Bounds::from_path(&[]), None);
    }
}
