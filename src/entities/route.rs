use serde::{Deserialize, Serialize};

use crate::entities::GeoPoint;

/// Identifier of the server-side pathfinding strategy. The service accepts a
/// single value today.
pub const ALGORITHM: &str = "dijkstra";

/// Wire body of a route calculation request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
    pub algorithm: String,
}

impl RouteRequest {
    pub fn new(start: GeoPoint, end: GeoPoint) -> Self {
        Self {
            start_lat: start.latitude,
            start_lng: start.longitude,
            end_lat: end.latitude,
            end_lng: end.longitude,
            algorithm: ALGORITHM.into(),
        }
    }
}

/// A successfully calculated route. Each new result supersedes the previous
/// one wholesale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub path: Vec<GeoPoint>,
    pub distance: f64,
}

impl Route {
    pub fn new(path: Vec<GeoPoint>, distance: f64) -> Self {
        Self { path, distance }
    }

    pub fn distance_km(&self) -> f64 {
        self.distance / 1000.0
    }
}
