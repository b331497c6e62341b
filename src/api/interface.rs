use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{GeoPoint, Route, RouteRequest};
use crate::error::Error;

/// The remote routing collaborator. Computes a shortest path between two
/// points; its algorithm is opaque to this client.
#[async_trait]
pub trait RouteService {
    async fn calculate_route(&self, request: RouteRequest) -> Result<Route, Error>;
}

pub type DynRouteService = Arc<dyn RouteService + Send + Sync>;

pub trait SelectionAPI {
    fn handle_map_click(&mut self, point: GeoPoint);
}

#[async_trait]
pub trait RouteAPI {
    async fn calculate_route(&mut self);
}

pub trait ResetAPI {
    fn reset(&mut self);
}

pub trait API: SelectionAPI + RouteAPI + ResetAPI {}
