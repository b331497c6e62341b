use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;

use crate::api::RouteService;
use crate::entities::{GeoPoint, Route, RouteRequest};
use crate::error::{service_error, upstream_error, Error};

const FALLBACK_ERROR: &str = "Could not calculate route.";

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    success: bool,
    route: Option<Vec<[f64; 2]>>,
    distance: Option<f64>,
    error: Option<String>,
}

impl Response {
    fn into_route(self) -> Result<Route, Error> {
        if !self.success {
            let message = self.error.unwrap_or_else(|| FALLBACK_ERROR.into());
            return Err(service_error(message));
        }

        // a successful response without a route or distance is malformed
        let (coords, distance) = self
            .route
            .zip(self.distance)
            .ok_or_else(upstream_error)?;

        let path = coords
            .into_iter()
            .map(|[latitude, longitude]| GeoPoint {
                latitude,
                longitude,
            })
            .collect();

        Ok(Route::new(path, distance))
    }
}

/// HTTP client for the route calculation endpoint.
#[derive(Clone, Debug, Default)]
pub struct RoutingService;

impl RoutingService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RouteService for RoutingService {
    #[tracing::instrument(skip(self))]
    async fn calculate_route(&self, request: RouteRequest) -> Result<Route, Error> {
        let api_base = env::var("ROUTING_API_BASE")?;
        let url = format!("http://{}/api/calculate_route", api_base);

        let res = reqwest::Client::new()
            .post(url)
            .json(&request)
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code != 200 {
            return Err(upstream_error());
        }

        let data: Response = res.json().await?;

        data.into_route()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> Response {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn successful_response_decodes_into_a_route() {
        let data = decode(
            r#"{
                "success": true,
                "route": [[40.75, -73.98], [40.755, -73.97], [40.76, -73.96]],
                "distance": 2340
            }"#,
        );

        let route = data.into_route().unwrap();

        assert_eq!(route.path.len(), 3);
        assert_eq!(route.path[1], GeoPoint::new(40.755, -73.97).unwrap());
        assert_eq!(route.distance, 2340.0);
    }

    #[test]
    fn successful_response_without_route_is_an_upstream_error() {
        let data = decode(r#"{"success": true, "distance": 2340}"#);

        let err = data.into_route().unwrap_err();

        assert_eq!(err, upstream_error());
    }

    #[test]
    fn failure_carries_the_server_message() {
        let data = decode(r#"{"success": false, "error": "No path found"}"#);

        let err = data.into_route().unwrap_err();

        assert!(err.is_user_facing());
        assert_eq!(err.message, "No path found");
    }

    #[test]
    fn failure_without_a_message_uses_the_fallback() {
        let data = decode(r#"{"success": false}"#);

        let err = data.into_route().unwrap_err();

        assert!(err.is_user_facing());
        assert_eq!(err.message, "Could not calculate route.");
    }
}
