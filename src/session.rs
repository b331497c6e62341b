use async_channel::Receiver;

use crate::api::API;
use crate::entities::GeoPoint;

/// A user interaction delivered by the host environment.
#[derive(Clone, Debug)]
pub enum Event {
    MapClick(GeoPoint),
    CalculateRoute,
    Clear,
}

/// Drains UI events in arrival order and handles each one to completion
/// before the next, awaiting the route request inline. A second calculation
/// can never start while one is outstanding, and a reset can never interleave
/// with an in-flight request.
pub async fn run<C: API + Send>(client: &mut C, events: Receiver<Event>) {
    while let Ok(event) = events.recv().await {
        tracing::debug!(?event, "handling event");

        match event {
            Event::MapClick(point) => client.handle_map_click(point),
            Event::CalculateRoute => client.calculate_route().await,
            Event::Clear => client.reset(),
        }
    }

    tracing::info!("event channel closed, session over");
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::api::RouteService;
    use crate::controller::{Controller, STATUS_CALCULATED, STATUS_INITIAL};
    use crate::entities::{Route, RouteRequest};
    use crate::error::Error;
    use crate::map::{ConsolePanel, HeadlessMap};

    struct FixedRoute(Route);

    #[async_trait]
    impl RouteService for FixedRoute {
        async fn calculate_route(&self, _request: RouteRequest) -> Result<Route, Error> {
            Ok(self.0.clone())
        }
    }

    fn client() -> Controller<HeadlessMap, ConsolePanel> {
        let route = Route::new(
            vec![
                GeoPoint::new(40.75, -73.98).unwrap(),
                GeoPoint::new(40.76, -73.96).unwrap(),
            ],
            1500.0,
        );

        Controller::new(
            HeadlessMap::new(),
            ConsolePanel::new(),
            Arc::new(FixedRoute(route)),
        )
    }

    #[test]
    fn events_are_handled_in_arrival_order() {
        let (sender, receiver) = async_channel::unbounded();
        let mut client = client();

        tokio_test::block_on(async {
            sender
                .send(Event::MapClick(GeoPoint::new(40.75, -73.98).unwrap()))
                .await
                .unwrap();
            sender
                .send(Event::MapClick(GeoPoint::new(40.76, -73.96).unwrap()))
                .await
                .unwrap();
            sender.send(Event::CalculateRoute).await.unwrap();
            drop(sender);

            run(&mut client, receiver).await;
        });

        assert_eq!(client.map().marker_count(), 2);
        assert_eq!(client.map().polyline_count(), 1);
        assert_eq!(client.panel().status(), STATUS_CALCULATED);
        assert_eq!(client.panel().distance(), "Distance: 1.50 km");
    }

    #[test]
    fn clear_event_returns_the_session_to_its_initial_state() {
        let (sender, receiver) = async_channel::unbounded();
        let mut client = client();

        tokio_test::block_on(async {
            sender
                .send(Event::MapClick(GeoPoint::new(40.75, -73.98).unwrap()))
                .await
                .unwrap();
            sender
                .send(Event::MapClick(GeoPoint::new(40.76, -73.96).unwrap()))
                .await
                .unwrap();
            sender.send(Event::CalculateRoute).await.unwrap();
            sender.send(Event::Clear).await.unwrap();
            drop(sender);

            run(&mut client, receiver).await;
        });

        assert_eq!(client.map().marker_count(), 0);
        assert_eq!(client.map().polyline_count(), 0);
        assert_eq!(client.panel().distance(), "");
        assert_eq!(client.panel().status(), STATUS_INITIAL);
    }
}
