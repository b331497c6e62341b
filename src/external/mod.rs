pub mod routing;

pub use routing::RoutingService;
