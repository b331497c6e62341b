mod point;
mod route;
mod selection;

pub use point::GeoPoint;
pub use route::{Route, RouteRequest, ALGORITHM};
pub use selection::Selection;
