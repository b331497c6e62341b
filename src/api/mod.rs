pub mod interface;

pub use interface::{DynRouteService, ResetAPI, RouteAPI, RouteService, SelectionAPI, API};
