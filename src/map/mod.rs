mod headless;
mod surface;

pub use headless::{ConsolePanel, HeadlessMap};
pub use surface::{Bounds, MapSurface, MarkerIcon, MarkerId, OverlayId, StatusPanel};
