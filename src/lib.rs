pub mod api;
pub mod controller;
pub mod entities;
pub mod error;
pub mod external;
pub mod map;
pub mod session;
