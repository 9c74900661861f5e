//! Core-Domänentypen: Geo-Punkte, Screen-Geometrie, Position und Route.

pub mod geo;
pub mod location;
pub mod route;
pub mod screen;

pub use geo::{GeoBounds, GeoPoint};
pub use location::MatchedLocation;
pub use route::{Route, RouteProgress};
pub use screen::{dp_to_px, EdgeInsets, ScreenRect};
