//! Navigations-Kamera-Controller.
//!
//! Transformiert den Strom aus Positions-, Routen-, Gesten- und
//! Geometrie-Events einer Navigations-Kartenoberfläche in
//! Kamera-Kommandos (Pan/Zoom/Pitch) an eine injizierte Render-Engine.
//! Die Engine selbst (Projektion, Animation, Rendering) ist ein
//! externer Kollaborateur hinter dem [`MapCameraEngine`]-Vertrag.

pub mod camera;
pub mod core;
pub mod engine;
pub mod shared;

pub use camera::{CameraEvent, CameraMode, NavigationCameraController, ViewportDataSource};
pub use core::{
    dp_to_px, EdgeInsets, GeoBounds, GeoPoint, MatchedLocation, Route, RouteProgress, ScreenRect,
};
pub use engine::{CameraOptions, MapCameraEngine, TransitionOptions};
pub use shared::{CameraTuning, FramingRequest};
