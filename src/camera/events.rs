//! Kamera-Events und ihr Routing auf den Controller.
//!
//! Der Host adaptiert Positionierungs-, Routen- und Gesten-Quellen in
//! `CameraEvent`s und marshallt sie auf den einen Ausführungskontext,
//! der auch die Engine besitzt. Jeder Event-Arm ist ein reiner
//! Weiterleitungs-Adapter auf genau einen benannten Handler.

use crate::core::{EdgeInsets, MatchedLocation, Route, RouteProgress, ScreenRect};
use crate::engine::MapCameraEngine;

use super::{CameraMode, NavigationCameraController};

/// Eingangs-Events des Kamera-Controllers.
#[derive(Debug, Clone, PartialEq)]
pub enum CameraEvent {
    /// Neue gematchte Position aus der Positionierungsquelle
    LocationUpdated { location: MatchedLocation },
    /// Aktive Routenmenge hat sich geändert (erste Route = primär,
    /// leer = keine Route mehr)
    RoutesChanged { routes: Vec<Route> },
    /// Routen-Fortschritts-Tick mit der verbleibenden Geometrie
    RouteProgressChanged { progress: RouteProgress },
    /// Nutzer-Pan auf der Kartenoberfläche
    PanGesture { delta: glam::DVec2 },
    /// Nutzer-Pinch/Scale auf der Kartenoberfläche
    ScaleGesture {
        anchor: glam::DVec2,
        from_zoom: f64,
        to_zoom: f64,
    },
    /// Sichtbarer Bereich oder Host-Insets haben sich geändert
    VisibleAreaChanged {
        visible_area: ScreenRect,
        edge_insets: EdgeInsets,
    },
    /// Expliziter Moduswechsel (UI-Toggle-Button)
    ModeRequested { mode: CameraMode },
    /// Zoom-In-Action-Button gedrückt
    ZoomInPressed,
    /// Zoom-Out-Action-Button gedrückt
    ZoomOutPressed,
}

impl<E: MapCameraEngine> NavigationCameraController<E> {
    /// Routet ein Event auf den zuständigen Handler.
    ///
    /// Gibt `true` zurück, wenn der Controller die Geste konsumiert
    /// hat und sie nicht an das Default-Handling der Engine
    /// weitergereicht werden soll; für Nicht-Gesten immer `false`.
    /// Innerhalb eines Events mutiert immer erst die Data-Source,
    /// dann folgt das Kamera-Kommando; Handler reentern die
    /// State-Machine nie rekursiv.
    pub fn handle_event(&mut self, event: CameraEvent) -> bool {
        match event {
            CameraEvent::LocationUpdated { location } => {
                self.on_location_changed(location);
                false
            }
            CameraEvent::RoutesChanged { routes } => {
                self.on_routes_changed(&routes);
                false
            }
            CameraEvent::RouteProgressChanged { progress } => {
                self.on_route_progress_changed(&progress);
                false
            }
            CameraEvent::PanGesture { delta } => self.on_pan_gesture(delta),
            CameraEvent::ScaleGesture {
                anchor,
                from_zoom,
                to_zoom,
            } => self.on_scale_gesture(anchor, from_zoom, to_zoom),
            CameraEvent::VisibleAreaChanged {
                visible_area,
                edge_insets,
            } => {
                self.on_visible_area_changed(visible_area, edge_insets);
                false
            }
            CameraEvent::ModeRequested { mode } => {
                self.request_mode(mode);
                false
            }
            CameraEvent::ZoomInPressed => {
                self.zoom_in();
                false
            }
            CameraEvent::ZoomOutPressed => {
                self.zoom_out();
                false
            }
        }
    }
}
