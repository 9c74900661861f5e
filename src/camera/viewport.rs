//! Viewport-Data-Source: akkumuliert Position, Route und Fortschritt
//! und leitet daraus die Rahmungswünsche beider Modi ab.

use crate::core::{EdgeInsets, GeoPoint, MatchedLocation, Route, RouteProgress};
use crate::shared::{options, CameraTuning, FramingRequest};

use super::CameraMode;

/// Akkumulierter Eingangszustand für das Kamera-Framing.
///
/// Lebt genau eine Attach-Phase lang und wird ausschließlich vom
/// Controller mutiert. `evaluate()` muss nach jedem Event (nicht nach
/// jedem Mutator) aufgerufen werden, bevor die Frames maßgeblich sind.
#[derive(Debug, Clone)]
pub struct ViewportDataSource {
    latest_location: Option<MatchedLocation>,
    route_geometry: Vec<GeoPoint>,
    progress_remainder: Vec<GeoPoint>,
    following_padding: EdgeInsets,
    overview_padding: EdgeInsets,
    following_zoom_updates_allowed: bool,
    overview_zoom_updates_allowed: bool,
    following_pitch: f64,
    following_frame: FramingRequest,
    overview_frame: FramingRequest,
}

impl ViewportDataSource {
    /// Erstellt eine leere Data-Source für eine frische Attach-Phase.
    pub fn new(tuning: &CameraTuning) -> Self {
        Self {
            latest_location: None,
            route_geometry: Vec::new(),
            progress_remainder: Vec::new(),
            following_padding: EdgeInsets::default(),
            overview_padding: EdgeInsets::default(),
            following_zoom_updates_allowed: true,
            overview_zoom_updates_allowed: true,
            following_pitch: tuning.following_pitch,
            following_frame: FramingRequest::default(),
            overview_frame: FramingRequest::default(),
        }
    }

    /// Übernimmt die neueste gematchte Position.
    pub fn on_location_changed(&mut self, location: MatchedLocation) {
        self.latest_location = Some(location);
    }

    /// Übernimmt die Geometrie der neuen primären Route.
    pub fn on_route_changed(&mut self, route: &Route) {
        self.route_geometry = route.geometry.clone();
        self.progress_remainder.clear();
    }

    /// Verwirft Route und Fortschritt; das Overview-Framing
    /// degeneriert danach zu "nur aktuelle Position".
    pub fn clear_route_data(&mut self) {
        self.route_geometry.clear();
        self.progress_remainder.clear();
    }

    /// Übernimmt den noch nicht befahrenen Teil der Route.
    pub fn on_route_progress_changed(&mut self, progress: &RouteProgress) {
        self.progress_remainder = progress.remaining_geometry.clone();
    }

    /// Ersetzt das Padding-Profil des Following-Modus.
    pub fn set_following_padding(&mut self, padding: EdgeInsets) {
        self.following_padding = padding;
    }

    /// Ersetzt das Padding-Profil des Overview-Modus.
    pub fn set_overview_padding(&mut self, padding: EdgeInsets) {
        self.overview_padding = padding;
    }

    /// Erlaubt oder verbietet Zoom-Änderungen durch das Framing,
    /// getrennt je automatischem Modus. Für `Idle` wirkungslos.
    pub fn set_zoom_updates_allowed(&mut self, mode: CameraMode, allowed: bool) {
        match mode {
            CameraMode::Following => self.following_zoom_updates_allowed = allowed,
            CameraMode::Overview => self.overview_zoom_updates_allowed = allowed,
            CameraMode::Idle => {}
        }
    }

    /// Gibt zurück, ob das Framing im gegebenen Modus den Zoom ändern
    /// darf. Für `Idle` immer `true`.
    pub fn zoom_updates_allowed(&self, mode: CameraMode) -> bool {
        match mode {
            CameraMode::Following => self.following_zoom_updates_allowed,
            CameraMode::Overview => self.overview_zoom_updates_allowed,
            CameraMode::Idle => true,
        }
    }

    /// Berechnet beide Rahmungswünsche aus dem aktuellen Zustand neu.
    ///
    /// Idempotent; muss nach jedem mutierenden Event einmal
    /// aufgerufen werden.
    pub fn evaluate(&mut self) {
        self.following_frame = self.evaluate_following();
        self.overview_frame = self.evaluate_overview();
    }

    /// Rahmungswunsch des Following-Modus (Stand des letzten `evaluate`).
    pub fn following_frame(&self) -> &FramingRequest {
        &self.following_frame
    }

    /// Rahmungswunsch des Overview-Modus (Stand des letzten `evaluate`).
    pub fn overview_frame(&self) -> &FramingRequest {
        &self.overview_frame
    }

    /// Following: aktuelle Position plus Rest-Geometrie, damit das
    /// Framing nach vorn (Fahrtrichtung) statt nach hinten zielt.
    fn evaluate_following(&self) -> FramingRequest {
        let Some(location) = self.latest_location else {
            return FramingRequest::default();
        };
        let mut points = Vec::with_capacity(1 + self.progress_remainder.len());
        points.push(location.point);
        points.extend_from_slice(&self.progress_remainder);
        FramingRequest {
            points,
            padding: self.following_padding,
            zoom_updates_allowed: self.following_zoom_updates_allowed,
            pitch: self.following_pitch,
            bearing: location.bearing,
        }
    }

    /// Overview: Rest-Geometrie falls vorhanden, sonst volle Route,
    /// sonst nur die aktuelle Position (degradiert).
    fn evaluate_overview(&self) -> FramingRequest {
        let points = if !self.progress_remainder.is_empty() {
            self.progress_remainder.clone()
        } else if !self.route_geometry.is_empty() {
            self.route_geometry.clone()
        } else {
            self.latest_location
                .map(|location| vec![location.point])
                .unwrap_or_default()
        };
        FramingRequest {
            points,
            padding: self.overview_padding,
            zoom_updates_allowed: self.overview_zoom_updates_allowed,
            pitch: options::OVERVIEW_PITCH,
            bearing: options::OVERVIEW_BEARING,
        }
    }
}
