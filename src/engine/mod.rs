//! Abstrakter Vertrag zur Render-Engine der Kartenoberfläche.
//!
//! Die eigentliche Engine (Projektion, Animation, Gesten-Default-
//! Handling) ist ein externer Kollaborateur; der Controller kennt nur
//! diesen Vertrag und bekommt das Engine-Handle beim `attach`
//! injiziert.

use crate::core::{EdgeInsets, GeoPoint};
use crate::shared::{options, FramingRequest};
use serde::{Deserialize, Serialize};

/// Partielle Kamera-Platzierung.
///
/// Nicht gesetzte Komponenten lassen den aktuellen Kamera-Zustand
/// unverändert.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraOptions {
    /// Ziel-Zentrum
    pub center: Option<GeoPoint>,
    /// Ziel-Zoom-Level
    pub zoom: Option<f64>,
    /// Ziel-Ausrichtung in Grad
    pub bearing: Option<f64>,
    /// Ziel-Neigung in Grad
    pub pitch: Option<f64>,
    /// Ziel-Padding
    pub padding: Option<EdgeInsets>,
}

impl CameraOptions {
    /// Leere Platzierung (ändert nichts).
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt das Ziel-Zentrum.
    pub fn with_center(mut self, center: GeoPoint) -> Self {
        self.center = Some(center);
        self
    }

    /// Setzt den Ziel-Zoom.
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Setzt die Ziel-Ausrichtung.
    pub fn with_bearing(mut self, bearing: f64) -> Self {
        self.bearing = Some(bearing);
        self
    }

    /// Setzt die Ziel-Neigung.
    pub fn with_pitch(mut self, pitch: f64) -> Self {
        self.pitch = Some(pitch);
        self
    }

    /// Setzt das Ziel-Padding.
    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Initiale Platzierung beim Binden der Surface: nur Zoom 15.
    pub fn default_initial() -> Self {
        Self::new().with_zoom(options::DEFAULT_INITIAL_ZOOM)
    }
}

/// Parameter einer animierten Kamera-Transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionOptions {
    /// Maximale Dauer der Transition in Millisekunden
    pub max_duration_ms: u64,
}

impl TransitionOptions {
    /// Transition mit gegebener Maximaldauer.
    pub fn with_max_duration(max_duration_ms: u64) -> Self {
        Self { max_duration_ms }
    }

    /// Sofortige Platzierung ohne Animation.
    pub fn instant() -> Self {
        Self { max_duration_ms: 0 }
    }

    /// Gibt `true` zurück, wenn die Transition sofort erfolgt.
    pub fn is_instant(&self) -> bool {
        self.max_duration_ms == 0
    }
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            max_duration_ms: options::STATE_TRANSITION_MAX_MS,
        }
    }
}

/// Kamera-Handle der Render-Engine.
///
/// Alle Kommandos sind Fire-and-Forget: die Engine besitzt Timing und
/// Abbruch laufender Animationen; Fehler der Engine sind für diesen
/// Core nicht beobachtbar. Der Controller ist während einer
/// Attach-Phase Alleinbesitzer des Handles (Single-Writer-Modell).
pub trait MapCameraEngine {
    /// Setzt die Kamera synchron, ohne Animation.
    fn set_camera(&mut self, options: CameraOptions);

    /// Animiert die Kamera zur gegebenen Platzierung.
    fn ease_to(&mut self, options: CameraOptions, transition: TransitionOptions);

    /// Aktueller Zoom-Level der Kamera.
    fn current_zoom(&self) -> f64;

    /// Dichtefaktor der Surface (physische Pixel pro dp).
    fn pixel_ratio(&self) -> f64;

    /// Übersetzt einen Rahmungswunsch in eine Kamera-Platzierung.
    ///
    /// Die Engine kennt die Projektion und berechnet Zentrum und
    /// (falls `zoom_updates_allowed`) Zoom so, dass alle Punkte unter
    /// Berücksichtigung des Paddings sichtbar sind.
    fn frame_to_fit(&self, request: &FramingRequest) -> CameraOptions;
}
