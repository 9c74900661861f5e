//! Kamera-Modi des Navigations-Controllers.

use serde::{Deserialize, Serialize};

/// Modus der Navigations-Kamera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraMode {
    /// Kamera ist vollständig nutzergesteuert, kein automatisches Framing
    Idle,
    /// Kamera folgt der aktuellen Position entlang der Fahrtrichtung
    Following,
    /// Kamera rahmt die gesamte verbleibende Route
    Overview,
}

impl CameraMode {
    /// Gibt `true` zurück, wenn der Modus automatisches Framing fährt.
    pub fn is_automatic(&self) -> bool {
        !matches!(self, CameraMode::Idle)
    }
}
