//! Framing-Request: abgeleiteter Kamera-Rahmungswunsch eines Modus.

use crate::core::{EdgeInsets, GeoPoint};
use serde::{Deserialize, Serialize};

/// Abgeleiteter Rahmungswunsch für einen automatischen Kamera-Modus.
///
/// Wird von der `ViewportDataSource` bei `evaluate()` neu berechnet
/// und von der Render-Engine über `frame_to_fit` in eine konkrete
/// Kamera-Platzierung übersetzt. Ein Request ohne Punkte ist gültig
/// und bedeutet: kein Framing möglich (degradierter Zustand).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FramingRequest {
    /// Punktmenge, die ins Bild passen soll
    pub points: Vec<GeoPoint>,
    /// Anzuwendendes Padding-Profil
    pub padding: EdgeInsets,
    /// Ob das Framing den Zoom-Level verändern darf
    pub zoom_updates_allowed: bool,
    /// Ziel-Neigung in Grad
    pub pitch: f64,
    /// Ziel-Ausrichtung in Grad (0 = Nord)
    pub bearing: f64,
}

impl FramingRequest {
    /// Gibt `true` zurück, wenn kein Framing möglich ist.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
