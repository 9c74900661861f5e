//! Positions-Wertetypen aus der Positionierungsquelle.

use super::GeoPoint;
use serde::{Deserialize, Serialize};

/// Map-gematchte Position aus der Positionierungsquelle.
///
/// Rohe (ungematchte) Positionen werden vom Kamera-Controller nicht
/// verarbeitet und tauchen hier deshalb nicht auf.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchedLocation {
    /// Gematchte Position
    pub point: GeoPoint,
    /// Fahrtrichtung in Grad (0 = Nord, im Uhrzeigersinn)
    pub bearing: f64,
    /// Geschwindigkeit in m/s, falls von der Quelle geliefert
    pub speed: Option<f64>,
}

impl MatchedLocation {
    /// Erstellt eine gematchte Position ohne Geschwindigkeitsangabe.
    pub fn new(point: GeoPoint, bearing: f64) -> Self {
        Self {
            point,
            bearing,
            speed: None,
        }
    }

    /// Setzt die Geschwindigkeit (Builder-Stil).
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }
}
