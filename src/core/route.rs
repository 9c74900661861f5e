//! Routen-Wertetypen aus der Routenquelle.

use super::GeoPoint;
use serde::{Deserialize, Serialize};

/// Eine Route als geordnete Punktfolge.
///
/// Die Routenquelle liefert bei Änderung die aktive Routenmenge;
/// die erste Route der Menge ist die primäre.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Route {
    /// Vollständige Routen-Geometrie
    pub geometry: Vec<GeoPoint>,
}

impl Route {
    /// Erstellt eine Route aus ihrer Geometrie.
    pub fn new(geometry: Vec<GeoPoint>) -> Self {
        Self { geometry }
    }
}

/// Fortschritt entlang der aktiven Route.
///
/// Enthält nur den noch nicht befahrenen Teil der Geometrie; der
/// bereits zurückgelegte Teil ist für die Kamera irrelevant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteProgress {
    /// Verbleibende (noch nicht befahrene) Geometrie
    pub remaining_geometry: Vec<GeoPoint>,
}

impl RouteProgress {
    /// Erstellt einen Routen-Fortschritt aus der Rest-Geometrie.
    pub fn new(remaining_geometry: Vec<GeoPoint>) -> Self {
        Self { remaining_geometry }
    }
}
