//! Geografische Wertetypen: Punkt und Bounding-Box.

use serde::{Deserialize, Serialize};

/// Geografischer Punkt in Grad (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Längengrad in Grad (-180..180)
    pub longitude: f64,
    /// Breitengrad in Grad (-90..90)
    pub latitude: f64,
}

impl GeoPoint {
    /// Erstellt einen neuen Punkt aus Längen- und Breitengrad.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// Achsenparallele Bounding-Box über Längen-/Breitengrad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    /// Minimaler Längengrad
    pub min_longitude: f64,
    /// Minimaler Breitengrad
    pub min_latitude: f64,
    /// Maximaler Längengrad
    pub max_longitude: f64,
    /// Maximaler Breitengrad
    pub max_latitude: f64,
}

impl GeoBounds {
    /// Berechnet die Bounding-Box einer Punktmenge.
    /// Gibt `None` zurück, wenn die Menge leer ist.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self {
            min_longitude: first.longitude,
            min_latitude: first.latitude,
            max_longitude: first.longitude,
            max_latitude: first.latitude,
        };
        for point in &points[1..] {
            bounds.extend(*point);
        }
        Some(bounds)
    }

    /// Erweitert die Box, sodass sie den Punkt einschließt.
    pub fn extend(&mut self, point: GeoPoint) {
        self.min_longitude = self.min_longitude.min(point.longitude);
        self.min_latitude = self.min_latitude.min(point.latitude);
        self.max_longitude = self.max_longitude.max(point.longitude);
        self.max_latitude = self.max_latitude.max(point.latitude);
    }

    /// Gibt den Mittelpunkt der Box zurück.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_longitude + self.max_longitude) / 2.0,
            (self.min_latitude + self.max_latitude) / 2.0,
        )
    }
}
