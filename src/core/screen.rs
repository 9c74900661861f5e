//! Screen-Geometrie: Insets, sichtbarer Bereich, Dichte-Umrechnung.

use serde::{Deserialize, Serialize};

/// Ränder um den Viewport in Device-Independent-Pixeln.
/// Alle Komponenten sind nicht-negativ.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    /// Oberer Rand
    pub top: f64,
    /// Linker Rand
    pub left: f64,
    /// Unterer Rand
    pub bottom: f64,
    /// Rechter Rand
    pub right: f64,
}

impl EdgeInsets {
    /// Erstellt Insets; negative Werte werden auf 0 geklemmt.
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top: top.max(0.0),
            left: left.max(0.0),
            bottom: bottom.max(0.0),
            right: right.max(0.0),
        }
    }

    /// Gleichmäßige Insets auf allen vier Seiten.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Sichtbarer Bereich der Kartenoberfläche in Pixeln.
///
/// Entspricht dem Teil der Surface, der nicht von Host-UI verdeckt ist.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    /// Linke Kante
    pub left: f64,
    /// Obere Kante
    pub top: f64,
    /// Rechte Kante
    pub right: f64,
    /// Untere Kante
    pub bottom: f64,
}

impl ScreenRect {
    /// Erstellt ein Rechteck aus Kantenkoordinaten.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Breite des Rechtecks.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Höhe des Rechtecks.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Rechnet Device-Independent-Pixel (dp) in physische Pixel um.
///
/// `pixel_ratio` ist der Dichtefaktor der Surface (1.0 = mdpi).
pub fn dp_to_px(dp: f64, pixel_ratio: f64) -> f64 {
    (dp * pixel_ratio).round()
}
