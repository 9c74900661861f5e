//! Zentrale Konfiguration für den Kamera-Controller.
//!
//! `CameraTuning` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Initialer Zoom-Level beim Binden der Surface.
pub const DEFAULT_INITIAL_ZOOM: f64 = 15.0;
/// Geschätzter minimaler Zoom beim Zoomen per Delta oder Geste.
pub const MIN_ZOOM_OUT: f64 = 6.0;
/// Geschätzter maximaler Zoom beim Zoomen per Delta oder Geste.
pub const MAX_ZOOM_IN: f64 = 20.0;
/// Zoom-Delta der Zoom-In/Zoom-Out-Action-Buttons.
pub const ZOOM_ACTION_DELTA: f64 = 0.5;

// ── Padding ─────────────────────────────────────────────────────────

/// Im Following-Modus wird das untere Inset um diesen Anteil der
/// sichtbaren Viewport-Höhe vergrößert, damit der Puck im oberen
/// Bilddrittel bleibt.
pub const BOTTOM_FOLLOWING_FRACTION: f64 = 1.0 / 3.0;
/// Viewport-Rand des Following-Profils in dp.
pub const FOLLOWING_PADDING_DP: f64 = 5.0;
/// Viewport-Rand des Overview-Profils in dp.
pub const OVERVIEW_PADDING_DP: f64 = 5.0;

// ── Framing ─────────────────────────────────────────────────────────

/// Kamera-Neigung im Following-Modus in Grad.
pub const FOLLOWING_PITCH: f64 = 45.0;
/// Kamera-Neigung im Overview-Modus in Grad (senkrechte Draufsicht).
pub const OVERVIEW_PITCH: f64 = 0.0;
/// Kamera-Ausrichtung im Overview-Modus in Grad (genordet).
pub const OVERVIEW_BEARING: f64 = 0.0;

// ── Transitionen ────────────────────────────────────────────────────

/// Maximale Dauer einer Modus-Transition in Millisekunden.
pub const STATE_TRANSITION_MAX_MS: u64 = 3500;
/// Maximale Dauer eines Frame-Updates innerhalb eines Modus.
pub const FRAME_TRANSITION_MAX_MS: u64 = 1000;
/// Dauer des Ease beim diskreten Zoomen (Action-Buttons).
pub const ZOOM_EASE_MS: u64 = 300;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Kamera-Optionen.
/// Die Defaults entsprechen den `const`-Werten oben.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraTuning {
    /// Initialer Zoom-Level beim Binden der Surface
    pub initial_zoom: f64,
    /// Minimaler Zoom beim Zoomen per Delta oder Geste
    pub zoom_min: f64,
    /// Maximaler Zoom beim Zoomen per Delta oder Geste
    pub zoom_max: f64,
    /// Zoom-Delta der Action-Buttons
    pub zoom_action_delta: f64,
    /// Viewport-Rand des Following-Profils in dp
    pub following_padding_dp: f64,
    /// Viewport-Rand des Overview-Profils in dp
    pub overview_padding_dp: f64,
    /// Anteil der sichtbaren Höhe für das untere Following-Inset
    pub bottom_following_fraction: f64,
    /// Kamera-Neigung im Following-Modus in Grad
    pub following_pitch: f64,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            initial_zoom: DEFAULT_INITIAL_ZOOM,
            zoom_min: MIN_ZOOM_OUT,
            zoom_max: MAX_ZOOM_IN,
            zoom_action_delta: ZOOM_ACTION_DELTA,
            following_padding_dp: FOLLOWING_PADDING_DP,
            overview_padding_dp: OVERVIEW_PADDING_DP,
            bottom_following_fraction: BOTTOM_FOLLOWING_FRACTION,
            following_pitch: FOLLOWING_PITCH,
        }
    }
}

impl CameraTuning {
    /// Prüft die Optionen auf Konsistenz.
    ///
    /// Wird vom Host vor dem Übernehmen geänderter Werte aufgerufen;
    /// der reaktive Event-Pfad selbst ist unfehlbar.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.zoom_min < self.zoom_max,
            "zoom_min ({}) muss kleiner als zoom_max ({}) sein",
            self.zoom_min,
            self.zoom_max
        );
        anyhow::ensure!(
            (self.zoom_min..=self.zoom_max).contains(&self.initial_zoom),
            "initial_zoom ({}) liegt außerhalb von [{}, {}]",
            self.initial_zoom,
            self.zoom_min,
            self.zoom_max
        );
        anyhow::ensure!(
            self.zoom_action_delta > 0.0,
            "zoom_action_delta muss positiv sein"
        );
        anyhow::ensure!(
            self.following_padding_dp >= 0.0 && self.overview_padding_dp >= 0.0,
            "Padding in dp darf nicht negativ sein"
        );
        anyhow::ensure!(
            (0.0..1.0).contains(&self.bottom_following_fraction),
            "bottom_following_fraction ({}) muss in [0, 1) liegen",
            self.bottom_following_fraction
        );
        Ok(())
    }
}
