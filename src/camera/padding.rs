//! Berechnung der beiden Padding-Profile aus Surface-Geometrie.
//!
//! Wird bei jeder Änderung des sichtbaren Bereichs neu berechnet und
//! muss entsprechend billig bleiben (reine Arithmetik).

use crate::core::{dp_to_px, EdgeInsets, ScreenRect};
use crate::shared::CameraTuning;

/// Overview-Profil: gleichmäßiger Rand auf allen vier Seiten,
/// zusätzlich zu den Host-Insets.
pub fn overview_profile(
    edge_insets: &EdgeInsets,
    tuning: &CameraTuning,
    pixel_ratio: f64,
) -> EdgeInsets {
    let padding_px = dp_to_px(tuning.overview_padding_dp, pixel_ratio);
    EdgeInsets::new(
        edge_insets.top + padding_px,
        edge_insets.left + padding_px,
        edge_insets.bottom + padding_px,
        edge_insets.right + padding_px,
    )
}

/// Following-Profil: Rand wie Overview, das untere Inset wächst
/// zusätzlich um einen Anteil der sichtbaren Höhe, damit der Puck im
/// oberen Bilddrittel bleibt.
pub fn following_profile(
    visible_area: &ScreenRect,
    edge_insets: &EdgeInsets,
    tuning: &CameraTuning,
    pixel_ratio: f64,
) -> EdgeInsets {
    let padding_px = dp_to_px(tuning.following_padding_dp, pixel_ratio);
    let visible_height = visible_area.height();
    EdgeInsets::new(
        edge_insets.top + padding_px,
        edge_insets.left + padding_px,
        edge_insets.bottom + padding_px + visible_height * tuning.bottom_following_fraction,
        edge_insets.right + padding_px,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_following_bottom_grows_by_third_of_visible_height() {
        let area = ScreenRect::new(0.0, 0.0, 400.0, 300.0);
        let insets = EdgeInsets::new(0.0, 0.0, 10.0, 0.0);
        let padding = following_profile(&area, &insets, &CameraTuning::default(), 1.0);
        // 10 + 5 + 300 * 1/3
        assert_relative_eq!(padding.bottom, 115.0);
        assert_relative_eq!(padding.top, 5.0);
        assert_relative_eq!(padding.left, 5.0);
        assert_relative_eq!(padding.right, 5.0);
    }

    #[test]
    fn test_overview_profile_is_uniform() {
        let insets = EdgeInsets::new(1.0, 2.0, 3.0, 4.0);
        let padding = overview_profile(&insets, &CameraTuning::default(), 1.0);
        assert_relative_eq!(padding.top, 6.0);
        assert_relative_eq!(padding.left, 7.0);
        assert_relative_eq!(padding.bottom, 8.0);
        assert_relative_eq!(padding.right, 9.0);
    }

    #[test]
    fn test_pixel_ratio_scales_dp_padding() {
        let insets = EdgeInsets::default();
        let padding = overview_profile(&insets, &CameraTuning::default(), 2.0);
        assert_relative_eq!(padding.top, 10.0);
    }
}
