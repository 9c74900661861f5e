//! Tests für die Ableitung der Rahmungswünsche aus der
//! Viewport-Data-Source.

use approx::assert_relative_eq;
use nav_map_camera::{
    CameraMode, CameraTuning, EdgeInsets, GeoPoint, MatchedLocation, Route, RouteProgress,
    ViewportDataSource,
};

fn viewport() -> ViewportDataSource {
    ViewportDataSource::new(&CameraTuning::default())
}

fn location(longitude: f64, latitude: f64, bearing: f64) -> MatchedLocation {
    MatchedLocation::new(GeoPoint::new(longitude, latitude), bearing)
}

#[test]
fn test_frames_are_empty_without_any_input() {
    let mut viewport = viewport();
    viewport.evaluate();
    assert!(viewport.following_frame().is_empty());
    assert!(viewport.overview_frame().is_empty());
}

#[test]
fn test_location_only_frames_single_point_in_both_modes() {
    let mut viewport = viewport();
    viewport.on_location_changed(location(13.4, 52.5, 45.0));
    viewport.evaluate();

    assert_eq!(viewport.following_frame().points, vec![GeoPoint::new(13.4, 52.5)]);
    assert_eq!(viewport.overview_frame().points, vec![GeoPoint::new(13.4, 52.5)]);
}

#[test]
fn test_following_frame_tracks_bearing_and_pitch() {
    let mut viewport = viewport();
    viewport.on_location_changed(location(0.0, 0.0, 137.0));
    viewport.evaluate();

    let frame = viewport.following_frame();
    assert_relative_eq!(frame.bearing, 137.0);
    assert_relative_eq!(frame.pitch, 45.0);
}

#[test]
fn test_overview_frame_is_north_up_and_flat() {
    let mut viewport = viewport();
    viewport.on_location_changed(location(0.0, 0.0, 137.0));
    viewport.evaluate();

    let frame = viewport.overview_frame();
    assert_relative_eq!(frame.bearing, 0.0);
    assert_relative_eq!(frame.pitch, 0.0);
}

#[test]
fn test_overview_prefers_remainder_over_full_route() {
    let mut viewport = viewport();
    let route = Route::new(vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(1.0, 1.0),
        GeoPoint::new(2.0, 2.0),
    ]);
    viewport.on_route_changed(&route);
    viewport.evaluate();
    assert_eq!(viewport.overview_frame().points.len(), 3);

    let progress = RouteProgress::new(vec![GeoPoint::new(1.0, 1.0), GeoPoint::new(2.0, 2.0)]);
    viewport.on_route_progress_changed(&progress);
    viewport.evaluate();
    assert_eq!(
        viewport.overview_frame().points,
        progress.remaining_geometry,
        "Mit Fortschritt zählt nur noch der Rest der Route"
    );
}

#[test]
fn test_following_biases_ahead_with_remainder() {
    let mut viewport = viewport();
    viewport.on_location_changed(location(0.5, 0.5, 10.0));
    viewport.on_route_progress_changed(&RouteProgress::new(vec![
        GeoPoint::new(1.0, 1.0),
        GeoPoint::new(2.0, 2.0),
    ]));
    viewport.evaluate();

    let points = &viewport.following_frame().points;
    assert_eq!(points.len(), 3);
    assert_eq!(points[0], GeoPoint::new(0.5, 0.5), "Position steht vorn");
    assert_eq!(points[1], GeoPoint::new(1.0, 1.0));
}

#[test]
fn test_route_change_drops_stale_remainder() {
    let mut viewport = viewport();
    viewport.on_route_progress_changed(&RouteProgress::new(vec![GeoPoint::new(9.0, 9.0)]));
    viewport.on_route_changed(&Route::new(vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(1.0, 1.0),
    ]));
    viewport.evaluate();

    assert_eq!(
        viewport.overview_frame().points.len(),
        2,
        "Ein Routenwechsel invalidiert den alten Fortschritt"
    );
}

#[test]
fn test_clear_route_data_degenerates_overview_to_location() {
    let mut viewport = viewport();
    viewport.on_location_changed(location(5.0, 5.0, 0.0));
    viewport.on_route_changed(&Route::new(vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(1.0, 1.0),
    ]));
    viewport.on_route_progress_changed(&RouteProgress::new(vec![GeoPoint::new(1.0, 1.0)]));
    viewport.clear_route_data();
    viewport.evaluate();

    assert_eq!(viewport.overview_frame().points, vec![GeoPoint::new(5.0, 5.0)]);
}

#[test]
fn test_padding_profiles_are_independent() {
    let mut viewport = viewport();
    viewport.on_location_changed(location(0.0, 0.0, 0.0));
    viewport.set_following_padding(EdgeInsets::new(1.0, 2.0, 115.0, 4.0));
    viewport.set_overview_padding(EdgeInsets::uniform(20.0));
    viewport.evaluate();

    let following = viewport.following_frame().padding;
    assert_relative_eq!(following.bottom, 115.0);
    assert_relative_eq!(following.left, 2.0);
    let overview = viewport.overview_frame().padding;
    assert_relative_eq!(overview.bottom, 20.0);
    assert_relative_eq!(overview.top, 20.0);
}

#[test]
fn test_evaluate_is_idempotent() {
    let mut viewport = viewport();
    viewport.on_location_changed(location(3.0, 4.0, 90.0));
    viewport.evaluate();
    let first = viewport.following_frame().clone();
    viewport.evaluate();
    assert_eq!(*viewport.following_frame(), first);
}

#[test]
fn test_stale_frames_until_evaluate_is_called() {
    let mut viewport = viewport();
    viewport.on_location_changed(location(3.0, 4.0, 90.0));
    assert!(
        viewport.following_frame().is_empty(),
        "Ohne evaluate() bleibt der alte Frame maßgeblich"
    );
    viewport.evaluate();
    assert!(!viewport.following_frame().is_empty());
}

#[test]
fn test_zoom_updates_flags_are_per_mode() {
    let mut viewport = viewport();
    viewport.set_zoom_updates_allowed(CameraMode::Following, false);
    assert!(!viewport.zoom_updates_allowed(CameraMode::Following));
    assert!(viewport.zoom_updates_allowed(CameraMode::Overview));
    assert!(viewport.zoom_updates_allowed(CameraMode::Idle));

    viewport.on_location_changed(location(0.0, 0.0, 0.0));
    viewport.evaluate();
    assert!(!viewport.following_frame().zoom_updates_allowed);
    assert!(viewport.overview_frame().zoom_updates_allowed);
}
