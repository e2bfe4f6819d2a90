use approx::assert_relative_eq;
use plotview_rs::core::{PointerSample, Surface, to_logical};

fn geometry_800x800() -> plotview_rs::core::SurfaceGeometry {
    let mut surface = Surface::new("canvas", 400.0, 400.0).expect("valid surface");
    surface.resize(1000.0, Some(2.0));
    surface.geometry()
}

#[test]
fn identity_when_bounding_matches_buffer() {
    let geometry = geometry_800x800();
    let sample = PointerSample::on_surface(400.0, 400.0, 800.0, 800.0);

    let logical = to_logical(sample, geometry);

    assert_relative_eq!(logical.x, 400.0);
    assert_relative_eq!(logical.y, 400.0);
}

#[test]
fn corrects_display_vs_buffer_mismatch() {
    let geometry = geometry_800x800();
    // Layout squeezed the element to half the buffer size.
    let sample = PointerSample::on_surface(100.0, 250.0, 400.0, 400.0);

    let logical = sample.to_logical(geometry);

    assert_relative_eq!(logical.x, 200.0);
    assert_relative_eq!(logical.y, 500.0);
}

#[test]
fn axes_rescale_independently() {
    let mut surface = Surface::new("canvas", 600.0, 400.0).expect("valid surface");
    surface.resize(1000.0, None);
    let geometry = surface.geometry();

    let sample = PointerSample::on_surface(120.0, 60.0, 400.0, 100.0);
    let logical = to_logical(sample, geometry);

    assert_relative_eq!(logical.x, 120.0 * geometry.physical_width / 400.0);
    assert_relative_eq!(logical.y, 60.0 * geometry.physical_height / 100.0);
}

#[test]
fn scaling_bounding_rect_scales_logical_inversely() {
    let geometry = geometry_800x800();
    let base = PointerSample::on_surface(320.0, 160.0, 800.0, 800.0);

    for k in [0.25, 0.5, 2.0, 3.5] {
        let scaled = PointerSample::on_surface(320.0, 160.0, 800.0 * k, 800.0 * k);
        let expected = to_logical(base, geometry);
        let actual = to_logical(scaled, geometry);
        assert_relative_eq!(actual.x, expected.x / k, max_relative = 1e-12);
        assert_relative_eq!(actual.y, expected.y / k, max_relative = 1e-12);
    }
}

#[test]
fn mapping_follows_bounding_rect_changes_between_events() {
    // Same offsets, new layout: the result must track the rect at query
    // time, which is why the mapper never caches.
    let geometry = geometry_800x800();

    let before = to_logical(PointerSample::on_surface(200.0, 200.0, 800.0, 800.0), geometry);
    let after = to_logical(PointerSample::on_surface(200.0, 200.0, 640.0, 640.0), geometry);

    assert_relative_eq!(before.x, 200.0);
    assert_relative_eq!(after.x, 250.0);
}

#[test]
fn off_surface_sample_is_flagged() {
    let sample = PointerSample::off_surface();
    assert!(!sample.over_surface);
}
