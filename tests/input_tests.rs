// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use constants::*;
use input::*;

#[test]
fn ray_sphere_intersection_basic() {
    // Ray from origin pointing in +Z direction
    let ray_origin = glam::Vec3::ZERO;
    let ray_dir = glam::Vec3::new(0.0, 0.0, 1.0);

    // Sphere at (0, 0, 5) with radius 2
    let center = glam::Vec3::new(0.0, 0.0, 5.0);
    let radius = 2.0;

    let result = ray_sphere(ray_origin, ray_dir, center, radius);
    assert!(result.is_some());

    let t = result.unwrap();
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_intersection_miss() {
    // Ray goes along X, sphere sits on Z
    let result = ray_sphere(
        glam::Vec3::ZERO,
        glam::Vec3::X,
        glam::Vec3::new(0.0, 0.0, 5.0),
        2.0,
    );
    assert!(result.is_none());
}

#[test]
fn ray_sphere_intersection_tangent() {
    // Ray grazes the edge of the sphere
    let result = ray_sphere(
        glam::Vec3::ZERO,
        glam::Vec3::Z,
        glam::Vec3::new(2.0, 0.0, 5.0),
        2.0,
    );
    let t = result.expect("tangent ray should touch");
    assert!((t - 5.0).abs() < 1e-3);
}

#[test]
fn ray_sphere_behind_origin_is_ignored() {
    let result = ray_sphere(
        glam::Vec3::ZERO,
        glam::Vec3::Z,
        glam::Vec3::new(0.0, 0.0, -5.0),
        1.0,
    );
    assert!(result.is_none());
}

#[test]
fn ray_sphere_from_inside_is_not_a_hit() {
    // Near intersection lies behind the origin
    let result = ray_sphere(
        glam::Vec3::new(0.0, 0.0, 5.0),
        glam::Vec3::X,
        glam::Vec3::new(0.0, 0.0, 5.0),
        3.0,
    );
    assert!(result.is_none());
}

#[test]
fn pixel_to_ndc_maps_corners_and_flips_y() {
    let tl = pixel_to_ndc(0.0, 0.0, 800.0, 600.0);
    let br = pixel_to_ndc(800.0, 600.0, 800.0, 600.0);
    let mid = pixel_to_ndc(400.0, 300.0, 800.0, 600.0);
    assert_eq!(tl, glam::Vec2::new(-1.0, 1.0));
    assert_eq!(br, glam::Vec2::new(1.0, -1.0));
    assert_eq!(mid, glam::Vec2::ZERO);
}

#[test]
fn to_ndc_with_zero_dimension_is_centered() {
    assert_eq!(to_ndc(123.0, 0.0), 0.0);
    assert_eq!(to_ndc(5.0, -10.0), 0.0);
}

#[test]
fn wheel_accumulates_and_clamps_target() {
    let mut input = InputTracker::default();
    input.on_wheel(100.0);
    assert!((input.scroll.target - 100.0 * WHEEL_SCROLL_SCALE).abs() < 1e-6);
    // pos only moves when smoothed
    assert_eq!(input.scroll.pos, 0.0);

    input.on_wheel(1.0e6);
    assert_eq!(input.scroll.target, 1.0);
    input.on_wheel(-1.0e7);
    assert_eq!(input.scroll.target, 0.0);
}

#[test]
fn touch_drag_up_scrolls_forward_amplified() {
    let mut input = InputTracker::default();
    input.on_touch_start(500.0);
    input.on_touch_move(400.0); // finger moved up by 100px
    let expected = 100.0 * WHEEL_SCROLL_SCALE * TOUCH_SCROLL_AMPLIFY;
    assert!((input.scroll.target - expected).abs() < 1e-6);

    // Moving back down reverses it
    input.on_touch_move(500.0);
    assert!(input.scroll.target.abs() < 1e-6);
}

#[test]
fn touch_move_without_start_only_records_position() {
    let mut input = InputTracker::default();
    input.on_touch_move(300.0);
    assert_eq!(input.scroll.target, 0.0);
    input.on_touch_move(200.0);
    assert!(input.scroll.target > 0.0);

    input.on_touch_end();
    let before = input.scroll.target;
    input.on_touch_move(0.0);
    assert_eq!(input.scroll.target, before);
}

#[test]
fn smoothing_is_frame_rate_independent() {
    let mut one = ScrollState {
        target: 1.0,
        pos: 0.0,
    };
    let mut two = one;
    one.smooth(0.1);
    two.smooth(0.05);
    two.smooth(0.05);
    assert!((one.pos - two.pos).abs() < 1e-5, "{} vs {}", one.pos, two.pos);
}

#[test]
fn smoothing_converges_without_overshoot() {
    let mut s = ScrollState {
        target: 0.75,
        pos: 0.0,
    };
    let mut last = s.pos;
    for _ in 0..240 {
        s.smooth(1.0 / 60.0);
        assert!(s.pos >= last && s.pos <= s.target);
        last = s.pos;
    }
    assert!((s.pos - 0.75).abs() < 1e-3);
}

#[test]
fn smoothing_alpha_bounds() {
    assert_eq!(smoothing_alpha(0.0), 0.0);
    assert_eq!(smoothing_alpha(-1.0), 0.0);
    let a = smoothing_alpha(1.0);
    assert!((a - (1.0 - SCROLL_DECAY_BASE)).abs() < 1e-6);
}

#[test]
fn click_returns_ndc_of_its_own_coordinates() {
    let mut input = InputTracker::default();
    input.on_pointer_move(10.0, 10.0, 100.0, 100.0);
    let ndc = input.on_click(75.0, 25.0, 100.0, 100.0);
    assert_eq!(ndc, glam::Vec2::new(0.5, 0.5));
    assert_eq!(input.pointer.ndc, ndc);
}

#[test]
fn pointer_down_and_up_track_button_state() {
    let mut input = InputTracker::default();
    input.on_pointer_down(1.0, 2.0, 10.0, 10.0);
    assert!(input.pointer.down);
    assert_eq!((input.pointer.x, input.pointer.y), (1.0, 2.0));
    input.on_pointer_up(3.0, 4.0, 10.0, 10.0);
    assert!(!input.pointer.down);
    assert_eq!((input.pointer.x, input.pointer.y), (3.0, 4.0));
}
