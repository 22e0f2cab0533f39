// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Smoothing base is the fraction of the gap left after one second
    assert!(SCROLL_DECAY_BASE > 0.0 && SCROLL_DECAY_BASE < 1.0);
    assert!(WHEEL_SCROLL_SCALE > 0.0);
    assert!(TOUCH_SCROLL_AMPLIFY >= 1.0);
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC <= 0.25);

    // Per-frame lerp must move but never overshoot
    assert!(LOOK_LERP_PER_FRAME > 0.0 && LOOK_LERP_PER_FRAME <= 1.0);

    assert!(REDUCED_MOTION_SCALE > 0.0 && REDUCED_MOTION_SCALE <= 1.0);
    assert!(REVEAL_SEC_PER_CHAR > 0.0);
    assert!(REVEAL_MAX_SEC > REVEAL_SEC_PER_CHAR);
    assert!(QUALITY_NOTICE_SEC > 0.0);
    assert!(MODEL_FETCH_TIMEOUT_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layer_thresholds_split_unit_interval_in_thirds() {
    assert!(LAYER_THRESHOLDS[0] > 0.0);
    assert!(LAYER_THRESHOLDS[0] < LAYER_THRESHOLDS[1]);
    assert!(LAYER_THRESHOLDS[1] < 1.0);
    assert!((LAYER_THRESHOLDS[0] - 1.0 / 3.0).abs() < 1e-6);
    assert!((LAYER_THRESHOLDS[1] - 2.0 / 3.0).abs() < 1e-6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn atom_layout_is_consistent() {
    assert!(FRAGMENT_RADIUS_MIN > 0.0 && FRAGMENT_RADIUS_MIN < FRAGMENT_RADIUS_MAX);
    // Electrons ride outside the nucleus
    assert!(ORBIT_RADIUS * ORBIT_ECCENTRICITY > NUCLEUS_SPREAD + FRAGMENT_RADIUS_MAX);
    assert!(ORBIT_ECCENTRICITY > 0.0 && ORBIT_ECCENTRICITY <= 1.0);
    assert!((ELECTRON_PHASE_STEP - std::f32::consts::TAU / 3.0).abs() < 1e-5);
    assert!(FRAGMENT_PULSE_AMPLITUDE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_and_holo_parameters_are_sane() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_FADE_NEAR < PARTICLE_FADE_FAR);
    assert!(PARTICLE_BOUNDS.min_element() > 0.0);
    // Opacity oscillates strictly inside (0, 1) so the panel stays translucent
    assert!(HOLO_OPACITY_BASE - HOLO_OPACITY_SPAN > 0.0);
    assert!(HOLO_OPACITY_BASE + HOLO_OPACITY_SPAN < 1.0);
}

#[test]
fn palette_is_normalized() {
    let all = [
        NUCLEUS_COLOR,
        NUCLEUS_EMISSIVE,
        RING_COLOR,
        ELECTRON_COLOR,
        SENTINEL_BODY_COLOR,
        SENTINEL_EYE_COLOR,
        SENTINEL_HALO_COLOR,
        HOLO_COLOR,
        AMBIENT_COLOR,
        CORE_LIGHT_COLOR,
    ];
    for c in all.iter().chain(PARTICLE_COLORS.iter()) {
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)), "{:?}", c);
    }
}

#[test]
fn model_path_points_at_binary_gltf() {
    assert!(SENTINEL_MODEL_PATH.ends_with(".glb"));
    assert!(!SENTINEL_MODEL_PATH.starts_with('/'));
}
