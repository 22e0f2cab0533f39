use super::scene::Scene;
use crate::constants::*;
use glam::{Mat4, Quat, Vec3};

/// Animated state of every time-driven transform at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct Pose {
    pub core_rotation: Quat,
    pub fragment_scales: Vec<f32>,
    pub electrons: [Vec3; 3],
    /// World transform of the sentinel group.
    pub sentinel: Mat4,
    pub holo_opacity: f32,
}

impl Pose {
    pub fn at_rest(scene: &Scene) -> Self {
        pose_at(scene, 0.0)
    }
}

/// Linear spin about Y plus a sinusoidal wobble about X.
#[inline]
pub fn core_rotation(t: f32) -> Quat {
    let wobble = (t * CORE_WOBBLE_RATE).sin() * CORE_WOBBLE_AMPLITUDE;
    Quat::from_rotation_y(t * CORE_SPIN_RATE) * Quat::from_rotation_x(wobble)
}

#[inline]
pub fn fragment_scale(t: f32, phase: f32) -> f32 {
    1.0 + FRAGMENT_PULSE_AMPLITUDE * (t * FRAGMENT_PULSE_RATE + phase).sin()
}

#[inline]
pub fn sentinel_bob(t: f32) -> f32 {
    (t * SENTINEL_BOB_RATE).sin() * SENTINEL_BOB_AMPLITUDE
}

#[inline]
pub fn sentinel_yaw(t: f32) -> f32 {
    t * SENTINEL_YAW_RATE
}

#[inline]
pub fn holo_opacity(t: f32) -> f32 {
    HOLO_OPACITY_BASE + HOLO_OPACITY_SPAN * (t * HOLO_OPACITY_RATE).sin()
}

pub fn sentinel_transform(position: Vec3, t: f32) -> Mat4 {
    Mat4::from_rotation_translation(
        Quat::from_rotation_y(sentinel_yaw(t)),
        position + Vec3::Y * sentinel_bob(t),
    )
}

/// Evaluate all animated transforms at animation time `t` (seconds).
pub fn pose_at(scene: &Scene, t: f32) -> Pose {
    let atom = &scene.atom;
    Pose {
        core_rotation: core_rotation(t),
        fragment_scales: atom
            .fragments
            .iter()
            .map(|f| fragment_scale(t, f.phase))
            .collect(),
        electrons: [
            atom.electrons[0].position_at(t),
            atom.electrons[1].position_at(t),
            atom.electrons[2].position_at(t),
        ],
        sentinel: sentinel_transform(scene.sentinel.position, t),
        holo_opacity: holo_opacity(t),
    }
}
