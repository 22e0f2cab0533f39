use super::scene::Sentinel;
use crate::camera::Camera;
use crate::input::ray_sphere;
use glam::{Mat4, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    /// Distance along the ray.
    pub t: f32,
    /// Index of the sentinel child that was hit.
    pub child: usize,
}

/// Cast a ray through `ndc` against the sentinel subtree only.
///
/// `ndc` must come from the event that triggered the pick.
pub fn pick_sentinel(camera: &Camera, ndc: Vec2, sentinel: &Sentinel, world: Mat4) -> Option<PickHit> {
    let (ro, rd) = camera.ray_from_ndc(ndc);
    let mut best = None::<PickHit>;
    for (child, (center, radius)) in sentinel.bounding_spheres(world).into_iter().enumerate() {
        if let Some(t) = ray_sphere(ro, rd, center, radius) {
            match best {
                Some(b) if t >= b.t => {}
                _ => best = Some(PickHit { t, child }),
            }
        }
    }
    best
}
