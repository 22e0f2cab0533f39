use crate::constants::{
    CAMERA_BASE, CAMERA_FOVY_DEG, CAMERA_TRAVEL, CAMERA_ZFAR, CAMERA_ZNEAR, CORE_POSITION,
    LOOK_LERP_PER_FRAME, LOOK_POINTER_RANGE, LOOK_SCROLL_DEPTH,
};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: CAMERA_BASE,
            target: CORE_POSITION,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Set the aspect ratio from a viewport size; zero heights are ignored.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Compute a world-space ray through normalized device coordinates.
    ///
    /// Returns `(ray_origin, ray_direction)` with a unit direction.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.eye;
        let rd = (p1 - ro).normalize();
        (ro, rd)
    }
}

/// Scroll- and pointer-driven camera placement.
///
/// The eye is a pure function of scroll progress; the look target eases
/// toward its goal by a fixed fraction per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    pub look: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            look: CORE_POSITION,
        }
    }
}

impl CameraRig {
    #[inline]
    pub fn eye_for(scroll_pos: f32) -> Vec3 {
        CAMERA_BASE + CAMERA_TRAVEL * scroll_pos
    }

    #[inline]
    pub fn look_goal(scroll_pos: f32, pointer_ndc: Vec2) -> Vec3 {
        CORE_POSITION
            + Vec3::new(
                pointer_ndc.x * LOOK_POINTER_RANGE,
                pointer_ndc.y * LOOK_POINTER_RANGE * 0.5,
                LOOK_SCROLL_DEPTH * scroll_pos,
            )
    }

    pub fn update(&mut self, camera: &mut Camera, scroll_pos: f32, pointer_ndc: Vec2) {
        camera.eye = Self::eye_for(scroll_pos);
        let goal = Self::look_goal(scroll_pos, pointer_ndc);
        self.look = self.look.lerp(goal, LOOK_LERP_PER_FRAME);
        camera.target = self.look;
    }
}
