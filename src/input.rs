use crate::constants::{SCROLL_DECAY_BASE, TOUCH_SCROLL_AMPLIFY, WHEEL_SCROLL_SCALE};
use glam::{Vec2, Vec3};
use web_sys as web;

/// Latest pointer sample in canvas pixels plus its normalized device coordinates.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub ndc: Vec2,
    pub down: bool,
}

/// Scroll progress: `target` follows raw input, `pos` chases it every frame.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub target: f32,
    pub pos: f32,
}

impl ScrollState {
    pub fn nudge(&mut self, delta: f32) {
        self.target = (self.target + delta).clamp(0.0, 1.0);
    }

    /// Exponential approach of `pos` toward `target`.
    ///
    /// The blend factor is `1 - SCROLL_DECAY_BASE^dt`, so two half steps land
    /// exactly where one full step does.
    pub fn smooth(&mut self, dt_sec: f32) {
        let alpha = smoothing_alpha(dt_sec);
        self.pos += (self.target - self.pos) * alpha;
    }
}

#[inline]
pub fn smoothing_alpha(dt_sec: f32) -> f32 {
    1.0 - SCROLL_DECAY_BASE.powf(dt_sec.max(0.0))
}

/// Map a pixel coordinate to [-1, 1] along one axis.
#[inline]
pub fn to_ndc(coord: f32, dimension: f32) -> f32 {
    if dimension <= 0.0 {
        return 0.0;
    }
    2.0 * (coord / dimension) - 1.0
}

/// Canvas pixel position to NDC with +Y up.
#[inline]
pub fn pixel_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(to_ndc(x, width), -to_ndc(y, height))
}

/// Accumulated pointer, scroll and touch state fed by DOM events.
#[derive(Default, Clone, Debug)]
pub struct InputTracker {
    pub pointer: PointerState,
    pub scroll: ScrollState,
    touch_last_y: Option<f32>,
}

impl InputTracker {
    pub fn on_pointer_move(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.pointer.x = x;
        self.pointer.y = y;
        self.pointer.ndc = pixel_to_ndc(x, y, width, height);
    }

    pub fn on_pointer_down(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.on_pointer_move(x, y, width, height);
        self.pointer.down = true;
    }

    pub fn on_pointer_up(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.on_pointer_move(x, y, width, height);
        self.pointer.down = false;
    }

    /// Record a click and return the NDC derived from the click's own
    /// coordinates; callers pick with this value, not `self.pointer.ndc`.
    pub fn on_click(&mut self, x: f32, y: f32, width: f32, height: f32) -> Vec2 {
        self.on_pointer_move(x, y, width, height);
        pixel_to_ndc(x, y, width, height)
    }

    pub fn on_wheel(&mut self, delta_y: f32) {
        self.scroll.nudge(delta_y * WHEEL_SCROLL_SCALE);
    }

    /// Apply a touch drag; `dy` is positive when the finger moves up.
    pub fn on_touch_delta(&mut self, dy: f32) {
        self.scroll.nudge(dy * WHEEL_SCROLL_SCALE * TOUCH_SCROLL_AMPLIFY);
    }

    pub fn on_touch_start(&mut self, y: f32) {
        self.touch_last_y = Some(y);
    }

    pub fn on_touch_move(&mut self, y: f32) {
        if let Some(last) = self.touch_last_y {
            self.on_touch_delta(last - y);
        }
        self.touch_last_y = Some(y);
    }

    pub fn on_touch_end(&mut self) {
        self.touch_last_y = None;
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn client_to_canvas_px(
    client_x: f32,
    client_y: f32,
    canvas: &web::HtmlCanvasElement,
) -> (Vec2, Vec2) {
    let rect = canvas.get_bounding_client_rect();
    let x_css = client_x - rect.left() as f32;
    let y_css = client_y - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    (Vec2::new(x_css, y_css), Vec2::new(w, h))
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> (Vec2, Vec2) {
    client_to_canvas_px(ev.client_x() as f32, ev.client_y() as f32, canvas)
}
