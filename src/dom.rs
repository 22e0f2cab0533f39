use crate::core::quality::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

/// CSS size of the canvas plus the device pixel ratio.
pub fn viewport_of(canvas: &web::HtmlCanvasElement) -> Viewport {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    Viewport {
        css_width: (rect.width() as f32).max(1.0),
        css_height: (rect.height() as f32).max(1.0),
        device_pixel_ratio: dpr as f32,
    }
}

pub fn set_canvas_backing_size(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    if canvas.width() != width {
        canvas.set_width(width.max(1));
    }
    if canvas.height() != height {
        canvas.set_height(height.max(1));
    }
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// `data-action` of the nearest ancestor of the event target carrying one.
pub fn action_attr_of(ev: &web::Event) -> Option<String> {
    ev.target()?
        .dyn_into::<web::Element>()
        .ok()?
        .closest("[data-action]")
        .ok()??
        .get_attribute("data-action")
}
