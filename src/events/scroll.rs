use crate::core::state::SceneState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wheel and single-finger touch drags both feed scroll progress.
pub fn wire_scroll_handlers(canvas: &web::HtmlCanvasElement, state: &Rc<RefCell<SceneState>>) {
    wire_wheel(state);
    wire_touch(canvas, state);
}

fn wire_wheel(state: &Rc<RefCell<SceneState>>) {
    let state = state.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        state.borrow_mut().input.on_wheel(ev.delta_y() as f32);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[inline]
fn first_touch_y(ev: &web::TouchEvent) -> Option<f32> {
    ev.touches().get(0).map(|t| t.client_y() as f32)
}

fn wire_touch(canvas: &web::HtmlCanvasElement, state: &Rc<RefCell<SceneState>>) {
    let st = state.clone();
    let on_start = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(y) = first_touch_y(&ev) {
            st.borrow_mut().input.on_touch_start(y);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("touchstart", on_start.as_ref().unchecked_ref());
    on_start.forget();

    let st = state.clone();
    let on_move = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(y) = first_touch_y(&ev) {
            st.borrow_mut().input.on_touch_move(y);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("touchmove", on_move.as_ref().unchecked_ref());
    on_move.forget();

    let st = state.clone();
    let on_end = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        st.borrow_mut().input.on_touch_end();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("touchend", on_end.as_ref().unchecked_ref());
    _ = canvas.add_event_listener_with_callback("touchcancel", on_end.as_ref().unchecked_ref());
    on_end.forget();
}
