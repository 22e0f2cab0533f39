use crate::core::state::SceneState;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, state: &Rc<RefCell<SceneState>>) {
    wire_pointermove(canvas, state);
    wire_pointerdown(canvas, state);
    wire_pointerup(canvas, state);
    wire_click(canvas, state);
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, state: &Rc<RefCell<SceneState>>) {
    let canvas = canvas.clone();
    let state = state.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (pos, size) = input::pointer_canvas_px(&ev, &canvas);
        state
            .borrow_mut()
            .input
            .on_pointer_move(pos.x, pos.y, size.x, size.y);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, state: &Rc<RefCell<SceneState>>) {
    let canvas_for_listener = canvas.clone();
    let canvas = canvas.clone();
    let state = state.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (pos, size) = input::pointer_canvas_px(&ev, &canvas);
        state
            .borrow_mut()
            .input
            .on_pointer_down(pos.x, pos.y, size.x, size.y);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(canvas: &web::HtmlCanvasElement, state: &Rc<RefCell<SceneState>>) {
    let canvas = canvas.clone();
    let state = state.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (pos, size) = input::pointer_canvas_px(&ev, &canvas);
        state
            .borrow_mut()
            .input
            .on_pointer_up(pos.x, pos.y, size.x, size.y);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// Clicks and taps pick with the event's own coordinates.
fn wire_click(canvas: &web::HtmlCanvasElement, state: &Rc<RefCell<SceneState>>) {
    let canvas_for_listener = canvas.clone();
    let canvas = canvas.clone();
    let state = state.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let (pos, size) =
            input::client_to_canvas_px(ev.client_x() as f32, ev.client_y() as f32, &canvas);
        _ = state.borrow_mut().click(pos.x, pos.y, size.x, size.y);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
