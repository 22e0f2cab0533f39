use crate::core::actions::{action_for_key, Action};
use crate::core::state::SceneState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, state: &Rc<RefCell<SceneState>>) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    let open = state.borrow().dialogue.is_open();
    let Some(action) = action_for_key(&key, open) else {
        return;
    };
    log::info!("[keys] {} -> {:?}", key, action);
    state.borrow_mut().apply(action);
    if matches!(action, Action::Next) {
        // keep Space from scrolling the page and Enter from activating focus
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(state: &Rc<RefCell<SceneState>>) {
    if let Some(window) = web::window() {
        let state = state.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &state);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
