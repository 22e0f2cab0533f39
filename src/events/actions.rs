use crate::core::actions::Action;
use crate::core::state::SceneState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One delegated listener serves every `[data-action]` button on the page.
pub fn wire_action_buttons(document: &web::Document, state: &Rc<RefCell<SceneState>>) {
    let state = state.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(attr) = dom::action_attr_of(&ev) else {
            return;
        };
        match Action::from_attr(&attr) {
            Some(action) => {
                state.borrow_mut().apply(action);
                ev.prevent_default();
            }
            None => log::warn!("[ui] unknown data-action {:?}", attr),
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
