use crate::constants::BASE_TITLE;
use crate::core::quality::TitleUpdate;
use crate::core::state::{DialogueView, FrameOutput};
use web_sys as web;

#[inline]
fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Mirror one frame's UI changes into the page.
pub fn apply(document: &web::Document, out: &FrameOutput) {
    if let Some(layer) = &out.layer {
        set_text(document, "narrative-title", layer.title);
        set_text(document, "narrative-body", layer.body);
    }
    if let Some(width) = &out.progress {
        set_progress(document, width);
    }
    if let Some(view) = &out.dialogue {
        set_dialogue(document, view);
    }
    match &out.title {
        Some(TitleUpdate::Notice(title)) => document.set_title(title),
        Some(TitleUpdate::Restore) => document.set_title(BASE_TITLE),
        None => {}
    }
}

pub fn set_progress(document: &web::Document, width: &str) {
    if let Some(el) = document
        .get_element_by_id("progress-bar")
        .and_then(|el| wasm_bindgen::JsCast::dyn_into::<web::HtmlElement>(el).ok())
    {
        _ = el.style().set_property("width", width);
    }
}

pub fn set_dialogue(document: &web::Document, view: &DialogueView) {
    if let Some(el) = document.get_element_by_id("dialogue") {
        _ = el.set_attribute("data-open", if view.open { "true" } else { "false" });
        let cl = el.class_list();
        // fallback for stylesheets keyed on a class
        _ = if view.open {
            cl.add_1("open")
        } else {
            cl.remove_1("open")
        };
    }
    set_text(document, "dialogue-text", view.text);
}
