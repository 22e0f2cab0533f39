#![cfg(target_arch = "wasm32")]
use crate::core::model::load_sentinel;
use crate::core::scene::build_scene;
use crate::core::state::SceneState;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod camera;
mod config;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, state: &Rc<RefCell<SceneState>>) {
    let canvas_resize = canvas.clone();
    let state = state.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        state.borrow_mut().resize(dom::viewport_of(&canvas_resize));
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Seed from the browser RNG; placement only has to differ between loads.
fn scene_rng() -> StdRng {
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    StdRng::seed_from_u64(seed)
}

fn spawn_sentinel_load(state: &Rc<RefCell<SceneState>>, path: String) {
    let state = state.clone();
    spawn_local(async move {
        let source = assets::HttpSource {
            timeout_ms: constants::MODEL_FETCH_TIMEOUT_MS,
        };
        let outcome = load_sentinel(&source, &path).await;
        state.borrow_mut().install_sentinel(outcome);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("atomic-core starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let cfg = config::from_window(&window);
    log::info!(
        "[config] quality={} reduced_motion={} model={}",
        cfg.quality.label(),
        cfg.reduced_motion,
        cfg.model_path
    );

    let scene = build_scene(&mut scene_rng());
    let state = Rc::new(RefCell::new(SceneState::new(
        scene,
        &cfg,
        dom::viewport_of(&canvas),
    )));
    {
        let settings = state.borrow().post_settings();
        dom::set_canvas_backing_size(&canvas, settings.width, settings.height);
    }
    document.set_title(constants::BASE_TITLE);

    // Handlers only touch SceneState, so they can run before the GPU is ready.
    wire_canvas_resize(&canvas, &state);
    events::wire_pointer_handlers(&canvas, &state);
    events::wire_scroll_handlers(&canvas, &state);
    events::wire_global_keydown(&state);
    events::wire_action_buttons(&document, &state);

    spawn_sentinel_load(&state, cfg.model_path.clone());

    let gpu = frame::init_gpu(&canvas, &state).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        document,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
