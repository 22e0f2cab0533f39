use crate::core::model::{AssetError, ModelSource};
use gloo_net::http::Request;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fetches model bytes over HTTP, aborting after `timeout_ms`.
pub struct HttpSource {
    pub timeout_ms: i32,
}

impl ModelSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        let controller =
            web::AbortController::new().map_err(|e| AssetError::Fetch(format!("{:?}", e)))?;
        let signal = controller.signal();
        let abort = controller.clone();
        let on_timeout = Closure::once(move || abort.abort());
        let timer = web::window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                on_timeout.as_ref().unchecked_ref(),
                self.timeout_ms,
            )
            .ok()
        });

        let result = async {
            let resp = Request::get(path)
                .abort_signal(Some(&signal))
                .send()
                .await
                .map_err(|e| AssetError::Fetch(e.to_string()))?;
            if !resp.ok() {
                return Err(AssetError::Status(resp.status()));
            }
            resp.binary()
                .await
                .map_err(|e| AssetError::Fetch(e.to_string()))
        }
        .await;

        if let (Some(w), Some(handle)) = (web::window(), timer) {
            w.clear_timeout_with_handle(handle);
        }
        match result {
            Err(AssetError::Fetch(_)) if signal.aborted() => Err(AssetError::Timeout),
            other => other,
        }
    }
}
