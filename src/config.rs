use crate::constants::{REDUCED_MOTION_SCALE, SENTINEL_MODEL_PATH};
use crate::core::quality::QualityMode;

/// Startup options resolved once from defaults, the page URL and media queries.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub quality: QualityMode,
    pub reduced_motion: bool,
    pub model_path: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            quality: QualityMode::High,
            reduced_motion: false,
            model_path: SENTINEL_MODEL_PATH.to_string(),
        }
    }
}

impl SceneConfig {
    /// Apply `?quality=low|high` and `?model=<path>` from a location search
    /// string. Unknown keys and unparsable values are ignored.
    pub fn from_query(search: &str) -> Self {
        let mut cfg = Self::default();
        cfg.apply_query(search);
        cfg
    }

    pub fn apply_query(&mut self, search: &str) {
        let search = search.strip_prefix('?').unwrap_or(search);
        for pair in search.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "quality" => {
                    if let Some(mode) = QualityMode::parse(value) {
                        self.quality = mode;
                    }
                }
                "model" if !value.is_empty() => self.model_path = value.to_string(),
                "reduced-motion" | "reduced_motion" => {
                    self.reduced_motion = !matches!(value, "0" | "false" | "off");
                }
                _ => {}
            }
        }
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion |= reduced;
        self
    }

    /// Multiplier applied to animation time.
    pub fn motion_scale(&self) -> f32 {
        if self.reduced_motion {
            REDUCED_MOTION_SCALE
        } else {
            1.0
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn from_window(window: &web_sys::Window) -> SceneConfig {
    let search = window.location().search().unwrap_or_default();
    SceneConfig::from_query(&search).with_reduced_motion(crate::dom::prefers_reduced_motion(window))
}
