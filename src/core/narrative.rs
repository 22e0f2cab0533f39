use crate::constants::LAYER_THRESHOLDS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layer {
    pub title: &'static str,
    pub body: &'static str,
}

pub const LAYERS: [Layer; 3] = [
    Layer {
        title: "The Core",
        body: "A dense heart of fragments, held together by rules older than light.",
    },
    Layer {
        title: "The Orbits",
        body: "Three electrons trace their shells. Each path is exact and never repeats in step.",
    },
    Layer {
        title: "The Sentinel",
        body: "Something watches the core. Click it to listen.",
    },
];

/// Discrete narrative layer for a scroll position.
#[inline]
pub fn layer_for(pos: f32) -> usize {
    if pos < LAYER_THRESHOLDS[0] {
        0
    } else if pos < LAYER_THRESHOLDS[1] {
        1
    } else {
        2
    }
}

/// Width string for the progress bar, e.g. `"42.0%"`.
#[inline]
pub fn progress_width(pos: f32) -> String {
    format!("{:.1}%", (pos.clamp(0.0, 1.0) * 100.0))
}

/// Remembers what is on screen so DOM writes only happen on change.
#[derive(Clone, Debug, Default)]
pub struct NarrativeTracker {
    layer: Option<usize>,
    progress: Option<String>,
}

impl NarrativeTracker {
    pub fn current(&self) -> Option<usize> {
        self.layer
    }

    /// Returns the layer to display when it differs from the last one shown.
    pub fn update_layer(&mut self, pos: f32) -> Option<(usize, Layer)> {
        let layer = layer_for(pos);
        if self.layer == Some(layer) {
            return None;
        }
        self.layer = Some(layer);
        Some((layer, LAYERS[layer]))
    }

    pub fn update_progress(&mut self, pos: f32) -> Option<String> {
        let width = progress_width(pos);
        if self.progress.as_deref() == Some(width.as_str()) {
            return None;
        }
        self.progress = Some(width.clone());
        Some(width)
    }
}
