use crate::constants::{BASE_TITLE, QUALITY_NOTICE_SEC};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QualityMode {
    #[default]
    High,
    Low,
}

impl QualityMode {
    pub fn toggled(self) -> Self {
        match self {
            QualityMode::High => QualityMode::Low,
            QualityMode::Low => QualityMode::High,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QualityMode::High => "HIGH",
            QualityMode::Low => "LOW",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" | "hi" => Some(QualityMode::High),
            "low" | "lo" => Some(QualityMode::Low),
            _ => None,
        }
    }

    pub fn preset(self) -> QualityPreset {
        match self {
            QualityMode::High => QualityPreset {
                pixel_ratio_cap: 2.0,
                bloom_strength: 1.1,
                bloom_radius: 0.6,
                bloom_threshold: 0.55,
            },
            QualityMode::Low => QualityPreset {
                pixel_ratio_cap: 1.0,
                bloom_strength: 0.7,
                bloom_radius: 0.35,
                bloom_threshold: 0.7,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QualityPreset {
    pub pixel_ratio_cap: f32,
    pub bloom_strength: f32,
    pub bloom_radius: f32,
    pub bloom_threshold: f32,
}

/// CSS viewport plus the device pixel ratio reported by the browser.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f32,
    pub css_height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub fn pixel_ratio(&self, cap: f32) -> f32 {
        let dpr = if self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        };
        dpr.min(cap)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BloomParams {
    pub strength: f32,
    pub radius: f32,
    pub threshold: f32,
}

/// Everything the post chain is built from: target size and bloom params.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PostSettings {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
    pub bloom: BloomParams,
}

impl PostSettings {
    pub fn new(preset: &QualityPreset, viewport: &Viewport) -> Self {
        let pixel_ratio = viewport.pixel_ratio(preset.pixel_ratio_cap);
        Self {
            width: ((viewport.css_width * pixel_ratio).round() as u32).max(1),
            height: ((viewport.css_height * pixel_ratio).round() as u32).max(1),
            pixel_ratio,
            bloom: BloomParams {
                strength: preset.bloom_strength,
                radius: preset.bloom_radius,
                threshold: preset.bloom_threshold,
            },
        }
    }

    /// Bloom targets run at half resolution.
    pub fn bloom_size(&self) -> (u32, u32) {
        ((self.width / 2).max(1), (self.height / 2).max(1))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TitleUpdate {
    Notice(String),
    Restore,
}

/// Active quality mode plus the transient document-title notice.
#[derive(Clone, Debug, Default)]
pub struct QualityState {
    mode: QualityMode,
    notice_left: Option<f32>,
}

impl QualityState {
    pub fn new(mode: QualityMode) -> Self {
        Self {
            mode,
            notice_left: None,
        }
    }

    pub fn mode(&self) -> QualityMode {
        self.mode
    }

    pub fn preset(&self) -> QualityPreset {
        self.mode.preset()
    }

    pub fn notice_active(&self) -> bool {
        self.notice_left.is_some()
    }

    /// Swap presets and (re)start the notice countdown.
    pub fn toggle(&mut self) -> TitleUpdate {
        self.mode = self.mode.toggled();
        self.notice_left = Some(QUALITY_NOTICE_SEC);
        TitleUpdate::Notice(notice_title(self.mode))
    }

    /// Count the notice down by frame deltas; yields `Restore` once it expires.
    pub fn tick(&mut self, dt: f32) -> Option<TitleUpdate> {
        let left = self.notice_left.as_mut()?;
        *left -= dt.max(0.0);
        if *left <= 0.0 {
            self.notice_left = None;
            return Some(TitleUpdate::Restore);
        }
        None
    }
}

pub fn notice_title(mode: QualityMode) -> String {
    format!("Quality: {} · {}", mode.label(), BASE_TITLE)
}
