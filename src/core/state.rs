use super::actions::Action;
use super::anim::{pose_at, Pose};
use super::dialogue::Dialogue;
use super::model::SentinelOutcome;
use super::narrative::{Layer, NarrativeTracker};
use super::picking::{pick_sentinel, PickHit};
use super::quality::{PostSettings, QualityState, TitleUpdate, Viewport};
use super::scene::Scene;
use crate::camera::{Camera, CameraRig};
use crate::config::SceneConfig;
use crate::constants::MAX_FRAME_DT_SEC;
use crate::input::InputTracker;

/// Dialogue element contents to mirror into the DOM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialogueView {
    pub open: bool,
    pub text: &'static str,
}

/// Side effects of one frame; `None` fields mean "unchanged".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOutput {
    pub layer: Option<Layer>,
    pub progress: Option<String>,
    pub dialogue: Option<DialogueView>,
    pub title: Option<TitleUpdate>,
    /// Post chain has to be rebuilt with these settings before drawing.
    pub rebuild_post: Option<PostSettings>,
    /// Sentinel content changed and GPU meshes must be re-uploaded.
    pub sentinel_changed: bool,
}

/// All mutable scene state shared between DOM handlers and the frame loop.
pub struct SceneState {
    pub scene: Scene,
    pub input: InputTracker,
    pub camera: Camera,
    pub rig: CameraRig,
    pub narrative: NarrativeTracker,
    pub dialogue: Dialogue,
    pub quality: QualityState,
    pub viewport: Viewport,
    pub pose: Pose,
    /// Wall-clock seconds since start (clamped frame deltas).
    pub elapsed: f32,
    /// Animation clock; advances at `motion_scale` times wall-clock.
    pub anim_time: f32,
    pub motion_scale: f32,
    post_dirty: bool,
    sentinel_dirty: bool,
    dialogue_dirty: bool,
    pending_title: Option<TitleUpdate>,
}

impl SceneState {
    pub fn new(scene: Scene, config: &SceneConfig, viewport: Viewport) -> Self {
        let pose = Pose::at_rest(&scene);
        let mut camera = Camera::default();
        camera.set_viewport(viewport.css_width, viewport.css_height);
        Self {
            scene,
            input: InputTracker::default(),
            camera,
            rig: CameraRig::default(),
            narrative: NarrativeTracker::default(),
            dialogue: Dialogue::default(),
            quality: QualityState::new(config.quality),
            viewport,
            pose,
            elapsed: 0.0,
            anim_time: 0.0,
            motion_scale: config.motion_scale(),
            post_dirty: false,
            sentinel_dirty: false,
            dialogue_dirty: false,
            pending_title: None,
        }
    }

    /// Post chain parameters for the current preset and viewport.
    pub fn post_settings(&self) -> PostSettings {
        PostSettings::new(&self.quality.preset(), &self.viewport)
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.viewport.pixel_ratio(self.quality.preset().pixel_ratio_cap)
    }

    /// Advance one frame by `dt_sec` of wall-clock time.
    pub fn tick(&mut self, dt_sec: f32) -> FrameOutput {
        let dt = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        self.elapsed += dt;
        self.anim_time += dt * self.motion_scale;

        self.input.scroll.smooth(dt);
        let pos = self.input.scroll.pos;
        self.rig.update(&mut self.camera, pos, self.input.pointer.ndc);

        let mut out = FrameOutput {
            layer: self.narrative.update_layer(pos).map(|(_, layer)| layer),
            progress: self.narrative.update_progress(pos),
            ..FrameOutput::default()
        };

        self.pose = pose_at(&self.scene, self.anim_time);

        let revealed = self.dialogue.tick(dt).is_some();
        if revealed || std::mem::take(&mut self.dialogue_dirty) {
            out.dialogue = Some(self.dialogue_view());
        }

        let expired = self.quality.tick(dt);
        out.title = self.pending_title.take().or(expired);

        if std::mem::take(&mut self.post_dirty) {
            out.rebuild_post = Some(self.post_settings());
        }
        out.sentinel_changed = std::mem::take(&mut self.sentinel_dirty);
        out
    }

    pub fn dialogue_view(&self) -> DialogueView {
        DialogueView {
            open: self.dialogue.is_open(),
            text: self.dialogue.visible_text(),
        }
    }

    /// Pick against the sentinel with the click's own coordinates and open
    /// the dialogue on a hit.
    pub fn click(&mut self, x: f32, y: f32, width: f32, height: f32) -> Option<PickHit> {
        let ndc = self.input.on_click(x, y, width, height);
        let hit = pick_sentinel(&self.camera, ndc, &self.scene.sentinel, self.pose.sentinel);
        if let Some(h) = hit {
            log::info!("[pick] sentinel child={} t={:.2}", h.child, h.t);
            self.apply(Action::Summon);
        }
        hit
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Summon => {
                self.dialogue.open();
                self.dialogue_dirty = true;
                log::info!("[dialogue] open");
            }
            Action::Next => {
                if self.dialogue.is_open() {
                    self.dialogue.advance();
                    self.dialogue_dirty = true;
                    log::info!("[dialogue] line {}", self.dialogue.line_index());
                }
            }
            Action::Close => {
                if self.dialogue.is_open() {
                    self.dialogue.close();
                    self.dialogue_dirty = true;
                    log::info!("[dialogue] closed");
                }
            }
            Action::ToggleQuality => {
                self.pending_title = Some(self.quality.toggle());
                self.post_dirty = true;
                log::info!("[quality] {}", self.quality.mode().label());
            }
        }
    }

    /// Track a new viewport. Repeating the same viewport is harmless.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.set_viewport(viewport.css_width, viewport.css_height);
        self.post_dirty = true;
    }

    /// Swap the sentinel's children for the asset-load outcome in one step.
    pub fn install_sentinel(&mut self, outcome: SentinelOutcome) {
        self.scene.sentinel.install(outcome);
        self.sentinel_dirty = true;
    }
}
