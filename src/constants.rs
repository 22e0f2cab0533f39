use glam::Vec3;

/// Scene layout, smoothing and interaction tuning constants.
///
/// These constants express intended behavior (time constants, clamp limits,
/// amplitudes) and keep magic numbers out of the update code.
// Scroll input
pub const WHEEL_SCROLL_SCALE: f32 = 0.0008; // progress per wheel delta unit
pub const TOUCH_SCROLL_AMPLIFY: f32 = 2.5; // touch travel vs wheel travel
// Remaining fraction of the scroll gap after one second; alpha = 1 - base^dt
pub const SCROLL_DECAY_BASE: f32 = 0.004;

// Frame clock
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches

// Camera rig
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;
pub const CAMERA_BASE: Vec3 = Vec3::new(0.0, 0.6, 9.0);
pub const CAMERA_TRAVEL: Vec3 = Vec3::new(1.8, -0.4, -5.5); // added at scroll pos 1.0
pub const LOOK_POINTER_RANGE: f32 = 0.8; // world units of look offset at NDC edge
pub const LOOK_SCROLL_DEPTH: f32 = -2.5; // look target z shift at scroll pos 1.0
pub const LOOK_LERP_PER_FRAME: f32 = 0.06;

// Narrative
pub const LAYER_THRESHOLDS: [f32; 2] = [1.0 / 3.0, 2.0 / 3.0];

// Atomic core
pub const CORE_POSITION: Vec3 = Vec3::new(0.0, 0.0, 0.0);
pub const NUCLEUS_FRAGMENTS: usize = 14;
pub const NUCLEUS_SPREAD: f32 = 0.45; // half-extent of fragment offsets
pub const FRAGMENT_RADIUS_MIN: f32 = 0.12;
pub const FRAGMENT_RADIUS_MAX: f32 = 0.24;
pub const FRAGMENT_PULSE_AMPLITUDE: f32 = 0.12;
pub const FRAGMENT_PULSE_RATE: f32 = 2.4; // rad/sec
pub const CORE_SPIN_RATE: f32 = 0.25; // rad/sec about Y
pub const CORE_WOBBLE_AMPLITUDE: f32 = 0.12; // rad about X
pub const CORE_WOBBLE_RATE: f32 = 0.7; // rad/sec
pub const ORBIT_RADIUS: f32 = 1.6;
pub const ORBIT_ECCENTRICITY: f32 = 0.82; // minor/major ratio of ring ellipses
pub const ELECTRON_RADIUS: f32 = 0.07;
pub const ELECTRON_SPEED: f32 = 1.3; // rad/sec
pub const ELECTRON_PHASE_STEP: f32 = 2.094_395; // 2π/3 between electrons

// Particle field
pub const PARTICLE_COUNT: usize = 2400;
pub const PARTICLE_BOUNDS: Vec3 = Vec3::new(14.0, 8.0, 14.0); // half-extents
pub const PARTICLE_SIZE_PX: f32 = 3.0;
pub const PARTICLE_DRIFT: f32 = 0.35;
pub const PARTICLE_PARALLAX: f32 = 0.6;
pub const PARTICLE_FADE_NEAR: f32 = 2.0;
pub const PARTICLE_FADE_FAR: f32 = 22.0;

// Sentinel
pub const SENTINEL_POSITION: Vec3 = Vec3::new(2.6, -0.4, 1.2);
pub const SENTINEL_BOB_AMPLITUDE: f32 = 0.12;
pub const SENTINEL_BOB_RATE: f32 = 1.6; // rad/sec
pub const SENTINEL_YAW_RATE: f32 = 0.3; // rad/sec
pub const SENTINEL_MODEL_HEIGHT: f32 = 1.6; // loaded models are scaled to this height
pub const SENTINEL_MODEL_PATH: &str = "assets/sentinel.glb";
pub const MODEL_FETCH_TIMEOUT_MS: i32 = 8000;
pub const DEFAULT_EMISSIVE_INTENSITY: f32 = 0.6;

// Holo panel
pub const HOLO_POSITION: Vec3 = Vec3::new(-2.8, 0.6, 0.5);
pub const HOLO_SIZE: [f32; 2] = [1.8, 1.1];
pub const HOLO_OPACITY_BASE: f32 = 0.35;
pub const HOLO_OPACITY_SPAN: f32 = 0.15;
pub const HOLO_OPACITY_RATE: f32 = 2.2; // rad/sec

// Reduced motion scales every animation amplitude and rate
pub const REDUCED_MOTION_SCALE: f32 = 0.3;

// Dialogue reveal
pub const REVEAL_SEC_PER_CHAR: f32 = 0.028;
pub const REVEAL_MAX_SEC: f32 = 1.6;

// Quality indicator
pub const QUALITY_NOTICE_SEC: f32 = 1.5;
pub const BASE_TITLE: &str = "Atomic Core";
