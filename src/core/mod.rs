pub mod actions;
pub mod anim;
pub mod constants;
pub mod dialogue;
pub mod geometry;
pub mod model;
pub mod narrative;
pub mod picking;
pub mod quality;
pub mod scene;
pub mod state;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
