// Shared palette and mesh resolution constants used by the scene builder.

// Palette (linear RGB)
pub const NUCLEUS_COLOR: [f32; 3] = [0.95, 0.55, 0.25];
pub const NUCLEUS_EMISSIVE: [f32; 3] = [1.0, 0.45, 0.15];
pub const RING_COLOR: [f32; 3] = [0.35, 0.75, 1.0];
pub const ELECTRON_COLOR: [f32; 3] = [0.6, 0.95, 1.0];
pub const SENTINEL_BODY_COLOR: [f32; 3] = [0.16, 0.18, 0.24];
pub const SENTINEL_EYE_COLOR: [f32; 3] = [0.4, 1.0, 0.85];
pub const SENTINEL_HALO_COLOR: [f32; 3] = [1.0, 0.8, 0.35];
pub const HOLO_COLOR: [f32; 3] = [0.25, 0.85, 1.0];
pub const PARTICLE_COLORS: [[f32; 3]; 3] = [
    [0.55, 0.8, 1.0],  // ice
    [1.0, 0.7, 0.4],   // ember
    [0.85, 0.6, 1.0],  // violet
];

// Lights
pub const AMBIENT_COLOR: [f32; 3] = [0.45, 0.5, 0.7];
pub const AMBIENT_INTENSITY: f32 = 0.35;
pub const CORE_LIGHT_COLOR: [f32; 3] = [1.0, 0.75, 0.5];
pub const CORE_LIGHT_INTENSITY: f32 = 2.2;
pub const CORE_LIGHT_RANGE: f32 = 12.0;

// Mesh resolution
pub const SPHERE_SEGMENTS: u32 = 24;
pub const SPHERE_RINGS: u32 = 16;
pub const TORUS_RADIAL: u32 = 12;
pub const TORUS_TUBULAR: u32 = 96;
pub const RING_TUBE_RATIO: f32 = 0.012; // ring tube radius for a unit-radius ring
pub const HALO_TUBE_RATIO: f32 = 0.08;
pub const CAPSULE_RADIUS: f32 = 0.32;
pub const CAPSULE_LENGTH: f32 = 0.7; // cylinder section between the hemispheres
