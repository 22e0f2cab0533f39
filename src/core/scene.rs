use super::anim::Pose;
use super::constants::*;
use super::geometry::{self, MeshData};
use super::model::{LoadedModel, SentinelOutcome};
use crate::constants::*;
use glam::{Mat4, Quat, Vec2, Vec3};
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Mesh identity used to look up GPU buffers; built-in shapes are unit sized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Sphere,
    Fragment,
    Ring,
    Halo,
    Capsule,
    Panel,
    /// Index into the loaded sentinel model's meshes.
    Model(usize),
}

impl MeshKind {
    pub const BUILTIN: [MeshKind; 6] = [
        MeshKind::Sphere,
        MeshKind::Fragment,
        MeshKind::Ring,
        MeshKind::Halo,
        MeshKind::Capsule,
        MeshKind::Panel,
    ];

    /// Generate CPU geometry for a built-in mesh; model meshes come from the loader.
    pub fn builtin_mesh(self) -> Option<MeshData> {
        let mesh = match self {
            MeshKind::Sphere => geometry::uv_sphere(1.0, SPHERE_SEGMENTS, SPHERE_RINGS),
            MeshKind::Fragment => geometry::octahedron(1.0),
            MeshKind::Ring => geometry::torus(1.0, RING_TUBE_RATIO, TORUS_RADIAL / 2, TORUS_TUBULAR),
            MeshKind::Halo => geometry::torus(1.0, HALO_TUBE_RATIO, TORUS_RADIAL, TORUS_TUBULAR / 2),
            MeshKind::Capsule => {
                geometry::capsule(CAPSULE_RADIUS, CAPSULE_LENGTH, SPHERE_SEGMENTS, SPHERE_RINGS)
            }
            MeshKind::Panel => geometry::quad(1.0, 1.0),
            MeshKind::Model(_) => return None,
        };
        Some(mesh)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub emissive: [f32; 3],
    /// `None` until a default is applied; loaded models may leave it unset.
    pub emissive_intensity: Option<f32>,
    pub opacity: f32,
}

impl Material {
    pub const fn lit(color: [f32; 3]) -> Self {
        Self {
            color,
            emissive: [0.0; 3],
            emissive_intensity: Some(0.0),
            opacity: 1.0,
        }
    }

    pub const fn glowing(color: [f32; 3], emissive: [f32; 3], intensity: f32) -> Self {
        Self {
            color,
            emissive,
            emissive_intensity: Some(intensity),
            opacity: 1.0,
        }
    }

    fn packed(&self, opacity: f32) -> ([f32; 4], [f32; 4]) {
        let c = self.color;
        let e = self.emissive;
        (
            [c[0], c[1], c[2], opacity],
            [e[0], e[1], e[2], self.emissive_intensity.unwrap_or(0.0)],
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub offset: Vec3,
    pub radius: f32,
    pub phase: f32,
}

/// Elliptical ring: unit torus tilted by `tilt` and stretched to `radii` (x, z).
#[derive(Clone, Debug, PartialEq)]
pub struct Orbit {
    pub tilt: Quat,
    pub radii: Vec2,
}

/// Electron riding an orbit. Its rotation axis is the orbit normal `tilt * Y`.
#[derive(Clone, Debug, PartialEq)]
pub struct Electron {
    pub tilt: Quat,
    pub radii: Vec2,
    pub speed: f32,
    pub phase: f32,
}

impl Electron {
    /// Position relative to the core at animation time `t`; no stored velocity.
    pub fn position_at(&self, t: f32) -> Vec3 {
        let angle = t * self.speed + self.phase;
        let p = Quat::from_axis_angle(Vec3::Y, angle) * Vec3::X;
        self.tilt * Vec3::new(p.x * self.radii.x, 0.0, p.z * self.radii.y)
    }

    pub fn axis(&self) -> Vec3 {
        self.tilt * Vec3::Y
    }
}

#[derive(Clone, Debug)]
pub struct Atom {
    pub position: Vec3,
    pub fragments: Vec<Fragment>,
    pub orbits: [Orbit; 3],
    pub electrons: [Electron; 3],
}

/// One GPU point: position, color and a per-point random seed.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticlePoint {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub seed: f32,
}

#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    pub points: Vec<ParticlePoint>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartKind {
    Body,
    Eye,
    Halo,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaceholderPart {
    pub kind: PartKind,
    pub mesh: MeshKind,
    pub offset: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub material: Material,
    /// Radius of a sphere around `offset` enclosing the part, for picking.
    pub bound_radius: f32,
}

impl PlaceholderPart {
    fn local(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.offset)
    }
}

pub type PlaceholderParts = SmallVec<[PlaceholderPart; 4]>;

/// What currently occupies the sentinel group. The two variants are exclusive.
#[derive(Clone, Debug)]
pub enum SentinelContent {
    Placeholder(PlaceholderParts),
    Model(LoadedModel),
}

#[derive(Clone, Debug)]
pub struct Sentinel {
    pub position: Vec3,
    pub content: SentinelContent,
}

impl Sentinel {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            content: SentinelContent::Placeholder(placeholder_parts()),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.content, SentinelContent::Placeholder(_))
    }

    /// Number of direct children in the sentinel group.
    pub fn child_count(&self) -> usize {
        match &self.content {
            SentinelContent::Placeholder(parts) => parts.len(),
            SentinelContent::Model(model) => model.meshes.len(),
        }
    }

    /// Replace the group's children in a single step.
    pub fn install(&mut self, outcome: SentinelOutcome) {
        self.content = match outcome {
            SentinelOutcome::Loaded(model) => SentinelContent::Model(model),
            SentinelOutcome::Placeholder => SentinelContent::Placeholder(placeholder_parts()),
        };
    }

    /// World-space bounding spheres of the group's children under `world`.
    pub fn bounding_spheres(&self, world: Mat4) -> SmallVec<[(Vec3, f32); 4]> {
        let scale = world.to_scale_rotation_translation().0.max_element();
        match &self.content {
            SentinelContent::Placeholder(parts) => parts
                .iter()
                .map(|p| (world.transform_point3(p.offset), p.bound_radius * scale))
                .collect(),
            SentinelContent::Model(model) => {
                let (center, radius) = model.bounding_sphere();
                let mut out = SmallVec::new();
                out.push((world.transform_point3(center), radius * scale));
                out
            }
        }
    }
}

/// Procedural stand-in: capsule body, two eyes and a halo.
pub fn placeholder_parts() -> PlaceholderParts {
    let body_extent = CAPSULE_RADIUS + CAPSULE_LENGTH * 0.5;
    let eye = |x: f32| PlaceholderPart {
        kind: PartKind::Eye,
        mesh: MeshKind::Sphere,
        offset: Vec3::new(x, 0.32, CAPSULE_RADIUS * 0.85),
        rotation: Quat::IDENTITY,
        scale: Vec3::splat(0.06),
        material: Material::glowing(SENTINEL_EYE_COLOR, SENTINEL_EYE_COLOR, 2.5),
        bound_radius: 0.06,
    };
    let mut parts = PlaceholderParts::new();
    parts.push(PlaceholderPart {
        kind: PartKind::Body,
        mesh: MeshKind::Capsule,
        offset: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
        material: Material::lit(SENTINEL_BODY_COLOR),
        bound_radius: body_extent,
    });
    parts.push(eye(-0.12));
    parts.push(eye(0.12));
    parts.push(PlaceholderPart {
        kind: PartKind::Halo,
        mesh: MeshKind::Halo,
        offset: Vec3::new(0.0, body_extent + 0.22, 0.0),
        rotation: Quat::from_rotation_x(0.25),
        scale: Vec3::splat(0.3),
        material: Material::glowing(SENTINEL_HALO_COLOR, SENTINEL_HALO_COLOR, 1.8),
        bound_radius: 0.3 * (1.0 + HALO_TUBE_RATIO),
    });
    parts
}

#[derive(Clone, Debug, PartialEq)]
pub struct HoloPanel {
    pub position: Vec3,
    pub size: [f32; 2],
    pub material: Material,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    pub range: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub key: PointLight,
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub atom: Atom,
    pub particles: ParticleField,
    pub sentinel: Sentinel,
    pub holo: HoloPanel,
    pub lights: Lighting,
}

/// One instanced draw: mesh plus world matrix and packed material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawItem {
    pub mesh: MeshKind,
    pub model: Mat4,
    pub color: [f32; 4],
    pub emissive: [f32; 4],
}

impl DrawItem {
    pub fn is_translucent(&self) -> bool {
        self.color[3] < 1.0
    }
}

#[inline]
fn sample<R: Rng>(rng: &mut R, half_extent: f32) -> f32 {
    rng.gen_range(-half_extent..=half_extent)
}

/// Build the static scene. Random placement is drawn from `rng` once.
pub fn build_scene<R: Rng>(rng: &mut R) -> Scene {
    let fragments = (0..NUCLEUS_FRAGMENTS)
        .map(|_| Fragment {
            offset: Vec3::new(
                sample(rng, NUCLEUS_SPREAD),
                sample(rng, NUCLEUS_SPREAD),
                sample(rng, NUCLEUS_SPREAD),
            ),
            radius: rng.gen_range(FRAGMENT_RADIUS_MIN..=FRAGMENT_RADIUS_MAX),
            phase: rng.gen_range(0.0..TAU),
        })
        .collect();

    let radii = Vec2::new(ORBIT_RADIUS, ORBIT_RADIUS * ORBIT_ECCENTRICITY);
    let tilt = |i: usize| {
        Quat::from_rotation_y(i as f32 * TAU / 3.0) * Quat::from_rotation_x(1.15 - 0.25 * i as f32)
    };
    let orbits = [0, 1, 2].map(|i| Orbit { tilt: tilt(i), radii });
    let electrons = [0, 1, 2].map(|i| Electron {
        tilt: tilt(i),
        radii,
        speed: ELECTRON_SPEED * (1.0 + 0.15 * i as f32),
        phase: i as f32 * ELECTRON_PHASE_STEP,
    });

    let points = (0..PARTICLE_COUNT)
        .map(|_| ParticlePoint {
            position: [
                sample(rng, PARTICLE_BOUNDS.x),
                sample(rng, PARTICLE_BOUNDS.y),
                sample(rng, PARTICLE_BOUNDS.z),
            ],
            color: PARTICLE_COLORS[rng.gen_range(0..PARTICLE_COLORS.len())],
            seed: rng.gen_range(0.0..1.0),
        })
        .collect();

    Scene {
        atom: Atom {
            position: CORE_POSITION,
            fragments,
            orbits,
            electrons,
        },
        particles: ParticleField { points },
        sentinel: Sentinel::new(SENTINEL_POSITION),
        holo: HoloPanel {
            position: HOLO_POSITION,
            size: HOLO_SIZE,
            material: Material {
                color: HOLO_COLOR,
                emissive: HOLO_COLOR,
                emissive_intensity: Some(1.2),
                opacity: HOLO_OPACITY_BASE,
            },
        },
        lights: Lighting {
            ambient: AmbientLight {
                color: AMBIENT_COLOR,
                intensity: AMBIENT_INTENSITY,
            },
            key: PointLight {
                position: CORE_POSITION,
                color: CORE_LIGHT_COLOR,
                intensity: CORE_LIGHT_INTENSITY,
                range: CORE_LIGHT_RANGE,
            },
        },
    }
}

impl Scene {
    /// Flatten the hierarchy under `pose` into instanced draws, opaque first.
    pub fn draw_list(&self, pose: &Pose) -> Vec<DrawItem> {
        let mut out = Vec::with_capacity(self.atom.fragments.len() + 16);
        let core = Mat4::from_rotation_translation(pose.core_rotation, self.atom.position);
        let nucleus = Material::glowing(NUCLEUS_COLOR, NUCLEUS_EMISSIVE, 1.4);
        let (color, emissive) = nucleus.packed(1.0);
        for (i, f) in self.atom.fragments.iter().enumerate() {
            let s = f.radius * pose.fragment_scales.get(i).copied().unwrap_or(1.0);
            out.push(DrawItem {
                mesh: MeshKind::Fragment,
                model: core * Mat4::from_scale_rotation_translation(Vec3::splat(s), Quat::IDENTITY, f.offset),
                color,
                emissive,
            });
        }
        let (color, emissive) = Material::glowing(RING_COLOR, RING_COLOR, 0.8).packed(1.0);
        for o in &self.atom.orbits {
            out.push(DrawItem {
                mesh: MeshKind::Ring,
                model: core
                    * Mat4::from_quat(o.tilt)
                    * Mat4::from_scale(Vec3::new(o.radii.x, o.radii.x, o.radii.y)),
                color,
                emissive,
            });
        }
        let (color, emissive) = Material::glowing(ELECTRON_COLOR, ELECTRON_COLOR, 3.0).packed(1.0);
        for p in &pose.electrons {
            out.push(DrawItem {
                mesh: MeshKind::Sphere,
                model: core * Mat4::from_scale_rotation_translation(Vec3::splat(ELECTRON_RADIUS), Quat::IDENTITY, *p),
                color,
                emissive,
            });
        }

        match &self.sentinel.content {
            SentinelContent::Placeholder(parts) => {
                for part in parts {
                    let (color, emissive) = part.material.packed(part.material.opacity);
                    out.push(DrawItem {
                        mesh: part.mesh,
                        model: pose.sentinel * part.local(),
                        color,
                        emissive,
                    });
                }
            }
            SentinelContent::Model(model) => {
                for (i, m) in model.meshes.iter().enumerate() {
                    let (color, emissive) = m.material.packed(m.material.opacity);
                    out.push(DrawItem {
                        mesh: MeshKind::Model(i),
                        model: pose.sentinel,
                        color,
                        emissive,
                    });
                }
            }
        }

        let holo = &self.holo;
        let (color, emissive) = holo.material.packed(pose.holo_opacity);
        out.push(DrawItem {
            mesh: MeshKind::Panel,
            model: Mat4::from_scale_rotation_translation(
                Vec3::new(holo.size[0], holo.size[1], 1.0),
                Quat::from_rotation_y(0.35),
                holo.position,
            ),
            color,
            emissive,
        });

        out.sort_by_key(|d| d.is_translucent());
        out
    }
}
