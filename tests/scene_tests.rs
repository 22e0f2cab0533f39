// Host-side tests for scene construction, procedural geometry and animation.

#![allow(dead_code)]
include!("support/tree.rs");

use crate::constants::*;
use crate::core::anim::{pose_at, Pose};
use crate::core::geometry::{self, MeshData};
use crate::core::scene::*;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded() -> Scene {
    build_scene(&mut StdRng::seed_from_u64(7))
}

fn assert_well_formed(name: &str, mesh: &MeshData) {
    assert!(!mesh.is_empty(), "{} is empty", name);
    assert_eq!(mesh.indices.len() % 3, 0, "{} index count", name);
    let n = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n), "{} index out of range", name);
}

#[test]
fn builtin_meshes_are_well_formed() {
    for kind in MeshKind::BUILTIN {
        let mesh = kind.builtin_mesh().expect("builtin mesh");
        assert_well_formed(&format!("{:?}", kind), &mesh);
    }
    assert!(MeshKind::Model(0).builtin_mesh().is_none());
}

#[test]
fn sphere_vertices_lie_on_radius() {
    let mesh = geometry::uv_sphere(2.0, 12, 8);
    for v in &mesh.vertices {
        let len = Vec3::from(v.pos).length();
        assert!((len - 2.0).abs() < 1e-4, "{}", len);
    }
}

#[test]
fn octahedron_and_quad_shapes() {
    let oct = geometry::octahedron(1.0);
    assert_eq!(oct.vertices.len(), 24);
    assert_eq!(oct.indices.len(), 24);

    let quad = geometry::quad(2.0, 1.0);
    assert_eq!(quad.vertices.len(), 4);
    assert_eq!(quad.indices.len(), 6);
    assert!(quad.vertices.iter().all(|v| v.nrm == [0.0, 0.0, 1.0]));
    let (min, max) = quad.bounds().unwrap();
    assert_eq!(min, [-1.0, -0.5, 0.0]);
    assert_eq!(max, [1.0, 0.5, 0.0]);
}

#[test]
fn empty_mesh_has_no_bounds() {
    assert!(MeshData::default().bounds().is_none());
    assert!(MeshData::default().is_empty());
}

#[test]
fn build_scene_respects_ranges() {
    let scene = seeded();
    assert_eq!(scene.atom.fragments.len(), NUCLEUS_FRAGMENTS);
    for f in &scene.atom.fragments {
        assert!(f.offset.abs().max_element() <= NUCLEUS_SPREAD);
        assert!((FRAGMENT_RADIUS_MIN..=FRAGMENT_RADIUS_MAX).contains(&f.radius));
    }

    assert_eq!(scene.particles.points.len(), PARTICLE_COUNT);
    for p in &scene.particles.points {
        let pos = Vec3::from(p.position);
        assert!(pos.abs().cmple(PARTICLE_BOUNDS).all());
        assert!(core_palette_contains(p.color));
        assert!((0.0..1.0).contains(&p.seed));
    }
    assert_eq!(scene.sentinel.position, SENTINEL_POSITION);
    assert!(scene.sentinel.is_placeholder());
}

fn core_palette_contains(c: [f32; 3]) -> bool {
    crate::core::constants::PARTICLE_COLORS.contains(&c)
}

#[test]
fn same_seed_builds_same_layout() {
    let a = seeded();
    let b = seeded();
    assert_eq!(a.atom.fragments, b.atom.fragments);
    assert_eq!(a.particles.points[..16], b.particles.points[..16]);
}

#[test]
fn electrons_are_pure_functions_of_time() {
    let scene = seeded();
    for e in &scene.atom.electrons {
        let p = e.position_at(1.25);
        assert_eq!(p, e.position_at(1.25));

        // Stays on its ellipse and in the orbit plane
        let r = p.length();
        assert!(r >= e.radii.y - 1e-4 && r <= e.radii.x + 1e-4, "{}", r);
        assert!(p.dot(e.axis()).abs() < 1e-4);

        // One full revolution returns to the same point
        let period = std::f32::consts::TAU / e.speed;
        assert!((e.position_at(0.5 + period) - e.position_at(0.5)).length() < 1e-3);
    }
}

#[test]
fn electrons_start_evenly_phased() {
    let scene = seeded();
    let phases: Vec<f32> = scene.atom.electrons.iter().map(|e| e.phase).collect();
    assert_eq!(phases[0], 0.0);
    assert!((phases[1] - ELECTRON_PHASE_STEP).abs() < 1e-6);
    assert!((phases[2] - 2.0 * ELECTRON_PHASE_STEP).abs() < 1e-6);
}

#[test]
fn placeholder_has_body_two_eyes_and_halo() {
    let parts = placeholder_parts();
    let kinds: Vec<PartKind> = parts.iter().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        vec![PartKind::Body, PartKind::Eye, PartKind::Eye, PartKind::Halo]
    );
    assert_eq!(parts[0].mesh, MeshKind::Capsule);
    assert_eq!(parts[3].mesh, MeshKind::Halo);
}

#[test]
fn draw_list_puts_translucent_panel_last() {
    let scene = seeded();
    let pose = Pose::at_rest(&scene);
    let items = scene.draw_list(&pose);
    assert_eq!(items.len(), NUCLEUS_FRAGMENTS + 3 + 3 + 4 + 1);

    let first_translucent = items
        .iter()
        .position(|d| d.is_translucent())
        .expect("holo panel is translucent");
    assert!(items[first_translucent..].iter().all(|d| d.is_translucent()));
    let last = items.last().unwrap();
    assert_eq!(last.mesh, MeshKind::Panel);
    assert!((last.color[3] - pose.holo_opacity).abs() < 1e-6);
}

#[test]
fn pose_animates_core_and_sentinel() {
    let scene = seeded();
    let rest = pose_at(&scene, 0.0);
    let later = pose_at(&scene, 2.0);
    assert_ne!(rest.core_rotation, later.core_rotation);
    assert_eq!(rest.fragment_scales.len(), NUCLEUS_FRAGMENTS);

    // At t = 0 the sentinel sits exactly at its anchor
    let (_, rot, pos) = rest.sentinel.to_scale_rotation_translation();
    assert!((pos - SENTINEL_POSITION).length() < 1e-6);
    assert!(rot.angle_between(glam::Quat::IDENTITY) < 1e-6);

    let (_, _, moved) = later.sentinel.to_scale_rotation_translation();
    assert!((moved.y - SENTINEL_POSITION.y).abs() <= SENTINEL_BOB_AMPLITUDE + 1e-6);
    assert!(later.holo_opacity > 0.0 && later.holo_opacity < 1.0);
}
