// Host-side tests for sentinel model loading with canned byte sources.

#![allow(dead_code)]
include!("support/tree.rs");

use crate::constants::{DEFAULT_EMISSIVE_INTENSITY, SENTINEL_MODEL_HEIGHT, SENTINEL_POSITION};
use crate::core::model::*;
use crate::core::scene::{PartKind, Sentinel, SentinelContent};

struct Canned(Result<Vec<u8>, u16>);

impl ModelSource for Canned {
    async fn fetch(&self, _path: &str) -> Result<Vec<u8>, AssetError> {
        match &self.0 {
            Ok(bytes) => Ok(bytes.clone()),
            Err(status) => Err(AssetError::Status(*status)),
        }
    }
}

struct TimedOut;

impl ModelSource for TimedOut {
    async fn fetch(&self, _path: &str) -> Result<Vec<u8>, AssetError> {
        Err(AssetError::Timeout)
    }
}

fn pad(mut v: Vec<u8>, fill: u8) -> Vec<u8> {
    while v.len() % 4 != 0 {
        v.push(fill);
    }
    v
}

/// Minimal GLB holding one triangle 1 unit wide and 2 units tall.
fn triangle_glb() -> Vec<u8> {
    let positions: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 2.0, 0.0]];
    let bin: Vec<u8> = positions
        .iter()
        .flatten()
        .flat_map(|f| f.to_le_bytes())
        .collect();
    let json = r#"{"asset":{"version":"2.0"},"scene":0,"scenes":[{"nodes":[0]}],"nodes":[{"mesh":0}],"meshes":[{"primitives":[{"attributes":{"POSITION":0}}]}],"accessors":[{"bufferView":0,"componentType":5126,"count":3,"type":"VEC3","min":[0.0,0.0,0.0],"max":[1.0,2.0,0.0]}],"bufferViews":[{"buffer":0,"byteLength":36}],"buffers":[{"byteLength":36}]}"#;
    let json = pad(json.as_bytes().to_vec(), b' ');
    let bin = pad(bin, 0);

    let total = 12 + 8 + json.len() + 8 + bin.len();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(json.len() as u32).to_le_bytes());
    out.extend_from_slice(b"JSON");
    out.extend_from_slice(&json);
    out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
    out.extend_from_slice(b"BIN\0");
    out.extend_from_slice(&bin);
    out
}

fn assert_placeholder_parts(sentinel: &Sentinel) {
    let SentinelContent::Placeholder(parts) = &sentinel.content else {
        panic!("expected placeholder content");
    };
    let count = |k: PartKind| parts.iter().filter(|p| p.kind == k).count();
    assert_eq!(count(PartKind::Body), 1);
    assert_eq!(count(PartKind::Eye), 2);
    assert_eq!(count(PartKind::Halo), 1);
}

#[test]
fn failed_fetch_keeps_placeholder() {
    let outcome = pollster::block_on(load_sentinel(&Canned(Err(404)), "missing.glb"));
    assert!(matches!(outcome, SentinelOutcome::Placeholder));

    let mut sentinel = Sentinel::new(SENTINEL_POSITION);
    sentinel.install(outcome);
    assert_placeholder_parts(&sentinel);
    assert_eq!(sentinel.child_count(), 4);
}

#[test]
fn timeout_keeps_placeholder() {
    let outcome = pollster::block_on(load_sentinel(&TimedOut, "slow.glb"));
    assert!(matches!(outcome, SentinelOutcome::Placeholder));
}

#[test]
fn garbage_bytes_keep_placeholder() {
    let bytes = b"definitely not a model".to_vec();
    assert!(matches!(parse_model(&bytes), Err(AssetError::Parse(_))));
    let outcome = pollster::block_on(load_sentinel(&Canned(Ok(bytes)), "bad.glb"));
    assert!(matches!(outcome, SentinelOutcome::Placeholder));
}

#[test]
fn glb_triangle_is_fitted_to_sentinel_height() {
    let model = parse_model(&triangle_glb()).expect("valid glb");
    assert_eq!(model.meshes.len(), 1);
    let height = model.max.y - model.min.y;
    assert!((height - SENTINEL_MODEL_HEIGHT).abs() < 1e-4, "{}", height);

    // Bounds are centered on the origin
    let center = (model.min + model.max) * 0.5;
    assert!(center.length() < 1e-4);

    let mesh = &model.meshes[0];
    assert_eq!(mesh.mesh.indices, vec![0, 1, 2]);
    assert_eq!(
        mesh.material.emissive_intensity,
        Some(DEFAULT_EMISSIVE_INTENSITY)
    );
}

#[test]
fn loaded_model_replaces_placeholder_in_one_step() {
    let outcome = pollster::block_on(load_sentinel(&Canned(Ok(triangle_glb())), "tri.glb"));
    let mut sentinel = Sentinel::new(SENTINEL_POSITION);
    sentinel.install(outcome);
    assert!(!sentinel.is_placeholder());
    assert_eq!(sentinel.child_count(), 1);

    // Falling back later restores the full placeholder set
    sentinel.install(SentinelOutcome::Placeholder);
    assert_placeholder_parts(&sentinel);
}

#[test]
fn explicit_emissive_intensity_is_kept() {
    let mut model = parse_model(&triangle_glb()).unwrap();
    model.meshes[0].material.emissive_intensity = Some(3.0);
    model.normalize_emissive();
    assert_eq!(model.meshes[0].material.emissive_intensity, Some(3.0));
}

#[test]
fn bounding_sphere_covers_bounds() {
    let model = parse_model(&triangle_glb()).unwrap();
    let (center, radius) = model.bounding_sphere();
    assert!((model.min - center).length() <= radius + 1e-5);
    assert!((model.max - center).length() <= radius + 1e-5);
}
