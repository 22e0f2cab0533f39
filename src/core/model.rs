use super::geometry::{MeshData, Vertex};
use super::scene::Material;
use crate::constants::{DEFAULT_EMISSIVE_INTENSITY, SENTINEL_MODEL_HEIGHT};
use glam::{Mat3, Mat4, Vec3};
use std::future::Future;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("fetch timed out")]
    Timeout,
    #[error("malformed model: {0}")]
    Parse(#[from] gltf::Error),
    #[error("model has no renderable geometry")]
    Empty,
}

#[derive(Clone, Debug)]
pub struct ModelMesh {
    pub mesh: MeshData,
    pub material: Material,
}

/// Parsed sentinel model with geometry baked into sentinel-local space.
#[derive(Clone, Debug)]
pub struct LoadedModel {
    pub meshes: Vec<ModelMesh>,
    pub min: Vec3,
    pub max: Vec3,
}

impl LoadedModel {
    pub fn bounding_sphere(&self) -> (Vec3, f32) {
        let center = (self.min + self.max) * 0.5;
        (center, (self.max - self.min).length() * 0.5)
    }

    /// Give every material an emissive intensity, leaving explicit values alone.
    pub fn normalize_emissive(&mut self) {
        for m in &mut self.meshes {
            m.material
                .emissive_intensity
                .get_or_insert(DEFAULT_EMISSIVE_INTENSITY);
        }
    }

    /// Scale to the sentinel height and center the bounds on the origin.
    fn fit_to_sentinel(&mut self) {
        let size = self.max - self.min;
        let scale = if size.y > 1e-6 {
            SENTINEL_MODEL_HEIGHT / size.y
        } else {
            1.0
        };
        let shift = Vec3::new(
            -(self.min.x + self.max.x) * 0.5,
            -(self.min.y + self.max.y) * 0.5,
            -(self.min.z + self.max.z) * 0.5,
        );
        for m in &mut self.meshes {
            for v in &mut m.mesh.vertices {
                let p = (Vec3::from(v.pos) + shift) * scale;
                v.pos = p.to_array();
            }
        }
        self.min = (self.min + shift) * scale;
        self.max = (self.max + shift) * scale;
    }
}

/// Result of the one-shot model load; the caller installs it.
#[derive(Clone, Debug)]
pub enum SentinelOutcome {
    Loaded(LoadedModel),
    Placeholder,
}

/// Byte source for the sentinel model (HTTP in the browser, canned in tests).
pub trait ModelSource {
    fn fetch(&self, path: &str) -> impl Future<Output = Result<Vec<u8>, AssetError>>;
}

/// Fetch and parse the model; any failure resolves to the placeholder.
pub async fn load_sentinel<S: ModelSource>(source: &S, path: &str) -> SentinelOutcome {
    let parsed = match source.fetch(path).await {
        Ok(bytes) => parse_model(&bytes),
        Err(e) => Err(e),
    };
    match parsed {
        Ok(model) => {
            log::info!("[sentinel] loaded {} meshes from {}", model.meshes.len(), path);
            SentinelOutcome::Loaded(model)
        }
        Err(e) => {
            log::info!("[sentinel] keeping placeholder: {}", e);
            SentinelOutcome::Placeholder
        }
    }
}

/// Parse a self-contained glTF (GLB or embedded JSON) into sentinel meshes.
pub fn parse_model(bytes: &[u8]) -> Result<LoadedModel, AssetError> {
    let gltf::Gltf { document, blob } = gltf::Gltf::from_slice(bytes)?;
    let mut meshes = Vec::new();
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or(AssetError::Empty)?;
    for node in scene.nodes() {
        collect_node(&node, Mat4::IDENTITY, blob.as_deref(), &mut meshes);
    }
    meshes.retain(|m: &ModelMesh| !m.mesh.is_empty());

    let mut min = Vec3::splat(f32::MAX);
    let mut max = Vec3::splat(f32::MIN);
    for m in &meshes {
        if let Some((lo, hi)) = m.mesh.bounds() {
            min = min.min(Vec3::from(lo));
            max = max.max(Vec3::from(hi));
        }
    }
    if meshes.is_empty() {
        return Err(AssetError::Empty);
    }

    let mut model = LoadedModel { meshes, min, max };
    model.fit_to_sentinel();
    model.normalize_emissive();
    Ok(model)
}

fn collect_node(node: &gltf::Node, parent: Mat4, blob: Option<&[u8]>, out: &mut Vec<ModelMesh>) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        let normal_m = Mat3::from_mat4(world).inverse().transpose();
        for prim in mesh.primitives() {
            if prim.mode() != gltf::mesh::Mode::Triangles {
                continue;
            }
            // only the GLB binary chunk is reachable without a filesystem
            let reader = prim.reader(|b| match b.source() {
                gltf::buffer::Source::Bin => blob,
                gltf::buffer::Source::Uri(_) => None,
            });
            let Some(positions) = reader.read_positions() else {
                continue;
            };
            let positions: Vec<[f32; 3]> = positions.collect();
            let normals: Vec<[f32; 3]> = match reader.read_normals() {
                Some(it) => it.collect(),
                None => vec![[0.0, 1.0, 0.0]; positions.len()],
            };
            let vertices = positions
                .iter()
                .zip(normals.iter())
                .map(|(p, n)| Vertex {
                    pos: world.transform_point3(Vec3::from(*p)).to_array(),
                    nrm: (normal_m * Vec3::from(*n)).normalize_or_zero().to_array(),
                })
                .collect();
            let indices = match reader.read_indices() {
                Some(it) => it.into_u32().collect(),
                None => (0..positions.len() as u32).collect(),
            };
            out.push(ModelMesh {
                mesh: MeshData { vertices, indices },
                material: material_of(&prim.material()),
            });
        }
    }
    for child in node.children() {
        collect_node(&child, world, blob, out);
    }
}

fn material_of(m: &gltf::Material) -> Material {
    let pbr = m.pbr_metallic_roughness();
    let [r, g, b, a] = pbr.base_color_factor();
    Material {
        color: [r, g, b],
        emissive: m.emissive_factor(),
        emissive_intensity: m.emissive_strength(),
        opacity: if m.alpha_mode() == gltf::material::AlphaMode::Blend {
            a
        } else {
            1.0
        },
    }
}
