use std::f32::consts::{PI, TAU};

/// Interleaved vertex shared by every lit mesh.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub nrm: [f32; 3],
}

/// CPU-side triangle mesh.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Axis-aligned bounds of the vertex positions, or `None` when empty.
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let first = self.vertices.first()?.pos;
        let mut min = first;
        let mut max = first;
        for v in &self.vertices {
            for k in 0..3 {
                min[k] = min[k].min(v.pos[k]);
                max[k] = max[k].max(v.pos[k]);
            }
        }
        Some((min, max))
    }

    fn push(&mut self, pos: [f32; 3], nrm: [f32; 3]) -> u32 {
        self.vertices.push(Vertex { pos, nrm });
        (self.vertices.len() - 1) as u32
    }

    // Stitch `rows` consecutive rings of `cols + 1` vertices starting at `base`.
    fn stitch_grid(&mut self, base: u32, rows: u32, cols: u32) {
        let stride = cols + 1;
        for r in 0..rows {
            for c in 0..cols {
                let a = base + r * stride + c;
                let b = a + stride;
                self.indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
            }
        }
    }
}

pub fn uv_sphere(radius: f32, segments: u32, rings: u32) -> MeshData {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let mut mesh = MeshData::default();
    for r in 0..=rings {
        let phi = PI * r as f32 / rings as f32;
        let (sp, cp) = phi.sin_cos();
        for s in 0..=segments {
            let theta = TAU * s as f32 / segments as f32;
            let (st, ct) = theta.sin_cos();
            let n = [sp * ct, cp, sp * st];
            mesh.push([n[0] * radius, n[1] * radius, n[2] * radius], n);
        }
    }
    mesh.stitch_grid(0, rings, segments);
    mesh
}

/// Flat-shaded octahedron; used for nucleus fragments.
pub fn octahedron(radius: f32) -> MeshData {
    let axes = [
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];
    // vertex axis indices per face
    let faces = [
        [0, 2, 4],
        [4, 2, 1],
        [1, 2, 5],
        [5, 2, 0],
        [4, 3, 0],
        [1, 3, 4],
        [5, 3, 1],
        [0, 3, 5],
    ];
    let mut mesh = MeshData::default();
    for f in faces {
        let [a, b, c] = f.map(|i: usize| axes[i]);
        let n = normalize([
            a[0] + b[0] + c[0],
            a[1] + b[1] + c[1],
            a[2] + b[2] + c[2],
        ]);
        for p in [a, b, c] {
            let i = mesh.push([p[0] * radius, p[1] * radius, p[2] * radius], n);
            mesh.indices.push(i);
        }
    }
    mesh
}

/// Torus lying in the XZ plane around the Y axis.
pub fn torus(major: f32, minor: f32, radial: u32, tubular: u32) -> MeshData {
    let radial = radial.max(3);
    let tubular = tubular.max(3);
    let mut mesh = MeshData::default();
    for t in 0..=tubular {
        let u = TAU * t as f32 / tubular as f32;
        let (su, cu) = u.sin_cos();
        for r in 0..=radial {
            let v = TAU * r as f32 / radial as f32;
            let (sv, cv) = v.sin_cos();
            let n = [cv * cu, sv, cv * su];
            let ring = major + minor * cv;
            mesh.push([ring * cu, minor * sv, ring * su], n);
        }
    }
    mesh.stitch_grid(0, tubular, radial);
    mesh
}

/// Capsule along +Y: two hemispheres joined by a cylinder of `length`.
pub fn capsule(radius: f32, length: f32, segments: u32, rings: u32) -> MeshData {
    let segments = segments.max(3);
    let half_rings = (rings / 2).max(1);
    let half = length * 0.5;
    let mut mesh = MeshData::default();
    // top hemisphere including the equator, then bottom hemisphere starting at it
    let rows = (0..=half_rings)
        .map(|r| (r, half))
        .chain((half_rings..=half_rings * 2).map(|r| (r, -half)));
    let mut row_count = 0u32;
    for (r, offset) in rows {
        let phi = PI * r as f32 / (half_rings * 2) as f32;
        let (sp, cp) = phi.sin_cos();
        for s in 0..=segments {
            let theta = TAU * s as f32 / segments as f32;
            let (st, ct) = theta.sin_cos();
            let n = [sp * ct, cp, sp * st];
            mesh.push([n[0] * radius, n[1] * radius + offset, n[2] * radius], n);
        }
        row_count += 1;
    }
    mesh.stitch_grid(0, row_count - 1, segments);
    mesh
}

/// Unit-normal quad in the XY plane facing +Z.
pub fn quad(width: f32, height: f32) -> MeshData {
    let (hw, hh) = (width * 0.5, height * 0.5);
    let n = [0.0, 0.0, 1.0];
    let mut mesh = MeshData::default();
    mesh.push([-hw, -hh, 0.0], n);
    mesh.push([hw, -hh, 0.0], n);
    mesh.push([hw, hh, 0.0], n);
    mesh.push([-hw, hh, 0.0], n);
    mesh.indices.extend_from_slice(&[0, 1, 2, 0, 2, 3]);
    mesh
}

#[inline]
fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt().max(1e-6);
    [v[0] / len, v[1] / len, v[2] / len]
}
