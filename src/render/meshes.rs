use super::helpers;
use crate::core::geometry::{MeshData, Vertex};
use crate::core::scene::{DrawItem, MeshKind, Sentinel, SentinelContent};
use fnv::FnvHashMap;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneGlobals {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) eye: [f32; 4],
    pub(crate) ambient: [f32; 4],
    pub(crate) light_pos: [f32; 4],
    pub(crate) light_color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct InstanceRaw {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    emissive: [f32; 4],
}

impl From<&DrawItem> for InstanceRaw {
    fn from(d: &DrawItem) -> Self {
        Self {
            model: d.model.to_cols_array_2d(),
            color: d.color,
            emissive: d.emissive,
        }
    }
}

pub(crate) struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }

    fn destroy(&self) {
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
    }
}

/// Consecutive instances sharing a mesh and blend mode.
#[derive(Clone, Copy, Debug)]
struct DrawRun {
    mesh: MeshKind,
    first: u32,
    count: u32,
    translucent: bool,
}

/// Mesh library, per-frame instance buffer and the lit scene pipelines.
pub(crate) struct MeshRenderer {
    globals: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    opaque: wgpu::RenderPipeline,
    translucent: wgpu::RenderPipeline,
    meshes: FnvHashMap<MeshKind, GpuMesh>,
    instances: wgpu::Buffer,
    capacity: usize,
    runs: Vec<DrawRun>,
}

const INITIAL_INSTANCES: usize = 64;

fn instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instance_vb"),
        size: (std::mem::size_of::<InstanceRaw>() * capacity) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl MeshRenderer {
    pub(crate) fn new(device: &wgpu::Device, shader: &wgpu::ShaderModule) -> Self {
        let globals = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_globals"),
            size: std::mem::size_of::<SceneGlobals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX_FRAGMENT,
            )],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_scene"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let buffers = [
            // slot 0: mesh vertices
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Vertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
            },
            // slot 1: instance data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<InstanceRaw>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &wgpu::vertex_attr_array![
                    2 => Float32x4,
                    3 => Float32x4,
                    4 => Float32x4,
                    5 => Float32x4,
                    6 => Float32x4,
                    7 => Float32x4,
                ],
            },
        ];
        let opaque = helpers::make_scene_pipeline(
            device,
            "scene_opaque",
            &layout,
            shader,
            &buffers,
            Some(wgpu::BlendState::REPLACE),
            true,
            None,
        );
        let translucent = helpers::make_scene_pipeline(
            device,
            "scene_translucent",
            &layout,
            shader,
            &buffers,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
            None,
        );

        let mut meshes = FnvHashMap::default();
        for kind in MeshKind::BUILTIN {
            if let Some(data) = kind.builtin_mesh() {
                meshes.insert(kind, GpuMesh::upload(device, "builtin_mesh", &data));
            }
        }

        Self {
            globals,
            bind_group,
            opaque,
            translucent,
            meshes,
            instances: instance_buffer(device, INITIAL_INSTANCES),
            capacity: INITIAL_INSTANCES,
            runs: Vec::new(),
        }
    }

    /// Replace any uploaded model meshes with the sentinel's current content.
    pub(crate) fn sync_sentinel(&mut self, device: &wgpu::Device, sentinel: &Sentinel) {
        self.meshes.retain(|kind, mesh| {
            let keep = !matches!(kind, MeshKind::Model(_));
            if !keep {
                mesh.destroy();
            }
            keep
        });
        if let SentinelContent::Model(model) = &sentinel.content {
            for (i, m) in model.meshes.iter().enumerate() {
                self.meshes
                    .insert(MeshKind::Model(i), GpuMesh::upload(device, "model_mesh", &m.mesh));
            }
            log::info!("[gpu] uploaded {} sentinel meshes", model.meshes.len());
        }
    }

    pub(crate) fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        globals: &SceneGlobals,
        items: &[DrawItem],
    ) {
        queue.write_buffer(&self.globals, 0, bytemuck::bytes_of(globals));
        if items.len() > self.capacity {
            self.instances.destroy();
            self.capacity = items.len().next_power_of_two();
            self.instances = instance_buffer(device, self.capacity);
        }
        let raw: Vec<InstanceRaw> = items.iter().map(InstanceRaw::from).collect();
        queue.write_buffer(&self.instances, 0, bytemuck::cast_slice(&raw));

        self.runs.clear();
        for (i, item) in items.iter().enumerate() {
            let translucent = item.is_translucent();
            match self.runs.last_mut() {
                Some(run) if run.mesh == item.mesh && run.translucent == translucent => {
                    run.count += 1;
                }
                _ => self.runs.push(DrawRun {
                    mesh: item.mesh,
                    first: i as u32,
                    count: 1,
                    translucent,
                }),
            }
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(1, self.instances.slice(..));
        let mut translucent = None;
        for run in &self.runs {
            let Some(mesh) = self.meshes.get(&run.mesh) else {
                continue;
            };
            if translucent != Some(run.translucent) {
                rpass.set_pipeline(if run.translucent {
                    &self.translucent
                } else {
                    &self.opaque
                });
                translucent = Some(run.translucent);
            }
            rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..mesh.index_count, 0, run.first..run.first + run.count);
        }
    }
}
