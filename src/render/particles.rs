use super::helpers;
use crate::constants::{
    PARTICLE_DRIFT, PARTICLE_FADE_FAR, PARTICLE_FADE_NEAR, PARTICLE_PARALLAX, PARTICLE_SIZE_PX,
};
use crate::core::scene::ParticlePoint;
use crate::core::state::SceneState;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ParticleUniforms {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    viewport: [f32; 2],
    time: f32,
    size_px: f32,
    parallax: [f32; 2],
    drift: f32,
    pixel_ratio: f32,
    fade: [f32; 2],
    _pad: [f32; 2],
}

impl ParticleUniforms {
    pub(crate) fn from_state(state: &SceneState, width: u32, height: u32) -> Self {
        let ndc = state.input.pointer.ndc;
        Self {
            view_proj: state.camera.view_proj().to_cols_array_2d(),
            eye: state.camera.eye.extend(1.0).to_array(),
            viewport: [width as f32, height as f32],
            time: state.anim_time,
            size_px: PARTICLE_SIZE_PX,
            parallax: [ndc.x * PARTICLE_PARALLAX, ndc.y * PARTICLE_PARALLAX],
            drift: PARTICLE_DRIFT,
            pixel_ratio: state.pixel_ratio(),
            fade: [PARTICLE_FADE_NEAR, PARTICLE_FADE_FAR],
            _pad: [0.0; 2],
        }
    }
}

/// Additive point sprites expanded from one instance per particle.
pub(crate) struct ParticleRenderer {
    uniform: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    pipeline: wgpu::RenderPipeline,
    points: wgpu::Buffer,
    count: u32,
}

impl ParticleRenderer {
    pub(crate) fn new(device: &wgpu::Device, shader: &wgpu::ShaderModule, points: &[ParticlePoint]) -> Self {
        let uniform = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("particle_uniforms"),
            size: std::mem::size_of::<ParticleUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("particle_bgl"),
            entries: &[helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX)],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("particle_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_particles"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let buffers = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ParticlePoint>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32],
        }];
        let pipeline = helpers::make_scene_pipeline(
            device,
            "particles",
            &layout,
            shader,
            &buffers,
            Some(helpers::ADDITIVE),
            false,
            None,
        );
        let points_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle_points"),
            contents: bytemuck::cast_slice(points),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            uniform,
            bind_group,
            pipeline,
            points: points_buf,
            count: points.len() as u32,
        }
    }

    pub(crate) fn write(&self, queue: &wgpu::Queue, uniforms: &ParticleUniforms) {
        queue.write_buffer(&self.uniform, 0, bytemuck::bytes_of(uniforms));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.points.slice(..));
        rpass.draw(0..6, 0..self.count);
    }
}
