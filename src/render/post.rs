use super::helpers;
use super::targets::RenderTargets;
use crate::core::quality::PostSettings;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 2],
    time: f32,
    radius: f32,
    blur_dir: [f32; 2],
    strength: f32,
    threshold: f32,
}

/// Layouts, sampler and pipelines shared by every post chain.
pub(crate) struct PostPipelines {
    pub(crate) bgl0: wgpu::BindGroupLayout, // tex+sampler+uniform
    pub(crate) bgl1: wgpu::BindGroupLayout, // tex+sampler
    pub(crate) sampler: wgpu::Sampler,
    pub(crate) bright: wgpu::RenderPipeline,
    pub(crate) blur: wgpu::RenderPipeline,
    pub(crate) composite: wgpu::RenderPipeline,
}

pub(crate) fn create_post_pipelines(
    device: &wgpu::Device,
    post_shader: &wgpu::ShaderModule,
    swap_format: wgpu::TextureFormat,
) -> PostPipelines {
    let [tex0, samp0] = helpers::texture_layout_entries(0);
    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[
            tex0,
            samp0,
            helpers::uniform_layout_entry(2, wgpu::ShaderStages::FRAGMENT),
        ],
    });
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &helpers::texture_layout_entries(0),
    });
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("linear_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });
    let pl_bright_blur = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_0"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });
    let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_comp"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });
    let bright = helpers::make_post_pipeline(
        device,
        &pl_bright_blur,
        post_shader,
        "fs_bright",
        helpers::HDR_FORMAT,
        None,
    );
    let blur = helpers::make_post_pipeline(
        device,
        &pl_bright_blur,
        post_shader,
        "fs_blur",
        helpers::HDR_FORMAT,
        None,
    );
    let composite = helpers::make_post_pipeline(
        device,
        &pl_composite,
        post_shader,
        "fs_composite",
        swap_format,
        Some(wgpu::BlendState::REPLACE),
    );
    PostPipelines {
        bgl0,
        bgl1,
        sampler,
        bright,
        blur,
        composite,
    }
}

/// One fullscreen pass: its own uniform buffer so every pass in a frame
/// sees its own parameters after a single submit.
struct PostStage {
    label: &'static str,
    uniform: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    blur_dir: [f32; 2],
    resolution: [f32; 2],
}

/// Targets and bind groups sized for one viewport and quality preset.
/// Rebuilt wholesale on resize or quality toggle.
pub(crate) struct PostChain {
    pub(crate) settings: PostSettings,
    pub(crate) targets: RenderTargets,
    bright: PostStage,
    blur_h: PostStage,
    blur_v: PostStage,
    composite: PostStage,
    bg_bloom: wgpu::BindGroup,
}

impl PostChain {
    pub(crate) fn new(device: &wgpu::Device, pipes: &PostPipelines, settings: PostSettings) -> Self {
        let targets = RenderTargets::new(device, &settings);
        let (bw, bh) = settings.bloom_size();
        let bloom_res = [bw as f32, bh as f32];
        let full_res = [settings.width as f32, settings.height as f32];
        let stage = |label: &'static str,
                     src: &wgpu::TextureView,
                     blur_dir: [f32; 2],
                     resolution: [f32; 2]| {
            let uniform = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: std::mem::size_of::<PostUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &pipes.bgl0,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(src),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&pipes.sampler),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: uniform.as_entire_binding(),
                    },
                ],
            });
            PostStage {
                label,
                uniform,
                bind_group,
                blur_dir,
                resolution,
            }
        };
        let bright = stage("bright_pass", &targets.hdr_view, [0.0, 0.0], full_res);
        let blur_h = stage("blur_h", &targets.bloom_a_view, [1.0, 0.0], bloom_res);
        let blur_v = stage("blur_v", &targets.bloom_b_view, [0.0, 1.0], bloom_res);
        let composite = stage("composite", &targets.hdr_view, [0.0, 0.0], full_res);
        let bg_bloom = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg_bloom_a_only"),
            layout: &pipes.bgl1,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&targets.bloom_a_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&pipes.sampler),
                },
            ],
        });
        Self {
            settings,
            targets,
            bright,
            blur_h,
            blur_v,
            composite,
            bg_bloom,
        }
    }

    pub(crate) fn destroy(&self) {
        self.targets.destroy();
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, time: f32) {
        let bloom = self.settings.bloom;
        for s in [&self.bright, &self.blur_h, &self.blur_v, &self.composite] {
            let u = PostUniforms {
                resolution: s.resolution,
                time,
                radius: bloom.radius,
                blur_dir: s.blur_dir,
                strength: bloom.strength,
                threshold: bloom.threshold,
            };
            queue.write_buffer(&s.uniform, 0, bytemuck::bytes_of(&u));
        }
    }

    /// Bright → blur H → blur V → composite onto `swap_view`.
    pub(crate) fn encode(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        pipes: &PostPipelines,
        swap_view: &wgpu::TextureView,
    ) {
        let t = &self.targets;
        let black = wgpu::Color::BLACK;
        // bright pass → bloom_a
        blit(
            encoder,
            self.bright.label,
            &t.bloom_a_view,
            black,
            &pipes.bright,
            &self.bright.bind_group,
            None,
        );
        // blur horizontal bloom_a -> bloom_b
        blit(
            encoder,
            self.blur_h.label,
            &t.bloom_b_view,
            black,
            &pipes.blur,
            &self.blur_h.bind_group,
            None,
        );
        // blur vertical bloom_b -> bloom_a
        blit(
            encoder,
            self.blur_v.label,
            &t.bloom_a_view,
            black,
            &pipes.blur,
            &self.blur_v.bind_group,
            None,
        );
        blit(
            encoder,
            self.composite.label,
            swap_view,
            black,
            &pipes.composite,
            &self.composite.bind_group,
            Some(&self.bg_bloom),
        );
    }
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    clear: wgpu::Color,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
}
