use crate::core::quality::PostSettings;
use crate::core::scene::Sentinel;
use crate::core::state::SceneState;
use std::cell::RefCell;
use web_sys as web;

mod helpers;
mod meshes;
mod particles;
mod post;
mod targets;

use meshes::{MeshRenderer, SceneGlobals};
use particles::{ParticleRenderer, ParticleUniforms};
use post::{PostChain, PostPipelines};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    meshes: MeshRenderer,
    particles: ParticleRenderer,
    post_pipes: PostPipelines,
    post: PostChain,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    /// `state` is only borrowed after the adapter and device are acquired,
    /// so event handlers may run while this future is pending.
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        state: &RefCell<SceneState>,
    ) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let state = state.borrow();
        let settings = state.post_settings();
        let (width, height) = (settings.width, settings.height);
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = |label: &str, src: &str| {
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(label),
                source: wgpu::ShaderSource::Wgsl(src.into()),
            })
        };
        let scene_shader = shader("scene_shader", crate::core::SCENE_WGSL);
        let particle_shader = shader("particle_shader", crate::core::PARTICLES_WGSL);
        let post_shader = shader("post_shader", crate::core::POST_WGSL);

        let mut meshes = MeshRenderer::new(&device, &scene_shader);
        meshes.sync_sentinel(&device, &state.scene.sentinel);
        let particles =
            ParticleRenderer::new(&device, &particle_shader, &state.scene.particles.points);
        let post_pipes = post::create_post_pipelines(&device, &post_shader, format);
        let post = PostChain::new(&device, &post_pipes, settings);
        log::info!(
            "[gpu] ready {}x{} format={:?} particles={}",
            width,
            height,
            format,
            state.scene.particles.points.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            meshes,
            particles,
            post_pipes,
            post,
            clear_color: wgpu::Color {
                r: 0.01,
                g: 0.012,
                b: 0.03,
                a: 1.0,
            },
        })
    }

    /// Reconfigure the surface and replace the post chain, disposing the old one.
    pub fn rebuild_post(&mut self, settings: PostSettings) {
        if settings.width != self.config.width || settings.height != self.config.height {
            self.config.width = settings.width;
            self.config.height = settings.height;
            self.surface.configure(&self.device, &self.config);
        }
        let next = PostChain::new(&self.device, &self.post_pipes, settings);
        let prev = std::mem::replace(&mut self.post, next);
        prev.destroy();
        log::info!(
            "[gpu] post chain {}x{} strength={:.2} radius={:.2} threshold={:.2}",
            settings.width,
            settings.height,
            settings.bloom.strength,
            settings.bloom.radius,
            settings.bloom.threshold
        );
    }

    pub fn sync_sentinel(&mut self, sentinel: &Sentinel) {
        self.meshes.sync_sentinel(&self.device, sentinel);
    }

    pub fn render(&mut self, state: &SceneState) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let lights = &state.scene.lights;
        let amb = lights.ambient;
        let key = lights.key;
        let globals = SceneGlobals {
            view_proj: state.camera.view_proj().to_cols_array_2d(),
            eye: state.camera.eye.extend(1.0).to_array(),
            ambient: [
                amb.color[0] * amb.intensity,
                amb.color[1] * amb.intensity,
                amb.color[2] * amb.intensity,
                1.0,
            ],
            light_pos: key.position.extend(key.range).to_array(),
            light_color: [
                key.color[0] * key.intensity,
                key.color[1] * key.intensity,
                key.color[2] * key.intensity,
                1.0,
            ],
        };
        let items = state.scene.draw_list(&state.pose);
        self.meshes.prepare(&self.device, &self.queue, &globals, &items);
        let settings = self.post.settings;
        self.particles.write(
            &self.queue,
            &ParticleUniforms::from_state(state, settings.width, settings.height),
        );
        self.post.write_uniforms(&self.queue, state.elapsed);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let targets = &self.post.targets;
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.meshes.draw(&mut rpass);
            self.particles.draw(&mut rpass);
        }
        self.post.encode(&mut encoder, &self.post_pipes, &view);

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
