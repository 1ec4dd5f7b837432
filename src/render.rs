use folio_core::gpu::{write_layer_instances, LayerInstance, SceneUniforms};
use folio_core::{wireframe_plane, AnimationContext, LAYER_SEGMENTS, LAYER_SIZE};
use glam::Vec3;
use web_sys as web;
use wgpu::util::DeviceExt;

mod pipelines;
use pipelines::{create_scene_resources, SceneResources};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    scene: SceneResources,

    line_vertices: wgpu::Buffer,
    line_vertex_count: u32,
    layer_instances: wgpu::Buffer,
    layer_count: u32,
    instance_scratch: Vec<LayerInstance>,
    particle_positions: wgpu::Buffer,
    particle_count: u32,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    /// Takes the initial layer transforms and particle positions by value so
    /// no scene borrow is held across the adapter/device awaits.
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        instances: Vec<LayerInstance>,
        positions: Vec<Vec3>,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
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
        // Page content shows through wherever nothing is drawn
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
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

        let scene = create_scene_resources(&device, format);

        let lines = wireframe_plane(LAYER_SIZE, LAYER_SEGMENTS);
        let line_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("layer_lines"),
            contents: bytemuck::cast_slice(&lines),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let layer_instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("layer_instances"),
            contents: bytemuck::cast_slice(&instances),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let particle_positions = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle_positions"),
            contents: bytemuck::cast_slice(&positions),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        log::info!(
            "[gpu] surface {}x{} {:?}, {} line vertices, {} particles",
            width,
            height,
            format,
            lines.len(),
            positions.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene,
            line_vertices,
            line_vertex_count: lines.len() as u32,
            layer_instances,
            layer_count: instances.len() as u32,
            instance_scratch: instances,
            particle_positions,
            particle_count: positions.len() as u32,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Upload this frame's transforms and issue the single draw submission.
    pub fn render(&mut self, ctx: &AnimationContext) -> Result<(), wgpu::SurfaceError> {
        let uniforms = SceneUniforms::from_context(ctx);
        self.queue.write_buffer(
            &self.scene.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms),
        );
        write_layer_instances(ctx, &mut self.instance_scratch);
        self.queue.write_buffer(
            &self.layer_instances,
            0,
            bytemuck::cast_slice(&self.instance_scratch),
        );
        self.queue.write_buffer(
            &self.particle_positions,
            0,
            bytemuck::cast_slice(&ctx.particles.positions),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.scene.bind_group, &[]);

            rpass.set_pipeline(&self.scene.layer_pipeline);
            rpass.set_vertex_buffer(0, self.line_vertices.slice(..));
            rpass.set_vertex_buffer(1, self.layer_instances.slice(..));
            rpass.draw(0..self.line_vertex_count, 0..self.layer_count);

            rpass.set_pipeline(&self.scene.particle_pipeline);
            rpass.set_vertex_buffer(0, self.particle_positions.slice(..));
            rpass.draw(0..6, 0..self.particle_count);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
