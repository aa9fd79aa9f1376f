//! WebGPU render pipeline setup

use glam::Vec2;
use wgpu::util::DeviceExt;

use super::DrawList;
use super::shapes;
use super::vertex::{Vertex, colors};

/// GPU state for presenting a recorded [`DrawList`]
pub struct RenderState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    /// Play-field size in canvas pixels (what draw commands are expressed in)
    world_size: Vec2,
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
        world_size: Vec2,
    ) -> Result<Self, wgpu::RequestDeviceError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("laser-runner-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let caps = surface.get_capabilities(adapter);
        let format = caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("Surface configured: {}x{} {:?}", width, height, format);

        let pipeline = rect_pipeline(&device, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            world_size,
        })
    }

    /// Current viewport size in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Tessellate a recorded frame and present it
    pub fn render(&mut self, list: &DrawList) -> Result<(), wgpu::SurfaceError> {
        let vertices = frame_vertices(list, self.world_size);
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame"),
            });

        {
            let [r, g, b, a] = colors::BACKGROUND.map(f64::from);
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("frame"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            // A frame holds a few dozen quads at most, so upload fresh each time
            if !vertices.is_empty() {
                let buffer = self
                    .device
                    .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("rects"),
                        contents: bytemuck::cast_slice(&vertices),
                        usage: wgpu::BufferUsages::VERTEX,
                    });
                pass.set_pipeline(&self.pipeline);
                pass.set_vertex_buffer(0, buffer.slice(..));
                pass.draw(0..vertices.len() as u32, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Alpha-blended triangle list of flat-colored vertices
fn rect_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("rect_shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("rect_layout"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("rect_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

/// Frame triangles in NDC, ready for upload
fn frame_vertices(list: &DrawList, world_size: Vec2) -> Vec<Vertex> {
    shapes::tessellate(list, world_size)
        .into_iter()
        .map(|v| {
            let (x, y) = canvas_to_ndc(world_size, v.position[0], v.position[1]);
            Vertex::new(x, y, v.color)
        })
        .collect()
}

/// Convert canvas coordinates (origin top-left, y down) to NDC (-1..1, y up).
/// The play field is stretched over the whole viewport, like a fixed-size canvas.
pub fn canvas_to_ndc(world_size: Vec2, x: f32, y: f32) -> (f32, f32) {
    (x / world_size.x * 2.0 - 1.0, 1.0 - y / world_size.y * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{Rect, Surface};

    #[test]
    fn test_canvas_to_ndc_corners() {
        let world = Vec2::new(500.0, 500.0);
        assert_eq!(canvas_to_ndc(world, 0.0, 0.0), (-1.0, 1.0));
        assert_eq!(canvas_to_ndc(world, 500.0, 500.0), (1.0, -1.0));
        assert_eq!(canvas_to_ndc(world, 250.0, 250.0), (0.0, 0.0));
    }

    #[test]
    fn test_frame_vertices_are_in_ndc() {
        let world = Vec2::new(500.0, 500.0);
        let mut list = DrawList::new();
        list.clear(Rect::new(0.0, 0.0, 500.0, 500.0));
        list.fill_rect(Rect::new(0.0, 0.0, 250.0, 250.0), colors::YELLOW);

        let verts = frame_vertices(&list, world);
        assert_eq!(verts.len(), 6);
        for v in &verts {
            assert!((-1.0..=1.0).contains(&v.position[0]));
            assert!((0.0..=1.0).contains(&v.position[1]));
            assert_eq!(v.color, colors::YELLOW);
        }
    }

    #[test]
    fn test_frame_vertices_empty_list() {
        assert!(frame_vertices(&DrawList::new(), Vec2::new(500.0, 500.0)).is_empty());
    }
}
