use std::collections::HashMap;

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCall, MaterialKind, Scene};

use super::mesh_cache::{vertex_layout, MeshCache};
use super::uniform::{uniform_stride, DrawUniform};

const COMMON_WGSL: &str = include_str!("shaders/common.wgsl");

const MATERIAL_SHADERS: [(MaterialKind, &str, &str); 3] = [
    (MaterialKind::Solid, "planner solid", include_str!("shaders/solid.wgsl")),
    (MaterialKind::Stripes, "planner stripes", include_str!("shaders/stripes.wgsl")),
    (MaterialKind::Pulse, "planner pulse", include_str!("shaders/pulse.wgsl")),
];

/// Renders scene draw calls with one pipeline per material family.
///
/// Per-draw uniforms share one buffer addressed with dynamic offsets; geometry
/// buffers are cached per [`GeometryKey`](crate::scene::GeometryKey).
#[derive(Default)]
pub struct SceneRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipelines: HashMap<MaterialKind, wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    uniform_buffer: Option<wgpu::Buffer>,
    uniform_capacity: usize,
    stride: u64,

    meshes: MeshCache,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `calls` in order on top of the target's current contents.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        scene: &Scene,
        calls: &[DrawCall],
    ) {
        self.ensure_pipelines(ctx);
        self.meshes.sync(ctx.device, scene);

        if calls.is_empty() {
            return;
        }

        self.ensure_uniform_capacity(ctx, calls.len());
        self.write_uniforms(ctx, calls);

        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("planner scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        for (i, call) in calls.iter().enumerate() {
            let Some(mesh) = self.meshes.get(call.geometry) else {
                log::warn!("draw call references a released geometry; skipping");
                continue;
            };
            let Some(pipeline) = self.pipelines.get(&call.uniforms.kind) else { continue };

            rpass.set_pipeline(pipeline);
            rpass.set_bind_group(0, bind_group, &[(i as u64 * self.stride) as u32]);
            rpass.set_vertex_buffer(0, mesh.vbo.slice(..));
            rpass.set_index_buffer(mesh.ibo.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && !self.pipelines.is_empty() {
            return;
        }

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("planner draw bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: wgpu::BufferSize::new(DrawUniform::SIZE),
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("planner pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        self.pipelines.clear();
        for (kind, label, body) in MATERIAL_SHADERS {
            let source = format!("{COMMON_WGSL}\n{body}");
            let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(label),
                source: wgpu::ShaderSource::Wgsl(source.into()),
            });

            let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[vertex_layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            });
            self.pipelines.insert(kind, pipeline);
        }
        log::debug!("built {} material pipelines for {:?}", self.pipelines.len(), ctx.surface_format);

        self.stride = uniform_stride(ctx.device.limits().min_uniform_buffer_offset_alignment);
        self.pipeline_format = Some(ctx.surface_format);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.uniform_buffer = None;
        self.uniform_capacity = 0;
    }

    fn ensure_uniform_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.uniform_capacity && self.bind_group.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let new_cap = required.next_power_of_two().max(16);
        let buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("planner draw ubo"),
            size: new_cap as u64 * self.stride,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("planner draw bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(DrawUniform::SIZE),
                }),
            }],
        });

        self.uniform_buffer = Some(buffer);
        self.bind_group = Some(bind_group);
        self.uniform_capacity = new_cap;
    }

    fn write_uniforms(&self, ctx: &RenderCtx<'_>, calls: &[DrawCall]) {
        let Some(buffer) = self.uniform_buffer.as_ref() else { return };
        let stride = self.stride as usize;
        let size = DrawUniform::SIZE as usize;

        let mut bytes = vec![0u8; stride * calls.len()];
        for (i, call) in calls.iter().enumerate() {
            let uniform = DrawUniform::from_call(call);
            bytes[i * stride..i * stride + size].copy_from_slice(bytemuck::bytes_of(&uniform));
        }
        ctx.queue.write_buffer(buffer, 0, &bytes);
    }
}
