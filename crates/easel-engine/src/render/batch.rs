use crate::assets::Bitmap;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::DrawList;

use super::common::{clear_value, ViewportUniform, PREMULTIPLIED_OVER};
use super::tessellate::{tessellate, Mesh, Vertex};
use super::textures::{FrameCache, GpuTexture, TEXTURE_IDLE_FRAMES};

// ── renderer ──────────────────────────────────────────────────────────────

/// Draws a [`DrawList`] with a single textured-triangle pipeline.
///
/// The frame is cleared to the list's clear color and every command is drawn
/// in one render pass, in recorded order. Bitmaps are uploaded the first
/// time they are drawn and released after [`TEXTURE_IDLE_FRAMES`] frames
/// without use. GPU objects are created lazily on first render and rebuilt if
/// the surface format changes.
pub struct BatchRenderer {
    // pipeline
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    viewport_bgl: Option<wgpu::BindGroupLayout>,
    texture_bgl: Option<wgpu::BindGroupLayout>,

    // bindings
    viewport_ubo: Option<wgpu::Buffer>,
    viewport_bind_group: Option<wgpu::BindGroup>,
    sampler: Option<wgpu::Sampler>,
    white: Option<GpuTexture>,

    // textures
    textures: FrameCache<Option<GpuTexture>>,

    // geometry
    mesh: Mesh,
    vertex_vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,
}

impl Default for BatchRenderer {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            viewport_bgl: None,
            texture_bgl: None,
            viewport_ubo: None,
            viewport_bind_group: None,
            sampler: None,
            white: None,
            textures: FrameCache::new(TEXTURE_IDLE_FRAMES),
            mesh: Mesh::new(),
            vertex_vbo: None,
            vertex_capacity: 0,
        }
    }
}

impl BatchRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bitmaps currently resident on the GPU.
    pub fn resident_textures(&self) -> usize {
        self.textures.len()
    }

    /// Clears the target and draws `list` into it.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, list: &DrawList) {
        self.ensure_pipeline(ctx);
        self.ensure_sampler(ctx);
        self.ensure_bindings(ctx);
        self.ensure_white(ctx);
        self.write_viewport_uniform(ctx);

        tessellate(list, &mut self.mesh);

        // ── mutable operations before any immutable borrows ────────────────
        self.prepare_textures(ctx);
        self.ensure_vertex_capacity(ctx, self.mesh.vertices.len());
        if let Some(vbo) = self.vertex_vbo.as_ref() {
            if !self.mesh.vertices.is_empty() {
                ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&self.mesh.vertices));
            }
        }

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("easel batch pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_value(list.clear_color())),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        // ── immutable borrows ──────────────────────────────────────────────
        let (Some(pipeline), Some(viewport_bg), Some(vbo), Some(white)) = (
            self.pipeline.as_ref(),
            self.viewport_bind_group.as_ref(),
            self.vertex_vbo.as_ref(),
            self.white.as_ref(),
        ) else {
            drop(rpass);
            self.textures.end_frame();
            return;
        };

        if !self.mesh.batches.is_empty() {
            rpass.set_pipeline(pipeline);
            rpass.set_bind_group(0, viewport_bg, &[]);
            rpass.set_vertex_buffer(0, vbo.slice(..));

            for batch in &self.mesh.batches {
                let texture = match batch.texture_id() {
                    None => Some(white),
                    Some(id) => self.textures.get(id).and_then(Option::as_ref),
                };
                // Bitmaps the device cannot hold were skipped at upload.
                let Some(texture) = texture else { continue };
                rpass.set_bind_group(1, &texture.bind_group, &[]);
                rpass.draw(batch.vertices.clone(), 0..1);
            }
        }

        drop(rpass);

        let released = self.textures.end_frame();
        if released > 0 {
            log::debug!("released {released} idle texture(s)");
        }
    }

    // ── textures ───────────────────────────────────────────────────────────

    fn prepare_textures(&mut self, ctx: &RenderCtx<'_>) {
        let (Some(layout), Some(sampler)) = (self.texture_bgl.as_ref(), self.sampler.as_ref()) else {
            return;
        };
        let max_dim = ctx.device.limits().max_texture_dimension_2d;

        for batch in &self.mesh.batches {
            let Some(bitmap) = batch.texture.as_ref() else { continue };
            self.textures.touch_or_insert_with(bitmap.id(), || {
                upload_bitmap(ctx, layout, sampler, bitmap, max_dim)
            });
        }
    }

    // ── lazy-init helpers ──────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("easel batch shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/batch.wgsl").into()),
        });

        let viewport_bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("easel viewport bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: ViewportUniform::BINDING_SIZE,
                },
                count: None,
            }],
        });

        let texture_bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("easel texture bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("easel batch pipeline layout"),
            bind_group_layouts: &[&viewport_bgl, &texture_bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("easel batch pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(PREMULTIPLIED_OVER),
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

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.viewport_bgl = Some(viewport_bgl);
        self.texture_bgl = Some(texture_bgl);

        // Everything bound through the old layouts must be rebuilt.
        self.viewport_ubo = None;
        self.viewport_bind_group = None;
        self.white = None;
        self.textures = FrameCache::new(TEXTURE_IDLE_FRAMES);
    }

    fn ensure_sampler(&mut self, ctx: &RenderCtx<'_>) {
        if self.sampler.is_some() {
            return;
        }
        // Bitmaps are pre-scaled to their on-screen size, so texels map 1:1.
        self.sampler = Some(ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("easel bitmap sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        }));
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.viewport_bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.viewport_bgl.as_ref() else { return; };

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("easel viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("easel viewport bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.viewport_bind_group = Some(bind_group);
    }

    fn ensure_white(&mut self, ctx: &RenderCtx<'_>) {
        if self.white.is_some() {
            return;
        }
        let (Some(layout), Some(sampler)) = (self.texture_bgl.as_ref(), self.sampler.as_ref()) else {
            return;
        };
        self.white = Some(GpuTexture::upload(
            ctx.device,
            ctx.queue,
            layout,
            sampler,
            1,
            1,
            &[255, 255, 255, 255],
        ));
    }

    fn write_viewport_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return; };
        let uniform = ViewportUniform::new(ctx.size.0, ctx.size.1);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&uniform));
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vertex_capacity && self.vertex_vbo.is_some() {
            return;
        }
        let new_cap = required.next_power_of_two().max(1024);
        let new_size = (new_cap * std::mem::size_of::<Vertex>()) as u64;
        self.vertex_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("easel batch vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = new_cap;
    }
}

fn upload_bitmap(
    ctx: &RenderCtx<'_>,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    bitmap: &Bitmap,
    max_dim: u32,
) -> Option<GpuTexture> {
    let (w, h) = bitmap.size();
    if w > max_dim || h > max_dim {
        log::warn!("bitmap {w}x{h} exceeds the device texture limit of {max_dim}; not drawn");
        return None;
    }
    Some(GpuTexture::from_bitmap(ctx.device, ctx.queue, layout, sampler, bitmap))
}
