use super::uniforms::{changed_controls, CrtControl, CrtUniforms, SurfaceKind};
use crate::surface::Disposable;
use crate::textures::CrtTextures;

/// Shader material for one surface: pipeline, uniform buffer and the
/// bind group of source, overlay and noise textures.
pub struct CrtMaterial {
    kind: SurfaceKind,
    pipeline: wgpu::RenderPipeline,
    layout: wgpu::BindGroupLayout,
    uniform_buffer: wgpu::Buffer,
    clamp_sampler: wgpu::Sampler,
    repeat_sampler: wgpu::Sampler,
    bind_group: wgpu::BindGroup,
    uniforms: CrtUniforms,
}

impl CrtMaterial {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        format: wgpu::TextureFormat,
        kind: SurfaceKind,
        uniforms: CrtUniforms,
        source: &wgpu::TextureView,
        textures: &CrtTextures,
    ) -> Self {
        let label = match kind {
            SurfaceKind::Content => "crt content",
            SurfaceKind::Border => "crt border",
        };

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("crt shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/crt.wgsl").into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<CrtUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let texture_entry = |binding: u32| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        };
        let sampler_entry = |binding: u32| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        };

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("crt bind group layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: std::num::NonZeroU64::new(
                            std::mem::size_of::<CrtUniforms>() as u64,
                        ),
                    },
                    count: None,
                },
                texture_entry(1),
                texture_entry(2),
                texture_entry(3),
                sampler_entry(4),
                sampler_entry(5),
            ],
        });

        let clamp_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("crt clamp sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let repeat_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("crt repeat sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("crt pipeline layout"),
            bind_group_layouts: &[&layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let bind_group = Self::create_bind_group(
            device,
            &layout,
            &uniform_buffer,
            source,
            textures,
            &clamp_sampler,
            &repeat_sampler,
        );

        Self {
            kind,
            pipeline,
            layout,
            uniform_buffer,
            clamp_sampler,
            repeat_sampler,
            bind_group,
            uniforms,
        }
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        uniform_buffer: &wgpu::Buffer,
        source: &wgpu::TextureView,
        textures: &CrtTextures,
        clamp_sampler: &wgpu::Sampler,
        repeat_sampler: &wgpu::Sampler,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("crt bind group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(source),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&textures.overlay.view),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::TextureView(&textures.noise.view),
                },
                wgpu::BindGroupEntry {
                    binding: 4,
                    resource: wgpu::BindingResource::Sampler(clamp_sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 5,
                    resource: wgpu::BindingResource::Sampler(repeat_sampler),
                },
            ],
        })
    }

    /// Point the material at a recreated source surface.
    pub fn rebind(&mut self, device: &wgpu::Device, source: &wgpu::TextureView, textures: &CrtTextures) {
        self.bind_group = Self::create_bind_group(
            device,
            &self.layout,
            &self.uniform_buffer,
            source,
            textures,
            &self.clamp_sampler,
            &self.repeat_sampler,
        );
    }

    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    pub fn uniforms(&self) -> &CrtUniforms {
        &self.uniforms
    }

    /// Write the time slot only.
    pub fn set_time(&mut self, queue: &wgpu::Queue, seconds: f32) {
        self.uniforms.time = seconds;
        self.write_slot(queue, CrtControl::Time);
    }

    /// Write every slot that differs from `next`; returns the slots written.
    pub fn apply(&mut self, queue: &wgpu::Queue, next: CrtUniforms) -> Vec<CrtControl> {
        let changed = changed_controls(&self.uniforms, &next);
        let time = self.uniforms.time;
        self.uniforms = CrtUniforms { time, ..next };
        for control in &changed {
            self.write_slot(queue, *control);
        }
        if !changed.is_empty() {
            tracing::debug!(surface = ?self.kind, ?changed, "Updated CRT uniforms");
        }
        changed
    }

    fn write_slot(&self, queue: &wgpu::Queue, control: CrtControl) {
        queue.write_buffer(
            &self.uniform_buffer,
            control.offset() as u64,
            control.bytes(&self.uniforms),
        );
    }

    pub fn render<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.draw(0..6, 0..1);
    }
}

impl Disposable for CrtMaterial {
    fn dispose(&mut self) {
        self.uniform_buffer.destroy();
    }
}
