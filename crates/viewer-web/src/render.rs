//! WebGPU state for the canvas path: panorama sphere pass plus the
//! instanced marker pass, sharing one render pass with no depth buffer
//! (markers draw after the sphere and therefore on top).

use glam::{Mat4, Quat};
use viewer_core::{
    panorama_sphere_mesh, SphereMesh, CAMERA_FAR, CAMERA_FOV_RADIANS, CAMERA_NEAR,
    MAX_MARKERS, PANORAMA_RADIUS, PANORAMA_SEGMENTS, PLACEHOLDER_RGBA,
};
use web_sys as web;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PanoramaUniforms {
    view_proj: [[f32; 4]; 4],
    // x: 1.0 when the surface format is sRGB, y: exposure
    output_params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct MarkerUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MarkerInstance {
    pub pos: [f32; 3],
    pub scale: f32,
    pub icon: u32,
    pub _pad: [u32; 3],
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    format: wgpu::TextureFormat,

    pano_pipeline: wgpu::RenderPipeline,
    pano_uniforms: wgpu::Buffer,
    pano_bgl: wgpu::BindGroupLayout,
    pano_bind_group: wgpu::BindGroup,
    pano_sampler: wgpu::Sampler,
    // Kept alive while the bind group references its view.
    _pano_texture: wgpu::Texture,
    sphere_vb: wgpu::Buffer,
    sphere_ib: wgpu::Buffer,
    sphere_index_count: u32,

    marker_pipeline: wgpu::RenderPipeline,
    marker_uniforms: wgpu::Buffer,
    marker_bind_group: wgpu::BindGroup,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,

    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface =
            instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
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
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pano_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("panorama_shader"),
            source: wgpu::ShaderSource::Wgsl(viewer_core::PANORAMA_WGSL.into()),
        });
        let marker_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("marker_shader"),
            source: wgpu::ShaderSource::Wgsl(viewer_core::MARKER_WGSL.into()),
        });

        // Sphere geometry comes from the core crate so both frontends and
        // picking agree on it.
        let mesh: SphereMesh = panorama_sphere_mesh(PANORAMA_RADIUS, PANORAMA_SEGMENTS);
        let sphere_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_vb"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let sphere_ib = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_ib"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let sphere_index_count = mesh.indices.len() as u32;

        let pano_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("pano_uniforms"),
            size: std::mem::size_of::<PanoramaUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let pano_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("pano_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let pano_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("pano_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        // Until the first panorama finishes decoding the sphere shows a
        // flat placeholder colour.
        let pano_texture = create_panorama_texture(&device, &queue, 1, 1, &PLACEHOLDER_RGBA);
        let pano_bind_group = create_panorama_bind_group(
            &device,
            &pano_bgl,
            &pano_uniforms,
            &pano_texture,
            &pano_sampler,
        );

        let pano_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pano_pl"),
            bind_group_layouts: &[&pano_bgl],
            push_constant_ranges: &[],
        });
        let pano_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pano_pipeline"),
            layout: Some(&pano_layout),
            vertex: wgpu::VertexState {
                module: &pano_shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: (std::mem::size_of::<f32>()
                        * SphereMesh::FLOATS_PER_VERTEX) as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x3,
                            offset: 0,
                            shader_location: 0,
                        },
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x2,
                            offset: 12,
                            shader_location: 1,
                        },
                    ],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                // Viewed from inside; indices are wound for the interior
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &pano_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let marker_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("marker_uniforms"),
            size: std::mem::size_of::<MarkerUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: (std::mem::size_of::<MarkerInstance>() * MAX_MARKERS) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let marker_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("marker_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let marker_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("marker_bg"),
            layout: &marker_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: marker_uniforms.as_entire_binding(),
            }],
        });
        let marker_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("marker_pl"),
            bind_group_layouts: &[&marker_bgl],
            push_constant_ranges: &[],
        });
        let marker_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("marker_pipeline"),
            layout: Some(&marker_layout),
            vertex: wgpu::VertexState {
                module: &marker_shader,
                entry_point: Some("vs_main"),
                buffers: &[
                    // slot 0: quad corners
                    wgpu::VertexBufferLayout {
                        array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &[wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x2,
                            offset: 0,
                            shader_location: 0,
                        }],
                    },
                    // slot 1: per-marker instance data
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<MarkerInstance>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &[
                            wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32x3,
                                offset: 0,
                                shader_location: 1,
                            },
                            wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32,
                                offset: 12,
                                shader_location: 2,
                            },
                            wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Uint32,
                                offset: 16,
                                shader_location: 3,
                            },
                        ],
                    },
                ],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &marker_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        log::info!("[render] gpu ready, surface format {:?}", format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            format,
            pano_pipeline,
            pano_uniforms,
            pano_bgl,
            pano_bind_group,
            pano_sampler,
            _pano_texture: pano_texture,
            sphere_vb,
            sphere_ib,
            sphere_index_count,
            marker_pipeline,
            marker_uniforms,
            marker_bind_group,
            quad_vb,
            instance_vb,
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

    pub fn aspect(&self) -> f32 {
        self.width as f32 / (self.height as f32).max(1.0)
    }

    /// Swap in a freshly decoded equirectangular image. Called only after
    /// the decode completes, so the previous panorama stays up during the
    /// load.
    pub fn set_panorama_pixels(&mut self, width: u32, height: u32, rgba: &[u8]) {
        let texture = create_panorama_texture(&self.device, &self.queue, width, height, rgba);
        self.pano_bind_group = create_panorama_bind_group(
            &self.device,
            &self.pano_bgl,
            &self.pano_uniforms,
            &texture,
            &self.pano_sampler,
        );
        self._pano_texture = texture;
    }

    pub fn render(
        &mut self,
        orientation: Quat,
        markers: &[MarkerInstance],
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let target = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let proj = Mat4::perspective_rh(CAMERA_FOV_RADIANS, self.aspect(), CAMERA_NEAR, CAMERA_FAR);
        let view = Mat4::from_quat(orientation).inverse();
        let srgb_flag = if self.format.is_srgb() { 1.0 } else { 0.0 };
        self.queue.write_buffer(
            &self.pano_uniforms,
            0,
            bytemuck::bytes_of(&PanoramaUniforms {
                view_proj: (proj * view).to_cols_array_2d(),
                output_params: [srgb_flag, 1.0, 0.0, 0.0],
            }),
        );
        self.queue.write_buffer(
            &self.marker_uniforms,
            0,
            bytemuck::bytes_of(&MarkerUniforms {
                view: view.to_cols_array_2d(),
                proj: proj.to_cols_array_2d(),
            }),
        );
        let marker_count = markers.len().min(MAX_MARKERS);
        if marker_count > 0 {
            self.queue.write_buffer(
                &self.instance_vb,
                0,
                bytemuck::cast_slice(&markers[..marker_count]),
            );
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pano_pipeline);
            rpass.set_bind_group(0, &self.pano_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.sphere_vb.slice(..));
            rpass.set_index_buffer(self.sphere_ib.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.sphere_index_count, 0, 0..1);

            if marker_count > 0 {
                rpass.set_pipeline(&self.marker_pipeline);
                rpass.set_bind_group(0, &self.marker_bind_group, &[]);
                rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
                rpass.draw(0..6, 0..marker_count as u32);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_panorama_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    width: u32,
    height: u32,
    rgba: &[u8],
) -> wgpu::Texture {
    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("panorama"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        texture.as_image_copy(),
        rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );
    texture
}

fn create_panorama_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    uniforms: &wgpu::Buffer,
    texture: &wgpu::Texture,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("pano_bg"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}
