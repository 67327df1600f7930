//! Native desktop front-end: loads the mock database from disk and drives
//! the same core viewer as the web build. No immersive path here; a VR
//! tour silently falls back to flat viewing.

use std::path::{Path, PathBuf};
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

use glam::{Mat4, Quat};
use viewer_core::{
    panorama_sphere_mesh, CapabilitySnapshot, HotspotKind, MockDb, SphereMesh, Viewer,
    CAMERA_FAR, CAMERA_FOV_RADIANS, CAMERA_NEAR, MARKER_SCALE, MAX_MARKERS,
    PANORAMA_RADIUS, PANORAMA_SEGMENTS, PLACEHOLDER_RGBA,
};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PanoramaUniforms {
    view_proj: [[f32; 4]; 4],
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
struct MarkerInstance {
    pos: [f32; 3],
    scale: f32,
    icon: u32,
    _pad: [u32; 3],
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    format: wgpu::TextureFormat,

    pano_pipeline: wgpu::RenderPipeline,
    pano_uniforms: wgpu::Buffer,
    pano_bgl: wgpu::BindGroupLayout,
    pano_bind_group: wgpu::BindGroup,
    pano_sampler: wgpu::Sampler,
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

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

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
                    wgpu::VertexBufferLayout {
                        array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &[wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x2,
                            offset: 0,
                            shader_location: 0,
                        }],
                    },
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

        Ok(Self {
            window,
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

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn aspect(&self) -> f32 {
        self.width as f32 / (self.height as f32).max(1.0)
    }

    fn set_panorama_pixels(&mut self, width: u32, height: u32, rgba: &[u8]) {
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

    fn render(
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

/// Resolve a db image url against the database file's directory. Urls in
/// the mock db are site-absolute ("/panoramas/a.jpg").
fn resolve_image_path(base: &Path, url: &str) -> PathBuf {
    base.join(url.trim_start_matches('/'))
}

fn load_current_panorama(gpu: &mut GpuState, viewer: &Viewer<u32>, base: &Path) {
    let Some(scene) = viewer.navigator().current() else {
        return;
    };
    let path = resolve_image_path(base, &scene.image_url);
    match image::open(&path) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let (w, h) = rgba.dimensions();
            gpu.set_panorama_pixels(w, h, &rgba);
            log::info!("[scene] {} panorama loaded ({}x{})", scene.id, w, h);
        }
        Err(e) => {
            log::error!("[scene] failed to load {}: {e}", path.display());
        }
    }
}

fn marker_instances(viewer: &Viewer<u32>) -> Vec<MarkerInstance> {
    let mut markers = Vec::new();
    if let Some(scene) = viewer.navigator().current() {
        for hotspot in scene.hotspots.iter().take(MAX_MARKERS) {
            markers.push(MarkerInstance {
                pos: hotspot.position.to_array(),
                scale: MARKER_SCALE,
                icon: hotspot.icon().index(),
                _pad: [0; 3],
            });
        }
    }
    markers
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    let usage = "usage: viewer-native <db.json> <tour-id> [scene-id]";
    let db_path = args.next().ok_or_else(|| anyhow::anyhow!(usage))?;
    let tour_id = args.next().ok_or_else(|| anyhow::anyhow!(usage))?;
    let initial_scene = args.next();

    let db = MockDb::from_json(&std::fs::read_to_string(&db_path)?)?;
    let (tour, scenes, _issues) = db.load_tour(&tour_id)?;
    log::info!(
        "[mount] tour {} mode {:?} with {} scene(s)",
        tour.id,
        tour.mode,
        scenes.len()
    );
    let base = Path::new(&db_path)
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    // No immersive API on the desktop: every tour negotiates to flat web
    // viewing.
    let (mut viewer, _directive) = Viewer::<u32>::new(
        tour,
        scenes,
        CapabilitySnapshot::none(),
        initial_scene.as_deref(),
    );
    let _ = viewer.lifecycle_mut().attach_renderer();

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("Panorama Tour (native)")
        .build(&event_loop)
        .expect("window");

    let mut state = pollster::block_on(GpuState::new(&window)).expect("gpu");
    load_current_panorama(&mut state, &viewer, &base);

    // Last pointer position, normalized to [-1, 1] with y down.
    let mut pointer = (0.0f32, 0.0f32);

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => state.resize(size),
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => {
                let size = state.window.inner_size();
                let nx = (position.x as f32 / (size.width as f32).max(1.0)) * 2.0 - 1.0;
                let ny = (position.y as f32 / (size.height as f32).max(1.0)) * 2.0 - 1.0;
                pointer = (nx, ny);
                viewer.orientation_mut().pointer_moved(nx, ny);
            }
            Event::WindowEvent {
                event:
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button: MouseButton::Left,
                        ..
                    },
                ..
            } => {
                let hit = viewer.pick_hotspot_at(pointer.0, -pointer.1, state.aspect());
                if let Some(index) = hit {
                    if let Some(hotspot) = viewer.hotspot_clicked(index) {
                        log::info!("[click] hotspot {} ({:?})", hotspot.id, hotspot.kind);
                        if hotspot.kind == HotspotKind::Navigation {
                            if let Some(target) = viewer.navigation_target_index(&hotspot) {
                                if viewer.navigator_mut().select_by_index(target) {
                                    load_current_panorama(&mut state, &viewer, &base);
                                }
                            }
                        } else if let Some(title) = &hotspot.title {
                            log::info!("[click] {}", title);
                        }
                        viewer.clear_interaction();
                    }
                }
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event: key, .. },
                ..
            } if key.state == ElementState::Pressed => match key.logical_key {
                Key::Named(NamedKey::Escape) => elwt.exit(),
                Key::Character(ref c) if c.as_str() == "n" => {
                    viewer.navigator_mut().next();
                    load_current_panorama(&mut state, &viewer, &base);
                }
                Key::Character(ref c) if c.as_str() == "p" => {
                    viewer.navigator_mut().prev();
                    load_current_panorama(&mut state, &viewer, &base);
                }
                _ => {}
            },
            Event::AboutToWait => {
                viewer.begin_frame();
                let markers = marker_instances(&viewer);
                let orientation = viewer.orientation().orientation();
                match state.render(orientation, &markers) {
                    Ok(_) => state.window.request_redraw(),
                    Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(_) => {}
                }
            }
            _ => {}
        })
        .unwrap();
    Ok(())
}
