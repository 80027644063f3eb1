//! WebGPU renderer.
//!
//! One render pass per frame over a shared depth buffer: sky gradient first,
//! then the lit opaque meshes, the line grid, and finally the alpha-blended
//! sprites sorted back to front. Per-entity transforms arrive packed in a
//! single instance buffer; each draw selects its instance by range.

use crate::assets::{AssetStore, TextureData};
use crate::constants::*;
use crate::geometry::{self, MeshData};
use crate::scene::{EntityKind, SceneFrame, SUN_POSITION};
use fnv::FnvHashMap;
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;
use web_sys as web;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    inv_view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    light: [f32; 4],
    ambient_time: [f32; 4],
    sun_dir: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct InstanceRaw {
    model: [[f32; 4]; 4],
    tint: [f32; 4],
    flags: [f32; 4],
}

const SPRITE_TEXTURED: f32 = 1.0;
const SPRITE_CLOUD: f32 = 2.0;

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

enum DrawKind {
    Rainbow,
    GradientBox,
    Grid,
    Model(&'static str),
    Sprite(Option<&'static str>),
}

struct DrawCmd {
    kind: DrawKind,
    instance: u32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,

    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    sprite_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,

    sky_pipeline: wgpu::RenderPipeline,
    mesh_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    sprite_pipeline: wgpu::RenderPipeline,

    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,

    rainbow: GpuMesh,
    gradient_box: GpuMesh,
    grid_buffer: wgpu::Buffer,
    grid_vertex_count: u32,

    model_meshes: FnvHashMap<&'static str, GpuMesh>,
    sprite_textures: FnvHashMap<&'static str, wgpu::BindGroup>,
    white_sprite: wgpu::BindGroup,

    width: u32,
    height: u32,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

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
            .unwrap_or(caps.formats[0]);
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
        let depth_view = create_depth_view(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/scene.wgsl").into()),
        });

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let sprite_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sprite_layout"),
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
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("sprite_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let mesh_only_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pipeline_layout"),
            bind_group_layouts: &[&globals_layout],
            push_constant_ranges: &[],
        });
        let sprite_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("sprite_pipeline_layout"),
                bind_group_layouts: &[&globals_layout, &sprite_layout],
                push_constant_ranges: &[],
            });

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<geometry::Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![
                0 => Float32x3, 1 => Float32x3, 2 => Float32x4, 3 => Float32x2,
            ],
        };
        let mesh_instance_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &wgpu::vertex_attr_array![
                4 => Float32x4, 5 => Float32x4, 6 => Float32x4, 7 => Float32x4,
                8 => Float32x4, 9 => Float32x4,
            ],
        };
        let sprite_instance_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &wgpu::vertex_attr_array![
                0 => Float32x4, 1 => Float32x4, 2 => Float32x4, 3 => Float32x4,
                4 => Float32x4, 5 => Float32x4,
            ],
        };

        let color_target = |blend| {
            Some(wgpu::ColorTargetState {
                format,
                blend,
                write_mask: wgpu::ColorWrites::ALL,
            })
        };
        let depth_state = |write, compare| {
            Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: write,
                depth_compare: compare,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            })
        };

        let sky_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sky_pipeline"),
            layout: Some(&mesh_only_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_sky"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_sky"),
                targets: &[color_target(None)],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: depth_state(false, wgpu::CompareFunction::Always),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let mesh_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mesh_pipeline"),
            layout: Some(&mesh_only_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_mesh"),
                buffers: &[vertex_layout.clone(), mesh_instance_layout.clone()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_mesh"),
                targets: &[color_target(None)],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: depth_state(true, wgpu::CompareFunction::Less),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let line_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("line_pipeline"),
            layout: Some(&mesh_only_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_mesh"),
                buffers: &[vertex_layout, mesh_instance_layout],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_unlit"),
                targets: &[color_target(None)],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            depth_stencil: depth_state(true, wgpu::CompareFunction::Less),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let sprite_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sprite_pipeline"),
            layout: Some(&sprite_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_sprite"),
                buffers: &[sprite_instance_layout],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_sprite"),
                targets: &[color_target(Some(wgpu::BlendState::ALPHA_BLENDING))],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState::default(),
            // Sprites test depth but never write it, so they overlap cleanly
            depth_stencil: depth_state(false, wgpu::CompareFunction::Less),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let rainbow = upload_mesh(
            &device,
            "rainbow",
            &geometry::torus_mesh(4.0, 0.9, 16, 64, [1.0, 1.0, 1.0, 1.0]),
        );
        let gradient_box = upload_mesh(&device, "gradient_box", &geometry::gradient_box_mesh());
        let grid_vertices = geometry::grid_lines(
            GRID_SIZE,
            GRID_DIVISIONS,
            [0.27, 0.27, 0.27, 1.0],
            [0.53, 0.53, 0.53, 1.0],
        );
        let grid_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("grid_vertices"),
            contents: bytemuck::cast_slice(&grid_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let instance_capacity = 32;
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instances"),
            size: (instance_capacity * std::mem::size_of::<InstanceRaw>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let white_sprite = create_sprite_bind_group(
            &device,
            &queue,
            &sprite_layout,
            &sampler,
            &TextureData {
                width: 1,
                height: 1,
                rgba: vec![255; 4],
            },
            "white_1x1",
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            globals_buffer,
            globals_bind_group,
            sprite_layout,
            sampler,
            sky_pipeline,
            mesh_pipeline,
            line_pipeline,
            sprite_pipeline,
            instance_buffer,
            instance_capacity,
            rainbow,
            gradient_box,
            grid_buffer,
            grid_vertex_count: grid_vertices.len() as u32,
            model_meshes: FnvHashMap::default(),
            sprite_textures: FnvHashMap::default(),
            white_sprite,
            width,
            height,
            time_accum: 0.0,
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
            self.depth_view = create_depth_view(&self.device, width, height);
        }
    }

    /// Upload any assets that finished loading since the last frame.
    fn sync_assets(&mut self, scene: &SceneFrame, assets: &AssetStore) {
        for inst in &scene.instances {
            let Some(path) = inst.asset else { continue };
            match inst.kind {
                EntityKind::Model => {
                    if !self.model_meshes.contains_key(path) {
                        if let Some(mesh) = assets.mesh(path) {
                            self.model_meshes
                                .insert(path, upload_mesh(&self.device, path, mesh));
                        }
                    }
                }
                EntityKind::Letter => {
                    if !self.sprite_textures.contains_key(path) {
                        if let Some(texture) = assets.texture(path) {
                            let bg = create_sprite_bind_group(
                                &self.device,
                                &self.queue,
                                &self.sprite_layout,
                                &self.sampler,
                                texture,
                                path,
                            );
                            self.sprite_textures.insert(path, bg);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /// Pack the frame's instances in draw order. Opaque entities first, then
    /// sprites back to front; entities whose assets are not ready are left out.
    fn build_draw_list(&self, scene: &SceneFrame) -> (Vec<InstanceRaw>, Vec<DrawCmd>) {
        let view = Mat4::look_at_rh(scene.camera.eye, scene.camera.target, Vec3::Y);
        let mut raw = Vec::with_capacity(scene.instances.len());
        let mut cmds = Vec::with_capacity(scene.instances.len());
        let mut push = |inst: &crate::scene::EntityInstance, kind: DrawKind, flag: f32| {
            let i = raw.len() as u32;
            raw.push(InstanceRaw {
                model: inst.model.to_cols_array_2d(),
                tint: inst.tint.to_array(),
                flags: [flag, 0.0, 0.0, 0.0],
            });
            cmds.push(DrawCmd { kind, instance: i });
        };

        for inst in &scene.instances {
            match inst.kind {
                EntityKind::Rainbow => push(inst, DrawKind::Rainbow, 0.0),
                EntityKind::GradientBox => push(inst, DrawKind::GradientBox, 0.0),
                EntityKind::Grid => push(inst, DrawKind::Grid, 0.0),
                EntityKind::Model => {
                    let Some(path) = inst.asset else { continue };
                    if self.model_meshes.contains_key(path) {
                        push(inst, DrawKind::Model(path), 0.0);
                    }
                }
                _ => {}
            }
        }

        let mut sprites: Vec<(f32, &crate::scene::EntityInstance, f32)> = Vec::new();
        for inst in &scene.instances {
            let flag = match inst.kind {
                EntityKind::Cloud => SPRITE_CLOUD,
                EntityKind::Letter => {
                    let Some(path) = inst.asset else { continue };
                    if !self.sprite_textures.contains_key(path) {
                        continue;
                    }
                    SPRITE_TEXTURED
                }
                _ => continue,
            };
            let center = inst.model.transform_point3(Vec3::ZERO);
            let depth = view.transform_point3(center).z;
            sprites.push((depth, inst, flag));
        }
        // View-space z is negative in front of the camera; ascending order
        // puts the farthest sprite first.
        sprites.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        for (_, inst, flag) in sprites {
            let sprite = if flag == SPRITE_CLOUD { None } else { inst.asset };
            push(inst, DrawKind::Sprite(sprite), flag);
        }

        (raw, cmds)
    }

    fn write_instances(&mut self, raw: &[InstanceRaw]) {
        if raw.len() > self.instance_capacity {
            self.instance_capacity = raw.len().next_power_of_two();
            self.instance_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("instances"),
                size: (self.instance_capacity * std::mem::size_of::<InstanceRaw>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
        }
        if !raw.is_empty() {
            self.queue
                .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(raw));
        }
    }

    pub fn render(
        &mut self,
        scene: &SceneFrame,
        assets: &AssetStore,
        dt_sec: f32,
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        self.sync_assets(scene, assets);

        let aspect = self.width.max(1) as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(scene.camera.fovy, aspect, CAMERA_ZNEAR, CAMERA_ZFAR);
        let view = Mat4::look_at_rh(scene.camera.eye, scene.camera.target, Vec3::Y);
        let view_proj = proj * view;
        let light = scene.lights.first().copied().unwrap_or(crate::scene::LightNode {
            position: Vec3::new(10.0, 10.0, 10.0),
            intensity: 1.0,
        });
        let globals = Globals {
            view_proj: view_proj.to_cols_array_2d(),
            inv_view_proj: view_proj.inverse().to_cols_array_2d(),
            camera_pos: scene.camera.eye.extend(1.0).to_array(),
            light: light.position.extend(light.intensity).to_array(),
            ambient_time: [scene.ambient, self.time_accum, 0.0, 0.0],
            sun_dir: SUN_POSITION.normalize().extend(0.0).to_array(),
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        let (raw, cmds) = self.build_draw_list(scene);
        self.write_instances(&raw);

        let frame = self.surface.get_current_texture()?;
        let target = frame
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
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            rpass.set_pipeline(&self.sky_pipeline);
            rpass.draw(0..3, 0..1);

            for cmd in &cmds {
                let range = cmd.instance..cmd.instance + 1;
                match cmd.kind {
                    DrawKind::Rainbow | DrawKind::GradientBox | DrawKind::Model(_) => {
                        let mesh = match cmd.kind {
                            DrawKind::Rainbow => &self.rainbow,
                            DrawKind::GradientBox => &self.gradient_box,
                            DrawKind::Model(path) => match self.model_meshes.get(path) {
                                Some(m) => m,
                                None => continue,
                            },
                            _ => unreachable!(),
                        };
                        rpass.set_pipeline(&self.mesh_pipeline);
                        rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                        rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
                        rpass
                            .set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                        rpass.draw_indexed(0..mesh.index_count, 0, range);
                    }
                    DrawKind::Grid => {
                        rpass.set_pipeline(&self.line_pipeline);
                        rpass.set_vertex_buffer(0, self.grid_buffer.slice(..));
                        rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
                        rpass.draw(0..self.grid_vertex_count, range);
                    }
                    DrawKind::Sprite(texture) => {
                        let bg = texture
                            .and_then(|path| self.sprite_textures.get(path))
                            .unwrap_or(&self.white_sprite);
                        rpass.set_pipeline(&self.sprite_pipeline);
                        rpass.set_bind_group(1, bg, &[]);
                        rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
                        rpass.draw(0..6, range);
                    }
                }
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn upload_mesh(device: &wgpu::Device, label: &str, mesh: &MeshData) -> GpuMesh {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let indices: Vec<u32> = if mesh.is_indexed() {
        mesh.indices.clone()
    } else {
        (0..mesh.vertices.len() as u32).collect()
    };
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    GpuMesh {
        vertex_buffer,
        index_buffer,
        index_count: indices.len() as u32,
    }
}

fn create_sprite_bind_group(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    data: &TextureData,
    label: &str,
) -> wgpu::BindGroup {
    let size = wgpu::Extent3d {
        width: data.width,
        height: data.height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &data.rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * data.width),
            rows_per_image: Some(data.height),
        },
        size,
    );
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}
