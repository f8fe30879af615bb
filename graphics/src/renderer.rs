//! The forward renderer: two WGSL pipelines and per-frame uniform
//! upload.
//!
//! Each frame is a single render pass: the skybox first (depth writes
//! off), then every model through the lit-textured pipeline. Point
//! lights arrive as a fixed-size uniform array sized by
//! [`MAX_POINT_LIGHTS`]; the live count rides in the same uniform.

use std::sync::Arc;

use bytemuck::Zeroable;

use terrella_core::math::mat4_to_cols_array_2d;
use terrella_core::scene::{Camera, SceneLights, Transform, MAX_POINT_LIGHTS};

use crate::device::GraphicsDevice;
use crate::mesh::{wgpu_vertex_attributes, Mesh};
use crate::model::{Model, Skybox};
use crate::texture::{DepthTexture, Texture};

// === WGSL shaders ===

const MODEL_SHADER: &str = r#"
struct Camera {
    view: mat4x4<f32>,
    proj: mat4x4<f32>,
}

struct PointLight {
    // xyz = position, w = intensity
    position_intensity: vec4<f32>,
    // xyz = color, w = quadratic attenuation
    color_attenuation: vec4<f32>,
}

struct Lights {
    count: u32,
    ambient: f32,
    _pad0: u32,
    _pad1: u32,
    lights: array<PointLight, 8>,
}

struct ModelData {
    model: mat4x4<f32>,
    tex_scale: f32,
    _pad0: f32,
    _pad1: f32,
    _pad2: f32,
}

@group(0) @binding(0) var<uniform> camera: Camera;
@group(0) @binding(1) var<uniform> lights: Lights;
@group(1) @binding(0) var<uniform> model_data: ModelData;
@group(1) @binding(1) var tex0: texture_2d<f32>;
@group(1) @binding(2) var tex0_sampler: sampler;

struct VsOut {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
}

@vertex
fn vs_main(
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
) -> VsOut {
    var out: VsOut;
    let world = model_data.model * vec4<f32>(position, 1.0);
    out.clip_position = camera.proj * camera.view * world;
    out.world_position = world.xyz;
    out.normal = (model_data.model * vec4<f32>(normal, 0.0)).xyz;
    out.uv = uv * model_data.tex_scale;
    return out;
}

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    let base = textureSample(tex0, tex0_sampler, in.uv);
    let n = normalize(in.normal);
    var lighting = vec3<f32>(lights.ambient);
    for (var i = 0u; i < lights.count; i += 1u) {
        let light = lights.lights[i];
        let to_light = light.position_intensity.xyz - in.world_position;
        let dist_sq = dot(to_light, to_light);
        let diffuse = max(dot(n, normalize(to_light)), 0.0);
        let falloff = light.position_intensity.w / (1.0 + light.color_attenuation.w * dist_sq);
        lighting += light.color_attenuation.xyz * diffuse * falloff;
    }
    return vec4<f32>(base.rgb * lighting, base.a);
}
"#;

const SKYBOX_SHADER: &str = r#"
struct Camera {
    view: mat4x4<f32>,
    proj: mat4x4<f32>,
}

@group(0) @binding(0) var<uniform> camera: Camera;
@group(0) @binding(1) var sky_texture: texture_2d<f32>;
@group(0) @binding(2) var sky_sampler: sampler;

struct VsOut {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) direction: vec3<f32>,
}

const PI: f32 = 3.14159265;

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> VsOut {
    var out: VsOut;
    out.direction = position;
    out.clip_position = camera.proj * camera.view * vec4<f32>(position, 1.0);
    return out;
}

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    // Equirectangular projection of the view direction; the seam at
    // longitude +-pi matches the icosphere UV mapping.
    let dir = normalize(in.direction);
    let u = 0.5 + atan2(dir.z, dir.x) / (2.0 * PI);
    let v = 0.5 - asin(clamp(dir.y, -1.0, 1.0)) / PI;
    return textureSample(sky_texture, sky_sampler, vec2<f32>(u, v));
}
"#;

// === Uniform data ===

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CameraUniform {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ModelUniform {
    model: [[f32; 4]; 4],
    tex_scale: f32,
    _pad: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointLightUniform {
    position_intensity: [f32; 4],
    color_attenuation: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LightsUniform {
    count: u32,
    ambient: f32,
    _pad: [u32; 2],
    lights: [PointLightUniform; MAX_POINT_LIGHTS],
}

impl LightsUniform {
    fn from_scene(lights: &SceneLights) -> Self {
        let mut packed = [PointLightUniform::zeroed(); MAX_POINT_LIGHTS];
        for (slot, light) in packed.iter_mut().zip(lights.iter()) {
            *slot = PointLightUniform {
                position_intensity: [
                    light.position.x,
                    light.position.y,
                    light.position.z,
                    light.intensity,
                ],
                color_attenuation: [
                    light.color.x,
                    light.color.y,
                    light.color.z,
                    light.attenuation,
                ],
            };
        }
        Self {
            count: lights.len() as u32,
            ambient: lights.ambient,
            _pad: [0; 2],
            lights: packed,
        }
    }
}

// === Renderer ===

/// Per-frame render targets and clear state.
pub struct FrameInput<'a> {
    /// Color attachment (usually the acquired swapchain view).
    pub color_view: &'a wgpu::TextureView,
    /// Depth attachment.
    pub depth_view: &'a wgpu::TextureView,
    /// Clear color for the frame.
    pub clear_color: wgpu::Color,
    /// Width / height of the target, for the projection matrix.
    pub aspect: f32,
}

/// Forward renderer with a lit-textured model pipeline and a skybox
/// pipeline.
pub struct ForwardRenderer {
    model_pipeline: wgpu::RenderPipeline,
    model_pipeline_no_depth: wgpu::RenderPipeline,
    skybox_pipeline: wgpu::RenderPipeline,
    model_layout: wgpu::BindGroupLayout,
    skybox_layout: wgpu::BindGroupLayout,
    camera_buffer: wgpu::Buffer,
    lights_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    depth_test: bool,
}

fn uniform_entry(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
            view_dimension: wgpu::TextureViewDimension::D2,
            multisampled: false,
        },
        count: None,
    }
}

fn sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

fn create_uniform_buffer(device: &GraphicsDevice, label: &str, size: u64) -> wgpu::Buffer {
    device.device().create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl ForwardRenderer {
    /// Build the pipelines for the given swapchain format.
    pub fn new(device: &GraphicsDevice, surface_format: wgpu::TextureFormat) -> Self {
        let gpu = device.device();

        let model_shader = gpu.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("model shader"),
            source: wgpu::ShaderSource::Wgsl(MODEL_SHADER.into()),
        });
        let skybox_shader = gpu.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("skybox shader"),
            source: wgpu::ShaderSource::Wgsl(SKYBOX_SHADER.into()),
        });

        let frame_layout = gpu.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame bindings"),
            entries: &[
                uniform_entry(0, wgpu::ShaderStages::VERTEX),
                uniform_entry(1, wgpu::ShaderStages::FRAGMENT),
            ],
        });
        let model_layout = gpu.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("model bindings"),
            entries: &[
                uniform_entry(0, wgpu::ShaderStages::VERTEX),
                texture_entry(1),
                sampler_entry(2),
            ],
        });
        let skybox_layout = gpu.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("skybox bindings"),
            entries: &[
                uniform_entry(0, wgpu::ShaderStages::VERTEX),
                texture_entry(1),
                sampler_entry(2),
            ],
        });

        let camera_buffer = create_uniform_buffer(
            device,
            "camera uniform",
            std::mem::size_of::<CameraUniform>() as u64,
        );
        let lights_buffer = create_uniform_buffer(
            device,
            "lights uniform",
            std::mem::size_of::<LightsUniform>() as u64,
        );
        let frame_bind_group = gpu.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame bindings"),
            layout: &frame_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: lights_buffer.as_entire_binding(),
                },
            ],
        });

        let model_pipeline_layout = gpu.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("model pipeline layout"),
            bind_group_layouts: &[&frame_layout, &model_layout],
            push_constant_ranges: &[],
        });
        let skybox_pipeline_layout = gpu.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("skybox pipeline layout"),
            bind_group_layouts: &[&skybox_layout],
            push_constant_ranges: &[],
        });

        let pnu_layout = terrella_core::mesh::VertexLayout::position_normal_uv();
        let pnu_attributes = wgpu_vertex_attributes(&pnu_layout);
        let position_layout = terrella_core::mesh::VertexLayout::position_only();
        let position_attributes = wgpu_vertex_attributes(&position_layout);

        let make_model_pipeline = |depth_test: bool| {
            gpu.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(if depth_test {
                    "model pipeline"
                } else {
                    "model pipeline (no depth)"
                }),
                layout: Some(&model_pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &model_shader,
                    entry_point: Some("vs_main"),
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: pnu_layout.stride as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &pnu_attributes,
                    }],
                },
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: Some(wgpu::Face::Back),
                    unclipped_depth: false,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DepthTexture::FORMAT,
                    depth_write_enabled: depth_test,
                    depth_compare: if depth_test {
                        wgpu::CompareFunction::Less
                    } else {
                        wgpu::CompareFunction::Always
                    },
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                fragment: Some(wgpu::FragmentState {
                    module: &model_shader,
                    entry_point: Some("fs_main"),
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                multiview: None,
                cache: None,
            })
        };
        let model_pipeline = make_model_pipeline(true);
        let model_pipeline_no_depth = make_model_pipeline(false);

        let skybox_pipeline = gpu.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("skybox pipeline"),
            layout: Some(&skybox_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &skybox_shader,
                entry_point: Some("vs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: position_layout.stride as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &position_attributes,
                }],
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DepthTexture::FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Always,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &skybox_shader,
                entry_point: Some("fs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            multiview: None,
            cache: None,
        });

        log::info!("Forward renderer ready ({surface_format:?})");

        Self {
            model_pipeline,
            model_pipeline_no_depth,
            skybox_pipeline,
            model_layout,
            skybox_layout,
            camera_buffer,
            lights_buffer,
            frame_bind_group,
            depth_test: true,
        }
    }

    /// Toggle depth testing for the model pass.
    pub fn set_depth_test(&mut self, enabled: bool) {
        self.depth_test = enabled;
    }

    /// Whether the model pass depth-tests.
    pub fn depth_test(&self) -> bool {
        self.depth_test
    }

    /// Create a drawable model from an uploaded mesh and texture.
    pub fn create_model(
        &self,
        device: &GraphicsDevice,
        mesh: Arc<Mesh>,
        texture: Arc<Texture>,
    ) -> Model {
        let uniform_buffer = create_uniform_buffer(
            device,
            "model uniform",
            std::mem::size_of::<ModelUniform>() as u64,
        );
        let bind_group = device.device().create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("model bindings"),
            layout: &self.model_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
        });
        Model {
            mesh,
            texture,
            uniform_buffer,
            bind_group,
            transform: Transform::identity(),
            texture_scale: 1.0,
        }
    }

    /// Create the skybox from a position-only shell mesh and an
    /// equirectangular sky texture.
    pub fn create_skybox(
        &self,
        device: &GraphicsDevice,
        mesh: Arc<Mesh>,
        texture: Arc<Texture>,
    ) -> Skybox {
        let uniform_buffer = create_uniform_buffer(
            device,
            "skybox uniform",
            std::mem::size_of::<CameraUniform>() as u64,
        );
        let bind_group = device.device().create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("skybox bindings"),
            layout: &self.skybox_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
        });
        Skybox {
            mesh,
            texture,
            uniform_buffer,
            bind_group,
        }
    }

    /// Render one frame: upload the frame uniforms, then draw the
    /// skybox (if any) followed by every model.
    pub fn draw(
        &self,
        device: &GraphicsDevice,
        frame: &FrameInput<'_>,
        camera: &Camera,
        skybox: Option<&Skybox>,
        models: &[&Model],
        lights: &SceneLights,
    ) {
        let queue = device.queue();

        let camera_uniform = CameraUniform {
            view: mat4_to_cols_array_2d(&camera.view_matrix()),
            proj: mat4_to_cols_array_2d(&camera.projection_matrix(frame.aspect)),
        };
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::bytes_of(&camera_uniform),
        );
        queue.write_buffer(
            &self.lights_buffer,
            0,
            bytemuck::bytes_of(&LightsUniform::from_scene(lights)),
        );

        if let Some(skybox) = skybox {
            let sky_uniform = CameraUniform {
                view: mat4_to_cols_array_2d(&camera.rotation_view_matrix()),
                proj: mat4_to_cols_array_2d(&camera.projection_matrix(frame.aspect)),
            };
            queue.write_buffer(&skybox.uniform_buffer, 0, bytemuck::bytes_of(&sky_uniform));
        }

        for model in models {
            let model_uniform = ModelUniform {
                model: mat4_to_cols_array_2d(&model.transform.matrix()),
                tex_scale: model.texture_scale,
                _pad: [0.0; 3],
            };
            queue.write_buffer(
                &model.uniform_buffer,
                0,
                bytemuck::bytes_of(&model_uniform),
            );
        }

        let mut encoder = device
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("forward pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: frame.color_view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(frame.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: frame.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let Some(skybox) = skybox {
                pass.set_pipeline(&self.skybox_pipeline);
                pass.set_bind_group(0, &skybox.bind_group, &[]);
                pass.set_vertex_buffer(0, skybox.mesh.vertex_buffer().slice(..));
                pass.set_index_buffer(
                    skybox.mesh.index_buffer().slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                pass.draw_indexed(0..skybox.mesh.index_count(), 0, 0..1);
            }

            pass.set_pipeline(if self.depth_test {
                &self.model_pipeline
            } else {
                &self.model_pipeline_no_depth
            });
            pass.set_bind_group(0, &self.frame_bind_group, &[]);
            for model in models.iter().copied() {
                pass.set_bind_group(1, &model.bind_group, &[]);
                pass.set_vertex_buffer(0, model.mesh.vertex_buffer().slice(..));
                pass.set_index_buffer(
                    model.mesh.index_buffer().slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                pass.draw_indexed(0..model.mesh.index_count(), 0, 0..1);
            }
        }
        queue.submit(std::iter::once(encoder.finish()));
    }
}
