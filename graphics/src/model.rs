//! Drawable objects: textured models and the skybox shell.

use std::sync::Arc;

use terrella_core::scene::Transform;

use crate::mesh::Mesh;
use crate::texture::Texture;

/// A drawable object: mesh + texture + transform.
///
/// Created through
/// [`ForwardRenderer::create_model`](crate::ForwardRenderer::create_model),
/// which wires up the per-model uniform buffer and bind group. The
/// public fields are free to mutate between frames; the renderer
/// re-uploads the uniform data at draw time.
pub struct Model {
    pub(crate) mesh: Arc<Mesh>,
    pub(crate) texture: Arc<Texture>,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    /// Model-space-to-world transform, read at draw time.
    pub transform: Transform,
    /// UV multiplier for tiling the texture.
    pub texture_scale: f32,
}

impl Model {
    /// Returns this model with the given transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Returns this model with the given texture tiling factor.
    #[must_use]
    pub fn with_texture_scale(mut self, texture_scale: f32) -> Self {
        self.texture_scale = texture_scale;
        self
    }

    /// The uploaded mesh.
    pub fn mesh(&self) -> &Arc<Mesh> {
        &self.mesh
    }

    /// The bound texture.
    pub fn texture(&self) -> &Arc<Texture> {
        &self.texture
    }
}

/// The background shell: an inward-wound cube sampled with an
/// equirectangular projection of the view direction.
///
/// Created through
/// [`ForwardRenderer::create_skybox`](crate::ForwardRenderer::create_skybox).
/// Drawn first each frame with depth writes disabled, so everything
/// else renders over it.
pub struct Skybox {
    pub(crate) mesh: Arc<Mesh>,
    pub(crate) texture: Arc<Texture>,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

impl Skybox {
    /// The bound texture.
    pub fn texture(&self) -> &Arc<Texture> {
        &self.texture
    }
}
