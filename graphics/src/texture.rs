//! Texture creation and the depth target.

use std::path::Path;

use crate::device::GraphicsDevice;
use crate::error::GraphicsError;

/// A 2D RGBA8 texture with its view and sampler.
///
/// The sampler uses repeat addressing so the `texture_scale` uniform
/// can tile the image past `[0, 1]`.
pub struct Texture {
    texture: wgpu::Texture,
    /// Sampled view bound to the fragment shader.
    pub view: wgpu::TextureView,
    /// Linear-filtering, repeat-addressing sampler.
    pub sampler: wgpu::Sampler,
}

impl Texture {
    /// Create a texture from raw RGBA8 pixels.
    pub fn from_rgba8(
        device: &GraphicsDevice,
        width: u32,
        height: u32,
        pixels: &[u8],
        label: &str,
    ) -> Result<Self, GraphicsError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(GraphicsError::InvalidParameter(format!(
                "texture '{label}': got {} bytes, expected {expected} for {width}x{height} RGBA8",
                pixels.len()
            )));
        }

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.device().create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        device.queue().write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(width * 4),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.device().create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        Ok(Self {
            texture,
            view,
            sampler,
        })
    }

    /// Load a texture from an image file (PNG or JPEG).
    pub fn from_path(device: &GraphicsDevice, path: &Path) -> Result<Self, GraphicsError> {
        let bytes = std::fs::read(path)
            .map_err(|e| GraphicsError::TextureLoad(format!("{}: {e}", path.display())))?;
        let img = image::load_from_memory(&bytes)
            .map_err(|e| GraphicsError::TextureLoad(format!("{}: {e}", path.display())))?;
        let rgba = img.to_rgba8();
        let (width, height) = (rgba.width(), rgba.height());
        log::info!("Loaded texture {} ({width}x{height})", path.display());
        Self::from_rgba8(
            device,
            width,
            height,
            rgba.as_raw(),
            &path.display().to_string(),
        )
    }

    /// The underlying wgpu texture.
    pub fn raw(&self) -> &wgpu::Texture {
        &self.texture
    }
}

/// The depth attachment for the forward pass.
pub struct DepthTexture {
    /// View used as the frame's depth attachment.
    pub view: wgpu::TextureView,
}

impl DepthTexture {
    /// Depth format used by every pipeline in this crate.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Create a depth texture matching the swapchain size.
    pub fn new(device: &GraphicsDevice, width: u32, height: u32) -> Self {
        let texture = device.device().create_texture(&wgpu::TextureDescriptor {
            label: Some("depth"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { view }
    }
}
