//! Surface configuration and frame acquisition.

use crate::device::GraphicsDevice;
use crate::error::GraphicsError;

/// A window surface plus its current swapchain configuration.
pub struct Surface {
    inner: wgpu::Surface<'static>,
    format: wgpu::TextureFormat,
    width: u32,
    height: u32,
}

impl Surface {
    /// Wrap a wgpu surface, picking the preferred sRGB format from the
    /// adapter's capabilities.
    pub(crate) fn new(inner: wgpu::Surface<'static>, adapter: &wgpu::Adapter) -> Self {
        let caps = inner.get_capabilities(adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(caps.formats[0]);
        Self {
            inner,
            format,
            width: 0,
            height: 0,
        }
    }

    /// Configure the swapchain for the given physical size.
    pub fn configure(&mut self, device: &GraphicsDevice, width: u32, height: u32, vsync: bool) {
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: self.format,
            width,
            height,
            present_mode: if vsync {
                wgpu::PresentMode::Fifo
            } else {
                wgpu::PresentMode::Immediate
            },
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        self.inner.configure(device.device(), &config);
        self.width = width;
        self.height = height;
        log::info!(
            "Configured surface {}x{} ({:?}, vsync={})",
            width,
            height,
            self.format,
            vsync
        );
    }

    /// Acquire the next swapchain texture.
    pub fn acquire(&self) -> Result<SurfaceFrame, GraphicsError> {
        let texture = self.inner.get_current_texture().map_err(|e| match e {
            wgpu::SurfaceError::Outdated => GraphicsError::SurfaceOutdated,
            wgpu::SurfaceError::Lost => GraphicsError::SurfaceLost,
            other => {
                GraphicsError::ResourceCreationFailed(format!("Surface acquire failed: {other}"))
            }
        })?;
        let view = texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        Ok(SurfaceFrame { texture, view })
    }

    /// The swapchain texture format.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    /// Configured width in physical pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Configured height in physical pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// A swapchain texture acquired for one frame.
pub struct SurfaceFrame {
    texture: wgpu::SurfaceTexture,
    /// View used as the frame's color attachment.
    pub view: wgpu::TextureView,
}

impl SurfaceFrame {
    /// Present the frame to the window.
    pub fn present(self) {
        self.texture.present();
    }
}
