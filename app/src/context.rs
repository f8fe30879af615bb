//! Application and draw contexts.

use terrella_graphics::{DepthTexture, GraphicsDevice, Surface};

/// Application context providing access to graphics resources.
///
/// Available during all handler callbacks.
pub struct AppContext {
    pub(crate) device: GraphicsDevice,
    pub(crate) surface: Surface,
    pub(crate) depth_texture: DepthTexture,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) frame_number: u64,
    pub(crate) delta_time: f32,
    pub(crate) elapsed_time: f32,
    pub(crate) clear_color: wgpu::Color,
}

impl AppContext {
    /// Get the graphics device.
    pub fn device(&self) -> &GraphicsDevice {
        &self.device
    }

    /// Get the surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Get the depth texture matching the current surface size.
    pub fn depth_texture(&self) -> &DepthTexture {
        &self.depth_texture
    }

    /// Get the current window width in physical pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the current window height in physical pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the window aspect ratio.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Get the current frame number.
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Get the delta time since last frame in seconds.
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the elapsed time since application start in seconds.
    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    /// Get the frame clear color.
    pub fn clear_color(&self) -> wgpu::Color {
        self.clear_color
    }
}

/// Draw context for rendering a frame.
///
/// Provided during `on_draw`, wrapping the application context plus
/// the acquired swapchain view.
pub struct DrawContext<'a> {
    pub(crate) app: &'a mut AppContext,
    pub(crate) view: &'a wgpu::TextureView,
}

impl DrawContext<'_> {
    /// Get the graphics device.
    pub fn device(&self) -> &GraphicsDevice {
        &self.app.device
    }

    /// Get the swapchain view to render into.
    pub fn view(&self) -> &wgpu::TextureView {
        self.view
    }

    /// Get the depth view matching the swapchain size.
    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.app.depth_texture.view
    }

    /// Get the window aspect ratio.
    pub fn aspect_ratio(&self) -> f32 {
        self.app.aspect_ratio()
    }

    /// Get the frame clear color.
    pub fn clear_color(&self) -> wgpu::Color {
        self.app.clear_color
    }

    /// Get the delta time since last frame in seconds.
    pub fn delta_time(&self) -> f32 {
        self.app.delta_time
    }

    /// Get the elapsed time since application start in seconds.
    pub fn elapsed_time(&self) -> f32 {
        self.app.elapsed_time
    }

    /// Get the current frame number.
    pub fn frame_number(&self) -> u64 {
        self.app.frame_number
    }
}
