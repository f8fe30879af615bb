//! # Terrella Graphics
//!
//! A thin forward renderer over wgpu. This crate owns the GPU boundary:
//! device and surface setup, mesh and texture upload, and the two WGSL
//! pipelines (lit textured models, equirectangular skybox) the demos
//! draw with.
//!
//! ## Overview
//!
//! - [`GraphicsDevice`] - wgpu instance/adapter/device/queue
//! - [`Surface`] - swapchain configuration and frame acquisition
//! - [`Mesh`] - GPU vertex/index buffers uploaded from
//!   [`MeshData`](terrella_core::mesh::MeshData)
//! - [`Texture`] / [`DepthTexture`] - 2D textures and the depth target
//! - [`ForwardRenderer`] - per-frame uniform upload and draw submission
//! - [`Model`] / [`Skybox`] - drawable objects owning their bind groups

mod device;
mod error;
mod mesh;
mod model;
mod renderer;
mod surface;
mod texture;

pub use device::GraphicsDevice;
pub use error::GraphicsError;
pub use mesh::Mesh;
pub use model::{Model, Skybox};
pub use renderer::{ForwardRenderer, FrameInput};
pub use surface::{Surface, SurfaceFrame};
pub use texture::{DepthTexture, Texture};

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the graphics subsystem.
pub fn init() {
    log::info!("Terrella Graphics v{} initialized", VERSION);
}
