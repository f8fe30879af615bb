//! Graphics device creation.

use std::sync::Arc;

use winit::window::Window;

use crate::error::GraphicsError;
use crate::surface::Surface;

/// The wgpu instance, adapter, device, and queue bundled together.
///
/// Creation is synchronous (`pollster::block_on`); the whole program is
/// a single blocking thread of control.
pub struct GraphicsDevice {
    instance: wgpu::Instance,
    adapter: wgpu::Adapter,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
}

impl GraphicsDevice {
    /// Create a device and a surface for the given window.
    ///
    /// The adapter is selected for compatibility with the surface so the
    /// preferred swapchain format can be chosen up front.
    pub fn for_window(window: Arc<Window>) -> Result<(Self, Surface), GraphicsError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            flags: wgpu::InstanceFlags::default(),
            backend_options: wgpu::BackendOptions::default(),
            memory_budget_thresholds: wgpu::MemoryBudgetThresholds::default(),
        });

        let surface = instance.create_surface(window).map_err(|e| {
            GraphicsError::InitializationFailed(format!("Failed to create surface: {e}"))
        })?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .map_err(|e| {
            GraphicsError::InitializationFailed(format!("No compatible GPU adapter: {e}"))
        })?;

        log::info!("wgpu adapter: {:?}", adapter.get_info());

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("Terrella Device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: wgpu::MemoryHints::default(),
            trace: wgpu::Trace::Off,
        }))
        .map_err(|e| {
            GraphicsError::InitializationFailed(format!("Device creation failed: {e}"))
        })?;

        let surface = Surface::new(surface, &adapter);

        Ok((
            Self {
                instance,
                adapter,
                device: Arc::new(device),
                queue: Arc::new(queue),
            },
            surface,
        ))
    }

    /// Get the wgpu instance.
    pub fn instance(&self) -> &wgpu::Instance {
        &self.instance
    }

    /// Get the wgpu adapter.
    pub fn adapter(&self) -> &wgpu::Adapter {
        &self.adapter
    }

    /// Get the wgpu device.
    pub fn device(&self) -> &Arc<wgpu::Device> {
        &self.device
    }

    /// Get the wgpu queue.
    pub fn queue(&self) -> &Arc<wgpu::Queue> {
        &self.queue
    }
}
