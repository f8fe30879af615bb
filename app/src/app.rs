//! Main application struct and event loop.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use terrella_graphics::{DepthTexture, GraphicsDevice, GraphicsError};

use crate::args::AppArgs;
use crate::context::{AppContext, DrawContext};
use crate::handler::AppHandler;

/// Main application struct that manages the window and graphics.
///
/// The whole program is one synchronous, blocking loop: each redraw
/// updates scene state through the handler, then issues the frame's
/// draw calls. There is exactly one thread of control for the entire
/// program lifetime.
pub struct App<H, A>
where
    H: AppHandler,
    A: AppArgs,
{
    handler: H,
    args: A,
    window: Option<Arc<Window>>,
    context: Option<AppContext>,
    start_time: Instant,
    last_frame_time: Instant,
    running: bool,
    initialized: bool,
}

impl<H, A> App<H, A>
where
    H: AppHandler + 'static,
    A: AppArgs + 'static,
{
    /// Create a new application.
    pub fn new(handler: H, args: A) -> Self {
        Self {
            handler,
            args,
            window: None,
            context: None,
            start_time: Instant::now(),
            last_frame_time: Instant::now(),
            running: true,
            initialized: false,
        }
    }

    /// Run the application with the given handler and arguments.
    ///
    /// This is the main entry point. It creates the event loop, window,
    /// and graphics context, then runs the main loop until the window
    /// is closed or the handler requests exit.
    ///
    /// # Panics
    ///
    /// Panics if the event loop or window cannot be created.
    pub fn run(handler: H, args: A) {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        terrella_core::init();
        terrella_graphics::init();
        crate::init();

        let event_loop = EventLoop::new().expect("Failed to create event loop");
        let mut app = Self::new(handler, args);
        event_loop.run_app(&mut app).expect("Event loop error");
    }

    /// Initialize graphics after window creation.
    fn init_graphics(&mut self) -> Result<(), GraphicsError> {
        let window = self
            .window
            .as_ref()
            .expect("init_graphics called without a window");

        let (device, mut surface) = GraphicsDevice::for_window(window.clone())?;

        let physical_size = window.inner_size();
        surface.configure(
            &device,
            physical_size.width,
            physical_size.height,
            self.args.vsync(),
        );
        let depth_texture = DepthTexture::new(&device, physical_size.width, physical_size.height);

        let [r, g, b] = self.args.clear_color();
        log::info!(
            "Graphics initialized ({}x{} physical)",
            physical_size.width,
            physical_size.height
        );

        self.context = Some(AppContext {
            device,
            surface,
            depth_texture,
            width: physical_size.width,
            height: physical_size.height,
            frame_number: 0,
            delta_time: 0.0,
            elapsed_time: 0.0,
            clear_color: wgpu::Color { r, g, b, a: 1.0 },
        });
        Ok(())
    }

    /// Reconfigure the swapchain and depth target, then notify the
    /// handler.
    fn apply_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let ctx = match &mut self.context {
            Some(c) => c,
            None => return,
        };
        if ctx.width == width && ctx.height == height {
            return;
        }

        ctx.width = width;
        ctx.height = height;
        let vsync = self.args.vsync();
        ctx.surface.configure(&ctx.device, width, height, vsync);
        ctx.depth_texture = DepthTexture::new(&ctx.device, width, height);
        self.handler.on_resize(ctx);
    }

    /// Render a frame.
    fn render_frame(&mut self) {
        let now = Instant::now();
        let delta_time = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        let ctx = match &mut self.context {
            Some(c) => c,
            None => return,
        };
        ctx.delta_time = delta_time;
        ctx.elapsed_time = now.duration_since(self.start_time).as_secs_f32();

        if !self.handler.on_update(ctx) {
            self.running = false;
            return;
        }

        let frame = match ctx.surface.acquire() {
            Ok(f) => f,
            Err(GraphicsError::SurfaceOutdated | GraphicsError::SurfaceLost) => {
                // Reconfigure with the current size and try again next
                // frame.
                let (width, height, vsync) = (ctx.width, ctx.height, self.args.vsync());
                ctx.surface.configure(&ctx.device, width, height, vsync);
                return;
            }
            Err(e) => {
                log::warn!("Failed to acquire swapchain texture: {e}");
                return;
            }
        };

        let mut draw_ctx = DrawContext {
            app: ctx,
            view: &frame.view,
        };
        self.handler.on_draw(&mut draw_ctx);
        frame.present();

        ctx.frame_number += 1;
        if let Some(max_frames) = self.args.max_frames() {
            if ctx.frame_number >= max_frames {
                log::info!("Reached max frames limit ({max_frames}), exiting");
                self.running = false;
            }
        }
    }
}

impl<H, A> ApplicationHandler for App<H, A>
where
    H: AppHandler + 'static,
    A: AppArgs + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(self.args.window_title())
            .with_resizable(self.args.resizable())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.args.window_width(),
                self.args.window_height(),
            ));

        match event_loop.create_window(window_attributes) {
            Ok(window) => {
                log::info!("Window created");
                self.window = Some(Arc::new(window));

                if let Err(e) = self.init_graphics() {
                    log::error!("Failed to initialize graphics: {e}");
                    event_loop.exit();
                    return;
                }
                if let Some(ctx) = &mut self.context {
                    self.handler.on_init(ctx);
                }
                self.initialized = true;
            }
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                self.running = false;
                if let Some(ctx) = &mut self.context {
                    self.handler.on_shutdown(ctx);
                }
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.apply_resize(size.width, size.height);
            }

            WindowEvent::RedrawRequested => {
                if self.initialized && self.running {
                    self.render_frame();
                }

                if !self.running {
                    event_loop.exit();
                } else if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(ctx) = &mut self.context {
                    self.handler.on_key(ctx, &event);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(ctx) = &mut self.context {
                    let pressed = state == ElementState::Pressed;
                    self.handler.on_mouse_button(ctx, button, pressed);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
