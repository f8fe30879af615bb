//! Application handler trait.

use crate::context::{AppContext, DrawContext};
use winit::event::{KeyEvent, MouseButton};

/// Trait for handling application events and draw requests.
///
/// # Lifecycle
///
/// 1. `on_init` - Called once after the window and device exist
/// 2. `on_resize` - Called when the window is resized
/// 3. `on_update` - Called every frame before drawing
/// 4. `on_draw` - Called every frame to render
/// 5. `on_shutdown` - Called when the application is closing
pub trait AppHandler {
    /// Called once when the application initializes.
    ///
    /// Use this to upload meshes, create textures, and build the
    /// renderer.
    fn on_init(&mut self, _ctx: &mut AppContext) {}

    /// Called when the window is resized.
    ///
    /// The new size is available via `ctx.width()` and `ctx.height()`;
    /// the surface and depth texture are already reconfigured.
    fn on_resize(&mut self, _ctx: &mut AppContext) {}

    /// Called every frame before drawing.
    ///
    /// Use this for scene updates (spinning transforms, physics).
    /// Returns `true` to continue running, `false` to exit.
    fn on_update(&mut self, _ctx: &mut AppContext) -> bool {
        true
    }

    /// Called every frame to render into the acquired swapchain view.
    fn on_draw(&mut self, ctx: &mut DrawContext);

    /// Called when a key is pressed or released.
    fn on_key(&mut self, _ctx: &mut AppContext, _event: &KeyEvent) {}

    /// Called when a mouse button is pressed or released.
    fn on_mouse_button(&mut self, _ctx: &mut AppContext, _button: MouseButton, _pressed: bool) {}

    /// Called when the application is closing.
    fn on_shutdown(&mut self, _ctx: &mut AppContext) {}
}
