//! # Terrella App
//!
//! Application shell for windowed Terrella programs.
//!
//! This crate provides a generic [`App`] struct that handles window
//! creation, the event loop, and graphics initialization. Programs
//! implement [`AppHandler`] for their per-frame logic.
//!
//! ## Example
//!
//! ```ignore
//! use terrella_app::{App, AppHandler, AppArgs, DefaultAppArgs, AppContext, DrawContext};
//!
//! struct MyApp;
//!
//! impl AppHandler for MyApp {
//!     fn on_init(&mut self, ctx: &mut AppContext) {
//!         // Create meshes, textures, the renderer...
//!     }
//!
//!     fn on_draw(&mut self, ctx: &mut DrawContext) {
//!         // Render the frame
//!     }
//! }
//!
//! fn main() {
//!     let args = DefaultAppArgs::parse();
//!     App::run(MyApp, args);
//! }
//! ```

mod app;
mod args;
mod context;
mod handler;

pub use app::App;
pub use args::{AppArgs, DefaultAppArgs};
pub use context::{AppContext, DrawContext};
pub use handler::AppHandler;

/// App library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the app subsystem.
pub fn init() {
    log::info!("Terrella App v{} initialized", VERSION);
}
