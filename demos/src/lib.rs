//! # Terrella Demos
//!
//! Demo scenes for the Terrella rendering playground.
//!
//! ## Available Demos
//!
//! - `cube_demo` - Two spinning textured cubes under a point light
//! - `planet_demo` - An icosphere planet with a skybox, a tiled ground
//!   plane, and a moon orbiting under gravity

pub mod textures;

/// Demos library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
