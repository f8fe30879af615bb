//! # Terrella Core
//!
//! CPU-side building blocks for the Terrella rendering playground:
//! mesh data and generators, math helpers, scene types, and the small
//! physics utilities used by the demos.

pub mod math;
pub mod mesh;
pub mod physics;
pub mod scene;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the core subsystem.
pub fn init() {
    log::info!("Terrella Core v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
