//! CPU-side mesh types and generators.
//!
//! This module provides GPU-agnostic mesh data structures:
//!
//! - [`VertexLayout`] - Describes the interleaved vertex attributes
//! - [`MeshData`] - Parallel per-vertex attribute arrays plus indices
//! - Generators for the shapes the demos draw (cube, plane, icosphere,
//!   skybox shell)
//!
//! These types are re-exported by `terrella-graphics` for convenience.

mod data;
pub mod generators;
mod layout;

pub use data::{MeshData, MeshError};
pub use layout::{VertexAttribute, VertexAttributeFormat, VertexAttributeSemantic, VertexLayout};
