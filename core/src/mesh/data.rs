//! CPU-side mesh data.
//!
//! [`MeshData`] holds per-vertex attributes as parallel arrays,
//! index-aligned by vertex id, plus triangle connectivity as `u32`
//! index triples. This is the representation the generators produce
//! and the renderer consumes.

use super::layout::{VertexAttributeSemantic, VertexLayout};

/// Errors produced when validating or interleaving mesh data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The index count is not a multiple of three.
    IndexCountNotTriangles {
        /// Number of indices in the mesh.
        count: usize,
    },
    /// An index references a vertex that does not exist.
    IndexOutOfBounds {
        /// The offending index value.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
    /// A non-empty attribute array has a different length than positions.
    AttributeLengthMismatch {
        /// Name of the mismatched attribute.
        attribute: &'static str,
        /// Length of the attribute array.
        len: usize,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
    /// The requested layout needs an attribute the mesh does not carry.
    MissingAttribute(VertexAttributeSemantic),
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexCountNotTriangles { count } => {
                write!(f, "index count {count} is not a multiple of 3")
            }
            Self::IndexOutOfBounds {
                index,
                vertex_count,
            } => {
                write!(f, "index {index} out of bounds for {vertex_count} vertices")
            }
            Self::AttributeLengthMismatch {
                attribute,
                len,
                vertex_count,
            } => {
                write!(
                    f,
                    "{attribute} array has {len} entries for {vertex_count} vertices"
                )
            }
            Self::MissingAttribute(semantic) => {
                write!(f, "mesh has no {semantic:?} data")
            }
        }
    }
}

impl std::error::Error for MeshError {}

/// A triangle mesh as parallel per-vertex attribute arrays.
///
/// Invariants (checked by [`validate`](Self::validate)):
/// - `indices.len()` is a multiple of 3,
/// - every index is `< positions.len()`,
/// - `uvs` and `normals`, when non-empty, are the same length as
///   `positions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions.
    pub positions: Vec<[f32; 3]>,
    /// Texture coordinates, empty if the mesh is untextured.
    pub uvs: Vec<[f32; 2]>,
    /// Vertex normals, empty if the mesh is unlit.
    pub normals: Vec<[f32; 3]>,
    /// Triangle connectivity as index triples into `positions`.
    pub indices: Vec<u32>,
    /// Optional label for debugging.
    pub label: Option<&'static str>,
}

impl MeshData {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a debug label.
    #[must_use]
    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check the structural invariants of the mesh.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::IndexCountNotTriangles {
                count: self.indices.len(),
            });
        }
        let vertex_count = self.positions.len();
        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::IndexOutOfBounds {
                index,
                vertex_count,
            });
        }
        if !self.uvs.is_empty() && self.uvs.len() != vertex_count {
            return Err(MeshError::AttributeLengthMismatch {
                attribute: "uv",
                len: self.uvs.len(),
                vertex_count,
            });
        }
        if !self.normals.is_empty() && self.normals.len() != vertex_count {
            return Err(MeshError::AttributeLengthMismatch {
                attribute: "normal",
                len: self.normals.len(),
                vertex_count,
            });
        }
        Ok(())
    }

    /// Interleave the vertex attributes into packed bytes following the
    /// given layout.
    ///
    /// Returns an error if the mesh is structurally invalid or lacks an
    /// attribute the layout requires.
    pub fn interleave(&self, layout: &VertexLayout) -> Result<Vec<u8>, MeshError> {
        self.validate()?;

        for attribute in &layout.attributes {
            let present = match attribute.semantic {
                VertexAttributeSemantic::Position => !self.positions.is_empty(),
                VertexAttributeSemantic::Normal => !self.normals.is_empty(),
                VertexAttributeSemantic::TexCoord0 => !self.uvs.is_empty(),
            };
            if !present && self.vertex_count() > 0 {
                return Err(MeshError::MissingAttribute(attribute.semantic));
            }
        }

        let stride = layout.stride as usize;
        if stride == 0 {
            return Ok(Vec::new());
        }
        let mut bytes = vec![0u8; self.vertex_count() * stride];
        for (i, chunk) in bytes.chunks_exact_mut(stride).enumerate() {
            for attribute in &layout.attributes {
                let offset = attribute.offset as usize;
                let data: &[f32] = match attribute.semantic {
                    VertexAttributeSemantic::Position => &self.positions[i],
                    VertexAttributeSemantic::Normal => &self.normals[i],
                    VertexAttributeSemantic::TexCoord0 => &self.uvs[i],
                };
                let size = attribute.format.size().min(data.len() * 4);
                chunk[offset..offset + size].copy_from_slice(&bytemuck::cast_slice(data)[..size]);
            }
        }
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> MeshData {
        MeshData {
            positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            uvs: vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
            normals: vec![[0.0, 0.0, 1.0]; 3],
            indices: vec![0, 1, 2],
            label: Some("triangle"),
        }
    }

    #[test]
    fn test_valid_triangle() {
        assert_eq!(triangle().validate(), Ok(()));
        assert_eq!(triangle().vertex_count(), 3);
        assert_eq!(triangle().triangle_count(), 1);
    }

    #[test]
    fn test_non_triangle_indices_rejected() {
        let mut mesh = triangle();
        mesh.indices.pop();
        assert_eq!(
            mesh.validate(),
            Err(MeshError::IndexCountNotTriangles { count: 2 })
        );
    }

    #[test]
    fn test_out_of_bounds_index_rejected() {
        let mut mesh = triangle();
        mesh.indices[2] = 7;
        assert_eq!(
            mesh.validate(),
            Err(MeshError::IndexOutOfBounds {
                index: 7,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn test_attribute_length_mismatch_rejected() {
        let mut mesh = triangle();
        mesh.uvs.pop();
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::AttributeLengthMismatch {
                attribute: "uv",
                ..
            })
        ));
    }

    #[test]
    fn test_interleave_position_normal_uv() {
        let mesh = triangle();
        let layout = VertexLayout::position_normal_uv();
        let bytes = mesh.interleave(&layout).unwrap();
        assert_eq!(bytes.len(), 3 * 32);

        // Second vertex starts at byte 32: position (1, 0, 0).
        let position: [f32; 3] = bytemuck::pod_read_unaligned(&bytes[32..44]);
        assert_eq!(position, [1.0, 0.0, 0.0]);
        // Its uv lives at offset 24 within the vertex.
        let uv: [f32; 2] = bytemuck::pod_read_unaligned(&bytes[56..64]);
        assert_eq!(uv, [1.0, 0.0]);
    }

    #[test]
    fn test_interleave_missing_attribute() {
        let mut mesh = triangle();
        mesh.normals.clear();
        let layout = VertexLayout::position_normal_uv();
        assert_eq!(
            mesh.interleave(&layout),
            Err(MeshError::MissingAttribute(VertexAttributeSemantic::Normal))
        );
    }

    #[test]
    fn test_interleave_position_only_ignores_extras() {
        let mesh = triangle();
        let layout = VertexLayout::position_only();
        let bytes = mesh.interleave(&layout).unwrap();
        assert_eq!(bytes.len(), 3 * 12);
    }
}
