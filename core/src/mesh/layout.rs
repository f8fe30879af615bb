//! Vertex layout definitions for meshes.
//!
//! A [`VertexLayout`] describes how per-vertex attributes are interleaved
//! into a single vertex buffer. Layouts are shared via `Arc` since there
//! are only a few combinations across many meshes.

use std::sync::Arc;

/// Semantic meaning of a vertex attribute.
///
/// Semantics are used to match mesh attributes with shader inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeSemantic {
    /// Vertex position (float3).
    Position,
    /// Vertex normal (float3).
    Normal,
    /// Texture coordinates (float2).
    TexCoord0,
}

impl VertexAttributeSemantic {
    /// Get the shader location for this semantic.
    pub fn location(&self) -> u32 {
        match self {
            Self::Position => 0,
            Self::Normal => 1,
            Self::TexCoord0 => 2,
        }
    }
}

/// Format of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeFormat {
    /// Single 32-bit float.
    Float,
    /// Two 32-bit floats.
    Float2,
    /// Three 32-bit floats.
    Float3,
    /// Four 32-bit floats.
    Float4,
}

impl VertexAttributeFormat {
    /// Get the size in bytes of this format.
    pub fn size(&self) -> usize {
        match self {
            Self::Float => 4,
            Self::Float2 => 8,
            Self::Float3 => 12,
            Self::Float4 => 16,
        }
    }
}

/// A single vertex attribute description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// Semantic meaning of this attribute.
    pub semantic: VertexAttributeSemantic,
    /// Data format of this attribute.
    pub format: VertexAttributeFormat,
    /// Byte offset within the vertex.
    pub offset: u32,
}

impl VertexAttribute {
    /// Create a new vertex attribute.
    pub fn new(semantic: VertexAttributeSemantic, format: VertexAttributeFormat, offset: u32) -> Self {
        Self {
            semantic,
            format,
            offset,
        }
    }
}

/// Describes the interleaved vertex attributes of a mesh.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexLayout {
    /// Attributes in buffer order.
    pub attributes: Vec<VertexAttribute>,
    /// Stride in bytes between consecutive vertices.
    pub stride: u32,
    /// Optional label for debugging.
    pub label: Option<&'static str>,
}

impl VertexLayout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self {
            attributes: Vec::new(),
            stride: 0,
            label: None,
        }
    }

    /// Append an attribute at the current end of the vertex, growing
    /// the stride by the attribute's size.
    #[must_use]
    pub fn with_attribute(
        mut self,
        semantic: VertexAttributeSemantic,
        format: VertexAttributeFormat,
    ) -> Self {
        self.attributes
            .push(VertexAttribute::new(semantic, format, self.stride));
        self.stride += format.size() as u32;
        self
    }

    /// Set a debug label.
    #[must_use]
    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    /// Look up an attribute by semantic.
    pub fn attribute(&self, semantic: VertexAttributeSemantic) -> Option<&VertexAttribute> {
        self.attributes.iter().find(|a| a.semantic == semantic)
    }

    /// Position + normal + texcoord layout (32 bytes per vertex).
    pub fn position_normal_uv() -> Arc<Self> {
        Arc::new(
            Self::new()
                .with_attribute(
                    VertexAttributeSemantic::Position,
                    VertexAttributeFormat::Float3,
                )
                .with_attribute(
                    VertexAttributeSemantic::Normal,
                    VertexAttributeFormat::Float3,
                )
                .with_attribute(
                    VertexAttributeSemantic::TexCoord0,
                    VertexAttributeFormat::Float2,
                )
                .with_label("position_normal_uv"),
        )
    }

    /// Position + texcoord layout (20 bytes per vertex).
    pub fn position_uv() -> Arc<Self> {
        Arc::new(
            Self::new()
                .with_attribute(
                    VertexAttributeSemantic::Position,
                    VertexAttributeFormat::Float3,
                )
                .with_attribute(
                    VertexAttributeSemantic::TexCoord0,
                    VertexAttributeFormat::Float2,
                )
                .with_label("position_uv"),
        )
    }

    /// Position-only layout (12 bytes per vertex).
    pub fn position_only() -> Arc<Self> {
        Arc::new(
            Self::new()
                .with_attribute(
                    VertexAttributeSemantic::Position,
                    VertexAttributeFormat::Float3,
                )
                .with_label("position_only"),
        )
    }
}

impl Default for VertexLayout {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_sizes() {
        assert_eq!(VertexAttributeFormat::Float.size(), 4);
        assert_eq!(VertexAttributeFormat::Float2.size(), 8);
        assert_eq!(VertexAttributeFormat::Float3.size(), 12);
        assert_eq!(VertexAttributeFormat::Float4.size(), 16);
    }

    #[test]
    fn test_preset_strides() {
        assert_eq!(VertexLayout::position_normal_uv().stride, 32);
        assert_eq!(VertexLayout::position_uv().stride, 20);
        assert_eq!(VertexLayout::position_only().stride, 12);
    }

    #[test]
    fn test_attribute_offsets() {
        let layout = VertexLayout::position_normal_uv();
        assert_eq!(
            layout
                .attribute(VertexAttributeSemantic::Position)
                .unwrap()
                .offset,
            0
        );
        assert_eq!(
            layout
                .attribute(VertexAttributeSemantic::Normal)
                .unwrap()
                .offset,
            12
        );
        assert_eq!(
            layout
                .attribute(VertexAttributeSemantic::TexCoord0)
                .unwrap()
                .offset,
            24
        );
    }

    #[test]
    fn test_missing_attribute_lookup() {
        let layout = VertexLayout::position_only();
        assert!(layout.attribute(VertexAttributeSemantic::Normal).is_none());
    }
}
