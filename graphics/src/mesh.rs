//! GPU mesh upload.

use std::sync::Arc;

use wgpu::util::DeviceExt;

use terrella_core::mesh::{MeshData, VertexAttributeFormat, VertexLayout};

use crate::device::GraphicsDevice;
use crate::error::GraphicsError;

/// A mesh uploaded to the GPU: interleaved vertex buffer plus u32
/// index buffer.
pub struct Mesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    layout: Arc<VertexLayout>,
}

impl Mesh {
    /// Interleave `data` following `layout` and upload both buffers.
    pub fn upload(
        device: &GraphicsDevice,
        data: &MeshData,
        layout: &Arc<VertexLayout>,
    ) -> Result<Self, GraphicsError> {
        let vertex_bytes = data.interleave(layout)?;
        let label = data.label.unwrap_or("mesh");

        let vertex_buffer =
            device
                .device()
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(label),
                    contents: &vertex_bytes,
                    usage: wgpu::BufferUsages::VERTEX,
                });
        let index_buffer =
            device
                .device()
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(label),
                    contents: bytemuck::cast_slice(&data.indices),
                    usage: wgpu::BufferUsages::INDEX,
                });

        log::debug!(
            "Uploaded mesh '{}': {} vertices, {} indices",
            label,
            data.vertex_count(),
            data.indices.len()
        );

        Ok(Self {
            vertex_buffer,
            index_buffer,
            index_count: data.indices.len() as u32,
            layout: layout.clone(),
        })
    }

    /// The vertex buffer.
    pub fn vertex_buffer(&self) -> &wgpu::Buffer {
        &self.vertex_buffer
    }

    /// The index buffer (always `Uint32`).
    pub fn index_buffer(&self) -> &wgpu::Buffer {
        &self.index_buffer
    }

    /// Number of indices to draw.
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// The vertex layout this mesh was interleaved with.
    pub fn layout(&self) -> &Arc<VertexLayout> {
        &self.layout
    }
}

/// Convert a core vertex layout into wgpu vertex attributes.
///
/// Shader locations come from
/// [`VertexAttributeSemantic::location`](terrella_core::mesh::VertexAttributeSemantic::location).
pub(crate) fn wgpu_vertex_attributes(layout: &VertexLayout) -> Vec<wgpu::VertexAttribute> {
    layout
        .attributes
        .iter()
        .map(|a| wgpu::VertexAttribute {
            format: match a.format {
                VertexAttributeFormat::Float => wgpu::VertexFormat::Float32,
                VertexAttributeFormat::Float2 => wgpu::VertexFormat::Float32x2,
                VertexAttributeFormat::Float3 => wgpu::VertexFormat::Float32x3,
                VertexAttributeFormat::Float4 => wgpu::VertexFormat::Float32x4,
            },
            offset: a.offset as u64,
            shader_location: a.semantic.location(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use terrella_core::mesh::VertexAttributeSemantic;

    #[rstest]
    #[case(VertexLayout::position_normal_uv(), 3, 32)]
    #[case(VertexLayout::position_uv(), 2, 20)]
    #[case(VertexLayout::position_only(), 1, 12)]
    fn test_wgpu_attributes_match_layout(
        #[case] layout: Arc<VertexLayout>,
        #[case] attribute_count: usize,
        #[case] stride: u32,
    ) {
        let attrs = wgpu_vertex_attributes(&layout);
        assert_eq!(attrs.len(), attribute_count);
        assert_eq!(layout.stride, stride);
        assert_eq!(attrs[0].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(attrs[0].offset, 0);
        assert_eq!(
            attrs[0].shader_location,
            VertexAttributeSemantic::Position.location()
        );
    }

    #[test]
    fn test_uv_attribute_mapping() {
        let layout = VertexLayout::position_normal_uv();
        let attrs = wgpu_vertex_attributes(&layout);
        assert_eq!(attrs[2].format, wgpu::VertexFormat::Float32x2);
        assert_eq!(attrs[2].offset, 24);
        assert_eq!(
            attrs[2].shader_location,
            VertexAttributeSemantic::TexCoord0.location()
        );
    }
}
