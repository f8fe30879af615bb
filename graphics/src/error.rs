//! Graphics error types.

use std::fmt;

use terrella_core::mesh::MeshError;

/// Errors that can occur in the graphics system.
#[derive(Debug)]
pub enum GraphicsError {
    /// Failed to initialize the graphics system.
    InitializationFailed(String),
    /// Failed to create a resource.
    ResourceCreationFailed(String),
    /// Mesh data rejected at upload time.
    InvalidMesh(MeshError),
    /// Failed to read or decode a texture file.
    TextureLoad(String),
    /// An invalid parameter was provided.
    InvalidParameter(String),
    /// The surface is outdated and needs to be reconfigured.
    SurfaceOutdated,
    /// The surface was lost and needs to be recreated.
    SurfaceLost,
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitializationFailed(msg) => write!(f, "initialization failed: {msg}"),
            Self::ResourceCreationFailed(msg) => write!(f, "resource creation failed: {msg}"),
            Self::InvalidMesh(e) => write!(f, "invalid mesh data: {e}"),
            Self::TextureLoad(msg) => write!(f, "texture load failed: {msg}"),
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            Self::SurfaceOutdated => write!(f, "surface outdated, needs reconfiguration"),
            Self::SurfaceLost => write!(f, "surface lost, needs recreation"),
        }
    }
}

impl std::error::Error for GraphicsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidMesh(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MeshError> for GraphicsError {
    fn from(e: MeshError) -> Self {
        Self::InvalidMesh(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphicsError::SurfaceLost;
        assert_eq!(err.to_string(), "surface lost, needs recreation");

        let err = GraphicsError::InitializationFailed("no GPU found".to_string());
        assert_eq!(err.to_string(), "initialization failed: no GPU found");
    }

    #[test]
    fn test_mesh_error_wraps() {
        let err = GraphicsError::from(MeshError::IndexCountNotTriangles { count: 4 });
        assert!(err.to_string().contains("not a multiple of 3"));
    }
}
