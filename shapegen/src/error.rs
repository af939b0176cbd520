//! Errors for the checked mesh paths
//!
//! Generators themselves never fail: bad parameters are clamped. These errors
//! come from validation, the 16-bit index view and export.

use thiserror::Error;

/// Errors reported by `MeshData` checks and export
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Index buffer length is not a whole number of triangles
    #[error("index count {count} is not a multiple of 3")]
    IndexCountNotTriangles { count: usize },

    /// An index points past the end of the vertex buffer
    #[error("index {index} at position {position} is out of bounds (vertex count {vertex_count})")]
    IndexOutOfBounds {
        index: u32,
        position: usize,
        vertex_count: usize,
    },

    /// A vertex normal is not unit length
    #[error("vertex {vertex} has a normal of length {length}")]
    NonUnitNormal { vertex: usize, length: f32 },

    /// A vertex tangent is not unit length
    #[error("vertex {vertex} has a tangent of length {length}")]
    NonUnitTangent { vertex: usize, length: f32 },

    /// The mesh cannot be addressed with 16-bit indices
    #[error("largest index {max_index} does not fit in 16 bits")]
    IndexOverflow { max_index: u32 },

    /// Writing an exported mesh failed
    #[error("failed to write mesh: {0}")]
    Io(#[from] std::io::Error),
}
