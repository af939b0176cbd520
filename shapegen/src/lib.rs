//! Procedural mesh generation for parametric solids
//!
//! Every generator returns a fresh [`MeshData`]: vertices with position,
//! normal, tangent and UV, plus a 32-bit triangle list wound counter-clockwise
//! when seen from outside (right-handed, +Y up).
//!
//! # Shapes
//!
//! - Leaves: [`generate_box`], [`generate_sphere`], [`generate_cylinder`],
//!   [`generate_grid`], [`generate_quad`]
//! - Built on subdivision: [`generate_geosphere`]
//! - Built on the cylinder wall: [`generate_pipe`]
//! - Presets: [`generate_wedge`], [`generate_diamond`], [`generate_cone`],
//!   [`generate_pyramid`], [`generate_triangle_prism`]
//!
//! # Example
//! ```
//! use shapegen::{generate_geosphere, subdivide};
//!
//! let mut mesh = generate_geosphere(1.0, 2);
//! assert_eq!(mesh.triangle_count(), 320);
//!
//! subdivide(&mut mesh);
//! assert_eq!(mesh.triangle_count(), 1280);
//! ```

pub mod error;
pub mod export;
pub mod packing;
pub mod primitives;
mod shape;
mod subdivide;
mod types;

#[cfg(test)]
mod tests;

pub use error::GeometryError;
pub use export::{save_obj, write_obj};
pub use packing::{PackedVertex, pack_vertices, write_packed};
pub use shape::ShapeSpec;
pub use subdivide::{subdivide, subdivide_levels};
pub use types::{MeshData, UNIT_LENGTH_TOLERANCE, Vertex};

pub use primitives::{
    BoxConfig, BoxShape, CylinderConfig, PipeConfig, generate_box, generate_cone,
    generate_cylinder, generate_diamond, generate_geosphere, generate_grid, generate_pipe,
    generate_pyramid, generate_quad, generate_sphere, generate_triangle_prism, generate_wedge,
};
