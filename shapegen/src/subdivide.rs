//! Midpoint subdivision
//!
//! Each triangle with vertices A, B, C is replaced by four:
//! (A, AB, CA), (AB, B, BC), (CA, BC, C), (AB, BC, CA).
//!
//! Midpoints are built per triangle rather than shared across edges, so a pass
//! turns T triangles into 4T triangles backed by 6T vertices. No edge map is
//! needed, and corners keep their exact positions.

use tracing::debug;

use crate::types::{MeshData, Vertex};

/// Subdivide every triangle of `mesh` into four, in place
///
/// Trailing indices that do not form a whole triangle are dropped.
pub fn subdivide(mesh: &mut MeshData) {
    let triangle_count = mesh.triangle_count();
    let mut vertices = Vec::with_capacity(triangle_count * 6);
    let mut indices = Vec::with_capacity(triangle_count * 12);

    {
        let source = mesh.vertices();
        for [i0, i1, i2] in mesh.triangles() {
            let v0 = source[i0 as usize];
            let v1 = source[i1 as usize];
            let v2 = source[i2 as usize];

            let base = vertices.len() as u32;
            vertices.extend_from_slice(&[
                v0,
                v1,
                v2,
                Vertex::midpoint(&v0, &v1),
                Vertex::midpoint(&v1, &v2),
                Vertex::midpoint(&v0, &v2),
            ]);

            let (c0, c1, c2) = (base, base + 1, base + 2);
            let (m01, m12, m02) = (base + 3, base + 4, base + 5);

            // Corner triangles (maintain winding order)
            indices.extend_from_slice(&[c0, m01, m02]);
            indices.extend_from_slice(&[m01, c1, m12]);
            indices.extend_from_slice(&[m02, m12, c2]);
            // Center triangle
            indices.extend_from_slice(&[m01, m12, m02]);
        }
    }

    debug!(
        triangles = triangle_count * 4,
        vertices = vertices.len(),
        "subdivided mesh"
    );
    mesh.replace(vertices, indices);
}

/// Apply [`subdivide`] `levels` times
pub fn subdivide_levels(mesh: &mut MeshData, levels: u32) {
    for _ in 0..levels {
        subdivide(mesh);
    }
}
