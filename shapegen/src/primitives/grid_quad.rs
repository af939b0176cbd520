//! Flat primitives: tiled grid and screen-aligned quad

use glam::{Vec2, Vec3};

use super::{at_least, positive};
use crate::types::{MeshData, Vertex};

/// Generate an `m × n` grid on the XZ plane (Y=0), centered at the origin
///
/// # Arguments
/// * `width` - Extent along X
/// * `depth` - Extent along Z
/// * `m` - Number of vertex rows along Z (min 2)
/// * `n` - Number of vertex columns along X (min 2)
///
/// # Returns
/// Mesh with `m × n` vertices and `2 × (m - 1) × (n - 1)` triangles
///
/// # UV Mapping
/// One texture repeat per cell: U runs 0..n-1 along +X, V runs 0..m-1 along -Z.
pub fn generate_grid(width: f32, depth: f32, m: u32, n: u32) -> MeshData {
    const CALLER: &str = "generate_grid";
    let width = positive(width, "width", CALLER);
    let depth = positive(depth, "depth", CALLER);
    let m = at_least(m, 2, "m", CALLER);
    let n = at_least(n, 2, "n", CALLER);

    let half_width = width * 0.5;
    let half_depth = depth * 0.5;
    let dx = width / (n - 1) as f32;
    let dz = depth / (m - 1) as f32;

    let (rows, columns) = (m as usize, n as usize);
    let mut mesh = MeshData::with_capacity(rows * columns, (rows - 1) * (columns - 1) * 6);

    // Rows start at the far edge (+Z) and step toward -Z
    for i in 0..m {
        let z = half_depth - i as f32 * dz;
        for j in 0..n {
            let x = -half_width + j as f32 * dx;
            mesh.add_vertex(Vertex::new(
                Vec3::new(x, 0.0, z),
                Vec3::Y,
                Vec3::X,
                Vec2::new(j as f32, i as f32),
            ));
        }
    }

    for i in 0..m - 1 {
        for j in 0..n - 1 {
            let i0 = i * n + j;
            let i1 = i0 + 1;
            let i2 = (i + 1) * n + j;
            let i3 = i2 + 1;

            // Two triangles per cell (CCW winding for +Y normal)
            mesh.add_triangle(i0, i1, i2);
            mesh.add_triangle(i2, i1, i3);
        }
    }

    mesh
}

/// Generate a quad aligned with the screen, for post-processing passes
///
/// `(x, y)` is the top-left corner; the quad extends `w` to the right and `h`
/// downward at `z = depth`. The normal is +Z, toward a right-handed viewer.
///
/// # UV Mapping
/// U runs left to right along the +X tangent and V runs bottom to top, along
/// `normal × tangent`, so the UV origin is the bottom-left corner.
pub fn generate_quad(x: f32, y: f32, w: f32, h: f32, depth: f32) -> MeshData {
    let normal = Vec3::Z;
    let tangent = Vec3::X;

    let mut mesh = MeshData::with_capacity(4, 6);
    let corners = [
        (Vec3::new(x, y - h, depth), Vec2::new(0.0, 0.0)),
        (Vec3::new(x + w, y - h, depth), Vec2::new(1.0, 0.0)),
        (Vec3::new(x + w, y, depth), Vec2::new(1.0, 1.0)),
        (Vec3::new(x, y, depth), Vec2::new(0.0, 1.0)),
    ];
    for (position, uv) in corners {
        mesh.add_vertex(Vertex::new(position, normal, tangent, uv));
    }

    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_counts() {
        let mesh = generate_grid(10.0, 6.0, 4, 5);
        assert_eq!(mesh.vertex_count(), 4 * 5);
        assert_eq!(mesh.triangle_count(), 2 * 3 * 4);
    }

    #[test]
    fn test_grid_is_flat_and_up() {
        let mesh = generate_grid(10.0, 6.0, 4, 5);
        for v in mesh.vertices() {
            assert_eq!(v.position.y, 0.0);
            assert_eq!(v.normal, Vec3::Y);
        }
        for [a, b, c] in mesh.triangles() {
            let p = |i: u32| mesh.vertices()[i as usize].position;
            assert!((p(b) - p(a)).cross(p(c) - p(a)).y > 0.0);
        }
    }

    #[test]
    fn test_grid_extents_and_tiling() {
        let mesh = generate_grid(10.0, 6.0, 4, 5);
        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, Vec3::new(-5.0, 0.0, -3.0));
        assert_eq!(max, Vec3::new(5.0, 0.0, 3.0));

        // One repeat per cell: last vertex carries (n - 1, m - 1)
        let last = mesh.vertices().last().unwrap();
        assert_eq!(last.uv, Vec2::new(4.0, 3.0));
    }

    #[test]
    fn test_grid_clamps_counts() {
        let mesh = generate_grid(1.0, 1.0, 0, 1);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_quad() {
        let mesh = generate_quad(-1.0, 1.0, 2.0, 2.0, 0.0);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3]);

        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(max, Vec3::new(1.0, 1.0, 0.0));

        // Bottom-left corner maps to UV origin, top-right to (1, 1)
        assert_eq!(mesh.vertices()[0].uv, Vec2::ZERO);
        assert_eq!(mesh.vertices()[0].position, Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(mesh.vertices()[2].uv, Vec2::ONE);

        for [a, b, c] in mesh.triangles() {
            let p = |i: u32| mesh.vertices()[i as usize].position;
            assert!((p(b) - p(a)).cross(p(c) - p(a)).z > 0.0);
        }
    }
}
