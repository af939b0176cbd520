//! Spheres: UV sphere and icosahedral geosphere

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};
use tracing::debug;

use super::{at_least, at_most, positive};
use crate::subdivide::subdivide_levels;
use crate::types::{MeshData, Vertex};

/// Upper bound on geosphere subdivision passes
pub const MAX_GEOSPHERE_SUBDIVISIONS: u32 = 5;

/// Generate a UV sphere with smooth normals and equirectangular UV mapping
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `slice_count` - Number of longitudinal divisions (min 3)
/// * `stack_count` - Number of latitudinal divisions (min 2)
///
/// # Returns
/// Mesh with `2 × slices + (stacks - 1) × (slices + 1)` vertices and
/// `2 × slices × (stacks - 1)` triangles
///
/// # UV Mapping
/// - U (horizontal): Longitude (theta) wraps 0→1 around equator
/// - V (vertical): Latitude (phi) maps 0→1 from north pole to south pole
///
/// Interior rings duplicate the seam column at U=1.0. Each pole is emitted once
/// per slice, at the slice's center U, so pole triangles never share a wrapped UV.
pub fn generate_sphere(radius: f32, slice_count: u32, stack_count: u32) -> MeshData {
    const CALLER: &str = "generate_sphere";
    let radius = positive(radius, "radius", CALLER);
    let slices = at_least(slice_count, 3, "slice_count", CALLER);
    let stacks = at_least(stack_count, 2, "stack_count", CALLER);

    let verts_per_ring = slices + 1;
    let (slice_len, band_len) = (slices as usize, (stacks - 1) as usize);
    let mut mesh = MeshData::with_capacity(
        2 * slice_len + band_len * (slice_len + 1),
        slice_len * band_len * 6,
    );

    let pole = |y: f32, normal: Vec3, v: f32, mesh: &mut MeshData| {
        for seg in 0..slices {
            let u = (seg as f32 + 0.5) / slices as f32;
            let theta = u * TAU;
            mesh.add_vertex(Vertex::new(
                Vec3::new(0.0, y, 0.0),
                normal,
                Vec3::new(-theta.sin(), 0.0, theta.cos()),
                Vec2::new(u, v),
            ));
        }
    };

    // North pole
    pole(radius, Vec3::Y, 0.0, &mut mesh);

    // Interior rings
    for ring in 1..stacks {
        let v = ring as f32 / stacks as f32;
        let phi = v * PI; // 0 to PI (north pole to south pole)
        let y = radius * phi.cos();
        let ring_radius = radius * phi.sin();

        for seg in 0..=slices {
            let u = seg as f32 / slices as f32;
            let theta = u * TAU;
            let (sin_theta, cos_theta) = theta.sin_cos();

            let position = Vec3::new(ring_radius * cos_theta, y, ring_radius * sin_theta);
            let normal = position.normalize(); // Smooth normals point from center

            // Tangent follows the direction of increasing U (theta)
            let tangent = Vec3::new(-sin_theta, 0.0, cos_theta);

            mesh.add_vertex(Vertex::new(position, normal, tangent, Vec2::new(u, v)));
        }
    }

    // South pole
    pole(-radius, Vec3::NEG_Y, 1.0, &mut mesh);

    let ring_start = |ring: u32| slices + (ring - 1) * verts_per_ring;
    let south_pole = ring_start(stacks);

    // North cap: one triangle per slice
    for seg in 0..slices {
        let i2 = ring_start(1) + seg;
        mesh.add_triangle(seg, i2 + 1, i2);
    }

    // Bands between interior rings
    for ring in 1..stacks - 1 {
        for seg in 0..slices {
            let i0 = ring_start(ring) + seg;
            let i1 = i0 + 1;
            let i2 = ring_start(ring + 1) + seg;
            let i3 = i2 + 1;

            // Two triangles per quad (CCW winding for outward-facing normals)
            mesh.add_triangle(i0, i1, i3);
            mesh.add_triangle(i0, i3, i2);
        }
    }

    // South cap
    for seg in 0..slices {
        let i0 = ring_start(stacks - 1) + seg;
        mesh.add_triangle(i0, i0 + 1, south_pole + seg);
    }

    mesh
}

/// Generate a geosphere by subdividing an icosahedron and projecting onto the sphere
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `subdivisions` - Subdivision passes (max 5)
///
/// # Returns
/// Mesh with `20 × 4^k` near-uniform triangles
///
/// Interpolated attributes are wrong once midpoints are pushed out to the
/// radius, so normal, tangent and UV are rebuilt from each projected position.
///
/// # UV Seam
/// Unlike [`generate_sphere`], no seam column is duplicated. Triangles that
/// straddle θ = 0 see U jump from near 1 back to 0 and sample across the whole
/// texture there. The poles take U = 0.
pub fn generate_geosphere(radius: f32, subdivisions: u32) -> MeshData {
    const CALLER: &str = "generate_geosphere";
    let radius = positive(radius, "radius", CALLER);
    let subdivisions = at_most(subdivisions, MAX_GEOSPHERE_SUBDIVISIONS, "subdivisions", CALLER);

    let mut mesh = icosahedron();
    subdivide_levels(&mut mesh, subdivisions);

    for vertex in mesh.vertices_mut() {
        *vertex = spherical_vertex(vertex.position, radius);
    }

    debug!(
        radius,
        subdivisions,
        triangles = mesh.triangle_count(),
        "generated geosphere"
    );
    mesh
}

/// Unit icosahedron, 12 vertices and 20 outward-wound faces
fn icosahedron() -> MeshData {
    // Golden ratio, normalized so every corner is on the unit sphere
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let len = (1.0 + phi * phi).sqrt();
    let a = 1.0 / len;
    let b = phi / len;

    let corners = [
        Vec3::new(-a, b, 0.0),
        Vec3::new(a, b, 0.0),
        Vec3::new(-a, -b, 0.0),
        Vec3::new(a, -b, 0.0),
        Vec3::new(0.0, -a, b),
        Vec3::new(0.0, a, b),
        Vec3::new(0.0, -a, -b),
        Vec3::new(0.0, a, -b),
        Vec3::new(b, 0.0, -a),
        Vec3::new(b, 0.0, a),
        Vec3::new(-b, 0.0, -a),
        Vec3::new(-b, 0.0, a),
    ];

    const FACES: [[u32; 3]; 20] = [
        // 5 faces around vertex 0
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        // 5 adjacent faces
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        // 5 faces around vertex 3
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        // 5 adjacent faces
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    let mut mesh = MeshData::with_capacity(corners.len(), FACES.len() * 3);
    for corner in corners {
        mesh.add_vertex(spherical_vertex(corner, 1.0));
    }
    for [i0, i1, i2] in FACES {
        mesh.add_triangle(i0, i1, i2);
    }
    mesh
}

/// Vertex on a sphere of `radius` in the direction of `direction`
///
/// U comes from the azimuth `atan2(z, x)` wrapped to [0, 2π), V from the polar
/// angle measured down from +Y. A vertex on θ = 0 gets U = 0 whichever side
/// its triangle lies on, so triangles crossing the seam wrap.
fn spherical_vertex(direction: Vec3, radius: f32) -> Vertex {
    let normal = direction.try_normalize().unwrap_or(Vec3::Y);

    let mut theta = normal.z.atan2(normal.x);
    if theta < 0.0 {
        theta += TAU;
    }
    let phi = normal.y.clamp(-1.0, 1.0).acos();
    let (sin_theta, cos_theta) = theta.sin_cos();

    Vertex::new(
        normal * radius,
        normal,
        Vec3::new(-sin_theta, 0.0, cos_theta),
        Vec2::new(theta / TAU, phi / PI),
    )
}
