//! Cylinder family: cylinder, cone, pyramid, triangular prism, diamond
//!
//! Every member goes through the same wall and cap builders; the named shapes
//! only pick radii and slice counts.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use super::cuboid::MAX_BOX_SUBDIVISIONS;
use super::{at_least, at_most, non_negative, positive};
use crate::subdivide::subdivide_levels;
use crate::types::{MeshData, Vertex};

/// Cylinder-family parameters
///
/// The solid is parallel to the Y axis, spanning `center_y ± height / 2`.
/// Either radius may be zero; the matching ring then collapses to an apex and
/// its cap is skipped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CylinderConfig {
    pub bottom_radius: f32,
    pub top_radius: f32,
    pub height: f32,
    pub slice_count: u32,
    pub stack_count: u32,
    pub center_y: f32,
    pub top_cap: bool,
    pub bottom_cap: bool,
}

impl CylinderConfig {
    pub fn new(
        bottom_radius: f32,
        top_radius: f32,
        height: f32,
        slice_count: u32,
        stack_count: u32,
    ) -> Self {
        Self {
            bottom_radius,
            top_radius,
            height,
            slice_count,
            stack_count,
            center_y: 0.0,
            top_cap: true,
            bottom_cap: true,
        }
    }

    /// Upward-pointing cone (top radius 0)
    pub fn cone(bottom_radius: f32, height: f32, slice_count: u32, stack_count: u32) -> Self {
        Self::new(bottom_radius, 0.0, height, slice_count, stack_count)
    }

    /// Square-base pyramid: a cone with four slices
    pub fn pyramid(bottom_radius: f32, height: f32, stack_count: u32) -> Self {
        Self::cone(bottom_radius, height, 4, stack_count)
    }

    /// Triangular prism: a straight cylinder with three slices
    pub fn triangle_prism(radius: f32, height: f32, stack_count: u32) -> Self {
        Self::new(radius, radius, height, 3, stack_count)
    }

    /// Same shape with both caps left open
    pub fn open(self) -> Self {
        Self {
            top_cap: false,
            bottom_cap: false,
            ..self
        }
    }

    /// Same shape moved so its wall is centered at `center_y`
    pub fn centered_at(self, center_y: f32) -> Self {
        Self { center_y, ..self }
    }

    pub fn build(&self) -> MeshData {
        const CALLER: &str = "CylinderConfig::build";
        let wall = Wall {
            bottom_radius: non_negative(self.bottom_radius, "bottom_radius", CALLER),
            top_radius: non_negative(self.top_radius, "top_radius", CALLER),
            height: positive(self.height, "height", CALLER),
            center_y: self.center_y,
            slices: at_least(self.slice_count, 3, "slice_count", CALLER),
            stacks: at_least(self.stack_count, 1, "stack_count", CALLER),
            facing: Facing::Outward,
        };

        let mut mesh = MeshData::new();
        wall.build(&mut mesh);

        let half_height = wall.height * 0.5;
        if self.top_cap {
            build_cap(
                &mut mesh,
                wall.top_radius,
                wall.center_y + half_height,
                wall.slices,
                CapSide::Top,
            );
        }
        if self.bottom_cap {
            build_cap(
                &mut mesh,
                wall.bottom_radius,
                wall.center_y - half_height,
                wall.slices,
                CapSide::Bottom,
            );
        }

        mesh
    }
}

/// Which way a wall's normals and front faces point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Facing {
    /// Away from the axis
    Outward,
    /// Toward the axis (the inside of a pipe)
    Inward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CapSide {
    Top,
    Bottom,
}

/// Side wall of a (possibly tapered) cylinder, already clamped
#[derive(Clone, Copy, Debug)]
pub(crate) struct Wall {
    pub bottom_radius: f32,
    pub top_radius: f32,
    pub height: f32,
    pub center_y: f32,
    pub slices: u32,
    pub stacks: u32,
    pub facing: Facing,
}

impl Wall {
    /// Append `stacks + 1` rings of `slices + 1` vertices (seam duplicated)
    ///
    /// # UV Mapping
    /// U wraps 0→1 around the circumference, V maps 1→0 from bottom to top.
    /// An inward wall is seen from the axis, so it runs U the other way and
    /// negates the tangent to keep `normal × tangent` pointing down the wall.
    pub fn build(&self, mesh: &mut MeshData) {
        let base = mesh.vertex_count() as u32;
        let half_height = self.height * 0.5;
        let stack_height = self.height / self.stacks as f32;
        let radius_step = (self.top_radius - self.bottom_radius) / self.stacks as f32;

        // Slant normal: radial part scaled by height, vertical part by the taper
        let radius_diff = self.bottom_radius - self.top_radius;
        let sign = match self.facing {
            Facing::Outward => 1.0,
            Facing::Inward => -1.0,
        };
        let texture_u = |u: f32| match self.facing {
            Facing::Outward => u,
            Facing::Inward => 1.0 - u,
        };

        for ring in 0..=self.stacks {
            let y = self.center_y - half_height + ring as f32 * stack_height;
            let radius = self.bottom_radius + ring as f32 * radius_step;
            let v = 1.0 - ring as f32 / self.stacks as f32;

            for seg in 0..=self.slices {
                let u = seg as f32 / self.slices as f32;
                let (sin_theta, cos_theta) = (u * TAU).sin_cos();

                let radial = Vec3::new(cos_theta, 0.0, sin_theta);
                let normal = Vec3::new(
                    self.height * cos_theta,
                    radius_diff,
                    self.height * sin_theta,
                )
                .try_normalize()
                .unwrap_or(radial);

                mesh.add_vertex(Vertex::new(
                    Vec3::new(radius * cos_theta, y, radius * sin_theta),
                    normal * sign,
                    Vec3::new(-sin_theta, 0.0, cos_theta) * sign,
                    Vec2::new(texture_u(u), v),
                ));
            }
        }

        // With slices+1 vertex columns, we connect seg to seg+1 without modular wrap
        let verts_per_ring = self.slices + 1;
        for ring in 0..self.stacks {
            for seg in 0..self.slices {
                let i0 = base + ring * verts_per_ring + seg;
                let i1 = i0 + 1;
                let i2 = i0 + verts_per_ring;
                let i3 = i2 + 1;

                match self.facing {
                    Facing::Outward => {
                        mesh.add_triangle(i0, i2, i3);
                        mesh.add_triangle(i0, i3, i1);
                    }
                    Facing::Inward => {
                        mesh.add_triangle(i0, i3, i2);
                        mesh.add_triangle(i0, i1, i3);
                    }
                }
            }
        }
    }
}

/// Polar texture coordinate on a cap, `scale` = 1 on the rim
///
/// U follows +X like the cap tangent. V follows `normal × tangent`, which is -Z
/// on a top cap and +Z on a bottom cap.
pub(crate) fn cap_uv(cos_theta: f32, sin_theta: f32, scale: f32, side: CapSide) -> Vec2 {
    let v_sign = match side {
        CapSide::Top => -1.0,
        CapSide::Bottom => 1.0,
    };
    Vec2::new(
        0.5 + 0.5 * scale * cos_theta,
        0.5 + 0.5 * scale * v_sign * sin_theta,
    )
}

/// Append a flat disk closing the top or bottom of a wall
///
/// The cap gets its own center vertex and rim ring so the rim keeps a hard edge.
/// A zero radius means the wall already ends in an apex; nothing is added.
pub(crate) fn build_cap(mesh: &mut MeshData, radius: f32, y: f32, slices: u32, side: CapSide) {
    if radius <= 0.0 {
        return;
    }

    let normal = match side {
        CapSide::Top => Vec3::Y,
        CapSide::Bottom => Vec3::NEG_Y,
    };

    let center = mesh.add_vertex(Vertex::new(
        Vec3::new(0.0, y, 0.0),
        normal,
        Vec3::X,
        Vec2::new(0.5, 0.5),
    ));

    // Radial UV mapping from center (0.5, 0.5)
    for seg in 0..=slices {
        let (sin_theta, cos_theta) = (seg as f32 / slices as f32 * TAU).sin_cos();
        mesh.add_vertex(Vertex::new(
            Vec3::new(radius * cos_theta, y, radius * sin_theta),
            normal,
            Vec3::X,
            cap_uv(cos_theta, sin_theta, 1.0, side),
        ));
    }

    for seg in 0..slices {
        let i0 = center + 1 + seg;
        let i1 = i0 + 1;
        match side {
            CapSide::Top => mesh.add_triangle(center, i1, i0),
            CapSide::Bottom => mesh.add_triangle(center, i0, i1),
        }
    }
}

/// Generate a cylinder parallel to the Y axis, centered at the origin
///
/// # Arguments
/// * `bottom_radius` - Radius at y = -height/2 (>= 0.0)
/// * `top_radius` - Radius at y = +height/2 (>= 0.0)
/// * `height` - Cylinder height
/// * `slice_count` - Number of radial divisions (min 3)
/// * `stack_count` - Number of vertical divisions (min 1)
///
/// # Returns
/// Wall with `(stacks + 1) × (slices + 1)` vertices, followed by the top cap
/// and the bottom cap (`slices + 2` vertices each, skipped for a zero radius)
pub fn generate_cylinder(
    bottom_radius: f32,
    top_radius: f32,
    height: f32,
    slice_count: u32,
    stack_count: u32,
) -> MeshData {
    CylinderConfig::new(bottom_radius, top_radius, height, slice_count, stack_count).build()
}

/// Generate an upward-pointing cone
pub fn generate_cone(
    bottom_radius: f32,
    height: f32,
    slice_count: u32,
    stack_count: u32,
) -> MeshData {
    CylinderConfig::cone(bottom_radius, height, slice_count, stack_count).build()
}

/// Generate a square-base pyramid with its point facing up
pub fn generate_pyramid(bottom_radius: f32, height: f32, stack_count: u32) -> MeshData {
    CylinderConfig::pyramid(bottom_radius, height, stack_count).build()
}

/// Generate a triangular prism standing on the XZ plane
pub fn generate_triangle_prism(bottom_radius: f32, height: f32, stack_count: u32) -> MeshData {
    CylinderConfig::triangle_prism(bottom_radius, height, stack_count).build()
}

/// Generate a diamond: two open cones joined at an equator on y = 0
///
/// # Arguments
/// * `radius` - Half extent of the equator along X
/// * `height` - Apex-to-apex extent along Y
/// * `depth` - Full extent of the equator along Z (`2 × radius` keeps it round)
/// * `slice_count` - Number of radial divisions (min 3)
/// * `subdivisions` - Midpoint subdivision passes (max 6)
///
/// The upper half points up and the lower half points down. Both halves place
/// vertices on the same equator ring but keep their own slant normals.
///
/// # Returns
/// Mesh with `4 × slices × 4^k` triangles
pub fn generate_diamond(
    radius: f32,
    height: f32,
    depth: f32,
    slice_count: u32,
    subdivisions: u32,
) -> MeshData {
    const CALLER: &str = "generate_diamond";
    let radius = positive(radius, "radius", CALLER);
    let half_height = positive(height, "height", CALLER) * 0.5;
    let depth = positive(depth, "depth", CALLER);
    let subdivisions = at_most(subdivisions, MAX_BOX_SUBDIVISIONS, "subdivisions", CALLER);

    let upper = CylinderConfig::cone(radius, half_height, slice_count, 1)
        .open()
        .centered_at(half_height * 0.5);
    let lower = CylinderConfig::new(0.0, radius, half_height, slice_count, 1)
        .open()
        .centered_at(-half_height * 0.5);

    let mut mesh = upper.build();
    mesh.append(lower.build());
    subdivide_levels(&mut mesh, subdivisions);

    // Stretch last so every vertex, midpoints included, gets an exact frame
    let z_scale = depth * 0.5 / radius;
    if z_scale != 1.0 {
        stretch_z(&mut mesh, z_scale);
    }
    mesh
}

/// Scale every vertex along Z by `scale` (> 0)
///
/// Tangents move with the surface; normals use the inverse scale so they stay
/// perpendicular to it.
fn stretch_z(mesh: &mut MeshData, scale: f32) {
    let surface = Vec3::new(1.0, 1.0, scale);
    let normals = Vec3::new(1.0, 1.0, 1.0 / scale);

    for vertex in mesh.vertices_mut() {
        vertex.position *= surface;
        vertex.normal = (vertex.normal * normals)
            .try_normalize()
            .unwrap_or(vertex.normal);
        vertex.tangent = (vertex.tangent * surface)
            .try_normalize()
            .unwrap_or(vertex.tangent);
    }
}
