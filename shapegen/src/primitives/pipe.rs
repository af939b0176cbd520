//! Hollow pipe: outer wall, inverted inner wall and two annulus caps

use std::f32::consts::TAU;

use glam::Vec3;
use tracing::warn;

use super::cylinder::{CapSide, Facing, Wall, cap_uv};
use super::{at_least, non_negative, positive};
use crate::types::{MeshData, Vertex};

/// Pipe parameters
///
/// The inner wall sits at `inner_radius_ratio` times the outer radius at each
/// end. Vertex layout of the built mesh: outer wall, inner wall, top annulus,
/// bottom annulus.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipeConfig {
    pub top_radius: f32,
    pub bottom_radius: f32,
    pub height: f32,
    pub slice_count: u32,
    pub stack_count: u32,
    pub inner_radius_ratio: f32,
}

impl PipeConfig {
    /// Default inner radius: half the outer radius
    pub const DEFAULT_INNER_RATIO: f32 = 0.5;

    pub fn new(
        top_radius: f32,
        bottom_radius: f32,
        height: f32,
        slice_count: u32,
        stack_count: u32,
    ) -> Self {
        Self {
            top_radius,
            bottom_radius,
            height,
            slice_count,
            stack_count,
            inner_radius_ratio: Self::DEFAULT_INNER_RATIO,
        }
    }

    pub fn build(&self) -> MeshData {
        const CALLER: &str = "PipeConfig::build";
        let ratio = if (0.0..1.0).contains(&self.inner_radius_ratio) {
            self.inner_radius_ratio
        } else {
            warn!(
                "{CALLER}: inner_radius_ratio must be in [0.0, 1.0), using {}",
                Self::DEFAULT_INNER_RATIO
            );
            Self::DEFAULT_INNER_RATIO
        };

        let outer = Wall {
            bottom_radius: non_negative(self.bottom_radius, "bottom_radius", CALLER),
            top_radius: non_negative(self.top_radius, "top_radius", CALLER),
            height: positive(self.height, "height", CALLER),
            center_y: 0.0,
            slices: at_least(self.slice_count, 3, "slice_count", CALLER),
            stacks: at_least(self.stack_count, 1, "stack_count", CALLER),
            facing: Facing::Outward,
        };
        let inner = Wall {
            bottom_radius: outer.bottom_radius * ratio,
            top_radius: outer.top_radius * ratio,
            facing: Facing::Inward,
            ..outer
        };

        let mut mesh = MeshData::new();
        outer.build(&mut mesh);
        inner.build(&mut mesh);

        let half_height = outer.height * 0.5;
        build_annulus(
            &mut mesh,
            outer.top_radius,
            inner.top_radius,
            half_height,
            outer.slices,
            CapSide::Top,
        );
        build_annulus(
            &mut mesh,
            outer.bottom_radius,
            inner.bottom_radius,
            -half_height,
            outer.slices,
            CapSide::Bottom,
        );

        mesh
    }
}

/// Append a flat ring joining the outer and inner rims at height `y`
///
/// Vertices alternate outer/inner per slice column (seam duplicated).
///
/// # UV Mapping
/// Same radial mapping as a solid cap (see [`cap_uv`]): outer rim on the unit
/// circle around (0.5, 0.5), inner rim scaled by the radius ratio.
fn build_annulus(
    mesh: &mut MeshData,
    outer_radius: f32,
    inner_radius: f32,
    y: f32,
    slices: u32,
    side: CapSide,
) {
    let normal = match side {
        CapSide::Top => Vec3::Y,
        CapSide::Bottom => Vec3::NEG_Y,
    };
    let inner_uv_scale = if outer_radius > 0.0 {
        inner_radius / outer_radius
    } else {
        0.0
    };

    let base = mesh.vertex_count() as u32;
    for seg in 0..=slices {
        let (sin_theta, cos_theta) = (seg as f32 / slices as f32 * TAU).sin_cos();

        for (radius, uv_scale) in [(outer_radius, 1.0), (inner_radius, inner_uv_scale)] {
            mesh.add_vertex(Vertex::new(
                Vec3::new(radius * cos_theta, y, radius * sin_theta),
                normal,
                Vec3::X,
                cap_uv(cos_theta, sin_theta, uv_scale, side),
            ));
        }
    }

    for seg in 0..slices {
        let outer0 = base + seg * 2;
        let inner0 = outer0 + 1;
        let outer1 = outer0 + 2;
        let inner1 = outer0 + 3;

        match side {
            CapSide::Top => {
                mesh.add_triangle(inner0, outer1, outer0);
                mesh.add_triangle(inner0, inner1, outer1);
            }
            CapSide::Bottom => {
                mesh.add_triangle(inner0, outer0, outer1);
                mesh.add_triangle(inner0, outer1, inner1);
            }
        }
    }
}

/// Generate a hollow pipe parallel to the Y axis, centered at the origin
///
/// # Arguments
/// * `top_radius` - Outer radius at y = +height/2
/// * `bottom_radius` - Outer radius at y = -height/2
/// * `height` - Pipe height
/// * `slice_count` - Number of radial divisions (min 3)
/// * `stack_count` - Number of vertical divisions (min 1)
///
/// The cavity radius is half the outer radius. Outer wall normals point away
/// from the axis, inner wall normals toward it, cap normals along ±Y.
pub fn generate_pipe(
    top_radius: f32,
    bottom_radius: f32,
    height: f32,
    slice_count: u32,
    stack_count: u32,
) -> MeshData {
    PipeConfig::new(top_radius, bottom_radius, height, slice_count, stack_count).build()
}
