//! Parametric solids
//!
//! One builder per base topology (box family, cylinder family, pipe), plus the
//! sphere, geosphere, grid and quad leaves. Named shapes such as cones and
//! wedges are presets over the family configs.

mod cuboid;
mod cylinder;
mod grid_quad;
mod pipe;
mod sphere;

use tracing::warn;

pub use cuboid::{BoxConfig, BoxShape, MAX_BOX_SUBDIVISIONS, generate_box, generate_wedge};
pub use cylinder::{
    CylinderConfig, generate_cone, generate_cylinder, generate_diamond, generate_pyramid,
    generate_triangle_prism,
};
pub use grid_quad::{generate_grid, generate_quad};
pub use pipe::{PipeConfig, generate_pipe};
pub use sphere::{MAX_GEOSPHERE_SUBDIVISIONS, generate_geosphere, generate_sphere};

/// Clamp a size that must be strictly positive
fn positive(value: f32, name: &str, caller: &str) -> f32 {
    if value > 0.0 {
        value
    } else {
        warn!("{caller}: {name} must be > 0.0, clamping to 0.001");
        0.001
    }
}

/// Clamp a size that may be zero but not negative
fn non_negative(value: f32, name: &str, caller: &str) -> f32 {
    if value >= 0.0 {
        value
    } else {
        warn!("{caller}: {name} must be >= 0.0, clamping to 0.0");
        0.0
    }
}

/// Clamp a subdivision depth to its maximum
fn at_most(value: u32, max: u32, name: &str, caller: &str) -> u32 {
    if value <= max {
        value
    } else {
        warn!("{caller}: {name} must be <= {max}, clamping from {value}");
        max
    }
}

/// Clamp a tessellation count to its minimum
fn at_least(value: u32, min: u32, name: &str, caller: &str) -> u32 {
    if value >= min {
        value
    } else {
        warn!("{caller}: {name} must be >= {min}, clamping to {min}");
        min
    }
}
