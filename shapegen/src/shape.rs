//! Serializable shape catalog
//!
//! `ShapeSpec` names one generator call and its parameters, so shapes can be
//! described in manifests:
//!
//! ```toml
//! shape = "cylinder"
//! bottom_radius = 1.0
//! top_radius = 0.5
//! height = 2.0
//! slice_count = 24
//! stack_count = 4
//! ```

use serde::{Deserialize, Serialize};

use crate::primitives::{
    generate_box, generate_cone, generate_cylinder, generate_diamond, generate_geosphere,
    generate_grid, generate_pipe, generate_pyramid, generate_quad, generate_sphere,
    generate_triangle_prism, generate_wedge,
};
use crate::types::MeshData;

fn default_slices() -> u32 {
    16
}

fn default_stacks() -> u32 {
    1
}

/// One parametric solid and its parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeSpec {
    Box {
        width: f32,
        height: f32,
        depth: f32,
        #[serde(default)]
        subdivisions: u32,
    },
    Sphere {
        radius: f32,
        #[serde(default = "default_slices")]
        slice_count: u32,
        #[serde(default = "default_slices")]
        stack_count: u32,
    },
    Geosphere {
        radius: f32,
        #[serde(default)]
        subdivisions: u32,
    },
    Cylinder {
        bottom_radius: f32,
        top_radius: f32,
        height: f32,
        #[serde(default = "default_slices")]
        slice_count: u32,
        #[serde(default = "default_stacks")]
        stack_count: u32,
    },
    Pipe {
        top_radius: f32,
        bottom_radius: f32,
        height: f32,
        #[serde(default = "default_slices")]
        slice_count: u32,
        #[serde(default = "default_stacks")]
        stack_count: u32,
    },
    Wedge {
        width: f32,
        height: f32,
        depth: f32,
        #[serde(default)]
        subdivisions: u32,
    },
    Diamond {
        radius: f32,
        height: f32,
        /// Equator extent along Z; `2 * radius` when absent
        #[serde(default, skip_serializing_if = "Option::is_none")]
        depth: Option<f32>,
        #[serde(default = "default_slices")]
        slice_count: u32,
        #[serde(default)]
        subdivisions: u32,
    },
    Cone {
        bottom_radius: f32,
        height: f32,
        #[serde(default = "default_slices")]
        slice_count: u32,
        #[serde(default = "default_stacks")]
        stack_count: u32,
    },
    Pyramid {
        bottom_radius: f32,
        height: f32,
        #[serde(default = "default_stacks")]
        stack_count: u32,
    },
    TrianglePrism {
        bottom_radius: f32,
        height: f32,
        #[serde(default = "default_stacks")]
        stack_count: u32,
    },
    Grid {
        width: f32,
        depth: f32,
        m: u32,
        n: u32,
    },
    Quad {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        #[serde(default)]
        depth: f32,
    },
}

impl ShapeSpec {
    /// Every value accepted in the `shape` tag
    pub const NAMES: [&'static str; 12] = [
        "box",
        "sphere",
        "geosphere",
        "cylinder",
        "pipe",
        "wedge",
        "diamond",
        "cone",
        "pyramid",
        "triangle_prism",
        "grid",
        "quad",
    ];

    /// Tag name of this shape
    pub fn name(&self) -> &'static str {
        match self {
            Self::Box { .. } => "box",
            Self::Sphere { .. } => "sphere",
            Self::Geosphere { .. } => "geosphere",
            Self::Cylinder { .. } => "cylinder",
            Self::Pipe { .. } => "pipe",
            Self::Wedge { .. } => "wedge",
            Self::Diamond { .. } => "diamond",
            Self::Cone { .. } => "cone",
            Self::Pyramid { .. } => "pyramid",
            Self::TrianglePrism { .. } => "triangle_prism",
            Self::Grid { .. } => "grid",
            Self::Quad { .. } => "quad",
        }
    }

    /// Run the matching generator
    pub fn build(&self) -> MeshData {
        match *self {
            Self::Box {
                width,
                height,
                depth,
                subdivisions,
            } => generate_box(width, height, depth, subdivisions),
            Self::Sphere {
                radius,
                slice_count,
                stack_count,
            } => generate_sphere(radius, slice_count, stack_count),
            Self::Geosphere {
                radius,
                subdivisions,
            } => generate_geosphere(radius, subdivisions),
            Self::Cylinder {
                bottom_radius,
                top_radius,
                height,
                slice_count,
                stack_count,
            } => generate_cylinder(bottom_radius, top_radius, height, slice_count, stack_count),
            Self::Pipe {
                top_radius,
                bottom_radius,
                height,
                slice_count,
                stack_count,
            } => generate_pipe(top_radius, bottom_radius, height, slice_count, stack_count),
            Self::Wedge {
                width,
                height,
                depth,
                subdivisions,
            } => generate_wedge(width, height, depth, subdivisions),
            Self::Diamond {
                radius,
                height,
                depth,
                slice_count,
                subdivisions,
            } => generate_diamond(
                radius,
                height,
                depth.unwrap_or(2.0 * radius),
                slice_count,
                subdivisions,
            ),
            Self::Cone {
                bottom_radius,
                height,
                slice_count,
                stack_count,
            } => generate_cone(bottom_radius, height, slice_count, stack_count),
            Self::Pyramid {
                bottom_radius,
                height,
                stack_count,
            } => generate_pyramid(bottom_radius, height, stack_count),
            Self::TrianglePrism {
                bottom_radius,
                height,
                stack_count,
            } => generate_triangle_prism(bottom_radius, height, stack_count),
            Self::Grid { width, depth, m, n } => generate_grid(width, depth, m, n),
            Self::Quad { x, y, w, h, depth } => generate_quad(x, y, w, h, depth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cylinder_from_toml() {
        let spec: ShapeSpec = toml::from_str(
            r#"
            shape = "cylinder"
            bottom_radius = 1.0
            top_radius = 0.5
            height = 2.0
            slice_count = 24
            stack_count = 4
            "#,
        )
        .unwrap();

        assert_eq!(spec.name(), "cylinder");
        assert_eq!(spec.build().vertex_count(), 5 * 25 + 2 * 26);
    }

    #[test]
    fn test_defaults_applied() {
        let spec: ShapeSpec = toml::from_str("shape = \"sphere\"\nradius = 2.0").unwrap();
        assert_eq!(
            spec,
            ShapeSpec::Sphere {
                radius: 2.0,
                slice_count: 16,
                stack_count: 16
            }
        );
    }

    #[test]
    fn test_unknown_shape_rejected() {
        let result: Result<ShapeSpec, _> = toml::from_str("shape = \"torus\"\nradius = 1.0");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_field_rejected() {
        let result: Result<ShapeSpec, _> = toml::from_str("shape = \"grid\"\nwidth = 1.0");
        assert!(result.is_err());
    }

    #[test]
    fn test_diamond_depth_defaults_to_width() {
        let spec: ShapeSpec = toml::from_str(
            r#"
            shape = "diamond"
            radius = 1.5
            height = 2.0
            subdivisions = 1
            "#,
        )
        .unwrap();

        let (min, max) = spec.build().bounds().unwrap();
        assert!((max.z - 1.5).abs() < 1e-5);
        assert!((min.z + 1.5).abs() < 1e-5);
        assert!(!toml::to_string(&spec).unwrap().contains("depth"));

        let flat: ShapeSpec =
            toml::from_str("shape = \"diamond\"\nradius = 1.5\nheight = 2.0\ndepth = 1.0")
                .unwrap();
        let (_, max) = flat.build().bounds().unwrap();
        assert!((max.z - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_names_match_tags() {
        let specs = [
            ShapeSpec::Geosphere {
                radius: 1.0,
                subdivisions: 1,
            },
            ShapeSpec::TrianglePrism {
                bottom_radius: 1.0,
                height: 1.0,
                stack_count: 1,
            },
            ShapeSpec::Quad {
                x: 0.0,
                y: 0.0,
                w: 1.0,
                h: 1.0,
                depth: 0.0,
            },
        ];
        for spec in specs {
            assert!(ShapeSpec::NAMES.contains(&spec.name()));
            let text = toml::to_string(&spec).unwrap();
            assert!(text.contains(&format!("shape = \"{}\"", spec.name())));
        }
    }
}
