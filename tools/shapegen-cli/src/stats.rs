//! Stats command - print a JSON summary of one shape

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use shapegen::{MeshData, ShapeSpec};

use crate::params::parse_shape;

/// Arguments for the stats command
#[derive(Args)]
pub struct StatsArgs {
    /// Shape name (box, sphere, geosphere, cylinder, ...)
    pub shape: String,

    /// Shape parameter as key=value (repeatable)
    #[arg(short, long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MeshStats {
    pub shape: &'static str,
    pub vertices: usize,
    pub triangles: usize,
    pub bounds: Option<Bounds>,
    /// Whether every index fits a 16-bit index buffer
    pub fits_u16: bool,
    /// Validation failure, if any
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Bounds {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl MeshStats {
    pub fn collect(spec: &ShapeSpec, mesh: &MeshData) -> Self {
        Self {
            shape: spec.name(),
            vertices: mesh.vertex_count(),
            triangles: mesh.triangle_count(),
            bounds: mesh.bounds().map(|(min, max)| Bounds {
                min: min.to_array(),
                max: max.to_array(),
            }),
            fits_u16: mesh.try_indices16().is_ok(),
            error: mesh.validate().err().map(|err| err.to_string()),
        }
    }
}

/// Execute the stats command
pub fn execute(args: StatsArgs) -> Result<()> {
    let spec = parse_shape(&args.shape, &args.params)?;
    let mesh = spec.build();

    let stats = MeshStats::collect(&spec, &mesh);
    let json = serde_json::to_string_pretty(&stats).context("Failed to serialize stats")?;
    println!("{json}");

    Ok(())
}
