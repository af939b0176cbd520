//! Generate command - build one shape and write it to disk

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use shapegen::subdivide_levels;
use tracing::{info, warn};

use crate::output::{OutputFormat, write_mesh};
use crate::params::parse_shape;

/// Arguments for the generate command
#[derive(Args)]
pub struct GenerateArgs {
    /// Shape name (box, sphere, geosphere, cylinder, ...)
    pub shape: String,

    /// Shape parameter as key=value (repeatable)
    #[arg(short, long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Output file (defaults to <shape>.<ext> in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Obj)]
    pub format: OutputFormat,

    /// Extra subdivision passes applied after generation
    #[arg(long, default_value_t = 0)]
    pub subdivide: u32,
}

/// Execute the generate command
pub fn execute(args: GenerateArgs) -> Result<()> {
    let spec = parse_shape(&args.shape, &args.params)?;

    let mut mesh = spec.build();
    subdivide_levels(&mut mesh, args.subdivide);

    if let Err(err) = mesh.validate() {
        warn!(shape = spec.name(), %err, "generated mesh failed validation");
    }

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.{}", spec.name(), args.format.extension())));
    write_mesh(&mesh, &output, spec.name(), args.format)?;

    info!(
        shape = spec.name(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        path = %output.display(),
        "generated mesh"
    );

    Ok(())
}
