//! Batch command - build every shape listed in a manifest

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use shapegen::subdivide_levels;
use tracing::{info, warn};

use crate::manifest::BatchManifest;
use crate::output::write_mesh;

/// Arguments for the batch command
#[derive(Args)]
pub struct BatchArgs {
    /// Path to the manifest file
    #[arg(default_value = "shapes.toml")]
    pub manifest: PathBuf,

    /// Output directory (overrides the manifest)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the batch command
pub fn execute(args: BatchArgs) -> Result<()> {
    let manifest = BatchManifest::load(&args.manifest)?;
    let base = args.manifest.parent().unwrap_or(Path::new("."));

    let written = run(&manifest, base, args.output.as_deref())?;
    info!(count = written.len(), "batch complete");

    Ok(())
}

/// Generate every mesh in `manifest`, returning the written paths
///
/// Relative output directories resolve against `base`.
pub fn run(
    manifest: &BatchManifest,
    base: &Path,
    output_override: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    let dir = match output_override {
        Some(dir) => dir.to_path_buf(),
        None => base.join(&manifest.output.dir),
    };
    let format = manifest.output.format;

    if manifest.meshes.is_empty() {
        warn!("manifest lists no meshes");
    }

    let mut written = Vec::with_capacity(manifest.meshes.len());
    for entry in &manifest.meshes {
        let mut mesh = entry.spec.build();
        subdivide_levels(&mut mesh, entry.subdivide);

        if let Err(err) = mesh.validate() {
            warn!(id = %entry.id, %err, "mesh failed validation");
        }

        let path = dir.join(format!("{}.{}", entry.id, format.extension()));
        write_mesh(&mesh, &path, &entry.id, format)?;

        info!(
            id = %entry.id,
            shape = entry.spec.name(),
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "wrote mesh"
        );
        written.push(path);
    }

    Ok(written)
}
