//! Writing meshes in the supported file formats

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use shapegen::{MeshData, save_obj, write_packed};

/// Output file format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Wavefront OBJ text
    #[default]
    Obj,
    /// Little-endian vertex and index buffers behind an `SGM1` header
    Packed,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Obj => "obj",
            Self::Packed => "sgm",
        }
    }
}

/// Write `mesh` to `path` in the given format
pub fn write_mesh(mesh: &MeshData, path: &Path, name: &str, format: OutputFormat) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    match format {
        OutputFormat::Obj => save_obj(mesh, path, name)
            .with_context(|| format!("Failed to write OBJ: {}", path.display()))?,
        OutputFormat::Packed => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_packed(mesh, &mut writer)
                .and_then(|()| writer.flush())
                .with_context(|| format!("Failed to write packed mesh: {}", path.display()))?;
        }
    }

    Ok(())
}
