//! Batch manifest parsing
//!
//! ```toml
//! [output]
//! dir = "meshes"
//! format = "packed"
//!
//! [[meshes]]
//! id = "pillar"
//! shape = "cylinder"
//! bottom_radius = 0.5
//! top_radius = 0.5
//! height = 3.0
//! subdivide = 1
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use shapegen::ShapeSpec;

use crate::output::OutputFormat;

/// Root manifest structure
#[derive(Debug, Deserialize)]
pub struct BatchManifest {
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub meshes: Vec<MeshEntry>,
}

/// Where and how meshes are written
#[derive(Debug, Deserialize)]
pub struct OutputSection {
    /// Output directory, relative to the manifest
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            format: OutputFormat::default(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("meshes")
}

/// One mesh to generate
#[derive(Debug, Deserialize)]
pub struct MeshEntry {
    /// File stem of the output
    pub id: String,
    /// Extra subdivision passes applied after generation
    #[serde(default)]
    pub subdivide: u32,
    #[serde(flatten)]
    pub spec: ShapeSpec,
}

impl BatchManifest {
    /// Load manifest from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("In manifest: {}", path.display()))
    }

    /// Parse manifest from string
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(content).context("Failed to parse manifest")?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Validate manifest fields
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.meshes {
            if entry.id.is_empty() {
                anyhow::bail!("Mesh id must not be empty");
            }
            if entry.id.contains(['/', '\\']) || entry.id == "." || entry.id == ".." {
                anyhow::bail!("Mesh id '{}' must be a plain file name", entry.id);
            }
            if !seen.insert(entry.id.as_str()) {
                anyhow::bail!("Duplicate mesh id '{}'", entry.id);
            }
        }
        Ok(())
    }
}
