//! `key=value` shape parameters from the command line
//!
//! Parameters are turned into a TOML document and deserialized as a
//! [`ShapeSpec`], so the command line accepts exactly what manifests accept.

use anyhow::{Context, Result, bail};
use shapegen::ShapeSpec;

/// Parse a shape name plus `key=value` pairs into a shape spec
pub fn parse_shape(shape: &str, params: &[String]) -> Result<ShapeSpec> {
    if !ShapeSpec::NAMES.contains(&shape) {
        bail!(
            "Unknown shape '{}'. Available shapes: {}",
            shape,
            ShapeSpec::NAMES.join(", ")
        );
    }

    let mut document = format!("shape = \"{shape}\"\n");
    for param in params {
        let (key, value) = param
            .split_once('=')
            .with_context(|| format!("Parameter '{param}' is not in key=value form"))?;
        let key = key.trim();
        let value = value.trim();

        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            bail!("Invalid parameter name '{key}'");
        }
        if key == "shape" {
            bail!("The shape is given positionally, not as a parameter");
        }
        if value.is_empty() {
            bail!("Parameter '{key}' has no value");
        }

        document.push_str(&format!("{key} = {value}\n"));
    }

    toml::from_str(&document).with_context(|| format!("Invalid parameters for shape '{shape}'"))
}
