//! Wavefront OBJ export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::GeometryError;
use crate::types::MeshData;

/// Write a mesh as a single OBJ object
///
/// Emits `v`, `vt`, `vn` records and 1-based `f v/vt/vn` faces. OBJ texture
/// space has V pointing up, so V is flipped on the way out.
pub fn write_obj<W: Write>(mesh: &MeshData, writer: &mut W, name: &str) -> std::io::Result<()> {
    writeln!(writer, "# shapegen")?;
    writeln!(
        writer,
        "# {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;
    writeln!(writer, "o {name}")?;

    for v in mesh.vertices() {
        let p = v.position;
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for v in mesh.vertices() {
        writeln!(writer, "vt {} {}", v.uv.x, 1.0 - v.uv.y)?;
    }
    for v in mesh.vertices() {
        let n = v.normal;
        writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    Ok(())
}

/// Write a mesh to an OBJ file at `path`
pub fn save_obj(mesh: &MeshData, path: &Path, name: &str) -> Result<(), GeometryError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_obj(mesh, &mut writer, name)?;
    writer.flush()?;
    info!(path = %path.display(), name, "wrote OBJ");
    Ok(())
}
