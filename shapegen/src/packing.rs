//! Interleaved vertex buffers for GPU upload
//!
//! The rendering layer owns the actual upload; this module only lays the data
//! out as plain bytes. [`vertex_bytes`] and [`index_bytes`] are in-process
//! views in host byte order, meant to be handed straight to a buffer upload.
//! [`write_packed`] is the portable form: a little-endian stream for files.

use std::io::Write;

use bytemuck::{Pod, Zeroable, cast_slice};

use crate::types::MeshData;

/// Magic bytes at the start of a packed mesh stream
pub const PACKED_MAGIC: [u8; 4] = *b"SGM1";

/// Interleaved vertex: position, normal, tangent, uv (44 bytes)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct PackedVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tangent: [f32; 3],
    pub uv: [f32; 2],
}

/// Size in bytes of one [`PackedVertex`], the stride of [`vertex_bytes`]
pub const PACKED_VERTEX_STRIDE: usize = std::mem::size_of::<PackedVertex>();

/// Convert every vertex to its packed form
pub fn pack_vertices(mesh: &MeshData) -> Vec<PackedVertex> {
    mesh.vertices()
        .iter()
        .map(|v| PackedVertex {
            position: v.position.to_array(),
            normal: v.normal.to_array(),
            tangent: v.tangent.to_array(),
            uv: v.uv.to_array(),
        })
        .collect()
}

/// Vertex buffer as bytes, in host byte order
///
/// Not portable across machines; use [`write_packed`] for anything stored.
pub fn vertex_bytes(mesh: &MeshData) -> Vec<u8> {
    cast_slice(&pack_vertices(mesh)).to_vec()
}

/// 32-bit index buffer as bytes, in host byte order
///
/// Borrows the index storage without copying. Matches the index section of
/// [`write_packed`] only on little-endian hosts.
pub fn index_bytes(mesh: &MeshData) -> &[u8] {
    cast_slice(mesh.indices())
}

/// Write `[magic][vertex_count u32][index_count u32][vertices][u32 indices]`
///
/// Counts and payload are little-endian.
pub fn write_packed<W: Write>(mesh: &MeshData, writer: &mut W) -> std::io::Result<()> {
    writer.write_all(&PACKED_MAGIC)?;
    writer.write_all(&(mesh.vertex_count() as u32).to_le_bytes())?;
    writer.write_all(&(mesh.indices().len() as u32).to_le_bytes())?;

    for vertex in pack_vertices(mesh) {
        let floats: &[f32] = cast_slice(std::slice::from_ref(&vertex));
        for f in floats {
            writer.write_all(&f.to_le_bytes())?;
        }
    }
    for index in mesh.indices() {
        writer.write_all(&index.to_le_bytes())?;
    }

    Ok(())
}
