//! Mesh types
//!
//! Shared vertex and mesh containers used by every generator.

use std::sync::OnceLock;

use glam::{Vec2, Vec3};

use crate::error::GeometryError;

/// Tolerance used by [`MeshData::validate`] for unit-length checks
pub const UNIT_LENGTH_TOLERANCE: f32 = 1e-3;

/// Vertex with position, normal, tangent and texture coordinates
///
/// The tangent follows the direction of increasing U on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub tangent: Vec3,
    pub uv: Vec2,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: Vec3, normal: Vec3, tangent: Vec3, uv: Vec2) -> Self {
        Self {
            position,
            normal,
            tangent,
            uv,
        }
    }

    /// Vertex halfway between `a` and `b`
    ///
    /// Every attribute is interpolated linearly, then normal and tangent are
    /// re-normalized. If the two directions cancel out, `a`'s is kept.
    pub fn midpoint(a: &Vertex, b: &Vertex) -> Vertex {
        let normal = (a.normal + b.normal).try_normalize().unwrap_or(a.normal);
        let tangent = (a.tangent + b.tangent).try_normalize().unwrap_or(a.tangent);

        Vertex {
            position: a.position.lerp(b.position, 0.5),
            normal,
            tangent,
            uv: a.uv.lerp(b.uv, 0.5),
        }
    }
}

/// Generated mesh data: vertices plus a 32-bit triangle list
///
/// Every three consecutive indices form one counter-clockwise, outward-facing
/// triangle. A 16-bit copy of the index buffer is built on first request and
/// cached; every `&mut self` method that touches the buffers drops the cache,
/// so the narrow view can never go stale.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    indices16: OnceLock<Vec<u16>>,
}

impl MeshData {
    /// Create empty mesh data
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty mesh data with room for the given number of vertices and indices
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
            indices16: OnceLock::new(),
        }
    }

    /// Build mesh data from existing buffers, checking index bounds and triangle count
    pub fn from_parts(vertices: Vec<Vertex>, indices: Vec<u32>) -> Result<Self, GeometryError> {
        let mesh = Self {
            vertices,
            indices,
            indices16: OnceLock::new(),
        };
        mesh.check_topology()?;
        Ok(mesh)
    }

    /// Add a vertex and return its index
    pub fn add_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Add a triangle using three vertex indices
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices16.take();
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    /// Append another mesh, rebasing its indices after this mesh's vertices
    pub fn append(&mut self, other: MeshData) {
        self.indices16.take();
        let base = self.vertices.len() as u32;
        self.vertices.extend(other.vertices);
        self.indices
            .extend(other.indices.into_iter().map(|index| index + base));
    }

    /// Replace both buffers at once
    pub(crate) fn replace(&mut self, vertices: Vec<Vertex>, indices: Vec<u32>) {
        self.indices16.take();
        self.vertices = vertices;
        self.indices = indices;
    }

    /// Mutable access to vertex attributes (topology stays untouched)
    pub(crate) fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// 16-bit index view, narrowed from the 32-bit indices on first call
    ///
    /// Indices above `u16::MAX` are truncated; use [`MeshData::try_indices16`]
    /// when the mesh might be too large. Repeated calls return the same slice.
    pub fn indices16(&self) -> &[u16] {
        self.indices16
            .get_or_init(|| self.indices.iter().map(|&index| index as u16).collect())
    }

    /// 16-bit index view, failing if any index does not fit
    pub fn try_indices16(&self) -> Result<&[u16], GeometryError> {
        let max_index = self.indices.iter().copied().max().unwrap_or(0);
        if max_index > u16::MAX as u32 {
            return Err(GeometryError::IndexOverflow { max_index });
        }
        Ok(self.indices16())
    }

    /// Axis-aligned bounds of all vertex positions
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = self.vertices.first()?.position;
        Some(self.vertices.iter().fold((first, first), |(min, max), v| {
            (min.min(v.position), max.max(v.position))
        }))
    }

    /// Take ownership of the vertex and index buffers
    pub fn into_parts(self) -> (Vec<Vertex>, Vec<u32>) {
        (self.vertices, self.indices)
    }

    /// Check the triangle-list invariants
    ///
    /// Index count must be a multiple of 3, every index must be in bounds, and
    /// every normal and tangent must be unit length.
    pub fn validate(&self) -> Result<(), GeometryError> {
        self.check_topology()?;

        for (vertex, v) in self.vertices.iter().enumerate() {
            let length = v.normal.length();
            if (length - 1.0).abs() > UNIT_LENGTH_TOLERANCE {
                return Err(GeometryError::NonUnitNormal { vertex, length });
            }
            let length = v.tangent.length();
            if (length - 1.0).abs() > UNIT_LENGTH_TOLERANCE {
                return Err(GeometryError::NonUnitTangent { vertex, length });
            }
        }

        Ok(())
    }

    fn check_topology(&self) -> Result<(), GeometryError> {
        if self.indices.len() % 3 != 0 {
            return Err(GeometryError::IndexCountNotTriangles {
                count: self.indices.len(),
            });
        }

        let vertex_count = self.vertices.len();
        if let Some((position, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &index)| index as usize >= vertex_count)
        {
            return Err(GeometryError::IndexOutOfBounds {
                index,
                position,
                vertex_count,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(x: f32, y: f32, z: f32) -> Vertex {
        Vertex::new(Vec3::new(x, y, z), Vec3::Z, Vec3::X, Vec2::ZERO)
    }

    fn triangle() -> MeshData {
        let mut mesh = MeshData::new();
        let a = mesh.add_vertex(vertex(0.0, 0.0, 0.0));
        let b = mesh.add_vertex(vertex(1.0, 0.0, 0.0));
        let c = mesh.add_vertex(vertex(0.0, 1.0, 0.0));
        mesh.add_triangle(a, b, c);
        mesh
    }

    #[test]
    fn test_indices16_is_cached() {
        let mesh = triangle();
        let first = mesh.indices16();
        let second = mesh.indices16();

        assert_eq!(first, &[0, 1, 2]);
        assert!(std::ptr::eq(first.as_ptr(), second.as_ptr()));
    }

    #[test]
    fn test_indices16_dropped_after_mutation() {
        let mut mesh = triangle();
        assert_eq!(mesh.indices16().len(), 3);

        mesh.add_triangle(2, 1, 0);
        assert_eq!(mesh.indices16(), &[0, 1, 2, 2, 1, 0]);
    }

    #[test]
    fn test_try_indices16_overflow() {
        let mut mesh = MeshData::new();
        for i in 0..=(u16::MAX as u32 + 1) {
            mesh.add_vertex(vertex(i as f32, 0.0, 0.0));
        }
        mesh.add_triangle(0, 1, u16::MAX as u32 + 1);

        match mesh.try_indices16() {
            Err(GeometryError::IndexOverflow { max_index }) => {
                assert_eq!(max_index, u16::MAX as u32 + 1)
            }
            other => panic!("expected overflow, got {other:?}"),
        }

        // Unchecked view narrows (truncates) instead
        assert_eq!(mesh.indices16()[2], 0);
    }

    #[test]
    fn test_midpoint_renormalizes() {
        let a = Vertex::new(Vec3::ZERO, Vec3::X, Vec3::Y, Vec2::new(0.0, 0.0));
        let b = Vertex::new(Vec3::new(2.0, 0.0, 0.0), Vec3::Y, Vec3::Z, Vec2::new(1.0, 1.0));
        let m = Vertex::midpoint(&a, &b);

        assert_eq!(m.position, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(m.uv, Vec2::new(0.5, 0.5));
        assert!((m.normal.length() - 1.0).abs() < 1e-6);
        assert!((m.tangent.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_midpoint_opposite_normals_falls_back() {
        let a = Vertex::new(Vec3::ZERO, Vec3::X, Vec3::Y, Vec2::ZERO);
        let b = Vertex::new(Vec3::ONE, Vec3::NEG_X, Vec3::Y, Vec2::ONE);

        assert_eq!(Vertex::midpoint(&a, &b).normal, Vec3::X);
    }

    #[test]
    fn test_from_parts_rejects_bad_index() {
        let vertices = vec![vertex(0.0, 0.0, 0.0), vertex(1.0, 0.0, 0.0)];
        let err = MeshData::from_parts(vertices, vec![0, 1, 2]).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::IndexOutOfBounds { index: 2, position: 2, vertex_count: 2 }
        ));
    }

    #[test]
    fn test_from_parts_rejects_partial_triangle() {
        let vertices = vec![vertex(0.0, 0.0, 0.0), vertex(1.0, 0.0, 0.0)];
        let err = MeshData::from_parts(vertices, vec![0, 1]).unwrap_err();
        assert!(matches!(err, GeometryError::IndexCountNotTriangles { count: 2 }));
    }

    #[test]
    fn test_validate_rejects_short_normal() {
        let mut mesh = triangle();
        mesh.vertices_mut()[1].normal = Vec3::new(0.0, 0.0, 0.5);

        assert!(matches!(
            mesh.validate(),
            Err(GeometryError::NonUnitNormal { vertex: 1, .. })
        ));
    }

    #[test]
    fn test_append_rebases_indices() {
        let mut mesh = triangle();
        mesh.append(triangle());

        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.indices(), &[0, 1, 2, 3, 4, 5]);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_bounds() {
        let mesh = triangle();
        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, Vec3::ZERO);
        assert_eq!(max, Vec3::new(1.0, 1.0, 0.0));
        assert!(MeshData::new().bounds().is_none());
    }
}
