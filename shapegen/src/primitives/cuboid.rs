//! Box family: box and wedge
//!
//! Both start from the six axis-aligned box faces. The wedge drops the top and
//! front faces, cuts the top-front corner off both side faces, and closes the
//! gap with one sloped quad.

use glam::{Vec2, Vec3};

use super::{at_most, positive};
use crate::subdivide::subdivide_levels;
use crate::types::{MeshData, Vertex};

/// Upper bound on box subdivision passes
pub const MAX_BOX_SUBDIVISIONS: u32 = 6;

/// Which member of the box family to build
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxShape {
    #[default]
    Cuboid,
    /// Triangular-section prism: box with its top-front edge removed
    Wedge,
}

/// Box-family parameters
///
/// `width`, `height` and `depth` are full extents along X, Y and Z; the solid is
/// centered at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxConfig {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub subdivisions: u32,
    pub shape: BoxShape,
}

/// One planar face: four corners in CCW order, optionally with a corner cut away
struct Face {
    normal: Vec3,
    tangent: Vec3,
    corners: [(Vec3, Vec2); 4],
    omit: Option<usize>,
}

impl BoxConfig {
    pub fn new(width: f32, height: f32, depth: f32, subdivisions: u32) -> Self {
        Self {
            width,
            height,
            depth,
            subdivisions,
            shape: BoxShape::Cuboid,
        }
    }

    pub fn wedge(width: f32, height: f32, depth: f32, subdivisions: u32) -> Self {
        Self {
            shape: BoxShape::Wedge,
            ..Self::new(width, height, depth, subdivisions)
        }
    }

    pub fn build(&self) -> MeshData {
        const CALLER: &str = "BoxConfig::build";
        let hx = positive(self.width, "width", CALLER) * 0.5;
        let hy = positive(self.height, "height", CALLER) * 0.5;
        let hz = positive(self.depth, "depth", CALLER) * 0.5;

        let subdivisions = at_most(self.subdivisions, MAX_BOX_SUBDIVISIONS, "subdivisions", CALLER);

        let faces = match self.shape {
            BoxShape::Cuboid => box_faces(hx, hy, hz).into_iter().collect::<Vec<_>>(),
            BoxShape::Wedge => wedge_faces(hx, hy, hz),
        };

        let mut mesh = MeshData::with_capacity(faces.len() * 4, faces.len() * 6);
        for face in &faces {
            add_face(&mut mesh, face);
        }

        subdivide_levels(&mut mesh, subdivisions);
        mesh
    }
}

/// Generate a box centered at the origin with hard per-face normals
///
/// # Arguments
/// * `width` - Extent along X
/// * `height` - Extent along Y
/// * `depth` - Extent along Z
/// * `subdivisions` - Midpoint subdivision passes per face (max 6)
///
/// # Returns
/// Mesh with `12 · 4^k` triangles for `k` subdivisions (24 vertices when `k = 0`)
///
/// # UV Mapping
/// Every face spans the full [0,1] square.
pub fn generate_box(width: f32, height: f32, depth: f32, subdivisions: u32) -> MeshData {
    BoxConfig::new(width, height, depth, subdivisions).build()
}

/// Generate a wedge (ramp) by cutting the top-front edge off a box
///
/// The slope runs from the bottom-front edge up to the top-back edge.
pub fn generate_wedge(width: f32, height: f32, depth: f32, subdivisions: u32) -> MeshData {
    BoxConfig::wedge(width, height, depth, subdivisions).build()
}

fn add_face(mesh: &mut MeshData, face: &Face) {
    let corners = face
        .corners
        .iter()
        .enumerate()
        .filter(|&(i, _)| Some(i) != face.omit)
        .map(|(_, &(position, uv))| {
            mesh.add_vertex(Vertex::new(position, face.normal, face.tangent, uv))
        })
        .collect::<Vec<_>>();

    // Fan from the first corner keeps the CCW order of the remaining corners
    for pair in corners[1..].windows(2) {
        mesh.add_triangle(corners[0], pair[0], pair[1]);
    }
}

/// The six faces of a box with half extents `hx`, `hy`, `hz`
///
/// Every face shares one UV layout: the tangent runs along U from the first
/// corner to the second, and V runs along `normal × tangent`.
fn box_faces(hx: f32, hy: f32, hz: f32) -> [Face; 6] {
    const UVS: [Vec2; 4] = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
    let face = |normal: Vec3, tangent: Vec3, positions: [Vec3; 4]| Face {
        normal,
        tangent,
        corners: [
            (positions[0], UVS[0]),
            (positions[1], UVS[1]),
            (positions[2], UVS[2]),
            (positions[3], UVS[3]),
        ],
        omit: None,
    };

    [
        // Front (+Z)
        face(
            Vec3::Z,
            Vec3::X,
            [
                Vec3::new(-hx, -hy, hz),
                Vec3::new(hx, -hy, hz),
                Vec3::new(hx, hy, hz),
                Vec3::new(-hx, hy, hz),
            ],
        ),
        // Back (-Z)
        face(
            Vec3::NEG_Z,
            Vec3::NEG_X,
            [
                Vec3::new(hx, -hy, -hz),
                Vec3::new(-hx, -hy, -hz),
                Vec3::new(-hx, hy, -hz),
                Vec3::new(hx, hy, -hz),
            ],
        ),
        // Top (+Y)
        face(
            Vec3::Y,
            Vec3::X,
            [
                Vec3::new(-hx, hy, hz),
                Vec3::new(hx, hy, hz),
                Vec3::new(hx, hy, -hz),
                Vec3::new(-hx, hy, -hz),
            ],
        ),
        // Bottom (-Y)
        face(
            Vec3::NEG_Y,
            Vec3::X,
            [
                Vec3::new(-hx, -hy, -hz),
                Vec3::new(hx, -hy, -hz),
                Vec3::new(hx, -hy, hz),
                Vec3::new(-hx, -hy, hz),
            ],
        ),
        // Right (+X)
        face(
            Vec3::X,
            Vec3::NEG_Z,
            [
                Vec3::new(hx, -hy, hz),
                Vec3::new(hx, -hy, -hz),
                Vec3::new(hx, hy, -hz),
                Vec3::new(hx, hy, hz),
            ],
        ),
        // Left (-X)
        face(
            Vec3::NEG_X,
            Vec3::Z,
            [
                Vec3::new(-hx, -hy, -hz),
                Vec3::new(-hx, -hy, hz),
                Vec3::new(-hx, hy, hz),
                Vec3::new(-hx, hy, -hz),
            ],
        ),
    ]
}

fn wedge_faces(hx: f32, hy: f32, hz: f32) -> Vec<Face> {
    let [front, back, top, bottom, mut right, mut left] = box_faces(hx, hy, hz);

    // Top-front corners: (hx, hy, hz) on the right face, (-hx, hy, hz) on the left
    right.omit = Some(3);
    left.omit = Some(2);

    // The slope reuses the front face's corners with the top edge pushed back
    let slope = Face {
        normal: Vec3::new(0.0, hz, hy).normalize(),
        tangent: Vec3::X,
        corners: [
            front.corners[0],
            front.corners[1],
            (top.corners[2].0, front.corners[2].1),
            (top.corners[3].0, front.corners[3].1),
        ],
        omit: None,
    };

    vec![back, bottom, right, left, slope]
}
