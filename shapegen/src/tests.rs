//! Invariants shared by every generator

use glam::Vec3;

use crate::*;

fn all_shapes() -> Vec<(&'static str, MeshData)> {
    vec![
        ("box", generate_box(1.0, 2.0, 3.0, 1)),
        ("sphere", generate_sphere(1.0, 12, 6)),
        ("geosphere", generate_geosphere(2.0, 2)),
        ("cylinder", generate_cylinder(1.0, 0.5, 2.0, 10, 3)),
        ("cone", generate_cone(1.0, 2.0, 10, 2)),
        ("inverted_cone", generate_cylinder(0.0, 1.0, 2.0, 10, 2)),
        ("pyramid", generate_pyramid(1.0, 1.0, 1)),
        ("triangle_prism", generate_triangle_prism(1.0, 2.0, 2)),
        ("pipe", generate_pipe(1.0, 1.5, 2.0, 12, 2)),
        ("wedge", generate_wedge(2.0, 1.0, 3.0, 1)),
        ("diamond", generate_diamond(1.0, 3.0, 1.5, 6, 1)),
        ("grid", generate_grid(4.0, 4.0, 5, 6)),
        ("quad", generate_quad(-1.0, 1.0, 2.0, 2.0, 0.0)),
    ]
}

#[test]
fn test_all_shapes_validate() {
    for (name, mesh) in all_shapes() {
        assert!(mesh.indices().len() % 3 == 0, "{name}");
        assert!(mesh.triangle_count() > 0, "{name}");
        if let Err(err) = mesh.validate() {
            panic!("{name}: {err}");
        }
    }
}

#[test]
fn test_tangents_orthogonal_to_normals() {
    for (name, mesh) in all_shapes() {
        for (i, v) in mesh.vertices().iter().enumerate() {
            assert!(
                v.normal.dot(v.tangent).abs() < 1e-4,
                "{name}: vertex {i} tangent {:?} normal {:?}",
                v.tangent,
                v.normal
            );
        }
    }
}

#[test]
fn test_outward_winding() {
    for (name, mesh) in all_shapes() {
        let vertices = mesh.vertices();
        for [a, b, c] in mesh.triangles() {
            let (va, vb, vc) = (
                vertices[a as usize],
                vertices[b as usize],
                vertices[c as usize],
            );
            let face_normal = (vb.position - va.position).cross(vc.position - va.position);

            // Zero-area triangles appear where a ring collapses to an apex
            if face_normal.length_squared() < 1e-12 {
                continue;
            }

            let vertex_normal = va.normal + vb.normal + vc.normal;
            assert!(
                face_normal.dot(vertex_normal) > 0.0,
                "{name}: triangle ({a}, {b}, {c}) is wound against its normals"
            );
        }
    }
}

/// Tangent and bitangent implied by a triangle's positions and UVs
///
/// `None` when the UVs are degenerate.
fn uv_frame(corners: &[Vertex; 3]) -> Option<(Vec3, Vec3)> {
    let e1 = corners[1].position - corners[0].position;
    let e2 = corners[2].position - corners[0].position;
    let d1 = corners[1].uv - corners[0].uv;
    let d2 = corners[2].uv - corners[0].uv;

    let det = d1.x * d2.y - d2.x * d1.y;
    if det.abs() < 1e-9 {
        return None;
    }
    let tangent = (e1 * d2.y - e2 * d1.y) / det;
    let bitangent = (e2 * d1.x - e1 * d2.x) / det;
    Some((tangent, bitangent))
}

/// Check that the vertex frame agrees with the UV frame, with
/// `normal × tangent` along +V
fn assert_frame_follows_uvs(name: &str, corners: &[Vertex; 3]) {
    let face_normal = (corners[1].position - corners[0].position)
        .cross(corners[2].position - corners[0].position);
    if face_normal.length_squared() < 1e-12 {
        return;
    }
    let Some((uv_tangent, uv_bitangent)) = uv_frame(corners) else {
        return;
    };

    let normal: Vec3 = corners.iter().map(|v| v.normal).sum();
    let tangent: Vec3 = corners.iter().map(|v| v.tangent).sum();
    assert!(
        tangent.dot(uv_tangent) > 0.0,
        "{name}: tangent {tangent:?} runs against U {uv_tangent:?}"
    );
    assert!(
        normal.cross(tangent).dot(uv_bitangent) > 0.0,
        "{name}: normal × tangent runs against V {uv_bitangent:?}"
    );
}

#[test]
fn test_tangent_frames_follow_uvs() {
    // The geosphere's U wraps without a duplicated seam; checked separately
    for (name, mesh) in all_shapes().into_iter().filter(|(name, _)| *name != "geosphere") {
        let vertices = mesh.vertices();
        for tri in mesh.triangles() {
            assert_frame_follows_uvs(name, &tri.map(|i| vertices[i as usize]));
        }
    }
}

#[test]
fn test_geosphere_frames_follow_uvs_off_seam() {
    for subdivisions in 1..=3 {
        let mesh = generate_geosphere(1.0, subdivisions);
        let vertices = mesh.vertices();
        let mut checked = 0;
        for tri in mesh.triangles() {
            let corners = tri.map(|i| vertices[i as usize]);
            let (lo, hi) = corners
                .iter()
                .fold((f32::MAX, f32::MIN), |(lo, hi), v| (lo.min(v.uv.x), hi.max(v.uv.x)));
            // Straddles θ = 0, where U jumps from ~1 back to 0
            if hi - lo > 0.5 {
                continue;
            }
            assert_frame_follows_uvs("geosphere", &corners);
            checked += 1;
        }
        assert!(checked > mesh.triangle_count() / 2);
    }
}

#[test]
fn test_closed_solids_enclose_origin() {
    // Every face of a convex solid centered at the origin faces away from it
    let solids = [
        ("box", generate_box(1.0, 1.0, 1.0, 0)),
        ("geosphere", generate_geosphere(1.0, 1)),
        ("cylinder", generate_cylinder(1.0, 1.0, 1.0, 8, 1)),
        ("diamond", generate_diamond(1.0, 2.0, 2.0, 4, 0)),
    ];
    for (name, mesh) in solids {
        let vertices = mesh.vertices();
        for [a, b, c] in mesh.triangles() {
            let pa = vertices[a as usize].position;
            let pb = vertices[b as usize].position;
            let pc = vertices[c as usize].position;
            let face_normal = (pb - pa).cross(pc - pa);
            if face_normal.length_squared() < 1e-12 {
                continue;
            }
            let centroid = (pa + pb + pc) / 3.0;
            assert!(face_normal.dot(centroid) > 0.0, "{name}");
        }
    }
}

#[test]
fn test_subdivide_any_shape() {
    let mut mesh = generate_cylinder(1.0, 1.0, 1.0, 6, 1);
    let original = mesh.clone();
    subdivide(&mut mesh);

    assert_eq!(mesh.triangle_count(), original.triangle_count() * 4);
    for (t, tri) in original.triangles().enumerate() {
        for (k, &index) in tri.iter().enumerate() {
            assert_eq!(
                original.vertices()[index as usize].position,
                mesh.vertices()[t * 6 + k].position
            );
        }
    }
    assert!(mesh.validate().is_ok());
}

#[test]
fn test_indices16_identity_across_threads() {
    let mesh = generate_sphere(1.0, 8, 4);
    let expected: Vec<u16> = mesh.indices().iter().map(|&i| i as u16).collect();

    let pointers: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| mesh.indices16().as_ptr() as usize))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(pointers.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(mesh.indices16(), expected.as_slice());
    assert!(mesh.try_indices16().is_ok());
}

#[test]
fn test_shape_spec_matches_direct_call() {
    let spec = ShapeSpec::Pipe {
        top_radius: 1.0,
        bottom_radius: 1.5,
        height: 2.0,
        slice_count: 12,
        stack_count: 2,
    };
    let direct = generate_pipe(1.0, 1.5, 2.0, 12, 2);
    let built = spec.build();

    assert_eq!(built.vertices(), direct.vertices());
    assert_eq!(built.indices(), direct.indices());
}

#[test]
fn test_meshes_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MeshData>();
    assert_send_sync::<Vertex>();
}

#[test]
fn test_box_subdivision_matches_engine() {
    let mut manual = generate_box(1.0, 1.0, 1.0, 0);
    subdivide_levels(&mut manual, 2);
    let built = generate_box(1.0, 1.0, 1.0, 2);

    assert_eq!(manual.vertices(), built.vertices());
    assert_eq!(manual.indices(), built.indices());
    // Identical face attributes survive interpolation exactly
    assert!(built.vertices().iter().all(|v| v.normal.abs().max_element() == 1.0));
    assert!(built.vertices().iter().all(|v| v.tangent.abs().max_element() == 1.0));
}
