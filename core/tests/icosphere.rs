//! Property tests for the icosphere generator.

use std::collections::HashMap;

use rstest::rstest;
use terrella_core::mesh::generators::icosphere;
use terrella_core::mesh::MeshData;

fn edge_key(a: u32, b: u32) -> (u32, u32) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[rstest]
#[case(0, 12, 60)]
#[case(1, 42, 240)]
#[case(2, 162, 960)]
#[case(3, 642, 3840)]
fn vertex_and_index_counts(
    #[case] depth: u32,
    #[case] vertices: usize,
    #[case] indices: usize,
) {
    let mesh = icosphere(1.0, depth);
    assert_eq!(mesh.vertex_count(), vertices);
    assert_eq!(mesh.indices.len(), indices);
    assert_eq!(mesh.validate(), Ok(()));
}

#[rstest]
#[case(1.0, 0)]
#[case(1.0, 3)]
#[case(2.5, 2)]
#[case(100.0, 1)]
fn all_vertices_on_sphere(#[case] radius: f32, #[case] depth: u32) {
    let mesh = icosphere(radius, depth);
    for p in &mesh.positions {
        let dist = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!(
            (dist - radius).abs() < radius * 1e-5,
            "vertex {p:?} at distance {dist}, expected {radius}"
        );
    }
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
fn mesh_is_watertight(#[case] depth: u32) {
    let mesh = icosphere(1.0, depth);

    // Every undirected edge must be referenced by exactly two triangles.
    let mut edge_counts: HashMap<(u32, u32), u32> = HashMap::new();
    for tri in mesh.indices.chunks_exact(3) {
        *edge_counts.entry(edge_key(tri[0], tri[1])).or_default() += 1;
        *edge_counts.entry(edge_key(tri[1], tri[2])).or_default() += 1;
        *edge_counts.entry(edge_key(tri[2], tri[0])).or_default() += 1;
    }
    for (edge, count) in &edge_counts {
        assert_eq!(*count, 2, "edge {edge:?} referenced by {count} triangles");
    }

    // Subdivision must not have created duplicate co-located vertices.
    let mut seen: HashMap<[u32; 3], usize> = HashMap::new();
    for (i, p) in mesh.positions.iter().enumerate() {
        let key = [p[0].to_bits(), p[1].to_bits(), p[2].to_bits()];
        if let Some(&other) = seen.get(&key) {
            panic!("vertices {other} and {i} are co-located at {p:?}");
        }
        seen.insert(key, i);
    }
}

#[test]
fn generation_is_deterministic() {
    let a = icosphere(3.7, 3);
    let b = icosphere(3.7, 3);

    let bits = |mesh: &MeshData| {
        (
            mesh.positions
                .iter()
                .flat_map(|p| p.iter().map(|c| c.to_bits()))
                .collect::<Vec<_>>(),
            mesh.uvs
                .iter()
                .flat_map(|p| p.iter().map(|c| c.to_bits()))
                .collect::<Vec<_>>(),
            mesh.normals
                .iter()
                .flat_map(|p| p.iter().map(|c| c.to_bits()))
                .collect::<Vec<_>>(),
            mesh.indices.clone(),
        )
    };
    assert_eq!(bits(&a), bits(&b));
}

#[test]
fn uv_v_is_monotonic_in_latitude() {
    let mesh = icosphere(1.0, 2);
    let mut by_height: Vec<(f32, f32)> = mesh
        .positions
        .iter()
        .zip(&mesh.uvs)
        .map(|(p, uv)| (p[1], uv[1]))
        .collect();
    by_height.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

    // Higher vertices get smaller v; equal heights get equal v.
    for pair in by_height.windows(2) {
        let (y0, v0) = pair[0];
        let (y1, v1) = pair[1];
        if (y1 - y0).abs() < 1e-6 {
            assert!((v1 - v0).abs() < 1e-5);
        } else {
            assert!(v1 < v0 + 1e-6, "v not decreasing: y {y0}->{y1}, v {v0}->{v1}");
        }
    }
}

#[test]
fn uv_u_has_longitude_seam() {
    // The equirectangular projection wraps u at longitude +-pi, so some
    // edge must connect vertices whose u values sit on opposite sides
    // of the wrap. The seam is a documented property of the projection.
    let mesh = icosphere(1.0, 2);
    let mut seam_edges = 0;
    for tri in mesh.indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let du = (mesh.uvs[a as usize][0] - mesh.uvs[b as usize][0]).abs();
            if du > 0.5 {
                seam_edges += 1;
            }
        }
    }
    assert!(seam_edges > 0, "expected a seam discontinuity near +-pi");
}

#[test]
fn normals_are_unit_radial() {
    let mesh = icosphere(2.0, 1);
    for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
        let len_sq: f32 = n.iter().map(|c| c * c).sum();
        assert!((len_sq - 1.0).abs() < 1e-5);
        // Normal is parallel to the position vector.
        let dot = p[0] * n[0] + p[1] * n[1] + p[2] * n[2];
        let p_len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((dot - p_len).abs() < 1e-4);
    }
}
