//! Mesh generators for the shapes the demos draw.
//!
//! All generators are pure: identical arguments always produce
//! identical buffers, down to the bit pattern.

use std::collections::HashMap;
use std::f32::consts::PI;

use super::data::MeshData;

/// Generate an axis-aligned cube with per-face UVs and normals.
///
/// The cube is centered at the origin and spans `[-half_extent,
/// half_extent]` on every axis. Faces do not share vertices (24
/// vertices, 36 indices) so each face can carry its own normal and a
/// full `[0, 1]` UV square.
pub fn cube(half_extent: f32) -> MeshData {
    let h = half_extent;
    #[rustfmt::skip]
    let positions = vec![
        // +Z
        [-h, -h,  h], [ h, -h,  h], [ h,  h,  h], [-h,  h,  h],
        // -Z
        [-h, -h, -h], [ h, -h, -h], [ h,  h, -h], [-h,  h, -h],
        // -X
        [-h, -h, -h], [-h, -h,  h], [-h,  h,  h], [-h,  h, -h],
        // +X
        [ h, -h,  h], [ h, -h, -h], [ h,  h, -h], [ h,  h,  h],
        // +Y
        [-h,  h,  h], [ h,  h,  h], [ h,  h, -h], [-h,  h, -h],
        // -Y
        [-h, -h, -h], [ h, -h, -h], [ h, -h,  h], [-h, -h,  h],
    ];
    let face_uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
    let uvs = face_uvs
        .iter()
        .cycle()
        .take(24)
        .copied()
        .collect::<Vec<_>>();
    #[rustfmt::skip]
    let face_normals: [[f32; 3]; 6] = [
        [0.0, 0.0, 1.0], [0.0, 0.0, -1.0],
        [-1.0, 0.0, 0.0], [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0], [0.0, -1.0, 0.0],
    ];
    let normals = face_normals
        .iter()
        .flat_map(|n| std::iter::repeat(*n).take(4))
        .collect::<Vec<_>>();
    #[rustfmt::skip]
    let indices = vec![
        0, 1, 2, 0, 2, 3,
        4, 6, 5, 4, 7, 6,
        8, 9, 10, 8, 10, 11,
        12, 13, 14, 12, 14, 15,
        16, 17, 18, 16, 18, 19,
        20, 21, 22, 20, 22, 23,
    ];

    MeshData {
        positions,
        uvs,
        normals,
        indices,
        label: Some("cube"),
    }
}

/// Generate a subdivided ground plane on the XZ axes.
///
/// The plane is centered at the origin, spans `[-half_extent,
/// half_extent]` on X and Z, faces +Y, and carries UVs spanning
/// `[0, 1]` across the whole plane. `subdivisions` is the number of
/// cells per side, so the plane has `(subdivisions + 1)^2` vertices.
pub fn plane(half_extent: f32, subdivisions: u32) -> MeshData {
    let n = subdivisions.max(1);
    let side = n + 1;
    let mut positions = Vec::with_capacity((side * side) as usize);
    let mut uvs = Vec::with_capacity((side * side) as usize);
    let mut normals = Vec::with_capacity((side * side) as usize);
    let mut indices = Vec::with_capacity((n * n * 6) as usize);

    for row in 0..side {
        for col in 0..side {
            let fx = col as f32 / n as f32;
            let fz = row as f32 / n as f32;
            positions.push([
                -half_extent + fx * 2.0 * half_extent,
                0.0,
                -half_extent + fz * 2.0 * half_extent,
            ]);
            uvs.push([fx, fz]);
            normals.push([0.0, 1.0, 0.0]);
        }
    }

    for row in 0..n {
        for col in 0..n {
            let current = row * side + col;
            let next_row = current + side;
            // CCW seen from +Y
            indices.extend_from_slice(&[current, next_row, current + 1]);
            indices.extend_from_slice(&[current + 1, next_row, next_row + 1]);
        }
    }

    MeshData {
        positions,
        uvs,
        normals,
        indices,
        label: Some("plane"),
    }
}

/// An undirected edge between two vertex indices, stored sorted.
#[derive(Hash, Eq, PartialEq, Clone, Copy)]
struct Edge(u32, u32);

impl Edge {
    fn new(a: u32, b: u32) -> Self {
        if a < b { Self(a, b) } else { Self(b, a) }
    }
}

/// Generate an icosphere by recursive icosahedron subdivision.
///
/// Starts from the 12 vertices and 20 faces of a regular icosahedron
/// scaled to `radius`, then splits every triangle into four per
/// subdivision level, re-projecting each new edge midpoint onto the
/// sphere. Midpoints are deduplicated through a cache keyed by the
/// unordered vertex-index pair, so triangles sharing an edge reference
/// the same midpoint vertex and the mesh stays watertight.
///
/// UVs are an equirectangular projection of each vertex:
/// `u = 0.5 + atan2(z, x) / 2pi`, `v = 0.5 - asin(y / radius) / pi`.
/// The longitude wrap at +-pi produces a visible UV seam along one
/// meridian; that discontinuity is inherent to the projection and is
/// left in place. Normals are the normalized vertex positions, which
/// is exact for a sphere centered at the origin.
///
/// Output size is a deterministic function of `depth`:
/// `10 * 4^depth + 2` vertices and `60 * 4^depth` indices.
pub fn icosphere(radius: f32, depth: u32) -> MeshData {
    // Icosahedron seed vertices (golden ratio phi), normalized onto
    // the sphere.
    let phi = (1.0 + 5.0_f32.sqrt()) * 0.5;
    #[rustfmt::skip]
    let seed: [[f32; 3]; 12] = [
        [-1.0,  phi,  0.0], [ 1.0,  phi,  0.0], [-1.0, -phi,  0.0], [ 1.0, -phi,  0.0],
        [ 0.0, -1.0,  phi], [ 0.0,  1.0,  phi], [ 0.0, -1.0, -phi], [ 0.0,  1.0, -phi],
        [ phi,  0.0, -1.0], [ phi,  0.0,  1.0], [-phi,  0.0, -1.0], [-phi,  0.0,  1.0],
    ];
    let mut positions: Vec<[f32; 3]> = seed
        .iter()
        .map(|v| project_to_sphere(*v, radius))
        .collect();

    #[rustfmt::skip]
    let mut faces: Vec<[u32; 3]> = vec![
        [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
        [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
        [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
        [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
    ];

    for _ in 0..depth {
        let mut midpoints: HashMap<Edge, u32> = HashMap::with_capacity(positions.len() * 2);
        let mut next = Vec::with_capacity(faces.len() * 4);
        for [a, b, c] in faces {
            let ab = midpoint(&mut positions, &mut midpoints, a, b, radius);
            let bc = midpoint(&mut positions, &mut midpoints, b, c, radius);
            let ca = midpoint(&mut positions, &mut midpoints, c, a, radius);
            next.push([a, ab, ca]);
            next.push([b, bc, ab]);
            next.push([c, ca, bc]);
            next.push([ab, bc, ca]);
        }
        faces = next;
    }

    let uvs = positions
        .iter()
        .map(|p| equirectangular_uv(*p, radius))
        .collect();
    let normals = positions
        .iter()
        .map(|p| {
            let inv = 1.0 / radius;
            [p[0] * inv, p[1] * inv, p[2] * inv]
        })
        .collect();
    let indices = faces.iter().flatten().copied().collect();

    MeshData {
        positions,
        uvs,
        normals,
        indices,
        label: Some("icosphere"),
    }
}

/// Return the index of the midpoint vertex of edge `(a, b)`, creating
/// it on first use. Midpoints are created in face-visit order, so the
/// resulting buffers are deterministic.
fn midpoint(
    positions: &mut Vec<[f32; 3]>,
    cache: &mut HashMap<Edge, u32>,
    a: u32,
    b: u32,
    radius: f32,
) -> u32 {
    let edge = Edge::new(a, b);
    if let Some(&index) = cache.get(&edge) {
        return index;
    }
    let pa = positions[a as usize];
    let pb = positions[b as usize];
    let mid = [
        (pa[0] + pb[0]) * 0.5,
        (pa[1] + pb[1]) * 0.5,
        (pa[2] + pb[2]) * 0.5,
    ];
    let index = positions.len() as u32;
    positions.push(project_to_sphere(mid, radius));
    cache.insert(edge, index);
    index
}

fn project_to_sphere(v: [f32; 3], radius: f32) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    let s = radius / len;
    [v[0] * s, v[1] * s, v[2] * s]
}

fn equirectangular_uv(p: [f32; 3], radius: f32) -> [f32; 2] {
    let u = 0.5 + p[2].atan2(p[0]) / (2.0 * PI);
    let v = 0.5 - (p[1] / radius).clamp(-1.0, 1.0).asin() / PI;
    [u, v]
}

/// Generate a skybox shell: a position-only cube wound inward so its
/// faces are visible from the inside.
pub fn skybox(half_extent: f32) -> MeshData {
    let h = half_extent;
    #[rustfmt::skip]
    let positions = vec![
        [-h, -h, -h], [ h, -h, -h], [ h,  h, -h], [-h,  h, -h],
        [-h, -h,  h], [ h, -h,  h], [ h,  h,  h], [-h,  h,  h],
    ];
    // Reversed winding relative to an outward cube.
    #[rustfmt::skip]
    let indices = vec![
        0, 1, 2, 0, 2, 3, // -Z
        4, 6, 5, 4, 7, 6, // +Z
        0, 3, 7, 0, 7, 4, // -X
        1, 6, 2, 1, 5, 6, // +X
        3, 2, 6, 3, 6, 7, // +Y
        0, 5, 1, 0, 4, 5, // -Y
    ];

    MeshData {
        positions,
        uvs: Vec::new(),
        normals: Vec::new(),
        indices,
        label: Some("skybox"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_shape() {
        let mesh = cube(0.5);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.indices.len(), 36);
        assert_eq!(mesh.validate(), Ok(()));
        for p in &mesh.positions {
            for c in p {
                assert_eq!(c.abs(), 0.5);
            }
        }
        for n in &mesh.normals {
            let len_sq: f32 = n.iter().map(|c| c * c).sum();
            assert!((len_sq - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_plane_counts() {
        let mesh = plane(5.0, 4);
        assert_eq!(mesh.vertex_count(), 25);
        assert_eq!(mesh.triangle_count(), 32);
        assert_eq!(mesh.validate(), Ok(()));
    }

    #[test]
    fn test_plane_uv_corners() {
        let mesh = plane(1.0, 2);
        assert_eq!(mesh.uvs[0], [0.0, 0.0]);
        assert_eq!(*mesh.uvs.last().unwrap(), [1.0, 1.0]);
        assert_eq!(mesh.positions[0], [-1.0, 0.0, -1.0]);
        assert_eq!(*mesh.positions.last().unwrap(), [1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_icosphere_depth_zero_is_icosahedron() {
        let mesh = icosphere(1.0, 0);
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.indices.len(), 60);
        assert_eq!(mesh.validate(), Ok(()));
    }

    #[test]
    fn test_icosphere_vertex_growth() {
        for depth in 0..4 {
            let mesh = icosphere(1.0, depth);
            let expected = 10 * 4usize.pow(depth) + 2;
            assert_eq!(mesh.vertex_count(), expected, "depth {depth}");
            assert_eq!(mesh.indices.len(), 60 * 4usize.pow(depth), "depth {depth}");
        }
    }

    #[test]
    fn test_skybox_is_inward_cube() {
        let mesh = skybox(100.0);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.indices.len(), 36);
        assert_eq!(mesh.validate(), Ok(()));
        assert!(mesh.uvs.is_empty());
    }
}
