// Host-side tests for mesh generation, picking rays, and glTF parsing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/geometry.rs"]
mod geometry;

use geometry::*;
use glam::Vec3;

#[test]
fn torus_has_expected_counts() {
    let mesh = torus_mesh(4.0, 0.9, 16, 64, [1.0; 4]);
    assert_eq!(mesh.vertices.len(), 17 * 65);
    assert_eq!(mesh.indices.len(), (16 * 64 * 6) as usize);
    assert!(mesh.is_indexed());
}

#[test]
fn torus_vertices_lie_on_the_tube() {
    let mesh = torus_mesh(4.0, 0.9, 16, 64, [1.0; 4]);
    for v in &mesh.vertices {
        let p = Vec3::from(v.position);
        // Distance from the ring circle equals the tube radius.
        let ring = Vec3::new(p.x, p.y, 0.0);
        let ring = if ring.length() > 1e-6 {
            ring.normalize() * 4.0
        } else {
            Vec3::ZERO
        };
        assert!(((p - ring).length() - 0.9).abs() < 1e-3);
    }
}

#[test]
fn torus_indices_stay_in_bounds() {
    let mesh = torus_mesh(4.0, 0.9, 8, 12, [1.0; 4]);
    let n = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n));
}

#[test]
fn gradient_box_is_a_cube_with_per_face_quads() {
    let mesh = gradient_box_mesh();
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.indices.len(), 36);
    for v in &mesh.vertices {
        let p = Vec3::from(v.position);
        assert!(p.abs().max_element() <= 0.5 + 1e-6);
        // Every vertex sits on the face its normal names.
        let n = Vec3::from(v.normal);
        assert!((p.dot(n) - 0.5).abs() < 1e-6);
    }
}

#[test]
fn gradient_box_colors_span_the_stops() {
    let mesh = gradient_box_mesh();
    // Corner at (-0.5, -0.5) maps to t=0, (+0.5, +0.5) to t=1.
    let dark = mesh
        .vertices
        .iter()
        .find(|v| v.position[0] == -0.5 && v.position[1] == -0.5)
        .unwrap();
    assert!((dark.color[0] - 44.0 / 255.0).abs() < 1e-5);
    let light = mesh
        .vertices
        .iter()
        .find(|v| v.position[0] == 0.5 && v.position[1] == 0.5)
        .unwrap();
    assert!((light.color[0] - 48.0 / 255.0).abs() < 1e-5);
}

#[test]
fn grid_line_counts_and_center_highlight() {
    let major = [0.2, 0.2, 0.2, 1.0];
    let minor = [0.6, 0.6, 0.6, 1.0];
    let vertices = grid_lines(90.0, 10, major, minor);
    // 11 lines per direction, 2 vertices per line, 2 directions.
    assert_eq!(vertices.len(), 11 * 2 * 2);

    let center_verts: Vec<_> = vertices.iter().filter(|v| v.color == major).collect();
    assert_eq!(center_verts.len(), 4); // one X line and one Z line
    for v in center_verts {
        // Center lines pass through the origin axis.
        assert!(v.position[0] == 0.0 || v.position[2] == 0.0);
    }
}

#[test]
fn grid_spans_the_requested_size() {
    let vertices = grid_lines(90.0, 10, [0.0; 4], [1.0; 4]);
    let max = vertices
        .iter()
        .flat_map(|v| [v.position[0], v.position[2]])
        .fold(f32::MIN, f32::max);
    assert!((max - 45.0).abs() < 1e-4);
}

#[test]
fn screen_ray_through_center_points_at_the_target() {
    let (origin, dir) = screen_ray(
        800.0,
        600.0,
        400.0,
        300.0,
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::new(0.0, 0.0, 9.0),
    );
    assert_eq!(origin, Vec3::new(0.0, 0.0, 10.0));
    assert!((dir - -Vec3::Z).length() < 1e-4);
}

#[test]
fn screen_ray_edges_diverge_symmetrically() {
    let eye = Vec3::new(0.0, 0.0, 10.0);
    let target = Vec3::new(0.0, 0.0, 9.0);
    let (_, left) = screen_ray(800.0, 600.0, 0.0, 300.0, eye, target);
    let (_, right) = screen_ray(800.0, 600.0, 800.0, 300.0, eye, target);
    assert!(left.x < 0.0);
    assert!(right.x > 0.0);
    assert!((left.x + right.x).abs() < 1e-4);
}

#[test]
fn ray_sphere_basic_hit_and_miss() {
    let hit = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!(hit.is_some());
    assert!((hit.unwrap() - 3.0).abs() < 1e-5);

    let miss = ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!(miss.is_none());
}

#[test]
fn ray_sphere_behind_origin_is_rejected() {
    let behind = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 2.0);
    assert!(behind.is_none());
}

#[test]
fn glb_parser_rejects_garbage() {
    assert!(mesh_from_glb(b"not a gltf file at all").is_err());
    assert!(mesh_from_glb(&[]).is_err());
}
