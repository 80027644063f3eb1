//! CPU-side geometry: mesh generation for the decorative primitives, picking
//! rays, and parsing of binary glTF model assets.

use crate::constants::{CAMERA_FOVY, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec3, Vec4};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
    pub uv: [f32; 2],
}

/// Triangle mesh ready for upload. `indices` may be empty for line lists.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }
}

/// Compute a world-space ray through a canvas pixel for the given camera.
///
/// Uses the same perspective parameters as the renderer so picking and
/// drawing agree. Returns `(ray_origin, ray_direction)`.
pub fn screen_ray(
    width: f32,
    height: f32,
    sx: f32,
    sy: f32,
    eye: Vec3,
    target: Vec3,
) -> (Vec3, Vec3) {
    let width = width.max(1.0);
    let height = height.max(1.0);
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let aspect = width / height;
    let proj = Mat4::perspective_rh(CAMERA_FOVY, aspect, CAMERA_ZNEAR, CAMERA_ZFAR);
    let view = Mat4::look_at_rh(eye, target, Vec3::Y);
    let inv = (proj * view).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p_far: Vec3 = p_far.truncate() / p_far.w;
    let rd = (p_far - eye).normalize();
    (eye, rd)
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Torus in the XY plane (the rainbow arc), uniform color.
pub fn torus_mesh(
    radius: f32,
    tube: f32,
    radial_segments: u32,
    tubular_segments: u32,
    color: [f32; 4],
) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    for j in 0..=radial_segments {
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * std::f32::consts::TAU;
            let v = j as f32 / radial_segments as f32 * std::f32::consts::TAU;
            let cx = radius * u.cos();
            let cy = radius * u.sin();
            let pos = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let normal = (pos - Vec3::new(cx, cy, 0.0)).normalize_or_zero();
            vertices.push(Vertex {
                position: pos.to_array(),
                normal: normal.to_array(),
                color,
                uv: [
                    i as f32 / tubular_segments as f32,
                    j as f32 / radial_segments as f32,
                ],
            });
        }
    }
    let stride = tubular_segments + 1;
    for j in 0..radial_segments {
        for i in 0..tubular_segments {
            let a = j * stride + i;
            let b = (j + 1) * stride + i;
            indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
        }
    }
    MeshData { vertices, indices }
}

// Diagonal gradient stops baked into the box vertex colors.
const GRADIENT_STOPS: [[f32; 4]; 3] = [
    [44.0 / 255.0, 34.0 / 255.0, 44.0 / 255.0, 1.0],
    [193.0 / 255.0, 185.0 / 255.0, 1.0, 1.0],
    [48.0 / 255.0, 40.0 / 255.0, 27.0 / 255.0, 1.0],
];

fn gradient_color(t: f32) -> [f32; 4] {
    let t = t.clamp(0.0, 1.0);
    let (a, b, local) = if t < 0.5 {
        (GRADIENT_STOPS[0], GRADIENT_STOPS[1], t * 2.0)
    } else {
        (GRADIENT_STOPS[1], GRADIENT_STOPS[2], (t - 0.5) * 2.0)
    };
    let mut out = [0.0; 4];
    for k in 0..4 {
        out[k] = a[k] + (b[k] - a[k]) * local;
    }
    out
}

/// Unit cube centered at the origin with the diagonal color gradient baked
/// into vertex colors.
pub fn gradient_box_mesh() -> MeshData {
    // One face per normal; positions in [-0.5, 0.5].
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (n, u, v) in FACES {
        let n = Vec3::from(n);
        let u = Vec3::from(u);
        let v = Vec3::from(v);
        let base = vertices.len() as u32;
        for (du, dv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            let pos = n * 0.5 + u * du + v * dv;
            // Diagonal blend across object space, like the 2D canvas gradient.
            let t = (pos.x + pos.y + 1.0) * 0.5;
            vertices.push(Vertex {
                position: pos.to_array(),
                normal: n.to_array(),
                color: gradient_color(t),
                uv: [du + 0.5, dv + 0.5],
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    MeshData { vertices, indices }
}

/// Line-list floor grid on the XZ plane, center lines darker.
pub fn grid_lines(size: f32, divisions: u32, major: [f32; 4], minor: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let half = size / 2.0;
    let step = size / divisions as f32;
    let mut push = |a: Vec3, b: Vec3, color: [f32; 4]| {
        for p in [a, b] {
            vertices.push(Vertex {
                position: p.to_array(),
                normal: [0.0, 1.0, 0.0],
                color,
                uv: [0.0, 0.0],
            });
        }
    };
    for i in 0..=divisions {
        let offset = -half + i as f32 * step;
        let color = if i * 2 == divisions { major } else { minor };
        push(Vec3::new(offset, 0.0, -half), Vec3::new(offset, 0.0, half), color);
        push(Vec3::new(-half, 0.0, offset), Vec3::new(half, 0.0, offset), color);
    }
    vertices
}

/// Parse a binary glTF (`.glb`) asset into a single merged mesh.
///
/// Only the embedded binary chunk is supported; external buffer URIs are
/// rejected so a bad reference degrades to an omitted entity upstream.
pub fn mesh_from_glb(bytes: &[u8]) -> anyhow::Result<MeshData> {
    let glb = gltf::Gltf::from_slice(bytes)?;
    let blob = glb
        .blob
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("glb has no embedded binary chunk"))?;

    let mut out = MeshData::default();
    for mesh in glb.document.meshes() {
        for primitive in mesh.primitives() {
            let reader = primitive.reader(|buffer| match buffer.source() {
                gltf::buffer::Source::Bin => Some(blob),
                gltf::buffer::Source::Uri(_) => None,
            });
            let positions: Vec<[f32; 3]> = match reader.read_positions() {
                Some(iter) => iter.collect(),
                None => continue,
            };
            let normals: Vec<[f32; 3]> = reader
                .read_normals()
                .map(|iter| iter.collect())
                .unwrap_or_else(|| vec![[0.0, 1.0, 0.0]; positions.len()]);
            let base = out.vertices.len() as u32;
            for (i, position) in positions.iter().enumerate() {
                out.vertices.push(Vertex {
                    position: *position,
                    normal: normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
                    color: [1.0, 1.0, 1.0, 1.0],
                    uv: [0.0, 0.0],
                });
            }
            match reader.read_indices() {
                Some(indices) => out.indices.extend(indices.into_u32().map(|i| base + i)),
                None => out
                    .indices
                    .extend((0..positions.len() as u32).map(|i| base + i)),
            }
        }
    }
    if out.vertices.is_empty() {
        anyhow::bail!("glb contains no renderable primitives");
    }
    Ok(out)
}
