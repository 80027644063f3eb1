//! Declarative scene description and per-frame composition.
//!
//! The scene is one table of [`SceneEntityDescriptor`]s; the former design
//! iterations differed only in which entities appeared and their coupling
//! gains, so composition is driven entirely by this data. [`compose`] turns
//! the current smoothed transforms into an immutable [`SceneFrame`] snapshot
//! for the renderer; it holds no state of its own.

use crate::constants::*;
use crate::geometry::{ray_sphere, screen_ray};
use crate::motion::{AxisCoupling, CouplingPolicy, ScaleCoupling, SmoothedTransform};
use glam::{EulerRot, Mat4, Quat, Vec3, Vec4};
use smallvec::SmallVec;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntityKind {
    Camera,
    Sky,
    Cloud,
    Rainbow,
    Grid,
    GradientBox,
    Letter,
    Model,
}

/// Static configuration for one scene entity. Immutable after assembly.
pub struct SceneEntityDescriptor {
    pub name: &'static str,
    pub kind: EntityKind,
    /// Texture path for letters, model path for loaded meshes.
    pub asset: Option<&'static str>,
    pub tint: Vec4,
    pub policy: CouplingPolicy,
    /// Whether pointer picking may hover this entity.
    pub pickable: bool,
}

pub struct SceneGraph {
    descriptors: Vec<SceneEntityDescriptor>,
}

impl SceneGraph {
    pub fn new(descriptors: Vec<SceneEntityDescriptor>) -> Self {
        Self { descriptors }
    }

    #[inline]
    pub fn descriptors(&self) -> &[SceneEntityDescriptor] {
        &self.descriptors
    }

    /// Coupling table handed to the motion state, index-aligned with the
    /// descriptors.
    pub fn policies(&self) -> Vec<CouplingPolicy> {
        self.descriptors.iter().map(|d| d.policy).collect()
    }

    pub fn camera_index(&self) -> Option<usize> {
        self.descriptors
            .iter()
            .position(|d| d.kind == EntityKind::Camera)
    }
}

pub const SUN_POSITION: Vec3 = Vec3::new(100.0, 20.0, 100.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraNode {
    pub eye: Vec3,
    pub target: Vec3,
    pub fovy: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightNode {
    pub position: Vec3,
    pub intensity: f32,
}

/// One resolved entity for this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityInstance {
    /// Index into the descriptor table.
    pub index: usize,
    pub kind: EntityKind,
    pub asset: Option<&'static str>,
    pub model: Mat4,
    pub tint: Vec4,
}

/// Read-only snapshot of the renderable scene for a single frame.
#[derive(Clone, Debug)]
pub struct SceneFrame {
    pub camera: CameraNode,
    pub ambient: f32,
    pub lights: SmallVec<[LightNode; 2]>,
    pub instances: Vec<EntityInstance>,
}

/// Assemble the frame snapshot from the descriptor table and the transforms
/// owned by the motion state. Pure: identical inputs give identical frames.
pub fn compose(graph: &SceneGraph, transforms: &[SmoothedTransform]) -> SceneFrame {
    let camera = graph
        .camera_index()
        .and_then(|i| transforms.get(i))
        .map(|t| CameraNode {
            eye: t.position,
            // The camera keeps its default orientation, looking down -Z.
            target: t.position - Vec3::Z,
            fovy: CAMERA_FOVY,
        })
        .unwrap_or(CameraNode {
            eye: Vec3::new(0.0, 0.0, CAMERA_BASE_Z),
            target: Vec3::new(0.0, 0.0, CAMERA_BASE_Z - 1.0),
            fovy: CAMERA_FOVY,
        });

    let mut lights = SmallVec::new();
    lights.push(LightNode {
        position: Vec3::new(10.0, 10.0, 10.0),
        intensity: 1.0,
    });

    let instances = graph
        .descriptors
        .iter()
        .zip(transforms)
        .enumerate()
        .filter(|(_, (d, _))| d.kind != EntityKind::Camera)
        .map(|(index, (d, t))| EntityInstance {
            index,
            kind: d.kind,
            asset: d.asset,
            model: Mat4::from_scale_rotation_translation(
                Vec3::splat(t.scale),
                Quat::from_euler(EulerRot::XYZ, t.rotation.x, t.rotation.y, t.rotation.z),
                t.position,
            ),
            tint: d.tint,
        })
        .collect();

    SceneFrame {
        camera,
        ambient: 0.35,
        lights,
        instances,
    }
}

/// Ray-pick the nearest hoverable entity under a canvas pixel, if any.
pub fn pick_entity(
    graph: &SceneGraph,
    transforms: &[SmoothedTransform],
    camera: &CameraNode,
    width: f32,
    height: f32,
    sx: f32,
    sy: f32,
) -> Option<usize> {
    let (ro, rd) = screen_ray(width, height, sx, sy, camera.eye, camera.target);
    let mut best: Option<(usize, f32)> = None;
    for (i, (d, t)) in graph.descriptors.iter().zip(transforms).enumerate() {
        if !d.pickable {
            continue;
        }
        if let Some(hit) = ray_sphere(ro, rd, t.position, PICK_SPHERE_RADIUS) {
            match best {
                Some((_, bt)) if hit >= bt => {}
                _ => best = Some((i, hit)),
            }
        }
    }
    best.map(|(i, _)| i)
}

// ---------------- The portfolio scene table ----------------

fn letter(
    name: &'static str,
    asset: &'static str,
    base: Vec3,
    scale: f32,
) -> SceneEntityDescriptor {
    SceneEntityDescriptor {
        name,
        kind: EntityKind::Letter,
        asset: Some(asset),
        tint: Vec4::new(1.0, 1.0, 1.0, 0.95),
        policy: CouplingPolicy {
            position: [
                AxisCoupling::follow(base.x, LETTER_POINTER_X_GAIN, 0.0, LETTER_FOLLOW_FACTOR),
                AxisCoupling::follow_scroll(
                    base.y,
                    0.0,
                    LETTER_POINTER_Y_GAIN,
                    LETTER_SCROLL_DROP,
                    LETTER_FOLLOW_FACTOR,
                ),
                AxisCoupling::fixed(base.z),
            ],
            rotation: [
                AxisCoupling::fixed(0.0),
                AxisCoupling::fixed(0.0),
                AxisCoupling::fixed(0.0),
            ],
            scale: ScaleCoupling {
                rest: scale,
                hover: LETTER_HOVER_SCALE,
                factor: LETTER_SCALE_FACTOR,
                scroll_wobble: 0.0,
            },
            spin_y: 0.0,
        },
        pickable: true,
    }
}

fn model(
    name: &'static str,
    asset: &'static str,
    base: Vec3,
    scale: f32,
) -> SceneEntityDescriptor {
    SceneEntityDescriptor {
        name,
        kind: EntityKind::Model,
        asset: Some(asset),
        tint: Vec4::ONE,
        policy: CouplingPolicy {
            position: [
                AxisCoupling::fixed(base.x),
                AxisCoupling::pinned(MODEL_BASE_Y, MODEL_SCROLL_DROP),
                AxisCoupling::fixed(base.z),
            ],
            rotation: [
                AxisCoupling::follow(0.0, 0.0, MODEL_PITCH_GAIN, MODEL_PITCH_FACTOR),
                AxisCoupling::follow(0.0, MODEL_YAW_GAIN, 0.0, MODEL_YAW_FACTOR),
                AxisCoupling::follow(0.0, MODEL_ROLL_GAIN, 0.0, MODEL_ROLL_FACTOR),
            ],
            scale: ScaleCoupling::still(scale),
            spin_y: 0.0,
        },
        pickable: false,
    }
}

fn cloud(name: &'static str, base: Vec3) -> SceneEntityDescriptor {
    SceneEntityDescriptor {
        name,
        kind: EntityKind::Cloud,
        asset: None,
        tint: Vec4::new(1.0, 1.0, 1.0, 0.7),
        policy: CouplingPolicy::anchored(base, Vec3::ZERO, 3.0),
        pickable: false,
    }
}

/// The one scene the page renders: sky, rainbow, clouds, the floating name
/// letters, loaded models, and the decorative primitives.
pub fn portfolio_scene() -> SceneGraph {
    let camera = SceneEntityDescriptor {
        name: "camera",
        kind: EntityKind::Camera,
        asset: None,
        tint: Vec4::ONE,
        policy: CouplingPolicy {
            position: [
                AxisCoupling::follow(
                    CAMERA_BASE_X,
                    CAMERA_POINTER_X_GAIN,
                    0.0,
                    CAMERA_FOLLOW_FACTOR,
                ),
                AxisCoupling::follow(0.0, 0.0, CAMERA_POINTER_Y_GAIN, CAMERA_FOLLOW_FACTOR),
                AxisCoupling::pinned(CAMERA_BASE_Z, CAMERA_SCROLL_DOLLY),
            ],
            rotation: [
                AxisCoupling::fixed(0.0),
                AxisCoupling::fixed(0.0),
                AxisCoupling::fixed(0.0),
            ],
            scale: ScaleCoupling::still(1.0),
            spin_y: 0.0,
        },
        pickable: false,
    };

    let sky = SceneEntityDescriptor {
        name: "sky",
        kind: EntityKind::Sky,
        asset: None,
        tint: Vec4::ONE,
        policy: CouplingPolicy::anchored(Vec3::ZERO, Vec3::ZERO, 1.0),
        pickable: false,
    };

    let rainbow = SceneEntityDescriptor {
        name: "rainbow",
        kind: EntityKind::Rainbow,
        asset: None,
        tint: Vec4::new(199.0 / 255.0, 22.0 / 255.0, 184.0 / 255.0, 1.0),
        policy: CouplingPolicy {
            spin_y: RAINBOW_SPIN_PER_FRAME,
            ..CouplingPolicy::anchored(Vec3::new(0.0, 1.0, -10.0), Vec3::new(1.5, 0.0, 0.0), 1.0)
        },
        pickable: false,
    };

    let grid = SceneEntityDescriptor {
        name: "grid",
        kind: EntityKind::Grid,
        asset: None,
        tint: Vec4::ONE,
        policy: CouplingPolicy::anchored(Vec3::new(0.0, -10.0, -4.5), Vec3::ZERO, 1.0),
        pickable: false,
    };

    let gradient_box = SceneEntityDescriptor {
        name: "gradient-box",
        kind: EntityKind::GradientBox,
        asset: None,
        tint: Vec4::ONE,
        policy: CouplingPolicy::anchored(
            Vec3::new(-1.5, -1.8, -5.0),
            Vec3::new(std::f32::consts::FRAC_PI_3, std::f32::consts::FRAC_PI_2, 0.0),
            1.0,
        ),
        pickable: false,
    };

    let stone = SceneEntityDescriptor {
        name: "stone",
        kind: EntityKind::Model,
        asset: Some("assets/models/stone.glb"),
        tint: Vec4::ONE,
        policy: CouplingPolicy::anchored(Vec3::new(3.0, -1.8, -4.0), Vec3::ZERO, 2.5),
        pickable: false,
    };

    SceneGraph::new(vec![
        camera,
        sky,
        rainbow,
        grid,
        gradient_box,
        cloud("cloud-far", Vec3::new(-4.0, 2.0, -15.0)),
        cloud("cloud-mid", Vec3::new(4.0, 3.0, -10.0)),
        cloud("cloud-near", Vec3::new(1.0, 1.0, -8.0)),
        letter("letter-h", "assets/letters/h.png", Vec3::new(-3.5, 0.0, -9.0), 6.9),
        letter("letter-a", "assets/letters/a.png", Vec3::new(-2.0, 0.0, -10.0), 6.7),
        letter("letter-l1", "assets/letters/l1.png", Vec3::new(0.0, 0.0, -8.0), 6.9),
        letter("letter-l2", "assets/letters/l2.png", Vec3::new(1.5, -0.5, -9.0), 6.7),
        letter("letter-o", "assets/letters/o.png", Vec3::new(3.0, 0.0, -8.0), 6.8),
        model("dog", "assets/models/dog.glb", Vec3::new(2.0, 3.0, 2.5), 0.5),
        model("cube", "assets/models/cube.glb", Vec3::new(3.0, -1.8, 6.0), 0.5),
        stone,
    ])
}
