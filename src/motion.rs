//! Smoothed motion state.
//!
//! Every animated entity owns a [`SmoothedTransform`] updated once per frame
//! by a single-pole low-pass: `current += (target - current) * factor`. The
//! target is an affine blend of the raw signals through a [`CouplingPolicy`].
//!
//! The authored motion is frame-rate dependent (the factor is a raw per-frame
//! fraction). [`SmoothingMode::FrameLocked`] preserves that exactly;
//! [`SmoothingMode::TimeScaled`] re-derives the fraction from elapsed time
//! against a 60 Hz reference for variable-rate displays.

use crate::constants::REFERENCE_FPS;
use crate::signals::SignalSnapshot;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SmoothingMode {
    /// Apply the per-frame fraction as-is (the authored, rate-dependent feel).
    FrameLocked,
    /// Scale the fraction by elapsed time so convergence speed is rate-independent.
    TimeScaled,
}

impl SmoothingMode {
    #[inline]
    pub fn alpha(self, factor: f32, dt_sec: f32) -> f32 {
        match self {
            SmoothingMode::FrameLocked => factor,
            // Equivalent fraction for dt at the reference rate:
            // 1 - (1-f)^(dt * 60), which reduces to f at exactly 60 Hz.
            SmoothingMode::TimeScaled => {
                1.0 - (1.0 - factor).powf((dt_sec * REFERENCE_FPS).max(0.0))
            }
        }
    }
}

/// How one transform axis follows its target.
#[derive(Clone, Copy, Debug)]
pub enum AxisMode {
    /// Exponentially chase the target with a per-frame fraction.
    Smooth(f32),
    /// Assign the target directly (camera dolly, model scroll drop).
    Pin,
}

/// Target derivation for one axis: `base + gx*pointer.x + gy*pointer.y + gs*scroll`.
#[derive(Clone, Copy, Debug)]
pub struct AxisCoupling {
    pub base: f32,
    pub pointer_x: f32,
    pub pointer_y: f32,
    pub scroll: f32,
    pub mode: AxisMode,
}

impl AxisCoupling {
    pub const fn fixed(base: f32) -> Self {
        Self { base, pointer_x: 0.0, pointer_y: 0.0, scroll: 0.0, mode: AxisMode::Pin }
    }

    pub const fn pinned(base: f32, scroll: f32) -> Self {
        Self { base, pointer_x: 0.0, pointer_y: 0.0, scroll, mode: AxisMode::Pin }
    }

    pub const fn follow(base: f32, pointer_x: f32, pointer_y: f32, factor: f32) -> Self {
        Self { base, pointer_x, pointer_y, scroll: 0.0, mode: AxisMode::Smooth(factor) }
    }

    pub const fn follow_scroll(
        base: f32,
        pointer_x: f32,
        pointer_y: f32,
        scroll: f32,
        factor: f32,
    ) -> Self {
        Self { base, pointer_x, pointer_y, scroll, mode: AxisMode::Smooth(factor) }
    }

    #[inline]
    fn target(&self, sig: &SignalSnapshot) -> f32 {
        self.base
            + self.pointer_x * sig.pointer.x
            + self.pointer_y * sig.pointer.y
            + self.scroll * sig.scroll
    }
}

/// Scale chases `rest` (or `hover` while hovered), optionally wobbling with
/// scroll: `rest + wobble * sin(scroll * pi)`.
#[derive(Clone, Copy, Debug)]
pub struct ScaleCoupling {
    pub rest: f32,
    pub hover: f32,
    pub factor: f32,
    pub scroll_wobble: f32,
}

impl ScaleCoupling {
    pub const fn still(rest: f32) -> Self {
        Self { rest, hover: rest, factor: 1.0, scroll_wobble: 0.0 }
    }

    #[inline]
    fn target(&self, sig: &SignalSnapshot, hovered: bool) -> f32 {
        if hovered {
            self.hover
        } else {
            self.rest + self.scroll_wobble * (sig.scroll * std::f32::consts::PI).sin()
        }
    }
}

/// Full per-entity motion policy. `spin_y` is an unconditional additive yaw
/// per frame (the rainbow's slow spin), independent of any target.
#[derive(Clone, Copy, Debug)]
pub struct CouplingPolicy {
    pub position: [AxisCoupling; 3],
    pub rotation: [AxisCoupling; 3],
    pub scale: ScaleCoupling,
    pub spin_y: f32,
}

impl CouplingPolicy {
    /// A static entity: every axis pinned to its base, unit scale.
    pub const fn anchored(position: Vec3, rotation: Vec3, scale: f32) -> Self {
        Self {
            position: [
                AxisCoupling::fixed(position.x),
                AxisCoupling::fixed(position.y),
                AxisCoupling::fixed(position.z),
            ],
            rotation: [
                AxisCoupling::fixed(rotation.x),
                AxisCoupling::fixed(rotation.y),
                AxisCoupling::fixed(rotation.z),
            ],
            scale: ScaleCoupling::still(scale),
            spin_y: 0.0,
        }
    }
}

/// One entity's interpolated transform. Values are intentionally unclamped;
/// scroll-driven axes diverge with scroll by design (camera depth travel).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothedTransform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

/// Exclusive owner of all interpolated transforms. The composer only ever
/// sees the read-only slice returned by [`MotionState::transforms`].
pub struct MotionState {
    mode: SmoothingMode,
    policies: Vec<CouplingPolicy>,
    transforms: Vec<SmoothedTransform>,
    hovered: Vec<bool>,
}

impl MotionState {
    /// Transforms start at their zero-signal targets so the first rendered
    /// frame matches the authored layout.
    pub fn new(policies: Vec<CouplingPolicy>, mode: SmoothingMode) -> Self {
        let rest = SignalSnapshot::default();
        let transforms = policies
            .iter()
            .map(|p| SmoothedTransform {
                position: Vec3::new(
                    p.position[0].target(&rest),
                    p.position[1].target(&rest),
                    p.position[2].target(&rest),
                ),
                rotation: Vec3::new(
                    p.rotation[0].target(&rest),
                    p.rotation[1].target(&rest),
                    p.rotation[2].target(&rest),
                ),
                scale: p.scale.target(&rest, false),
            })
            .collect();
        let hovered = vec![false; policies.len()];
        Self { mode, policies, transforms, hovered }
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    pub fn set_mode(&mut self, mode: SmoothingMode) {
        self.mode = mode;
    }

    pub fn set_hovered(&mut self, index: usize, hovered: bool) {
        if let Some(h) = self.hovered.get_mut(index) {
            *h = hovered;
        }
    }

    pub fn clear_hover(&mut self) {
        self.hovered.fill(false);
    }

    #[inline]
    pub fn transforms(&self) -> &[SmoothedTransform] {
        &self.transforms
    }

    /// Advance every transform one frame toward its signal-derived target.
    pub fn step(&mut self, sig: &SignalSnapshot, dt_sec: f32) {
        let mode = self.mode;
        for ((policy, t), hovered) in self
            .policies
            .iter()
            .zip(self.transforms.iter_mut())
            .zip(self.hovered.iter().copied())
        {
            for (axis, cur) in policy.position.iter().zip(t.position.as_mut()) {
                step_axis(cur, axis, sig, mode, dt_sec);
            }
            for (axis, cur) in policy.rotation.iter().zip(t.rotation.as_mut()) {
                step_axis(cur, axis, sig, mode, dt_sec);
            }
            let scale_target = policy.scale.target(sig, hovered);
            t.scale += (scale_target - t.scale) * mode.alpha(policy.scale.factor, dt_sec);

            if policy.spin_y != 0.0 {
                t.rotation.y += match mode {
                    SmoothingMode::FrameLocked => policy.spin_y,
                    SmoothingMode::TimeScaled => policy.spin_y * dt_sec * REFERENCE_FPS,
                };
            }
        }
    }
}

#[inline]
fn step_axis(
    cur: &mut f32,
    axis: &AxisCoupling,
    sig: &SignalSnapshot,
    mode: SmoothingMode,
    dt_sec: f32,
) {
    let target = axis.target(sig);
    match axis.mode {
        AxisMode::Pin => *cur = target,
        AxisMode::Smooth(factor) => *cur += (target - *cur) * mode.alpha(factor, dt_sec),
    }
}
