// Host-side tests for the smoothed motion state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/signals.rs"]
mod signals;
#[path = "../src/motion.rs"]
mod motion;

use motion::*;
use signals::SignalSnapshot;

fn still_policy() -> CouplingPolicy {
    CouplingPolicy::anchored(glam::Vec3::ZERO, glam::Vec3::ZERO, 1.0)
}

fn policy_with_x(axis: AxisCoupling) -> CouplingPolicy {
    let mut p = still_policy();
    p.position[0] = axis;
    p
}

fn pointer(x: f32, y: f32) -> SignalSnapshot {
    SignalSnapshot {
        pointer: signals::PointerVector { x, y },
        scroll: 0.0,
    }
}

#[test]
fn frame_locked_alpha_is_the_raw_fraction() {
    assert_eq!(SmoothingMode::FrameLocked.alpha(0.2, 0.001), 0.2);
    assert_eq!(SmoothingMode::FrameLocked.alpha(0.2, 0.5), 0.2);
}

#[test]
fn time_scaled_alpha_reduces_to_fraction_at_reference_rate() {
    let a = SmoothingMode::TimeScaled.alpha(0.2, 1.0 / 60.0);
    assert!((a - 0.2).abs() < 1e-5);
}

#[test]
fn time_scaled_alpha_grows_with_longer_frames() {
    let fast = SmoothingMode::TimeScaled.alpha(0.2, 1.0 / 120.0);
    let slow = SmoothingMode::TimeScaled.alpha(0.2, 1.0 / 30.0);
    assert!(fast < 0.2);
    assert!(slow > 0.2);
    assert!(slow < 1.0);
}

#[test]
fn smoothed_axis_converges_geometrically() {
    // factor 0.2 leaves (1 - 0.2)^n of the gap after n frames.
    let mut m = MotionState::new(
        vec![policy_with_x(AxisCoupling::follow(0.0, 1.0, 0.0, 0.2))],
        SmoothingMode::FrameLocked,
    );
    let sig = pointer(1.0, 0.0);
    for _ in 0..10 {
        m.step(&sig, 1.0 / 60.0);
    }
    let expected = 1.0 - 0.8f32.powi(10); // 0.8926
    assert!((m.transforms()[0].position.x - expected).abs() < 1e-4);
}

#[test]
fn pinned_axis_tracks_without_lag() {
    let mut m = MotionState::new(
        vec![policy_with_x(AxisCoupling::pinned(10.0, -20.0))],
        SmoothingMode::FrameLocked,
    );
    let sig = SignalSnapshot {
        pointer: signals::PointerVector::default(),
        scroll: 0.5,
    };
    m.step(&sig, 1.0 / 60.0);
    assert_eq!(m.transforms()[0].position.x, 0.0);
}

#[test]
fn initial_transforms_sit_at_zero_signal_targets() {
    let m = MotionState::new(
        vec![policy_with_x(AxisCoupling::follow(1.0, 6.0, 0.0, 0.2))],
        SmoothingMode::FrameLocked,
    );
    assert_eq!(m.transforms()[0].position.x, 1.0);
}

#[test]
fn hover_pulls_scale_toward_hover_value_and_releases() {
    let mut p = still_policy();
    p.scale = ScaleCoupling {
        rest: 6.9,
        hover: 0.8,
        factor: 0.05,
        scroll_wobble: 0.0,
    };
    let mut m = MotionState::new(vec![p], SmoothingMode::FrameLocked);
    let sig = SignalSnapshot::default();

    m.set_hovered(0, true);
    for _ in 0..200 {
        m.step(&sig, 1.0 / 60.0);
    }
    assert!((m.transforms()[0].scale - 0.8).abs() < 0.01);

    m.clear_hover();
    for _ in 0..400 {
        m.step(&sig, 1.0 / 60.0);
    }
    assert!((m.transforms()[0].scale - 6.9).abs() < 0.01);
}

#[test]
fn spin_accumulates_per_frame() {
    let mut p = still_policy();
    p.spin_y = 0.01;
    let mut m = MotionState::new(vec![p], SmoothingMode::FrameLocked);
    let sig = SignalSnapshot::default();
    for _ in 0..3 {
        m.step(&sig, 1.0 / 60.0);
    }
    assert!((m.transforms()[0].rotation.y - 0.03).abs() < 1e-6);
}

#[test]
fn spin_is_rate_independent_when_time_scaled() {
    let mut p = still_policy();
    p.spin_y = 0.01;
    let mut m = MotionState::new(vec![p], SmoothingMode::TimeScaled);
    let sig = SignalSnapshot::default();
    // Half-rate frames cover the same angle in the same wall time.
    for _ in 0..30 {
        m.step(&sig, 1.0 / 30.0);
    }
    let expected = 0.01 * 60.0; // one second at the reference rate
    assert!((m.transforms()[0].rotation.y - expected).abs() < 1e-4);
}

#[test]
fn axis_target_blends_pointer_and_scroll() {
    let mut m = MotionState::new(
        vec![policy_with_x(AxisCoupling::follow_scroll(
            2.0, 3.0, -1.0, 4.0, 1.0,
        ))],
        SmoothingMode::FrameLocked,
    );
    let sig = SignalSnapshot {
        pointer: signals::PointerVector { x: 0.5, y: 1.0 },
        scroll: 0.25,
    };
    // factor 1.0 lands on the target in one step
    m.step(&sig, 1.0 / 60.0);
    let expected = 2.0 + 3.0 * 0.5 - 1.0 * 1.0 + 4.0 * 0.25;
    assert!((m.transforms()[0].position.x - expected).abs() < 1e-6);
}
