// Host-side tests for input signal normalization.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/signals.rs"]
mod signals;

use signals::*;

#[test]
fn pointer_center_is_origin() {
    let p = PointerVector::from_client(400.0, 300.0, 800.0, 600.0);
    assert!(p.x.abs() < 1e-6);
    assert!(p.y.abs() < 1e-6);
}

#[test]
fn pointer_corners_map_to_unit_square() {
    let tl = PointerVector::from_client(0.0, 0.0, 800.0, 600.0);
    assert!((tl.x - -1.0).abs() < 1e-6);
    assert!((tl.y - 1.0).abs() < 1e-6);

    let br = PointerVector::from_client(800.0, 600.0, 800.0, 600.0);
    assert!((br.x - 1.0).abs() < 1e-6);
    assert!((br.y - -1.0).abs() < 1e-6);
}

#[test]
fn pointer_outside_viewport_clamps() {
    let p = PointerVector::from_client(-250.0, 1800.0, 800.0, 600.0);
    assert_eq!(p.x, -1.0);
    assert_eq!(p.y, -1.0);
}

#[test]
fn degenerate_viewport_yields_centered_pointer() {
    let p = PointerVector::from_client(123.0, 456.0, 0.0, 0.0);
    assert_eq!(p.x, 0.0);
    assert_eq!(p.y, 0.0);
    let p = PointerVector::from_client(123.0, 456.0, 800.0, -1.0);
    assert_eq!(p.y, 0.0);
}

#[test]
fn scroll_ratio_spans_zero_to_one() {
    assert_eq!(scroll_ratio(0.0, 3000.0, 1000.0), 0.0);
    assert!((scroll_ratio(1000.0, 3000.0, 1000.0) - 0.5).abs() < 1e-6);
    assert_eq!(scroll_ratio(2000.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn scroll_ratio_clamps_overscroll() {
    // Rubber-band overscroll can report past the end.
    assert_eq!(scroll_ratio(2500.0, 3000.0, 1000.0), 1.0);
    assert_eq!(scroll_ratio(-50.0, 3000.0, 1000.0), 0.0);
}

#[test]
fn scroll_ratio_short_page_reads_zero() {
    assert_eq!(scroll_ratio(0.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_ratio(0.0, 1000.0, 1000.0), 0.0);
}

#[test]
fn signals_track_viewport_and_pointer() {
    let mut s = InputSignals::default();
    s.set_viewport(800.0, 600.0);
    s.set_pointer(600.0, 150.0);
    assert!((s.pointer.x - 0.5).abs() < 1e-6);
    assert!((s.pointer.y - 0.5).abs() < 1e-6);
    assert_eq!(s.pointer_px, glam::Vec2::new(600.0, 150.0));
}

#[test]
fn pointer_before_viewport_stays_centered() {
    // A pointermove can land before the first resize has seeded the size.
    let mut s = InputSignals::default();
    s.set_pointer(600.0, 150.0);
    assert_eq!(s.pointer.x, 0.0);
    assert_eq!(s.pointer.y, 0.0);
    assert_eq!(s.pointer_px, glam::Vec2::new(600.0, 150.0));
}

#[test]
fn snapshot_is_a_stable_copy() {
    let mut s = InputSignals::default();
    s.set_viewport(800.0, 600.0);
    s.set_pointer(800.0, 0.0);
    s.set_scroll(500.0, 2600.0);
    let snap = s.snapshot();
    s.set_pointer(0.0, 600.0);
    s.set_scroll(0.0, 2600.0);
    assert!((snap.pointer.x - 1.0).abs() < 1e-6);
    assert!((snap.pointer.y - 1.0).abs() < 1e-6);
    assert!((snap.scroll - 0.25).abs() < 1e-6);
}
