// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_fractions_are_valid_per_frame_fractions() {
    for f in [
        CAMERA_FOLLOW_FACTOR,
        MODEL_YAW_FACTOR,
        MODEL_PITCH_FACTOR,
        MODEL_ROLL_FACTOR,
        LETTER_FOLLOW_FACTOR,
        LETTER_SCALE_FACTOR,
        TRAIL_FOLLOW_FACTOR,
    ] {
        assert!(f > 0.0 && f <= 1.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn projection_planes_are_ordered() {
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_ZNEAR);
    assert!(CAMERA_FOVY > 0.0 && CAMERA_FOVY < std::f32::consts::PI);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_travel_reaches_past_the_scene() {
    // A full scroll dollies the camera from z=10 to z=-10, through the
    // letters around z=-9.
    let z_end = CAMERA_BASE_Z + CAMERA_SCROLL_DOLLY;
    assert!(z_end < -9.0 + PICK_SPHERE_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_lifetime_is_finite() {
    assert!(PARTICLE_FADE_PER_FRAME > 0.0);
    assert!(PARTICLES_PER_CLICK > 0);
    assert!(PARTICLE_SIZE_MIN > 0.0);
    assert!(PARTICLE_SIZE_SPAN >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn grid_center_line_requires_even_divisions() {
    // The darker center line exists only when a division lands on zero.
    assert!(GRID_DIVISIONS % 2 == 0);
    assert!(GRID_SIZE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gallery_grid_is_wide_enough_for_its_columns() {
    assert!(GALLERY_COLUMNS > 0);
    assert!(GALLERY_COLUMN_SPACING > 0.0);
    assert!(GALLERY_ROW_SPACING > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hover_scale_shrinks_letters() {
    // All authored letter scales are well above the hover target.
    assert!(LETTER_HOVER_SCALE < 6.0);
    assert!(LETTER_HOVER_SCALE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reference_rate_matches_the_authored_tuning() {
    assert_eq!(REFERENCE_FPS, 60.0);
    assert!(RAINBOW_SPIN_PER_FRAME > 0.0);
}
