// Host-side tests for the page block state: slider, gallery, cursor effects.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/content.rs"]
mod content;

use constants::*;
use content::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn slider_starts_centered() {
    let s = CompareSlider::new(SLIDER_CAPTIONS.len());
    assert_eq!(s.position(), 50.0);
}

#[test]
fn slider_tracks_pointer_within_block() {
    let mut s = CompareSlider::new(3);
    s.set_from_pointer(250.0, 100.0, 200.0); // 75% across
    assert!((s.position() - 75.0).abs() < 1e-5);
    s.set_from_pointer(0.0, 100.0, 200.0); // left of the block
    assert_eq!(s.position(), 0.0);
    s.set_from_pointer(900.0, 100.0, 200.0); // right of the block
    assert_eq!(s.position(), 100.0);
}

#[test]
fn slider_ignores_zero_width_block() {
    let mut s = CompareSlider::new(3);
    s.set_position(70.0);
    s.set_from_pointer(250.0, 100.0, 0.0);
    assert_eq!(s.position(), 70.0);
}

#[test]
fn slider_active_index_steps_from_the_right() {
    let mut s = CompareSlider::new(3);
    s.set_position(75.0);
    assert_eq!(s.active_index(), 0);
    s.set_position(50.0);
    assert_eq!(s.active_index(), 1);
    s.set_position(10.0);
    assert_eq!(s.active_index(), 2);
    // Both extremes stay in range.
    s.set_position(0.0);
    assert_eq!(s.active_index(), 2);
    s.set_position(100.0);
    assert_eq!(s.active_index(), 0);
}

#[test]
fn slider_clip_complements_position() {
    let mut s = CompareSlider::new(3);
    s.set_position(30.0);
    assert!((s.clip_inset_percent() - 70.0).abs() < 1e-5);
}

#[test]
fn gallery_unfiltered_shows_everything_in_order() {
    let g = Gallery::new(GALLERY_SLIDES.to_vec());
    assert_eq!(g.visible(), (0..GALLERY_SLIDES.len()).collect::<Vec<_>>());
}

#[test]
fn gallery_filter_preserves_authored_order() {
    let mut g = Gallery::new(GALLERY_SLIDES.to_vec());
    g.set_filter("AI");
    assert_eq!(g.visible(), vec![0, 4, 6]);
    g.set_filter("Web Development");
    assert_eq!(g.visible(), vec![2, 5, 8]);
    g.set_filter("All");
    assert_eq!(g.visible().len(), GALLERY_SLIDES.len());
}

#[test]
fn gallery_layout_uses_home_positions_unfiltered() {
    let g = Gallery::new(GALLERY_SLIDES.to_vec());
    let slide = &g.slides()[3];
    assert_eq!(g.layout(3, slide), slide.home);
}

#[test]
fn gallery_layout_packs_filtered_slides_into_a_grid() {
    let mut g = Gallery::new(GALLERY_SLIDES.to_vec());
    g.set_filter("Marketing");
    let slide = &g.slides()[1];
    assert_eq!(g.layout(0, slide), Vec2::new(-4.0, 0.0));
    assert_eq!(g.layout(1, slide), Vec2::new(0.0, 0.0));
    assert_eq!(g.layout(2, slide), Vec2::new(4.0, 0.0));
    assert_eq!(g.layout(3, slide), Vec2::new(-4.0, -3.0));
}

#[test]
fn unknown_filter_hides_all_slides() {
    let mut g = Gallery::new(GALLERY_SLIDES.to_vec());
    g.set_filter("Sculpture");
    assert!(g.visible().is_empty());
}

#[test]
fn cursor_trail_snaps_on_first_pointer_then_lags() {
    let mut fx = CursorFx::default();
    fx.set_pointer(Vec2::new(100.0, 100.0));
    assert_eq!(fx.trail, Vec2::new(100.0, 100.0));

    fx.set_pointer(Vec2::new(200.0, 100.0));
    fx.step();
    let expected = 100.0 + (200.0 - 100.0) * TRAIL_FOLLOW_FACTOR;
    assert!((fx.trail.x - expected).abs() < 1e-4);
    assert_eq!(fx.trail.y, 100.0);
}

#[test]
fn click_burst_spawns_and_fades_out() {
    let mut fx = CursorFx::default();
    let mut rng = StdRng::seed_from_u64(7);
    fx.spawn_burst(Vec2::new(50.0, 50.0), &mut rng);
    assert_eq!(fx.particles().len(), PARTICLES_PER_CLICK);
    assert!(fx
        .particles()
        .iter()
        .all(|p| p.size >= PARTICLE_SIZE_MIN && p.size <= PARTICLE_SIZE_MIN + PARTICLE_SIZE_SPAN));

    // One extra frame absorbs float rounding in the repeated subtraction.
    let frames_to_fade = (1.0 / PARTICLE_FADE_PER_FRAME) as usize + 1;
    for _ in 0..frames_to_fade {
        fx.step();
    }
    assert!(fx.particles().is_empty());
}

#[test]
fn particles_drift_by_their_velocity() {
    let mut fx = CursorFx::default();
    let mut rng = StdRng::seed_from_u64(7);
    fx.spawn_burst(Vec2::new(0.0, 0.0), &mut rng);
    let v = fx.particles()[0].velocity;
    fx.step();
    assert!((fx.particles()[0].position - v).length() < 1e-5);
}

#[test]
fn timeline_has_three_titled_entries() {
    assert_eq!(TIMELINE.len(), 3);
    assert!(TIMELINE
        .iter()
        .all(|e| !e.title.is_empty() && !e.description.is_empty() && !e.actions.is_empty()));
}
