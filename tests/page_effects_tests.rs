// Host-side tests for scroll thresholds, backdrop layout and the particle scene.

use glam::Vec2;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::backdrop::{fallback_shapes, shape_float};
use site_core::constants::PARTICLE_COUNT;
use site_core::scene::{particle_buffers, scene_pointer, SceneMotion};
use site_core::PointerTracker;
use site_core::scroll::{
    anchor_target_id, back_to_top_visible, navbar_solid, should_reveal, RevealState,
};

#[test]
fn anchor_fragments() {
    assert_eq!(anchor_target_id("#projects"), Some("projects"));
    assert_eq!(anchor_target_id("#contact-me"), Some("contact-me"));
    assert_eq!(anchor_target_id("#"), None);
    assert_eq!(anchor_target_id("https://example.com/#x"), None);
}

#[test]
fn back_to_top_appears_after_small_scroll() {
    assert!(!back_to_top_visible(0.0));
    assert!(!back_to_top_visible(20.0));
    assert!(back_to_top_visible(21.0));
    assert!(back_to_top_visible(5000.0));
}

#[test]
fn navbar_turns_solid_past_threshold() {
    assert!(!navbar_solid(0.0));
    assert!(!navbar_solid(50.0));
    assert!(navbar_solid(50.5));
}

#[test]
fn reveal_needs_element_clear_of_bottom_margin() {
    let viewport = 800.0;
    assert!(should_reveal(0.0, viewport));
    assert!(should_reveal(699.9, viewport));
    assert!(!should_reveal(700.0, viewport));
    assert!(!should_reveal(1200.0, viewport));
    // tiny viewports reveal nothing below their top
    assert!(!should_reveal(0.0, 80.0));
}

#[test]
fn reveal_styles() {
    assert_eq!(RevealState::Hidden.opacity(), "0");
    assert_eq!(RevealState::Shown.opacity(), "1");
    assert_eq!(RevealState::Shown.transform(), "translateY(0)");
}

#[test]
fn page_shape_timings_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let a = shape_float(&mut rng);
        assert!((5.0..15.0).contains(&a.duration_s));
        assert!((0.0..5.0).contains(&a.delay_s));
    }
}

#[test]
fn fallback_layout_in_range() {
    let shapes = fallback_shapes(&mut StdRng::seed_from_u64(42), 10);
    assert_eq!(shapes.len(), 10);
    for s in &shapes {
        assert!((10.0..40.0).contains(&s.size_px));
        assert!((0.0..100.0).contains(&s.left_pct));
        assert!((0.0..100.0).contains(&s.top_pct));
        assert!((10.0..30.0).contains(&s.animation.duration_s));
        assert!((0.0..5.0).contains(&s.animation.delay_s));
        assert!(s.animation.to_css().starts_with("float "));
    }
}

#[test]
fn fallback_sizes_never_reach_upper_bound() {
    // all-ones bits first, then small counts: covers the top of every range
    let shapes = fallback_shapes(&mut StepRng::new(u64::MAX, 1), 10);
    for s in &shapes {
        assert!(s.size_px < 40.0, "{}", s.size_px);
        assert!(s.left_pct < 100.0 && s.top_pct < 100.0);
    }
}

#[test]
fn scene_spins_with_pointer_offset() {
    let pointer = PointerTracker::default();
    let viewport = Vec2::new(1280.0, 720.0);
    let mut motion = SceneMotion::default();

    // no movement yet: base spin only
    motion.step(pointer.position());
    assert!((motion.particles - Vec2::new(0.001, 0.002)).abs().max_element() < 1e-7);

    let p = scene_pointer(Vec2::new(640.0, 560.0), viewport);
    pointer.record(p.x, p.y);
    motion.step(pointer.position());
    // 200 px below centre = 2 units -> extra spin about x
    assert!((motion.particles.x - (0.002 + 2.0 * 0.0005)).abs() < 1e-6);
    assert!((motion.particles.y - 0.004).abs() < 1e-6);
}

#[test]
fn particle_buffers_match_scene_size() {
    let b = particle_buffers(&mut StdRng::seed_from_u64(11), PARTICLE_COUNT);
    assert_eq!(b.len(), 1500);
    assert_eq!(b.positions.len(), b.colors.len());
    assert!(b.positions.iter().all(|p| p.abs() < 5.0 || *p == -5.0));
}
