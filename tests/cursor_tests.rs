// Host-side tests for the cursor follower and its frame loop.

mod common;

use common::{approx_eq, RecordingMarker};
use glam::Vec2;
use site_core::{
    CursorConfig, CursorFollower, FollowerLoop, FrameScheduler, LoopHandle, ManualFrames, Marker,
    MarkerSet, SiteError,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

struct Rig {
    follower: Rc<RefCell<CursorFollower>>,
    ring: Rc<RecordingMarker>,
    dot: Rc<RecordingMarker>,
    frames: Rc<ManualFrames>,
    handle: LoopHandle,
}

fn start_rig(config: CursorConfig) -> Rig {
    let follower = Rc::new(RefCell::new(CursorFollower::new(config)));
    let ring = Rc::new(RecordingMarker::default());
    let dot = Rc::new(RecordingMarker::default());
    let frames = Rc::new(ManualFrames::default());
    let handle = FollowerLoop::start(
        follower.clone(),
        MarkerSet::new(
            Some(ring.clone() as Rc<dyn Marker>),
            Some(dot.clone() as Rc<dyn Marker>),
        ),
        frames.clone() as Rc<dyn FrameScheduler>,
    );
    Rig {
        follower,
        ring,
        dot,
        frames,
        handle,
    }
}

#[test]
fn step_applies_exact_interpolation_per_axis() {
    let mut f = CursorFollower::new(CursorConfig::default());
    let tracker = f.tracker();
    let pointers = [(100.0, -40.0), (3.5, 900.0), (-12.0, 0.25), (640.0, 480.0)];
    for (x, y) in pointers {
        let before = f.ring_position();
        tracker.record(x, y);
        f.step(Duration::from_millis(16));
        let expected = before + (Vec2::new(x, y) - before) * 0.15;
        assert!(approx_eq(f.ring_position(), expected));
    }
}

#[test]
fn scenario_two_ticks_from_origin() {
    let rig = start_rig(CursorConfig::default());
    // first tick ran at start with the pointer still at the origin
    assert_eq!(rig.handle.ticks(), 1);
    assert_eq!(rig.follower.borrow().ring_position(), Vec2::ZERO);

    rig.follower.borrow().tracker().record(100.0, 100.0);
    rig.frames.run_frame();
    assert!(approx_eq(
        rig.follower.borrow().ring_position(),
        Vec2::new(15.0, 15.0)
    ));
    rig.frames.run_frame();
    assert!(approx_eq(
        rig.follower.borrow().ring_position(),
        Vec2::new(27.75, 27.75)
    ));
    assert_eq!(rig.handle.ticks(), 3);
}

#[test]
fn distance_strictly_shrinks_without_overshoot() {
    let mut f = CursorFollower::new(CursorConfig::default());
    let target = Vec2::new(300.0, -120.0);
    f.tracker().record(target.x, target.y);

    let mut prev = f.ring_position().distance(target);
    for _ in 0..60 {
        f.step(Duration::ZERO);
        let ring = f.ring_position();
        let d = ring.distance(target);
        assert!(d < prev, "distance grew: {d} >= {prev}");
        // never passes the target on either axis
        assert!(ring.x <= target.x && ring.y >= target.y);
        prev = d;
    }
    assert!(prev < 0.1);
}

#[test]
fn converged_ring_stays_put() {
    let mut f = CursorFollower::new(CursorConfig::default());
    f.tracker().record(50.0, 50.0);
    for _ in 0..400 {
        f.step(Duration::ZERO);
    }
    let settled = f.ring_position();
    assert!(approx_eq(settled, Vec2::new(50.0, 50.0)));
    f.step(Duration::ZERO);
    assert!(approx_eq(f.ring_position(), settled));
}

#[test]
fn dot_tracks_pointer_without_lag() {
    let rig = start_rig(CursorConfig::default());
    let tracker = rig.follower.borrow().tracker();
    for (x, y) in [(10.0, 20.0), (400.0, 5.0), (400.0, 5.0), (-3.0, 77.0)] {
        tracker.record(x, y);
        rig.frames.run_frame();
        let dot = rig.dot.last_translate().unwrap();
        assert!(approx_eq(dot, Vec2::new(x - 4.0, y - 4.0)));
    }
}

#[test]
fn dot_is_sized_from_config_before_first_tick() {
    let mut cfg = CursorConfig::default();
    cfg.apply_override("dot-size", "10").unwrap();
    let rig = start_rig(cfg);
    assert_eq!(rig.dot.last_size(), Some(10.0));
    // the ring is sized by the hover modulator, never by the loop
    assert_eq!(rig.ring.last_size(), None);

    rig.follower.borrow().tracker().record(50.0, 50.0);
    rig.frames.run_frame();
    assert!(approx_eq(
        rig.dot.last_translate().unwrap(),
        Vec2::new(45.0, 45.0)
    ));
}

#[test]
fn ring_marker_is_centred_on_eased_position() {
    let rig = start_rig(CursorConfig::default());
    rig.follower.borrow().tracker().record(200.0, 100.0);
    rig.frames.run_frames(5);
    let ring_pos = rig.follower.borrow().ring_position();
    let drawn = rig.ring.last_translate().unwrap();
    assert!(approx_eq(drawn, ring_pos - Vec2::splat(18.0)));
}

#[test]
fn no_pointer_movement_means_no_drift() {
    let rig = start_rig(CursorConfig::default());
    rig.frames.run_frames(100);
    assert_eq!(rig.follower.borrow().ring_position(), Vec2::ZERO);
    assert_eq!(rig.handle.ticks(), 101);
}

#[test]
fn last_pointer_write_wins_between_frames() {
    let rig = start_rig(CursorConfig::default());
    let tracker = rig.follower.borrow().tracker();
    tracker.record(1000.0, 1000.0);
    tracker.record(20.0, 40.0);
    rig.frames.run_frame();
    assert!(approx_eq(
        rig.follower.borrow().ring_position(),
        Vec2::new(3.0, 6.0)
    ));
}

#[test]
fn loop_keeps_exactly_one_frame_pending() {
    let rig = start_rig(CursorConfig::default());
    for _ in 0..10 {
        assert_eq!(rig.frames.pending(), 1);
        rig.frames.run_frame();
    }
    rig.handle.stop();
    assert!(rig.handle.is_stopped());
    rig.frames.run_frame();
    assert_eq!(rig.frames.pending(), 0);
    assert_eq!(rig.handle.ticks(), 11);
}

#[test]
fn missing_markers_degrade_to_no_op() {
    let follower = Rc::new(RefCell::new(CursorFollower::new(CursorConfig::default())));
    let frames = Rc::new(ManualFrames::default());
    let markers = MarkerSet::default();
    let missing = markers.missing();
    assert_eq!(missing.len(), 2);
    assert!(missing
        .iter()
        .all(|e| matches!(e, SiteError::MissingTargetElement(_))));

    let handle = FollowerLoop::start(
        follower.clone(),
        markers,
        frames.clone() as Rc<dyn FrameScheduler>,
    );
    follower.borrow().tracker().record(10.0, 10.0);
    frames.run_frames(3);
    assert_eq!(handle.ticks(), 4);
    assert!(follower.borrow().ring_position().x > 0.0);
}
