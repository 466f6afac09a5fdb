//! Cursor follower: a dot pinned to the pointer and a ring that eases after it.
//!
//! [`PointerTracker`] writes the latest pointer position, [`CursorFollower`]
//! owns the ring position and computes one eased step per frame, and
//! [`FollowerLoop`] drives those steps through a [`FrameScheduler`] and pushes
//! the results to the [`Marker`]s.

use crate::config::{CursorConfig, EasingMode};
use crate::constants::MAX_FRAME_DT_SEC;
use crate::error::{MarkerRole, SiteError};
use crate::host::{repeat_each_frame, FrameScheduler, LoopHandle, Marker};
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Write side of the shared pointer position. Cloning shares the same cell.
#[derive(Clone, Default)]
pub struct PointerTracker {
    position: Rc<Cell<Vec2>>,
}

impl PointerTracker {
    /// Last write wins; no validation.
    #[inline]
    pub fn record(&self, x: f32, y: f32) {
        self.position.set(Vec2::new(x, y));
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position.get()
    }
}

/// Style currently applied to the ring marker.
#[derive(Clone, Debug, PartialEq)]
pub struct RingStyle {
    pub size: f32,
    pub border_color: String,
}

/// Top-left translations for both markers, already centred on their targets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerFrame {
    pub ring: Vec2,
    pub dot: Vec2,
}

pub struct CursorFollower {
    config: CursorConfig,
    pointer: PointerTracker,
    ring: Vec2,
    style: Rc<RefCell<RingStyle>>,
}

impl CursorFollower {
    pub fn new(config: CursorConfig) -> Self {
        let style = RingStyle {
            size: config.ring_size,
            border_color: config.inactive_color.clone(),
        };
        Self {
            config,
            pointer: PointerTracker::default(),
            ring: Vec2::ZERO,
            style: Rc::new(RefCell::new(style)),
        }
    }

    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    /// A tracker writing into this follower's pointer position.
    pub fn tracker(&self) -> PointerTracker {
        self.pointer.clone()
    }

    pub fn ring_style(&self) -> Rc<RefCell<RingStyle>> {
        self.style.clone()
    }

    pub fn ring_position(&self) -> Vec2 {
        self.ring
    }

    /// Fraction of the gap to close for a frame that took `dt`.
    pub fn effective_ratio(&self, dt: Duration) -> f32 {
        match self.config.easing {
            EasingMode::PerFrame => self.config.ratio,
            EasingMode::TimeNormalized { reference_fps } => {
                let frames = dt.as_secs_f32().min(MAX_FRAME_DT_SEC) * reference_fps;
                1.0 - (1.0 - self.config.ratio).powf(frames)
            }
        }
    }

    /// Advance the ring one tick toward the pointer.
    pub fn step(&mut self, dt: Duration) -> MarkerFrame {
        let pointer = self.pointer.position();
        let ratio = self.effective_ratio(dt);
        self.ring += (pointer - self.ring) * ratio;

        let ring_half = self.style.borrow().size * 0.5;
        let dot_half = self.config.dot_size * 0.5;
        MarkerFrame {
            ring: self.ring - Vec2::splat(ring_half),
            dot: pointer - Vec2::splat(dot_half),
        }
    }
}

/// The markers a loop writes to. Either may be absent; absent markers are
/// skipped.
#[derive(Clone, Default)]
pub struct MarkerSet {
    pub ring: Option<Rc<dyn Marker>>,
    pub dot: Option<Rc<dyn Marker>>,
}

impl MarkerSet {
    pub fn new(ring: Option<Rc<dyn Marker>>, dot: Option<Rc<dyn Marker>>) -> Self {
        Self { ring, dot }
    }

    pub fn missing(&self) -> Vec<SiteError> {
        let mut out = Vec::new();
        if self.ring.is_none() {
            out.push(SiteError::missing_marker(MarkerRole::Ring));
        }
        if self.dot.is_none() {
            out.push(SiteError::missing_marker(MarkerRole::Dot));
        }
        out
    }

    pub fn apply(&self, frame: &MarkerFrame) {
        if let Some(ring) = &self.ring {
            ring.set_translate(frame.ring.x, frame.ring.y);
        }
        if let Some(dot) = &self.dot {
            dot.set_translate(frame.dot.x, frame.dot.y);
        }
    }
}

/// Self-rescheduling driver for a [`CursorFollower`].
pub struct FollowerLoop {
    follower: Rc<RefCell<CursorFollower>>,
    markers: MarkerSet,
    last_instant: Instant,
}

impl FollowerLoop {
    /// Size the dot from the config, run the first tick now and keep ticking
    /// once per scheduled frame.
    pub fn start(
        follower: Rc<RefCell<CursorFollower>>,
        markers: MarkerSet,
        scheduler: Rc<dyn FrameScheduler>,
    ) -> LoopHandle {
        for e in markers.missing() {
            log::warn!("[cursor] {e}; updates for it are skipped");
        }
        if let Some(dot) = &markers.dot {
            dot.set_size(follower.borrow().config().dot_size);
        }
        let mut lp = FollowerLoop {
            follower,
            markers,
            last_instant: Instant::now(),
        };
        repeat_each_frame(scheduler, move || lp.tick())
    }

    fn tick(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_instant);
        self.last_instant = now;
        let frame = self.follower.borrow_mut().step(dt);
        self.markers.apply(&frame);
    }
}
