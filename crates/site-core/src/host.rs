//! Capabilities the page effects need from their environment.
//!
//! The web frontend implements these on top of DOM elements and
//! `requestAnimationFrame`; tests substitute recording doubles.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A visual element that can be positioned and restyled.
pub trait Marker {
    /// Place the element's top-left corner at `(x, y)` viewport px.
    fn set_translate(&self, x: f32, y: f32);
    /// Set width and height to `px`.
    fn set_size(&self, px: f32);
    fn set_border_color(&self, color: &str);
}

/// Runs callbacks before the next repaint.
pub trait FrameScheduler {
    /// Schedule `callback` to run once. The callback may schedule again.
    fn request_frame(&self, callback: Box<dyn FnOnce()>);
}

#[derive(Default)]
struct LoopControl {
    stopped: Cell<bool>,
    ticks: Cell<u64>,
}

/// Observes and stops a loop started with [`repeat_each_frame`].
#[derive(Clone)]
pub struct LoopHandle {
    control: Rc<LoopControl>,
}

impl LoopHandle {
    /// No further ticks run after this, and nothing is rescheduled.
    pub fn stop(&self) {
        self.control.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.control.stopped.get()
    }

    pub fn ticks(&self) -> u64 {
        self.control.ticks.get()
    }
}

struct Repeating {
    scheduler: Rc<dyn FrameScheduler>,
    control: Rc<LoopControl>,
    tick: RefCell<Box<dyn FnMut()>>,
}

/// Run `tick` now, then once per scheduled frame until stopped.
pub fn repeat_each_frame(
    scheduler: Rc<dyn FrameScheduler>,
    tick: impl FnMut() + 'static,
) -> LoopHandle {
    let control = Rc::new(LoopControl::default());
    run(Rc::new(Repeating {
        scheduler,
        control: control.clone(),
        tick: RefCell::new(Box::new(tick)),
    }));
    LoopHandle { control }
}

fn run(r: Rc<Repeating>) {
    if r.control.stopped.get() {
        return;
    }
    (r.tick.borrow_mut())();
    r.control.ticks.set(r.control.ticks.get() + 1);
    let next = r.clone();
    r.scheduler.request_frame(Box::new(move || run(next)));
}

/// Scheduler whose frames are advanced by the caller.
#[cfg(any(test, feature = "test-util"))]
#[derive(Default)]
pub struct ManualFrames {
    queue: RefCell<Vec<Box<dyn FnOnce()>>>,
}

#[cfg(any(test, feature = "test-util"))]
impl ManualFrames {
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run every callback queued so far; callbacks they queue wait for the
    /// next frame. Returns how many ran.
    pub fn run_frame(&self) -> usize {
        let due = std::mem::take(&mut *self.queue.borrow_mut());
        let n = due.len();
        for cb in due {
            cb();
        }
        n
    }

    pub fn run_frames(&self, count: usize) {
        for _ in 0..count {
            self.run_frame();
        }
    }
}

#[cfg(any(test, feature = "test-util"))]
impl FrameScheduler for ManualFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push(callback);
    }
}
