use crate::cursor::{CursorFollower, RingStyle};
use crate::host::Marker;
use std::cell::RefCell;
use std::rc::Rc;

/// Grows and recolours the ring while a link or button is hovered.
///
/// Every event overwrites the ring style; hovering nested or overlapping
/// targets is not reference counted, so the last enter/leave wins.
pub struct HoverModulator {
    style: Rc<RefCell<RingStyle>>,
    ring: Option<Rc<dyn Marker>>,
    default_size: f32,
    expanded_size: f32,
    active_color: String,
    inactive_color: String,
}

impl HoverModulator {
    pub fn new(follower: &CursorFollower, ring: Option<Rc<dyn Marker>>) -> Self {
        let cfg = follower.config();
        Self {
            style: follower.ring_style(),
            ring,
            default_size: cfg.ring_size,
            expanded_size: cfg.ring_expanded_size,
            active_color: cfg.active_color.clone(),
            inactive_color: cfg.inactive_color.clone(),
        }
    }

    pub fn on_enter(&self) {
        self.apply(self.expanded_size, &self.active_color);
    }

    pub fn on_leave(&self) {
        self.apply(self.default_size, &self.inactive_color);
    }

    /// Push the resting style to the ring, e.g. right after it is created.
    pub fn reset(&self) {
        self.on_leave();
    }

    fn apply(&self, size: f32, color: &str) {
        {
            let mut style = self.style.borrow_mut();
            style.size = size;
            style.border_color.clear();
            style.border_color.push_str(color);
        }
        if let Some(ring) = &self.ring {
            ring.set_size(size);
            ring.set_border_color(color);
        }
    }
}
