// Test doubles for the cursor host capabilities.

#![allow(dead_code)]
use glam::Vec2;
use site_core::Marker;
use std::cell::RefCell;

#[derive(Clone, Debug, PartialEq)]
pub enum MarkerCall {
    Translate(Vec2),
    Size(f32),
    BorderColor(String),
}

/// Records every style write in order.
#[derive(Default)]
pub struct RecordingMarker {
    pub calls: RefCell<Vec<MarkerCall>>,
}

impl RecordingMarker {
    pub fn last_translate(&self) -> Option<Vec2> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            MarkerCall::Translate(p) => Some(*p),
            _ => None,
        })
    }

    pub fn last_size(&self) -> Option<f32> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            MarkerCall::Size(s) => Some(*s),
            _ => None,
        })
    }

    pub fn last_border_color(&self) -> Option<String> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            MarkerCall::BorderColor(s) => Some(s.clone()),
            _ => None,
        })
    }
}

impl Marker for RecordingMarker {
    fn set_translate(&self, x: f32, y: f32) {
        self.calls
            .borrow_mut()
            .push(MarkerCall::Translate(Vec2::new(x, y)));
    }

    fn set_size(&self, px: f32) {
        self.calls.borrow_mut().push(MarkerCall::Size(px));
    }

    fn set_border_color(&self, color: &str) {
        self.calls
            .borrow_mut()
            .push(MarkerCall::BorderColor(color.to_string()));
    }
}

pub fn approx_eq(a: Vec2, b: Vec2) -> bool {
    (a - b).abs().max_element() < 1e-4
}
