//! Layout for the decorative backdrop: float timings for the page's own
//! `.shape` elements and the circles drawn when no 3D scene is available.

use crate::constants::{
    FALLBACK_DELAY_SPAN, FALLBACK_DURATION_MIN, FALLBACK_DURATION_SPAN, FALLBACK_SIZE_MIN_PX,
    FALLBACK_SIZE_SPAN_PX, SHAPE_DELAY_SPAN, SHAPE_DURATION_MIN, SHAPE_DURATION_SPAN,
};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatAnimation {
    pub duration_s: f32,
    pub delay_s: f32,
}

impl FloatAnimation {
    /// CSS `animation` shorthand using the page's `float` keyframes.
    pub fn to_css(&self) -> String {
        format!(
            "float {:.2}s ease-in-out {:.2}s infinite",
            self.duration_s, self.delay_s
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallbackShape {
    pub size_px: f32,
    pub left_pct: f32,
    pub top_pct: f32,
    pub animation: FloatAnimation,
}

fn float_in<R: Rng>(rng: &mut R, min: f32, span: f32, delay_span: f32) -> FloatAnimation {
    FloatAnimation {
        duration_s: rng.gen_range(min..min + span),
        delay_s: rng.gen_range(0.0..delay_span),
    }
}

/// Timing for one of the page's `.shape` elements.
pub fn shape_float<R: Rng>(rng: &mut R) -> FloatAnimation {
    float_in(rng, SHAPE_DURATION_MIN, SHAPE_DURATION_SPAN, SHAPE_DELAY_SPAN)
}

pub fn fallback_shapes<R: Rng>(rng: &mut R, count: usize) -> Vec<FallbackShape> {
    (0..count)
        .map(|_| FallbackShape {
            size_px: rng.gen_range(
                FALLBACK_SIZE_MIN_PX..FALLBACK_SIZE_MIN_PX + FALLBACK_SIZE_SPAN_PX,
            ),
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            animation: float_in(
                rng,
                FALLBACK_DURATION_MIN,
                FALLBACK_DURATION_SPAN,
                FALLBACK_DELAY_SPAN,
            ),
        })
        .collect()
}
