use crate::constants::{
    BACK_TO_TOP_THRESHOLD, NAVBAR_SOLID_THRESHOLD, REVEAL_BOTTOM_MARGIN, REVEAL_HIDDEN_OFFSET_PX,
};

/// Element id an in-page link points at. `#` alone and non-fragment links
/// yield `None`.
#[inline]
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[inline]
pub fn back_to_top_visible(scroll_top: f64) -> bool {
    scroll_top > BACK_TO_TOP_THRESHOLD
}

#[inline]
pub fn navbar_solid(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SOLID_THRESHOLD
}

/// Whether an element whose top edge sits at `element_top` (viewport px)
/// has scrolled far enough into view to be revealed.
#[inline]
pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_BOTTOM_MARGIN
}

/// Inline style pair `(opacity, transform)` for a reveal target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Shown,
}

impl RevealState {
    pub fn opacity(self) -> &'static str {
        match self {
            Self::Hidden => "0",
            Self::Shown => "1",
        }
    }

    pub fn transform(self) -> String {
        match self {
            Self::Hidden => format!("translateY({REVEAL_HIDDEN_OFFSET_PX}px)"),
            Self::Shown => "translateY(0)".to_string(),
        }
    }
}
