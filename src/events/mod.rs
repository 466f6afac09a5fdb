pub mod anchors;
pub mod hover;
pub mod pointer;
pub mod scroll;

pub use anchors::wire_smooth_anchors;
pub use hover::wire_hover_targets;
pub use pointer::{wire_pointer_tracker, wire_scene_pointer};
pub use scroll::{wire_back_to_top, wire_navbar, wire_reveal};
