// DOM hooks the page markup provides.

// Cursor markers
pub const CURSOR_RING_CLASS: &str = "cursor-ring";
pub const CURSOR_DOT_CLASS: &str = "cursor-dot";
pub const HOVER_TARGETS: &str = "a, button"; // elements that grow the ring
pub const CURSOR_OVERRIDE_PREFIX: &str = "data-cursor-"; // <body> attributes read as config overrides

// Navigation
pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";
pub const BACK_TO_TOP_ID: &str = "back-to-top";
pub const HIDDEN_CLASS: &str = "d-none";
pub const NAVBAR: &str = ".navbar";
pub const NAVBAR_SOLID_CLASSES: [&str; 2] = ["bg-dark", "shadow"];

// Reveal-on-scroll targets
pub const REVEAL_TARGETS: &str = ".skill-card, .project-card, .timeline-content";

// Backdrop
pub const CANVAS_CONTAINER_ID: &str = "canvas-container";
pub const SHAPES: &str = ".shape";
pub const FALLBACK_SHAPE_CLASS: &str = "fallback-shape";
pub const SCENE_LIBRARY_GLOBAL: &str = "THREE"; // present when the page loaded the 3D scene script
