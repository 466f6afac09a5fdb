// Shared tuning constants for the cursor follower and page effects.

// Cursor follower
pub const EASING_RATIO: f32 = 0.15; // fraction of the ring-to-pointer gap closed per tick
pub const REFERENCE_FPS: f32 = 60.0; // frame rate the per-frame ratio was tuned at
pub const MAX_FRAME_DT_SEC: f32 = 0.25; // clamp for time-normalized easing after tab switches

// Marker sizing (CSS px, square)
pub const RING_SIZE_DEFAULT: f32 = 36.0;
pub const RING_SIZE_EXPANDED: f32 = 50.0; // while hovering a link or button
pub const DOT_SIZE: f32 = 8.0;

// Ring border palette
pub const RING_COLOR_ACTIVE: &str = "#0f52ba";
pub const RING_COLOR_INACTIVE: &str = "#bfa17f";

// Scroll thresholds (CSS px)
pub const BACK_TO_TOP_THRESHOLD: f64 = 20.0;
pub const NAVBAR_SOLID_THRESHOLD: f64 = 50.0;
pub const REVEAL_BOTTOM_MARGIN: f64 = 100.0; // element must clear this much of the viewport bottom

// Reveal styling
pub const REVEAL_HIDDEN_OFFSET_PX: f64 = 30.0;
pub const REVEAL_TRANSITION: &str = "opacity 0.5s ease, transform 0.5s ease";

// Decorative `.shape` float timing (seconds)
pub const SHAPE_DURATION_MIN: f32 = 5.0;
pub const SHAPE_DURATION_SPAN: f32 = 10.0;
pub const SHAPE_DELAY_SPAN: f32 = 5.0;

// Fallback backdrop
pub const FALLBACK_SHAPE_COUNT: usize = 10;
pub const FALLBACK_SIZE_MIN_PX: f32 = 10.0;
pub const FALLBACK_SIZE_SPAN_PX: f32 = 30.0;
pub const FALLBACK_DURATION_MIN: f32 = 10.0;
pub const FALLBACK_DURATION_SPAN: f32 = 20.0;
pub const FALLBACK_DELAY_SPAN: f32 = 5.0;
pub const FALLBACK_GRADIENT: &str = "linear-gradient(135deg, #2F2E41 0%, #4D44DB 100%)";
pub const FALLBACK_SHAPE_FILL: &str = "rgba(108, 99, 255, 0.5)";
pub const FALLBACK_SHAPE_OPACITY: &str = "0.3";

// 3D particle scene (scene units unless noted)
pub const PARTICLE_COUNT: usize = 1500;
pub const PARTICLE_SPREAD: f32 = 10.0; // cube edge the particles are scattered in
pub const PARTICLE_SIZE: f32 = 0.03;
pub const PARTICLE_OPACITY: f32 = 0.8;
pub const PARTICLE_SPIN: [f32; 2] = [0.001, 0.002]; // x/y rotation per frame (rad)
pub const SPHERE_RADIUS: f32 = 0.5;
pub const SPHERE_SEGMENTS: u32 = 32;
pub const SPHERE_COLOR: u32 = 0x3b82f6;
pub const SPHERE_OPACITY: f32 = 0.3;
pub const SPHERE_SPIN: [f32; 2] = [0.005, 0.003];
pub const SPHERE_PULSE_AMPLITUDE: f64 = 0.2;
pub const SPHERE_PULSE_RATE_PER_MS: f64 = 0.001;
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 3.0;
pub const SCENE_POINTER_DIVISOR: f32 = 100.0; // CSS px per pointer unit, measured from viewport centre
pub const SCENE_POINTER_INFLUENCE: f32 = 0.0005; // extra particle rotation per pointer unit per frame
