//! Platform-free logic behind the site's client-side effects.
//!
//! Nothing here touches the DOM; the web frontend supplies [`host::Marker`]
//! and [`host::FrameScheduler`] implementations and forwards events.

pub mod backdrop;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod host;
pub mod hover;
pub mod scene;
pub mod scroll;

pub use config::{CursorConfig, EasingMode};
pub use cursor::{CursorFollower, FollowerLoop, MarkerFrame, MarkerSet, PointerTracker, RingStyle};
pub use error::{MarkerRole, SiteError, SiteResult};
pub use host::{repeat_each_frame, FrameScheduler, LoopHandle, Marker};
#[cfg(any(test, feature = "test-util"))]
pub use host::ManualFrames;
pub use hover::HoverModulator;
