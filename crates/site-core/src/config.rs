//! Cursor follower tuning.
//!
//! Defaults come from [`crate::constants`]; a page can override individual
//! values through `data-cursor-<key>` attributes, which the web frontend
//! feeds to [`CursorConfig::apply_override`].

use crate::constants::{
    DOT_SIZE, EASING_RATIO, REFERENCE_FPS, RING_COLOR_ACTIVE, RING_COLOR_INACTIVE,
    RING_SIZE_DEFAULT, RING_SIZE_EXPANDED,
};
use crate::error::{SiteError, SiteResult};

/// How the easing ratio is applied per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum EasingMode {
    /// Close `ratio` of the gap on every tick, whatever the frame interval.
    /// Convergence is faster on high refresh-rate displays.
    #[default]
    PerFrame,
    /// Scale the ratio by the elapsed time so that convergence matches
    /// `PerFrame` at `reference_fps`.
    TimeNormalized { reference_fps: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct CursorConfig {
    pub ratio: f32,
    pub ring_size: f32,
    pub ring_expanded_size: f32,
    pub dot_size: f32,
    pub active_color: String,
    pub inactive_color: String,
    pub easing: EasingMode,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            ratio: EASING_RATIO,
            ring_size: RING_SIZE_DEFAULT,
            ring_expanded_size: RING_SIZE_EXPANDED,
            dot_size: DOT_SIZE,
            active_color: RING_COLOR_ACTIVE.to_string(),
            inactive_color: RING_COLOR_INACTIVE.to_string(),
            easing: EasingMode::PerFrame,
        }
    }
}

/// Keys accepted by [`CursorConfig::apply_override`].
pub const OVERRIDE_KEYS: [&str; 7] = [
    "ratio",
    "ring-size",
    "ring-expanded-size",
    "dot-size",
    "active-color",
    "inactive-color",
    "easing",
];

impl CursorConfig {
    pub fn validate(&self) -> SiteResult<()> {
        check_ratio("ratio", self.ratio)?;
        check_size("ring-size", self.ring_size)?;
        check_size("ring-expanded-size", self.ring_expanded_size)?;
        check_size("dot-size", self.dot_size)?;
        check_color("active-color", &self.active_color)?;
        check_color("inactive-color", &self.inactive_color)?;
        if let EasingMode::TimeNormalized { reference_fps } = self.easing {
            check_fps("easing", reference_fps)?;
        }
        Ok(())
    }

    /// Apply a single `key=value` override. On error the config is unchanged.
    pub fn apply_override(&mut self, key: &str, value: &str) -> SiteResult<()> {
        let value = value.trim();
        match key {
            "ratio" => self.ratio = check_ratio(key, parse_f32(key, value)?)?,
            "ring-size" => self.ring_size = check_size(key, parse_f32(key, value)?)?,
            "ring-expanded-size" => {
                self.ring_expanded_size = check_size(key, parse_f32(key, value)?)?
            }
            "dot-size" => self.dot_size = check_size(key, parse_f32(key, value)?)?,
            "active-color" => self.active_color = check_color(key, value)?.to_string(),
            "inactive-color" => self.inactive_color = check_color(key, value)?.to_string(),
            "easing" => self.easing = parse_easing(value)?,
            _ => return Err(SiteError::invalid(key, "unknown key")),
        }
        Ok(())
    }
}

fn parse_f32(key: &str, value: &str) -> SiteResult<f32> {
    value
        .parse::<f32>()
        .map_err(|e| SiteError::invalid(key, format!("{value:?}: {e}")))
}

fn check_ratio(key: &str, ratio: f32) -> SiteResult<f32> {
    if ratio > 0.0 && ratio < 1.0 {
        Ok(ratio)
    } else {
        Err(SiteError::invalid(key, format!("{ratio} is not strictly between 0 and 1")))
    }
}

fn check_size(key: &str, px: f32) -> SiteResult<f32> {
    if px.is_finite() && px > 0.0 {
        Ok(px)
    } else {
        Err(SiteError::invalid(key, format!("{px} is not a positive size")))
    }
}

fn check_fps(key: &str, fps: f32) -> SiteResult<f32> {
    if fps.is_finite() && fps > 0.0 {
        Ok(fps)
    } else {
        Err(SiteError::invalid(key, format!("{fps} is not a positive frame rate")))
    }
}

fn check_color<'a>(key: &str, color: &'a str) -> SiteResult<&'a str> {
    if color.is_empty() {
        Err(SiteError::invalid(key, "empty color"))
    } else {
        Ok(color)
    }
}

fn parse_easing(value: &str) -> SiteResult<EasingMode> {
    match value {
        "per-frame" => Ok(EasingMode::PerFrame),
        "time" => Ok(EasingMode::TimeNormalized {
            reference_fps: REFERENCE_FPS,
        }),
        other => match other.strip_prefix("time:") {
            Some(fps) => {
                let fps = check_fps("easing", parse_f32("easing", fps)?)?;
                Ok(EasingMode::TimeNormalized { reference_fps: fps })
            }
            None => Err(SiteError::invalid(
                "easing",
                format!("{other:?} is not one of per-frame, time, time:<fps>"),
            )),
        },
    }
}
