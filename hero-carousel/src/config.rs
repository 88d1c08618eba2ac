//! Carousel and reveal tuning.
//!
//! Both structs deserialize with `#[serde(default)]`, so a content file only
//! names the knobs it changes. Call [`CarouselConfig::validate`] /
//! [`RevealConfig::validate`] after loading; constructors do it for you.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, Result};
use crate::pause::PausePolicy;

/// Autoplay cadence used when none is configured.
pub const DEFAULT_INTERVAL_MS: u64 = 5_000;
/// Minimum horizontal travel (exclusive) before a touch drag counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 40.0;
/// Fraction of the wrapper that must be visible before it reveals.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.15;
/// Downward entrance offset of a hidden reveal wrapper.
pub const DEFAULT_REVEAL_OFFSET_PX: f64 = 16.0;

/// Controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Autoplay period in milliseconds
    pub interval_ms: u64,
    /// Swipe distance that must be exceeded to change slides
    pub swipe_threshold_px: f64,
    /// How hover, focus and tab visibility combine into "paused"
    pub pause_policy: PausePolicy,
    /// Disable to keep the carousel on manual navigation only
    pub autoplay: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            pause_policy: PausePolicy::default(),
            autoplay: true,
        }
    }
}

impl CarouselConfig {
    /// Same defaults with a different autoplay period.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval_ms: interval.as_millis().min(u128::from(u64::MAX)) as u64,
            ..Self::default()
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(CarouselError::ZeroInterval);
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0 {
            return Err(CarouselError::InvalidSwipeThreshold(self.swipe_threshold_px));
        }
        Ok(())
    }
}

/// Reveal-on-scroll configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Intersection ratio in `[0, 1]` that trips the latch
    pub threshold: f64,
    /// Entrance offset in pixels (content slides up from this far below)
    pub offset_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REVEAL_THRESHOLD,
            offset_px: DEFAULT_REVEAL_OFFSET_PX,
        }
    }
}

impl RevealConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(CarouselError::InvalidRevealThreshold(self.threshold));
        }
        if !self.offset_px.is_finite() || self.offset_px < 0.0 {
            return Err(CarouselError::InvalidRevealOffset(self.offset_px));
        }
        Ok(())
    }
}
