//! One-shot reveal latch.
//!
//! A wrapper starts hidden (shifted down by the configured offset, fully
//! transparent). The first intersection sample that is intersecting with a
//! ratio at or above the threshold trips the latch; from then on the wrapper
//! stays shown for the rest of its mount, whatever the viewport does.

use crate::config::RevealConfig;

/// Transition applied to the wrapper's opacity and transform.
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease-out, transform 0.6s ease-out";

/// One `IntersectionObserverEntry`, reduced to what the latch reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    config: RevealConfig,
    shown: bool,
}

impl RevealLatch {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            shown: false,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// Feed a sample. Returns `true` only on the call that trips the latch.
    pub fn observe(&mut self, sample: IntersectionSample) -> bool {
        if self.shown {
            return false;
        }
        if sample.is_intersecting && sample.ratio >= self.config.threshold {
            self.shown = true;
            return true;
        }
        false
    }

    /// Inline style for the wrapper in its current state.
    pub fn style(&self) -> String {
        reveal_style(self.shown, self.config.offset_px)
    }
}

/// Inline style for a reveal wrapper.
pub fn reveal_style(shown: bool, offset_px: f64) -> String {
    if shown {
        format!("opacity:1;transform:translateY(0);transition:{REVEAL_TRANSITION}")
    } else {
        format!("opacity:0;transform:translateY({offset_px}px);transition:{REVEAL_TRANSITION}")
    }
}
