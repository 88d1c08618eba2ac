//! Pause bookkeeping.
//!
//! Three independent sources can hold the carousel still: the pointer hovering
//! the region, focus inside the region, and the tab being hidden. How they
//! combine is a [`PausePolicy`]:
//!
//! - [`PausePolicy::ReasonSet`] (default): paused while *any* source is active.
//!   Blurring a button while the pointer still hovers keeps the carousel paused.
//! - [`PausePolicy::SingleFlag`]: one boolean, last writer wins. A blur clears
//!   the pause even though the pointer is still over the region. Kept for
//!   parity with pages that depend on the older behavior.

use serde::{Deserialize, Serialize};

/// How pause sources combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PausePolicy {
    #[default]
    ReasonSet,
    SingleFlag,
}

/// Something that wants autoplay held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PauseSource {
    Hover,
    Focus,
    HiddenTab,
}

impl PauseSource {
    const fn bit(self) -> u8 {
        match self {
            PauseSource::Hover => 0b001,
            PauseSource::Focus => 0b010,
            PauseSource::HiddenTab => 0b100,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PauseState {
    policy: PausePolicy,
    reasons: u8,
    flag: bool,
}

impl PauseState {
    pub fn new(policy: PausePolicy) -> Self {
        Self {
            policy,
            reasons: 0,
            flag: false,
        }
    }

    pub fn policy(&self) -> PausePolicy {
        self.policy
    }

    pub fn is_paused(&self) -> bool {
        match self.policy {
            PausePolicy::ReasonSet => self.reasons != 0,
            PausePolicy::SingleFlag => self.flag,
        }
    }

    /// Whether `source` is currently recorded as active. Under `SingleFlag`
    /// this still tracks sources, it just doesn't consult them.
    pub fn holds(&self, source: PauseSource) -> bool {
        self.reasons & source.bit() != 0
    }

    /// Record `source` as active or released. Returns `true` when the
    /// effective paused state flipped.
    pub fn set(&mut self, source: PauseSource, active: bool) -> bool {
        let before = self.is_paused();
        if active {
            self.reasons |= source.bit();
        } else {
            self.reasons &= !source.bit();
        }
        self.flag = active;
        before != self.is_paused()
    }
}
