//! The carousel state machine.
//!
//! [`CarouselController`] owns everything that changes while a carousel is
//! mounted: the active index, the pause sources, the in-flight touch origin and
//! the id of the armed autoplay timer. Every input (timer tick, visibility,
//! hover, focus, keyboard, swipe, arrow buttons, pagination dots) goes through
//! [`CarouselController::handle`], so both layouts and every host see exactly
//! the same transitions.
//!
//! The controller is host-agnostic. It never touches the DOM or a clock; timer
//! work comes back out as [`TimerCommand`]s.
//!
//! ```rust
//! use hero_carousel::{CarouselConfig, CarouselController, CarouselEvent, Direction};
//!
//! let mut carousel = CarouselController::new(3, &CarouselConfig::default())?;
//! carousel.handle(CarouselEvent::Key(Direction::Previous));
//! assert_eq!(carousel.active_index(), 2);
//! # Ok::<(), hero_carousel::CarouselError>(())
//! ```

use std::time::Duration;

use tracing::{debug, warn};

use crate::autoplay::{AutoplayClock, TimerCommand, TimerId};
use crate::config::CarouselConfig;
use crate::error::{CarouselError, Result};
use crate::pause::{PausePolicy, PauseSource, PauseState};
use crate::swipe::SwipeTracker;

/// One step through the slide ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }

    /// Map a `KeyboardEvent.key` value. Only the horizontal arrows navigate.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Previous),
            "ArrowRight" => Some(Direction::Next),
            _ => None,
        }
    }
}

/// Every input the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// Autoplay timer fired.
    Tick(TimerId),
    /// `visibilitychange` on the document.
    VisibilityChanged { hidden: bool },
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut,
    /// Global arrow key.
    Key(Direction),
    /// Previous / Next button.
    Control(Direction),
    /// Pagination dot.
    GoTo(usize),
    TouchStart { x: f64 },
    TouchEnd { x: f64 },
    TouchCancel,
}

/// Result of feeding one event to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Active index after the event.
    pub active: usize,
    /// The active index moved.
    pub index_changed: bool,
    /// The effective pause state flipped; the autoplay timer must be reconciled.
    pub pause_changed: bool,
}

impl Outcome {
    fn idle(active: usize) -> Self {
        Self {
            active,
            index_changed: false,
            pause_changed: false,
        }
    }

    pub fn needs_rearm(&self) -> bool {
        self.pause_changed
    }
}

/// Single owner of one carousel instance's state.
#[derive(Debug, Clone)]
pub struct CarouselController {
    count: usize,
    active: usize,
    interval: Duration,
    autoplay: bool,
    pause: PauseState,
    swipe: SwipeTracker,
    clock: AutoplayClock,
    torn_down: bool,
}

impl CarouselController {
    /// Build a controller for `slide_count` slides.
    ///
    /// Fails with [`CarouselError::EmptySlides`] when there is nothing to show,
    /// or with the config's own validation error.
    pub fn new(slide_count: usize, config: &CarouselConfig) -> Result<Self> {
        if slide_count == 0 {
            return Err(CarouselError::EmptySlides);
        }
        config.validate()?;
        Ok(Self {
            count: slide_count,
            active: 0,
            interval: config.interval(),
            autoplay: config.autoplay,
            pause: PauseState::new(config.pause_policy),
            swipe: SwipeTracker::new(config.swipe_threshold_px),
            clock: AutoplayClock::default(),
            torn_down: false,
        })
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn slide_count(&self) -> usize {
        self.count
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    pub fn pause_policy(&self) -> PausePolicy {
        self.pause.policy()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Id of the timer the controller currently accepts ticks from.
    pub fn armed_timer(&self) -> Option<TimerId> {
        self.clock.armed()
    }

    /// Step one slide, wrapping at both ends. Returns the new active index.
    pub fn advance(&mut self, direction: Direction) -> usize {
        if self.torn_down {
            return self.active;
        }
        let count = self.count as isize;
        let next = (self.active as isize + direction.step() + count).rem_euclid(count) as usize;
        if next != self.active {
            debug!(from = self.active, to = next, ?direction, "carousel advance");
        }
        self.active = next;
        next
    }

    /// Jump straight to `index`. Returns `true` when the active slide changed.
    ///
    /// An index outside `[0, slide_count)` is ignored.
    pub fn set_index(&mut self, index: usize) -> bool {
        if self.torn_down {
            return false;
        }
        if index >= self.count {
            warn!(index, count = self.count, "ignoring out-of-range slide index");
            return false;
        }
        if index == self.active {
            return false;
        }
        debug!(from = self.active, to = index, "carousel jump");
        self.active = index;
        true
    }

    /// Adopt a new slide count, keeping the active index in range.
    pub fn resize(&mut self, slide_count: usize) -> Result<()> {
        if slide_count == 0 {
            return Err(CarouselError::EmptySlides);
        }
        self.count = slide_count;
        self.active %= slide_count;
        Ok(())
    }

    /// Change the autoplay period. Returns `true` when the timer must be re-armed.
    pub fn set_interval(&mut self, interval: Duration) -> bool {
        if interval.is_zero() {
            warn!("ignoring zero autoplay interval");
            return false;
        }
        if interval == self.interval {
            return false;
        }
        self.interval = interval;
        true
    }

    /// Feed one input through the state machine.
    pub fn handle(&mut self, event: CarouselEvent) -> Outcome {
        if self.torn_down {
            debug!(?event, "carousel torn down, dropping event");
            return Outcome::idle(self.active);
        }
        let before = self.active;
        let mut pause_changed = false;

        match event {
            CarouselEvent::Tick(id) => {
                if !self.clock.is_current(id) {
                    debug!(tick = id.get(), "dropping stale autoplay tick");
                } else if self.is_paused() {
                    debug!(tick = id.get(), "autoplay tick while paused");
                } else {
                    self.advance(Direction::Next);
                }
            }
            CarouselEvent::VisibilityChanged { hidden } => {
                pause_changed = self.pause.set(PauseSource::HiddenTab, hidden);
            }
            CarouselEvent::PointerEnter => {
                pause_changed = self.pause.set(PauseSource::Hover, true);
            }
            CarouselEvent::PointerLeave => {
                pause_changed = self.pause.set(PauseSource::Hover, false);
            }
            CarouselEvent::FocusIn => {
                pause_changed = self.pause.set(PauseSource::Focus, true);
            }
            CarouselEvent::FocusOut => {
                pause_changed = self.pause.set(PauseSource::Focus, false);
            }
            CarouselEvent::Key(direction) | CarouselEvent::Control(direction) => {
                self.advance(direction);
            }
            CarouselEvent::GoTo(index) => {
                self.set_index(index);
            }
            CarouselEvent::TouchStart { x } => self.swipe.begin(x),
            CarouselEvent::TouchEnd { x } => {
                if let Some(direction) = self.swipe.end(x) {
                    self.advance(direction);
                }
            }
            CarouselEvent::TouchCancel => self.swipe.cancel(),
        }

        if pause_changed {
            debug!(paused = self.is_paused(), "carousel pause state changed");
        }
        Outcome {
            active: self.active,
            index_changed: self.active != before,
            pause_changed,
        }
    }

    /// Decide what the autoplay timer should be doing right now.
    ///
    /// Always cancels the current timer. A new one is armed only while the
    /// carousel is running, not paused, and the host does not ask for reduced
    /// motion. `reduced_motion = None` means the host could not answer and
    /// counts as no preference.
    pub fn reconcile_autoplay(&mut self, reduced_motion: Option<bool>) -> TimerCommand {
        let reduced = reduced_motion.unwrap_or(false);
        if self.torn_down || !self.autoplay || self.is_paused() || reduced {
            if reduced {
                debug!("reduced motion requested, autoplay off");
            }
            return self.clock.disarm();
        }
        self.clock.arm(self.interval)
    }

    /// Stop reacting to input. Idempotent.
    pub fn teardown(&mut self) -> TimerCommand {
        if !self.torn_down {
            debug!(active = self.active, "carousel teardown");
        }
        self.torn_down = true;
        self.swipe.cancel();
        self.clock.disarm()
    }
}
