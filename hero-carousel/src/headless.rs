//! DOM-free carousel host.
//!
//! [`HeadlessCarousel`] wires a [`CarouselController`] to a [`ManualTimer`] and
//! an [`Environment`] the same way the Leptos component wires it to the
//! browser: events go through `handle`, a pause flip or interval change
//! reconciles the timer, and unmount tears down before anything else. Time only
//! moves when the caller says so, which makes autoplay behavior testable.

use std::time::Duration;

use tracing::debug;

use crate::autoplay::{ManualTimer, TimerCommand};
use crate::config::CarouselConfig;
use crate::controller::{CarouselController, CarouselEvent, Outcome};
use crate::error::Result;
use crate::host::Environment;

#[derive(Debug)]
pub struct HeadlessCarousel<E: Environment> {
    controller: CarouselController,
    timer: ManualTimer,
    env: E,
    mounted: bool,
}

impl<E: Environment> HeadlessCarousel<E> {
    /// Create and mount a carousel over `slide_count` slides.
    pub fn mount(slide_count: usize, config: &CarouselConfig, env: E) -> Result<Self> {
        let controller = CarouselController::new(slide_count, config)?;
        let mut host = Self {
            controller,
            timer: ManualTimer::new(),
            env,
            mounted: true,
        };
        host.reconcile();
        Ok(host)
    }

    pub fn controller(&self) -> &CarouselController {
        &self.controller
    }

    pub fn active_index(&self) -> usize {
        self.controller.active_index()
    }

    pub fn timer(&self) -> &ManualTimer {
        &self.timer
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Swap answers the host gives. Takes effect at the next re-arm, which is
    /// when the browser host would re-query too.
    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Deliver one input event.
    pub fn dispatch(&mut self, event: CarouselEvent) -> Outcome {
        let outcome = self.controller.handle(event);
        if outcome.needs_rearm() && self.mounted {
            self.reconcile();
        }
        outcome
    }

    /// Mirror `visibilitychange`, reading `hidden` from the environment.
    pub fn sync_visibility(&mut self) -> Outcome {
        let hidden = self.env.tab_hidden().unwrap_or(false);
        self.dispatch(CarouselEvent::VisibilityChanged { hidden })
    }

    /// Advance virtual time, delivering every tick that falls due.
    /// Returns how many ticks changed the active slide.
    pub fn elapse(&mut self, by: Duration) -> usize {
        let ticks = self.timer.elapse(by);
        ticks
            .into_iter()
            .filter(|id| self.controller.handle(CarouselEvent::Tick(*id)).index_changed)
            .count()
    }

    pub fn set_interval(&mut self, interval: Duration) {
        if self.controller.set_interval(interval) && self.mounted {
            self.reconcile();
        }
    }

    /// Tear down and release the timer. Later events and ticks are no-ops.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        let cmd = self.controller.teardown();
        self.timer.apply(cmd);
    }

    fn reconcile(&mut self) {
        let cmd = self
            .controller
            .reconcile_autoplay(self.env.prefers_reduced_motion());
        if let TimerCommand::Arm { id, every } = cmd {
            debug!(timer = id.get(), ?every, "headless autoplay armed");
        }
        self.timer.apply(cmd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticEnvironment;

    const INTERVAL: Duration = Duration::from_millis(5000);

    fn mounted(count: usize) -> HeadlessCarousel<StaticEnvironment> {
        HeadlessCarousel::mount(count, &CarouselConfig::default(), StaticEnvironment::visible())
            .expect("mounts")
    }

    #[test]
    fn autoplay_advances_each_interval() {
        let mut host = mounted(3);
        assert_eq!(host.elapse(INTERVAL), 1);
        assert_eq!(host.active_index(), 1);
        assert_eq!(host.elapse(2 * INTERVAL), 2);
        assert_eq!(host.active_index(), 0);
    }

    #[test]
    fn unmount_releases_the_timer() {
        let mut host = mounted(3);
        host.unmount();
        assert_eq!(host.timer().armed(), None);
        assert_eq!(host.elapse(10 * INTERVAL), 0);
        assert!(!host.is_mounted());
    }

    #[test]
    fn interval_change_restarts_the_period() {
        let mut host = mounted(3);
        host.elapse(Duration::from_millis(4000));
        host.set_interval(Duration::from_millis(2000));
        assert_eq!(host.elapse(Duration::from_millis(1500)), 0);
        assert_eq!(host.elapse(Duration::from_millis(500)), 1);
    }

    #[test]
    fn visibility_is_read_from_the_environment() {
        let mut host = mounted(3);
        host.env_mut().hidden = Some(true);
        assert!(host.sync_visibility().pause_changed);
        assert_eq!(host.elapse(3 * INTERVAL), 0);
        host.env_mut().hidden = Some(false);
        host.sync_visibility();
        assert_eq!(host.elapse(INTERVAL), 1);
    }
}
