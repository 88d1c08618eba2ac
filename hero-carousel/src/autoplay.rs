//! Autoplay timer bookkeeping.
//!
//! The controller never owns a real timer. It decides *whether* one should be
//! running and hands the host a [`TimerCommand`]; the host (browser interval or
//! [`ManualTimer`]) carries it out and reports ticks back tagged with the
//! [`TimerId`] they were armed under. Ticks from a timer that has since been
//! replaced or cancelled are recognised by id and dropped.

use std::time::Duration;

/// Identity of one armed timer. Never reused within a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// What the host must do with its autoplay timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Cancel whatever is running, then tick every `every` tagged with `id`.
    Arm { id: TimerId, every: Duration },
    /// Cancel whatever is running.
    Disarm,
}

impl TimerCommand {
    pub fn is_armed(&self) -> bool {
        matches!(self, TimerCommand::Arm { .. })
    }
}

/// Armed-timer slot owned by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct AutoplayClock {
    next_id: u64,
    armed: Option<TimerId>,
}

impl AutoplayClock {
    pub(crate) fn armed(&self) -> Option<TimerId> {
        self.armed
    }

    pub(crate) fn arm(&mut self, every: Duration) -> TimerCommand {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.armed = Some(id);
        TimerCommand::Arm { id, every }
    }

    pub(crate) fn disarm(&mut self) -> TimerCommand {
        self.armed = None;
        TimerCommand::Disarm
    }

    pub(crate) fn is_current(&self, id: TimerId) -> bool {
        self.armed == Some(id)
    }
}

/// Virtual-clock timer for headless hosts and tests.
///
/// Holds at most one interval, like the browser host. Time only moves through
/// [`ManualTimer::elapse`].
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    now: Duration,
    slot: Option<Armed>,
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    id: TimerId,
    every: Duration,
    due: Duration,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn armed(&self) -> Option<TimerId> {
        self.slot.map(|armed| armed.id)
    }

    pub fn apply(&mut self, command: TimerCommand) {
        self.slot = match command {
            TimerCommand::Arm { id, every } if !every.is_zero() => Some(Armed {
                id,
                every,
                due: self.now + every,
            }),
            _ => None,
        };
    }

    /// Advance the clock and return every tick that came due, in order.
    pub fn elapse(&mut self, by: Duration) -> Vec<TimerId> {
        let target = self.now + by;
        let mut fired = Vec::new();
        if let Some(armed) = self.slot.as_mut() {
            while armed.due <= target {
                fired.push(armed.id);
                armed.due += armed.every;
            }
        }
        self.now = target;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn each_arm_gets_a_fresh_id() {
        let mut clock = AutoplayClock::default();
        let first = clock.arm(SEC);
        let second = clock.arm(SEC);
        assert_ne!(first, second);
        let TimerCommand::Arm { id, .. } = second else {
            panic!("expected arm");
        };
        assert!(clock.is_current(id));
        clock.disarm();
        assert!(!clock.is_current(id));
    }

    #[test]
    fn manual_timer_fires_once_per_period() {
        let mut clock = AutoplayClock::default();
        let mut timer = ManualTimer::new();
        let cmd = clock.arm(SEC);
        timer.apply(cmd);
        let id = timer.armed().expect("armed");

        assert_eq!(timer.elapse(Duration::from_millis(999)), vec![]);
        assert_eq!(timer.elapse(Duration::from_millis(1)), vec![id]);
        assert_eq!(timer.elapse(3 * SEC), vec![id, id, id]);
        assert_eq!(timer.now(), Duration::from_secs(4));
    }

    #[test]
    fn rearm_restarts_the_period() {
        let mut clock = AutoplayClock::default();
        let mut timer = ManualTimer::new();
        timer.apply(clock.arm(SEC));
        timer.elapse(Duration::from_millis(900));
        timer.apply(clock.arm(SEC));
        assert_eq!(timer.elapse(Duration::from_millis(200)), vec![]);
        assert_eq!(timer.elapse(Duration::from_millis(800)).len(), 1);
    }

    #[test]
    fn disarm_stops_ticks() {
        let mut clock = AutoplayClock::default();
        let mut timer = ManualTimer::new();
        timer.apply(clock.arm(SEC));
        timer.apply(clock.disarm());
        assert_eq!(timer.armed(), None);
        assert!(timer.elapse(10 * SEC).is_empty());
    }
}
