//! Horizontal swipe detection.
//!
//! Only the x coordinate of the first touch point matters. A gesture resolves
//! on touch end; the origin is cleared whether or not the travel was enough.

use crate::controller::Direction;

#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold_px: f64,
    origin_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            origin_x: None,
        }
    }

    pub fn threshold_px(&self) -> f64 {
        self.threshold_px
    }

    /// Gesture in progress?
    pub fn is_tracking(&self) -> bool {
        self.origin_x.is_some()
    }

    /// Touch start. A second start without an end restarts the gesture.
    pub fn begin(&mut self, x: f64) {
        self.origin_x = Some(x);
    }

    /// Touch end. Dragging right (positive travel) goes back, dragging left goes
    /// forward. Travel must strictly exceed the threshold.
    pub fn end(&mut self, x: f64) -> Option<Direction> {
        let origin = self.origin_x.take()?;
        let dx = x - origin;
        if !dx.is_finite() || dx.abs() <= self.threshold_px {
            return None;
        }
        Some(if dx > 0.0 {
            Direction::Previous
        } else {
            Direction::Next
        })
    }

    /// Touch cancelled by the platform.
    pub fn cancel(&mut self) {
        self.origin_x = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_threshold_does_nothing() {
        let mut swipe = SwipeTracker::new(40.0);
        swipe.begin(100.0);
        assert_eq!(swipe.end(140.0), None);
        assert!(!swipe.is_tracking(), "origin cleared even without a transition");
    }

    #[test]
    fn just_past_threshold_triggers() {
        let mut swipe = SwipeTracker::new(40.0);
        swipe.begin(100.0);
        assert_eq!(swipe.end(141.0), Some(Direction::Previous));
        swipe.begin(100.0);
        assert_eq!(swipe.end(59.0), Some(Direction::Next));
    }

    #[test]
    fn end_without_begin_is_ignored() {
        let mut swipe = SwipeTracker::new(40.0);
        assert_eq!(swipe.end(500.0), None);
    }

    #[test]
    fn a_second_end_does_not_reuse_the_origin() {
        let mut swipe = SwipeTracker::new(40.0);
        swipe.begin(0.0);
        assert_eq!(swipe.end(-80.0), Some(Direction::Next));
        assert_eq!(swipe.end(-160.0), None);
    }

    #[test]
    fn cancel_drops_the_gesture() {
        let mut swipe = SwipeTracker::new(40.0);
        swipe.begin(0.0);
        swipe.cancel();
        assert_eq!(swipe.end(200.0), None);
    }
}
