// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe gesture recognition for a single pointer.
//!
//! [`SwipeState`] turns one press-move-release cycle into at most one
//! navigation intent. It also reports a continuous drag delta that hosts can
//! use for live feedback while the gesture is still in progress.
//!
//! ## States
//!
//! - **Idle**: no press is active. Moves are ignored.
//! - **Dragging**: entered on [`SwipeState::on_down`]. It tracks the origin and
//!   the latest pointer position, and holds the pointer [`Capture`] so moves
//!   and releases outside the widget are still delivered.
//!
//! A release ([`SwipeState::on_up`]) or a lost capture
//! ([`SwipeState::on_capture_lost`]) compares `origin - current` along the
//! configured [`Axis`] against the threshold:
//!
//! - above `threshold`: [`SwipeResult::Forward`] (the content was pushed toward
//!   the start, so the next item should come in),
//! - below `-threshold`: [`SwipeResult::Backward`],
//! - otherwise: [`SwipeResult::Tap`].
//!
//! Both always return to Idle and release the capture.
//!
//! ## Usage
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::swipe::{SwipeResult, SwipeState};
//!
//! let mut swipe = SwipeState::new();
//!
//! swipe.on_down(Point::new(100.0, 0.0));
//! swipe.on_move(Point::new(40.0, 3.0));
//! assert_eq!(swipe.drag_delta(), 60.0);
//!
//! assert_eq!(swipe.on_up(), SwipeResult::Forward);
//! assert!(!swipe.is_dragging());
//! assert_eq!(swipe.drag_delta(), 0.0);
//! ```

use kurbo::Point;

use crate::capture::{Capture, PointerHooks};

/// Axis along which a swipe is measured.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Measure along x; pulling left is forward.
    #[default]
    Horizontal,
    /// Measure along y; pulling up is forward.
    Vertical,
}

impl Axis {
    /// Project `point` onto this axis.
    pub const fn component(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }
}

/// Outcome of ending a gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwipeResult {
    /// Travel exceeded the threshold toward the start of the axis.
    Forward,
    /// Travel exceeded the threshold toward the end of the axis.
    Backward,
    /// A press ended within the threshold; no navigation intent.
    Tap,
    /// There was no gesture in progress.
    NoGesture,
}

/// An in-progress press.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Drag {
    /// Pointer position at press time.
    pub origin: Point,
    /// Most recent pointer position.
    pub current: Point,
}

/// Swipe recognizer with scoped pointer capture.
///
/// `H` is the host's global listener registration; see [`PointerHooks`]. The
/// default `()` is for hosts that already deliver every event to the widget.
#[derive(Debug)]
pub struct SwipeState<H: PointerHooks = ()> {
    drag: Option<Drag>,
    /// Minimum travel (exclusive) along [`axis`](Self::axis) to count as a swipe.
    pub threshold: f64,
    /// Axis used to measure travel.
    pub axis: Axis,
    capture: Capture<H>,
}

impl SwipeState {
    /// Travel needed before a release counts as a swipe rather than a tap.
    pub const DEFAULT_THRESHOLD: f64 = 50.0;

    /// Create a horizontal recognizer with the default threshold and no hooks.
    pub fn new() -> Self {
        Self::with_hooks((), Self::DEFAULT_THRESHOLD, Axis::Horizontal)
    }
}

impl Default for SwipeState {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: PointerHooks> SwipeState<H> {
    /// Create a recognizer that attaches `hooks` for the duration of each drag.
    ///
    /// Negative thresholds are treated as zero.
    pub fn with_hooks(hooks: H, threshold: f64, axis: Axis) -> Self {
        Self {
            drag: None,
            threshold: threshold.max(0.0),
            axis,
            capture: Capture::new(hooks),
        }
    }

    /// Record a press at `position` and start tracking.
    ///
    /// A press that arrives mid-drag restarts the gesture from `position`.
    pub fn on_down(&mut self, position: Point) {
        if self.drag.is_some() {
            log::trace!("swipe restarted at {position:?}");
        } else {
            log::trace!("swipe started at {position:?}");
        }
        self.drag = Some(Drag {
            origin: position,
            current: position,
        });
        self.capture.acquire();
    }

    /// Update the tracked position.
    ///
    /// Returns `false` (and does nothing) when no gesture is in progress.
    pub fn on_move(&mut self, position: Point) -> bool {
        match self.drag.as_mut() {
            Some(drag) => {
                drag.current = position;
                true
            }
            None => false,
        }
    }

    /// End the gesture on pointer release and classify it.
    pub fn on_up(&mut self) -> SwipeResult {
        let Some(drag) = self.drag.take() else {
            return SwipeResult::NoGesture;
        };
        self.capture.release();

        let delta = self.axis.component(drag.origin) - self.axis.component(drag.current);
        let result = if delta > self.threshold {
            SwipeResult::Forward
        } else if delta < -self.threshold {
            SwipeResult::Backward
        } else {
            SwipeResult::Tap
        };
        log::trace!("swipe ended: delta={delta} result={result:?}");
        result
    }

    /// End the gesture because the host lost pointer capture.
    ///
    /// This is interpreted exactly like a release at the last known position.
    pub fn on_capture_lost(&mut self) -> SwipeResult {
        self.on_up()
    }

    /// Discard the gesture without producing an intent.
    ///
    /// Returns `true` if a gesture was in progress.
    pub fn cancel(&mut self) -> bool {
        self.capture.release();
        let was_dragging = self.drag.take().is_some();
        if was_dragging {
            log::trace!("swipe canceled");
        }
        was_dragging
    }

    /// Whether a gesture is in progress.
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The in-progress press, if any.
    pub const fn drag(&self) -> Option<&Drag> {
        self.drag.as_ref()
    }

    /// `origin - current` along the axis, or `0.0` when idle.
    ///
    /// Positive values mean the pointer travelled toward the start of the axis.
    pub fn drag_delta(&self) -> f64 {
        self.drag.map_or(0.0, |drag| {
            self.axis.component(drag.origin) - self.axis.component(drag.current)
        })
    }

    /// Whether the pointer capture is currently held.
    pub const fn is_capturing(&self) -> bool {
        self.capture.is_held()
    }

    /// Shared access to the host hooks.
    pub const fn hooks(&self) -> &H {
        self.capture.hooks()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::Cell;

    use super::*;

    #[derive(Clone, Default)]
    struct Listeners(Rc<Cell<i32>>);

    impl PointerHooks for Listeners {
        fn attach(&mut self) {
            self.0.set(self.0.get() + 1);
        }
        fn detach(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    fn x(x: f64) -> Point {
        Point::new(x, 0.0)
    }

    #[test]
    fn long_pull_left_is_forward() {
        let mut swipe = SwipeState::new();
        swipe.on_down(x(100.0));
        swipe.on_move(x(40.0));
        assert_eq!(swipe.on_up(), SwipeResult::Forward);
    }

    #[test]
    fn long_pull_right_is_backward() {
        let mut swipe = SwipeState::new();
        swipe.on_down(x(100.0));
        swipe.on_move(x(151.0));
        assert_eq!(swipe.on_up(), SwipeResult::Backward);
    }

    #[test]
    fn short_travel_is_tap() {
        let mut swipe = SwipeState::new();
        swipe.on_down(x(100.0));
        swipe.on_move(x(80.0));
        assert_eq!(swipe.on_up(), SwipeResult::Tap);
    }

    #[test]
    fn exact_threshold_is_tap() {
        let mut swipe = SwipeState::new();
        swipe.on_down(x(100.0));
        swipe.on_move(x(50.0));
        assert_eq!(swipe.on_up(), SwipeResult::Tap);

        swipe.on_down(x(100.0));
        swipe.on_move(x(150.0));
        assert_eq!(swipe.on_up(), SwipeResult::Tap);
    }

    #[test]
    fn only_last_position_counts() {
        let mut swipe = SwipeState::new();
        swipe.on_down(x(100.0));
        swipe.on_move(x(0.0));
        swipe.on_move(x(90.0));
        assert_eq!(swipe.on_up(), SwipeResult::Tap);
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut swipe = SwipeState::new();
        assert!(!swipe.on_move(x(10.0)));
        assert_eq!(swipe.drag_delta(), 0.0);
        assert_eq!(swipe.on_up(), SwipeResult::NoGesture);
    }

    #[test]
    fn release_resets_state() {
        let mut swipe = SwipeState::new();
        swipe.on_down(x(100.0));
        swipe.on_move(x(10.0));
        swipe.on_up();

        assert!(!swipe.is_dragging());
        assert!(swipe.drag().is_none());
        assert_eq!(swipe.drag_delta(), 0.0);
        assert_eq!(swipe.on_up(), SwipeResult::NoGesture);
    }

    #[test]
    fn capture_loss_behaves_like_release() {
        let mut swipe = SwipeState::new();
        swipe.on_down(x(100.0));
        swipe.on_move(x(20.0));
        assert_eq!(swipe.on_capture_lost(), SwipeResult::Forward);
        assert!(!swipe.is_dragging());
    }

    #[test]
    fn cancel_discards_gesture() {
        let mut swipe = SwipeState::new();
        swipe.on_down(x(100.0));
        swipe.on_move(x(0.0));
        assert!(swipe.cancel());
        assert_eq!(swipe.on_up(), SwipeResult::NoGesture);
        assert!(!swipe.cancel());
    }

    #[test]
    fn second_down_restarts_from_new_origin() {
        let mut swipe = SwipeState::new();
        swipe.on_down(x(100.0));
        swipe.on_move(x(0.0));
        swipe.on_down(x(300.0));
        assert_eq!(swipe.drag_delta(), 0.0);
        swipe.on_move(x(280.0));
        assert_eq!(swipe.on_up(), SwipeResult::Tap);
    }

    #[test]
    fn vertical_axis_ignores_x() {
        let mut swipe = SwipeState::with_hooks((), 50.0, Axis::Vertical);
        swipe.on_down(Point::new(0.0, 200.0));
        swipe.on_move(Point::new(500.0, 120.0));
        assert_eq!(swipe.drag_delta(), 80.0);
        assert_eq!(swipe.on_up(), SwipeResult::Forward);
    }

    #[test]
    fn listeners_bracket_the_drag() {
        let listeners = Listeners::default();
        let mut swipe = SwipeState::with_hooks(listeners.clone(), 50.0, Axis::Horizontal);

        assert_eq!(listeners.0.get(), 0);
        swipe.on_down(x(0.0));
        assert_eq!(listeners.0.get(), 1);
        assert!(swipe.is_capturing());

        // Restarting mid-drag must not register twice.
        swipe.on_down(x(10.0));
        assert_eq!(listeners.0.get(), 1);

        swipe.on_up();
        assert_eq!(listeners.0.get(), 0);
        assert!(!swipe.is_capturing());

        swipe.on_down(x(0.0));
        swipe.cancel();
        assert_eq!(listeners.0.get(), 0);
    }

    #[test]
    fn dropping_mid_drag_detaches() {
        let listeners = Listeners::default();
        {
            let mut swipe = SwipeState::with_hooks(listeners.clone(), 50.0, Axis::Horizontal);
            swipe.on_down(x(0.0));
            assert_eq!(listeners.0.get(), 1);
        }
        assert_eq!(listeners.0.get(), 0);
    }

    #[test]
    fn negative_threshold_clamps_to_zero() {
        let mut swipe = SwipeState::with_hooks((), -10.0, Axis::Horizontal);
        assert_eq!(swipe.threshold, 0.0);
        swipe.on_down(x(10.0));
        swipe.on_move(x(9.0));
        assert_eq!(swipe.on_up(), SwipeResult::Forward);
    }
}
