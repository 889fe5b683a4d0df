use crate::constants::{
    ADVANCE_DISTANCE_PX, ADVANCE_VELOCITY_PX_PER_MS, AXIS_LOCK_THRESHOLD_PX, DRAG_SENSITIVITY,
};
use glam::Vec2;

/// Direction a completed swipe moves the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Leftward drag: the next item slides in.
    Forward,
    /// Rightward drag: the previous item slides in.
    Backward,
}

/// Axis commitment for an in-flight gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisLock {
    #[default]
    Undecided,
    Horizontal,
    Vertical,
}

/// Outcome of feeding one move sample to the tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    /// No gesture in progress; the sample was discarded.
    Ignored,
    /// Horizontal drag; the caller must suppress default scrolling.
    Horizontal { progress: f32 },
    /// Vertical or not yet committed; let the page scroll normally.
    Passive,
}

/// Converts a pointer-down -> move -> up sequence into an axis lock, a
/// normalized progress value in \[-1, 1\] and a release velocity.
///
/// All gating state is private and synchronous: `pointer_down` is the only
/// flag consulted when deciding whether a move or end sample counts, so a
/// lagging UI re-render can never drop or duplicate a transition. Timestamps
/// are injected by the caller (milliseconds, e.g. `Event.timeStamp`); the
/// tracker never reads a clock.
#[derive(Debug, Default)]
pub struct GestureTracker {
    pointer_down: bool,
    axis: AxisLock,
    start: Vec2,
    last: Vec2,
    last_time_ms: f64,
    velocity_px_per_ms: f32,
    progress: f32,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a gesture at the given element-relative coordinates.
    pub fn start(&mut self, x: f32, y: f32, time_ms: f64) {
        self.pointer_down = true;
        self.axis = AxisLock::Undecided;
        self.start = Vec2::new(x, y);
        self.last = self.start;
        self.last_time_ms = time_ms;
        self.velocity_px_per_ms = 0.0;
        self.progress = 0.0;
    }

    /// Feed a move sample. `container_width` is the live layout width of the
    /// dragged element; a zero width (not laid out yet) leaves progress at
    /// rest rather than dividing by it.
    pub fn move_to(&mut self, x: f32, y: f32, time_ms: f64, container_width: f32) -> DragUpdate {
        if !self.pointer_down {
            // Move after a premature end: drop it.
            return DragUpdate::Ignored;
        }

        let dx = x - self.start.x;
        let dy = y - self.start.y;
        if self.axis == AxisLock::Undecided && dx.abs().max(dy.abs()) > AXIS_LOCK_THRESHOLD_PX {
            self.axis = if dx.abs() > dy.abs() {
                AxisLock::Horizontal
            } else {
                AxisLock::Vertical
            };
        }

        let dt_ms = time_ms - self.last_time_ms;
        if dt_ms > 0.0 {
            self.velocity_px_per_ms = ((x - self.last.x) as f64 / dt_ms) as f32;
            self.last_time_ms = time_ms;
        }
        self.last = Vec2::new(x, y);

        match self.axis {
            AxisLock::Horizontal => {
                if container_width > 0.0 {
                    self.progress = (dx / container_width * DRAG_SENSITIVITY).clamp(-1.0, 1.0);
                }
                DragUpdate::Horizontal {
                    progress: self.progress,
                }
            }
            _ => DragUpdate::Passive,
        }
    }

    /// End the gesture and decide whether it commits a slide change.
    ///
    /// Implicit cancellation (pointer released outside the element, capture
    /// lost) routes through here as well. A duplicate end, or an end with no
    /// preceding start, is a no-op returning `None`. Progress and the axis
    /// lock are always reset on exit, advance or not.
    pub fn end(&mut self) -> Option<SwipeDirection> {
        if !self.pointer_down {
            return None;
        }

        let final_dx = self.last.x - self.start.x;
        let advance = final_dx.abs() > ADVANCE_DISTANCE_PX
            || self.velocity_px_per_ms.abs() > ADVANCE_VELOCITY_PX_PER_MS;

        self.pointer_down = false;
        self.axis = AxisLock::Undecided;
        self.progress = 0.0;
        self.velocity_px_per_ms = 0.0;

        if !advance || final_dx == 0.0 {
            return None;
        }
        Some(if final_dx < 0.0 {
            SwipeDirection::Forward
        } else {
            SwipeDirection::Backward
        })
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.pointer_down
    }

    #[inline]
    pub fn axis(&self) -> AxisLock {
        self.axis
    }

    /// Current normalized progress; 0 whenever no gesture is active.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }
}
