//! Carousel index state machine and the timer for self-advancing sections.

use crate::gesture::{DragUpdate, GestureTracker, SwipeDirection};
use crate::transform::{slot_transform, SlotTransform};
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::time::Duration;

/// Observable interaction phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
}

/// Commit record produced when a gesture settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settle {
    /// `None` when the release fell below both advance thresholds.
    pub direction: Option<SwipeDirection>,
    /// Index after the commit.
    pub index: usize,
}

/// One carousel instance: a current index over `len` caller-owned items plus
/// the gesture tracker that drives it.
///
/// The carousel never touches the items themselves; callers map the indices
/// in [`Carousel::rendered_slots`] back onto their own media. While a gesture
/// holds the pointer, programmatic navigation (`next`/`previous`/`go_to`) is
/// ignored: the gesture wins until released.
#[derive(Debug, Default)]
pub struct Carousel {
    len: usize,
    current: usize,
    tracker: GestureTracker,
}

/// One of the three visible slots, resolved to an item index and its pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedSlot {
    pub slot: i8,
    pub index: usize,
    pub transform: SlotTransform,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            tracker: GestureTracker::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        if self.tracker.is_dragging() {
            Phase::Dragging
        } else {
            Phase::Idle
        }
    }

    /// Normalized drag progress; 0 whenever idle.
    #[inline]
    pub fn drag_progress(&self) -> f32 {
        self.tracker.progress()
    }

    /// Advance one item, wrapping. Ignored while dragging or empty.
    pub fn next(&mut self) {
        if self.is_empty() || self.phase() == Phase::Dragging {
            return;
        }
        self.current = (self.current + 1) % self.len;
    }

    /// Step back one item, wrapping. Ignored while dragging or empty.
    pub fn previous(&mut self) {
        if self.is_empty() || self.phase() == Phase::Dragging {
            return;
        }
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Jump to an index, wrapping out-of-range targets. Ignored while
    /// dragging or empty.
    pub fn go_to(&mut self, index: usize) {
        if self.is_empty() || self.phase() == Phase::Dragging {
            return;
        }
        self.current = index % self.len;
    }

    /// Responsive item-set change: clamps the current index into range and
    /// cancels any in-flight gesture.
    pub fn set_len(&mut self, len: usize) {
        let _ = self.tracker.end();
        self.len = len;
        self.current = if len == 0 { 0 } else { self.current % len };
        log::debug!("[carousel] len={} current={}", self.len, self.current);
    }

    /// Route a pointer-down into the tracker. No-op on an empty carousel.
    pub fn begin_drag(&mut self, x: f32, y: f32, time_ms: f64) {
        if self.is_empty() {
            return;
        }
        self.tracker.start(x, y, time_ms);
    }

    /// Route a pointer-move into the tracker.
    pub fn drag_to(&mut self, x: f32, y: f32, time_ms: f64, container_width: f32) -> DragUpdate {
        self.tracker.move_to(x, y, time_ms, container_width)
    }

    /// Settle a completed (or cancelled) gesture, committing the index
    /// change when the release clears an advance threshold.
    pub fn end_drag(&mut self) -> Settle {
        let direction = self.tracker.end();
        match direction {
            Some(SwipeDirection::Forward) => self.next(),
            Some(SwipeDirection::Backward) => self.previous(),
            None => {}
        }
        if direction.is_some() {
            log::debug!("[carousel] settle {:?} -> {}", direction, self.current);
        }
        Settle {
            direction,
            index: self.current,
        }
    }

    /// The consumption contract with the rendering layer: item index and
    /// pose for each of the three visible slots. Empty carousels render
    /// nothing navigable.
    pub fn rendered_slots(&self) -> SmallVec<[RenderedSlot; 3]> {
        let mut out = SmallVec::new();
        if self.is_empty() {
            return out;
        }
        let progress = self.tracker.progress();
        for slot in [-1i8, 0, 1] {
            // adding len first keeps the signed sum non-negative
            let index = ((self.current + self.len) as isize + slot as isize) as usize % self.len;
            out.push(RenderedSlot {
                slot,
                index,
                transform: slot_transform(slot, progress),
            });
        }
        out
    }
}

/// Interval accumulator for carousels that advance without gestures.
///
/// `tick` is fed measured frame deltas and yields how many whole steps
/// elapsed; the owner applies them as `next()` calls, so a timer tick cycles
/// Idle -> settle -> Idle without ever entering `Dragging`. Reset whenever
/// the visible item set changes size or the owner is torn down.
#[derive(Debug)]
pub struct AutoAdvance {
    interval: Duration,
    elapsed: Duration,
}

impl AutoAdvance {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn tick(&mut self, dt: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut steps = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            steps += 1;
        }
        steps
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

/// Named registry for the page's carousels, keyed by section id.
#[derive(Debug, Default)]
pub struct CarouselSet {
    carousels: FnvHashMap<&'static str, Carousel>,
}

impl CarouselSet {
    pub fn insert(&mut self, id: &'static str, carousel: Carousel) {
        self.carousels.insert(id, carousel);
    }

    pub fn get(&self, id: &str) -> Option<&Carousel> {
        self.carousels.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Carousel> {
        self.carousels.get_mut(id)
    }
}
