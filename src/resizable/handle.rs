//! Handles - draggable dividers and the drag state machine
//!
//! A handle is Idle until a press lands on it, then Dragging until the
//! pointer (or touch) that started the gesture is released or cancelled.
//! While dragging it keeps the pointer origin and a snapshot of its two
//! neighbors' sizes; every move recomputes both sizes from that snapshot.

use std::fmt;

use super::geometry::Point;
use super::panel::SizeBounds;

/// Callback receiving `[prev, next]` sizes after every drag update
pub type ResizeObserver = Box<dyn FnMut([f64; 2])>;

/// Which input device owns a gesture
///
/// Mouse and touch are mutually exclusive for the lifetime of one drag:
/// events from any other source are ignored until the drag ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Mouse,
    /// Touch point id as reported by the platform
    Touch(u64),
}

/// Sizes of the two neighbors captured when the drag started (percent)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborSnapshot {
    pub prev: f64,
    pub next: f64,
}

impl NeighborSnapshot {
    /// Combined size of the pair; constant for the whole gesture
    pub fn total(&self) -> f64 {
        self.prev + self.next
    }
}

/// Everything a handle remembers about the gesture in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pub origin: Point,
    pub snapshot: NeighborSnapshot,
    pub source: InputSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragGesture),
}

/// Redistribute a neighbor pair after `movement` percent of pointer travel.
///
/// Clamp precedence, first match wins, each recomputing the other side so
/// the pair total is preserved:
/// 1. prev below its min
/// 2. next below its min
/// 3. prev above its max
/// 4. next above its max
///
/// When `prev.min + next.min > total` rule 1 wins and next's minimum is
/// violated; callers must keep minimums within the pair total.
pub fn redistribute(
    snapshot: NeighborSnapshot,
    movement: f64,
    prev: SizeBounds,
    next: SizeBounds,
) -> [f64; 2] {
    let total = snapshot.total();
    let new_prev = snapshot.prev + movement;
    let new_next = snapshot.next - movement;

    if new_prev < prev.min {
        [prev.min, total - prev.min]
    } else if new_next < next.min {
        [total - next.min, next.min]
    } else if new_prev > prev.max {
        [prev.max, total - prev.max]
    } else if new_next > next.max {
        [total - next.max, next.max]
    } else {
        [new_prev, new_next]
    }
}

/// A draggable divider between two panels
#[derive(Default)]
pub struct Handle {
    state: DragState,
    /// Child indices of the (prev, next) panels; None when the handle is not
    /// flanked by two panels.
    neighbors: Option<(usize, usize)>,
    observer: Option<ResizeObserver>,
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("state", &self.state)
            .field("neighbors", &self.neighbors)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Handle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a callback that receives `[prev, next]` on every drag update
    pub fn with_observer(mut self, observer: impl FnMut([f64; 2]) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn gesture(&self) -> Option<DragGesture> {
        match self.state {
            DragState::Dragging(gesture) => Some(gesture),
            DragState::Idle => None,
        }
    }

    pub fn drag_origin(&self) -> Option<Point> {
        self.gesture().map(|g| g.origin)
    }

    pub fn snapshot(&self) -> Option<NeighborSnapshot> {
        self.gesture().map(|g| g.snapshot)
    }

    /// Child indices of the panels this handle resizes
    pub fn neighbors(&self) -> Option<(usize, usize)> {
        self.neighbors
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: Option<(usize, usize)>) {
        self.neighbors = neighbors;
    }

    pub(crate) fn begin(&mut self, gesture: DragGesture) {
        self.state = DragState::Dragging(gesture);
    }

    /// Return to Idle. Returns whether a drag was actually in progress, so
    /// repeated releases are harmless.
    pub(crate) fn release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }

    pub(crate) fn notify(&mut self, sizes: [f64; 2]) {
        if let Some(observer) = self.observer.as_mut() {
            observer(sizes);
        }
    }
}
