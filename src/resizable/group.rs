//! Panel groups - ordered panels and handles along one axis
//!
//! The group owns its children and is the only place that writes panel
//! sizes. Handles address their neighbors by child index; the indices are
//! recomputed whenever the child list changes, so mounting or unmounting a
//! split never leaves a handle pointing at a stale panel.

use std::fmt;

use super::geometry::{Axis, Point, Rect};
use super::handle::{redistribute, DragGesture, Handle, InputSource, NeighborSnapshot};
use super::panel::{Panel, SizeBounds};

/// Default thickness of a handle along the group axis, in pixels
pub const DEFAULT_HANDLE_THICKNESS: f64 = 6.0;

/// Handles thinner than this still get a hit rect of this size
const MIN_HANDLE_HIT_EXTENT: f64 = 8.0;

/// Tolerance for the "sizes sum to 100" check
const PARTITION_TOLERANCE: f64 = 1e-6;

/// Callback receiving every panel size (in child order) when a drag ends
pub type LayoutObserver = Box<dyn FnMut(&[f64])>;

/// One entry in a group's ordered child list
#[derive(Debug)]
pub enum Child {
    Panel(Panel),
    Handle(Handle),
}

impl Child {
    pub fn as_panel(&self) -> Option<&Panel> {
        match self {
            Child::Panel(panel) => Some(panel),
            Child::Handle(_) => None,
        }
    }

    pub fn as_handle(&self) -> Option<&Handle> {
        match self {
            Child::Handle(handle) => Some(handle),
            Child::Panel(_) => None,
        }
    }

    fn as_panel_mut(&mut self) -> Option<&mut Panel> {
        match self {
            Child::Panel(panel) => Some(panel),
            Child::Handle(_) => None,
        }
    }

    fn as_handle_mut(&mut self) -> Option<&mut Handle> {
        match self {
            Child::Handle(handle) => Some(handle),
            Child::Panel(_) => None,
        }
    }
}

impl From<Panel> for Child {
    fn from(panel: Panel) -> Self {
        Child::Panel(panel)
    }
}

impl From<Handle> for Child {
    fn from(handle: Handle) -> Self {
        Child::Handle(handle)
    }
}

/// Pixel rectangle of a child after layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildRect {
    pub index: usize,
    pub rect: Rect,
    pub is_handle: bool,
}

/// Size write deferred to the next animation frame
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingWrite {
    prev: usize,
    next: usize,
    sizes: [f64; 2],
}

/// Container laying out panels and handles along a fixed axis
pub struct PanelGroup {
    axis: Axis,
    children: Vec<Child>,
    bounds: Rect,
    handle_thickness: f64,
    /// Child index of the handle currently dragging, if any
    active: Option<usize>,
    pending: Option<PendingWrite>,
    on_layout: Option<LayoutObserver>,
}

impl fmt::Debug for PanelGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelGroup")
            .field("axis", &self.axis)
            .field("children", &self.children)
            .field("bounds", &self.bounds)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

impl PanelGroup {
    /// Create an empty group. The axis cannot change afterwards.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            children: Vec::new(),
            bounds: Rect::default(),
            handle_thickness: DEFAULT_HANDLE_THICKNESS,
            active: None,
            pending: None,
            on_layout: None,
        }
    }

    /// Create a group from an ordered child list.
    ///
    /// Children are expected to alternate Panel, Handle, Panel, ... This is
    /// not enforced; a handle without a panel on both sides simply never
    /// starts a drag.
    pub fn with_children(axis: Axis, children: impl IntoIterator<Item = Child>) -> Self {
        let mut group = Self::new(axis);
        group.children = children.into_iter().collect();
        group.refresh_neighbors();
        group
    }

    /// Builder: append a child
    pub fn with(mut self, child: impl Into<Child>) -> Self {
        self.push(child);
        self
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_handle_thickness(mut self, thickness: f64) -> Self {
        self.handle_thickness = thickness.max(0.0);
        self
    }

    /// Register a callback that receives all panel sizes when a drag ends
    pub fn on_layout(&mut self, observer: impl FnMut(&[f64]) + 'static) {
        self.on_layout = Some(Box::new(observer));
    }

    // ===== Queries =====

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn handle_thickness(&self) -> f64 {
        self.handle_thickness
    }

    pub fn panel(&self, index: usize) -> Option<&Panel> {
        self.children.get(index).and_then(Child::as_panel)
    }

    pub fn handle(&self, index: usize) -> Option<&Handle> {
        self.children.get(index).and_then(Child::as_handle)
    }

    /// Panels in child order
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.children.iter().filter_map(Child::as_panel)
    }

    /// Panel sizes in child order (percent)
    pub fn sizes(&self) -> Vec<f64> {
        self.panels().map(Panel::size).collect()
    }

    pub fn total_size(&self) -> f64 {
        self.panels().map(Panel::size).sum()
    }

    /// Whether the panel sizes partition the container (sum to 100).
    /// An empty group trivially does.
    pub fn is_partitioned(&self) -> bool {
        self.panels().next().is_none() || (self.total_size() - 100.0).abs() < PARTITION_TOLERANCE
    }

    /// Child index of the handle currently dragging
    pub fn active_handle(&self) -> Option<usize> {
        self.active
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    // ===== Mount / unmount =====

    /// Append a child (mount)
    pub fn push(&mut self, child: impl Into<Child>) {
        self.children.push(child.into());
        self.refresh_neighbors();
    }

    /// Insert a child at `index` (clamped to the end)
    pub fn insert(&mut self, index: usize, child: impl Into<Child>) {
        self.cancel_drag();
        let index = index.min(self.children.len());
        self.children.insert(index, child.into());
        self.refresh_neighbors();
    }

    /// Remove the child at `index` (unmount).
    ///
    /// Any drag in progress is ended first: removing a child shifts indices,
    /// and a gesture must never outlive the layout it started on.
    pub fn remove(&mut self, index: usize) -> Option<Child> {
        if index >= self.children.len() {
            return None;
        }
        self.cancel_drag();
        let child = self.children.remove(index);
        self.refresh_neighbors();
        Some(child)
    }

    /// Remove all children, ending any drag
    pub fn clear(&mut self) {
        self.cancel_drag();
        self.children.clear();
    }

    /// Update the container rectangle (window resize, sidebar toggle)
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Update the handle thickness (display scale change)
    pub fn set_handle_thickness(&mut self, thickness: f64) {
        self.handle_thickness = thickness.max(0.0);
    }

    fn refresh_neighbors(&mut self) {
        let len = self.children.len();
        for i in 0..len {
            if !matches!(self.children[i], Child::Handle(_)) {
                continue;
            }
            let prev_is_panel = i > 0 && matches!(self.children[i - 1], Child::Panel(_));
            let next_is_panel = i + 1 < len && matches!(self.children[i + 1], Child::Panel(_));
            let neighbors = if prev_is_panel && next_is_panel {
                Some((i - 1, i + 1))
            } else {
                None
            };
            if neighbors.is_none() && len > 1 {
                tracing::debug!(target: "resize", handle = i, "handle is not between two panels");
            }
            if let Some(handle) = self.children[i].as_handle_mut() {
                handle.set_neighbors(neighbors);
            }
        }
    }

    // ===== Geometry =====

    /// Space along the axis left for panels after handles take theirs
    fn panel_space(&self) -> f64 {
        let handles = self
            .children
            .iter()
            .filter(|c| matches!(c, Child::Handle(_)))
            .count() as f64;
        (self.axis.extent(self.bounds) - handles * self.handle_thickness).max(0.0)
    }

    /// Pixel extent of the panel at child `index` along the axis
    pub fn panel_extent(&self, index: usize) -> Option<f64> {
        let panel = self.panel(index)?;
        Some(panel.size() / 100.0 * self.panel_space())
    }

    /// Lay out every child inside the group bounds
    pub fn layout(&self) -> Vec<ChildRect> {
        let space = self.panel_space();
        let origin = self.axis.main(Point::new(self.bounds.x, self.bounds.y));
        let cross = self.axis.cross_extent(self.bounds);
        let mut offset = origin;

        self.children
            .iter()
            .enumerate()
            .map(|(index, child)| {
                let (extent, is_handle) = match child {
                    Child::Panel(panel) => (panel.size() / 100.0 * space, false),
                    Child::Handle(_) => (self.handle_thickness, true),
                };
                let rect = match self.axis {
                    Axis::Horizontal => Rect::new(offset, self.bounds.y, extent, cross),
                    Axis::Vertical => Rect::new(self.bounds.x, offset, cross, extent),
                };
                offset += extent;
                ChildRect {
                    index,
                    rect,
                    is_handle,
                }
            })
            .collect()
    }

    /// Child index of the handle under `point`, if any
    pub fn handle_at(&self, point: Point) -> Option<usize> {
        self.layout()
            .into_iter()
            .filter(|c| c.is_handle)
            .find(|c| {
                c.rect
                    .expand_to(self.axis, MIN_HANDLE_HIT_EXTENT)
                    .contains(point)
            })
            .map(|c| c.index)
    }

    // ===== Drag lifecycle =====

    /// Idle -> Dragging for the handle at child `index`.
    ///
    /// Snapshots the two neighbors from their pixel extents. Returns false
    /// (and changes nothing) when the index is not a handle, the handle is
    /// not flanked by two panels, or another drag is already running.
    pub fn begin_drag(&mut self, index: usize, origin: Point, source: InputSource) -> bool {
        if let Some(active) = self.active {
            tracing::debug!(target: "resize", active, requested = index, "drag already active");
            return false;
        }
        let Some(handle) = self.handle(index) else {
            tracing::debug!(target: "resize", index, "begin_drag on a non-handle child");
            return false;
        };
        let Some((prev, next)) = handle.neighbors() else {
            tracing::debug!(target: "resize", index, "begin_drag aborted: missing neighbor panel");
            return false;
        };
        let (Some(prev_panel), Some(next_panel)) = (self.panel(prev), self.panel(next)) else {
            return false;
        };

        let pair_total = prev_panel.size() + next_panel.size();
        if prev_panel.min_size() + next_panel.min_size() > pair_total {
            tracing::warn!(
                target: "resize",
                prev_min = prev_panel.min_size(),
                next_min = next_panel.min_size(),
                pair_total,
                "neighbor minimums exceed their combined size; next min will not hold"
            );
        }

        let snapshot = self.snapshot_pair(prev, next, pair_total);
        let gesture = DragGesture {
            origin,
            snapshot,
            source,
        };
        if let Some(handle) = self.children[index].as_handle_mut() {
            handle.begin(gesture);
        }
        self.active = Some(index);

        tracing::debug!(
            target: "resize",
            handle = index,
            ?source,
            prev = snapshot.prev,
            next = snapshot.next,
            "drag started"
        );
        true
    }

    /// Convert the neighbors' pixel extents into percentages of their
    /// combined extent, scaled to the pair's share of the group.
    fn snapshot_pair(&self, prev: usize, next: usize, pair_total: f64) -> NeighborSnapshot {
        let prev_px = self.panel_extent(prev).unwrap_or(0.0);
        let next_px = self.panel_extent(next).unwrap_or(0.0);
        let pair_px = prev_px + next_px;

        if pair_px > 0.0 {
            NeighborSnapshot {
                prev: prev_px / pair_px * pair_total,
                next: next_px / pair_px * pair_total,
            }
        } else {
            // Not laid out yet; fall back to the stored percentages
            NeighborSnapshot {
                prev: self.panel(prev).map_or(0.0, Panel::size),
                next: self.panel(next).map_or(0.0, Panel::size),
            }
        }
    }

    /// Dragging -> Dragging: move the active handle to `point`.
    ///
    /// Returns the new `[prev, next]` sizes, or None when nothing moved
    /// (no drag, event from another input source, handle or neighbors gone,
    /// zero-sized container).
    pub fn drag_to(&mut self, point: Point, source: InputSource) -> Option<[f64; 2]> {
        let index = self.active?;
        let Some(handle) = self.handle(index) else {
            tracing::debug!(target: "resize", index, "active handle vanished; move ignored");
            return None;
        };
        let gesture = handle.gesture()?;
        if gesture.source != source {
            return None;
        }
        let (prev, next) = handle.neighbors()?;
        let (prev_bounds, next_bounds) = self.neighbor_bounds(index)?;

        let extent = self.axis.extent(self.bounds);
        if extent <= 0.0 {
            return None;
        }

        let movement_px = self.axis.main(point) - self.axis.main(gesture.origin);
        let movement = movement_px / extent * 100.0;
        let sizes = redistribute(gesture.snapshot, movement, prev_bounds, next_bounds);

        self.write_pair(prev, next, sizes);
        self.pending = Some(PendingWrite { prev, next, sizes });
        if let Some(handle) = self.children[index].as_handle_mut() {
            handle.notify(sizes);
        }

        tracing::trace!(target: "resize", movement, prev = sizes[0], next = sizes[1], "drag moved");
        Some(sizes)
    }

    fn write_pair(&mut self, prev: usize, next: usize, sizes: [f64; 2]) {
        if let Some(panel) = self.children.get_mut(prev).and_then(Child::as_panel_mut) {
            panel.set_size(sizes[0]);
        }
        if let Some(panel) = self.children.get_mut(next).and_then(Child::as_panel_mut) {
            panel.set_size(sizes[1]);
        }
    }

    /// Re-apply the last drag write on the animation frame tick.
    ///
    /// Idempotent: the pending write is consumed, and applying it twice
    /// yields the same sizes. Returns whether anything was pending.
    pub fn flush_frame(&mut self) -> bool {
        let Some(write) = self.pending.take() else {
            return false;
        };
        let still_panels = self.panel(write.prev).is_some() && self.panel(write.next).is_some();
        if still_panels {
            self.write_pair(write.prev, write.next, write.sizes);
        }
        true
    }

    /// Dragging -> Idle for a release from `source`.
    ///
    /// A release from a different input source than the one that started the
    /// drag is ignored. Returns whether a drag was ended; calling it again
    /// is a no-op.
    pub fn end_drag(&mut self, source: InputSource) -> bool {
        let Some(index) = self.active else {
            return false;
        };
        let owner = self.handle(index).and_then(Handle::gesture).map(|g| g.source);
        if owner.is_some_and(|owner| owner != source) {
            return false;
        }
        self.finish_drag()
    }

    /// Dragging -> Idle regardless of input source (focus loss, unmount)
    pub fn cancel_drag(&mut self) -> bool {
        self.finish_drag()
    }

    fn finish_drag(&mut self) -> bool {
        let Some(index) = self.active.take() else {
            return false;
        };
        if let Some(handle) = self.children.get_mut(index).and_then(Child::as_handle_mut) {
            handle.release();
        }
        // Sizes already written stay; only the deferred duplicate goes away
        // once it has been applied.
        self.flush_frame();

        let sizes = self.sizes();
        tracing::debug!(target: "resize", handle = index, ?sizes, "drag ended");
        if let Some(observer) = self.on_layout.as_mut() {
            observer(&sizes);
        }
        true
    }

    /// Bounds of the panels flanking the handle at `index`
    pub fn neighbor_bounds(&self, index: usize) -> Option<(SizeBounds, SizeBounds)> {
        let (prev, next) = self.handle(index)?.neighbors()?;
        Some((self.panel(prev)?.bounds(), self.panel(next)?.bounds()))
    }
}
