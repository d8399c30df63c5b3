//! Resizable split panes - drag-to-resize layout engine
//!
//! A `PanelGroup` lays out an ordered sequence of panels and handles along a
//! single axis. Each panel holds its size as a percentage of the group's
//! main-axis extent; each handle redistributes space between the two panels
//! directly before and after it.
//!
//! ## Architecture
//!
//! - `Axis`: Horizontal (sizes are widths, X deltas) or Vertical (heights, Y deltas)
//! - `Panel`: current/min/max size, built from a `PanelSpec`
//! - `Handle`: the Idle/Dragging state machine plus an optional resize observer
//! - `PanelGroup`: owns the children, resolves handle neighbors by index,
//!   converts pointer movement into percentages and routes input to the
//!   dragging handle
//!
//! ## Drag lifecycle
//!
//! ```text
//! begin_drag(handle, point, source)   Idle -> Dragging (snapshot neighbors)
//! drag_to(point, source)              Dragging -> Dragging (redistribute pair)
//! flush_frame()                       re-apply last write on the next frame
//! end_drag(source) / cancel_drag()    Dragging -> Idle
//! ```
//!
//! Sizes during a drag are always computed from the snapshot taken at drag
//! start plus the total pointer movement, never accumulated per event.

mod geometry;
mod group;
mod handle;
mod panel;

pub use geometry::{Axis, Point, Rect};
pub use group::{Child, ChildRect, LayoutObserver, PanelGroup, DEFAULT_HANDLE_THICKNESS};
pub use handle::{
    redistribute, DragGesture, DragState, Handle, InputSource, NeighborSnapshot, ResizeObserver,
};
pub use panel::{
    Panel, PanelSpec, SizeBounds, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, DEFAULT_SIZE,
};
