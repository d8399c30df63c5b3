//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::model::chat::ChatId;
use crate::resizable::Axis;

/// Global cursor override held for the duration of a drag
///
/// While set, hover cursor updates are suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorOverride {
    ColResize,
    RowResize,
}

impl CursorOverride {
    pub fn for_axis(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => CursorOverride::ColResize,
            Axis::Vertical => CursorOverride::RowResize,
        }
    }
}

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw of the UI
    Redraw,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Apply a global cursor override (drag started)
    SetCursor(CursorOverride),
    /// Release the global cursor override (drag ended)
    ResetCursor,
    /// Ask for an animation frame; the runtime answers with
    /// `LayoutMsg::AnimationFrame` before the next paint
    RequestFrame,
    /// After `delay_ms`, send `ChatMsg::ResponseReady { chat }`
    ScheduleResponse { chat: ChatId, delay_ms: u64 },
    /// Put text on the system clipboard
    CopyToClipboard(String),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Combine commands, dropping `None`s and flattening single entries
    pub fn batch(cmds: impl IntoIterator<Item = Cmd>) -> Cmd {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // Cursor changes are applied to the window directly
            Cmd::SetCursor(_) | Cmd::ResetCursor => false,
            // The frame callback itself redraws
            Cmd::RequestFrame => true,
            // The reply message triggers its own redraw when it lands
            Cmd::ScheduleResponse { .. } => false,
            Cmd::CopyToClipboard(_) => false,
            Cmd::Quit => false,
        }
    }

    /// Iterate over this command and, for batches, every nested command
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            Cmd::None => Vec::new(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_drops_none_and_unwraps_single() {
        assert_eq!(Cmd::batch([Cmd::None, Cmd::None]), Cmd::None);
        assert_eq!(Cmd::batch([Cmd::None, Cmd::Redraw]), Cmd::Redraw);
        assert_eq!(
            Cmd::batch([Cmd::Redraw, Cmd::ResetCursor]),
            Cmd::Batch(vec![Cmd::Redraw, Cmd::ResetCursor])
        );
    }

    #[test]
    fn test_needs_redraw_looks_into_batches() {
        assert!(!Cmd::ResetCursor.needs_redraw());
        assert!(Cmd::Batch(vec![Cmd::ResetCursor, Cmd::Redraw]).needs_redraw());
    }

    #[test]
    fn test_flatten_nested() {
        let cmd = Cmd::Batch(vec![
            Cmd::Redraw,
            Cmd::Batch(vec![Cmd::RequestFrame, Cmd::None]),
        ]);
        assert_eq!(cmd.flatten(), vec![Cmd::Redraw, Cmd::RequestFrame]);
    }

    #[test]
    fn test_cursor_for_axis() {
        assert_eq!(CursorOverride::for_axis(Axis::Horizontal), CursorOverride::ColResize);
        assert_eq!(CursorOverride::for_axis(Axis::Vertical), CursorOverride::RowResize);
    }
}
