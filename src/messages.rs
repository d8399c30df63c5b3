//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::chat::ChatId;
use crate::resizable::{InputSource, Point};

/// Split-pane input (pointer and touch feed the same messages)
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    /// Press at a point; starts a drag when it lands on a handle
    PointerDown { pos: Point, source: InputSource },
    /// Pointer or touch moved
    PointerMove { pos: Point, source: InputSource },
    /// Release (mouse up, touch end, touch cancel)
    PointerUp { source: InputSource },
    /// End any drag regardless of source (focus lost, window hidden)
    CancelDrag,
    /// Animation frame tick; re-applies the last drag write
    AnimationFrame,
}

/// Chat messages (prompt input, simulated replies, chat list)
#[derive(Debug, Clone, PartialEq)]
pub enum ChatMsg {
    /// Append typed text to the prompt
    InsertText(String),
    /// Delete the last character of the prompt
    DeleteBackward,
    /// Submit the prompt
    Submit,
    /// The simulated reply timer for `chat` fired
    ResponseReady { chat: ChatId },
    /// Start a fresh chat
    NewChat,
    /// Switch to an existing chat
    SelectChat(ChatId),
}

/// UI chrome (sidebar, history, code / preview split)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMsg {
    ToggleSidebar,
    ToggleHistory,
    /// Show the split on the Code tab
    OpenCode,
    /// Show the split on the Preview tab and collapse the sidebar
    StartPreview,
    /// Go back from Preview to Code, keeping the split
    StopPreview,
    /// Flip between Code and Preview (opening the split if needed)
    TogglePreviewTab,
    /// Remove the split
    ClosePreview,
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Window resized (physical pixels)
    Resize(u32, u32),
    /// Display scale factor changed
    ScaleFactorChanged(f64),
    /// Copy the code of the latest reply to the clipboard
    CopyActiveCode,
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Layout(LayoutMsg),
    Chat(ChatMsg),
    Ui(UiMsg),
    App(AppMsg),
}
