//! UI state - sidebar, history and the code / preview split

use serde::Serialize;

use crate::resizable::Point;

/// Which view the right-hand panel shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewTab {
    #[default]
    Code,
    Preview,
}

impl PreviewTab {
    pub fn toggled(self) -> Self {
        match self {
            PreviewTab::Code => PreviewTab::Preview,
            PreviewTab::Preview => PreviewTab::Code,
        }
    }
}

/// State of the code / preview split
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PreviewState {
    /// Whether the right-hand panel (and its handle) is mounted
    pub visible: bool,
    pub tab: PreviewTab,
}

/// Chrome around the split
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub sidebar_open: bool,
    pub history_open: bool,
    /// Pointer is over a handle (hover feedback while idle)
    pub hovered_handle: Option<usize>,
    /// Last mouse position seen by the split
    pub mouse_position: Option<Point>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    /// Sidebar starts open, history closed
    pub fn new() -> Self {
        Self {
            sidebar_open: true,
            history_open: false,
            hovered_handle: None,
            mouse_position: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_toggle() {
        assert_eq!(PreviewTab::Code.toggled(), PreviewTab::Preview);
        assert_eq!(PreviewTab::Preview.toggled(), PreviewTab::Code);
    }

    #[test]
    fn test_defaults() {
        let ui = UiState::default();
        assert!(ui.sidebar_open);
        assert!(!ui.history_open);
        assert_eq!(PreviewState::default().tab, PreviewTab::Code);
    }
}
