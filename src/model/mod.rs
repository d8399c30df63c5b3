//! Application model - the complete state of the assistant window
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod chat;
pub mod ui;

pub use chat::{Chat, ChatId, ChatState, Message, Role, HERO_SECTION_SNIPPET, RESPONSE_TEXT};
pub use ui::{PreviewState, PreviewTab, UiState};

use crate::config::AppConfig;
use crate::resizable::{Handle, Panel, PanelGroup, PanelSpec, Rect};
use crate::theme::Theme;

/// Key of the chat panel in the main group
pub const CHAT_PANEL_KEY: &str = "chat";
/// Key of the code / preview panel in the main group
pub const ARTIFACT_PANEL_KEY: &str = "artifact";

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    pub chat: ChatState,
    pub preview: PreviewState,
    /// Main split: `[chat]` or `[chat, handle, artifact]`
    pub layout: PanelGroup,
    pub ui: UiState,
    pub theme: Theme,
    pub config: AppConfig,
    /// Window dimensions (physical pixels)
    pub window_size: (u32, u32),
    pub scale_factor: f64,
}

impl AppModel {
    /// Create a new application model with the given window size
    pub fn new(config: AppConfig, window_width: u32, window_height: u32) -> Self {
        let mut layout = PanelGroup::new(config.split_axis);
        layout.on_layout(|sizes| {
            tracing::debug!(target: "layout", ?sizes, "split settled");
        });

        let mut model = Self {
            chat: ChatState::new(),
            preview: PreviewState::default(),
            layout,
            ui: UiState::new(),
            theme: Theme::with_accent(&config.accent),
            config,
            window_size: (window_width, window_height),
            scale_factor: 1.0,
        };
        model.mount_layout();
        model
    }

    /// Sidebar width in physical pixels (zero when collapsed)
    pub fn sidebar_width_px(&self) -> f64 {
        if self.ui.sidebar_open {
            (self.config.sidebar_width * self.scale_factor).min(self.window_size.0 as f64)
        } else {
            0.0
        }
    }

    /// Area left for the main group after the sidebar
    pub fn content_bounds(&self) -> Rect {
        let sidebar = self.sidebar_width_px();
        let (width, height) = (self.window_size.0 as f64, self.window_size.1 as f64);
        Rect::new(sidebar, 0.0, (width - sidebar).max(0.0), height)
    }

    /// Push window size, scale and sidebar changes into the main group
    pub fn recalculate_layout(&mut self) {
        let bounds = self.content_bounds();
        self.layout.set_bounds(bounds);
        self.layout
            .set_handle_thickness(self.config.handle_thickness * self.scale_factor);
    }

    /// Rebuild the main group for the current preview visibility.
    ///
    /// Panels come back at their configured defaults. Returns whether a drag
    /// was running (and has now been ended).
    pub fn mount_layout(&mut self) -> bool {
        let was_dragging = self.layout.is_dragging();
        self.layout.clear();

        let (chat_spec, preview_spec) = self.config.split_panels();
        if self.preview.visible {
            self.layout.push(Panel::new(chat_spec).with_key(CHAT_PANEL_KEY));
            self.layout.push(Handle::new().with_observer(|sizes| {
                tracing::trace!(target: "layout", chat = sizes[0], artifact = sizes[1], "split resized");
            }));
            self.layout
                .push(Panel::new(preview_spec).with_key(ARTIFACT_PANEL_KEY));
        } else {
            let lone = PanelSpec {
                max_size: 100.0,
                ..chat_spec
            }
            .with_default_size(100.0);
            self.layout.push(Panel::new(lone).with_key(CHAT_PANEL_KEY));
        }

        self.layout
            .set_handle_thickness(self.config.handle_thickness * self.scale_factor);
        self.layout.set_bounds(self.content_bounds());

        tracing::debug!(
            target: "layout",
            preview = self.preview.visible,
            sizes = ?self.layout.sizes(),
            "split mounted"
        );
        was_dragging
    }

    /// Show or hide the code / preview panel, remounting only on change.
    /// Returns whether a drag was ended by the change.
    pub fn set_preview_visible(&mut self, visible: bool) -> bool {
        if self.preview.visible == visible {
            return false;
        }
        self.preview.visible = visible;
        self.mount_layout()
    }

    /// Code shown in the artifact panel: the latest reply's code, if any
    pub fn artifact_code(&self) -> Option<&str> {
        self.chat
            .active_code
            .as_deref()
            .or_else(|| self.chat.latest_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resizable::Axis;

    fn model() -> AppModel {
        AppModel::new(AppConfig::default(), 1256, 800)
    }

    #[test]
    fn test_starts_with_lone_chat_panel() {
        let model = model();
        assert_eq!(model.layout.sizes(), vec![100.0]);
        assert!(model.layout.is_partitioned());
        assert_eq!(model.layout.panel(0).unwrap().key(), Some(CHAT_PANEL_KEY));
    }

    #[test]
    fn test_content_bounds_exclude_sidebar() {
        let mut model = model();
        assert_eq!(model.content_bounds(), Rect::new(256.0, 0.0, 1000.0, 800.0));
        model.ui.sidebar_open = false;
        model.recalculate_layout();
        assert_eq!(model.layout.bounds(), Rect::new(0.0, 0.0, 1256.0, 800.0));
    }

    #[test]
    fn test_preview_mounts_split_with_defaults() {
        let mut model = model();
        assert!(!model.set_preview_visible(true));
        assert_eq!(model.layout.sizes(), vec![30.0, 70.0]);
        assert_eq!(model.layout.handle(1).unwrap().neighbors(), Some((0, 2)));
        assert_eq!(model.layout.handle_thickness(), 6.0);

        assert!(!model.set_preview_visible(false));
        assert_eq!(model.layout.sizes(), vec![100.0]);
    }

    #[test]
    fn test_unbalanced_config_still_fills_split() {
        let config = AppConfig {
            chat_panel: PanelSpec::new(50.0, 30.0, 90.0),
            ..AppConfig::default()
        };
        let mut model = AppModel::new(config, 1256, 800);
        model.set_preview_visible(true);
        assert_eq!(model.layout.sizes(), vec![50.0, 50.0]);
        assert!(model.layout.is_partitioned());

        let right = model.layout.layout().last().map(|c| c.rect.x + c.rect.width);
        assert_eq!(right, Some(1256.0));
    }

    #[test]
    fn test_vertical_config_stacks_split() {
        let config = AppConfig {
            split_axis: Axis::Vertical,
            ..AppConfig::default()
        };
        let model = AppModel::new(config, 800, 600);
        assert_eq!(model.layout.axis(), Axis::Vertical);
    }
}
