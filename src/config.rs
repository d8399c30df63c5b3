//! Application configuration
//!
//! Stores user preferences in `~/.config/devbyte/config.yaml`. Every field has
//! a default, so a partial (or missing) file is always usable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::resizable::{Axis, Panel, PanelSpec, DEFAULT_HANDLE_THICKNESS};

/// Chat panel while the split is open (percent)
pub const DEFAULT_CHAT_PANEL: PanelSpec = PanelSpec::new(30.0, 30.0, 90.0);
/// Code / preview panel (percent)
pub const DEFAULT_PREVIEW_PANEL: PanelSpec = PanelSpec::new(70.0, 30.0, 90.0);

/// Configuration loaded at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Delay before the simulated assistant reply arrives
    pub response_delay_ms: u64,
    /// Axis of the chat / code split
    pub split_axis: Axis,
    /// Chat panel while the code / preview split is open
    #[serde(deserialize_with = "deserialize_chat_panel")]
    pub chat_panel: PanelSpec,
    /// Code / preview panel
    #[serde(deserialize_with = "deserialize_preview_panel")]
    pub preview_panel: PanelSpec,
    /// Handle thickness in logical pixels
    pub handle_thickness: f64,
    /// Chat list sidebar width in logical pixels
    pub sidebar_width: f64,
    /// Handle highlight color while dragging ("#RRGGBB")
    pub accent: String,
    /// TrueType font for text; a monospace system font is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: 1000,
            split_axis: Axis::Horizontal,
            chat_panel: DEFAULT_CHAT_PANEL,
            preview_panel: DEFAULT_PREVIEW_PANEL,
            handle_thickness: DEFAULT_HANDLE_THICKNESS,
            sidebar_width: 256.0,
            accent: "#3B82F6".to_string(),
            font_path: None,
            window_width: 1280,
            window_height: 800,
        }
    }
}

impl AppConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<AppConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| anyhow::anyhow!("No config directory available"))?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| anyhow::anyhow!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)
            .map_err(|e| anyhow::anyhow!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Chat and preview specs whose defaults sum to 100.
    ///
    /// The chat default is kept when the preview panel can take the rest,
    /// otherwise it moves to the nearest size that lets it. Minimums past
    /// 100 (or maximums short of it) give way on the preview side.
    pub fn split_panels(&self) -> (PanelSpec, PanelSpec) {
        let chat_panel = Panel::new(self.chat_panel);
        let chat = chat_panel.bounds();
        let mut preview = Panel::new(self.preview_panel).bounds();
        preview.min = preview.min.min(100.0 - chat.min);
        preview.max = preview.max.max(100.0 - chat.max);

        let lo = chat.min.max(100.0 - preview.max);
        let hi = chat.max.min(100.0 - preview.min);
        let chat_size = chat_panel.size().max(lo).min(hi);

        (
            PanelSpec::new(chat_size, chat.min, chat.max),
            PanelSpec::new(100.0 - chat_size, preview.min, preview.max),
        )
    }

    /// Replace values that would make the layout unusable
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.handle_thickness.is_finite() || self.handle_thickness < 0.0 {
            tracing::warn!(value = self.handle_thickness, "invalid handle_thickness, using default");
            self.handle_thickness = defaults.handle_thickness;
        }
        if !self.sidebar_width.is_finite() || self.sidebar_width < 0.0 {
            tracing::warn!(value = self.sidebar_width, "invalid sidebar_width, using default");
            self.sidebar_width = defaults.sidebar_width;
        }
        let (chat, preview) = self.split_panels();
        if chat != self.chat_panel || preview != self.preview_panel {
            tracing::warn!(
                ?chat,
                ?preview,
                "panel sizes cannot fill the split as configured, adjusted"
            );
            self.chat_panel = chat;
            self.preview_panel = preview;
        }
        self.window_width = self.window_width.max(1);
        self.window_height = self.window_height.max(1);
        self
    }
}

/// Panel settings as written in the file; missing fields keep the
/// panel's own defaults rather than the generic ones.
#[derive(Debug, Default, Deserialize)]
struct PanelOverrides {
    default_size: Option<f64>,
    min_size: Option<f64>,
    max_size: Option<f64>,
}

impl PanelOverrides {
    fn over(self, base: PanelSpec) -> PanelSpec {
        PanelSpec::new(
            self.default_size.unwrap_or(base.default_size),
            self.min_size.unwrap_or(base.min_size),
            self.max_size.unwrap_or(base.max_size),
        )
    }
}

fn deserialize_chat_panel<'de, D: Deserializer<'de>>(d: D) -> Result<PanelSpec, D::Error> {
    PanelOverrides::deserialize(d).map(|o| o.over(DEFAULT_CHAT_PANEL))
}

fn deserialize_preview_panel<'de, D: Deserializer<'de>>(d: D) -> Result<PanelSpec, D::Error> {
    PanelOverrides::deserialize(d).map(|o| o.over(DEFAULT_PREVIEW_PANEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: AppConfig = serde_yaml::from_str("response_delay_ms: 250").unwrap();
        assert_eq!(config.response_delay_ms, 250);
        assert_eq!(config.chat_panel, AppConfig::default().chat_panel);
        assert_eq!(config.split_axis, Axis::Horizontal);
    }

    #[test]
    fn test_axis_parses_lowercase() {
        let config: AppConfig = serde_yaml::from_str("split_axis: vertical").unwrap();
        assert_eq!(config.split_axis, Axis::Vertical);
    }

    #[test]
    fn test_sanitized_replaces_negative_sizes() {
        let config = AppConfig {
            handle_thickness: -3.0,
            sidebar_width: f64::NAN,
            window_width: 0,
            ..AppConfig::default()
        }
        .sanitized();
        assert_eq!(config.handle_thickness, DEFAULT_HANDLE_THICKNESS);
        assert_eq!(config.sidebar_width, 256.0);
        assert_eq!(config.window_width, 1);
    }

    #[test]
    fn test_partial_panel_keeps_its_own_bounds() {
        let config: AppConfig =
            serde_yaml::from_str("chat_panel:\n  default_size: 50\npreview_panel:\n  max_size: 80\n")
                .unwrap();
        assert_eq!(config.chat_panel, PanelSpec::new(50.0, 30.0, 90.0));
        assert_eq!(config.preview_panel, PanelSpec::new(70.0, 30.0, 80.0));
    }

    #[test]
    fn test_split_panels_fill_the_split() {
        let config = AppConfig {
            chat_panel: PanelSpec::new(50.0, 30.0, 90.0),
            ..AppConfig::default()
        };
        let (chat, preview) = config.split_panels();
        assert_eq!(chat.default_size, 50.0);
        assert_eq!(preview.default_size, 50.0);
    }

    #[test]
    fn test_split_panels_move_chat_into_reach() {
        // Preview can be at most 60, so chat needs at least 40
        let config = AppConfig {
            chat_panel: PanelSpec::new(20.0, 10.0, 90.0),
            preview_panel: PanelSpec::new(80.0, 30.0, 60.0),
            ..AppConfig::default()
        };
        let (chat, preview) = config.split_panels();
        assert_eq!(chat.default_size, 40.0);
        assert_eq!(preview.default_size, 60.0);
    }

    #[test]
    fn test_split_panels_relax_preview_minimum() {
        let config = AppConfig {
            chat_panel: PanelSpec::new(60.0, 60.0, 90.0),
            preview_panel: PanelSpec::new(60.0, 60.0, 90.0),
            ..AppConfig::default()
        };
        let (chat, preview) = config.split_panels();
        assert_eq!(chat, PanelSpec::new(60.0, 60.0, 90.0));
        assert_eq!(preview, PanelSpec::new(40.0, 40.0, 90.0));
    }

    #[test]
    fn test_sanitized_fixes_unpartitioned_defaults() {
        let config = AppConfig {
            chat_panel: PanelSpec::new(50.0, 30.0, 90.0),
            ..AppConfig::default()
        }
        .sanitized();
        assert_eq!(config.chat_panel.default_size + config.preview_panel.default_size, 100.0);
    }
}
