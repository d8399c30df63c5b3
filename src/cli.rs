//! Command-line argument parsing
//!
//! Supports:
//! - Starting with the code / preview split open
//! - Stacking the split vertically
//! - Loading config from an explicit path

use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;
use crate::resizable::Axis;

/// A simulated coding assistant with a resizable code / preview split
#[derive(Parser, Debug)]
#[command(name = "devbyte", version, about = "A simulated coding assistant")]
pub struct CliArgs {
    /// Open the code / preview split on startup
    #[arg(short = 'p', long)]
    pub preview: bool,

    /// Stack chat and code vertically instead of side by side
    #[arg(long)]
    pub vertical: bool,

    /// Read configuration from this file instead of the config directory
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub config: AppConfig,
    pub open_preview: bool,
}

impl CliArgs {
    /// Load the config file and apply CLI overrides on top of it
    pub fn into_config(self) -> StartupConfig {
        let mut config = match &self.config {
            Some(path) => AppConfig::load_from(path),
            None => AppConfig::load(),
        };
        if self.vertical {
            config.split_axis = Axis::Vertical;
        }
        StartupConfig {
            config,
            open_preview: self.preview,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from(["devbyte", "--preview", "--vertical"]);
        assert!(args.preview);
        assert!(args.vertical);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_vertical_overrides_config_axis() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "split_axis: horizontal\nresponse_delay_ms: 5\n").unwrap();

        let args = CliArgs::parse_from([
            "devbyte",
            "--vertical",
            "--config",
            path.to_str().unwrap(),
        ]);
        let startup = args.into_config();
        assert_eq!(startup.config.split_axis, Axis::Vertical);
        assert_eq!(startup.config.response_delay_ms, 5);
        assert!(!startup.open_preview);
    }
}
