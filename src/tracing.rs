//! Debug tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=resize=trace,layout=debug` - scoped filtering
//! - `RUST_LOG=devbyte::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/devbyte/logs/devbyte.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::AppModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). The file layer always
/// logs at debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the split layout for diffing across updates
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub sizes: Vec<f64>,
    pub active_handle: Option<usize>,
    pub preview_visible: bool,
}

impl LayoutSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            sizes: model.layout.sizes(),
            active_handle: model.layout.active_handle(),
            preview_visible: model.preview.visible,
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.preview_visible != other.preview_visible {
            changes.push(format!(
                "preview: {} → {}",
                self.preview_visible, other.preview_visible
            ));
        }
        if self.active_handle != other.active_handle {
            changes.push(format!(
                "drag: {:?} → {:?}",
                self.active_handle, other.active_handle
            ));
        }
        if self.sizes.len() != other.sizes.len() {
            changes.push(format!(
                "panels: {} → {}",
                self.sizes.len(),
                other.sizes.len()
            ));
        } else {
            for (i, (before, after)) in self.sizes.iter().zip(&other.sizes).enumerate() {
                if (before - after).abs() > f64::EPSILON {
                    changes.push(format!("#{}: {:.2}% → {:.2}%", i, before, after));
                }
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(sizes: &[f64], active: Option<usize>) -> LayoutSnapshot {
        LayoutSnapshot {
            sizes: sizes.to_vec(),
            active_handle: active,
            preview_visible: sizes.len() > 1,
        }
    }

    #[test]
    fn test_diff_none_when_equal() {
        let a = snapshot(&[30.0, 70.0], None);
        assert_eq!(a.diff(&a.clone()), None);
    }

    #[test]
    fn test_diff_reports_size_changes() {
        let a = snapshot(&[30.0, 70.0], Some(1));
        let b = snapshot(&[40.0, 60.0], Some(1));
        let diff = a.diff(&b).unwrap();
        assert!(diff.contains("#0: 30.00% → 40.00%"));
        assert!(diff.contains("#1: 70.00% → 60.00%"));
    }

    #[test]
    fn test_diff_reports_mount_changes() {
        let a = snapshot(&[100.0], None);
        let b = snapshot(&[30.0, 70.0], None);
        let diff = a.diff(&b).unwrap();
        assert!(diff.contains("preview: false → true"));
        assert!(diff.contains("panels: 1 → 2"));
    }
}
