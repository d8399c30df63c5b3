//! Debug state dump for development diagnostics
//!
//! Serializes a snapshot of the layout and chat state to JSON for easier
//! debugging. Triggered by F7 in debug builds.

use std::path::PathBuf;

use serde::Serialize;

use devbyte::model::{AppModel, Chat, PreviewState};
use devbyte::resizable::{Axis, Child, Rect};

#[derive(Serialize)]
pub struct StateDump {
    pub timestamp: String,
    pub window_size: (u32, u32),
    pub scale_factor: f64,
    pub sidebar_open: bool,
    pub history_open: bool,
    pub preview: PreviewState,
    pub layout: LayoutDump,
    pub chat: ChatDump,
}

#[derive(Serialize)]
pub struct LayoutDump {
    pub axis: Axis,
    pub bounds: Rect,
    pub handle_thickness: f64,
    pub active_handle: Option<usize>,
    pub pending_frame: bool,
    pub children: Vec<ChildDump>,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChildDump {
    Panel {
        key: Option<&'static str>,
        size: f64,
        min_size: f64,
        max_size: f64,
        rect: Rect,
    },
    Handle {
        neighbors: Option<(usize, usize)>,
        dragging: bool,
        rect: Rect,
    },
}

#[derive(Serialize)]
pub struct ChatDump {
    pub active: Option<u64>,
    pub input: String,
    pub is_generating: bool,
    pub has_active_code: bool,
    pub chats: Vec<Chat>,
}

impl StateDump {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            timestamp: chrono_timestamp(),
            window_size: model.window_size,
            scale_factor: model.scale_factor,
            sidebar_open: model.ui.sidebar_open,
            history_open: model.ui.history_open,
            preview: model.preview,
            layout: LayoutDump::from_model(model),
            chat: ChatDump {
                active: model.chat.active,
                input: model.chat.input.clone(),
                is_generating: model.chat.is_generating,
                has_active_code: model.chat.active_code.is_some(),
                chats: model.chat.chats.clone(),
            },
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    /// Write the dump next to the log files
    pub fn save_to_file(&self) -> anyhow::Result<PathBuf> {
        let dir = devbyte::config_paths::ensure_logs_dir().map_err(anyhow::Error::msg)?;
        let path = dir.join(format!("{}-state-dump.json", self.timestamp));
        std::fs::write(&path, self.to_json())?;
        Ok(path)
    }
}

impl LayoutDump {
    fn from_model(model: &AppModel) -> Self {
        let group = &model.layout;
        let rects = group.layout();
        let children = group
            .children()
            .iter()
            .zip(rects)
            .map(|(child, placed)| match child {
                Child::Panel(panel) => ChildDump::Panel {
                    key: panel.key(),
                    size: panel.size(),
                    min_size: panel.min_size(),
                    max_size: panel.max_size(),
                    rect: placed.rect,
                },
                Child::Handle(handle) => ChildDump::Handle {
                    neighbors: handle.neighbors(),
                    dragging: handle.is_dragging(),
                    rect: placed.rect,
                },
            })
            .collect();

        Self {
            axis: group.axis(),
            bounds: group.bounds(),
            handle_thickness: group.handle_thickness(),
            active_handle: group.active_handle(),
            pending_frame: group.has_pending_frame(),
            children,
        }
    }
}

fn chrono_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let secs = now.as_secs();

    let days_since_epoch = secs / 86400;
    let secs_today = secs % 86400;

    let (year, month, day) = days_to_ymd(days_since_epoch as i64);

    format!(
        "{:04}-{:02}-{:02}-{:02}{:02}{:02}",
        year,
        month,
        day,
        secs_today / 3600,
        (secs_today % 3600) / 60,
        secs_today % 60
    )
}

/// Civil date from days since the Unix epoch
fn days_to_ymd(days: i64) -> (i32, u32, u32) {
    let days = days + 719468;
    let era = if days >= 0 { days } else { days - 146096 } / 146097;
    let doe = (days - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if m <= 2 { y + 1 } else { y };
    (year as i32, m, d)
}
