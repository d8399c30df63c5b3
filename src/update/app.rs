//! App message handlers (window events, clipboard, quit)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.window_size = (width, height);
            model.recalculate_layout();
            Some(Cmd::Redraw)
        }

        AppMsg::ScaleFactorChanged(scale) => {
            if !scale.is_finite() || scale <= 0.0 {
                tracing::warn!(scale, "ignoring invalid scale factor");
                return None;
            }
            model.scale_factor = scale;
            model.recalculate_layout();
            Some(Cmd::Redraw)
        }

        AppMsg::CopyActiveCode => match model.artifact_code() {
            Some(code) => Some(Cmd::CopyToClipboard(code.to_string())),
            None => {
                tracing::debug!("nothing to copy");
                None
            }
        },

        AppMsg::Quit => Some(Cmd::Quit),
    }
}
