//! Chat message handlers (prompt input, simulated replies, chat list)

use crate::commands::Cmd;
use crate::messages::ChatMsg;
use crate::model::{AppModel, PreviewTab};

use super::ui::hide_split;

/// Handle chat messages
pub fn update_chat(model: &mut AppModel, msg: ChatMsg) -> Option<Cmd> {
    match msg {
        ChatMsg::InsertText(text) => {
            // Single-line prompt
            let text: String = text.chars().filter(|c| !c.is_control()).collect();
            if text.is_empty() {
                return None;
            }
            model.chat.input.push_str(&text);
            Some(Cmd::Redraw)
        }

        ChatMsg::DeleteBackward => model.chat.input.pop().map(|_| Cmd::Redraw),

        ChatMsg::Submit => {
            let chat = model.chat.submit()?;
            tracing::debug!(target: "message", chat, "prompt submitted");
            model.preview.tab = PreviewTab::Code;
            let remount = hide_split(model);
            Some(Cmd::batch([
                Cmd::ScheduleResponse {
                    chat,
                    delay_ms: model.config.response_delay_ms,
                },
                remount,
            ]))
        }

        ChatMsg::ResponseReady { chat } => {
            model.chat.receive_response(chat);
            Some(Cmd::Redraw)
        }

        ChatMsg::NewChat => {
            model.chat.new_chat();
            model.ui.history_open = false;
            model.preview.tab = PreviewTab::Code;
            Some(hide_split(model))
        }

        ChatMsg::SelectChat(id) => {
            if !model.chat.select_chat(id) {
                return None;
            }
            model.ui.history_open = false;
            model.preview.tab = PreviewTab::Code;
            Some(hide_split(model))
        }
    }
}
