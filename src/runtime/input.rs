//! Keyboard input handling
//!
//! Maps key presses to messages:
//! - Enter submits the prompt, Backspace edits it, printable text is typed
//! - Ctrl+N new chat, Ctrl+B sidebar, Ctrl+H history, Ctrl+C copy code
//! - P flips code / preview while the prompt is empty, Escape closes the split

use winit::keyboard::{Key, NamedKey};

use devbyte::commands::Cmd;
use devbyte::messages::{AppMsg, ChatMsg, Msg, UiMsg};
use devbyte::model::AppModel;
use devbyte::update::update;

/// Map a key press to a message, if it means anything
pub fn key_to_msg(model: &AppModel, key: &Key, ctrl: bool) -> Option<Msg> {
    match key {
        Key::Named(NamedKey::Enter) => Some(Msg::Chat(ChatMsg::Submit)),
        Key::Named(NamedKey::Backspace) => Some(Msg::Chat(ChatMsg::DeleteBackward)),
        Key::Named(NamedKey::Escape) => Some(Msg::Ui(UiMsg::ClosePreview)),
        Key::Named(NamedKey::Space) if !ctrl => Some(Msg::Chat(ChatMsg::InsertText(" ".into()))),

        Key::Character(ch) if ctrl => match ch.to_lowercase().as_str() {
            "n" => Some(Msg::Chat(ChatMsg::NewChat)),
            "b" => Some(Msg::Ui(UiMsg::ToggleSidebar)),
            "h" => Some(Msg::Ui(UiMsg::ToggleHistory)),
            "c" => Some(Msg::App(AppMsg::CopyActiveCode)),
            "q" => Some(Msg::App(AppMsg::Quit)),
            _ => None,
        },

        // "p" is a shortcut only while nothing is being typed
        Key::Character(ch) if ch.eq_ignore_ascii_case("p") && model.chat.input.is_empty() => {
            Some(Msg::Ui(UiMsg::TogglePreviewTab))
        }

        Key::Character(ch) => Some(Msg::Chat(ChatMsg::InsertText(ch.to_string()))),

        _ => None,
    }
}

/// Handle a key press by dispatching its message
pub fn handle_key(model: &mut AppModel, key: &Key, ctrl: bool) -> Option<Cmd> {
    let msg = key_to_msg(model, key, ctrl)?;
    update(model, msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use devbyte::config::AppConfig;

    fn model() -> AppModel {
        AppModel::new(AppConfig::default(), 800, 600)
    }

    fn char_key(s: &str) -> Key {
        Key::Character(s.into())
    }

    #[test]
    fn test_ctrl_shortcuts() {
        let model = model();
        assert_eq!(
            key_to_msg(&model, &char_key("n"), true),
            Some(Msg::Chat(ChatMsg::NewChat))
        );
        assert_eq!(
            key_to_msg(&model, &char_key("B"), true),
            Some(Msg::Ui(UiMsg::ToggleSidebar))
        );
        assert_eq!(key_to_msg(&model, &char_key("z"), true), None);
    }

    #[test]
    fn test_p_toggles_only_with_empty_prompt() {
        let mut model = model();
        assert_eq!(
            key_to_msg(&model, &char_key("p"), false),
            Some(Msg::Ui(UiMsg::TogglePreviewTab))
        );
        model.chat.input.push_str("hel");
        assert_eq!(
            key_to_msg(&model, &char_key("p"), false),
            Some(Msg::Chat(ChatMsg::InsertText("p".into())))
        );
    }

    #[test]
    fn test_typing_then_enter_schedules_reply() {
        let mut model = model();
        handle_key(&mut model, &char_key("h"), false);
        handle_key(&mut model, &char_key("i"), false);
        assert_eq!(model.chat.input, "hi");

        let cmd = handle_key(&mut model, &Key::Named(NamedKey::Enter), false).unwrap();
        assert!(cmd
            .flatten()
            .iter()
            .any(|c| matches!(c, Cmd::ScheduleResponse { delay_ms: 1000, .. })));
    }
}
