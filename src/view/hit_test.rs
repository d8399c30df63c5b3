//! Hit-testing for clicks that are not handle drags
//!
//! Handle presses are claimed by the split engine first; whatever it does not
//! claim is resolved here against the same geometry the renderer draws.

use devbyte::model::{AppModel, ChatId, PreviewTab, ARTIFACT_PANEL_KEY};
use devbyte::resizable::{Point, Rect};

use super::{HEADER_HEIGHT, PADDING, ROW_HEIGHT, ROW_GAP, TAB_BAR_HEIGHT, TAB_WIDTH};

/// Clickable element under a point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    NewChat,
    Chat(ChatId),
    Tab(PreviewTab),
}

/// Rect of the "new chat" button in the sidebar
pub fn new_chat_button(model: &AppModel) -> Rect {
    let s = model.scale_factor;
    let pad = PADDING * s;
    Rect::new(
        pad,
        HEADER_HEIGHT * s,
        (model.sidebar_width_px() - 2.0 * pad).max(0.0),
        ROW_HEIGHT * s,
    )
}

/// Rect of the `index`th chat row in the sidebar
pub fn chat_row(model: &AppModel, index: usize) -> Rect {
    let s = model.scale_factor;
    let button = new_chat_button(model);
    let top = button.y + button.height + PADDING * s / 2.0;
    Rect::new(
        button.x,
        top + index as f64 * (ROW_HEIGHT + ROW_GAP) * s,
        button.width,
        ROW_HEIGHT * s,
    )
}

/// Rect of a tab in the code / preview panel's tab bar
pub fn tab_rect(panel: Rect, tab: PreviewTab, scale: f64) -> Rect {
    let i = match tab {
        PreviewTab::Code => 0.0,
        PreviewTab::Preview => 1.0,
    };
    Rect::new(
        panel.x + i * TAB_WIDTH * scale,
        panel.y,
        TAB_WIDTH * scale,
        TAB_BAR_HEIGHT * scale,
    )
}

/// Determine what (if anything) a click at `point` lands on
pub fn hit_test(model: &AppModel, point: Point) -> Option<HitTarget> {
    if point.x < model.sidebar_width_px() {
        if new_chat_button(model).contains(point) {
            return Some(HitTarget::NewChat);
        }
        return model
            .chat
            .chats
            .iter()
            .enumerate()
            .find(|(i, _)| chat_row(model, *i).contains(point))
            .map(|(_, chat)| HitTarget::Chat(chat.id));
    }

    if !model.preview.visible {
        return None;
    }
    let panel = model
        .layout
        .layout()
        .into_iter()
        .filter(|c| !c.is_handle)
        .find(|c| {
            model
                .layout
                .panel(c.index)
                .and_then(|p| p.key())
                == Some(ARTIFACT_PANEL_KEY)
        })?
        .rect;
    [PreviewTab::Code, PreviewTab::Preview]
        .into_iter()
        .find(|tab| tab_rect(panel, *tab, model.scale_factor).contains(point))
        .map(HitTarget::Tab)
}

#[cfg(test)]
mod tests {
    use super::*;
    use devbyte::config::AppConfig;

    fn model() -> AppModel {
        AppModel::new(AppConfig::default(), 1256, 800)
    }

    #[test]
    fn test_sidebar_targets() {
        let mut model = model();
        let first = model.chat.new_chat();
        let second = model.chat.new_chat();

        let button = new_chat_button(&model);
        let center = |r: Rect| Point::new(r.x + r.width / 2.0, r.y + r.height / 2.0);
        assert_eq!(hit_test(&model, center(button)), Some(HitTarget::NewChat));
        assert_eq!(
            hit_test(&model, center(chat_row(&model, 0))),
            Some(HitTarget::Chat(first))
        );
        assert_eq!(
            hit_test(&model, center(chat_row(&model, 1))),
            Some(HitTarget::Chat(second))
        );
    }

    #[test]
    fn test_tabs_only_when_split_is_open() {
        let mut model = model();
        let artifact_left = 256.0 + 0.3 * (1000.0 - 6.0) + 6.0;
        let on_preview_tab = Point::new(artifact_left + TAB_WIDTH + 10.0, 10.0);
        assert_eq!(hit_test(&model, on_preview_tab), None);

        model.set_preview_visible(true);
        assert_eq!(
            hit_test(&model, on_preview_tab),
            Some(HitTarget::Tab(PreviewTab::Preview))
        );
    }
}
