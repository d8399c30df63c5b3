//! UI message handlers (sidebar, history, code / preview split)

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::{AppModel, PreviewTab};

/// Handle UI chrome messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::ToggleSidebar => {
            model.ui.sidebar_open = !model.ui.sidebar_open;
            model.recalculate_layout();
            Some(Cmd::Redraw)
        }

        UiMsg::ToggleHistory => {
            model.ui.history_open = !model.ui.history_open;
            Some(Cmd::Redraw)
        }

        UiMsg::OpenCode => Some(show_split(model, PreviewTab::Code, false)),

        UiMsg::StartPreview => Some(show_split(model, PreviewTab::Preview, true)),

        UiMsg::StopPreview => Some(show_split(model, PreviewTab::Code, true)),

        UiMsg::TogglePreviewTab => {
            if model.preview.visible && model.preview.tab == PreviewTab::Preview {
                Some(show_split(model, PreviewTab::Code, true))
            } else {
                Some(show_split(model, PreviewTab::Preview, true))
            }
        }

        UiMsg::ClosePreview => {
            model.preview.tab = PreviewTab::Code;
            Some(hide_split(model))
        }
    }
}

/// Mount the split (if needed) on `tab`, optionally collapsing the sidebar.
///
/// Switching tabs on a mounted split keeps the current sizes.
pub(super) fn show_split(model: &mut AppModel, tab: PreviewTab, close_sidebar: bool) -> Cmd {
    model.preview.tab = tab;
    if close_sidebar && model.ui.sidebar_open {
        model.ui.sidebar_open = false;
        model.recalculate_layout();
    }
    let drag_ended = model.set_preview_visible(true);
    redraw_after_remount(drag_ended)
}

/// Unmount the code / preview panel and its handle
pub(super) fn hide_split(model: &mut AppModel) -> Cmd {
    let drag_ended = model.set_preview_visible(false);
    redraw_after_remount(drag_ended)
}

fn redraw_after_remount(drag_ended: bool) -> Cmd {
    if drag_ended {
        Cmd::batch([Cmd::ResetCursor, Cmd::Redraw])
    } else {
        Cmd::Redraw
    }
}
