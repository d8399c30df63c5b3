//! Layout message handlers (split-pane drag input)

use crate::commands::{Cmd, CursorOverride};
use crate::messages::LayoutMsg;
use crate::model::AppModel;
use crate::resizable::InputSource;

/// Handle pointer and touch input for the main split
pub fn update_layout(model: &mut AppModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::PointerDown { pos, source } => {
            if source == InputSource::Mouse {
                model.ui.mouse_position = Some(pos);
            }
            let index = model.layout.handle_at(pos)?;
            if !model.layout.begin_drag(index, pos, source) {
                return None;
            }
            model.ui.hovered_handle = None;
            let cursor = CursorOverride::for_axis(model.layout.axis());
            Some(Cmd::batch([Cmd::SetCursor(cursor), Cmd::Redraw]))
        }

        LayoutMsg::PointerMove { pos, source } => {
            if source == InputSource::Mouse {
                model.ui.mouse_position = Some(pos);
            }
            if model.layout.is_dragging() {
                // Sizes are written now and again on the next frame
                return model.layout.drag_to(pos, source).map(|_| Cmd::RequestFrame);
            }
            // Hover feedback only follows the mouse
            if source != InputSource::Mouse {
                return None;
            }
            let hovered = model.layout.handle_at(pos);
            if hovered == model.ui.hovered_handle {
                return None;
            }
            model.ui.hovered_handle = hovered;
            Some(Cmd::Redraw)
        }

        LayoutMsg::PointerUp { source } => {
            if !model.layout.end_drag(source) {
                return None;
            }
            // The released handle may still sit under the mouse
            if source == InputSource::Mouse {
                model.ui.hovered_handle = model
                    .ui
                    .mouse_position
                    .and_then(|pos| model.layout.handle_at(pos));
            }
            Some(Cmd::batch([Cmd::ResetCursor, Cmd::Redraw]))
        }

        LayoutMsg::CancelDrag => {
            model.ui.hovered_handle = None;
            if model.layout.cancel_drag() {
                Some(Cmd::batch([Cmd::ResetCursor, Cmd::Redraw]))
            } else {
                None
            }
        }

        LayoutMsg::AnimationFrame => model.layout.flush_frame().then_some(Cmd::Redraw),
    }
}
