//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use devbyte::commands::Cmd;
use devbyte::config::AppConfig;
use devbyte::messages::{ChatMsg, LayoutMsg, Msg, UiMsg};
use devbyte::model::AppModel;
use devbyte::resizable::{Axis, Handle, InputSource, Panel, PanelGroup, PanelSpec, Point, Rect};
use devbyte::update::update;

/// Tolerance for float comparisons on panel sizes
pub const EPS: f64 = 1e-6;

/// Two panels split by a zero-thickness handle inside `[0, extent)`.
///
/// The handle sits at child index 1.
pub fn split_group(axis: Axis, sizes: [f64; 2], min: f64, max: f64, extent: f64) -> PanelGroup {
    let bounds = match axis {
        Axis::Horizontal => Rect::new(0.0, 0.0, extent, 400.0),
        Axis::Vertical => Rect::new(0.0, 0.0, 400.0, extent),
    };
    PanelGroup::new(axis)
        .with(Panel::new(PanelSpec::new(sizes[0], min, max)))
        .with(Handle::new())
        .with(Panel::new(PanelSpec::new(sizes[1], min, max)))
        .with_handle_thickness(0.0)
        .with_bounds(bounds)
}

/// Point on the main axis of `axis` at `main`, with `cross` on the other
pub fn along(axis: Axis, main: f64, cross: f64) -> Point {
    match axis {
        Axis::Horizontal => Point::new(main, cross),
        Axis::Vertical => Point::new(cross, main),
    }
}

/// Assert that sizes match expected values within `EPS`
pub fn assert_sizes(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "sizes: {:?}", actual);
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < EPS, "expected {:?}, got {:?}", expected, actual);
    }
}

/// Model with default config in a 1256x800 window (1000px of content)
pub fn test_model() -> AppModel {
    AppModel::new(AppConfig::default(), 1256, 800)
}

/// Model with the split open and zero-thickness handles, sidebar closed
pub fn split_model() -> AppModel {
    let config = AppConfig {
        handle_thickness: 0.0,
        ..AppConfig::default()
    };
    let mut model = AppModel::new(config, 1000, 800);
    model.ui.sidebar_open = false;
    model.recalculate_layout();
    update(&mut model, Msg::Ui(UiMsg::OpenCode));
    model
}

pub fn pointer_down(model: &mut AppModel, x: f64, y: f64) -> Option<Cmd> {
    update(
        model,
        Msg::Layout(LayoutMsg::PointerDown {
            pos: Point::new(x, y),
            source: InputSource::Mouse,
        }),
    )
}

pub fn pointer_move(model: &mut AppModel, x: f64, y: f64) -> Option<Cmd> {
    update(
        model,
        Msg::Layout(LayoutMsg::PointerMove {
            pos: Point::new(x, y),
            source: InputSource::Mouse,
        }),
    )
}

pub fn pointer_up(model: &mut AppModel) -> Option<Cmd> {
    update(
        model,
        Msg::Layout(LayoutMsg::PointerUp {
            source: InputSource::Mouse,
        }),
    )
}

/// Type `text` into the prompt and submit it
pub fn submit(model: &mut AppModel, text: &str) -> Option<Cmd> {
    update(model, Msg::Chat(ChatMsg::InsertText(text.to_string())));
    update(model, Msg::Chat(ChatMsg::Submit))
}

/// Flattened command list, empty for `None`
pub fn flat(cmd: Option<Cmd>) -> Vec<Cmd> {
    cmd.map(Cmd::flatten).unwrap_or_default()
}
