//! Benchmarks for the split-pane drag path
//!
//! Run with: cargo bench resize

use devbyte::config::AppConfig;
use devbyte::messages::{LayoutMsg, Msg, UiMsg};
use devbyte::model::AppModel;
use devbyte::resizable::{
    redistribute, Axis, Handle, InputSource, NeighborSnapshot, Panel, PanelGroup, PanelSpec,
    Point, Rect, SizeBounds,
};
use devbyte::update::update;

fn main() {
    divan::main();
}

fn make_group(panels: usize) -> PanelGroup {
    let size = 100.0 / panels as f64;
    let mut group = PanelGroup::new(Axis::Horizontal)
        .with_bounds(Rect::new(0.0, 0.0, 1920.0, 1080.0))
        .with_handle_thickness(6.0);
    for i in 0..panels {
        if i > 0 {
            group.push(Handle::new());
        }
        group.push(Panel::new(PanelSpec::new(size, 1.0, 99.0)));
    }
    group
}

// ============================================================================
// Resize math
// ============================================================================

#[divan::bench]
fn redistribute_pair() {
    let snapshot = NeighborSnapshot {
        prev: 30.0,
        next: 70.0,
    };
    let bounds = SizeBounds::default();
    for step in -50..50 {
        divan::black_box(redistribute(
            divan::black_box(snapshot),
            step as f64,
            bounds,
            bounds,
        ));
    }
}

#[divan::bench(args = [2, 4, 8])]
fn drag_sweep(bencher: divan::Bencher, panels: usize) {
    bencher
        .with_inputs(|| {
            let mut group = make_group(panels);
            let handle = 1;
            let origin = group.layout()[handle].rect;
            group.begin_drag(handle, Point::new(origin.x, 10.0), InputSource::Mouse);
            (group, origin.x)
        })
        .bench_local_values(|(mut group, x)| {
            for dx in 0..200 {
                group.drag_to(Point::new(x + dx as f64, 10.0), InputSource::Mouse);
                group.flush_frame();
            }
            group.end_drag(InputSource::Mouse);
            group
        });
}

#[divan::bench(args = [2, 8, 32])]
fn layout_rects(bencher: divan::Bencher, panels: usize) {
    let group = make_group(panels);
    bencher.bench_local(|| divan::black_box(&group).layout());
}

// ============================================================================
// Full update loop
// ============================================================================

#[divan::bench]
fn drag_through_update(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| {
            let mut model = AppModel::new(AppConfig::default(), 1280, 800);
            update(&mut model, Msg::Ui(UiMsg::StartPreview));
            model
        })
        .bench_local_values(|mut model| {
            let start = model.layout.layout()[1].rect.x + 1.0;
            let source = InputSource::Mouse;
            update(
                &mut model,
                Msg::Layout(LayoutMsg::PointerDown {
                    pos: Point::new(start, 100.0),
                    source,
                }),
            );
            for dx in 0..100 {
                let pos = Point::new(start + dx as f64, 100.0);
                update(&mut model, Msg::Layout(LayoutMsg::PointerMove { pos, source }));
                update(&mut model, Msg::Layout(LayoutMsg::AnimationFrame));
            }
            update(&mut model, Msg::Layout(LayoutMsg::PointerUp { source }));
            model
        });
}
