use std::hint::black_box;
use std::sync::Arc;

use chart_dragdata::api::DragBinding;
use chart_dragdata::core::{AxisRange, DataPoint, DeltaConverter, ElementId, Rect};
use chart_dragdata::events::{MouseButton, PointerInput};
use chart_dragdata::host::{DrawNotification, DrawnElement, MemoryChart};
use chart_dragdata::DragBehavior;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_delta_conversion(c: &mut Criterion) {
    let x_range = AxisRange::new(0.0, 10_000.0, 1920.0);
    let y_range = AxisRange::new(-500.0, 2_500.0, 1080.0);
    let converter = DeltaConverter::from_ranges(&x_range, &y_range).expect("valid ranges");

    c.bench_function("delta_convert_pair", |b| {
        b.iter(|| {
            let dx = converter.convert_x(black_box(123.456));
            let dy = converter.convert_y(black_box(-78.9));
            (dx, dy)
        })
    });
}

fn bench_render_pass_tagging_1k(c: &mut Criterion) {
    let x_range = Arc::new(AxisRange::new(0.0, 1_000.0, 1920.0));
    let y_range = Arc::new(AxisRange::new(0.0, 100.0, 1080.0));

    c.bench_function("render_pass_tagging_1k", |b| {
        b.iter(|| {
            let chart = MemoryChart::new(Rect::new(0.0, 0.0, 1920.0, 1080.0));
            let mut binding =
                DragBinding::new(chart, DragBehavior::default()).expect("binding init");
            for index in 0..1_000u64 {
                binding
                    .element_drawn(&DrawNotification {
                        element: ElementId::new(index),
                        drawn: DrawnElement::Point {
                            series_index: 0,
                            point_index: index as usize,
                        },
                        x_range: Arc::clone(&x_range),
                        y_range: Arc::clone(&y_range),
                    })
                    .expect("draw notification");
            }
            binding
        })
    });
}

fn bench_pointer_move_tracking(c: &mut Criterion) {
    let point = ElementId::new(1);
    let mut chart = MemoryChart::new(Rect::new(0.0, 0.0, 1920.0, 1080.0));
    chart.push_series(vec![DataPoint::new(500.0, 50.0)]);
    chart.place_element(point, Rect::new(960.0, 540.0, 8.0, 8.0));

    let mut binding = DragBinding::new(chart, DragBehavior::default()).expect("binding init");
    let x_range = Arc::new(AxisRange::new(0.0, 1_000.0, 1920.0));
    let y_range = Arc::new(AxisRange::new(0.0, 100.0, 1080.0));
    binding
        .element_drawn(&DrawNotification {
            element: point,
            drawn: DrawnElement::Point {
                series_index: 0,
                point_index: 0,
            },
            x_range,
            y_range,
        })
        .expect("draw notification");
    binding
        .pointer_down(point, &PointerInput::mouse(964.0, 544.0, MouseButton::Primary))
        .expect("down");

    let mut step = 0.0f64;
    c.bench_function("pointer_move_tracking", |b| {
        b.iter(|| {
            step = (step + 1.0) % 200.0;
            binding
                .pointer_move(&PointerInput::mouse(
                    black_box(964.0 + step),
                    black_box(544.0 - step),
                ))
                .expect("move");
        })
    });
}

criterion_group!(
    benches,
    bench_delta_conversion,
    bench_render_pass_tagging_1k,
    bench_pointer_move_tracking
);
criterion_main!(benches);
