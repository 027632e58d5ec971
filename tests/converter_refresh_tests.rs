use std::sync::Arc;

use chart_dragdata::api::{DownOutcome, DropOutcome};
use chart_dragdata::core::{AxisRange, DataPoint, ElementId, Rect};
use chart_dragdata::events::{MouseButton, PointerInput};
use chart_dragdata::host::{DrawNotification, DrawnElement, MemoryChart};
use chart_dragdata::{DragBehavior, DragBinding, DragError};

const POINT: ElementId = ElementId::new(7);

fn build_binding() -> DragBinding<MemoryChart> {
    let mut chart = MemoryChart::new(Rect::new(0.0, 0.0, 1000.0, 500.0))
        .with_grid(Rect::new(0.0, 0.0, 1000.0, 500.0));
    chart.push_series(vec![DataPoint::new(20.0, 200.0)]);
    chart.place_element(POINT, Rect::new(200.0, 300.0, 10.0, 10.0));
    DragBinding::new(chart, DragBehavior::default()).expect("binding init")
}

fn notification(x_range: &Arc<AxisRange>, y_range: &Arc<AxisRange>) -> DrawNotification {
    DrawNotification {
        element: POINT,
        drawn: DrawnElement::Point {
            series_index: 0,
            point_index: 0,
        },
        x_range: Arc::clone(x_range),
        y_range: Arc::clone(y_range),
    }
}

fn mouse(x: f64, y: f64) -> PointerInput {
    PointerInput::mouse(x, y, MouseButton::Primary)
}

#[test]
fn the_first_notification_builds_the_converter() {
    let mut binding = build_binding();
    assert!(binding.converter().is_none());

    let x_range = Arc::new(AxisRange::new(0.0, 100.0, 1000.0));
    let y_range = Arc::new(AxisRange::new(0.0, 500.0, 500.0));
    binding
        .element_drawn(&notification(&x_range, &y_range))
        .expect("draw notification");

    let converter = binding.converter().expect("converter built");
    assert!((converter.convert_x(10.0) - 1.0).abs() <= 1e-12);
}

#[test]
fn repeated_notifications_with_the_same_ranges_are_cheap_and_stable() {
    let mut binding = build_binding();
    let x_range = Arc::new(AxisRange::new(0.0, 100.0, 1000.0));
    let y_range = Arc::new(AxisRange::new(0.0, 500.0, 500.0));

    binding
        .element_drawn(&notification(&x_range, &y_range))
        .expect("first element");
    let first = binding.converter().expect("converter");

    // One notification per drawn element of the same pass.
    for _ in 0..100 {
        binding
            .element_drawn(&notification(&x_range, &y_range))
            .expect("same-pass element");
    }
    assert_eq!(binding.converter().expect("converter"), first);
}

#[test]
fn invalid_ranges_surface_only_when_identities_change() {
    let mut binding = build_binding();
    let x_range = Arc::new(AxisRange::new(0.0, 100.0, 1000.0));
    let y_range = Arc::new(AxisRange::new(0.0, 500.0, 500.0));
    binding
        .element_drawn(&notification(&x_range, &y_range))
        .expect("valid pass");

    let broken = Arc::new(AxisRange::new(0.0, 0.0, 1000.0));
    let err = binding
        .element_drawn(&notification(&broken, &y_range))
        .expect_err("degenerate range must fail");
    assert!(matches!(err, DragError::InvalidAxisRange(_)));

    // The previous converter survives a failed refresh.
    let converter = binding.converter().expect("converter kept");
    assert!((converter.convert_x(10.0) - 1.0).abs() <= 1e-12);
}

#[test]
fn a_session_pins_its_converter_across_mid_drag_rerenders() {
    let mut binding = build_binding();
    let x_range = Arc::new(AxisRange::new(0.0, 100.0, 1000.0));
    let y_range = Arc::new(AxisRange::new(0.0, 500.0, 500.0));
    binding
        .element_drawn(&notification(&x_range, &y_range))
        .expect("initial pass");

    binding.pointer_down(POINT, &mouse(205.0, 305.0)).expect("down");
    binding.pointer_move(&mouse(245.0, 305.0)).expect("move");

    // Mid-drag re-render doubles both axis spans.
    let x_wide = Arc::new(AxisRange::new(0.0, 200.0, 1000.0));
    let y_wide = Arc::new(AxisRange::new(0.0, 1000.0, 500.0));
    binding
        .element_drawn(&notification(&x_wide, &y_wide))
        .expect("mid-drag pass");

    // +40 px still converts with the session's original 0.1 ratio.
    let outcome = binding.pointer_up(&mouse(245.0, 305.0)).expect("up");
    match outcome {
        DropOutcome::Committed { ref new, .. } => assert_eq!(new.x, 24.0),
        other => panic!("expected commit, got {other:?}"),
    }

    // The next session picks up the doubled ratio.
    binding.pointer_down(POINT, &mouse(205.0, 305.0)).expect("down");
    binding.pointer_move(&mouse(245.0, 305.0)).expect("move");
    let outcome = binding.pointer_up(&mouse(245.0, 305.0)).expect("up");
    match outcome {
        DropOutcome::Committed { ref old, ref new } => {
            assert_eq!(old.x, 24.0);
            assert_eq!(new.x, 32.0);
        }
        other => panic!("expected commit, got {other:?}"),
    }
}

#[test]
fn nothing_is_draggable_before_the_first_notification() {
    let mut binding = build_binding();

    let outcome = binding
        .pointer_down(POINT, &mouse(205.0, 305.0))
        .expect("down on untagged element");

    assert_eq!(outcome, DownOutcome::NotDraggable);
}
