use chart_dragdata::core::{ElementId, Rect};
use chart_dragdata::host::MemoryChart;
use chart_dragdata::marker::{Marker, MarkerMount};

const SOURCE: ElementId = ElementId::new(21);

fn build_surface() -> MemoryChart {
    MemoryChart::new(Rect::new(0.0, 0.0, 640.0, 480.0))
}

fn source_origin() -> Rect {
    Rect::new(200.0, 300.0, 12.0, 12.0)
}

#[test]
fn created_marker_exactly_overlaps_the_source() {
    let mut surface = build_surface();

    let marker = Marker::create(&mut surface, SOURCE, source_origin(), MarkerMount::Inline);

    assert!(marker.is_active());
    assert_eq!(marker.position(), (200.0, 300.0));
    assert_eq!(surface.live_markers(), 1);

    let (_, record) = surface.last_marker().expect("marker recorded");
    assert_eq!(record.source, SOURCE);
    assert_eq!(record.mount, MarkerMount::Inline);
    assert_eq!((record.offset_x, record.offset_y), (0.0, 0.0));
}

#[test]
fn positioning_is_relative_to_the_source_origin() {
    let mut surface = build_surface();
    let mut marker = Marker::create(&mut surface, SOURCE, source_origin(), MarkerMount::Inline);

    marker.set_position(&mut surface, 210.0, 310.0);
    let (_, record) = surface.last_marker().expect("marker recorded");
    assert_eq!((record.offset_x, record.offset_y), (10.0, 10.0));

    // A second move is still measured from the origin, never from the clone.
    marker.set_position(&mut surface, 195.0, 290.0);
    let (_, record) = surface.last_marker().expect("marker recorded");
    assert_eq!((record.offset_x, record.offset_y), (-5.0, -10.0));
    assert_eq!(marker.position(), (195.0, 290.0));
}

#[test]
fn destroy_is_idempotent_and_leaves_no_residue() {
    let mut surface = build_surface();
    let mut marker = Marker::create(&mut surface, SOURCE, source_origin(), MarkerMount::Inline);

    marker.destroy(&mut surface);
    marker.destroy(&mut surface);

    assert!(!marker.is_active());
    assert_eq!(surface.live_markers(), 0);
    assert_eq!(surface.removed_markers(), 1);
}

#[test]
fn positioning_a_destroyed_marker_touches_no_surface() {
    let mut surface = build_surface();
    let mut marker = Marker::create(&mut surface, SOURCE, source_origin(), MarkerMount::Inline);
    marker.destroy(&mut surface);

    marker.set_position(&mut surface, 400.0, 100.0);

    assert_eq!(marker.position(), (400.0, 100.0));
    assert_eq!(surface.live_markers(), 0);
}

#[test]
fn document_body_mount_is_forwarded_to_the_surface() {
    let mut surface = build_surface();
    let _marker = Marker::create(
        &mut surface,
        SOURCE,
        source_origin(),
        MarkerMount::DocumentBody,
    );

    let (_, record) = surface.last_marker().expect("marker recorded");
    assert_eq!(record.mount, MarkerMount::DocumentBody);
}
