use super::*;
use smallvec::smallvec;

const BASE: Rgb8 = Rgb8::new(200, 200, 200);
const RED: Rgb8 = Rgb8::new(255, 0, 0);
const BLUE: Rgb8 = Rgb8::new(0, 0, 255);

fn seg(start: f64, end: f64, color: Rgb8) -> Segment {
    Segment {
        start_percent: start,
        end_percent: end,
        color,
    }
}

#[test]
fn empty_cell_is_default_color() {
    let d = CellColorDescriptor::from_segments(BASE, smallvec![]);
    assert_eq!(d.solid_color(), Some(BASE));
}

#[test]
fn full_single_segment_is_solid() {
    let d = CellColorDescriptor::from_segments(BASE, smallvec![seg(0.0, 100.0, RED)]);
    assert_eq!(d, CellColorDescriptor::solid(RED));
}

#[test]
fn partial_and_multiple_segments_are_gradients() {
    let d = CellColorDescriptor::from_segments(BASE, smallvec![seg(0.0, 40.0, RED)]);
    assert!(!d.is_solid());
    assert_eq!(d.segments().len(), 1);

    let d = CellColorDescriptor::from_segments(
        BASE,
        smallvec![seg(0.0, 50.0, RED), seg(50.0, 100.0, BLUE)],
    );
    assert_eq!(d.segments().len(), 2);
    assert_eq!(d.segments()[1].color, BLUE);
}

#[test]
fn linear_stops_use_hard_edges() {
    let d = CellColorDescriptor::from_segments(
        BASE,
        smallvec![seg(0.0, 25.0, RED), seg(25.0, 60.0, BLUE)],
    );
    let stops = d.linear_stops();
    assert_eq!(stops.len(), 10);
    assert_eq!(stops[0].offset_percent, 0.0);
    assert_eq!(stops[2].color, RED);
    assert_eq!(stops[7].offset_percent, 60.0);
    assert_eq!(stops[7].color, BLUE);
    assert_eq!(stops[8].color, BASE);
    assert_eq!(stops[9].offset_percent, 100.0);

    assert_eq!(CellColorDescriptor::solid(RED).linear_stops().len(), 2);
}

#[test]
fn serializes_with_kind_tag() {
    let v = serde_json::to_value(CellColorDescriptor::solid(RED)).unwrap();
    assert_eq!(v, serde_json::json!({"kind": "solid", "color": "#FF0000"}));
}
