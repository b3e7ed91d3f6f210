use super::*;
use crate::activity::model::{ActivityId, RatePeriod};

const RED: Rgb8 = Rgb8::new(255, 0, 0);
const GREEN: Rgb8 = Rgb8::new(0, 255, 0);

fn past(id: u32, hours_per_day: f64, color: Rgb8) -> Activity {
    Activity::new(ActivityId(id), "a", hours_per_day, RatePeriod::Day, color).on_sides(true, false)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn one_activity_fills_whole_cells_then_a_partial_one() {
    let input = AllocationInput::new(25.0, 55.0, 1.0);
    let activities = [past(1, 8.0, RED)];
    let lived = Baseline::default().lived;

    let cells = input.paint_side(Side::Past, &activities);
    assert_eq!(cells.len(), 25);
    for cell in &cells[..8] {
        assert_eq!(cell.solid_color(), Some(RED));
    }
    match &cells[8] {
        CellColorDescriptor::Gradient {
            default_color,
            segments,
        } => {
            assert_eq!(*default_color, lived);
            assert_eq!(segments.len(), 1);
            assert!(close(segments[0].start_percent, 0.0));
            assert!(close(segments[0].end_percent, 100.0 / 3.0));
        }
        other => panic!("expected gradient, got {other:?}"),
    }
    for cell in &cells[9..] {
        assert_eq!(cell.solid_color(), Some(lived));
    }
}

#[test]
fn second_activity_starts_where_the_first_stops() {
    // occupancies 3.0 and 2.5 on a 25 unit side
    let activities = [past(1, 24.0 * 3.0 / 25.0, RED), past(2, 24.0 * 2.5 / 25.0, GREEN)];
    let input = AllocationInput::new(25.0, 0.0, 1.0);
    let cells = input.paint_side(Side::Past, &activities);

    for cell in &cells[..3] {
        assert_eq!(cell.solid_color(), Some(RED));
    }
    assert_eq!(cells[3].solid_color(), Some(GREEN));
    assert_eq!(cells[4].segments().len(), 1);
    assert!(close(cells[4].segments()[0].end_percent, 50.0));
    assert_eq!(cells[5].solid_color(), Some(Baseline::default().lived));
}

#[test]
fn boundary_inside_a_cell_keeps_encounter_order() {
    let activities = [past(1, 24.0 * 1.5 / 10.0, RED), past(2, 24.0 * 1.0 / 10.0, GREEN)];
    let input = AllocationInput::new(10.0, 0.0, 1.0);
    let d = input.color_for_cell(1, Side::Past, &activities);
    let segs = d.segments();
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].color, RED);
    assert!(close(segs[0].end_percent, 50.0));
    assert_eq!(segs[1].color, GREEN);
    assert!(close(segs[1].start_percent, 50.0));
    assert!(close(segs[1].end_percent, 100.0));

    let d = input.color_for_cell(2, Side::Past, &activities);
    assert!(close(d.segments()[0].end_percent, 50.0));
}

#[test]
fn future_side_is_addressed_by_global_index() {
    let work = Activity::new(ActivityId(1), "w", 12.0, RatePeriod::Day, RED).on_sides(false, true);
    let input = AllocationInput::new(25.0, 55.0, 1.0);
    let span = input.span(Side::Future);
    assert_eq!((span.first_cell, span.cell_count), (25, 55));

    // 27.5 units of 55
    assert_eq!(
        input.color_for_cell(25, Side::Future, std::slice::from_ref(&work)).solid_color(),
        Some(RED)
    );
    assert_eq!(
        input
            .color_for_cell(25 + 27, Side::Future, std::slice::from_ref(&work))
            .segments()
            .len(),
        1
    );
    assert_eq!(
        input.color_for_cell(79, Side::Future, std::slice::from_ref(&work)).solid_color(),
        Some(Baseline::default().unlived)
    );
    // the past side ignores future-only activities
    assert_eq!(
        input.color_for_cell(0, Side::Past, &[work]).solid_color(),
        Some(Baseline::default().lived)
    );
}

#[test]
fn fractional_lived_count_starts_future_on_next_whole_cell() {
    let input = AllocationInput::new(25.4, 54.6, 1.0);
    assert_eq!(input.span(Side::Past).cell_count, 26);
    assert_eq!(input.span(Side::Future).first_cell, 26);
    assert_eq!(input.span(Side::Future).cell_count, 54);
    assert_eq!(input.side_of(25), Side::Past);
    assert_eq!(input.side_of(26), Side::Future);
}

#[test]
fn wrong_side_query_returns_true_side_baseline() {
    let activities = [past(1, 24.0, RED)];
    let input = AllocationInput::new(25.0, 55.0, 1.0);
    assert_eq!(
        input.color_for_cell(3, Side::Future, &activities).solid_color(),
        Some(Baseline::default().lived)
    );
    assert_eq!(
        input.color_for_cell(40, Side::Past, &activities).solid_color(),
        Some(Baseline::default().unlived)
    );
}

#[test]
fn overflow_past_the_line_is_discarded() {
    let activities = [past(1, 20.0, RED), past(2, 10.0, GREEN)];
    let input = AllocationInput::new(12.0, 0.0, 1.0);
    let cells = input.paint_side(Side::Past, &activities);
    assert_eq!(cells.len(), 12);
    assert_eq!(cells[9].solid_color(), Some(RED));
    assert_eq!(cells[11].solid_color(), Some(GREEN));

    let painted: f64 = cells
        .iter()
        .map(|c| match c.solid_color() {
            Some(_) => 1.0,
            None => c.segments().iter().map(|s| s.width_percent() / 100.0).sum(),
        })
        .sum();
    assert!(close(painted, 12.0));
}

#[test]
fn painted_fraction_equals_occupancy() {
    let activities = [past(1, 7.0, RED), past(2, 3.5, GREEN)];
    let input = AllocationInput::new(37.3, 10.0, 1.0);
    let cells = input.paint_side(Side::Past, &activities);

    let per_color = |color: Rgb8| -> f64 {
        cells
            .iter()
            .map(|c| match c {
                CellColorDescriptor::Solid { color: c } if *c == color => 1.0,
                CellColorDescriptor::Solid { .. } => 0.0,
                CellColorDescriptor::Gradient { segments, .. } => segments
                    .iter()
                    .filter(|s| s.color == color)
                    .map(|s| s.width_percent() / 100.0)
                    .sum(),
            })
            .sum()
    };
    assert!(close(per_color(RED), 37.3 * 7.0 / 24.0));
    assert!(close(per_color(GREEN), 37.3 * 3.5 / 24.0));
}

#[test]
fn single_cell_queries_match_the_painted_side_and_repeat() {
    let activities = [past(1, 5.0, RED), past(2, 9.0, GREEN)];
    let input = AllocationInput::new(30.7, 0.0, 1.0);
    let painted = input.paint_side(Side::Past, &activities);
    for (i, expected) in painted.iter().enumerate() {
        let first = input.color_for_cell(i, Side::Past, &activities);
        let second = input.color_for_cell(i, Side::Past, &activities);
        assert_eq!(&first, expected);
        assert_eq!(first, second);
    }
}

#[test]
fn free_function_uses_default_baseline_and_multiplier() {
    let activities = [past(1, 12.0, RED)];
    // 2.5 units at 2 cells per unit: 5 past cells, half of them painted
    let d = color_for_cell(2, Side::Past, 2.5, 0.0, &activities, 2.0);
    assert_eq!(d.segments().len(), 1);
    assert!(close(d.segments()[0].end_percent, 50.0));
    let d = color_for_cell(4, Side::Past, 2.5, 0.0, &activities, 2.0);
    assert_eq!(d.solid_color(), Some(Baseline::default().lived));
}

#[test]
fn nothing_applies_means_baseline_everywhere() {
    let input = AllocationInput::new(3.0, 2.0, 1.0);
    let cells = input.paint_side(Side::Future, &[]);
    assert_eq!(cells.len(), 2);
    assert!(cells.iter().all(|c| c.solid_color() == Some(Baseline::default().unlived)));
}

#[test]
fn painting_within_a_limit_stops_at_the_limit() {
    let activities = [past(1, 8.0, RED), past(2, 4.0, GREEN)];
    let input = AllocationInput::new(1000.0, 0.0, 1.0);

    let all = input.paint_side(Side::Past, &activities);
    let head = input.paint_side_within(Side::Past, &activities, 30);
    assert_eq!(all.len(), 1000);
    assert_eq!(head.len(), 30);
    assert_eq!(head[..], all[..30]);

    let input = AllocationInput::new(10.0, 50.0, 1.0);
    assert_eq!(input.paint_side_within(Side::Future, &activities, 20).len(), 10);
    assert!(input.paint_side_within(Side::Future, &activities, 5).is_empty());
    assert_eq!(input.paint_side_within(Side::Past, &activities, 5).len(), 5);
}
