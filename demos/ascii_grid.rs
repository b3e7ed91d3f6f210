use std::io::Cursor;

use lifegrid::{
    AnnotationTarget, CellColorDescriptor, GridCache, GridInputs, LifeGrid, Side, TimeGranularity,
};

fn glyph(side: Side, color: &CellColorDescriptor) -> char {
    match (side, color) {
        (_, CellColorDescriptor::Gradient { .. }) => '%',
        (Side::Past, c) if c.solid_color() == Some(lifegrid::Baseline::default().lived) => 'o',
        (Side::Future, c) if c.solid_color() == Some(lifegrid::Baseline::default().unlived) => '.',
        _ => '#',
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Pass a session JSON path to render your own inputs.
    let json = r##"
{
  "params": {
    "birth_date": "1992-04-08",
    "lifespan_years": 80,
    "granularity": "years",
    "reference_now": "2025-09-01T12:00:00"
  },
  "activities": [
    { "id": 1, "name": "Sleeping", "rate_hours": 8, "color": "#000000",
      "applies_to_past": true, "applies_to_future": true },
    { "id": 2, "name": "Work", "rate_hours": 20, "rate_period": "week", "color": "#6366F1",
      "applies_to_future": true }
  ],
  "viewport": { "width": 1280 }
}
"##;
    let inputs = match std::env::args().nth(1) {
        Some(path) => GridInputs::from_path(path)?,
        None => GridInputs::from_reader(Cursor::new(json))?,
    };

    let grid = LifeGrid::default();
    let mut cache = GridCache::new();
    for granularity in [TimeGranularity::Years, TimeGranularity::Months] {
        let mut view = inputs.clone();
        view.params = view.params.with_granularity(granularity);
        let snap = cache.get_or_assemble(&grid, &view)?;

        if let Some(caption) = snap
            .annotations
            .iter()
            .find(|a| a.annotation.target == AnnotationTarget::Row)
        {
            println!("{}", caption.annotation.text);
        }
        for row in snap.cells.chunks(snap.plan.units_per_row) {
            let line: String = row.iter().map(|c| glyph(c.side, &c.color)).collect();
            println!("{line}");
        }
        let p = &snap.progress;
        println!(
            "lived {:.1} {} ({:.1}%), committed {:.1}%, free {:.1}%\n",
            p.lived,
            granularity.unit_label(p.lived),
            p.percentage_lived,
            p.percentage_future,
            p.percentage_remaining
        );
    }
    Ok(())
}
