use chrono::{Datelike, Timelike};
use xxhash_rust::xxh3::Xxh3;

use crate::activity::model::{Activity, RatePeriod};
use crate::calendar::counts::LifeParameters;
use crate::calendar::granularity::TimeGranularity;
use crate::config::document::LifeGridConfig;
use crate::foundation::core::Rgb8;
use crate::foundation::error::LifeGridResult;
use crate::grid::annotate::{Annotation, AnnotationTarget, Placement};
use crate::grid::assemble::{GridInputs, GridSnapshot, LifeGrid};
use crate::layout::planner::{GridBand, Viewport};

const XXH3_SEED: u64 = 0x4c69_6665_4772_6964;

/// 128-bit fingerprint of everything a snapshot depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InputFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

/// Fingerprint of `inputs` assembled under `config`.
///
/// Every field of the parameters, the viewport, the configuration, every activity and every user
/// annotation (in order) contributes, so any edit changes the key.
pub fn fingerprint_inputs(config: &LifeGridConfig, inputs: &GridInputs) -> InputFingerprint {
    let mut h = StableHasher::new();
    write_params(&mut h, &inputs.params);
    write_viewport(&mut h, inputs.viewport);
    h.write_u32(inputs.activities.len() as u32);
    for a in &inputs.activities {
        write_activity(&mut h, a);
    }
    h.write_u32(inputs.annotations.len() as u32);
    for a in &inputs.annotations {
        write_annotation(&mut h, a);
    }
    for g in TimeGranularity::ALL {
        write_band(&mut h, config.layout.band(g));
    }
    write_rgb(&mut h, config.baseline.lived);
    write_rgb(&mut h, config.baseline.unlived);
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_i32(&mut self, v: i32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> InputFingerprint {
        let v = self.inner.digest128();
        InputFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_params(h: &mut StableHasher, p: &LifeParameters) {
    h.write_i32(p.birth_date.num_days_from_ce());
    h.write_u32(p.lifespan_years);
    h.write_u8(granularity_tag(p.granularity));
    h.write_i32(p.reference_now.date().num_days_from_ce());
    h.write_u32(p.reference_now.num_seconds_from_midnight());
    h.write_u32(p.reference_now.nanosecond());
}

fn granularity_tag(g: TimeGranularity) -> u8 {
    match g {
        TimeGranularity::Hours => 0,
        TimeGranularity::Days => 1,
        TimeGranularity::Weeks => 2,
        TimeGranularity::Months => 3,
        TimeGranularity::Years => 4,
    }
}

fn write_viewport(h: &mut StableHasher, v: Viewport) {
    h.write_f64(v.width);
    match v.height {
        Some(height) => {
            h.write_u8(1);
            h.write_f64(height);
        }
        None => h.write_u8(0),
    }
}

fn write_activity(h: &mut StableHasher, a: &Activity) {
    h.write_u32(a.id.0);
    h.write_str(&a.name);
    h.write_f64(a.rate_hours);
    h.write_u8(match a.rate_period {
        RatePeriod::Day => 0,
        RatePeriod::Week => 1,
        RatePeriod::Month => 2,
        RatePeriod::Year => 3,
    });
    write_rgb(h, a.color);
    h.write_bool(a.applies_to_past);
    h.write_bool(a.applies_to_future);
}

fn write_annotation(h: &mut StableHasher, a: &Annotation) {
    h.write_str(&a.text);
    write_rgb(h, a.color);
    match a.target {
        AnnotationTarget::Cell { index } => {
            h.write_u8(0);
            h.write_u64(index as u64);
        }
        AnnotationTarget::Row => h.write_u8(1),
    }
    h.write_u8(match a.placement {
        Placement::Left => 0,
        Placement::Right => 1,
        Placement::Top => 2,
        Placement::Bottom => 3,
    });
    match a.show_in_view {
        Some(g) => {
            h.write_u8(1);
            h.write_u8(granularity_tag(g));
        }
        None => h.write_u8(0),
    }
}

fn write_band(h: &mut StableHasher, b: &GridBand) {
    h.write_u32(b.units_per_row);
    h.write_f64(b.min_cell_size);
    h.write_f64(b.max_cell_size);
    h.write_f64(b.padding_fraction);
    h.write_f64(b.left_margin);
    h.write_f64(b.right_margin);
    h.write_f64(b.top_margin);
    h.write_f64(b.bottom_buffer);
}

fn write_rgb(h: &mut StableHasher, c: Rgb8) {
    h.write_bytes(&[c.r, c.g, c.b]);
}

#[derive(Debug)]
struct CachedSnapshot {
    key: InputFingerprint,
    snapshot: GridSnapshot,
}

/// Keeps the most recent snapshot and reuses it while the inputs are unchanged.
#[derive(Debug, Default)]
pub struct GridCache {
    entry: Option<CachedSnapshot>,
    hits: u64,
    misses: u64,
}

impl GridCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached snapshot when `inputs` fingerprint the same, otherwise assemble anew.
    ///
    /// A failed assembly leaves the previous entry in place.
    pub fn get_or_assemble(
        &mut self,
        grid: &LifeGrid,
        inputs: &GridInputs,
    ) -> LifeGridResult<&GridSnapshot> {
        let key = fingerprint_inputs(grid.config(), inputs);
        let entry = match self.entry.take() {
            Some(cached) if cached.key == key => {
                self.hits += 1;
                tracing::debug!(hi = key.hi, lo = key.lo, "grid cache hit");
                cached
            }
            stale => {
                self.misses += 1;
                tracing::debug!(hi = key.hi, lo = key.lo, "grid cache miss");
                match grid.assemble(inputs) {
                    Ok(snapshot) => CachedSnapshot { key, snapshot },
                    Err(err) => {
                        // keep serving the last good snapshot
                        self.entry = stale;
                        return Err(err);
                    }
                }
            }
        };
        Ok(&self.entry.insert(entry).snapshot)
    }

    /// Drop the cached snapshot.
    pub fn clear(&mut self) {
        self.entry = None;
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that had to assemble.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/cache.rs"]
mod tests;
