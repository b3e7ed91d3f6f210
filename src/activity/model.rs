use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::activity::input::{clamp_rate_hours, palette_color, sanitize_rate_hours};
use crate::allocate::walk::Side;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{LifeGridError, LifeGridResult};

/// Stable identifier of an activity within a list.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ActivityId(pub u32);

/// Period over which an activity's hours are declared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatePeriod {
    /// Hours per day.
    #[default]
    Day,
    /// Hours per week.
    Week,
    /// Hours per month (a flat 30 days).
    Month,
    /// Hours per year (365 days).
    Year,
}

impl RatePeriod {
    /// Days in one period, as used by the normalizer.
    pub fn days(self) -> f64 {
        match self {
            Self::Day => 1.0,
            Self::Week => 7.0,
            Self::Month => 30.0,
            Self::Year => 365.0,
        }
    }

    /// Short suffix for display (`"hrs/week"`).
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Day => "hrs/day",
            Self::Week => "hrs/week",
            Self::Month => "hrs/month",
            Self::Year => "hrs/year",
        }
    }
}

/// A recurring activity that consumes part of every day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Stable identifier.
    pub id: ActivityId,
    /// Display name.
    pub name: String,
    /// Declared hours per `rate_period`, in `[0, 24]`.
    pub rate_hours: f64,
    /// Period the rate is expressed over.
    #[serde(default)]
    pub rate_period: RatePeriod,
    /// Paint color.
    pub color: Rgb8,
    /// Paint on lived cells.
    #[serde(default)]
    pub applies_to_past: bool,
    /// Paint on unlived cells.
    #[serde(default)]
    pub applies_to_future: bool,
}

impl Activity {
    /// New activity applying to neither side, with the rate clamped to `[0, 24]`.
    pub fn new(
        id: ActivityId,
        name: impl Into<String>,
        rate_hours: f64,
        rate_period: RatePeriod,
        color: Rgb8,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            rate_hours: clamp_rate_hours(rate_hours),
            rate_period,
            color,
            applies_to_past: false,
            applies_to_future: false,
        }
    }

    /// Builder-style side selection.
    pub fn on_sides(mut self, past: bool, future: bool) -> Self {
        self.applies_to_past = past;
        self.applies_to_future = future;
        self
    }

    /// Whether this activity paints cells on `side`.
    pub fn applies_to(&self, side: Side) -> bool {
        match side {
            Side::Past => self.applies_to_past,
            Side::Future => self.applies_to_future,
        }
    }
}

/// Ordered activity list with unique ids.
///
/// Order is paint order: earlier activities claim cells first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Activity>", into = "Vec<Activity>")]
pub struct ActivityList {
    items: Vec<Activity>,
}

impl ActivityList {
    /// Wrap `items`, rejecting duplicate ids and non-finite rates.
    ///
    /// Rates are clamped to `[0, 24]`, as in [`Activity::new`].
    pub fn new(mut items: Vec<Activity>) -> LifeGridResult<Self> {
        let mut seen = BTreeSet::new();
        for a in &mut items {
            if !seen.insert(a.id) {
                return Err(LifeGridError::validation(format!(
                    "duplicate activity id {}",
                    a.id.0
                )));
            }
            if !a.rate_hours.is_finite() {
                return Err(LifeGridError::validation(format!(
                    "activity {} has a non-finite rate",
                    a.id.0
                )));
            }
            a.rate_hours = clamp_rate_hours(a.rate_hours);
        }
        Ok(Self { items })
    }

    /// The starter list: sleeping, eating and personal hygiene, on no side yet.
    pub fn defaults() -> Self {
        Self {
            items: vec![
                Activity::new(
                    ActivityId(1),
                    "Sleeping",
                    8.0,
                    RatePeriod::Day,
                    Rgb8::new(0x00, 0x00, 0x00),
                ),
                Activity::new(
                    ActivityId(2),
                    "Eating",
                    2.0,
                    RatePeriod::Day,
                    Rgb8::new(0x22, 0xC5, 0x5E),
                ),
                Activity::new(
                    ActivityId(3),
                    "Personal Hygiene",
                    1.0,
                    RatePeriod::Day,
                    Rgb8::new(0x3B, 0x82, 0xF6),
                ),
            ],
        }
    }

    /// Activities in declaration order.
    pub fn as_slice(&self) -> &[Activity] {
        &self.items
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.items.iter()
    }

    /// Number of activities.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an activity by id.
    pub fn get(&self, id: ActivityId) -> Option<&Activity> {
        self.items.iter().find(|a| a.id == id)
    }

    /// Append a 1 h/day activity with the next free id and a palette color.
    ///
    /// The color is picked from the palette by list position so repeated runs agree.
    pub fn add(&mut self, name: impl Into<String>) -> ActivityId {
        let id = ActivityId(self.items.iter().map(|a| a.id.0).max().unwrap_or(0) + 1);
        let color = palette_color(self.items.len());
        self.items
            .push(Activity::new(id, name, 1.0, RatePeriod::Day, color));
        id
    }

    /// Remove an activity; returns it when present.
    pub fn remove(&mut self, id: ActivityId) -> Option<Activity> {
        let idx = self.items.iter().position(|a| a.id == id)?;
        Some(self.items.remove(idx))
    }

    /// Update the declared rate and period; the rate is snapped to half hours in `[0, 24]`.
    pub fn set_rate(
        &mut self,
        id: ActivityId,
        rate_hours: f64,
        rate_period: RatePeriod,
    ) -> LifeGridResult<()> {
        let a = self.get_mut(id)?;
        a.rate_hours = sanitize_rate_hours(rate_hours);
        a.rate_period = rate_period;
        Ok(())
    }

    /// Rename an activity.
    pub fn rename(&mut self, id: ActivityId, name: impl Into<String>) -> LifeGridResult<()> {
        self.get_mut(id)?.name = name.into();
        Ok(())
    }

    /// Change an activity's color.
    pub fn recolor(&mut self, id: ActivityId, color: Rgb8) -> LifeGridResult<()> {
        self.get_mut(id)?.color = color;
        Ok(())
    }

    /// Choose the sides an activity paints on.
    pub fn set_sides(&mut self, id: ActivityId, past: bool, future: bool) -> LifeGridResult<()> {
        let a = self.get_mut(id)?;
        a.applies_to_past = past;
        a.applies_to_future = future;
        Ok(())
    }

    /// Detach every activity from both sides, keeping the list itself.
    pub fn clear_sides(&mut self) {
        for a in &mut self.items {
            a.applies_to_past = false;
            a.applies_to_future = false;
        }
    }

    fn get_mut(&mut self, id: ActivityId) -> LifeGridResult<&mut Activity> {
        self.items
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| LifeGridError::validation(format!("unknown activity id {}", id.0)))
    }
}

impl TryFrom<Vec<Activity>> for ActivityList {
    type Error = LifeGridError;

    fn try_from(items: Vec<Activity>) -> LifeGridResult<Self> {
        Self::new(items)
    }
}

impl From<ActivityList> for Vec<Activity> {
    fn from(list: ActivityList) -> Self {
        list.items
    }
}

impl<'a> IntoIterator for &'a ActivityList {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/activity/model.rs"]
mod tests;
