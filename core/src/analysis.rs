//! Trend computations and their display-ready renderings.
//!
//! Everything here is pure: callers fetch readings from the database and pass
//! them in.

use std::fmt;

use chrono::NaiveDate;

use crate::models::{DATE_FORMAT, DailyReport, PeriodChange, TimeOfDay, WeightEntry};

pub const NOT_ENOUGH_DATA: &str = "Not enough data for this period.";
pub const NO_ENTRY_TODAY: &str = "No entry found for today.";

/// First/last change over `weights`, taken in slice order.
/// `None` when fewer than two readings are available.
#[must_use]
pub fn period_change(weights: &[f64]) -> Option<PeriodChange> {
    let (&first, &last) = match weights {
        [first, .., last] => (first, last),
        _ => return None,
    };
    Some(PeriodChange {
        first,
        last,
        change: no_neg_zero(last - first),
        count: weights.len(),
    })
}

#[must_use]
pub fn daily_report(entry: &WeightEntry) -> DailyReport {
    let change = match (entry.morning_weight, entry.night_weight) {
        (Some(morning), Some(night)) => Some(no_neg_zero(night - morning)),
        _ => None,
    };
    DailyReport {
        date: entry.date,
        morning: entry.morning_weight,
        night: entry.night_weight,
        change,
    }
}

/// Render the outcome of a period query, including the data-absence case.
#[must_use]
pub fn render_period(change: Option<&PeriodChange>) -> String {
    change.map_or_else(|| NOT_ENOUGH_DATA.to_string(), ToString::to_string)
}

#[must_use]
pub fn saved_message(time_of_day: TimeOfDay, date: NaiveDate) -> String {
    format!("{time_of_day} weight saved for {}", date.format(DATE_FORMAT))
}

impl fmt::Display for PeriodChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Period Change: {} kg (From {} to {} over {} entries)",
            format_kg(self.change),
            format_kg(self.first),
            format_kg(self.last),
            self.count
        )
    }
}

impl fmt::Display for DailyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Today's Analysis ({}):", self.date.format(DATE_FORMAT))?;
        writeln!(f, "  Morning: {}", kg_or_missing(self.morning, "not recorded"))?;
        writeln!(f, "  Night:   {}", kg_or_missing(self.night, "not recorded"))?;
        writeln!(f, "  Day's Change: {}", kg_or_missing(self.change, "n/a"))
    }
}

fn kg_or_missing(value: Option<f64>, missing: &str) -> String {
    value.map_or_else(|| missing.to_string(), |v| format!("{} kg", format_kg(v)))
}

/// Two-decimal rendering with negative zero folded to `0.00`.
#[must_use]
pub fn format_kg(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{:.2}", no_neg_zero(rounded))
}

pub(crate) fn no_neg_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}
