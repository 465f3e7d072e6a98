use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use chrono::NaiveDate;
use serde::Serialize;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column headers of the all-entries table, in display order.
pub const ENTRY_HEADERS: [&str; 3] = ["Date", "Morning (kg)", "Night (kg)"];

/// One of the two daily reading slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Night,
}

impl TimeOfDay {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Night => "night",
        }
    }

    /// Column holding the reading for this slot.
    #[must_use]
    pub(crate) fn column(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning_weight",
            TimeOfDay::Night => "night_weight",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(TimeOfDay::Morning),
            "night" => Ok(TimeOfDay::Night),
            _ => bail!("Invalid time of day '{s}'. Must be one of: morning, night"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub morning_weight: Option<f64>,
    pub night_weight: Option<f64>,
}

impl WeightEntry {
    #[must_use]
    pub fn weight(&self, time_of_day: TimeOfDay) -> Option<f64> {
        match time_of_day {
            TimeOfDay::Morning => self.morning_weight,
            TimeOfDay::Night => self.night_weight,
        }
    }
}

/// Difference between the last and first morning readings of a date range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodChange {
    pub first: f64,
    pub last: f64,
    pub change: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub morning: Option<f64>,
    pub night: Option<f64>,
    pub change: Option<f64>,
}

/// Trailing window ending today, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Weekly,
    Monthly,
}

impl Period {
    #[must_use]
    pub fn days(self) -> i64 {
        match self {
            Period::Weekly => 7,
            Period::Monthly => 30,
        }
    }

    #[must_use]
    pub fn banner(self) -> &'static str {
        match self {
            Period::Weekly => "--- Weekly Analysis (Last 7 Days) ---",
            Period::Monthly => "--- Monthly Analysis (Last 30 Days) ---",
        }
    }

    /// Inclusive `(start, end)` bounds for a window ending on `today`.
    #[must_use]
    pub fn range(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        (today - chrono::Duration::days(self.days() - 1), today)
    }
}

/// Read-only projection of every entry, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct EntryTable {
    pub headers: [&'static str; 3],
    pub rows: Vec<WeightEntry>,
}

impl EntryTable {
    #[must_use]
    pub fn new(rows: Vec<WeightEntry>) -> Self {
        Self {
            headers: ENTRY_HEADERS,
            rows,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl Default for EntryTable {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_parse() {
        assert_eq!("morning".parse::<TimeOfDay>().unwrap(), TimeOfDay::Morning);
        assert_eq!("night".parse::<TimeOfDay>().unwrap(), TimeOfDay::Night);
    }

    #[test]
    fn test_time_of_day_case_insensitive() {
        assert_eq!("Morning".parse::<TimeOfDay>().unwrap(), TimeOfDay::Morning);
        assert_eq!(" NIGHT ".parse::<TimeOfDay>().unwrap(), TimeOfDay::Night);
    }

    #[test]
    fn test_time_of_day_invalid() {
        assert!("noon".parse::<TimeOfDay>().is_err());
        assert!("".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_time_of_day_display() {
        assert_eq!(TimeOfDay::Morning.to_string(), "morning");
        assert_eq!(TimeOfDay::Night.to_string(), "night");
    }

    #[test]
    fn test_weekly_range_covers_seven_days() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let (start, end) = Period::Weekly.range(today);
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert_eq!(end, today);
    }

    #[test]
    fn test_monthly_range_crosses_month_boundary() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let (start, end) = Period::Monthly.range(today);
        // 2025 is not a leap year: Feb has 28 days
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 2, 9).unwrap());
        assert_eq!(end, today);
    }

    #[test]
    fn test_entry_table_headers() {
        let table = EntryTable::default();
        assert_eq!(table.headers, ["Date", "Morning (kg)", "Night (kg)"]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_weight_entry_field_by_time_of_day() {
        let entry = WeightEntry {
            id: 1,
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            morning_weight: Some(80.0),
            night_weight: None,
        };
        assert_eq!(entry.weight(TimeOfDay::Morning), Some(80.0));
        assert_eq!(entry.weight(TimeOfDay::Night), None);
    }
}
