use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing::{debug, error, warn};

use crate::analysis::{self, NO_ENTRY_TODAY};
use crate::db::Database;
use crate::models::{EntryTable, Period, PeriodChange, TimeOfDay};

pub const RESET_DONE: &str = "All entries have been deleted. Database is reset.";

/// Source of "today" for every dated operation.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Weight tracking facade used by the presentation layer.
///
/// Every public operation opens its own connection and drops it before
/// returning, and never lets a failure escape: the result is always a string
/// (or table) ready to display.
pub struct WeightStore {
    db_path: PathBuf,
    clock: Box<dyn Clock>,
}

impl WeightStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self::with_clock(db_path, SystemClock)
    }

    pub fn with_clock(db_path: impl Into<PathBuf>, clock: impl Clock + 'static) -> Self {
        Self {
            db_path: db_path.into(),
            clock: Box::new(clock),
        }
    }

    fn connect(&self) -> Result<Database> {
        Database::open(&self.db_path)
    }

    /// Create the weights table if missing. Safe to call on every startup.
    pub fn initialize(&self) {
        match self.connect() {
            Ok(_) => debug!(path = %self.db_path.display(), "weight store ready"),
            Err(e) => error!(path = %self.db_path.display(), "failed to initialize store: {e:#}"),
        }
    }

    pub fn save_weight(&self, weight: f64, time_of_day: TimeOfDay) -> String {
        let today = self.clock.today();
        debug!(%today, %time_of_day, weight, "saving weight");
        match self
            .connect()
            .and_then(|db| db.upsert_weight(today, time_of_day, weight))
        {
            Ok(entry) => analysis::saved_message(time_of_day, entry.date),
            Err(e) => {
                warn!("failed to save {time_of_day} weight: {e:#}");
                format!("Error: {e:#}")
            }
        }
    }

    pub(crate) fn period_change(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<PeriodChange>> {
        let weights = self.connect()?.get_morning_weights(start, end)?;
        Ok(analysis::period_change(&weights))
    }

    /// Change in morning weight between `start` and `end`, both inclusive.
    pub(crate) fn weight_change(&self, start: NaiveDate, end: NaiveDate) -> String {
        debug!(%start, %end, "computing period change");
        match self.period_change(start, end) {
            Ok(change) => analysis::render_period(change.as_ref()),
            Err(e) => {
                warn!("failed to read period {start}..={end}: {e:#}");
                format!("Error fetching data: {e:#}")
            }
        }
    }

    pub fn daily_analysis(&self) -> String {
        let today = self.clock.today();
        debug!(%today, "daily analysis");
        match self.connect().and_then(|db| db.get_entry(today)) {
            Ok(Some(entry)) => analysis::daily_report(&entry).to_string(),
            Ok(None) => NO_ENTRY_TODAY.to_string(),
            Err(e) => {
                warn!("failed to read today's entry: {e:#}");
                format!("Error: {e:#}")
            }
        }
    }

    pub fn period_analysis(&self, period: Period) -> String {
        let (start, end) = period.range(self.clock.today());
        format!("{}\n{}", period.banner(), self.weight_change(start, end))
    }

    pub fn weekly_analysis(&self) -> String {
        self.period_analysis(Period::Weekly)
    }

    pub fn monthly_analysis(&self) -> String {
        self.period_analysis(Period::Monthly)
    }

    /// Every entry, newest first. Falls back to an empty table on failure.
    pub fn all_entries(&self) -> EntryTable {
        self.entry_table().unwrap_or_else(|e| {
            error!("failed to load entries: {e:#}");
            EntryTable::default()
        })
    }

    /// Fallible variant of [`WeightStore::all_entries`].
    pub fn entry_table(&self) -> Result<EntryTable> {
        Ok(EntryTable::new(self.connect()?.get_all_entries()?))
    }

    /// Irreversibly delete every entry and compact the database file.
    pub fn delete_all_entries(&self) -> String {
        match self.connect().and_then(|db| db.delete_all_entries()) {
            Ok(deleted) => {
                debug!(deleted, "store reset");
                RESET_DONE.to_string()
            }
            Err(e) => {
                error!("failed to reset store: {e:#}");
                format!("Error while resetting database: {e:#}")
            }
        }
    }
}
