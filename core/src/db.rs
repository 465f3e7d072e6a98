use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{Connection, params};

use crate::models::{DATE_FORMAT, TimeOfDay, WeightEntry};

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        let db = Database { conn };
        db.migrate()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Database { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<()> {
        let version: i64 = self
            .conn
            .pragma_query_value(None, "user_version", |row| row.get(0))?;

        if version < 1 {
            // IF NOT EXISTS keeps files created before user_version was tracked.
            self.conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS weights (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    entry_date TEXT NOT NULL UNIQUE,
                    morning_weight REAL,
                    night_weight REAL
                );

                PRAGMA user_version = 1;",
            )?;
        }

        Ok(())
    }

    fn weight_entry_from_row(row: &rusqlite::Row) -> rusqlite::Result<WeightEntry> {
        let date_str: String = row.get(1)?;
        let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
        })?;
        Ok(WeightEntry {
            id: row.get(0)?,
            date,
            morning_weight: row.get(2)?,
            night_weight: row.get(3)?,
        })
    }

    // --- Weight Entries ---

    /// Record a reading for `date`, creating the row on first save and
    /// otherwise overwriting only the column for `time_of_day`.
    pub fn upsert_weight(
        &self,
        date: NaiveDate,
        time_of_day: TimeOfDay,
        weight: f64,
    ) -> Result<WeightEntry> {
        let date_str = date.format(DATE_FORMAT).to_string();
        let column = time_of_day.column();
        self.conn.execute(
            &format!(
                "INSERT INTO weights (entry_date, {column}) VALUES (?1, ?2)
                 ON CONFLICT(entry_date) DO UPDATE SET {column} = excluded.{column}"
            ),
            params![date_str, weight],
        )?;
        self.get_entry(date)?
            .context("Weight entry not found after upsert")
    }

    pub fn get_entry(&self, date: NaiveDate) -> Result<Option<WeightEntry>> {
        let date_str = date.format(DATE_FORMAT).to_string();
        let mut stmt = self.conn.prepare(
            "SELECT id, entry_date, morning_weight, night_weight
             FROM weights WHERE entry_date = ?1",
        )?;
        let mut rows = stmt.query(params![date_str])?;
        if let Some(row) = rows.next()? {
            Ok(Some(Self::weight_entry_from_row(row)?))
        } else {
            Ok(None)
        }
    }

    /// Recorded morning weights between `start` and `end` inclusive, oldest first.
    /// Dates with no morning reading are skipped.
    pub fn get_morning_weights(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<f64>> {
        let mut stmt = self.conn.prepare(
            "SELECT morning_weight FROM weights
             WHERE entry_date >= ?1 AND entry_date <= ?2 AND morning_weight IS NOT NULL
             ORDER BY entry_date ASC",
        )?;
        let weights = stmt
            .query_map(
                params![
                    start.format(DATE_FORMAT).to_string(),
                    end.format(DATE_FORMAT).to_string()
                ],
                |row| row.get(0),
            )?
            .collect::<Result<Vec<f64>, _>>()?;
        Ok(weights)
    }

    pub fn get_all_entries(&self) -> Result<Vec<WeightEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, entry_date, morning_weight, night_weight
             FROM weights ORDER BY entry_date DESC",
        )?;
        let entries = stmt
            .query_map([], Self::weight_entry_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    /// Remove every entry, restart id numbering and compact the file.
    /// Returns the number of rows deleted.
    pub fn delete_all_entries(&self) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let deleted = tx.execute("DELETE FROM weights", [])?;
        tx.execute("DELETE FROM sqlite_sequence WHERE name = 'weights'", [])?;
        tx.commit()?;
        // VACUUM cannot run inside a transaction.
        self.conn.execute_batch("VACUUM;")?;
        Ok(deleted)
    }

    pub fn count_entries(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM weights", [], |row| row.get(0))?;
        Ok(count)
    }
}
