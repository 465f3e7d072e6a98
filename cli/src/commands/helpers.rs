use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Columns},
};

use scalesync_core::{EntryTable, TimeOfDay};
use scalesync_core::analysis::format_kg;

pub(crate) const INVALID_WEIGHT: &str = "Invalid input. Please enter numbers only.";

/// Parse free-text weight input into kilograms.
/// Every rejection carries the same message and no underlying cause.
pub(crate) fn parse_weight(s: &str) -> Result<f64> {
    match s.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => bail!(INVALID_WEIGHT),
    }
}

/// Ask a yes/no question on `output` and read the answer from `input`.
/// Anything other than `y`/`yes` (including EOF) is a no.
pub(crate) fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<bool> {
    write!(output, "{question} [y/N]: ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read answer")?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

pub(crate) fn render_entry_table(table: &EntryTable) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.headers);
    for entry in &table.rows {
        builder.push_record([
            entry.date.format("%Y-%m-%d").to_string(),
            cell(entry.weight(TimeOfDay::Morning)),
            cell(entry.weight(TimeOfDay::Night)),
        ]);
    }
    builder
        .build()
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..3)).with(Alignment::right()))
        .to_string()
}

fn cell(weight: Option<f64>) -> String {
    weight.map_or("-".into(), format_kg)
}
