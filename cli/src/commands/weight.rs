use anyhow::Result;

use scalesync_core::{TimeOfDay, WeightStore};

use super::helpers::{parse_weight, render_entry_table};

pub(crate) fn cmd_save(store: &WeightStore, weight: &str, time_of_day: TimeOfDay) -> Result<()> {
    let weight = parse_weight(weight)?;
    println!("{}", store.save_weight(weight, time_of_day));
    Ok(())
}

pub(crate) fn cmd_list(store: &WeightStore, json: bool) -> Result<()> {
    if json {
        println!("{}", entries_json(store)?);
        return Ok(());
    }

    let table = store.all_entries();
    println!("{}", render_entry_table(&table));
    if table.is_empty() {
        eprintln!("No weight entries found. Use `scalesync morning <kg>` to record your weight.");
    }
    Ok(())
}

/// Every entry as pretty-printed JSON. Storage failures surface as errors here.
fn entries_json(store: &WeightStore) -> Result<String> {
    let table = store.entry_table()?;
    Ok(serde_json::to_string_pretty(&table)?)
}
