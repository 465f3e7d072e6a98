use anyhow::Result;
use std::io::{self, BufRead, Write};

use scalesync_core::WeightStore;

use super::helpers::confirm;

const RESET_QUESTION: &str =
    "Are you sure you want to delete ALL entries? This action cannot be undone.";
const RESET_CANCELED: &str = "Reset canceled.";

pub(crate) fn cmd_reset(store: &WeightStore, yes: bool) -> Result<()> {
    let message = reset_with(store, yes, &mut io::stdin().lock(), &mut io::stderr())?;
    println!("{message}");
    Ok(())
}

/// Clear the store unless the user declines the prompt. `yes` skips the prompt.
fn reset_with<R: BufRead, W: Write>(
    store: &WeightStore,
    yes: bool,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    if yes || confirm(input, output, RESET_QUESTION)? {
        Ok(store.delete_all_entries())
    } else {
        Ok(RESET_CANCELED.to_string())
    }
}
