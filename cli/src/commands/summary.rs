use scalesync_core::WeightStore;
use scalesync_core::models::Period;

pub(crate) fn cmd_daily(store: &WeightStore) {
    print!("{}", with_trailing_newline(store.daily_analysis()));
}

pub(crate) fn cmd_period(store: &WeightStore, period: Period) {
    print!("{}", with_trailing_newline(store.period_analysis(period)));
}

// The daily report already ends in a newline; the rest do not.
fn with_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
