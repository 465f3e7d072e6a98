mod helpers;
mod reset;
mod summary;
mod weight;

pub(crate) use reset::cmd_reset;
pub(crate) use summary::{cmd_daily, cmd_period};
pub(crate) use weight::{cmd_list, cmd_save};
