pub mod analysis;
pub mod db;
pub mod models;
pub mod store;

pub use models::{EntryTable, TimeOfDay, WeightEntry};
pub use store::{Clock, FixedClock, SystemClock, WeightStore};
