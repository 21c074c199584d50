pub mod cli;
pub mod clock;
pub mod config;
pub mod logging;
pub mod models;
pub mod store;
pub mod timesheet;
pub mod tui;
pub mod utils;
pub mod validate;

pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use models::{EntryDraft, Theme, TimesheetEntry};
pub use store::Store;
pub use timesheet::Timesheet;
pub use utils::Profile;
