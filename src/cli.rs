use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::models::EntryDraft;
use crate::store::Store;
use crate::timesheet::{Timesheet, TimesheetError};
use crate::utils::{format_date_for_display, get_current_date_string};
use crate::validate::validate;

#[derive(Parser)]
#[command(name = "timecard")]
#[command(about = "Timesheet tracking - a lightweight terminal application")]
#[command(version)]
pub struct Cli {
    /// Custom config file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Use development mode (uses separate dev config/database)
    #[arg(long)]
    pub dev: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch interactive TUI (default if no subcommand)
    Tui,
    /// Quickly add a timesheet entry
    Add {
        /// Project name
        #[arg(long)]
        project: String,
        /// What was worked on
        #[arg(long)]
        task: String,
        /// Hours spent, more than 0 and at most 24
        #[arg(long)]
        hours: String,
        /// Entry date (YYYY-MM-DD); today when omitted
        #[arg(long)]
        date: Option<String>,
        /// Additional details
        #[arg(long)]
        description: Option<String>,
    },
    /// Print all entries and the running total
    List,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Timesheet error: {0}")]
    TimesheetError(#[from] TimesheetError),
    #[error("Invalid entry:{0}")]
    ValidationError(String),
}

/// Handle the add command
pub fn handle_add(
    date: Option<String>,
    project: String,
    task: String,
    hours: String,
    description: Option<String>,
    store: &Store,
) -> Result<(), CliError> {
    let clock = SystemClock;

    // Default to today, same as the form's pre-filled date
    let date = date.unwrap_or_else(get_current_date_string);

    let mut draft = EntryDraft::new(date, project, task, hours);
    draft.description = description.unwrap_or_default();

    let errors = validate(&draft, clock.today());
    if !errors.is_empty() {
        let details: String = errors
            .values()
            .map(|e| format!("\n  {}", e.message))
            .collect();
        return Err(CliError::ValidationError(details));
    }

    let mut timesheet = Timesheet::load(store);
    let entry = timesheet.add(store, &clock, &draft)?;
    println!("Entry created successfully (ID: {})", entry.id);

    Ok(())
}

/// Handle the list command
pub fn handle_list(config: &Config, store: &Store) -> Result<(), CliError> {
    let timesheet = Timesheet::load(store);

    if timesheet.is_empty() {
        println!("No timesheet entries yet.");
        return Ok(());
    }

    println!(
        "{:<14} {:<20} {:<24} {:>5}  {}",
        "Date", "Project", "Task", "Hours", "Description"
    );
    for entry in timesheet.entries() {
        let description = if entry.description.is_empty() {
            "-"
        } else {
            entry.description.as_str()
        };
        println!(
            "{:<14} {:<20} {:<24} {:>5.1}  {}",
            format_date_for_display(&entry.date, &config.date_format),
            entry.project,
            entry.task,
            entry.hours,
            description
        );
    }
    println!("Total Hours: {:.1}", timesheet.total_hours());

    Ok(())
}
