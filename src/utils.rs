use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

/// Profile mode for the application (dev or prod)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Dev,
    Prod,
}

impl Profile {
    // Profile is determined solely by the --dev CLI flag
    // No auto-detection is performed
}

/// Get the configuration directory path for timecard
/// If profile is Dev, uses "timecard-dev" instead of "timecard"
pub fn get_config_dir(profile: Profile) -> Option<PathBuf> {
    let app_name = match profile {
        Profile::Dev => "timecard-dev",
        Profile::Prod => "timecard",
    };
    // Use "com" as qualifier for better cross-platform compatibility
    ProjectDirs::from("com", "timecard", app_name).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the data directory path for timecard
/// If profile is Dev, uses "timecard-dev" instead of "timecard"
pub fn get_data_dir(profile: Profile) -> Option<PathBuf> {
    let app_name = match profile {
        Profile::Dev => "timecard-dev",
        Profile::Prod => "timecard",
    };
    // Use "com" as qualifier for better cross-platform compatibility
    ProjectDirs::from("com", "timecard", app_name).map(|dirs| dirs.data_dir().to_path_buf())
}

/// Expand `~` in a path string to the user's home directory
pub fn expand_path(path: &str) -> PathBuf {
    if path.starts_with("~/") {
        if let Some(home) = BaseDirs::new().map(|d| d.home_dir().to_path_buf()) {
            return home.join(&path[2..]);
        }
    }
    PathBuf::from(path)
}

/// Parse a date string in ISO 8601 format (YYYY-MM-DD)
pub fn parse_date(date_str: &str) -> Result<chrono::NaiveDate, chrono::ParseError> {
    chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
}

/// Get the current date as an ISO 8601 string (YYYY-MM-DD)
pub fn get_current_date_string() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Render a stored ISO date with the given chrono format string.
/// Unparseable values are shown as stored rather than dropped.
pub fn format_date_for_display(date_str: &str, format: &str) -> String {
    match parse_date(date_str) {
        Ok(date) => date.format(format).to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Render an hours value the way a user would type it (no trailing `.0`)
pub fn format_hours(hours: f64) -> String {
    hours.to_string()
}
