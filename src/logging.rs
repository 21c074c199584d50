use flexi_logger::{Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, WriteMode};
use std::path::Path;

const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Start size-rotated file logging in the given directory. Files land next
/// to the entry store so the terminal stays free for the UI.
///
/// The returned handle must outlive the program's useful work; dropping it
/// shuts the logger down.
pub fn init_logging(log_dir: &Path) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(default_log_level())?
        .log_to_file(FileSpec::default().directory(log_dir).basename("timecard"))
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .start()
}

/// Default log level for the current build mode
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}
