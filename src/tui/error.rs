use thiserror::Error;

#[derive(Debug, Error)]
pub enum TuiError {
    #[error("IO/Terminal error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Terminal too small: {0}")]
    TerminalTooSmall(String),
}
