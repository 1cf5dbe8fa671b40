use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error during file I/O operations
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Error when user input fails.
    #[error("inquire error: {0}")]
    Inquire(#[from] inquire::InquireError),
    /// Error when the home directory cannot be located
    #[error("failed to find the home directory")]
    MissingHomeDir,
    /// Error when the configuration file cannot be read back
    #[error("error loading configuration file: {0}")]
    Config(String),
    /// Error when the git binary cannot be launched
    #[error("git command failed: {0}")]
    GitCommand(String),
    /// Error during input validation.
    #[error("validation error: {0}")]
    Validation(String),
}
