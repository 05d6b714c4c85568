use std::io::Error as IoError;

use thiserror::Error;

pub mod alphabet;
pub mod config;
pub mod entropy;

pub use alphabet::AlphabetError;
pub use config::ConfigError;
pub use entropy::EntropyError;

#[derive(Debug, Error)]
pub enum AppError {
    // Generation errors
    #[error("Generation error: {0}")]
    Generation(#[from] EntropyError),
    // Infrastructure/system errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Logger error: {0}")]
    Logger(String),
    #[error("Output error: {0}")]
    Output(#[from] IoError),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Output(IoError::other(err))
    }
}

impl AppError {
    /// Process exit code the binary reports for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Generation(_) | AppError::Output(_) => 1,
            AppError::Config(_) => 2,
            AppError::Logger(_) => 3,
        }
    }
}
