// Error handling utilities

use thiserror::Error;

use crate::cleaning::CleaningError;
use crate::data::DataError;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Data error: {0}")]
    Data(#[from] DataError),
    #[error("Cleaning error: {0}")]
    Cleaning(#[from] CleaningError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for AppError
pub type AppResult<T> = Result<T, AppError>;
