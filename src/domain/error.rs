use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppError {
    NoFileSelected,
    ValidationError(String),
    UnsupportedFormat(String),
    CorruptFile(String),
    NetworkError(String),
    ServiceError(String),
    EmptyExport(String),
    IoError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NoFileSelected => write!(f, "Please upload a file."),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::UnsupportedFormat(msg) => write!(f, "Unsupported format: {}", msg),
            AppError::CorruptFile(msg) => write!(f, "Corrupt file: {}", msg),
            AppError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            AppError::ServiceError(msg) => write!(f, "Failed to clean data: {}", msg),
            AppError::EmptyExport(msg) => write!(f, "{}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

// Implement std::error::Error so host applications can box and propagate it
impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
