use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// A by-id lookup found no matching record
    NotFound { entity: &'static str, id: u64 },
    /// The data source failed to serve a read (simulated I/O failure)
    DataSourceError(String),
    /// Serializing an export payload failed
    SerializationError(String),
    /// Invalid input format (configuration values, filters)
    InvalidInput(String),
    /// IO operation failed
    IoError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound { entity, id } => {
                write!(f, "{entity} with id {id} not found")
            }
            AppError::DataSourceError(msg) => write!(f, "Data source error: {msg}"),
            AppError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            AppError::IoError(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

// Conversion implementations for common errors
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
