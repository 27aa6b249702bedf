use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelocError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for HelocError {
    fn from(e: serde_json::Error) -> Self {
        HelocError::SerializationError(e.to_string())
    }
}

impl From<csv::Error> for HelocError {
    fn from(e: csv::Error) -> Self {
        HelocError::SerializationError(e.to_string())
    }
}
