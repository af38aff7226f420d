use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiwakeError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid CSV format: {0}")]
    InvalidFormat(String),

    #[error("Failed to parse CSV line: {0}")]
    MalformedLine(String),

    #[error("File is neither valid UTF-8 nor Shift_JIS")]
    Encoding,
}

pub type Result<T> = std::result::Result<T, ShiwakeError>;
