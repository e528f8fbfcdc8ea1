use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigitForgeError {
    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Search Worker Error: {0}")]
    Worker(String),
}

pub type DfResult<T> = Result<T, DigitForgeError>;
