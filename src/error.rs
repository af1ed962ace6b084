use thiserror::Error;

#[derive(Error, Debug)]
pub enum BidError {
    #[error("Invalid job type entered: '{0}'")]
    InvalidJobType(String),

    #[error("Crew size must be at least 1 worker")]
    InvalidCrewSize,

    #[error("Sports court jobs require court options")]
    MissingCourtOptions,

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type BfResult<T> = Result<T, BidError>;
