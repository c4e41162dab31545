use connectors::error::DbError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Data source error: {0}")]
    Db(#[from] DbError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Failed to write the report: {0}")]
    ReportWrite(#[from] std::io::Error),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}
