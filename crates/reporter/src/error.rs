use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report text: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Failed to serialize report to JSON: {0}")]
    Json(#[from] serde_json::Error),
}
