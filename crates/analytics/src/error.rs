use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Calculation error: arithmetic overflow while computing '{0}'")]
    Overflow(&'static str),
}
