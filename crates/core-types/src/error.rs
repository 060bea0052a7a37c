use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Expected at least one {0}, but the collection is empty")]
    EmptyCollection(&'static str),
}
