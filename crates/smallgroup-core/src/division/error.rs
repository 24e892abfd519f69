use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DivisionError {
    #[error("Invalid target group size: {0} (must be a positive integer)")]
    InvalidTargetSize(String),
}
