use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid cache capacity: {0} (must be greater than zero)")]
    InvalidCapacity(usize),

    #[error("Failed to fetch value for key '{key}': {reason}")]
    FetchFailed { key: String, reason: String },
}
