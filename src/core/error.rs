use thiserror::Error;

/// Errors raised by the ranking core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
