//! Error types for the decay model

/// Errors raised by the decay model and record parsing
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecayError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl DecayError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, DecayError>;
