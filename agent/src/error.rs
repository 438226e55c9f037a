//! Agent error types

use thiserror::Error;

/// Result type for agent operations
pub type AgentResult<T> = Result<T, AgentError>;

/// Process-level agent errors
///
/// Upstream call failures are deliberately not represented here: the
/// dispatcher degrades them to "no result" instead of raising. See
/// `shared::ApiFailure`.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Earnings journal error: {message}")]
    JournalError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
