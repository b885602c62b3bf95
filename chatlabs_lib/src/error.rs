use thiserror::Error as ThisError;

/// Library errors.
#[derive(ThisError, Debug)]
pub enum Error {
    /// LLM call error.
    #[error("Failed to call LLM: {0}")]
    LLMCallError(#[from] reqwest::Error),

    /// LLM call error.
    #[error("Failed to process LLM call: {0}")]
    LLMJsonError(#[from] serde_json::Error),

    /// LLM call error.
    #[error("Failed to parse LLM response: {0}")]
    LLMResponseError(&'static str),

    /// Malformed chat thread.
    #[error("Malformed chat thread: {0}")]
    ThreadError(&'static str),

    /// General error.
    #[error("{0}")]
    Error(String),

    /// LLM response error message.
    #[error("LLM provider responded with error: {0}")]
    LLMErrorMessage(String),
}
