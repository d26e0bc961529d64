//! Error types for the collaborator contracts.

use thiserror::Error;

/// Errors from the user/mood store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("user {0} not found")]
    UserNotFound(i64),
}

/// Errors from the reply-generation upstream.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("empty response from Gemini")]
    EmptyResponse,
}
