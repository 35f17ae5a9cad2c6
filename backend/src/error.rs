use thiserror::Error;

/// Failure taxonomy for the backend.
///
/// Absent records are not errors: lookups return `Option`/`bool` and the
/// HTTP layer maps those to 404. Remote failures carry their diagnostic
/// detail here for the server log only; handlers respond with a generic
/// per-route message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("malformed record: {0}")]
    MalformedRecord(String),
}
