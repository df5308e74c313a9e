//! Conversion implementations for error types

use super::builders::CANCELLED;
use super::types::Error;

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json {
            message: error.to_string(),
            source: error,
        }
    }
}

// A deferred callback that panics surfaces here when its handle is joined.
impl From<tokio::task::JoinError> for Error {
    fn from(error: tokio::task::JoinError) -> Self {
        if error.is_cancelled() {
            Error::scheduling("deferred invocation", CANCELLED)
        } else {
            Error::scheduling("deferred invocation", format!("callback panicked: {error}"))
        }
    }
}
