//! Core error type definitions

/// Result type alias for underbar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for underbar operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A method name passed to `invoke` is not known to the receiver type
    UnknownMethod { method: String, receiver: String },

    /// Invalid decorator configuration
    Configuration { message: String },

    /// Deferred work could not be scheduled, was cancelled, or panicked
    Scheduling { operation: String, message: String },

    /// JSON conversion errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}
