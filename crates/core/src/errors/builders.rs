//! Builder methods for creating errors with context

use super::types::Error;

impl Error {
    /// Create an unknown method error
    #[must_use]
    pub fn unknown_method(method: impl Into<String>, receiver: impl Into<String>) -> Self {
        Error::UnknownMethod {
            method: method.into(),
            receiver: receiver.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a scheduling error
    #[must_use]
    pub fn scheduling(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Scheduling {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Whether this error reports a cancelled deferred invocation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Scheduling { message, .. } if message == CANCELLED)
    }
}

pub(crate) const CANCELLED: &str = "cancelled before it fired";
