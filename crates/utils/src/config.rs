//! Configuration structs for time-based decorators.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use underbar_core::{Error, Result};

/// Default throttle window (100ms)
const DEFAULT_WAIT: Duration = Duration::from_millis(100);

/// Configuration for throttle behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleConfig {
    /// Length of a throttle window
    pub wait: Duration,
    /// Invoke on the first call of a window
    pub leading: bool,
    /// Coalesce calls made inside a window into one call at its end
    pub trailing: bool,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            wait: DEFAULT_WAIT,
            leading: true,
            trailing: false,
        }
    }
}

impl ThrottleConfig {
    /// Leading edge only: calls inside a window are dropped
    pub fn new(wait: Duration) -> Self {
        Self::leading_only(wait)
    }

    /// Invoke immediately, drop everything else in the window
    pub fn leading_only(wait: Duration) -> Self {
        Self {
            wait,
            leading: true,
            trailing: false,
        }
    }

    /// Defer every window's calls to a single call at the window boundary
    pub fn trailing_only(wait: Duration) -> Self {
        Self {
            wait,
            leading: false,
            trailing: true,
        }
    }

    /// Invoke immediately, then once more at the boundary if calls arrived meanwhile
    pub fn both_edges(wait: Duration) -> Self {
        Self {
            wait,
            leading: true,
            trailing: true,
        }
    }

    /// Reject configurations that could never invoke the function
    pub fn validate(&self) -> Result<()> {
        if self.wait.is_zero() {
            return Err(Error::configuration("throttle wait must be greater than zero"));
        }
        if !self.leading && !self.trailing {
            return Err(Error::configuration(
                "throttle needs at least one of leading or trailing enabled",
            ));
        }
        Ok(())
    }
}
