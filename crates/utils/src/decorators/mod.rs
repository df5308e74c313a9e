//! Function decorators: wrappers that change when or how often a function runs.

pub mod memoize;
pub mod once;
pub mod throttle;

pub use memoize::{memoize, memoize_with, MemoStats, Memoized};
pub use once::{once, Once};
pub use throttle::{throttle, Throttle, ThrottleOutcome};
