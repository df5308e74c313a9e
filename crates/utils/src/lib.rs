//! Function decorators for underbar
//!
//! Wrappers that change when or how often a function runs: [`once`],
//! [`memoize`], [`delay`] and [`throttle`]. Timed decorators run on tokio.

pub mod config;
pub mod decorators;
pub mod scheduling;
pub mod tracing;

pub use config::ThrottleConfig;
pub use decorators::*;
pub use scheduling::{delay, delay_on, DelayHandle, Scheduler, TokioScheduler};
pub use self::tracing::init as init_tracing;
