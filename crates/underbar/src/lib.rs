//! Collection and function utilities.
//!
//! One flat namespace over the synchronous collection operations in
//! `underbar-core` and the function decorators in `underbar-utils`.
//!
//! ```
//! use underbar::{defaults, extend, filter, uniq};
//! use indexmap::IndexMap;
//!
//! let evens = filter(&[1, 2, 3, 4], |n: &i32| n % 2 == 0);
//! assert_eq!(evens, vec![2, 4]);
//! assert_eq!(uniq(&[1, 2, 1, 3]), vec![1, 2, 3]);
//!
//! let mut target = IndexMap::from([("a".to_string(), 1)]);
//! let source = IndexMap::from([("a".to_string(), 2), ("b".to_string(), 3)]);
//! defaults(&mut target, [&source]);
//! assert_eq!(target["a"], 1);
//! extend(&mut target, [&source]);
//! assert_eq!(target["a"], 2);
//! ```

pub use underbar_core::{capabilities, collection, errors, functional};
pub use underbar_core::{
    Collection, Error, Key, MappingMut, Methods, Nested, Property, Result, ResultExt, Truthy,
};
pub use underbar_core::functional::*;
// Both the `nested` module and the `nested!` macro.
pub use underbar_core::nested;

pub use underbar_utils::{
    config, decorators, delay, delay_on, init_tracing, memoize, memoize_with, once, scheduling,
    throttle, DelayHandle, MemoStats, Memoized, Once, Scheduler, Throttle, ThrottleConfig,
    ThrottleOutcome, TokioScheduler,
};

/// Everything at once
pub mod prelude {
    pub use underbar_core::functional::prelude::*;
    pub use underbar_utils::{
        delay, memoize, memoize_with, once, throttle, ThrottleConfig, ThrottleOutcome,
    };
}
