//! One-time invocation

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing::trace;

/// Wrapper whose function runs on the first call only.
///
/// Every later call, whatever its argument, returns a clone of the first
/// result.
pub struct Once<F, R> {
    func: Mutex<Option<F>>,
    result: OnceCell<R>,
}

impl<F, R> Once<F, R> {
    /// Wrap `func`
    pub fn new(func: F) -> Self {
        Self {
            func: Mutex::new(Some(func)),
            result: OnceCell::new(),
        }
    }

    /// Run the function if it has not run yet, then return its result.
    ///
    /// # Panics
    ///
    /// Panics if the first invocation panicked, since no result exists.
    pub fn call<A>(&self, arg: A) -> R
    where
        F: FnOnce(A) -> R,
        R: Clone,
    {
        self.result
            .get_or_init(|| {
                let Some(func) = self.func.lock().take() else {
                    panic!("once-wrapped function panicked during its first call");
                };
                trace!("once_first_call");
                func(arg)
            })
            .clone()
    }

    /// Whether the wrapped function has produced its result
    pub fn has_run(&self) -> bool {
        self.result.get().is_some()
    }

    /// The cached result, if the function has run
    pub fn get(&self) -> Option<&R> {
        self.result.get()
    }
}

/// Wrap `func` so it runs at most once
pub fn once<F, R>(func: F) -> Once<F, R> {
    Once::new(func)
}
