//! Rate limiting: at most one invocation per window.
//!
//! Calls that land inside an open window are dropped, or, with
//! `trailing` enabled, coalesced into one deferred call that carries the
//! latest arguments and fires at the window boundary.

use crate::config::ThrottleConfig;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, trace};
use underbar_core::{Error, Result};

/// What a single throttled call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleOutcome {
    /// The function ran during this call
    Invoked,
    /// The arguments were queued for the trailing invocation
    Deferred,
    /// The call was discarded
    Dropped,
}

struct WindowState<A> {
    window_start: Option<Instant>,
    pending: Option<A>,
    timer: Option<JoinHandle<()>>,
}

struct Inner<F, A, R> {
    func: F,
    config: ThrottleConfig,
    state: Mutex<WindowState<A>>,
    last_result: Mutex<Option<R>>,
}

impl<F, A, R> Inner<F, A, R>
where
    F: Fn(A) -> R,
{
    fn invoke(&self, arg: A) {
        let result = (self.func)(arg);
        *self.last_result.lock() = Some(result);
    }

    fn fire_trailing(&self) {
        let pending = {
            let mut state = self.state.lock();
            state.timer = None;
            let pending = state.pending.take();
            if pending.is_some() {
                state.window_start = Some(Instant::now());
            }
            pending
        };
        if let Some(arg) = pending {
            trace!("throttle_trailing_invoked");
            self.invoke(arg);
        }
    }
}

/// A function limited to one invocation per window
pub struct Throttle<F, A, R> {
    inner: Arc<Inner<F, A, R>>,
}

impl<F, A, R> Clone for Throttle<F, A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F, A, R> Throttle<F, A, R>
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    /// Wrap `func` after validating `config`
    pub fn new(func: F, config: ThrottleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            inner: Arc::new(Inner {
                func,
                config,
                state: Mutex::new(WindowState {
                    window_start: None,
                    pending: None,
                    timer: None,
                }),
                last_result: Mutex::new(None),
            }),
        })
    }

    /// Offer a call to the throttle.
    ///
    /// Trailing invocations are spawned on the current tokio runtime; without
    /// one a call that would need deferring fails instead of being lost.
    pub fn call(&self, arg: A) -> Result<ThrottleOutcome> {
        let config = self.inner.config;
        let now = Instant::now();
        let mut state = self.inner.state.lock();

        // A window with a trailing call still armed stays open until it fires.
        let window_open = state.timer.is_some()
            || state
                .window_start
                .is_some_and(|start| now.duration_since(start) < config.wait);
        if !window_open {
            state.window_start = Some(now);
            if config.leading {
                drop(state);
                trace!("throttle_leading_invoked");
                self.inner.invoke(arg);
                return Ok(ThrottleOutcome::Invoked);
            }
        }

        if !config.trailing {
            trace!("throttle_dropped");
            return Ok(ThrottleOutcome::Dropped);
        }

        if state.timer.is_none() {
            let runtime = Handle::try_current().map_err(|e| {
                Error::scheduling("throttle", format!("trailing calls need a tokio runtime: {e}"))
            })?;
            let deadline = state.window_start.unwrap_or(now) + config.wait;
            let inner = Arc::clone(&self.inner);
            state.timer = Some(runtime.spawn(async move {
                sleep_until(deadline).await;
                inner.fire_trailing();
            }));
        }
        state.pending = Some(arg);
        trace!("throttle_deferred");
        Ok(ThrottleOutcome::Deferred)
    }

    /// Discard any pending trailing call
    pub fn cancel(&self) {
        let mut state = self.inner.state.lock();
        if let Some(timer) = state.timer.take() {
            timer.abort();
            debug!("throttle_cancelled");
        }
        state.pending = None;
    }

    /// Whether a trailing call is waiting for its window to close
    pub fn has_pending(&self) -> bool {
        self.inner.state.lock().pending.is_some()
    }

    /// Result of the most recent invocation
    pub fn last_result(&self) -> Option<R>
    where
        R: Clone,
    {
        self.inner.last_result.lock().clone()
    }

    /// The configuration this throttle runs with
    pub fn config(&self) -> &ThrottleConfig {
        &self.inner.config
    }
}

/// Limit `func` to one invocation per `config.wait`
pub fn throttle<F, A, R>(func: F, config: ThrottleConfig) -> Result<Throttle<F, A, R>>
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    Throttle::new(func, config)
}
