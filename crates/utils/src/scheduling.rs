//! Deferred invocation on a timer.
//!
//! `delay` hands a task to a [`Scheduler`] and returns at once. The default
//! scheduler runs on tokio; ordering between deferred calls follows their
//! requested delays, not the order they were scheduled in.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, trace};
use underbar_core::{Error, Result};

/// A boxed unit of deferred work
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Timer facility that runs a task after a wait
pub trait Scheduler {
    /// Run `task` once at least `wait` has elapsed
    fn schedule(&self, wait: Duration, task: Task) -> Result<DelayHandle>;
}

/// Scheduler backed by a tokio runtime
#[derive(Debug, Clone, Default)]
pub struct TokioScheduler {
    handle: Option<Handle>,
}

impl TokioScheduler {
    /// Use whichever runtime is current when a task is scheduled
    pub fn current() -> Self {
        Self { handle: None }
    }

    /// Always spawn onto `handle`, usable from outside any runtime
    pub fn with_handle(handle: Handle) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    fn runtime(&self) -> Result<Handle> {
        match &self.handle {
            Some(handle) => Ok(handle.clone()),
            None => Handle::try_current().map_err(|e| {
                Error::scheduling("delay", format!("no tokio runtime available: {e}"))
            }),
        }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, wait: Duration, task: Task) -> Result<DelayHandle> {
        let runtime = self.runtime()?;
        debug!(wait_ms = %wait.as_millis(), "delay_scheduled");
        let join = runtime.spawn(async move {
            tokio::time::sleep(wait).await;
            trace!("delay_fired");
            task();
        });
        Ok(DelayHandle { join })
    }
}

/// Handle to a pending deferred invocation
#[derive(Debug)]
pub struct DelayHandle {
    join: JoinHandle<()>,
}

impl DelayHandle {
    /// Abort the invocation if it has not fired yet
    pub fn cancel(&self) {
        if !self.join.is_finished() {
            debug!("delay_cancelled");
        }
        self.join.abort();
    }

    /// Whether the invocation has run (or been cancelled)
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Wait for the invocation; a panic inside it or a cancellation becomes an error
    pub async fn join(self) -> Result<()> {
        self.join.await.map_err(Error::from)
    }
}

/// Call `func(args)` after `wait` on the current tokio runtime, discarding its result
pub fn delay<F, A, R>(func: F, wait: Duration, args: A) -> Result<DelayHandle>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
{
    delay_on(&TokioScheduler::current(), func, wait, args)
}

/// [`delay`] through an explicit scheduler
pub fn delay_on<S, F, A, R>(scheduler: &S, func: F, wait: Duration, args: A) -> Result<DelayHandle>
where
    S: Scheduler + ?Sized,
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
{
    scheduler.schedule(
        wait,
        Box::new(move || {
            let _ = func(args);
        }),
    )
}
