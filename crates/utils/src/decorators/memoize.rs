//! Memoization keyed by the argument's string form

use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

/// Hit/miss counters for a memoized function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// A function wrapped with its own memo table
pub struct Memoized<F, H, R> {
    func: F,
    hasher: H,
    memo: Mutex<HashMap<String, R>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<F, H, R> Memoized<F, H, R> {
    /// Wrap `func`, keying the memo table with `hasher`
    pub fn with_hasher(func: F, hasher: H) -> Self {
        Self {
            func,
            hasher,
            memo: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the cached result for `arg`, computing it on first sight.
    ///
    /// Presence in the table decides a hit, so cached `0`, `false` or empty
    /// results are returned as-is.
    pub fn call<A>(&self, arg: &A) -> R
    where
        A: ?Sized,
        F: Fn(&A) -> R,
        H: Fn(&A) -> String,
        R: Clone,
    {
        let key = (self.hasher)(arg);
        let cached = self.memo.lock().get(&key).cloned();
        if let Some(hit) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(key = %key, "memo_hit");
            return hit;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        trace!(key = %key, "memo_miss");
        // Computed outside the lock; a concurrent first insert wins.
        let result = (self.func)(arg);
        self.memo.lock().entry(key).or_insert(result).clone()
    }

    /// Number of cached results
    pub fn len(&self) -> usize {
        self.memo.lock().len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.memo.lock().is_empty()
    }

    /// Drop every cached result
    pub fn clear(&self) {
        self.memo.lock().clear();
    }

    /// Current hit/miss counters
    pub fn stats(&self) -> MemoStats {
        MemoStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

fn display_key<A: Display + ?Sized>(arg: &A) -> String {
    arg.to_string()
}

/// Memoize `func`, keying results by the argument's `Display` output
pub fn memoize<A, F, R>(func: F) -> Memoized<F, fn(&A) -> String, R>
where
    A: Display + ?Sized,
    F: Fn(&A) -> R,
{
    Memoized::with_hasher(func, display_key::<A> as fn(&A) -> String)
}

/// Memoize `func`, keying results with a caller-supplied `hasher`
pub fn memoize_with<A, F, H, R>(func: F, hasher: H) -> Memoized<F, H, R>
where
    A: ?Sized,
    F: Fn(&A) -> R,
    H: Fn(&A) -> String,
{
    Memoized::with_hasher(func, hasher)
}
