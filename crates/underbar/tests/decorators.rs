//! Decorator behaviour through the public facade.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use underbar::{delay, memoize, once, throttle, ThrottleConfig, ThrottleOutcome};

#[test]
fn test_once_runs_a_single_time() {
    let calls = AtomicUsize::new(0);
    let init = once(|seed: i32| {
        calls.fetch_add(1, Ordering::SeqCst);
        seed * 2
    });

    let results = [init.call(1), init.call(2), init.call(3)];

    assert_eq!(results, [2, 2, 2]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_memoize_caches_falsy_results() {
    let calls = AtomicUsize::new(0);
    let zero_at_five = memoize(|n: &i32| {
        calls.fetch_add(1, Ordering::SeqCst);
        if *n == 5 {
            0
        } else {
            *n
        }
    });

    assert_eq!(zero_at_five.call(&5), 0);
    assert_eq!(zero_at_five.call(&5), 0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let stats = zero_at_five.stats();
    assert_eq!((stats.hits, stats.misses, stats.entries), (1, 1, 1));
}

#[test]
fn test_memoize_keys_by_string_form() {
    let calls = AtomicUsize::new(0);
    let shout = memoize(|word: &str| {
        calls.fetch_add(1, Ordering::SeqCst);
        word.to_uppercase()
    });

    assert_eq!(shout.call("hi"), "HI");
    assert_eq!(shout.call("hi"), "HI");
    assert_eq!(shout.call("yo"), "YO");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn test_delay_fires_after_wait() {
    let fired = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&fired);

    let handle = delay(
        move |(a, b): (i32, i32)| sink.lock().push(a + b),
        Duration::from_millis(50),
        (1, 2),
    )
    .unwrap();

    assert!(fired.lock().is_empty());
    handle.join().await.unwrap();
    assert_eq!(*fired.lock(), vec![3]);
}

#[tokio::test(start_paused = true)]
async fn test_delay_cancelled_never_fires() {
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);

    let handle = delay(
        move |()| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
        Duration::from_millis(50),
        (),
    )
    .unwrap();
    handle.cancel();
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(fired.load(Ordering::SeqCst), 0);
    assert!(handle.join().await.unwrap_err().is_cancelled());
}

#[tokio::test(start_paused = true)]
async fn test_throttle_default_drops_inside_window() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let throttled = throttle(
        move |_: ()| counter.fetch_add(1, Ordering::SeqCst),
        ThrottleConfig::default(),
    )
    .unwrap();

    assert_eq!(throttled.call(()).unwrap(), ThrottleOutcome::Invoked);
    assert_eq!(throttled.call(()).unwrap(), ThrottleOutcome::Dropped);
    tokio::time::advance(ThrottleConfig::default().wait).await;
    assert_eq!(throttled.call(()).unwrap(), ThrottleOutcome::Invoked);

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn test_throttle_trailing_uses_latest_arguments() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let throttled = throttle(
        move |n: u32| sink.lock().push(n),
        ThrottleConfig::both_edges(Duration::from_millis(20)),
    )
    .unwrap();

    for n in 1..=5 {
        throttled.call(n).unwrap();
    }
    tokio::time::sleep(Duration::from_millis(30)).await;

    assert_eq!(*seen.lock(), vec![1, 5]);
}
