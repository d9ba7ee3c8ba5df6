// Standard library
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// 3rd party crates
use parking_lot::Mutex;
use tokio::task::{yield_now, JoinHandle};
use tokio::time::{sleep, Duration, Instant};

// Current module imports
use super::QueueThrottler;

/// Spawns a caller and waits until it has joined the queue so arrival order is fixed.
async fn spawn_in_order<F, Fut>(throttler: &QueueThrottler, expected: usize, f: F) -> JoinHandle<()>
where
    F: FnOnce(QueueThrottler) -> Fut,
    Fut: std::future::Future<Output = ()> + Send + 'static,
{
    let handle = tokio::spawn(f(throttler.clone()));
    while throttler.remaining() < expected {
        yield_now().await;
    }
    handle
}

#[tokio::test(start_paused = true)]
async fn turns_are_granted_in_arrival_order_without_overlap() {
    let throttler = QueueThrottler::with_interval(Duration::from_millis(100));
    let order = Arc::new(Mutex::new(Vec::new()));
    let in_flight = Arc::new(AtomicUsize::new(0));
    let max_in_flight = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::new();
    for caller in 0..5usize {
        let order = Arc::clone(&order);
        let in_flight = Arc::clone(&in_flight);
        let max_in_flight = Arc::clone(&max_in_flight);
        let handle = spawn_in_order(&throttler, caller + 1, move |throttler| async move {
            let ticket = throttler.acquire_turn().await;
            let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            max_in_flight.fetch_max(now, Ordering::SeqCst);
            order.lock().push(caller);
            sleep(Duration::from_millis(20)).await;
            in_flight.fetch_sub(1, Ordering::SeqCst);
            ticket.throttle().await;
        })
        .await;
        handles.push(handle);
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(*order.lock(), vec![0, 1, 2, 3, 4]);
    assert_eq!(max_in_flight.load(Ordering::SeqCst), 1);
    assert_eq!(throttler.remaining(), 0);
}

#[tokio::test(start_paused = true)]
async fn completions_are_spaced_by_the_configured_rate() {
    let throttler = QueueThrottler::new(4);
    assert_eq!(throttler.interval(), Duration::from_millis(250));

    let completions = Arc::new(Mutex::new(Vec::new()));
    let mut handles = Vec::new();
    for caller in 0..4usize {
        let completions = Arc::clone(&completions);
        let handle = spawn_in_order(&throttler, caller + 1, move |throttler| async move {
            let ticket = throttler.acquire_turn().await;
            ticket.throttle().await;
            completions.lock().push(Instant::now());
        })
        .await;
        handles.push(handle);
    }

    for handle in handles {
        handle.await.unwrap();
    }

    let completions = completions.lock();
    for pair in completions.windows(2) {
        assert!(pair[1] - pair[0] >= Duration::from_millis(250));
    }
}

#[tokio::test(start_paused = true)]
async fn slow_work_is_not_delayed_further() {
    let throttler = QueueThrottler::with_interval(Duration::from_millis(100));
    let started = Instant::now();

    let ticket = throttler.acquire_turn().await;
    sleep(Duration::from_millis(300)).await;
    ticket.throttle().await;

    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(300));
    assert!(elapsed < Duration::from_millis(310));
}

#[tokio::test(start_paused = true)]
async fn pass_of_three_requests_at_one_per_second_takes_three_seconds() {
    let throttler = QueueThrottler::new(1);
    let started = Instant::now();

    for _ in 0..3 {
        let ticket = throttler.acquire_turn().await;
        sleep(Duration::from_millis(50)).await;
        ticket.throttle().await;
    }

    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(3000));
    assert!(elapsed < Duration::from_millis(3050));
}

#[tokio::test(start_paused = true)]
async fn empty_queue_release_frees_the_lane() {
    let throttler = QueueThrottler::with_interval(Duration::from_millis(10));

    let ticket = throttler.acquire_turn().await;
    assert_eq!(throttler.remaining(), 1);
    ticket.throttle().await;
    assert_eq!(throttler.remaining(), 0);

    // A fresh caller is admitted without waiting on anyone.
    let ticket = throttler.acquire_turn().await;
    assert_eq!(throttler.remaining(), 1);
    ticket.throttle().await;
}

#[tokio::test(start_paused = true)]
async fn dropped_ticket_still_releases_the_next_caller() {
    let throttler = QueueThrottler::with_interval(Duration::from_millis(100));

    let first = throttler.acquire_turn().await;
    let second = spawn_in_order(&throttler, 2, |throttler| async move {
        let ticket = throttler.acquire_turn().await;
        ticket.throttle().await;
    })
    .await;

    drop(first);
    second.await.unwrap();
    assert_eq!(throttler.remaining(), 0);
}

#[tokio::test(start_paused = true)]
async fn cancelled_waiter_is_skipped() {
    let throttler = QueueThrottler::with_interval(Duration::from_millis(100));
    let holder = throttler.acquire_turn().await;

    let abandoned = spawn_in_order(&throttler, 2, |throttler| async move {
        let ticket = throttler.acquire_turn().await;
        ticket.throttle().await;
    })
    .await;
    let patient = spawn_in_order(&throttler, 3, |throttler| async move {
        let ticket = throttler.acquire_turn().await;
        ticket.throttle().await;
    })
    .await;

    abandoned.abort();
    let _ = abandoned.await;

    holder.throttle().await;
    patient.await.unwrap();
    assert_eq!(throttler.remaining(), 0);
}
