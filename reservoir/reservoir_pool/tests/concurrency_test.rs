//! Integration tests for concurrent use of a resource pool.
//!
//! Workers share one pool through scoped threads, acquiring, using and
//! releasing resources while the pool is open and while it is being closed.

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use reservoir_core::types::{DiscardReason, PoolEventKind};
use reservoir_observability::RecordingObserver;
use reservoir_pool::{AcquireError, Closer, ResourcePool};

#[derive(Debug)]
struct DoubleClose(usize);

impl fmt::Display for DoubleClose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resource {} closed twice", self.0)
    }
}

impl std::error::Error for DoubleClose {}

/// Shared bookkeeping for every connection the factory has made.
#[derive(Debug, Default)]
struct Ledger {
    created: AtomicUsize,
    closed: AtomicUsize,
    double_closes: AtomicUsize,
    closed_ids: Mutex<HashSet<usize>>,
}

/// A simulated connection that reports being closed more than once.
#[derive(Debug)]
struct Connection {
    id: usize,
    ledger: Arc<Ledger>,
    in_use: Arc<AtomicBool>,
}

impl Connection {
    fn query(&self) {
        // Two workers must never hold the same connection.
        assert!(!self.in_use.swap(true, Ordering::SeqCst));
        thread::yield_now();
        self.in_use.store(false, Ordering::SeqCst);
    }
}

impl Closer for Connection {
    type Error = DoubleClose;

    fn close(self) -> Result<(), Self::Error> {
        self.ledger.closed.fetch_add(1, Ordering::SeqCst);
        if !self.ledger.closed_ids.lock().unwrap().insert(self.id) {
            self.ledger.double_closes.fetch_add(1, Ordering::SeqCst);
            return Err(DoubleClose(self.id));
        }
        Ok(())
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "created={} closed={}",
            self.created.load(Ordering::SeqCst),
            self.closed.load(Ordering::SeqCst)
        )
    }
}

fn connection_pool(
    capacity: usize,
    ledger: &Arc<Ledger>,
    recorder: &Arc<RecordingObserver>,
) -> ResourcePool<Connection, std::io::Error> {
    let ledger = Arc::clone(ledger);
    ResourcePool::with_observer(
        move || {
            let id = ledger.created.fetch_add(1, Ordering::SeqCst);
            Ok(Connection {
                id,
                ledger: Arc::clone(&ledger),
                in_use: Arc::new(AtomicBool::new(false)),
            })
        },
        capacity,
        recorder.clone(),
    )
    .unwrap()
}

#[test]
fn test_workers_share_pool() {
    let ledger = Arc::new(Ledger::default());
    let recorder = Arc::new(RecordingObserver::new());
    let pool = connection_pool(4, &ledger, &recorder);
    let max_available = AtomicUsize::new(0);

    thread::scope(|s| {
        for _ in 0..16 {
            s.spawn(|| {
                for _ in 0..200 {
                    let conn = pool.acquire().unwrap();
                    conn.query();
                    pool.release(conn);
                    max_available.fetch_max(pool.available(), Ordering::SeqCst);
                }
            });
        }
    });

    assert!(max_available.load(Ordering::SeqCst) <= pool.capacity());

    let stats = pool.stats();
    assert_eq!(stats.acquired(), 16 * 200);
    assert_eq!(stats.released, 16 * 200);
    assert_eq!(stats.created, ledger.created.load(Ordering::SeqCst));

    // Everything not buffered was discarded on overflow.
    let buffered_now = pool.available();
    assert_eq!(
        ledger.closed.load(Ordering::SeqCst),
        stats.created - buffered_now,
        "{}",
        ledger
    );

    pool.close();
    assert_eq!(ledger.closed.load(Ordering::SeqCst), stats.created);
    assert_eq!(ledger.double_closes.load(Ordering::SeqCst), 0);
    assert_eq!(recorder.discarded(DiscardReason::Drained), buffered_now);
}

#[test]
fn test_close_while_workers_are_running() {
    let ledger = Arc::new(Ledger::default());
    let recorder = Arc::new(RecordingObserver::new());
    let pool = connection_pool(2, &ledger, &recorder);
    let rejected = AtomicUsize::new(0);

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| loop {
                match pool.acquire() {
                    Ok(conn) => {
                        conn.query();
                        pool.release(conn);
                    }
                    Err(AcquireError::Closed) => {
                        rejected.fetch_add(1, Ordering::SeqCst);
                        break;
                    }
                    Err(AcquireError::Creation(err)) => panic!("factory failed: {}", err),
                }
            });
        }

        thread::sleep(Duration::from_millis(20));
        pool.close();
    });

    assert!(pool.is_closed());
    assert_eq!(rejected.load(Ordering::SeqCst), 8);
    assert_eq!(pool.available(), 0);

    // Drained, overflowed or released after close: every connection was
    // closed exactly once.
    assert_eq!(
        ledger.closed.load(Ordering::SeqCst),
        ledger.created.load(Ordering::SeqCst),
        "{}",
        ledger
    );
    assert_eq!(ledger.double_closes.load(Ordering::SeqCst), 0);
    assert_eq!(pool.stats().close_failures, 0);
    assert_eq!(
        recorder.count(|kind| matches!(kind, PoolEventKind::Closed { .. })),
        1
    );
}

#[test]
fn test_concurrent_close_calls_drain_once() {
    let ledger = Arc::new(Ledger::default());
    let recorder = Arc::new(RecordingObserver::new());
    let pool = connection_pool(3, &ledger, &recorder);

    let held: Vec<_> = (0..3).map(|_| pool.acquire().unwrap()).collect();
    for conn in held {
        pool.release(conn);
    }

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| pool.close());
        }
    });

    assert_eq!(ledger.closed.load(Ordering::SeqCst), 3);
    assert_eq!(ledger.double_closes.load(Ordering::SeqCst), 0);
    assert_eq!(
        recorder.count(|kind| matches!(kind, PoolEventKind::Closing { .. })),
        1
    );
    assert_eq!(
        recorder.count(|kind| matches!(kind, PoolEventKind::AlreadyClosed)),
        3
    );
}

#[test]
fn test_pool_shared_through_arc() {
    let ledger = Arc::new(Ledger::default());
    let recorder = Arc::new(RecordingObserver::new());
    let pool = Arc::new(connection_pool(2, &ledger, &recorder));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pool = Arc::clone(&pool);
            thread::spawn(move || {
                for _ in 0..50 {
                    let conn = pool.acquire_guard().unwrap();
                    conn.query();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stats = pool.stats();
    assert_eq!(stats.acquired(), 200);
    assert_eq!(stats.released, 200);
    assert!(pool.available() <= 2);

    drop(pool);
    assert_eq!(
        ledger.closed.load(Ordering::SeqCst),
        ledger.created.load(Ordering::SeqCst)
    );
}
