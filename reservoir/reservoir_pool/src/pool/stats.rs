//! Lifetime counters for a resource pool.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Statistics about a resource pool since it was created.
///
/// A snapshot: later pool activity does not change a value already taken.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    /// Resources produced by the factory
    pub created: usize,

    /// Factory calls that failed
    pub creation_failures: usize,

    /// Acquisitions served from the buffer
    pub reused: usize,

    /// Resources handed back through `release`
    pub released: usize,

    /// Released resources placed in the buffer
    pub buffered: usize,

    /// Resources closed by the pool (overflow, closed pool, drain)
    pub discarded: usize,

    /// Discards whose close call failed
    pub close_failures: usize,

    /// Acquisitions rejected because the pool was closed
    pub rejected: usize,
}

impl PoolStats {
    /// Successful acquisitions, whether reused or freshly created.
    pub fn acquired(&self) -> usize {
        self.created + self.reused
    }
}

/// The live counters behind [`PoolStats`].
#[derive(Debug, Default)]
pub(crate) struct PoolCounters {
    pub(crate) created: AtomicUsize,
    pub(crate) creation_failures: AtomicUsize,
    pub(crate) reused: AtomicUsize,
    pub(crate) released: AtomicUsize,
    pub(crate) buffered: AtomicUsize,
    pub(crate) discarded: AtomicUsize,
    pub(crate) close_failures: AtomicUsize,
    pub(crate) rejected: AtomicUsize,
}

impl PoolCounters {
    pub(crate) fn bump(counter: &AtomicUsize) {
        counter.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn snapshot(&self) -> PoolStats {
        PoolStats {
            created: self.created.load(Ordering::SeqCst),
            creation_failures: self.creation_failures.load(Ordering::SeqCst),
            reused: self.reused.load(Ordering::SeqCst),
            released: self.released.load(Ordering::SeqCst),
            buffered: self.buffered.load(Ordering::SeqCst),
            discarded: self.discarded.load(Ordering::SeqCst),
            close_failures: self.close_failures.load(Ordering::SeqCst),
            rejected: self.rejected.load(Ordering::SeqCst),
        }
    }
}
