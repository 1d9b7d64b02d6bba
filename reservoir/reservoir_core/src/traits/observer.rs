//! Observer trait definitions.
//!
//! A pool reports everything notable it does (creating, reusing, buffering
//! and discarding resources, shutting down) to an observer injected at
//! construction. Cleanup failures, which never propagate to callers of
//! `release` or `close`, are visible only through this channel.

use std::sync::Arc;

use crate::types::PoolEvent;

/// Sink for pool events.
///
/// Implementations are called from whichever thread performs the operation,
/// never while the pool holds its internal lock, so `record` may query the
/// pool. It should still be cheap: it runs inline with every operation.
pub trait PoolObserver: Send + Sync {
    /// Record one event.
    fn record(&self, event: &PoolEvent);
}

impl<O: PoolObserver + ?Sized> PoolObserver for Arc<O> {
    fn record(&self, event: &PoolEvent) {
        (**self).record(event)
    }
}

impl<O: PoolObserver + ?Sized> PoolObserver for Box<O> {
    fn record(&self, event: &PoolEvent) {
        (**self).record(event)
    }
}
