//! In-memory event recording.
//!
//! [`RecordingObserver`] keeps every event it receives so tests can assert
//! on exactly what a pool did, without capturing global log output.

use parking_lot::Mutex;

use reservoir_core::traits::PoolObserver;
use reservoir_core::types::{DiscardReason, PoolEvent, PoolEventKind};

/// Observer that stores events in memory.
///
/// Share it with a pool through an `Arc` and keep a clone to inspect.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<PoolEvent>>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of every event recorded so far, oldest first.
    pub fn events(&self) -> Vec<PoolEvent> {
        self.events.lock().clone()
    }

    /// The kinds of every event recorded so far, oldest first.
    pub fn kinds(&self) -> Vec<PoolEventKind> {
        self.events
            .lock()
            .iter()
            .map(|event| event.kind.clone())
            .collect()
    }

    /// Number of recorded events matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&PoolEventKind) -> bool) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| predicate(&event.kind))
            .count()
    }

    /// Number of resources discarded for `reason`.
    pub fn discarded(&self, reason: DiscardReason) -> usize {
        self.count(|kind| {
            matches!(kind, PoolEventKind::Discarded { reason: r, .. } if *r == reason)
        })
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<PoolEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl PoolObserver for RecordingObserver {
    fn record(&self, event: &PoolEvent) {
        self.events.lock().push(event.clone());
    }
}
