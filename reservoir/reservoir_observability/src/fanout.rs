//! Delivering one event stream to several observers.

use std::sync::Arc;

use reservoir_core::traits::PoolObserver;
use reservoir_core::types::PoolEvent;

/// Observer that forwards each event to every inner observer, in the order
/// they were added.
#[derive(Clone, Default)]
pub struct FanoutObserver {
    observers: Vec<Arc<dyn PoolObserver>>,
}

impl FanoutObserver {
    /// Create a fanout with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer.
    pub fn with(mut self, observer: Arc<dyn PoolObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Number of inner observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether there are no inner observers.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl PoolObserver for FanoutObserver {
    fn record(&self, event: &PoolEvent) {
        for observer in &self.observers {
            observer.record(event);
        }
    }
}
