//! Observers that write pool events to the `log` facade.

use reservoir_core::log_event;
use reservoir_core::traits::PoolObserver;
use reservoir_core::types::PoolEvent;
use reservoir_core::utils::{LogLevel, PoolConfig};

/// Log target every pool event is written under.
pub const LOG_TARGET: &str = "reservoir";

/// Observer that forwards events to whichever logger the application has
/// installed. This is the default observer of a pool.
///
/// Each event is logged at its own severity, filtered by a minimum level:
/// cleanup failures come out as warnings, shutdown as info, and the
/// per-resource traffic as debug or trace.
#[derive(Debug, Clone)]
pub struct LogObserver {
    name: String,
    min_level: LogLevel,
}

impl LogObserver {
    /// Create a log observer reporting events at `Info` and above.
    pub fn new() -> Self {
        Self::with_min_level(LogLevel::Info)
    }

    /// Create a log observer with the given minimum level.
    pub fn with_min_level(min_level: LogLevel) -> Self {
        Self {
            name: "log_observer".to_string(),
            min_level,
        }
    }

    /// Create a log observer from a pool configuration.
    pub fn from_config(config: &PoolConfig) -> Self {
        Self::with_min_level(config.log_level)
    }

    /// The minimum level this observer reports.
    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Whether an event would be written.
    pub fn enabled(&self, event: &PoolEvent) -> bool {
        event.severity().is_at_least(self.min_level)
    }

    /// Get the name of the observer
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl PoolObserver for LogObserver {
    fn record(&self, event: &PoolEvent) {
        if self.enabled(event) {
            log_event!(target: LOG_TARGET, event.severity(), "{}", event);
        }
    }
}

/// Observer that discards every event.
#[derive(Debug, Clone, Default)]
pub struct NoopObserver;

impl NoopObserver {
    /// Create a new noop observer
    pub fn new() -> Self {
        Self
    }
}

impl PoolObserver for NoopObserver {
    fn record(&self, _event: &PoolEvent) {}
}
