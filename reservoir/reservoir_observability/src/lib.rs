//! # Reservoir Observability
//!
//! Implementations of [`PoolObserver`](reservoir_core::traits::PoolObserver),
//! the sink a pool reports its events to.
//!
//! - [`LogObserver`]: writes events to the `log` facade; the pool default
//! - [`RecordingObserver`]: keeps events in memory for assertions
//! - [`FanoutObserver`]: forwards events to several observers
//! - [`NoopObserver`]: discards everything

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fanout;
pub mod logging;
pub mod recording;

pub use fanout::FanoutObserver;
pub use logging::{LogObserver, NoopObserver, LOG_TARGET};
pub use recording::RecordingObserver;
