//! # Reservoir Core
//!
//! `reservoir_core` provides the building blocks shared by the Reservoir
//! crates: error types, identifiers, the `Closer` capability every pooled
//! resource implements, the observer interface, pool events and
//! configuration.
//!
//! ## Pool Model
//!
//! A pool buffers up to `capacity` idle resources for reuse. Acquiring never
//! waits: it hands out a buffered resource or asks the factory for a new one.
//! Releasing either buffers the resource or closes it when the buffer is full
//! or the pool has been closed. Closing drains and closes everything still
//! buffered. The pool does not track resources while callers hold them.
//!
//! ## Crate Structure
//!
//! - **error**: Error types for construction and acquisition
//! - **id**: Strongly-typed identifier types
//! - **traits**: `Closer` and `PoolObserver`
//! - **types**: Pool events
//! - **utils**: Log levels and pool configuration
//! - **macros**: `log_event!`

pub mod error;
pub mod id;
pub mod macros;
pub mod traits;
pub mod types;
pub mod utils;

#[doc(hidden)]
pub use log as __log;

pub use error::{AcquireError, ConfigError, Error, Result};
pub use id::PoolId;
pub use traits::{Closer, PoolObserver};
pub use types::{DiscardReason, PoolEvent, PoolEventKind};
pub use utils::{LogLevel, PoolConfig};
