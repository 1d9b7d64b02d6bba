#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

//! # Reservoir Pool
//!
//! A bounded, non-blocking pool that lets many threads share a small set of
//! expensive, explicitly closed resources such as connections.
//!
//! ```
//! use reservoir_pool::{Closer, ResourcePool};
//! use std::convert::Infallible;
//!
//! #[derive(Debug)]
//! struct Conn(u32);
//!
//! impl Closer for Conn {
//!     type Error = Infallible;
//!
//!     fn close(self) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! let pool = ResourcePool::new(|| Ok::<_, Infallible>(Conn(1)), 2).unwrap();
//!
//! let conn = pool.acquire().unwrap();
//! pool.release(conn);
//! assert_eq!(pool.available(), 1);
//!
//! pool.close();
//! assert!(pool.acquire().unwrap_err().is_closed());
//! ```
//!
//! ## Integration with Other Reservoir Crates
//!
//! - **reservoir_core**: errors, the `Closer` capability, events, configuration
//! - **reservoir_observability**: observers receiving pool events

/// Resource pooling and reuse of expensive resources
pub mod pool;

// Re-export key types for easier access
pub use pool::{PoolStats, PooledResource, ResourcePool};
pub use reservoir_core::error::{AcquireError, ConfigError};
pub use reservoir_core::traits::{Closer, PoolObserver};
pub use reservoir_core::utils::PoolConfig;
