//! Resource pooling and reuse of expensive, closeable resources.
//!
//! - `resource`: the pool itself
//! - `guard`: a handle that releases its resource on drop
//! - `stats`: lifetime counters

pub mod guard;
pub mod resource;
pub mod stats;

pub use guard::PooledResource;
pub use resource::ResourcePool;
pub use stats::PoolStats;
