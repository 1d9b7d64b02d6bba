//! Core traits that define the Reservoir interfaces.
//!
//! - `Closer`: the capability every pooled resource must provide
//! - `PoolObserver`: the sink receiving pool events

pub mod closer;
pub mod observer;

pub use closer::Closer;
pub use observer::PoolObserver;
