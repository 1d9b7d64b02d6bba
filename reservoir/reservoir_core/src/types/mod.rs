//! Core data types for Reservoir.

pub mod event;

pub use event::{DiscardReason, PoolEvent, PoolEventKind};
