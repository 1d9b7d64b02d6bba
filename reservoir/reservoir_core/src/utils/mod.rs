//! Utility types used throughout Reservoir: log levels and configuration.

pub mod config;
pub mod logging;

pub use config::PoolConfig;
pub use logging::LogLevel;
