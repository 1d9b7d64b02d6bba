//! Pool events.
//!
//! Every notable pool operation produces a [`PoolEvent`]. Events identify the
//! pool they came from, carry a timestamp, and serialize to JSON so they can
//! be shipped to any structured sink.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::id::PoolId;
use crate::utils::LogLevel;

/// Why a resource was closed instead of being buffered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscardReason {
    /// Released into a pool whose buffer was already full.
    Overflow,

    /// Released into a pool that had already been closed.
    Closed,

    /// Drained from the buffer while the pool was closing.
    Drained,
}

impl DiscardReason {
    /// Get the name of this reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overflow => "overflow",
            Self::Closed => "closed",
            Self::Drained => "drained",
        }
    }
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PoolEventKind {
    /// The buffer was empty and the factory produced a new resource.
    Created,

    /// The buffer was empty and the factory failed.
    CreationFailed {
        /// Display form of the factory error
        error: String,
    },

    /// A buffered resource was handed out.
    Reused,

    /// A released resource was placed in the buffer.
    Buffered {
        /// Resources in the buffer right after insertion
        available: usize,
    },

    /// A resource was closed instead of being buffered.
    Discarded {
        /// Why it was discarded
        reason: DiscardReason,

        /// Display form of the close error, if closing failed
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },

    /// `acquire` found the buffer closed.
    AcquireRejected,

    /// `close` marked the pool closed and is about to drain it.
    Closing {
        /// Resources buffered when the pool was marked closed
        buffered: usize,
    },

    /// `close` finished draining.
    Closed {
        /// Resources closed during the drain
        drained: usize,
    },

    /// `close` was called on a pool that was already closed.
    AlreadyClosed,
}

impl PoolEventKind {
    /// The log level this kind of event is reported at.
    pub fn severity(&self) -> LogLevel {
        match self {
            Self::CreationFailed { .. } => LogLevel::Error,
            Self::Discarded { error: Some(_), .. } => LogLevel::Warning,
            Self::AcquireRejected | Self::AlreadyClosed => LogLevel::Warning,
            Self::Closing { .. } | Self::Closed { .. } => LogLevel::Info,
            Self::Created | Self::Discarded { error: None, .. } => LogLevel::Debug,
            Self::Reused | Self::Buffered { .. } => LogLevel::Trace,
        }
    }
}

impl fmt::Display for PoolEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "Acquire: new resource"),
            Self::CreationFailed { error } => write!(f, "Acquire: factory failed: {}", error),
            Self::Reused => write!(f, "Acquire: reusing buffered resource"),
            Self::Buffered { available } => {
                write!(f, "Release: in queue ({} available)", available)
            }
            Self::Discarded {
                reason,
                error: None,
            } => write!(f, "Closing resource ({})", reason),
            Self::Discarded {
                reason,
                error: Some(error),
            } => write!(f, "Closing resource ({}) failed: {}", reason, error),
            Self::AcquireRejected => write!(f, "Acquire: pool has been closed"),
            Self::Closing { buffered } => {
                write!(f, "Closing pool ({} buffered resources)", buffered)
            }
            Self::Closed { drained } => write!(f, "Pool closed ({} resources drained)", drained),
            Self::AlreadyClosed => write!(f, "Pool already closed"),
        }
    }
}

/// An event emitted by a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolEvent {
    /// The pool that emitted the event.
    pub pool_id: PoolId,

    /// The pool's human-readable name.
    pub pool_name: String,

    /// When the event was recorded.
    pub timestamp: DateTime<Utc>,

    /// What happened.
    #[serde(flatten)]
    pub kind: PoolEventKind,
}

impl PoolEvent {
    /// Create an event stamped with the current time.
    pub fn new(pool_id: PoolId, pool_name: impl Into<String>, kind: PoolEventKind) -> Self {
        Self {
            pool_id,
            pool_name: pool_name.into(),
            timestamp: Utc::now(),
            kind,
        }
    }

    /// The log level of this event.
    pub fn severity(&self) -> LogLevel {
        self.kind.severity()
    }

    /// Convert the event to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for PoolEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.pool_name, self.kind)
    }
}
