//! Strongly-typed identifiers.
//!
//! Each identifier is a thin wrapper around a UUID with a phantom type
//! parameter, so identifiers for different entities cannot be mixed up.
//!
//! # Examples
//!
//! ```
//! use reservoir_core::id::PoolId;
//!
//! let pool_id = PoolId::new();
//! assert_ne!(pool_id, PoolId::new());
//! assert!(pool_id.to_string().starts_with(&pool_id.short()));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// A type-safe identifier based on UUID.
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    uuid: Uuid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create a new random identifier.
    pub fn new() -> Self {
        Self {
            uuid: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    /// The first eight hex digits, used as a compact label in log lines.
    pub fn short(&self) -> String {
        let mut s = self.uuid.simple().to_string();
        s.truncate(8);
        s
    }
}

// Manual impls: deriving would put bounds on `T`, which is only a marker.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uuid)
    }
}

/// Marker type for pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolMarker;
/// Identifier for a pool.
pub type PoolId = Id<PoolMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_new() {
        let id1 = PoolId::new();
        let id2 = PoolId::new();
        assert_ne!(id1, id2, "Generated IDs should be unique");
    }

    #[test]
    fn test_id_display() {
        let id = PoolId::new();
        assert_eq!(id.to_string().len(), 36, "UUID string should be 36 characters");
        assert_eq!(id.short().len(), 8);
        assert!(id.to_string().replace('-', "").starts_with(&id.short()));
    }

    #[test]
    fn test_id_serde() {
        let id = PoolId::new();
        let serialized = serde_json::to_string(&id).unwrap();
        assert_eq!(serialized, format!("\"{}\"", id));
        let deserialized: PoolId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(id, deserialized);
    }
}
