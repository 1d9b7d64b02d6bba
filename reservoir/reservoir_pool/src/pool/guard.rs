//! Scoped acquisition.

use std::fmt;
use std::ops::{Deref, DerefMut};

use reservoir_core::traits::Closer;

use super::resource::ResourcePool;

/// A resource that goes back to its pool when dropped.
///
/// Returned by [`ResourcePool::acquire_guard`]. Dereferences to the
/// resource. Use [`detach`](Self::detach) to keep the resource instead.
pub struct PooledResource<'a, R: Closer, E> {
    /// The resource itself; only `None` while the guard is being consumed
    resource: Option<R>,

    /// The pool it returns to
    pool: &'a ResourcePool<R, E>,
}

impl<'a, R: Closer, E> PooledResource<'a, R, E> {
    pub(crate) fn new(resource: R, pool: &'a ResourcePool<R, E>) -> Self {
        Self {
            resource: Some(resource),
            pool,
        }
    }

    /// Take the resource out of the guard. It will not be released
    /// automatically; the caller now owns it.
    pub fn detach(mut self) -> R {
        self.resource.take().expect("Resource missing")
    }

    /// Return the resource to the pool now.
    pub fn release(self) {
        drop(self)
    }

    /// The pool this resource came from
    pub fn pool(&self) -> &'a ResourcePool<R, E> {
        self.pool
    }
}

impl<R: Closer, E> Deref for PooledResource<'_, R, E> {
    type Target = R;

    fn deref(&self) -> &R {
        self.resource.as_ref().expect("Resource missing")
    }
}

impl<R: Closer, E> DerefMut for PooledResource<'_, R, E> {
    fn deref_mut(&mut self) -> &mut R {
        self.resource.as_mut().expect("Resource missing")
    }
}

impl<R: Closer, E> Drop for PooledResource<'_, R, E> {
    fn drop(&mut self) {
        if let Some(resource) = self.resource.take() {
            self.pool.release(resource);
        }
    }
}

impl<R: Closer + fmt::Debug, E> fmt::Debug for PooledResource<'_, R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.resource {
            Some(resource) => write!(f, "PooledResource({:?})", resource),
            None => write!(f, "PooledResource(returned)"),
        }
    }
}
