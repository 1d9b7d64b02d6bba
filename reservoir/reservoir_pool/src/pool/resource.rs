//! Resource pooling for expensive, explicitly closed resources like
//! connections.
//!
//! A [`ResourcePool`] keeps up to `capacity` idle resources for reuse.
//! Acquiring never waits: it takes a buffered resource if there is one and
//! otherwise asks the factory for a new one, so the number of resources alive
//! at once is not capped, only the number kept idle. Releasing buffers the
//! resource, or closes it when the buffer is full or the pool is closed.
//! Closing drains the buffer and closes everything in it.
//!
//! The buffer is a bounded channel. Acquire reads the receiving half without
//! taking the pool lock. The sending half lives behind the lock and is
//! dropped on close, which makes the channel report disconnection once the
//! drain has emptied it; from then on every acquire fails with
//! [`AcquireError::Closed`].

use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError, TrySendError};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

use reservoir_core::error::{AcquireError, ConfigError};
use reservoir_core::id::PoolId;
use reservoir_core::traits::{Closer, PoolObserver};
use reservoir_core::types::{DiscardReason, PoolEvent, PoolEventKind};
use reservoir_core::utils::PoolConfig;
use reservoir_observability::LogObserver;

use super::guard::PooledResource;
use super::stats::{PoolCounters, PoolStats};

type Factory<R, E> = Box<dyn Fn() -> Result<R, E> + Send + Sync>;

/// A bounded pool of reusable resources.
///
/// `R` is the resource type and `E` the error type of the factory. The pool
/// is `Sync`; share it between threads by reference or through an `Arc`.
pub struct ResourcePool<R: Closer, E> {
    /// Identity used in events
    id: PoolId,

    /// Human-readable name used in events
    name: String,

    /// Maximum number of buffered resources
    capacity: usize,

    /// Sending half of the buffer. `None` once the pool is closed.
    inlet: Mutex<Option<Sender<R>>>,

    /// Receiving half of the buffer
    outlet: Receiver<R>,

    /// Creates resources when the buffer is empty
    factory: Factory<R, E>,

    /// Receives every event
    observer: Arc<dyn PoolObserver>,

    /// Lifetime counters
    counters: PoolCounters,
}

impl<R: Closer, E> ResourcePool<R, E> {
    /// Create a pool buffering up to `capacity` resources, reporting to a
    /// [`LogObserver`].
    ///
    /// Fails with [`ConfigError::InvalidCapacity`] when `capacity` is zero.
    pub fn new<F>(factory: F, capacity: usize) -> Result<Self, ConfigError>
    where
        F: Fn() -> Result<R, E> + Send + Sync + 'static,
    {
        Self::with_observer(factory, capacity, Arc::new(LogObserver::new()))
    }

    /// Create a pool reporting to the given observer.
    pub fn with_observer<F>(
        factory: F,
        capacity: usize,
        observer: Arc<dyn PoolObserver>,
    ) -> Result<Self, ConfigError>
    where
        F: Fn() -> Result<R, E> + Send + Sync + 'static,
    {
        Self::with_config(factory, PoolConfig::with_capacity(capacity), observer)
    }

    /// Create a pool from a configuration, reporting to a [`LogObserver`]
    /// filtered at the configured level.
    pub fn from_config<F>(factory: F, config: PoolConfig) -> Result<Self, ConfigError>
    where
        F: Fn() -> Result<R, E> + Send + Sync + 'static,
    {
        let observer = Arc::new(LogObserver::from_config(&config));
        Self::with_config(factory, config, observer)
    }

    /// Create a pool from a configuration, reporting to the given observer.
    pub fn with_config<F>(
        factory: F,
        config: PoolConfig,
        observer: Arc<dyn PoolObserver>,
    ) -> Result<Self, ConfigError>
    where
        F: Fn() -> Result<R, E> + Send + Sync + 'static,
    {
        config.validate()?;

        let id = PoolId::new();
        let name = config
            .name
            .unwrap_or_else(|| format!("pool-{}", id.short()));
        let (inlet, outlet) = bounded(config.capacity);

        Ok(Self {
            id,
            name,
            capacity: config.capacity,
            inlet: Mutex::new(Some(inlet)),
            outlet,
            factory: Box::new(factory),
            observer,
            counters: PoolCounters::default(),
        })
    }

    /// Return a resource to the pool.
    ///
    /// The resource is buffered if the pool is open and has room. Otherwise
    /// it is closed; a close failure is reported to the observer and never
    /// to the caller. Never blocks on buffer space.
    pub fn release(&self, resource: R) {
        PoolCounters::bump(&self.counters.released);

        // Decide under the lock, close outside it.
        let outcome = {
            let inlet = self.inlet.lock();
            match inlet.as_ref() {
                None => Err((resource, DiscardReason::Closed)),
                Some(sender) => match sender.try_send(resource) {
                    Ok(()) => Ok(self.outlet.len()),
                    Err(TrySendError::Full(resource)) => Err((resource, DiscardReason::Overflow)),
                    Err(TrySendError::Disconnected(resource)) => {
                        Err((resource, DiscardReason::Closed))
                    }
                },
            }
        };

        match outcome {
            Ok(available) => {
                PoolCounters::bump(&self.counters.buffered);
                self.emit(PoolEventKind::Buffered { available });
            }
            Err((resource, reason)) => self.discard(resource, reason),
        }
    }

    /// Close the pool and every resource it is holding.
    ///
    /// Idempotent: later calls only report [`PoolEventKind::AlreadyClosed`].
    /// Resources currently held by callers are not waited for; releasing
    /// them afterwards closes them.
    pub fn close(&self) {
        // Mark and extract under the lock; report and close outside it.
        let drained: Option<Vec<R>> = {
            let mut inlet = self.inlet.lock();
            inlet.take().map(|sender| {
                // Stop accepting writes before draining, or a resource could
                // slip in behind the drain.
                drop(sender);
                self.outlet.try_iter().collect()
            })
        };

        let drained = match drained {
            Some(drained) => drained,
            None => {
                self.emit(PoolEventKind::AlreadyClosed);
                return;
            }
        };

        let count = drained.len();
        self.emit(PoolEventKind::Closing { buffered: count });
        for resource in drained {
            self.discard(resource, DiscardReason::Drained);
        }
        self.emit(PoolEventKind::Closed { drained: count });
    }

    /// Get the pool's identifier
    pub fn id(&self) -> PoolId {
        self.id
    }

    /// Get the pool's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum number of resources the pool buffers
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the current number of buffered resources
    pub fn available(&self) -> usize {
        self.outlet.len()
    }

    /// Whether `close` has run
    pub fn is_closed(&self) -> bool {
        self.inlet.lock().is_none()
    }

    /// Get the current statistics for this pool
    pub fn stats(&self) -> PoolStats {
        self.counters.snapshot()
    }

    fn discard(&self, resource: R, reason: DiscardReason) {
        PoolCounters::bump(&self.counters.discarded);
        let error = match resource.close() {
            Ok(()) => None,
            Err(err) => {
                PoolCounters::bump(&self.counters.close_failures);
                Some(err.to_string())
            }
        };
        self.emit(PoolEventKind::Discarded { reason, error });
    }

    fn emit(&self, kind: PoolEventKind) {
        self.observer
            .record(&PoolEvent::new(self.id, self.name.as_str(), kind));
    }
}

/// Acquisition needs `E: Display`: a factory failure is returned to the
/// caller as-is and also reported to the observer as
/// [`PoolEventKind::CreationFailed`], which carries the error's message.
/// Factory errors without a `Display` impl can be wrapped in a type that
/// provides one.
impl<R: Closer, E: fmt::Display> ResourcePool<R, E> {
    /// Take a resource from the pool.
    ///
    /// Returns a buffered resource if one is available, otherwise the result
    /// of calling the factory. Never waits. Factory errors are returned in
    /// [`AcquireError::Creation`] as they are, without retry. Fails with
    /// [`AcquireError::Closed`] once the pool has been closed.
    ///
    /// The pool does not track the resource while the caller holds it; hand
    /// it back with [`release`](Self::release).
    pub fn acquire(&self) -> Result<R, AcquireError<E>> {
        match self.outlet.try_recv() {
            Ok(resource) => {
                PoolCounters::bump(&self.counters.reused);
                self.emit(PoolEventKind::Reused);
                Ok(resource)
            }
            Err(TryRecvError::Disconnected) => {
                PoolCounters::bump(&self.counters.rejected);
                self.emit(PoolEventKind::AcquireRejected);
                Err(AcquireError::Closed)
            }
            Err(TryRecvError::Empty) => match (self.factory)() {
                Ok(resource) => {
                    PoolCounters::bump(&self.counters.created);
                    self.emit(PoolEventKind::Created);
                    Ok(resource)
                }
                Err(err) => {
                    PoolCounters::bump(&self.counters.creation_failures);
                    self.emit(PoolEventKind::CreationFailed {
                        error: err.to_string(),
                    });
                    Err(AcquireError::Creation(err))
                }
            },
        }
    }

    /// Take a resource wrapped in a guard that releases it when dropped.
    pub fn acquire_guard(&self) -> Result<PooledResource<'_, R, E>, AcquireError<E>> {
        self.acquire()
            .map(|resource| PooledResource::new(resource, self))
    }
}

impl<R: Closer, E> Drop for ResourcePool<R, E> {
    fn drop(&mut self) {
        if self.inlet.get_mut().is_some() {
            self.close();
        }
    }
}

impl<R: Closer, E> fmt::Debug for ResourcePool<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourcePool")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("capacity", &self.capacity)
            .field("available", &self.available())
            .field("closed", &self.is_closed())
            .finish()
    }
}
