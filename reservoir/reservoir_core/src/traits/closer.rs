//! The single capability a pooled resource must have.
//!
//! A pool never looks inside a resource. All it needs is a way to release
//! the underlying system resources once it decides a resource will not be
//! reused: on overflow, when released into a closed pool, and while draining
//! during shutdown.

use std::net::{Shutdown, TcpStream};

/// A resource that must be explicitly closed.
///
/// `close` consumes the resource, so it cannot be called twice on the same
/// value.
///
/// # Examples
///
/// ```
/// use reservoir_core::traits::Closer;
/// use std::convert::Infallible;
///
/// struct Session {
///     id: u32,
/// }
///
/// impl Closer for Session {
///     type Error = Infallible;
///
///     fn close(self) -> Result<(), Self::Error> {
///         println!("closing session {}", self.id);
///         Ok(())
///     }
/// }
///
/// Session { id: 7 }.close().unwrap();
/// ```
pub trait Closer: Send + 'static {
    /// Error reported when closing fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Close the resource, releasing whatever it holds.
    fn close(self) -> Result<(), Self::Error>;
}

impl Closer for TcpStream {
    type Error = std::io::Error;

    fn close(self) -> Result<(), Self::Error> {
        match self.shutdown(Shutdown::Both) {
            // The peer already hung up.
            Err(err) if err.kind() == std::io::ErrorKind::NotConnected => Ok(()),
            other => other,
        }
    }
}
