//! The seam to the host runtime's asynchronous machinery.
//!
//! The host tracks completion through its own promise type; constructing
//! one takes a settlement callback, the same shape as any
//! executor-style promise constructor. Client futures are pull-based, so
//! subscribing to one additionally needs a slot on the host's event loop —
//! [`AsyncPrimitive::spawn`] is that hook.

use std::future::Future;

use tether_client::ClientError;

/// One-shot settlement handle for a host promise.
///
/// Built by the host from a single settle function; presents the
/// resolve/reject pair the bridge drives. Consumed on first use and pinned
/// to the host's thread.
pub struct Settlement<T> {
    settle: Box<dyn FnOnce(Result<T, ClientError>)>,
}

impl<T> Settlement<T> {
    /// Wraps the host's settle function.
    pub fn from_fn(settle: impl FnOnce(Result<T, ClientError>) + 'static) -> Settlement<T> {
        Settlement {
            settle: Box::new(settle),
        }
    }

    /// Fulfills the promise with `value`.
    pub fn resolve(self, value: T) {
        (self.settle)(Ok(value));
    }

    /// Rejects the promise with `reason`.
    pub fn reject(self, reason: ClientError) {
        (self.settle)(Err(reason));
    }
}

/// The host runtime's completion primitive, seen from the producing side.
///
/// Implemented by whatever handle the host injects at service-build time.
pub trait AsyncPrimitive {
    /// The host's own promise type — the one artifact its change detection
    /// reacts to.
    type Promise<T: Send + 'static>;

    /// The native promise constructor: builds a promise and hands its
    /// [`Settlement`] to `executor`. The executor is invoked before
    /// `promise` returns.
    fn promise<T, F>(&self, executor: F) -> Self::Promise<T>
    where
        T: Send + 'static,
        F: FnOnce(Settlement<T>);

    /// Schedules `task` onto the host's event loop.
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + 'static;
}
