#![warn(missing_docs)]

//! Exposes a [`GraphQlClient`](tether_client::GraphQlClient)'s query and
//! mutation entry points as an injectable service inside a host application
//! runtime.
//!
//! The host runtime schedules re-renders off its own completion primitive,
//! not off arbitrary futures, so results coming back from the client would
//! never be observed by its digest cycle on their own. [`Tether`] bridges
//! each client future into the host's primitive: application bootstrap
//! stores a client on a [`Provider`] once, the host builds one service per
//! injection with [`Provider::build`], and every `query`/`mutate` call
//! returns a host promise that settles with exactly what the client
//! produced.
//!
//! Transport, caching, and retry all belong to the client behind the seam;
//! this crate recovers nothing and transforms nothing.

mod error;
pub mod host;
mod provider;
mod service;

pub use error::TetherError;
pub use provider::Provider;
pub use service::Tether;
