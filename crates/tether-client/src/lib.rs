#![warn(missing_docs)]

//! The client-side seam consumed by the `tether` shim.
//!
//! A [`GraphQlClient`] is whatever executes GraphQL operations for the
//! application: transport, caching, and retry policy all live behind this
//! trait and are of no concern here. The shim only needs the two entry
//! points, their option types, and the future type they hand back.

use std::{future::Future, pin::Pin};

mod error;
mod options;
#[cfg(any(test, feature = "test"))]
pub mod test;

pub use error::ClientError;
pub use options::{
    typed_variables, ErrorPolicy, FetchPolicy, MutationFetchPolicy, MutationOptions, Operation,
    QueryOptions,
};

/// Re-export / renamed type alias for [`graphql_client::Response`], the
/// envelope an operation settles with: data payload plus error and
/// extension metadata, passed through unmodified.
pub type OperationResponse = graphql_client::Response<serde_json::Value>;

/// The client's native future type for an in-flight operation.
pub type ClientFuture<T> = Pin<Box<dyn Future<Output = Result<T, ClientError>> + Send>>;

/// An externally owned GraphQL client.
///
/// Implementations execute the operation however they see fit; the returned
/// future resolves with the client's own result envelope or rejects with a
/// [`ClientError`]. Handles are shared (`Arc<dyn GraphQlClient>`) and
/// read-only once handed out.
pub trait GraphQlClient: Send + Sync {
    /// Executes a query operation.
    fn query(&self, options: QueryOptions) -> ClientFuture<OperationResponse>;

    /// Executes a mutation operation.
    fn mutate(&self, options: MutationOptions) -> ClientFuture<OperationResponse>;
}
