/// Failures this layer owns. Anything the client rejects an operation with
/// travels through the bridged promise untouched and never lands here.
#[derive(thiserror::Error, Debug)]
pub enum TetherError {
    /// `query` or `mutate` was invoked on a service that was built before
    /// any client was configured. A bootstrap ordering bug, surfaced
    /// synchronously rather than through the promise.
    #[error("Client is missing. Use Provider::default_client")]
    MissingClient,
}
