use std::sync::Arc;

use tether_client::{
    ClientFuture, GraphQlClient, MutationOptions, OperationResponse, QueryOptions,
};

use crate::{error::TetherError, host::AsyncPrimitive};

/// The injectable service application code calls.
///
/// Holds the client handle it was built with and the host's async
/// primitive. Each call is stateless: the options go to the client
/// verbatim, and the client's future comes back bridged into the host's
/// promise type so the digest cycle observes its settlement. Nothing is
/// retried, cancelled, or reordered on the way through.
pub struct Tether<P> {
    client: Option<Arc<dyn GraphQlClient>>,
    primitive: P,
}

impl<P: AsyncPrimitive> Tether<P> {
    pub(crate) fn new(client: Option<Arc<dyn GraphQlClient>>, primitive: P) -> Tether<P> {
        Tether { client, primitive }
    }

    /// Forwards a query to the client and returns the host's promise for
    /// its result.
    ///
    /// Fails fast with [`TetherError::MissingClient`] — synchronously, not
    /// through the promise — when the service was built unconfigured.
    pub fn query(
        &self,
        options: QueryOptions,
    ) -> Result<P::Promise<OperationResponse>, TetherError> {
        let client = self.check()?;
        tracing::debug!(operation_name = ?options.operation().operation_name(), "forwarding query");
        Ok(self.wrap(client.query(options)))
    }

    /// Forwards a mutation to the client. Same contract as
    /// [`Tether::query`].
    pub fn mutate(
        &self,
        options: MutationOptions,
    ) -> Result<P::Promise<OperationResponse>, TetherError> {
        let client = self.check()?;
        tracing::debug!(operation_name = ?options.operation().operation_name(), "forwarding mutation");
        Ok(self.wrap(client.mutate(options)))
    }

    fn check(&self) -> Result<&dyn GraphQlClient, TetherError> {
        self.client.as_deref().ok_or(TetherError::MissingClient)
    }

    /// Bridges the client's native future into the host's primitive: a new
    /// host promise whose settlement is driven by a task on the host loop
    /// awaiting the source. The settled value or rejection reason is the
    /// source's, exactly.
    fn wrap<T: Send + 'static>(&self, source: ClientFuture<T>) -> P::Promise<T> {
        self.primitive.promise(|settlement| {
            self.primitive.spawn(async move {
                match source.await {
                    Ok(value) => settlement.resolve(value),
                    Err(reason) => settlement.reject(reason),
                }
            });
        })
    }
}
