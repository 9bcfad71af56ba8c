use std::sync::Arc;

use tether_client::GraphQlClient;

use crate::{host::AsyncPrimitive, service::Tether};

/// Single point of configuration for the underlying client and the sole
/// factory for [`Tether`] services.
///
/// Application bootstrap stores a client here exactly once, before the host
/// starts resolving services. The client is trusted as handed over; nothing
/// about it is validated.
#[derive(Default)]
pub struct Provider {
    client: Option<Arc<dyn GraphQlClient>>,
}

impl Provider {
    /// An unconfigured provider.
    pub fn new() -> Provider {
        Provider::default()
    }

    /// Stores the client every subsequently built service will use.
    ///
    /// Calling this again replaces the stored handle outright; services
    /// already built keep the handle they were built with.
    pub fn default_client(&mut self, client: Arc<dyn GraphQlClient>) {
        if self.client.is_some() {
            tracing::debug!("replacing previously configured client");
        }
        self.client = Some(client);
    }

    /// Builds one service over the currently stored client and the host's
    /// async primitive. Invoked by the host once per injection.
    ///
    /// Always succeeds — a missing client surfaces at call time, not here,
    /// and is never lazily re-read from the provider afterwards.
    pub fn build<P: AsyncPrimitive>(&self, primitive: P) -> Tether<P> {
        tracing::debug!(configured = self.client.is_some(), "building service");
        Tether::new(self.client.clone(), primitive)
    }
}
