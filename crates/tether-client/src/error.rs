/// Failures a [`GraphQlClient`](crate::GraphQlClient) can reject an
/// operation with. The shim forwards these unchanged; only test
/// infrastructure and application code ever look inside.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// The transport underneath the client failed before a response arrived.
    #[error("Transport error: {:?}", .0)]
    Transport(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// The client could not decode what the server sent back.
    #[error("Decode error: {:?}", .0)]
    Decode(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// The server answered with GraphQL errors and the client chose to
    /// reject rather than deliver a partial envelope.
    #[error("GraphQL error: {}", messages(.0))]
    GraphQl(Vec<graphql_client::Error>),
    /// The operation was dropped by the client without ever settling.
    #[error("Operation terminated without a result")]
    Terminated,
}

fn messages(errors: &[graphql_client::Error]) -> String {
    errors
        .iter()
        .map(|error| error.message.clone())
        .collect::<Vec<String>>()
        .join("\n")
}

impl ClientError {
    /// Whether this is a transport-level failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
    /// Whether the server rejected the operation with GraphQL errors.
    pub fn is_graphql(&self) -> bool {
        matches!(self, ClientError::GraphQl(_))
    }
}
