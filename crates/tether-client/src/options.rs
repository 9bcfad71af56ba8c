use buildstructor::buildstructor;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A GraphQL operation as the client receives it: document source, optional
/// operation name, and variables.
///
/// Serializes to the conventional POST body shape
/// (`query` / `operationName` / `variables`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(rename = "query")]
    document: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    operation_name: Option<String>,
    variables: Value,
}

#[buildstructor]
impl Operation {
    /// Constructs a new [`Operation`]. Variables default to `null` when not
    /// supplied.
    #[builder]
    pub fn new(
        document: String,
        operation_name: Option<String>,
        variables: Option<Value>,
    ) -> Operation {
        Operation {
            document,
            operation_name,
            variables: variables.unwrap_or_default(),
        }
    }
}

/// Builds an operation's variables value from any serializable variable set.
pub fn typed_variables<V: Serialize>(variables: V) -> Result<Value, serde_json::Error> {
    serde_json::to_value(variables)
}

/// Cache interaction modes a query may request from the client.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FetchPolicy {
    /// Serve from cache when possible, hit the network otherwise.
    CacheFirst,
    /// Serve from cache immediately, then refresh from the network.
    CacheAndNetwork,
    /// Always hit the network, updating the cache with the result.
    NetworkOnly,
    /// Never hit the network; fail if the cache cannot answer.
    CacheOnly,
    /// Always hit the network and keep the result out of the cache.
    NoCache,
    /// Hold the operation without executing it.
    Standby,
}

/// The subset of fetch policies a mutation may request.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MutationFetchPolicy {
    /// Execute against the network, updating the cache with the result.
    NetworkOnly,
    /// Execute against the network and keep the result out of the cache.
    NoCache,
}

/// How the client should surface GraphQL errors alongside data.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Reject the operation on any GraphQL error.
    None,
    /// Discard GraphQL errors and deliver whatever data arrived.
    Ignore,
    /// Deliver both data and GraphQL errors in the envelope.
    All,
}

/// Options for one query execution. The shim forwards these to the client
/// verbatim; nothing here is read, copied, or validated on the way through.
#[derive(Clone, Debug, PartialEq, Getters)]
pub struct QueryOptions {
    operation: Operation,
    fetch_policy: Option<FetchPolicy>,
    error_policy: Option<ErrorPolicy>,
}

#[buildstructor]
impl QueryOptions {
    /// Constructs a new [`QueryOptions`]
    #[builder]
    pub fn new(
        operation: Operation,
        fetch_policy: Option<FetchPolicy>,
        error_policy: Option<ErrorPolicy>,
    ) -> QueryOptions {
        QueryOptions {
            operation,
            fetch_policy,
            error_policy,
        }
    }
}

/// Options for one mutation execution, forwarded verbatim like
/// [`QueryOptions`].
#[derive(Clone, Debug, PartialEq, Getters)]
pub struct MutationOptions {
    operation: Operation,
    fetch_policy: Option<MutationFetchPolicy>,
    error_policy: Option<ErrorPolicy>,
}

#[buildstructor]
impl MutationOptions {
    /// Constructs a new [`MutationOptions`]
    #[builder]
    pub fn new(
        operation: Operation,
        fetch_policy: Option<MutationFetchPolicy>,
        error_policy: Option<ErrorPolicy>,
    ) -> MutationOptions {
        MutationOptions {
            operation,
            fetch_policy,
            error_policy,
        }
    }
}
