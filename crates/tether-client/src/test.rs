//! Provides testing infrastructure for tether-client consumers

use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

use futures::future;

use crate::{
    ClientError, ClientFuture, GraphQlClient, MutationOptions, OperationResponse, QueryOptions,
};

/// An operation as received by a [`MockClient`], tagged with the entry
/// point it arrived through.
#[derive(Clone, Debug, PartialEq)]
pub enum ReceivedOperation {
    /// Arrived through [`GraphQlClient::query`].
    Query(QueryOptions),
    /// Arrived through [`GraphQlClient::mutate`].
    Mutate(MutationOptions),
}

/// A scripted [`GraphQlClient`] in the spirit of a mocked transport link:
/// canned outcomes keyed by document text, consumed in script order, with
/// every received operation recorded for assertion.
///
/// An operation with no scripted outcome panics; a silent default would let
/// a mis-wired test pass.
#[derive(Default)]
pub struct MockClient {
    outcomes: Mutex<HashMap<String, VecDeque<Result<OperationResponse, ClientError>>>>,
    received: Mutex<Vec<ReceivedOperation>>,
}

impl MockClient {
    /// Constructs a client with nothing scripted.
    pub fn new() -> MockClient {
        MockClient::default()
    }

    /// Scripts the next outcome for operations carrying this document.
    pub fn mock(
        self,
        document: impl Into<String>,
        outcome: Result<OperationResponse, ClientError>,
    ) -> MockClient {
        self.outcomes
            .lock()
            .expect("mock script lock")
            .entry(document.into())
            .or_default()
            .push_back(outcome);
        self
    }

    /// Every operation received so far, in arrival order.
    pub fn received(&self) -> Vec<ReceivedOperation> {
        self.received.lock().expect("mock record lock").clone()
    }

    fn take(&self, document: &str) -> Result<OperationResponse, ClientError> {
        self.outcomes
            .lock()
            .expect("mock script lock")
            .get_mut(document)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| panic!("no scripted outcome for document {document:?}"))
    }
}

impl GraphQlClient for MockClient {
    fn query(&self, options: QueryOptions) -> ClientFuture<OperationResponse> {
        let outcome = self.take(options.operation().document());
        self.received
            .lock()
            .expect("mock record lock")
            .push(ReceivedOperation::Query(options));
        Box::pin(future::ready(outcome))
    }

    fn mutate(&self, options: MutationOptions) -> ClientFuture<OperationResponse> {
        let outcome = self.take(options.operation().document());
        self.received
            .lock()
            .expect("mock record lock")
            .push(ReceivedOperation::Mutate(options));
        Box::pin(future::ready(outcome))
    }
}
