//! In-memory chain client used in test environments.

use crate::{
    client::{TxResponse, Wallet, WasmClient},
    msg::Coin,
};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};
use thiserror::Error;

/// A request observed by [`MockClient`], with the message in its JSON form.
#[derive(Clone, Debug, PartialEq)]
pub enum MockRequest {
    Query { contract: String, msg: Value },
    Execute { sender: String, contract: String, msg: Value, funds: Vec<Coin> },
}

impl MockRequest {
    pub fn query<Q: Serialize>(contract: &str, msg: &Q) -> Result<Self, MockError> {
        Ok(Self::Query { contract: contract.to_owned(), msg: serde_json::to_value(msg)? })
    }

    pub fn execute<E: Serialize>(
        sender: &str,
        contract: &str,
        msg: &E,
        funds: &[Coin],
    ) -> Result<Self, MockError> {
        Ok(Self::Execute {
            sender: sender.to_owned(),
            contract: contract.to_owned(),
            msg: serde_json::to_value(msg)?,
            funds: funds.to_vec(),
        })
    }
}

/// Helper response type for `MockClient`.
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Successful response, decoded into whatever the caller expects
    Value(Value),

    /// The node refused the request with this message
    Error(String),
}

#[derive(Clone, Debug, Default)]
/// Records every request and answers them, in order, from a queue of responses.
pub struct MockClient {
    requests: Arc<Mutex<VecDeque<MockRequest>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

impl MockClient {
    /// Instantiates a mock client
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes the data to the responses
    pub fn push<T: Serialize>(&self, data: T) -> Result<(), MockError> {
        let value = serde_json::to_value(data)?;
        self.responses.lock().unwrap().push_back(MockResponse::Value(value));
        Ok(())
    }

    /// Pushes the data or error to the responses
    pub fn push_response(&self, response: MockResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Checks that the oldest unchecked request is `expected`
    pub fn assert_request(&self, expected: MockRequest) -> Result<(), MockError> {
        let request = self.requests.lock().unwrap().pop_front().ok_or(MockError::EmptyRequests)?;
        assert_eq!(request, expected);
        Ok(())
    }

    /// Number of requests not yet checked with [`MockClient::assert_request`]
    pub fn pending_requests(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn respond<R: DeserializeOwned>(&self, request: MockRequest) -> Result<R, MockError> {
        self.requests.lock().unwrap().push_back(request);
        let response =
            self.responses.lock().unwrap().pop_front().ok_or(MockError::EmptyResponses)?;
        match response {
            MockResponse::Value(value) => Ok(serde_json::from_value(value)?),
            MockResponse::Error(message) => Err(MockError::Rejected(message)),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl WasmClient for MockClient {
    type Error = MockError;

    async fn query_contract_smart<Q, R>(&self, contract: &str, msg: &Q) -> Result<R, MockError>
    where
        Q: Serialize + Send + Sync,
        R: DeserializeOwned + Send,
    {
        let request = MockRequest::query(contract, msg)?;
        self.respond(request)
    }

    async fn execute_contract<W, E>(
        &self,
        wallet: &W,
        contract: &str,
        msg: &E,
        funds: &[Coin],
    ) -> Result<TxResponse, MockError>
    where
        W: Wallet,
        E: Serialize + Send + Sync,
    {
        let request = MockRequest::execute(&wallet.address(), contract, msg, funds)?;
        self.respond(request)
    }
}

/// A wallet with a fixed address and no key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockWallet(String);

impl MockWallet {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }
}

impl Wallet for MockWallet {
    fn address(&self) -> String {
        self.0.clone()
    }
}

#[derive(Error, Debug)]
/// Errors for the `MockClient`
pub enum MockError {
    /// (De)Serialization error
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    /// Empty requests array
    #[error("empty requests array, please make some requests")]
    EmptyRequests,

    /// Empty responses array
    #[error("empty responses array, please push some responses")]
    EmptyResponses,

    /// Custom node error
    #[error("request rejected: {0}")]
    Rejected(String),
}
