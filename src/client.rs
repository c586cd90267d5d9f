use crate::msg::Coin;
use async_trait::async_trait;
use auto_impl::auto_impl;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{error::Error, fmt::Debug};

/// A signing identity that can authorize contract executions.
///
/// Key handling stays with the implementor; the contract client only needs the
/// account address to report who sent a message.
#[auto_impl(&, Box, Arc)]
pub trait Wallet: Sync + Send + Debug {
    /// The bech32 account address of this wallet
    fn address(&self) -> String;
}

/// The transport used to reach a CosmWasm chain.
///
/// Implementors own everything below the contract layer: encoding the smart
/// query, building, signing and broadcasting the execute transaction.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[auto_impl(&, Box, Arc)]
pub trait WasmClient: Sync + Send + Debug {
    /// Error type returned by the transport
    type Error: Error + Send + Sync + 'static;

    /// Runs a smart query against `contract` and decodes the JSON answer.
    async fn query_contract_smart<Q, R>(&self, contract: &str, msg: &Q) -> Result<R, Self::Error>
    where
        Q: Serialize + Send + Sync,
        R: DeserializeOwned + Send;

    /// Signs `msg` with `wallet` and broadcasts it to `contract`, attaching `funds`.
    async fn execute_contract<W, E>(
        &self,
        wallet: &W,
        contract: &str,
        msg: &E,
        funds: &[Coin],
    ) -> Result<TxResponse, Self::Error>
    where
        W: Wallet,
        E: Serialize + Send + Sync;
}

/// The broadcast result of an execute transaction
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TxResponse {
    pub txhash: String,
    pub height: u64,
    /// Zero on success
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub raw_log: String,
}

impl TxResponse {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}
