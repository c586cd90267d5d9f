use crate::{
    client::{TxResponse, Wallet, WasmClient},
    msg::{Coin, ExecuteMsg, QueryMsg},
};
use serde::de::DeserializeOwned;
use std::{fmt::Debug, marker::PhantomData, sync::Arc};
use thiserror::Error as ThisError;
use tracing::trace;
use tracing_futures::Instrument;

#[derive(ThisError, Debug)]
/// An Error which is thrown when interacting with the contract
pub enum ContractError<C: WasmClient> {
    /// Thrown when the message cannot be encoded
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    /// Thrown when a client call fails
    #[error("{0}")]
    ClientError(C::Error),

    /// Thrown when the transaction was included but the contract rejected it
    #[error("transaction {txhash} failed with code {code}: {raw_log}")]
    Reverted { txhash: String, code: u32, raw_log: String },
}

#[derive(Debug)]
#[must_use = "contract queries do nothing unless you `call` them"]
/// Helper for a smart query before submitting it to a node
pub struct ContractQuery<C, D> {
    /// The query message
    pub msg: QueryMsg,
    pub(crate) address: String,
    pub(crate) client: Arc<C>,
    pub(crate) datatype: PhantomData<D>,
}

impl<C, D> Clone for ContractQuery<C, D> {
    fn clone(&self) -> Self {
        Self {
            msg: self.msg.clone(),
            address: self.address.clone(),
            client: Arc::clone(&self.client),
            datatype: PhantomData,
        }
    }
}

impl<C, D> ContractQuery<C, D> {
    /// The contract this query is addressed to
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl<C, D> ContractQuery<C, D>
where
    C: WasmClient,
    D: DeserializeOwned + Send,
{
    /// Queries the contract state. Does not send a transaction.
    pub async fn call(&self) -> Result<D, ContractError<C>> {
        let span = tracing::trace_span!(
            "query",
            contract = %self.address,
            msg = %serde_json::to_string(&self.msg)?
        );
        async move {
            trace!("tx");
            let res: D = self
                .client
                .query_contract_smart(&self.address, &self.msg)
                .await
                .map_err(ContractError::ClientError)?;
            trace!("rx");
            Ok(res)
        }
        .instrument(span)
        .await
    }
}

#[derive(Debug)]
#[must_use = "contract executions do nothing unless you `send` them"]
/// Helper for managing an execute message before broadcasting it
pub struct ContractExecute<C, W> {
    /// The execute message
    pub msg: ExecuteMsg,
    /// Native coins sent along with the message
    pub funds: Vec<Coin>,
    pub(crate) address: String,
    pub(crate) client: Arc<C>,
    pub(crate) wallet: Arc<W>,
}

impl<C, W> Clone for ContractExecute<C, W> {
    fn clone(&self) -> Self {
        Self {
            msg: self.msg.clone(),
            funds: self.funds.clone(),
            address: self.address.clone(),
            client: Arc::clone(&self.client),
            wallet: Arc::clone(&self.wallet),
        }
    }
}

impl<C, W> ContractExecute<C, W> {
    /// The contract this message is addressed to
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Sets the coins sent along with the message
    pub fn funds(mut self, funds: impl Into<Vec<Coin>>) -> Self {
        self.funds = funds.into();
        self
    }

    /// Signs with the provided wallet instead of the client's one
    pub fn from(mut self, wallet: impl Into<Arc<W>>) -> Self {
        self.wallet = wallet.into();
        self
    }
}

impl<C, W> ContractExecute<C, W>
where
    C: WasmClient,
    W: Wallet,
{
    /// Returns the address of the wallet that will sign the message
    pub fn sender(&self) -> String {
        self.wallet.address()
    }

    /// Signs and broadcasts the message. A transaction that lands on chain
    /// with a non-zero code is reported as [`ContractError::Reverted`].
    pub async fn send(&self) -> Result<TxResponse, ContractError<C>> {
        let span = tracing::trace_span!(
            "execute",
            contract = %self.address,
            sender = %self.wallet.address(),
            msg = %serde_json::to_string(&self.msg)?
        );
        async move {
            trace!(funds = ?self.funds, "tx");
            let res = self
                .client
                .execute_contract(&*self.wallet, &self.address, &self.msg, &self.funds)
                .await
                .map_err(ContractError::ClientError)?;
            trace!(txhash = %res.txhash, height = res.height, code = res.code, "rx");
            if !res.is_success() {
                return Err(ContractError::Reverted {
                    txhash: res.txhash,
                    code: res.code,
                    raw_log: res.raw_log,
                })
            }
            Ok(res)
        }
        .instrument(span)
        .await
    }
}
