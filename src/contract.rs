use crate::{
    call::{ContractExecute, ContractQuery},
    msg::{CommunityRole, ExecuteMsg, QueryMsg, Uint128},
};
use std::{marker::PhantomData, sync::Arc};

/// Typed client for a deployed LUNC incinerator contract.
///
/// Binds a chain client, the wallet that signs executions and the contract
/// address together. Every contract method returns a builder: queries are
/// resolved with [`ContractQuery::call`], executions are broadcast with
/// [`ContractExecute::send`].
///
/// ```no_run
/// use lunc_incinerator::{
///     coins,
///     mock::{MockClient, MockWallet},
///     LuncIncineratorClient,
/// };
///
/// # async fn foo() -> Result<(), Box<dyn std::error::Error>> {
/// let client = MockClient::new();
/// let wallet = MockWallet::new("terra1x46rqay4d3cssq8gxxvqz8xt6nwlz4td20k38v");
/// let incinerator = LuncIncineratorClient::new(
///     client,
///     wallet,
///     "terra14hj2tavq8fpesdwxxcu44rty3hh90vhujrvcmstl4zr3txmfvw9ssrc8au",
/// );
///
/// let owner: String = incinerator.community_owner().call().await?;
/// let receipt = incinerator.deposit().funds(coins(1_000_000, "uluna")).send().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct LuncIncineratorClient<C, W> {
    address: String,
    client: Arc<C>,
    wallet: Arc<W>,
}

impl<C, W> Clone for LuncIncineratorClient<C, W> {
    fn clone(&self) -> Self {
        Self {
            address: self.address.clone(),
            client: self.client.clone(),
            wallet: self.wallet.clone(),
        }
    }
}

impl<C, W> LuncIncineratorClient<C, W> {
    /// Creates a new contract client from the provided chain client, wallet and address
    pub fn new(
        client: impl Into<Arc<C>>,
        wallet: impl Into<Arc<W>>,
        address: impl Into<String>,
    ) -> Self {
        Self { address: address.into(), client: client.into(), wallet: wallet.into() }
    }

    /// Returns the contract's address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns a pointer to the contract's chain client
    pub fn client(&self) -> Arc<C> {
        self.client.clone()
    }

    /// Returns a pointer to the wallet signing executions
    pub fn wallet(&self) -> Arc<W> {
        self.wallet.clone()
    }

    /// Returns a new contract instance at `address`.
    #[must_use]
    pub fn at(&self, address: impl Into<String>) -> Self {
        let mut this = self.clone();
        this.address = address.into();
        this
    }

    /// Returns a new contract instance signing with `wallet`.
    #[must_use]
    pub fn connect<V>(&self, wallet: Arc<V>) -> LuncIncineratorClient<C, V> {
        LuncIncineratorClient { address: self.address.clone(), client: self.client.clone(), wallet }
    }

    /// Returns a query builder for an arbitrary query message.
    pub fn query<D>(&self, msg: QueryMsg) -> ContractQuery<C, D> {
        ContractQuery {
            msg,
            address: self.address.clone(),
            client: Arc::clone(&self.client),
            datatype: PhantomData,
        }
    }

    /// Returns an execute builder for an arbitrary execute message, without funds.
    pub fn execute(&self, msg: ExecuteMsg) -> ContractExecute<C, W> {
        ContractExecute {
            msg,
            funds: Vec::new(),
            address: self.address.clone(),
            client: Arc::clone(&self.client),
            wallet: Arc::clone(&self.wallet),
        }
    }

    /// The account currently holding the owner role
    pub fn community_owner(&self) -> ContractQuery<C, String> {
        self.query(QueryMsg::CommunityOwner {})
    }

    /// The account currently holding the developer role
    pub fn community_developer(&self) -> ContractQuery<C, String> {
        self.query(QueryMsg::CommunityDeveloper {})
    }

    /// Deposits the attached funds. The contract accepts exactly one non-zero
    /// coin of its stable denom; attach it with [`ContractExecute::funds`].
    pub fn deposit(&self) -> ContractExecute<C, W> {
        self.execute(ExecuteMsg::Deposit {})
    }

    pub fn withdraw(
        &self,
        recipient: impl Into<String>,
        amount: impl Into<Uint128>,
    ) -> ContractExecute<C, W> {
        self.execute(ExecuteMsg::Withdraw { recipient: recipient.into(), amount: amount.into() })
    }

    pub fn change_community_info(
        &self,
        role: CommunityRole,
        value: impl Into<String>,
    ) -> ContractExecute<C, W> {
        self.execute(ExecuteMsg::ChangeCommunityInfo { role, value: value.into() })
    }

    /// See [`BurnSplit`](crate::BurnSplit) for how the amount is distributed.
    pub fn burn(&self, amount: impl Into<Uint128>) -> ContractExecute<C, W> {
        self.execute(ExecuteMsg::Burn { amount: amount.into() })
    }
}
