use crate::{
    contract::LuncIncineratorClient,
    env::{Env, DEFAULT_INSTANCE},
    error::ConfigError,
};
use std::{ops::Deref, sync::Arc};
use tracing::debug;

/// Registry key the incinerator is deployed under.
pub const CONTRACT_NAME: &str = "lunc-incinerator";

/// The incinerator client bound to an application's [`Env`].
///
/// Built once at wiring time from the environment's client, its default wallet
/// and the default address registered under [`CONTRACT_NAME`]. It dereferences
/// to [`LuncIncineratorClient`], so every contract method is available on it,
/// and keeps the environment around for callers that need more of it.
///
/// ```
/// use lunc_incinerator::{
///     mock::{MockClient, MockWallet},
///     Env, LuncIncinerator, Refs,
/// };
/// use std::sync::Arc;
///
/// let refs = Refs::for_network(
///     r#"{"localterra":{"lunc-incinerator":{"contractAddresses":{"default":"terra1incinerator"}}}}"#,
///     "localterra",
/// )?;
/// let env =
///     Arc::new(Env::new("localterra", MockClient::new(), MockWallet::new("terra1me"), refs));
///
/// let incinerator = LuncIncinerator::new(env.clone())?;
/// assert_eq!(incinerator.address(), "terra1incinerator");
/// assert!(Arc::ptr_eq(incinerator.env(), &env));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct LuncIncinerator<C, W> {
    env: Arc<Env<C, W>>,
    client: LuncIncineratorClient<C, W>,
}

impl<C, W> Clone for LuncIncinerator<C, W> {
    fn clone(&self) -> Self {
        Self { env: self.env.clone(), client: self.client.clone() }
    }
}

impl<C, W> Deref for LuncIncinerator<C, W> {
    type Target = LuncIncineratorClient<C, W>;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl<C, W> LuncIncinerator<C, W> {
    /// Binds the incinerator deployed in `env`.
    ///
    /// Fails without building a client when the refs have no
    /// [`CONTRACT_NAME`] entry or the entry has no default address.
    pub fn new(env: Arc<Env<C, W>>) -> Result<Self, ConfigError> {
        let contract = env
            .refs
            .contract(CONTRACT_NAME)
            .ok_or_else(|| ConfigError::MissingContract { name: CONTRACT_NAME.to_owned() })?;
        let address =
            contract.default_address().ok_or_else(|| ConfigError::MissingAddress {
                name: CONTRACT_NAME.to_owned(),
                instance: DEFAULT_INSTANCE.to_owned(),
            })?;

        debug!(network = %env.network, address, "binding {}", CONTRACT_NAME);

        let client = LuncIncineratorClient::new(
            Arc::clone(&env.client),
            Arc::clone(&env.default_wallet),
            address,
        );
        Ok(Self { env, client })
    }

    /// The environment this client was built from
    pub fn env(&self) -> &Arc<Env<C, W>> {
        &self.env
    }

    /// The underlying contract client
    pub fn contract(&self) -> &LuncIncineratorClient<C, W> {
        &self.client
    }

    /// Unwraps the contract client, dropping this handle's reference to the
    /// environment
    pub fn into_client(self) -> LuncIncineratorClient<C, W> {
        self.client
    }
}

impl<C, W> TryFrom<Arc<Env<C, W>>> for LuncIncinerator<C, W> {
    type Error = ConfigError;

    fn try_from(env: Arc<Env<C, W>>) -> Result<Self, Self::Error> {
        Self::new(env)
    }
}

impl<C, W> TryFrom<Env<C, W>> for LuncIncinerator<C, W> {
    type Error = ConfigError;

    fn try_from(env: Env<C, W>) -> Result<Self, Self::Error> {
        Self::new(Arc::new(env))
    }
}
