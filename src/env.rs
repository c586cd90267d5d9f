use serde::Deserialize;
use std::{collections::HashMap, sync::Arc};

/// Name of the instance every deployment registers its address under.
pub const DEFAULT_INSTANCE: &str = "default";

/// Deployment record of a single contract on one network.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRef {
    #[serde(default)]
    pub code_id: Option<String>,
    #[serde(default)]
    pub contract_addresses: HashMap<String, String>,
}

impl ContractRef {
    /// Returns the address of the named instance. If the instance was never
    /// deployed, the getter returns None.
    pub fn address(&self, instance: &str) -> Option<&str> {
        self.contract_addresses.get(instance).map(String::as_str)
    }

    /// Returns the address of the [`DEFAULT_INSTANCE`].
    pub fn default_address(&self) -> Option<&str> {
        self.address(DEFAULT_INSTANCE)
    }
}

/// Maps logical contract names to their deployment records on one network.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Refs(HashMap<String, ContractRef>);

impl Refs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the deployment record of a contract by its name.
    pub fn contract(&self, name: &str) -> Option<&ContractRef> {
        self.0.get(name)
    }

    /// Adds or replaces the record registered under `name`.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        contract: ContractRef,
    ) -> Option<ContractRef> {
        self.0.insert(name.into(), contract)
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selects one network out of a full refs document, which is keyed by
    /// network name first. A network without deployments gives an empty
    /// registry.
    pub fn for_network(document: &str, network: &str) -> Result<Self, serde_json::Error> {
        let mut networks: HashMap<String, Refs> = serde_json::from_str(document)?;
        Ok(networks.remove(network).unwrap_or_default())
    }
}

impl FromIterator<(String, ContractRef)> for Refs {
    fn from_iter<I: IntoIterator<Item = (String, ContractRef)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The runtime environment an application is wired with: a chain client, the
/// wallet used by default for executions and the contracts deployed on the
/// selected network.
#[derive(Debug)]
pub struct Env<C, W> {
    pub network: String,
    pub client: Arc<C>,
    pub default_wallet: Arc<W>,
    pub refs: Refs,
}

impl<C, W> Env<C, W> {
    pub fn new(
        network: impl Into<String>,
        client: impl Into<Arc<C>>,
        default_wallet: impl Into<Arc<W>>,
        refs: Refs,
    ) -> Self {
        Self {
            network: network.into(),
            client: client.into(),
            default_wallet: default_wallet.into(),
            refs,
        }
    }
}

impl<C, W> Clone for Env<C, W> {
    fn clone(&self) -> Self {
        Self {
            network: self.network.clone(),
            client: self.client.clone(),
            default_wallet: self.default_wallet.clone(),
            refs: self.refs.clone(),
        }
    }
}
