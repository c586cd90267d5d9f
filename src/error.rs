use thiserror::Error;

/// Thrown when the environment does not describe the contract a client is
/// bound to
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The registry has no entry for the contract
    #[error("contract `{name}` is not registered in the environment refs")]
    MissingContract { name: String },

    /// The contract is registered but the instance has no address
    #[error("contract `{name}` has no `{instance}` address")]
    MissingAddress { name: String, instance: String },
}
