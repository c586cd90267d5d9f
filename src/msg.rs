pub use cosmwasm_std::{coins, Coin, Uint128};
use serde::{Deserialize, Serialize};

/// Sent once when the contract is stored and instantiated on chain.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct InstantiateMsg {
    /// Only deposits in this denomination are accepted.
    pub stable_denom: String,
    pub community_owner: String,
    pub community_dev: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Accepts exactly one coin of the configured stable denom.
    Deposit {},
    /// Owner only. Sends `amount` of the stable denom to `recipient`.
    Withdraw { recipient: String, amount: Uint128 },
    /// Hands the given role over to `value`. Only the current holder may do so.
    ChangeCommunityInfo { role: CommunityRole, value: String },
    /// Owner only. Half goes to the burn address, the rest is split 9:1 between
    /// owner and developer.
    Burn { amount: Uint128 },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommunityRole {
    Owner {},
    Developer {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    CommunityOwner {},
    CommunityDeveloper {},
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MigrateMsg {}
