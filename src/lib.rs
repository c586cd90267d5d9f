#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![deny(unsafe_code, rustdoc::broken_intra_doc_links)]

mod client;
pub use client::{TxResponse, Wallet, WasmClient};

mod env;
pub use env::{ContractRef, Env, Refs, DEFAULT_INSTANCE};

mod error;
pub use error::ConfigError;

mod msg;
pub use msg::{
    coins, Coin, CommunityRole, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, Uint128,
};

mod call;
pub use call::{ContractError, ContractExecute, ContractQuery};

mod contract;
pub use contract::LuncIncineratorClient;

mod incinerator;
pub use incinerator::{LuncIncinerator, CONTRACT_NAME};

mod burn;
pub use burn::BurnSplit;

pub mod mock;
