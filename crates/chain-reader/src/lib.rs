//! # chain-reader
//!
//! Typed access to account state on Substrate-based chains over WebSocket
//! JSON-RPC.
//!
//! ## Lookups
//!
//! - **Balance**: `System::Account`, reported as `free + reserved`. Accounts
//!   that were never used read as zero.
//! - **Display name**: `Identity::IdentityOf`, resolved into a
//!   [`DisplayName`] that separates "no identity", "field empty" and "field
//!   not text" from an actual name.
//! - **Chain info**: chain name plus latest finalized block number.
//!
//! ```no_run
//! use chain_reader::{Address, ReaderConfig, RpcClient, StateReader};
//!
//! # async fn run() -> chain_reader::Result<()> {
//! let client = RpcClient::connect_to(ReaderConfig::default()).await?;
//! let reader = StateReader::new(client);
//!
//! let address = Address::parse("15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5")?;
//! println!("{} planck", reader.balance(&address).await?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod address;
pub mod backend;
pub mod balance;
pub mod chain_info;
pub mod config;
pub mod error;
pub mod identity;
pub mod reader;
pub mod rpc_client;
pub mod storage;

pub use address::Address;
pub use backend::ChainBackend;
pub use balance::{format_units, AccountBalance};
pub use chain_info::{ChainInfo, ChainProperties};
pub use config::{ReaderConfig, DEFAULT_ENDPOINT};
pub use error::{Error, Result};
pub use identity::{DataKind, DisplayName, Registration};
pub use reader::{AccountSummary, StateReader};
pub use rpc_client::RpcClient;
pub use storage::StorageKey;

pub use sp_core::U256;
