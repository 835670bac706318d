//! In-memory node used by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chain_reader::{
    balance::{AccountData, AccountInfo},
    identity::{Data, IdentityInfo, Judgement, LegacyIdentityInfo, PeopleIdentityInfo, Registration},
    storage::{identity_of_key, system_account_key},
    Address, ChainBackend, Error, Result, StorageKey,
};
use scale_codec::Encode;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

pub const ALICE: [u8; 32] = hex_literal::hex!("d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d");
pub const BOB: [u8; 32] = hex_literal::hex!("8eaf04151687736326c9fea17e25fc5287613693c912909cb226aa4794f26a48");

pub fn alice() -> Address {
    Address::from(ALICE)
}

pub fn bob() -> Address {
    Address::from(BOB)
}

/// People chain record with a single `KnownGood` judgement.
pub fn registration(display: Data) -> Registration {
    Registration {
        judgements: vec![(0, Judgement::KnownGood)],
        deposit: 1_000,
        info: IdentityInfo::People(PeopleIdentityInfo { display, ..Default::default() }),
    }
}

/// Same record in the relay-chain layout.
pub fn legacy_registration(display: Data) -> Registration {
    Registration {
        info: IdentityInfo::Legacy(LegacyIdentityInfo { display, ..Default::default() }),
        ..registration(Data::None)
    }
}

pub struct MemoryBackend {
    storage: HashMap<Vec<u8>, Vec<u8>>,
    finalized: u64,
    offline: AtomicBool,
    latency: Option<Duration>,
    storage_calls: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            storage: HashMap::new(),
            finalized: 21_000_000,
            offline: AtomicBool::new(false),
            latency: None,
            storage_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_raw(mut self, key: StorageKey, value: Vec<u8>) -> Self {
        self.storage.insert(key.as_bytes().to_vec(), value);
        self
    }

    pub fn with_balance(self, address: &Address, free: u128, reserved: u128) -> Self {
        let info = AccountInfo {
            nonce: 3,
            providers: 1,
            data: AccountData { free, reserved, ..Default::default() },
            ..Default::default()
        };
        self.with_raw(system_account_key(address), info.encode())
    }

    pub fn with_identity(self, address: &Address, registration: Registration) -> Self {
        self.with_raw(identity_of_key(address), registration.encode())
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    pub fn storage_calls(&self) -> usize {
        self.storage_calls.load(Ordering::SeqCst)
    }

    async fn round_trip(&self) -> Result<()> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.offline.load(Ordering::SeqCst) {
            return Err(Error::Connection("connection closed".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ChainBackend for MemoryBackend {
    async fn storage(&self, key: &StorageKey) -> Result<Option<Vec<u8>>> {
        self.storage_calls.fetch_add(1, Ordering::SeqCst);
        self.round_trip().await?;
        Ok(self.storage.get(key.as_bytes()).cloned())
    }

    async fn chain_name(&self) -> Result<String> {
        self.round_trip().await?;
        Ok("Polkadot".into())
    }

    async fn finalized_block_number(&self) -> Result<u64> {
        self.round_trip().await?;
        Ok(self.finalized)
    }

    async fn properties(&self) -> Result<Map<String, Value>> {
        self.round_trip().await?;
        let props = json!({ "ss58Format": 0, "tokenDecimals": 10, "tokenSymbol": "DOT" });
        Ok(props.as_object().cloned().unwrap_or_default())
    }

    async fn is_live(&self) -> bool {
        !self.offline.load(Ordering::SeqCst)
    }
}
