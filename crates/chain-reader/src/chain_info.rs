//! Chain metadata snapshots

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sp_core::H256;

/// Chain name and finalized height as seen by one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    pub name: String,
    pub finalized_block_number: u64,
}

/// Token and address-format properties advertised by `system_properties`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainProperties {
    pub token_symbol: Option<String>,
    pub token_decimals: Option<u8>,
    pub ss58_format: Option<u16>,
}

impl ChainProperties {
    /// Build from the raw property map.
    ///
    /// Multi-token chains report arrays; the first entry is the native token.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            token_symbol: map.get("tokenSymbol").and_then(first).and_then(|v| v.as_str()).map(str::to_owned),
            token_decimals: map
                .get("tokenDecimals")
                .and_then(first)
                .and_then(Value::as_u64)
                .and_then(|d| u8::try_from(d).ok()),
            ss58_format: map
                .get("ss58Format")
                .and_then(first)
                .and_then(Value::as_u64)
                .and_then(|f| u16::try_from(f).ok()),
        }
    }
}

fn first(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.first(),
        other => Some(other),
    }
}

/// Subset of a block header returned by `chain_getHeader`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHeader {
    #[serde(deserialize_with = "deserialize_number")]
    pub number: u64,
    pub parent_hash: H256,
    pub state_root: H256,
    pub extrinsics_root: H256,
}

fn deserialize_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    let s = s.trim_start_matches("0x");
    u64::from_str_radix(s, 16).map_err(serde::de::Error::custom)
}
