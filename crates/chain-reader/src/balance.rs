//! Account balance records

use scale_codec::{Decode, DecodeAll, Encode};
use sp_core::U256;

use crate::error::{Error, Result};

/// `System::Account` value: `AccountInfo<Nonce, AccountData<Balance>>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct AccountInfo {
    pub nonce: u32,
    pub consumers: u32,
    pub providers: u32,
    pub sufficients: u32,
    pub data: AccountData,
}

/// `pallet_balances::AccountData`
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct AccountData {
    pub free: u128,
    pub reserved: u128,
    pub frozen: u128,
    pub flags: u128,
}

/// Balance snapshot for one account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountBalance {
    pub free: u128,
    pub reserved: u128,
    pub frozen: u128,
    pub flags: u128,
    pub nonce: u32,
}

impl AccountBalance {
    /// `free + reserved`, widened so the sum of two `u128` never wraps.
    pub fn total(&self) -> U256 {
        U256::from(self.free) + U256::from(self.reserved)
    }

    /// Decode a raw `System::Account` value. A missing record is a zero balance.
    ///
    /// The value must be consumed exactly; a record with extra or missing
    /// fields means the runtime layout changed underneath us.
    pub fn from_storage(raw: Option<&[u8]>) -> Result<Self> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };

        let info = AccountInfo::decode_all(&mut &raw[..])
            .map_err(|e| Error::Decode(format!("System::Account ({} bytes): {}", raw.len(), e)))?;

        Ok(info.into())
    }
}

impl From<AccountInfo> for AccountBalance {
    fn from(info: AccountInfo) -> Self {
        Self {
            free: info.data.free,
            reserved: info.data.reserved,
            frozen: info.data.frozen,
            flags: info.data.flags,
            nonce: info.nonce,
        }
    }
}

/// Render a planck amount with the chain's decimal places, e.g. `1.500000000000`.
///
/// `10^decimals` must fit in a `U256` (at most 77 places); beyond that the
/// amount is printed in raw units.
pub fn format_units(amount: U256, decimals: u8) -> String {
    if decimals == 0 {
        return amount.to_string();
    }
    let Some(divisor) = U256::from(10u8).checked_pow(U256::from(decimals)) else {
        return amount.to_string();
    };
    let whole = amount / divisor;
    let fract = amount % divisor;

    format!("{}.{:0>width$}", whole, fract.to_string(), width = decimals as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(free: u128, reserved: u128) -> Vec<u8> {
        AccountInfo {
            nonce: 7,
            consumers: 1,
            providers: 1,
            sufficients: 0,
            data: AccountData { free, reserved, frozen: 0, flags: 1u128 << 127 },
        }
        .encode()
    }

    #[test]
    fn test_missing_record_is_zero() {
        let balance = AccountBalance::from_storage(None).unwrap();
        assert_eq!(balance.total(), U256::zero());
    }

    #[test]
    fn test_free_plus_reserved() {
        let raw = encoded(500, 250);
        let balance = AccountBalance::from_storage(Some(raw.as_slice())).unwrap();
        assert_eq!(balance.total(), U256::from(750u32));
        assert_eq!(balance.nonce, 7);
    }

    #[test]
    fn test_total_does_not_wrap() {
        let raw = encoded(u128::MAX, u128::MAX);
        let balance = AccountBalance::from_storage(Some(raw.as_slice())).unwrap();
        assert_eq!(balance.total(), U256::from(u128::MAX) * U256::from(2u8));
        assert!(balance.total() > U256::from(u128::MAX));
    }

    #[test]
    fn test_values_beyond_i64() {
        let free = (i64::MAX as u128) + 10;
        let raw = encoded(free, 5);
        let balance = AccountBalance::from_storage(Some(raw.as_slice())).unwrap();
        assert_eq!(balance.total(), U256::from(free + 5));
    }

    #[test]
    fn test_truncated_record_is_decode_error() {
        let raw = encoded(1, 2);
        let err = AccountBalance::from_storage(Some(&raw[..raw.len() - 16])).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_extra_field_is_decode_error() {
        let mut raw = encoded(1, 2);
        raw.extend_from_slice(&0u128.encode());
        let err = AccountBalance::from_storage(Some(raw.as_slice())).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(U256::from(15_000_000_000u64), 10), "1.5000000000");
        assert_eq!(format_units(U256::from(42u32), 3), "0.042");
        assert_eq!(format_units(U256::from(42u32), 0), "42");
    }

    #[test]
    fn test_format_units_with_oversized_decimals() {
        assert_eq!(format_units(U256::from(1u8), 80), "1");
        assert_eq!(format_units(U256::MAX, u8::MAX), U256::MAX.to_string());

        // Largest power of ten that still fits
        let formatted = format_units(U256::from(5u8), 77);
        assert!(formatted.starts_with("0.000"));
        assert!(formatted.ends_with('5'));
    }
}
