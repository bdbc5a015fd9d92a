use std::fmt;

use alloy_primitives::{Uint, U256};
use serde::{Deserialize, Serialize};

use crate::errors::{BalanceMapError, BalanceMapResult};

/// Width used for token totals. Summing uint256 amounts in 512 bits cannot overflow for any
/// number of records that fits in memory.
pub type U512 = Uint<512, 8>;

const RADIX_PREFIXES: [(&str, u32); 3] = [("0x", 16), ("0o", 8), ("0b", 2)];

/// Split off an optional radix prefix, case-insensitively. Unprefixed text is decimal.
fn split_radix(text: &str) -> (u32, &str) {
    for (prefix, radix) in RADIX_PREFIXES {
        if let Some(head) = text.get(..2) {
            if head.eq_ignore_ascii_case(prefix) {
                return (radix, &text[2..]);
            }
        }
    }
    (10, text)
}

/// An amount as supplied by the caller, before validation.
///
/// Balance files carry amounts either as JSON numbers or as strings (decimal, or `0x`-prefixed
/// hex for values too large for a JSON number).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Unsigned(u64),
    Signed(i64),
    Text(String),
    /// Any other JSON value (floats, booleans, null). Always rejected by `parse`.
    Unsupported(serde_json::Value),
}

impl AmountInput {
    /// Validate into a uint256. `account` is only used for the error message.
    pub fn parse(&self, account: &str) -> BalanceMapResult<U256> {
        let invalid = || BalanceMapError::InvalidAmount {
            account: account.to_string(),
            amount: self.to_string(),
        };

        match self {
            AmountInput::Unsigned(value) => Ok(U256::from(*value)),
            AmountInput::Signed(value) => u64::try_from(*value)
                .map(U256::from)
                .map_err(|_| invalid()),
            AmountInput::Text(text) => {
                let text = text.trim();
                let (negative, magnitude) = match text.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, text),
                };
                let (radix, digits) = split_radix(magnitude);
                if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                    return Err(invalid());
                }

                let value = U256::from_str_radix(digits, u64::from(radix)).map_err(|_| invalid())?;
                // "-0" is still zero
                if negative && !value.is_zero() {
                    return Err(invalid());
                }
                Ok(value)
            }
            AmountInput::Unsupported(_) => Err(invalid()),
        }
    }
}

impl fmt::Display for AmountInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountInput::Unsigned(value) => write!(f, "{}", value),
            AmountInput::Signed(value) => write!(f, "{}", value),
            AmountInput::Text(text) => write!(f, "{}", text),
            AmountInput::Unsupported(value) => write!(f, "{}", value),
        }
    }
}

impl From<u64> for AmountInput {
    fn from(value: u64) -> Self {
        AmountInput::Unsigned(value)
    }
}

impl From<i64> for AmountInput {
    fn from(value: i64) -> Self {
        AmountInput::Signed(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        AmountInput::Text(value)
    }
}

impl From<U256> for AmountInput {
    fn from(value: U256) -> Self {
        AmountInput::Text(value.to_string())
    }
}

/// Widen a uint256 for accumulation.
pub fn widen(value: U256) -> U512 {
    let mut bytes = [0u8; 64];
    bytes[32..].copy_from_slice(&value.to_be_bytes::<32>());
    U512::from_be_bytes(bytes)
}

/// Minimal-width `0x` hex of big-endian bytes: leading zero bytes dropped, at least one byte
/// kept, so zero is `0x00` and 375 is `0x0177`.
pub fn quantity_hex(be_bytes: &[u8]) -> String {
    let first = be_bytes
        .iter()
        .position(|b| *b != 0)
        .unwrap_or(be_bytes.len().saturating_sub(1));
    format!("0x{}", hex::encode(&be_bytes[first..]))
}

/// Parse `0x`-prefixed hex into big-endian bytes of any length.
pub fn parse_quantity_hex(text: &str) -> Option<Vec<u8>> {
    let digits = text.strip_prefix("0x")?;
    if digits.is_empty() {
        return None;
    }
    if digits.len() % 2 == 1 {
        hex::decode(format!("0{}", digits)).ok()
    } else {
        hex::decode(digits).ok()
    }
}
