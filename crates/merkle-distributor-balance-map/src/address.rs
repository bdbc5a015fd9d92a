/*!
# Account Normalization

Accounts arrive as hex text in whatever case the producer used. They are validated the same
way wallets and the contract's tooling do:

- 40 hex digits, optionally prefixed with `0x`
- all-lowercase or all-uppercase digits are accepted as-is
- mixed case is treated as an EIP-55 checksum and must match it exactly

The canonical form is the EIP-55 checksummed string. It is used as the `claims` key and as
the sort key that assigns leaf indices.
*/

use alloy_primitives::Address;

use crate::errors::{BalanceMapError, BalanceMapResult};

/// Parse and validate an account, returning its 20-byte address.
pub fn normalize_address(input: &str) -> BalanceMapResult<Address> {
    let invalid = || BalanceMapError::InvalidAddress(input.to_string());

    let trimmed = input.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let mut bytes = [0u8; 20];
    hex::decode_to_slice(digits, &mut bytes).map_err(|_| invalid())?;
    let address = Address::from(bytes);

    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper && checksum(&address)[2..] != *digits {
        return Err(invalid());
    }

    Ok(address)
}

/// EIP-55 checksummed form, `0x`-prefixed.
pub fn checksum(address: &Address) -> String {
    address.to_checksum(None)
}

/// Validate `input` and return its canonical (checksummed) form.
pub fn canonical_account(input: &str) -> BalanceMapResult<String> {
    normalize_address(input).map(|address| checksum(&address))
}
