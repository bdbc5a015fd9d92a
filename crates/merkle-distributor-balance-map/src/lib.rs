/*!
# Merkle Distributor: Balance Map

Turns raw allocation records (`account`, `amount0`, `amount1`) into the manifest published
next to an on-chain merkle distributor.

## Pipeline

1. Every account is validated and normalized to its EIP-55 checksum
2. Amounts are parsed as non-negative uint256 values
3. Duplicate accounts (in any spelling) abort the build
4. Accounts are sorted by checksum string and indexed `0..n` in that order
5. A [`BalanceTree`](merkle_distributor_merkle::BalanceTree) is built and every claim gets its
   proof
6. Totals are summed per token

The result does not depend on the order of the input records.

## Usage

```rust
use merkle_distributor_balance_map::{build_manifest, AllocationRecord, BalanceMapResult};

fn example() -> BalanceMapResult<()> {
    let records = vec![
        AllocationRecord::new("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed", 50u64, 100u64),
        AllocationRecord::new("0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359", "51", "0x66"),
    ];

    let manifest = build_manifest(&records)?;
    manifest.verify()?;
    println!("{}", manifest.to_json_pretty()?);
    Ok(())
}
# example().unwrap();
```
*/

pub mod address;
pub mod amount;
pub mod builder;
pub mod errors;
pub mod manifest;

pub use address::{canonical_account, checksum, normalize_address};
pub use amount::{AmountInput, U512};
pub use builder::{build_manifest, AllocationRecord};
pub use errors::{BalanceMapError, BalanceMapResult};
pub use manifest::{u256_from_hex, u256_to_hex, u512_to_hex, Claim, Manifest};
