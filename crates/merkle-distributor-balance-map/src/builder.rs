use std::collections::BTreeMap;

use alloy_primitives::{Address, U256};
use merkle_distributor_merkle::{Balance, BalanceTree};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::address::{checksum, normalize_address};
use crate::amount::{AmountInput, U512};
use crate::errors::{BalanceMapError, BalanceMapResult};
use crate::manifest::{checked_total, Claim, Manifest};

/// One allocation as supplied by the operator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRecord {
    #[serde(alias = "address")]
    pub account: String,
    #[serde(alias = "p5")]
    pub amount0: AmountInput,
    #[serde(alias = "p6")]
    pub amount1: AmountInput,
}

impl AllocationRecord {
    pub fn new(
        account: impl Into<String>,
        amount0: impl Into<AmountInput>,
        amount1: impl Into<AmountInput>,
    ) -> Self {
        Self {
            account: account.into(),
            amount0: amount0.into(),
            amount1: amount1.into(),
        }
    }
}

struct ValidatedAllocation {
    address: Address,
    amount0: U256,
    amount1: U256,
}

/// Validate every record, assign indices in checksum order and produce the publishable manifest.
///
/// Validation is all-or-nothing: the first bad record aborts the build.
pub fn build_manifest(records: &[AllocationRecord]) -> BalanceMapResult<Manifest> {
    if records.is_empty() {
        return Err(BalanceMapError::EmptyInput);
    }

    // Keyed by checksum string, so iteration order is index order
    let mut allocations: BTreeMap<String, ValidatedAllocation> = BTreeMap::new();

    for record in records {
        let address = normalize_address(&record.account)?;
        let account = checksum(&address);

        if allocations.contains_key(&account) {
            return Err(BalanceMapError::DuplicateAddress(account));
        }

        let amount0 = record.amount0.parse(&record.account)?;
        let amount1 = record.amount1.parse(&record.account)?;

        allocations.insert(
            account,
            ValidatedAllocation {
                address,
                amount0,
                amount1,
            },
        );
    }

    debug!("Validated {} allocation records", allocations.len());

    let balances: Vec<Balance> = allocations
        .values()
        .map(|a| Balance::new(a.address, a.amount0, a.amount1))
        .collect();
    let tree = BalanceTree::new(&balances)?;
    let merkle_root = tree.root();

    let mut claims = BTreeMap::new();
    let mut token_total0 = U512::ZERO;
    let mut token_total1 = U512::ZERO;

    for (index, (account, allocation)) in allocations.into_iter().enumerate() {
        let index = index as u64;
        let proof = tree.proof(
            index,
            allocation.address,
            allocation.amount0,
            allocation.amount1,
        )?;

        token_total0 = checked_total(token_total0, allocation.amount0)?;
        token_total1 = checked_total(token_total1, allocation.amount1)?;

        claims.insert(
            account,
            Claim {
                index,
                amount0: allocation.amount0,
                amount1: allocation.amount1,
                proof,
            },
        );
    }

    info!(
        "Built manifest for {} claims with root {} (totals {} / {})",
        claims.len(),
        tree.hex_root(),
        token_total0,
        token_total1
    );

    Ok(Manifest {
        merkle_root,
        token_total0,
        token_total1,
        claims,
    })
}
