use merkle_distributor_balance_map::{checksum, normalize_address, u256_to_hex, BalanceMapError};
use merkle_distributor_merkle::hash_to_hex;
use std::path::PathBuf;

use crate::commands::read_manifest;
use crate::error::{CliError, CliResult};

/// Print one account's claim and check its proof against the manifest root
pub fn execute(manifest_path: PathBuf, account: String) -> CliResult<()> {
    let manifest = read_manifest(&manifest_path)?;
    let address = normalize_address(&account)?;
    let claim = manifest
        .claim_for(&account)?
        .ok_or_else(|| CliError::ClaimNotFound(account.clone()))?;

    println!("Account: {}", checksum(&address));
    println!("  - Index: {}", claim.index);
    println!("  - Amount 0: {} ({})", u256_to_hex(&claim.amount0), claim.amount0);
    println!("  - Amount 1: {} ({})", u256_to_hex(&claim.amount1), claim.amount1);
    println!("  - Proof:");
    for node in &claim.proof {
        println!("      {}", hash_to_hex(node));
    }

    if !claim.verify(address, &manifest.merkle_root) {
        println!("❌ Proof does not verify against {}", manifest.hex_root());
        return Err(BalanceMapError::InvalidProof(checksum(&address)).into());
    }

    println!("✅ Proof verifies against {}", manifest.hex_root());
    Ok(())
}
