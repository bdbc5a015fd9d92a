use merkle_distributor_balance_map::u512_to_hex;
use std::path::PathBuf;
use tracing::info;

use crate::commands::read_manifest;
use crate::error::CliResult;

/// Independently re-verify a published manifest
pub fn execute(manifest_path: PathBuf) -> CliResult<()> {
    println!("Verifying manifest {}", manifest_path.display());

    let manifest = read_manifest(&manifest_path)?;
    info!("Checking {} claims", manifest.claims.len());
    manifest.verify()?;

    println!("✅ Manifest is consistent");
    println!("  - Merkle root: {}", manifest.hex_root());
    println!("  - Claims: {}", manifest.claims.len());
    println!("  - Token total 0: {}", u512_to_hex(&manifest.token_total0));
    println!("  - Token total 1: {}", u512_to_hex(&manifest.token_total1));

    Ok(())
}
