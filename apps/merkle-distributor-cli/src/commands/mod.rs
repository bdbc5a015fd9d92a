pub mod generate_fixtures;
pub mod generate_manifest;
pub mod prove_claim;
pub mod verify_manifest;

use merkle_distributor_balance_map::Manifest;
use std::fs;
use std::path::Path;

use crate::error::CliResult;

pub(crate) fn read_manifest(path: &Path) -> CliResult<Manifest> {
    let json = fs::read_to_string(path)?;
    Ok(Manifest::from_json(&json)?)
}
