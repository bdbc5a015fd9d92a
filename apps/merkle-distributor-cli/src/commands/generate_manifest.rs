use merkle_distributor_balance_map::{build_manifest, u512_to_hex, AllocationRecord, Manifest};
use merkle_distributor_csvs::read_allocations_csv;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::SnapshotConfig;
use crate::error::{CliError, CliResult};

/// Build a manifest from an allocation file and write it as JSON
pub fn execute(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> CliResult<()> {
    let config = match (config_path, input, output) {
        (Some(path), _, _) => SnapshotConfig::load(&path)?,
        (None, Some(input), Some(output)) => SnapshotConfig {
            snapshot_name: input
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "snapshot".to_string()),
            input,
            output,
            pretty: true,
        },
        _ => {
            return Err(CliError::InvalidConfig(
                "either --config or both --input and --output are required".to_string(),
            ))
        }
    };

    println!("Generating snapshot '{}'", config.snapshot_name);
    println!("Input: {}", config.input.display());

    let manifest = generate(&config)?;

    println!("✅ Manifest written to {}", config.output.display());
    println!("  - Merkle root: {}", manifest.hex_root());
    println!("  - Claims: {}", manifest.claims.len());
    println!(
        "  - Token total 0: {} ({})",
        u512_to_hex(&manifest.token_total0),
        manifest.token_total0
    );
    println!(
        "  - Token total 1: {} ({})",
        u512_to_hex(&manifest.token_total1),
        manifest.token_total1
    );

    Ok(())
}

pub(crate) fn generate(config: &SnapshotConfig) -> CliResult<Manifest> {
    let records = load_allocations(&config.input)?;
    info!(
        "Loaded {} allocation records from {}",
        records.len(),
        config.input.display()
    );

    let manifest = build_manifest(&records)?;

    let json = if config.pretty {
        manifest.to_json_pretty()?
    } else {
        serde_json::to_string(&manifest)?
    };

    if let Some(parent) = config.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&config.output, json)?;
    debug!("Wrote manifest to {}", config.output.display());

    Ok(manifest)
}

/// Read allocation records, picking the format from the file extension
pub(crate) fn load_allocations(path: &Path) -> CliResult<Vec<AllocationRecord>> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => Ok(read_allocations_csv(path)?
            .into_iter()
            .map(AllocationRecord::from)
            .collect()),
        Some("json") => {
            let json = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&json)?)
        }
        _ => Err(CliError::InvalidConfig(format!(
            "{}: unsupported input format, expected .csv or .json",
            path.display()
        ))),
    }
}
