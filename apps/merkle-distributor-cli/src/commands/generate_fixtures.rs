use merkle_distributor_balance_map::checksum;
use merkle_distributor_csvs::{write_allocations_csv, AllocationRow};
use merkle_distributor_merkle::Address;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Upper bound on rows reserved up front; larger runs grow as they go
const MAX_PREALLOCATED_ROWS: u64 = 1 << 16;

/// Generate a deterministic allocation CSV for benchmarking and tests
pub fn execute(
    count: u64,
    seed: u64,
    output: PathBuf,
    min_amount: u64,
    max_amount: u64,
) -> CliResult<()> {
    println!("Generating {} allocations with seed {}", count, seed);
    println!("Amount range: {} - {}", min_amount, max_amount);

    let rows = generate_rows(count, seed, min_amount, max_amount)?;
    write_allocations_csv(&output, &rows)?;

    println!("✅ Generated allocations: {}", output.display());
    Ok(())
}

pub(crate) fn generate_rows(
    count: u64,
    seed: u64,
    min_amount: u64,
    max_amount: u64,
) -> CliResult<Vec<AllocationRow>> {
    if count == 0 {
        return Err(CliError::InvalidConfig(
            "count must be at least 1".to_string(),
        ));
    }
    if min_amount > max_amount {
        return Err(CliError::InvalidConfig(format!(
            "min amount {} is greater than max amount {}",
            min_amount, max_amount
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::new();
    let mut rows = Vec::with_capacity(initial_capacity(count));

    while (rows.len() as u64) < count {
        let address = Address::from(rng.gen::<[u8; 20]>());
        if !seen.insert(address) {
            continue;
        }

        rows.push(AllocationRow {
            address: checksum(&address),
            amount0: rng.gen_range(min_amount..=max_amount).to_string(),
            amount1: rng.gen_range(min_amount..=max_amount).to_string(),
        });

        if count > 10_000 && rows.len() % 10_000 == 0 {
            debug!("Generated {} / {} allocations", rows.len(), count);
        }
    }

    Ok(rows)
}

fn initial_capacity(count: u64) -> usize {
    count.min(MAX_PREALLOCATED_ROWS) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::generate_manifest::load_allocations;
    use merkle_distributor_balance_map::build_manifest;
    use merkle_distributor_csvs::read_allocations_csv;
    use tempfile::TempDir;

    #[test]
    fn test_same_seed_same_rows() {
        let first = generate_rows(50, 7, 1, 100).unwrap();
        let second = generate_rows(50, 7, 1, 100).unwrap();
        let other = generate_rows(50, 8, 1, 100).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_rows_respect_amount_range() {
        for row in generate_rows(200, 1, 10, 20).unwrap() {
            let amount0: u64 = row.amount0.parse().unwrap();
            let amount1: u64 = row.amount1.parse().unwrap();
            assert!((10..=20).contains(&amount0));
            assert!((10..=20).contains(&amount1));
        }
    }

    #[test]
    fn test_invalid_parameters_are_rejected() {
        assert!(matches!(
            generate_rows(0, 1, 1, 2),
            Err(CliError::InvalidConfig(_))
        ));
        assert!(matches!(
            generate_rows(5, 1, 3, 2),
            Err(CliError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_huge_count_does_not_reserve_everything() {
        assert_eq!(initial_capacity(10), 10);
        assert_eq!(initial_capacity(u64::MAX), MAX_PREALLOCATED_ROWS as usize);
    }

    #[test]
    fn test_fixtures_build_a_manifest() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("fixtures.csv");

        execute(257, 42, output.clone(), 1, 1_000).unwrap();
        assert_eq!(read_allocations_csv(&output).unwrap().len(), 257);

        let manifest = build_manifest(&load_allocations(&output).unwrap()).unwrap();
        assert_eq!(manifest.claims.len(), 257);
        // 257 leaves: ceil(log2(257)) == 9
        assert!(manifest.claims.values().all(|claim| claim.proof.len() == 9));
        manifest.verify().unwrap();
    }
}
