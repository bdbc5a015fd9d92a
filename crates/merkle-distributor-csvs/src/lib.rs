/*!
# Merkle Distributor CSV Schema Definitions

The CSV contract between whoever produces allocation snapshots (the operator, or the
`generate-fixtures` command) and the `generate` command that turns them into a manifest.

## Allocation CSV

Columns, in this exact order:
- `address`: account, hex with optional `0x`, any case accepted by the balance map
- `amount0`: amount of the first token, decimal or `0x`-prefixed
- `amount1`: amount of the second token, decimal or `0x`-prefixed

## Usage

```rust,no_run
use merkle_distributor_balance_map::{build_manifest, AllocationRecord};
use merkle_distributor_csvs::{read_allocations_csv, CsvResult};

fn example() -> CsvResult<()> {
    let records: Vec<AllocationRecord> = read_allocations_csv("allocations.csv")?
        .into_iter()
        .map(AllocationRecord::from)
        .collect();

    let manifest = build_manifest(&records).expect("valid allocations");
    println!("{}", manifest.hex_root());
    Ok(())
}
```
*/

pub mod errors;
pub mod schemas;
pub mod validation;

pub use errors::{CsvError, CsvResult};
pub use schemas::{AllocationRow, ALLOCATION_CSV_HEADERS};
pub use validation::{read_allocations_csv, validate_headers, write_allocations_csv};
