/*!
# CSV Schema Definitions

Allocation files are the operator-facing input format: one row per account, amounts kept as
text so values wider than 64 bits survive spreadsheets untouched. Validation of the values
themselves happens when the rows are turned into a manifest.
*/

use merkle_distributor_balance_map::{AllocationRecord, AmountInput};
use serde::{Deserialize, Serialize};

/// Expected headers for allocation CSV files in exact order
pub const ALLOCATION_CSV_HEADERS: &[&str] = &["address", "amount0", "amount1"];

/// Row structure for allocation CSV files
///
/// **Producer**: `generate-fixtures` command, or the operator
/// **Consumer**: `generate` command
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllocationRow {
    /// Account in any accepted spelling (checksummed, lowercase, with or without `0x`)
    pub address: String,

    /// Decimal or `0x`-prefixed amount of the first token
    pub amount0: String,

    /// Decimal or `0x`-prefixed amount of the second token
    pub amount1: String,
}

impl From<AllocationRow> for AllocationRecord {
    fn from(row: AllocationRow) -> Self {
        AllocationRecord {
            account: row.address,
            amount0: AmountInput::Text(row.amount0),
            amount1: AmountInput::Text(row.amount1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_row_serialization() {
        let row = AllocationRow {
            address: "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".to_string(),
            amount0: "100".to_string(),
            amount1: "0xc8".to_string(),
        };

        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.serialize(&row).unwrap();
        let csv_data = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        assert!(csv_data.starts_with("address,amount0,amount1\n"));

        let mut rdr = csv::Reader::from_reader(csv_data.as_bytes());
        let deserialized: AllocationRow = rdr.deserialize().next().unwrap().unwrap();

        assert_eq!(row, deserialized);
    }

    #[test]
    fn test_row_converts_to_record() {
        let row = AllocationRow {
            address: "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359".to_string(),
            amount0: "51".to_string(),
            amount1: "102".to_string(),
        };

        let record = AllocationRecord::from(row);
        assert_eq!(record.account, "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359");
        assert_eq!(record.amount0, AmountInput::Text("51".to_string()));
        assert_eq!(record.amount1, AmountInput::Text("102".to_string()));
    }
}
