/*!
# CSV Validation & I/O
*/

use crate::{
    errors::{CsvError, CsvResult},
    schemas::{AllocationRow, ALLOCATION_CSV_HEADERS},
};
use csv::{ReaderBuilder, Trim, Writer};
use std::fs::File;
use std::path::Path;

// ================================================================================================
// CSV Reading with Validation
// ================================================================================================

/// Read and validate an allocation CSV file
pub fn read_allocations_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<AllocationRow>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(file);

    let headers = rdr.headers()?;
    validate_headers(
        headers.iter(),
        ALLOCATION_CSV_HEADERS,
        &path.display().to_string(),
    )?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: AllocationRow = result?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(CsvError::SchemaValidation(format!(
            "{}: allocation CSV file is empty",
            path.display()
        )));
    }

    Ok(rows)
}

// ================================================================================================
// CSV Writing
// ================================================================================================

/// Write an allocation CSV file (the header row is emitted by the first serialized row)
pub fn write_allocations_csv<P: AsRef<Path>>(path: P, rows: &[AllocationRow]) -> CsvResult<()> {
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

// ================================================================================================
// Header Validation
// ================================================================================================

pub fn validate_headers<'a, I>(actual: I, expected: &[&str], file_type: &str) -> CsvResult<()>
where
    I: Iterator<Item = &'a str>,
{
    let actual_headers: Vec<&str> = actual.collect();

    if actual_headers.len() != expected.len() {
        return Err(CsvError::SchemaValidation(format!(
            "{}: expected {} headers, found {}",
            file_type,
            expected.len(),
            actual_headers.len()
        )));
    }

    for (i, (actual, expected)) in actual_headers.iter().zip(expected.iter()).enumerate() {
        if actual != expected {
            return Err(CsvError::SchemaValidation(format!(
                "{}: header {} should be '{}', found '{}'",
                file_type,
                i + 1,
                expected,
                actual
            )));
        }
    }

    Ok(())
}

// ================================================================================================
// Tests
// ================================================================================================
