/*!
# CSV Validation & I/O

This module reads input CSVs into validated rows and writes breakdown exports.
Validation happens once, here: rows with a non-positive cost, an ambiguous
yield, or an out-of-range rebate are rejected with the line they came from.
*/

use crate::{
    errors::{CsvError, CsvResult},
    schemas::{
        ConversionBreakdownRow, PackageRow, PayChartRow, PkBreakdownRow, PkRuleSummaryRow,
        RewardTableRow, CONVERSION_BREAKDOWN_HEADERS, PACKAGES_CSV_HEADERS,
        PAY_CHART_EXPORT_HEADERS, PAY_CHART_REQUIRED_HEADERS, PK_BREAKDOWN_HEADERS,
        PK_RULE_SUMMARY_HEADERS, REWARD_TABLES_CSV_HEADERS,
    },
};
use csv::{Reader, ReaderBuilder, StringRecord, Trim, Writer, WriterBuilder};
use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

// ================================================================================================
// CSV Reading with Validation
// ================================================================================================

/// Read and validate a packages CSV file
pub fn read_packages_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<PackageRow>> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);

    // Validate headers
    let headers = rdr.headers()?.clone();
    validate_headers(headers.iter(), PACKAGES_CSV_HEADERS, "packages.csv")?;

    let rows = deserialize_rows(&mut rdr, &headers, validate_package_row)?;

    if rows.is_empty() {
        return Err(CsvError::SchemaValidation(
            "Packages CSV file is empty".to_string(),
        ));
    }

    debug!(rows = rows.len(), "read packages csv");
    Ok(rows)
}

/// Read and validate a reward tables CSV file
pub fn read_reward_tables_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<RewardTableRow>> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);

    // Validate headers
    let headers = rdr.headers()?.clone();
    validate_headers(headers.iter(), REWARD_TABLES_CSV_HEADERS, "reward_tables.csv")?;

    let rows = deserialize_rows(&mut rdr, &headers, validate_reward_table_row)?;

    if rows.is_empty() {
        return Err(CsvError::SchemaValidation(
            "Reward tables CSV file is empty".to_string(),
        ));
    }

    debug!(rows = rows.len(), "read reward tables csv");
    Ok(rows)
}

/// Read and validate a pay chart CSV file
///
/// Header names are trimmed, matched by name rather than position, and
/// columns the chart does not need are ignored.
pub fn read_pay_chart_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<PayChartRow>> {
    let file = File::open(path)?;
    read_pay_chart(file)
}

pub(crate) fn read_pay_chart<R: Read>(reader: R) -> CsvResult<Vec<PayChartRow>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    require_headers(&headers, PAY_CHART_REQUIRED_HEADERS)?;

    let rows = deserialize_rows(&mut rdr, &headers, validate_pay_chart_row)?;

    if rows.is_empty() {
        return Err(CsvError::SchemaValidation(
            "Pay chart CSV file is empty".to_string(),
        ));
    }

    debug!(rows = rows.len(), "read pay chart csv");
    Ok(rows)
}

/// Read a conversion breakdown previously written by [`write_conversion_breakdown_csv`]
pub fn read_conversion_breakdown_csv<P: AsRef<Path>>(
    path: P,
) -> CsvResult<Vec<ConversionBreakdownRow>> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);

    let headers = rdr.headers()?.clone();
    validate_headers(
        headers.iter(),
        CONVERSION_BREAKDOWN_HEADERS,
        "conversion breakdown",
    )?;

    deserialize_rows(&mut rdr, &headers, |_, _| Ok(()))
}

/// Read a PK breakdown previously written by [`write_pk_breakdown_csv`]
pub fn read_pk_breakdown_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<PkBreakdownRow>> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);

    let headers = rdr.headers()?.clone();
    validate_headers(headers.iter(), PK_BREAKDOWN_HEADERS, "pk breakdown")?;

    deserialize_rows(&mut rdr, &headers, |_, _| Ok(()))
}

// ================================================================================================
// CSV Writing
// ================================================================================================

/// Write packages CSV with proper headers
pub fn write_packages_csv<P: AsRef<Path>>(path: P, rows: &[PackageRow]) -> CsvResult<()> {
    write_rows(path, PACKAGES_CSV_HEADERS, rows)
}

/// Write reward tables CSV with proper headers
pub fn write_reward_tables_csv<P: AsRef<Path>>(
    path: P,
    rows: &[RewardTableRow],
) -> CsvResult<()> {
    write_rows(path, REWARD_TABLES_CSV_HEADERS, rows)
}

/// Write a conversion breakdown (one row per used package)
pub fn write_conversion_breakdown_csv<P: AsRef<Path>>(
    path: P,
    rows: &[ConversionBreakdownRow],
) -> CsvResult<()> {
    write_rows(path, CONVERSION_BREAKDOWN_HEADERS, rows)
}

/// Write a PK breakdown (one row per rung of the chosen table)
pub fn write_pk_breakdown_csv<P: AsRef<Path>>(
    path: P,
    rows: &[PkBreakdownRow],
) -> CsvResult<()> {
    write_rows(path, PK_BREAKDOWN_HEADERS, rows)
}

/// Write filtered pay chart rows; limit columns are not exported
pub fn write_pay_chart_csv<P: AsRef<Path>>(path: P, rows: &[PayChartRow]) -> CsvResult<()> {
    write_rows(path, PAY_CHART_EXPORT_HEADERS, rows)
}

/// Write the PK rules summary
pub fn write_pk_rule_summary_csv<P: AsRef<Path>>(
    path: P,
    rows: &[PkRuleSummaryRow],
) -> CsvResult<()> {
    write_rows(path, PK_RULE_SUMMARY_HEADERS, rows)
}

/// Headers are written explicitly so that an empty export still carries its schema.
fn write_rows<P: AsRef<Path>, T: Serialize>(
    path: P,
    headers: &[&str],
    rows: &[T],
) -> CsvResult<()> {
    let file = File::create(path)?;
    let mut wtr: Writer<File> = WriterBuilder::new().has_headers(false).from_writer(file);

    wtr.write_record(headers)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

// ================================================================================================
// Row Validation
// ================================================================================================

fn deserialize_rows<R, T, F>(
    rdr: &mut Reader<R>,
    headers: &StringRecord,
    validate: F,
) -> CsvResult<Vec<T>>
where
    R: Read,
    T: DeserializeOwned,
    F: Fn(&T, u64) -> CsvResult<()>,
{
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: T = record.deserialize(Some(headers))?;
        validate(&row, line)?;
        rows.push(row);
    }
    Ok(rows)
}

fn validate_package_row(row: &PackageRow, line: u64) -> CsvResult<()> {
    if row.cost == 0 {
        return Err(CsvError::InvalidRow {
            line,
            reason: "package cost must be positive".to_string(),
        });
    }

    match (row.yield_amount, row.rebate_percent) {
        (Some(_), None) => Ok(()),
        (None, Some(percent)) => {
            if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
                return Err(CsvError::InvalidRow {
                    line,
                    reason: format!("rebate {}% must be between 0 and 100", percent),
                });
            }
            Ok(())
        }
        (Some(_), Some(_)) => Err(CsvError::InvalidRow {
            line,
            reason: "set either yield or rebate_percent, not both".to_string(),
        }),
        (None, None) => Err(CsvError::InvalidRow {
            line,
            reason: "missing yield or rebate_percent".to_string(),
        }),
    }
}

fn validate_reward_table_row(row: &RewardTableRow, line: u64) -> CsvResult<()> {
    if row.table.trim().is_empty() {
        return Err(CsvError::InvalidRow {
            line,
            reason: "table name is empty".to_string(),
        });
    }

    if row.point_cost == 0 {
        return Err(CsvError::InvalidRow {
            line,
            reason: format!("point_cost must be positive in table '{}'", row.table),
        });
    }

    Ok(())
}

fn validate_pay_chart_row(row: &PayChartRow, line: u64) -> CsvResult<()> {
    if row.broadcaster_remuneration_usd < Decimal::ZERO {
        return Err(CsvError::InvalidRow {
            line,
            reason: format!(
                "negative remuneration {} for ranking '{}'",
                row.broadcaster_remuneration_usd, row.ranking
            ),
        });
    }

    Ok(())
}

// ================================================================================================
// Header Validation
// ================================================================================================

fn validate_headers<'a, I>(actual: I, expected: &[&str], file_type: &str) -> CsvResult<()>
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

pub(crate) fn require_headers(actual: &StringRecord, required: &[&str]) -> CsvResult<()> {
    for header in required {
        if !actual.iter().any(|h| h == *header) {
            return Err(CsvError::MissingHeader(header.to_string()));
        }
    }
    Ok(())
}

// ================================================================================================
// Tests
// ================================================================================================
