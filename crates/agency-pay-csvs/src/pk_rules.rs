/*!
# PK Rules Sheet

The "rules and rewards" sheet has no fixed schema: besides the `PK Type` column
it carries any number of win columns (e.g. "Win (1st)", "Win Bonus") whose names
change between seasons. This module is the only place that looks at those
column names. It hands the engine one row per PK type with the parsed win cells.
*/

use crate::errors::{CsvError, CsvResult};
use crate::validation::require_headers;
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// Column holding the PK type name
pub const PK_TYPE_HEADER: &str = "PK Type";

/// Any column whose header contains this marker is a win column
pub const WIN_HEADER_MARKER: &str = "Win";

/// One row of the rules sheet
#[derive(Debug, Clone, PartialEq)]
pub struct PkRuleRow {
    pub pk_type: String,
    /// Parsed cell per win column, in sheet order; `None` for blank or non-numeric cells
    pub wins: Vec<Option<Decimal>>,
}

/// Read a PK rules sheet exported to CSV
pub fn read_pk_rules_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<PkRuleRow>> {
    let file = File::open(path)?;
    read_pk_rules(file)
}

pub(crate) fn read_pk_rules<R: Read>(reader: R) -> CsvResult<Vec<PkRuleRow>> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    require_headers(&headers, &[PK_TYPE_HEADER])?;

    let type_index = headers
        .iter()
        .position(|h| h == PK_TYPE_HEADER)
        .ok_or_else(|| CsvError::MissingHeader(PK_TYPE_HEADER.to_string()))?;

    let win_indices: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| h.contains(WIN_HEADER_MARKER))
        .map(|(i, _)| i)
        .collect();

    if win_indices.is_empty() {
        return Err(CsvError::SchemaValidation(format!(
            "no '{}' columns found; available columns: {}",
            WIN_HEADER_MARKER,
            headers.iter().collect::<Vec<_>>().join(", ")
        )));
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let pk_type = record.get(type_index).unwrap_or_default().to_string();

        let wins = win_indices
            .iter()
            .map(|&i| record.get(i).and_then(parse_win))
            .collect();

        rows.push(PkRuleRow { pk_type, wins });
    }

    debug!(
        rows = rows.len(),
        win_columns = win_indices.len(),
        "read pk rules csv"
    );
    Ok(rows)
}

/// Spreadsheet exports write thousands separators; strip them before parsing.
fn parse_win(cell: &str) -> Option<Decimal> {
    if cell.is_empty() {
        return None;
    }

    let cleaned = cell.replace(',', "");
    match Decimal::from_str(&cleaned) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(cell, "ignoring non-numeric win cell");
            None
        }
    }
}
