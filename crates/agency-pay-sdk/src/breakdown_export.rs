/*!
# Breakdown Export

Turns allocation results into the row-oriented shape an analyst downloads:
one row per used package (label, times used, total cost, total yield) or per
PK rung (matches, points used, win per match, total win).
*/

use crate::allocation::Allocation;
use crate::pk_optimizer::PkOptimization;
use agency_pay_csvs::{
    write_conversion_breakdown_csv, write_pk_breakdown_csv, ConversionBreakdownRow, CsvResult,
    PkBreakdownRow,
};
use std::path::Path;
use tracing::info;

pub fn conversion_breakdown_rows(allocation: &Allocation) -> Vec<ConversionBreakdownRow> {
    allocation
        .usage
        .iter()
        .map(|usage| ConversionBreakdownRow {
            package: usage.tier.label(),
            times_used: usage.count,
            total_cost: usage.total_cost(),
            total_yield: usage.total_yield(),
        })
        .collect()
}

pub fn pk_breakdown_rows(optimization: &PkOptimization) -> Vec<PkBreakdownRow> {
    optimization
        .steps
        .iter()
        .map(|step| PkBreakdownRow {
            matches: step.count,
            pk_points_used: step.points_used(),
            win_per_match: step.win,
            total_win_points: step.total_win(),
        })
        .collect()
}

/// Write an allocation's breakdown as CSV
pub fn export_allocation<P: AsRef<Path>>(path: P, allocation: &Allocation) -> CsvResult<()> {
    let rows = conversion_breakdown_rows(allocation);
    write_conversion_breakdown_csv(&path, &rows)?;
    info!(
        path = %path.as_ref().display(),
        rows = rows.len(),
        "exported conversion breakdown"
    );
    Ok(())
}

/// Write a PK optimization's breakdown as CSV
pub fn export_pk_optimization<P: AsRef<Path>>(
    path: P,
    optimization: &PkOptimization,
) -> CsvResult<()> {
    let rows = pk_breakdown_rows(optimization);
    write_pk_breakdown_csv(&path, &rows)?;
    info!(
        path = %path.as_ref().display(),
        rows = rows.len(),
        "exported pk breakdown"
    );
    Ok(())
}
