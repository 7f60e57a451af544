/*!
# CSV Schema Definitions

This module defines the authoritative CSV schemas used by the toolkit.
Input schemas describe the spreadsheet exports an analyst maintains; output
schemas describe the breakdown files the CLI writes.

Output files can be read back with the same structs, so a breakdown that was
exported once can be re-imported without loss.
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ================================================================================================
// Packages CSV Schema
// ================================================================================================

/// Expected headers for packages.csv in exact order
pub const PACKAGES_CSV_HEADERS: &[&str] = &["cost", "yield", "rebate_percent"];

/// Row structure for packages.csv
///
/// **File**: `packages.csv`
/// **Purpose**: One exchange package of a conversion catalog
/// **Consumers**: `beans-to-diamonds` and `diamonds-to-beans` commands
///
/// Exactly one of `yield_amount` and `rebate_percent` must be set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackageRow {
    /// Price of one package in the source currency
    pub cost: u64,

    /// Absolute amount of target currency returned per package
    #[serde(rename = "yield", default)]
    pub yield_amount: Option<u64>,

    /// Yield expressed as a percentage of `cost`
    #[serde(with = "rust_decimal::serde::str_option", default)]
    pub rebate_percent: Option<Decimal>,
}

// ================================================================================================
// Reward Tables CSV Schema
// ================================================================================================

/// Expected headers for reward_tables.csv in exact order
pub const REWARD_TABLES_CSV_HEADERS: &[&str] = &["table", "point_cost", "bean_win"];

/// Row structure for reward_tables.csv
///
/// Tables are laid out long-form: one row per rung, grouped by `table`. The
/// order in which a table name first appears is the order the optimizer
/// evaluates tables in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RewardTableRow {
    /// PK event type this rung belongs to
    pub table: String,

    /// PK points one match costs
    pub point_cost: u64,

    /// Beans won per match
    pub bean_win: u64,
}

// ================================================================================================
// Pay Chart CSV Schema
// ================================================================================================

/// Headers that must be present in pay_chart.csv (any order)
pub const PAY_CHART_REQUIRED_HEADERS: &[&str] = &[
    "Ranking",
    "Salary in Beans",
    "Convertible Diamonds",
    "Target Beans",
    "Broadcaster Remuneration (USD)",
];

/// Row structure for pay_chart.csv
///
/// Column names follow the agency's pay chart spreadsheet. Extra columns are
/// ignored. The two limit columns are optional and are dropped from filtered
/// exports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayChartRow {
    #[serde(rename = "Ranking")]
    pub ranking: String,

    #[serde(rename = "Salary in Beans")]
    pub salary_in_beans: u64,

    #[serde(rename = "Convertible Diamonds")]
    pub convertible_diamonds: u64,

    #[serde(rename = "Target Beans")]
    pub target_beans: u64,

    #[serde(
        rename = "Broadcaster Remuneration (USD)",
        with = "rust_decimal::serde::str"
    )]
    pub broadcaster_remuneration_usd: Decimal,

    #[serde(
        rename = "Effective Broadcasting Limit",
        default,
        skip_serializing
    )]
    pub effective_broadcasting_limit: Option<String>,

    #[serde(rename = "Billable Hours Limit", default, skip_serializing)]
    pub billable_hours_limit: Option<String>,
}

// ================================================================================================
// Output Schemas
// ================================================================================================

/// Headers written for conversion breakdown exports
pub const CONVERSION_BREAKDOWN_HEADERS: &[&str] =
    &["package", "times_used", "total_cost", "total_yield"];

/// One used package in a Beans→Diamonds or Diamonds→Beans breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversionBreakdownRow {
    /// Package label, `"{cost}→{yield}"`
    pub package: String,
    pub times_used: u64,
    pub total_cost: u64,
    pub total_yield: u64,
}

/// Headers written for PK breakdown exports
pub const PK_BREAKDOWN_HEADERS: &[&str] =
    &["matches", "pk_points_used", "win_per_match", "total_win_points"];

/// One rung of the chosen PK table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PkBreakdownRow {
    pub matches: u64,
    pub pk_points_used: u64,
    pub win_per_match: u64,
    pub total_win_points: u64,
}

/// Headers written for pay chart exports
pub const PAY_CHART_EXPORT_HEADERS: &[&str] = &[
    "Ranking",
    "Salary in Beans",
    "Convertible Diamonds",
    "Target Beans",
    "Broadcaster Remuneration (USD)",
];

/// Headers written for the PK rules summary
pub const PK_RULE_SUMMARY_HEADERS: &[&str] = &["PK Type", "Max Win"];

/// One PK type with the best win found across its win columns
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PkRuleSummaryRow {
    #[serde(rename = "PK Type")]
    pub pk_type: String,

    #[serde(rename = "Max Win", with = "rust_decimal::serde::str")]
    pub max_win: Decimal,
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn test_package_row_with_rebate_leaves_yield_empty() {
        let data = "cost,yield,rebate_percent\n1000,,27.5\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let row: PackageRow = rdr.deserialize().next().unwrap().unwrap();

        assert_eq!(row.cost, 1000);
        assert_eq!(row.yield_amount, None);
        assert_eq!(row.rebate_percent, Some(dec!(27.5)));
    }

    #[test]
    fn test_pay_chart_row_ignores_unknown_columns() {
        let data = "Ranking,Salary in Beans,Convertible Diamonds,Target Beans,Broadcaster Remuneration (USD),Notes\n\
                    S1,120000,30000,100000,52.50,top tier\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let row: PayChartRow = rdr.deserialize().next().unwrap().unwrap();

        assert_eq!(row.ranking, "S1");
        assert_eq!(row.salary_in_beans, 120_000);
        assert_eq!(row.broadcaster_remuneration_usd, dec!(52.50));
        assert_eq!(row.effective_broadcasting_limit, None);
        assert_eq!(row.billable_hours_limit, None);
    }

    #[test]
    fn test_pay_chart_export_drops_limit_columns() {
        let row = PayChartRow {
            ranking: "A2".to_string(),
            salary_in_beans: 50_000,
            convertible_diamonds: 12_500,
            target_beans: 40_000,
            broadcaster_remuneration_usd: dec!(20),
            effective_broadcasting_limit: Some("20 days".to_string()),
            billable_hours_limit: Some("40 hours".to_string()),
        };

        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.serialize(&row).unwrap();
        let csv_data = String::from_utf8(wtr.into_inner().unwrap()).unwrap();

        let header = csv_data.lines().next().unwrap();
        assert_eq!(header, PAY_CHART_EXPORT_HEADERS.join(","));
        assert!(!csv_data.contains("20 days"));
    }
}
