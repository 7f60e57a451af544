/*!
# Agency Pay CSV Schema Definitions

This crate provides the **authoritative CSV schemas** used throughout the agency
pay toolkit.

## Purpose

This crate is the boundary between spreadsheet exports and the conversion engine:

- **Catalog files** (inputs) → package catalogs and PK reward tables
- **Pay chart** (input) → broadcaster pay tiers for filtering
- **PK rules sheet** (input) → free-form reward sheet summarized by max win
- **Breakdowns** (outputs) → one row per used package or PK rung

Every row handed to the engine has already been validated here: the engine never
looks at column names and never sees a non-positive cost.

## Schema Files

### Packages CSV (`packages.csv`)
- `cost`: Price of one package in the source currency (u64, > 0)
- `yield`: Amount of target currency one package returns (u64)
- `rebate_percent`: Alternative to `yield`, a percentage of `cost` (0-100)

### Reward Tables CSV (`reward_tables.csv`)
- `table`: PK event type (e.g. "Daily PK")
- `point_cost`: PK points one match costs (u64, > 0)
- `bean_win`: Beans won per match (u64)

### Pay Chart CSV (`pay_chart.csv`)
Spreadsheet column names, any order, surrounding whitespace ignored.

## Usage

```rust,no_run
use agency_pay_csvs::{read_packages_csv, read_reward_tables_csv, CsvResult};

fn example() -> CsvResult<()> {
    let packages = read_packages_csv("packages.csv")?;
    let reward_tables = read_reward_tables_csv("reward_tables.csv")?;
    println!("{} packages, {} rungs", packages.len(), reward_tables.len());
    Ok(())
}
```
*/

pub mod errors;
pub mod pk_rules;
pub mod schemas;
pub mod validation;

// Re-export main types for convenience
pub use errors::{CsvError, CsvResult};
pub use pk_rules::{read_pk_rules_csv, PkRuleRow, PK_TYPE_HEADER, WIN_HEADER_MARKER};
pub use schemas::{
    ConversionBreakdownRow, PackageRow, PayChartRow, PkBreakdownRow, PkRuleSummaryRow,
    RewardTableRow,
};
pub use validation::{
    read_conversion_breakdown_csv, read_packages_csv, read_pay_chart_csv,
    read_pk_breakdown_csv, read_reward_tables_csv, write_conversion_breakdown_csv,
    write_packages_csv, write_pay_chart_csv, write_pk_breakdown_csv,
    write_pk_rule_summary_csv, write_reward_tables_csv,
};
