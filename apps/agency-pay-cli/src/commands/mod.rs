pub mod beans_to_diamonds;
pub mod diamonds_to_beans;
pub mod filter_pay_chart;
pub mod optimize_pk;
pub mod pk_rules;
pub mod write_catalogs;

use crate::error::CliResult;
use agency_pay_sdk::{Allocation, AllocationError, Budget, Catalog};
use serde::Serialize;
use tracing::warn;

/// Validate a signed amount from the command line
pub(crate) fn budget_from_arg(amount: i64) -> CliResult<u64> {
    Ok(Budget::try_from(amount)?.amount())
}

/// Narrow a catalog to the packages named on the command line
///
/// No names keeps the whole catalog. Names that match nothing produce an empty
/// catalog with a warning, so the caller reports a zero result.
pub(crate) fn select_packages(catalog: Catalog, packages: &[String]) -> CliResult<Catalog> {
    if packages.is_empty() {
        return Ok(catalog);
    }

    match catalog.select(packages) {
        Ok(selected) => Ok(selected),
        Err(AllocationError::EmptyCatalog) => {
            warn!(
                requested = ?packages,
                available = ?catalog.labels(),
                "no package matches the selection"
            );
            Ok(Catalog::empty())
        }
        Err(e) => Err(e.into()),
    }
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn print_allocation(allocation: &Allocation, spend: &str, receive: &str) {
    if allocation.is_empty() {
        println!("  No package fits the budget");
    }
    for usage in &allocation.usage {
        println!(
            "  {:>12}  x{:<6} {} {:>10}  {} {:>10}",
            usage.tier.label(),
            usage.count,
            spend,
            usage.total_cost(),
            receive,
            usage.total_yield()
        );
    }
    println!("  Total {}: {}", receive, allocation.total_yield);
    println!("  Unused {}: {}", spend, allocation.leftover);
}
