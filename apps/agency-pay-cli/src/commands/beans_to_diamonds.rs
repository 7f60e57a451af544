use super::{budget_from_arg, print_allocation, print_json, select_packages};
use crate::config::AgencyConfig;
use crate::error::CliResult;
use agency_pay_sdk::{allocate, allocate_optimal, export_allocation, Allocation, AllocationError};
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Serialize)]
pub struct BeansToDiamondsReport {
    pub greedy: Allocation,
    /// Present when `--compare-exact` was given and the budget is under the ceiling
    pub exact: Option<Allocation>,
}

impl BeansToDiamondsReport {
    /// Diamonds the greedy pass leaves behind compared to the optimum
    pub fn shortfall(&self) -> Option<u64> {
        self.exact
            .as_ref()
            .map(|exact| exact.total_yield.saturating_sub(self.greedy.total_yield))
    }
}

pub fn run(
    beans: i64,
    packages: &[String],
    compare_exact: bool,
    config: &AgencyConfig,
) -> CliResult<BeansToDiamondsReport> {
    let budget = budget_from_arg(beans)?;
    let catalog = select_packages(config.catalogs.beans_to_diamonds()?, packages)?;

    let greedy = allocate(budget, &catalog);

    let exact = if compare_exact {
        match allocate_optimal(budget, &catalog, &config.engine) {
            Ok(exact) => Some(exact),
            Err(AllocationError::BudgetTooLarge { budget, max }) => {
                warn!(budget, max, "budget above exact ceiling, skipping comparison");
                None
            }
            Err(e) => return Err(e.into()),
        }
    } else {
        None
    };

    Ok(BeansToDiamondsReport { greedy, exact })
}

/// Convert Beans to Diamonds with the greedy package pass
pub fn execute(
    beans: i64,
    packages: Vec<String>,
    compare_exact: bool,
    out: Option<PathBuf>,
    json: bool,
    config: &AgencyConfig,
) -> CliResult<()> {
    let report = run(beans, &packages, compare_exact, config)?;

    if let Some(out) = &out {
        export_allocation(out, &report.greedy)?;
    }

    if json {
        return print_json(&report);
    }

    println!("💎 Beans → Diamonds ({} Beans)", report.greedy.budget);
    print_allocation(&report.greedy, "Beans", "Diamonds");

    if let Some(exact) = &report.exact {
        println!("\n  Exact optimum: {} Diamonds", exact.total_yield);
        match report.shortfall() {
            Some(0) | None => println!("  Greedy result is optimal"),
            Some(gap) => println!("  Greedy leaves {} Diamonds unclaimed", gap),
        }
    }

    if let Some(out) = out {
        println!("\n✅ Breakdown written to {}", out.display());
    }

    Ok(())
}
