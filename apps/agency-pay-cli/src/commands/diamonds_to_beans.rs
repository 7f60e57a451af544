use super::{budget_from_arg, print_allocation, print_json, select_packages};
use crate::config::AgencyConfig;
use crate::error::CliResult;
use agency_pay_sdk::{allocate_optimal, export_allocation, Allocation};
use std::path::PathBuf;

pub fn run(diamonds: i64, packages: &[String], config: &AgencyConfig) -> CliResult<Allocation> {
    let budget = budget_from_arg(diamonds)?;
    let catalog = select_packages(config.catalogs.diamonds_to_beans()?, packages)?;

    Ok(allocate_optimal(budget, &catalog, &config.engine)?)
}

/// Convert Diamonds to the most Beans any package combination allows
pub fn execute(
    diamonds: i64,
    packages: Vec<String>,
    out: Option<PathBuf>,
    json: bool,
    config: &AgencyConfig,
) -> CliResult<()> {
    let allocation = run(diamonds, &packages, config)?;

    if let Some(out) = &out {
        export_allocation(out, &allocation)?;
    }

    if json {
        return print_json(&allocation);
    }

    println!("🫘 Diamonds → Beans ({} Diamonds)", allocation.budget);
    print_allocation(&allocation, "Diamonds", "Beans");

    if let Some(out) = out {
        println!("\n✅ Breakdown written to {}", out.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use agency_pay_sdk::AllocationError;

    #[test]
    fn test_ten_diamonds() {
        let allocation = run(10, &[], &AgencyConfig::default()).unwrap();

        assert_eq!(allocation.total_yield, 40);
        assert_eq!(allocation.leftover, 0);
        assert_eq!(allocation.usage[0].count, 5);
    }

    #[test]
    fn test_ceiling_from_config() {
        let config = AgencyConfig::default()
            .with_max_exact_budget(Some(1_000))
            .unwrap();

        let result = run(1_001, &[], &config);
        assert!(matches!(
            result,
            Err(CliError::Allocation(AllocationError::BudgetTooLarge {
                budget: 1_001,
                max: 1_000
            }))
        ));
    }

    #[test]
    fn test_selection_without_match_gives_zero() {
        let allocation = run(500, &["9→9".to_string()], &AgencyConfig::default()).unwrap();
        assert_eq!(allocation, Allocation::unspent(500));
    }
}
