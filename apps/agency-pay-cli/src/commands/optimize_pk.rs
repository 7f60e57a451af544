use super::{budget_from_arg, print_json};
use crate::config::AgencyConfig;
use crate::error::CliResult;
use agency_pay_sdk::{
    allocate, export_pk_optimization, optimize_diamonds, PkOptimization, POINTS_PER_DIAMOND,
};
use serde::Serialize;
use std::path::PathBuf;

/// Beans one table would pay for the whole budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCandidate {
    pub table: String,
    pub beans: u64,
}

#[derive(Debug, Serialize)]
pub struct PkReport {
    pub best: PkOptimization,
    /// Every table in evaluation order
    pub candidates: Vec<TableCandidate>,
}

pub fn run(diamonds: i64, config: &AgencyConfig) -> CliResult<PkReport> {
    let diamonds = budget_from_arg(diamonds)?;
    let tables = config.catalogs.pk_reward_tables()?;

    let best = optimize_diamonds(diamonds, &tables);
    let candidates = tables
        .iter()
        .map(|table| TableCandidate {
            table: table.name.clone(),
            beans: allocate(best.points_budget, &table.rungs).total_yield,
        })
        .collect();

    Ok(PkReport { best, candidates })
}

/// Pick the PK event that turns a Diamond balance into the most Beans
pub fn execute(
    diamonds: i64,
    out: Option<PathBuf>,
    json: bool,
    config: &AgencyConfig,
) -> CliResult<()> {
    let report = run(diamonds, config)?;

    if let Some(out) = &out {
        export_pk_optimization(out, &report.best)?;
    }

    if json {
        return print_json(&report);
    }

    let best = &report.best;
    println!(
        "⚔️  PK optimization ({} Diamonds = {} points)",
        best.points_budget / POINTS_PER_DIAMOND,
        best.points_budget
    );

    for candidate in &report.candidates {
        println!("  {:<20} {:>8} Beans", candidate.table, candidate.beans);
    }

    match &best.chosen_table {
        Some(table) => {
            println!("\n  Best event: {}", table);
            for step in &best.steps {
                println!(
                    "    {} x {} points → {} Beans each ({} total)",
                    step.count,
                    step.cost,
                    step.win,
                    step.total_win()
                );
            }
            println!("  Beans won: {}", best.total_beans_won);
            println!("  Diamonds consumed: {}", best.diamonds_consumed);
            println!("  Unused Diamonds: {}", best.unused_diamonds());
        }
        None => println!("\n  Budget is below every reward rung"),
    }

    if let Some(out) = out {
        println!("\n✅ Breakdown written to {}", out.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_thousand_diamonds() {
        let report = run(10_000, &AgencyConfig::default()).unwrap();

        assert_eq!(report.best.chosen_table.as_deref(), Some("Agency 2 vs 2 PK"));
        assert_eq!(report.best.total_beans_won, 3500);
        assert_eq!(report.best.diamonds_consumed, 10_000);
        assert_eq!(report.candidates.len(), 4);
        assert!(report
            .candidates
            .iter()
            .all(|c| c.beans <= report.best.total_beans_won));
    }

    #[test]
    fn test_small_balance_has_no_winner() {
        let report = run(10, &AgencyConfig::default()).unwrap();

        assert_eq!(report.best.chosen_table, None);
        assert_eq!(report.best.unused_diamonds(), 10);
        assert!(report.candidates.iter().all(|c| c.beans == 0));
    }

    #[test]
    fn test_negative_balance_rejected() {
        assert!(run(-1, &AgencyConfig::default()).is_err());
    }
}
