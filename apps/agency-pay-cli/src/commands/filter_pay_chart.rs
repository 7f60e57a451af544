use super::print_json;
use crate::error::{CliError, CliResult};
use agency_pay_csvs::{read_pay_chart_csv, write_pay_chart_csv, PayChartRow};
use agency_pay_sdk::{
    bean_to_usd_rate, diamond_bounds, display_rows, filter_pay_chart, rank_options,
    salary_bounds, PayChartFilter,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tracing::info;

/// Filter criteria as given on the command line
#[derive(Debug, Clone, Default)]
pub struct FilterArgs {
    pub ranks: Vec<String>,
    pub min_salary: Option<u64>,
    pub max_salary: Option<u64>,
    pub min_diamonds: Option<u64>,
    pub max_diamonds: Option<u64>,
}

impl FilterArgs {
    fn to_filter(&self) -> CliResult<PayChartFilter> {
        Ok(PayChartFilter {
            ranks: self.ranks.iter().map(|r| r.trim().to_string()).collect(),
            salary: range("salary", self.min_salary, self.max_salary)?,
            diamonds: range("diamonds", self.min_diamonds, self.max_diamonds)?,
        })
    }
}

fn range(
    name: &str,
    min: Option<u64>,
    max: Option<u64>,
) -> CliResult<Option<RangeInclusive<u64>>> {
    if min.is_none() && max.is_none() {
        return Ok(None);
    }

    let (min, max) = (min.unwrap_or(0), max.unwrap_or(u64::MAX));
    if min > max {
        return Err(CliError::InvalidArgument(format!(
            "--min-{name} {min} is above --max-{name} {max}"
        )));
    }
    Ok(Some(min..=max))
}

#[derive(Debug, Serialize)]
pub struct PayChartTier {
    #[serde(flatten)]
    pub row: PayChartRow,
    #[serde(rename = "Bean_to_USD_Rate", with = "rust_decimal::serde::str")]
    pub bean_to_usd_rate: Decimal,
}

#[derive(Debug, Serialize)]
pub struct PayChartReport {
    pub rank_options: Vec<String>,
    pub salary_bounds: Option<(u64, u64)>,
    pub diamond_bounds: Option<(u64, u64)>,
    pub tiers: Vec<PayChartTier>,
}

pub fn run(chart: &Path, args: &FilterArgs) -> CliResult<PayChartReport> {
    let rows = read_pay_chart_csv(chart)?;
    let filter = args.to_filter()?;

    let matched = filter_pay_chart(&rows, &filter);
    info!(total = rows.len(), matched = matched.len(), "filtered pay chart");

    let tiers = display_rows(&matched)
        .into_iter()
        .map(|row| PayChartTier {
            bean_to_usd_rate: bean_to_usd_rate(&row),
            row,
        })
        .collect();

    let as_pair = |range: RangeInclusive<u64>| (*range.start(), *range.end());

    Ok(PayChartReport {
        rank_options: rank_options(&rows),
        salary_bounds: salary_bounds(&rows).map(as_pair),
        diamond_bounds: diamond_bounds(&rows).map(as_pair),
        tiers,
    })
}

/// Filter the agency pay chart by ranking and salary/diamond ranges
pub fn execute(
    chart: PathBuf,
    args: FilterArgs,
    out: Option<PathBuf>,
    json: bool,
) -> CliResult<()> {
    let report = run(&chart, &args)?;

    if let Some(out) = &out {
        let rows: Vec<PayChartRow> = report.tiers.iter().map(|t| t.row.clone()).collect();
        write_pay_chart_csv(out, &rows)?;
    }

    if json {
        return print_json(&report);
    }

    println!("📋 Pay chart: {}", chart.display());
    println!("  Rankings: {}", report.rank_options.join(", "));
    if let Some((min, max)) = report.salary_bounds {
        println!("  Salary range: {} - {} Beans", min, max);
    }
    if let Some((min, max)) = report.diamond_bounds {
        println!("  Diamond range: {} - {}", min, max);
    }

    println!(
        "\n  {:<10} {:>14} {:>14} {:>14} {:>12} {:>14}",
        "Ranking", "Salary", "Diamonds", "Target", "USD", "USD/Bean"
    );
    for tier in &report.tiers {
        println!(
            "  {:<10} {:>14} {:>14} {:>14} {:>12} {:>14}",
            tier.row.ranking,
            tier.row.salary_in_beans,
            tier.row.convertible_diamonds,
            tier.row.target_beans,
            tier.row.broadcaster_remuneration_usd,
            tier.bean_to_usd_rate.round_dp(6)
        );
    }
    println!("  {} tiers matched", report.tiers.len());

    if let Some(out) = out {
        println!("\n✅ Filtered chart written to {}", out.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;
    use std::fs;
    use tempfile::TempDir;

    const CHART: &str = "\
Ranking , Salary in Beans,Convertible Diamonds,Target Beans,Broadcaster Remuneration (USD),Effective Broadcasting Limit,Billable Hours Limit
S1,200000,50000,400,100,20 days,40
A1,100000,25000,200,50,15 days,30
B1,40000,10000,0,20,10 days,20
";

    fn write_chart(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("pay_chart.csv");
        fs::write(&path, CHART).unwrap();
        path
    }

    #[test]
    fn test_no_filter_keeps_every_tier() {
        let dir = TempDir::new().unwrap();
        let report = run(&write_chart(&dir), &FilterArgs::default()).unwrap();

        assert_eq!(report.tiers.len(), 3);
        assert_eq!(report.rank_options, vec!["A1", "B1", "S1"]);
        assert_eq!(report.salary_bounds, Some((40_000, 200_000)));
        assert_eq!(report.diamond_bounds, Some((10_000, 50_000)));
        assert_eq!(report.tiers[0].bean_to_usd_rate, dec!(0.25));
        assert_eq!(report.tiers[2].bean_to_usd_rate, Decimal::ZERO);
        assert!(report
            .tiers
            .iter()
            .all(|t| t.row.effective_broadcasting_limit.is_none()));
    }

    #[test]
    fn test_rank_and_range_filters_combine() {
        let dir = TempDir::new().unwrap();
        let args = FilterArgs {
            ranks: vec!["S1".to_string(), "A1".to_string()],
            min_salary: Some(100_000),
            max_diamonds: Some(25_000),
            ..Default::default()
        };

        let report = run(&write_chart(&dir), &args).unwrap();
        assert_eq!(report.tiers.len(), 1);
        assert_eq!(report.tiers[0].row.ranking, "A1");
    }

    #[test]
    fn test_inverted_range_rejected() {
        let dir = TempDir::new().unwrap();
        let args = FilterArgs {
            min_salary: Some(10),
            max_salary: Some(5),
            ..Default::default()
        };

        assert!(matches!(
            run(&write_chart(&dir), &args),
            Err(CliError::InvalidArgument(_))
        ));
    }
}
