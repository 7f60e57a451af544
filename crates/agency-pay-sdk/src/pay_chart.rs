//! Range and membership filtering over the agency pay chart.

use agency_pay_csvs::PayChartRow;
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Broadcaster remuneration per target Bean; zero when the tier has no target
pub fn bean_to_usd_rate(row: &PayChartRow) -> Decimal {
    if row.target_beans == 0 {
        return Decimal::ZERO;
    }
    row.broadcaster_remuneration_usd / Decimal::from(row.target_beans)
}

/// Distinct non-blank rankings, sorted
pub fn rank_options(rows: &[PayChartRow]) -> Vec<String> {
    rows.iter()
        .map(|row| row.ranking.trim())
        .filter(|ranking| !ranking.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Smallest and largest salary in the chart
pub fn salary_bounds(rows: &[PayChartRow]) -> Option<RangeInclusive<u64>> {
    bounds(rows.iter().map(|row| row.salary_in_beans))
}

/// Smallest and largest convertible diamonds in the chart
pub fn diamond_bounds(rows: &[PayChartRow]) -> Option<RangeInclusive<u64>> {
    bounds(rows.iter().map(|row| row.convertible_diamonds))
}

fn bounds(values: impl Iterator<Item = u64>) -> Option<RangeInclusive<u64>> {
    values.fold(None, |acc, value| match acc {
        None => Some(value..=value),
        Some(range) => Some(*range.start().min(&value)..=*range.end().max(&value)),
    })
}

/// Filter criteria. Every criterion left unset matches all rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayChartFilter {
    /// Rankings to keep; empty keeps every ranking
    pub ranks: BTreeSet<String>,
    /// Inclusive salary range in Beans
    pub salary: Option<RangeInclusive<u64>>,
    /// Inclusive convertible diamonds range
    pub diamonds: Option<RangeInclusive<u64>>,
}

impl PayChartFilter {
    pub fn matches(&self, row: &PayChartRow) -> bool {
        if !self.ranks.is_empty() && !self.ranks.contains(row.ranking.trim()) {
            return false;
        }

        if let Some(salary) = &self.salary {
            if !salary.contains(&row.salary_in_beans) {
                return false;
            }
        }

        if let Some(diamonds) = &self.diamonds {
            if !diamonds.contains(&row.convertible_diamonds) {
                return false;
            }
        }

        true
    }
}

/// Rows matching `filter`, in chart order
pub fn filter_pay_chart<'a>(
    rows: &'a [PayChartRow],
    filter: &PayChartFilter,
) -> Vec<&'a PayChartRow> {
    rows.iter().filter(|row| filter.matches(row)).collect()
}

/// Rows prepared for display and export: limit columns stripped
pub fn display_rows(rows: &[&PayChartRow]) -> Vec<PayChartRow> {
    rows.iter()
        .map(|row| PayChartRow {
            effective_broadcasting_limit: None,
            billable_hours_limit: None,
            ..(*row).clone()
        })
        .collect()
}
