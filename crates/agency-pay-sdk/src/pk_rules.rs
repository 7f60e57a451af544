//! Best advertised win per PK type, from the rules and rewards sheet.

use agency_pay_csvs::{PkRuleRow, PkRuleSummaryRow};
use tracing::warn;

/// One summary row per PK type with at least one win value, highest win first
///
/// Rows without a type name or without any numeric win are dropped. Equal wins
/// keep sheet order.
pub fn summarize_pk_rules(rows: &[PkRuleRow]) -> Vec<PkRuleSummaryRow> {
    let mut summary: Vec<PkRuleSummaryRow> = rows
        .iter()
        .filter_map(|row| {
            let pk_type = row.pk_type.trim();
            if pk_type.is_empty() {
                return None;
            }

            let max_win = row.wins.iter().flatten().max().copied();
            if max_win.is_none() {
                warn!(pk_type, "no win values, dropping from summary");
            }

            max_win.map(|max_win| PkRuleSummaryRow {
                pk_type: pk_type.to_string(),
                max_win,
            })
        })
        .collect();

    summary.sort_by(|a, b| b.max_win.cmp(&a.max_win));
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn rule(pk_type: &str, wins: Vec<Option<rust_decimal::Decimal>>) -> PkRuleRow {
        PkRuleRow {
            pk_type: pk_type.to_string(),
            wins,
        }
    }

    #[test]
    fn test_summary_sorted_by_max_win() {
        let rows = vec![
            rule("Daily PK", vec![Some(dec!(210)), Some(dec!(2700))]),
            rule("Star Tasks PK", vec![None, Some(dec!(4000))]),
            rule("Talent PK", vec![Some(dec!(1700))]),
        ];

        let summary = summarize_pk_rules(&rows);
        let ordered: Vec<(&str, rust_decimal::Decimal)> = summary
            .iter()
            .map(|r| (r.pk_type.as_str(), r.max_win))
            .collect();

        assert_eq!(
            ordered,
            vec![
                ("Star Tasks PK", dec!(4000)),
                ("Daily PK", dec!(2700)),
                ("Talent PK", dec!(1700)),
            ]
        );
    }

    #[test]
    fn test_rows_without_type_or_wins_dropped() {
        let rows = vec![
            rule("", vec![Some(dec!(100))]),
            rule("Agency 2 vs 2 PK", vec![None, None]),
            rule("Talent PK", vec![Some(dec!(350))]),
        ];

        let summary = summarize_pk_rules(&rows);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].pk_type, "Talent PK");
    }

    #[test]
    fn test_equal_wins_keep_sheet_order() {
        let rows = vec![
            rule("Agency 2 vs 2 PK", vec![Some(dec!(3500))]),
            rule("Star Tasks PK", vec![Some(dec!(3500))]),
        ];

        let summary = summarize_pk_rules(&rows);
        assert_eq!(summary[0].pk_type, "Agency 2 vs 2 PK");
        assert_eq!(summary[1].pk_type, "Star Tasks PK");
    }
}
