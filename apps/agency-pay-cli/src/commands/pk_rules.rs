use super::print_json;
use crate::error::CliResult;
use agency_pay_csvs::{read_pk_rules_csv, write_pk_rule_summary_csv, PkRuleSummaryRow};
use agency_pay_sdk::summarize_pk_rules;
use std::path::{Path, PathBuf};

pub fn run(rules: &Path) -> CliResult<Vec<PkRuleSummaryRow>> {
    let rows = read_pk_rules_csv(rules)?;
    Ok(summarize_pk_rules(&rows))
}

/// Summarize the rules and rewards sheet: best win per PK type
pub fn execute(rules: PathBuf, out: Option<PathBuf>, json: bool) -> CliResult<()> {
    let summary = run(&rules)?;

    if let Some(out) = &out {
        write_pk_rule_summary_csv(out, &summary)?;
    }

    if json {
        return print_json(&summary);
    }

    println!("🏆 PK rewards by maximum win");
    for row in &summary {
        println!("  {:<24} {:>10}", row.pk_type, row.max_win);
    }

    if let Some(out) = out {
        println!("\n✅ Summary written to {}", out.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_summary_from_sheet() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pk_rules.csv");
        fs::write(
            &path,
            "PK Type,Rules,Win 1,Win 2\n\
             Daily PK,daily,210,\"2,700\"\n\
             Star Tasks PK,stars,,4000\n\
             Notes,see above,,\n",
        )
        .unwrap();

        let summary = run(&path).unwrap();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].pk_type, "Star Tasks PK");
        assert_eq!(summary[0].max_win, dec!(4000));
        assert_eq!(summary[1].max_win, dec!(2700));
    }
}
