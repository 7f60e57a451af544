use crate::config::{AgencyConfig, CatalogPaths};
use crate::error::CliResult;
use agency_pay_csvs::{write_packages_csv, write_reward_tables_csv};
use std::fs;
use std::path::{Path, PathBuf};

pub const BEANS_TO_DIAMONDS_FILE: &str = "beans_to_diamonds.csv";
pub const DIAMONDS_TO_BEANS_FILE: &str = "diamonds_to_beans.csv";
pub const REWARD_TABLES_FILE: &str = "reward_tables.csv";
pub const CONFIG_FILE: &str = "agency.yaml";

/// Write the active catalogs as editable CSVs, plus a config pointing at them
pub fn run(output_dir: &Path, config: &AgencyConfig) -> CliResult<AgencyConfig> {
    fs::create_dir_all(output_dir)?;

    let paths = CatalogPaths {
        beans_to_diamonds: Some(output_dir.join(BEANS_TO_DIAMONDS_FILE)),
        diamonds_to_beans: Some(output_dir.join(DIAMONDS_TO_BEANS_FILE)),
        pk_reward_tables: Some(output_dir.join(REWARD_TABLES_FILE)),
    };

    write_packages_csv(
        output_dir.join(BEANS_TO_DIAMONDS_FILE),
        &config.catalogs.beans_to_diamonds()?.to_package_rows(),
    )?;
    write_packages_csv(
        output_dir.join(DIAMONDS_TO_BEANS_FILE),
        &config.catalogs.diamonds_to_beans()?.to_package_rows(),
    )?;
    write_reward_tables_csv(
        output_dir.join(REWARD_TABLES_FILE),
        &config.catalogs.pk_reward_tables()?.to_rows(),
    )?;

    let written = AgencyConfig {
        engine: config.engine.clone(),
        catalogs: paths,
    };
    fs::write(output_dir.join(CONFIG_FILE), serde_yaml::to_string(&written)?)?;

    Ok(written)
}

pub fn execute(output_dir: PathBuf, config: &AgencyConfig) -> CliResult<()> {
    println!("📋 Writing catalogs to {}", output_dir.display());
    run(&output_dir, config)?;

    for file in [
        BEANS_TO_DIAMONDS_FILE,
        DIAMONDS_TO_BEANS_FILE,
        REWARD_TABLES_FILE,
        CONFIG_FILE,
    ] {
        println!("  ✅ {}", output_dir.join(file).display());
    }
    println!("\nEdit the CSVs, then pass --config {}", output_dir.join(CONFIG_FILE).display());

    Ok(())
}
