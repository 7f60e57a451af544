use crate::error::{CliError, CliResult};
use agency_pay_csvs::{read_packages_csv, read_reward_tables_csv};
use agency_pay_sdk::{catalogs, Catalog, EngineConfig, RewardCatalog};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Configuration file structure
///
/// ```yaml
/// engine:
///   max_exact_budget: 1000000
/// catalogs:
///   diamonds_to_beans: catalogs/diamonds_to_beans.csv
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgencyConfig {
    pub engine: EngineConfig,
    pub catalogs: CatalogPaths,
}

/// Optional CSV overrides for the built-in catalogs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogPaths {
    /// packages.csv used by `beans-to-diamonds`
    pub beans_to_diamonds: Option<PathBuf>,
    /// packages.csv used by `diamonds-to-beans`
    pub diamonds_to_beans: Option<PathBuf>,
    /// reward_tables.csv used by `optimize-pk`
    pub pk_reward_tables: Option<PathBuf>,
}

impl AgencyConfig {
    /// Load from a YAML file, or fall back to defaults when no file is given
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&contents)?;
        config.validate()?;

        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.engine.max_exact_budget == 0 {
            return Err(CliError::InvalidConfig(
                "engine.max_exact_budget must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply command-line overrides on top of the file values
    pub fn with_max_exact_budget(mut self, max_exact_budget: Option<u64>) -> CliResult<Self> {
        if let Some(max) = max_exact_budget {
            self.engine.max_exact_budget = max;
            self.validate()?;
        }
        Ok(self)
    }
}

impl CatalogPaths {
    pub fn beans_to_diamonds(&self) -> CliResult<Catalog> {
        load_packages(self.beans_to_diamonds.as_deref(), catalogs::beans_to_diamonds)
    }

    pub fn diamonds_to_beans(&self) -> CliResult<Catalog> {
        load_packages(self.diamonds_to_beans.as_deref(), catalogs::diamonds_to_beans)
    }

    pub fn pk_reward_tables(&self) -> CliResult<RewardCatalog> {
        match self.pk_reward_tables.as_deref() {
            Some(path) => {
                let rows = read_reward_tables_csv(path)?;
                let tables = RewardCatalog::from_rows(&rows)?;
                info!(path = %path.display(), tables = tables.len(), "loaded reward tables");
                Ok(tables)
            }
            None => Ok(catalogs::pk_reward_tables()),
        }
    }
}

fn load_packages(path: Option<&Path>, builtin: fn() -> Catalog) -> CliResult<Catalog> {
    match path {
        Some(path) => {
            let rows = read_packages_csv(path)?;
            let catalog = Catalog::from_package_rows(&rows)?;
            info!(path = %path.display(), tiers = catalog.len(), "loaded package catalog");
            Ok(catalog)
        }
        None => Ok(builtin()),
    }
}
