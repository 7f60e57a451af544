/*!
# Package Catalogs

A catalog is the ordered set of exchange packages for one conversion direction
(Beans→Diamonds, Diamonds→Beans) or, for PK events, the rungs of one reward
table. Catalogs are built once per request from validated CSV rows or from the
built-in tables and are never mutated afterwards.
*/

use crate::error::{AllocationError, AllocationResult};
use agency_pay_csvs::{PackageRow, RewardTableRow};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// One denomination of a conversion catalog: pay `cost`, receive `yield_amount`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExchangeTier {
    cost: u64,
    #[serde(rename = "yield")]
    yield_amount: u64,
}

impl ExchangeTier {
    /// Create a tier; cost and yield must both be positive
    pub fn new(cost: u64, yield_amount: u64) -> AllocationResult<Self> {
        if yield_amount == 0 {
            return Err(AllocationError::InvalidTier(format!(
                "package costing {} yields nothing",
                cost
            )));
        }
        Self::new_allowing_no_op(cost, yield_amount)
    }

    /// Create a tier that may yield zero. Only cost is checked.
    pub fn new_allowing_no_op(cost: u64, yield_amount: u64) -> AllocationResult<Self> {
        if cost == 0 {
            return Err(AllocationError::InvalidTier(
                "package cost must be positive".to_string(),
            ));
        }
        Ok(Self { cost, yield_amount })
    }

    /// Create a tier whose yield is a percentage of its cost, rounded down
    pub fn from_rebate(cost: u64, rebate_percent: Decimal) -> AllocationResult<Self> {
        if rebate_percent < Decimal::ZERO || rebate_percent > Decimal::ONE_HUNDRED {
            return Err(AllocationError::InvalidTier(format!(
                "rebate {}% must be between 0 and 100",
                rebate_percent
            )));
        }

        // Multiply before dividing so whole-percent rebates stay exact
        let yield_amount = (Decimal::from(cost) * rebate_percent / Decimal::ONE_HUNDRED)
            .floor()
            .to_u64()
            .ok_or_else(|| {
                AllocationError::InvalidTier(format!(
                    "rebate {}% of {} does not fit in u64",
                    rebate_percent, cost
                ))
            })?;

        Self::new(cost, yield_amount)
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn yield_amount(&self) -> u64 {
        self.yield_amount
    }

    /// Label used in breakdowns and package selection, e.g. `"999→275"`
    pub fn label(&self) -> String {
        format!("{}→{}", self.cost, self.yield_amount)
    }
}

impl fmt::Display for ExchangeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{}", self.cost, self.yield_amount)
    }
}

impl TryFrom<&PackageRow> for ExchangeTier {
    type Error = AllocationError;

    fn try_from(row: &PackageRow) -> AllocationResult<Self> {
        match (row.yield_amount, row.rebate_percent) {
            (Some(yield_amount), None) => Self::new(row.cost, yield_amount),
            (None, Some(percent)) => Self::from_rebate(row.cost, percent),
            _ => Err(AllocationError::InvalidTier(format!(
                "package costing {} must set exactly one of yield or rebate",
                row.cost
            ))),
        }
    }
}

/// Ordered, immutable set of exchange tiers. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    tiers: Vec<ExchangeTier>,
}

impl Catalog {
    pub fn new(tiers: Vec<ExchangeTier>) -> Self {
        Self { tiers }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from `(cost, yield)` pairs
    pub fn from_pairs(pairs: &[(u64, u64)]) -> AllocationResult<Self> {
        pairs
            .iter()
            .map(|&(cost, yield_amount)| ExchangeTier::new(cost, yield_amount))
            .collect::<AllocationResult<Vec<_>>>()
            .map(Self::new)
    }

    /// Build a catalog from validated packages.csv rows
    pub fn from_package_rows(rows: &[PackageRow]) -> AllocationResult<Self> {
        rows.iter()
            .map(ExchangeTier::try_from)
            .collect::<AllocationResult<Vec<_>>>()
            .map(Self::new)
    }

    pub fn to_package_rows(&self) -> Vec<PackageRow> {
        self.tiers
            .iter()
            .map(|tier| PackageRow {
                cost: tier.cost(),
                yield_amount: Some(tier.yield_amount()),
                rebate_percent: None,
            })
            .collect()
    }

    pub fn tiers(&self) -> &[ExchangeTier] {
        &self.tiers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExchangeTier> {
        self.tiers.iter()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.tiers.iter().map(ExchangeTier::label).collect()
    }

    /// Keep only the tiers whose label is listed, preserving catalog order
    ///
    /// # Errors
    ///
    /// * `EmptyCatalog` - if no tier matches
    pub fn select<S: AsRef<str>>(&self, labels: &[S]) -> AllocationResult<Catalog> {
        let wanted: HashSet<&str> = labels.iter().map(AsRef::as_ref).collect();

        let tiers: Vec<ExchangeTier> = self
            .tiers
            .iter()
            .filter(|tier| wanted.contains(tier.label().as_str()))
            .copied()
            .collect();

        if tiers.is_empty() {
            return Err(AllocationError::EmptyCatalog);
        }

        Ok(Self::new(tiers))
    }

    /// Tiers ordered by cost, most expensive first. Equal costs keep catalog order.
    pub fn sorted_by_cost_desc(&self) -> Vec<ExchangeTier> {
        let mut sorted = self.tiers.clone();
        sorted.sort_by(|a, b| b.cost.cmp(&a.cost));
        sorted
    }
}

impl FromIterator<ExchangeTier> for Catalog {
    fn from_iter<I: IntoIterator<Item = ExchangeTier>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ExchangeTier;
    type IntoIter = std::slice::Iter<'a, ExchangeTier>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiers.iter()
    }
}

/// One PK event type: rungs of (point cost → beans won)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardTable {
    pub name: String,
    pub rungs: Catalog,
}

impl RewardTable {
    pub fn new(name: impl Into<String>, rungs: Catalog) -> Self {
        Self {
            name: name.into(),
            rungs,
        }
    }
}

/// Named reward tables in evaluation order
///
/// Order matters: when two tables tie on total reward, the optimizer keeps the
/// one that comes first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardCatalog {
    tables: Vec<RewardTable>,
}

impl RewardCatalog {
    /// # Errors
    ///
    /// * `DuplicateTable` - if two tables share a name
    pub fn new(tables: Vec<RewardTable>) -> AllocationResult<Self> {
        let mut seen = HashSet::new();
        for table in &tables {
            if !seen.insert(table.name.as_str()) {
                return Err(AllocationError::DuplicateTable(table.name.clone()));
            }
        }
        Ok(Self { tables })
    }

    /// Group long-form reward_tables.csv rows by table, in order of first appearance
    pub fn from_rows(rows: &[RewardTableRow]) -> AllocationResult<Self> {
        let mut tables: Vec<(String, Vec<ExchangeTier>)> = Vec::new();

        for row in rows {
            let rung = ExchangeTier::new_allowing_no_op(row.point_cost, row.bean_win)?;
            match tables.iter_mut().find(|(name, _)| *name == row.table) {
                Some((_, rungs)) => rungs.push(rung),
                None => tables.push((row.table.clone(), vec![rung])),
            }
        }

        Self::new(
            tables
                .into_iter()
                .map(|(name, rungs)| RewardTable::new(name, Catalog::new(rungs)))
                .collect(),
        )
    }

    pub fn to_rows(&self) -> Vec<RewardTableRow> {
        self.tables
            .iter()
            .flat_map(|table| {
                table.rungs.iter().map(move |rung| RewardTableRow {
                    table: table.name.clone(),
                    point_cost: rung.cost(),
                    bean_win: rung.yield_amount(),
                })
            })
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RewardTable> {
        self.tables.iter()
    }

    pub fn get(&self, name: &str) -> Option<&RewardTable> {
        self.tables.iter().find(|table| table.name == name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn test_zero_cost_tier_rejected() {
        assert!(matches!(
            ExchangeTier::new(0, 10),
            Err(AllocationError::InvalidTier(_))
        ));
        assert!(ExchangeTier::new_allowing_no_op(0, 0).is_err());
    }

    #[test]
    fn test_zero_yield_needs_explicit_opt_in() {
        assert!(ExchangeTier::new(5, 0).is_err());

        let no_op = ExchangeTier::new_allowing_no_op(5, 0).unwrap();
        assert_eq!(no_op.yield_amount(), 0);
    }

    #[test]
    fn test_rebate_rounds_down() {
        // 27.5% of 999 = 274.725
        let tier = ExchangeTier::from_rebate(999, dec!(27.5)).unwrap();
        assert_eq!(tier.cost(), 999);
        assert_eq!(tier.yield_amount(), 274);

        let whole = ExchangeTier::from_rebate(10_000, dec!(30)).unwrap();
        assert_eq!(whole.yield_amount(), 3000);
    }

    #[test]
    fn test_rebate_out_of_range() {
        assert!(ExchangeTier::from_rebate(100, dec!(100.01)).is_err());
        assert!(ExchangeTier::from_rebate(100, dec!(-1)).is_err());
    }

    #[test]
    fn test_label_format() {
        let tier = ExchangeTier::new(10999, 3045).unwrap();
        assert_eq!(tier.label(), "10999→3045");
        assert_eq!(tier.to_string(), tier.label());
    }

    #[test]
    fn test_sort_is_stable_for_equal_costs() {
        let catalog = Catalog::from_pairs(&[(5, 1), (10, 3), (5, 2), (10, 4)]).unwrap();

        let sorted: Vec<(u64, u64)> = catalog
            .sorted_by_cost_desc()
            .iter()
            .map(|t| (t.cost(), t.yield_amount()))
            .collect();

        assert_eq!(sorted, vec![(10, 3), (10, 4), (5, 1), (5, 2)]);
    }

    #[test]
    fn test_select_preserves_catalog_order() {
        let catalog = Catalog::from_pairs(&[(10999, 3045), (3999, 1105), (8, 2)]).unwrap();

        let selected = catalog.select(&["8→2", "10999→3045"]).unwrap();
        assert_eq!(selected.labels(), vec!["10999→3045", "8→2"]);
    }

    #[test]
    fn test_select_nothing_is_empty_catalog() {
        let catalog = Catalog::from_pairs(&[(8, 2)]).unwrap();

        let result = catalog.select(&["1→1"]);
        assert_eq!(result, Err(AllocationError::EmptyCatalog));
    }

    #[test]
    fn test_catalog_from_package_rows() {
        let rows = vec![
            PackageRow {
                cost: 109,
                yield_amount: Some(29),
                rebate_percent: None,
            },
            PackageRow {
                cost: 1000,
                yield_amount: None,
                rebate_percent: Some(dec!(25)),
            },
        ];

        let catalog = Catalog::from_package_rows(&rows).unwrap();
        assert_eq!(catalog.labels(), vec!["109→29", "1000→250"]);
    }

    #[test]
    fn test_reward_catalog_groups_by_first_appearance() {
        let rows = vec![
            RewardTableRow {
                table: "Talent PK".to_string(),
                point_cost: 5000,
                bean_win: 150,
            },
            RewardTableRow {
                table: "Daily PK".to_string(),
                point_cost: 7000,
                bean_win: 210,
            },
            RewardTableRow {
                table: "Talent PK".to_string(),
                point_cost: 10000,
                bean_win: 350,
            },
        ];

        let catalog = RewardCatalog::from_rows(&rows).unwrap();
        let names: Vec<&str> = catalog.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Talent PK", "Daily PK"]);
        assert_eq!(catalog.get("Talent PK").unwrap().rungs.len(), 2);

        // Rows come back in table order
        assert_eq!(catalog.to_rows()[1].point_cost, 10000);
    }

    #[test]
    fn test_duplicate_table_names_rejected() {
        let rungs = Catalog::from_pairs(&[(5000, 150)]).unwrap();
        let result = RewardCatalog::new(vec![
            RewardTable::new("Daily PK", rungs.clone()),
            RewardTable::new("Daily PK", rungs),
        ]);

        assert_eq!(
            result,
            Err(AllocationError::DuplicateTable("Daily PK".to_string()))
        );
    }
}
