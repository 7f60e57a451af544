/*!
# PK Reward Optimizer

Given a PK points budget, find the event type that wins the most Beans.

Each reward table is evaluated on its own against the *full* budget with the
greedy strategy (largest rung first); budgets are not shared between tables.
The table with the strictly highest total wins. On a tie the table that comes
first in the [`RewardCatalog`] is kept, so the result depends on catalog order:
the built-in tables and reward_tables.csv both have a defined order.

Points and Diamonds convert at a fixed [`POINTS_PER_DIAMOND`] : 1.
*/

use crate::allocation::{allocate, Allocation};
use crate::catalog::RewardCatalog;
use crate::constants::POINTS_PER_DIAMOND;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// `count` matches at rung (`cost` points → `win` beans)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PkStep {
    pub count: u64,
    pub cost: u64,
    pub win: u64,
}

impl PkStep {
    pub fn points_used(&self) -> u64 {
        self.count * self.cost
    }

    pub fn total_win(&self) -> u64 {
        self.count.saturating_mul(self.win)
    }
}

/// Best PK table for a points budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PkOptimization {
    /// `None` when no table can spend any of the budget
    pub chosen_table: Option<String>,
    pub total_beans_won: u64,
    /// Rungs of the chosen table, most expensive first
    pub steps: Vec<PkStep>,
    pub points_budget: u64,
    pub points_spent: u64,
    pub diamonds_consumed: u64,
    pub leftover_points: u64,
}

impl PkOptimization {
    /// No table chosen; the whole budget is left over
    pub fn empty(points_budget: u64) -> Self {
        Self {
            chosen_table: None,
            total_beans_won: 0,
            steps: Vec::new(),
            points_budget,
            points_spent: 0,
            diamonds_consumed: 0,
            leftover_points: points_budget,
        }
    }

    fn from_allocation(table: &str, allocation: &Allocation) -> Self {
        let steps = allocation
            .usage
            .iter()
            .map(|usage| PkStep {
                count: usage.count,
                cost: usage.tier.cost(),
                win: usage.tier.yield_amount(),
            })
            .collect();

        let points_spent = allocation.spent();

        Self {
            chosen_table: Some(table.to_string()),
            total_beans_won: allocation.total_yield,
            steps,
            points_budget: allocation.budget,
            points_spent,
            diamonds_consumed: points_spent / POINTS_PER_DIAMOND,
            leftover_points: allocation.leftover,
        }
    }

    /// Whole Diamonds' worth of points that were not spent
    pub fn unused_diamonds(&self) -> u64 {
        self.leftover_points / POINTS_PER_DIAMOND
    }
}

/// Pick the reward table that turns `points_budget` into the most Beans
///
/// Never fails: a zero or negative budget, an empty catalog, or a budget below
/// every rung yields [`PkOptimization::empty`].
pub fn optimize_reward(points_budget: i64, tables: &RewardCatalog) -> PkOptimization {
    let points = match u64::try_from(points_budget) {
        Ok(points) if points > 0 => points,
        _ => return PkOptimization::empty(points_budget.max(0) as u64),
    };

    let mut best: Option<(&str, Allocation)> = None;

    for table in tables.iter() {
        let allocation = allocate(points, &table.rungs);
        debug!(
            table = %table.name,
            beans = allocation.total_yield,
            leftover = allocation.leftover,
            "evaluated pk table"
        );

        let best_yield = best.as_ref().map_or(0, |(_, b)| b.total_yield);
        if allocation.total_yield > best_yield {
            best = Some((table.name.as_str(), allocation));
        }
    }

    match best {
        Some((name, allocation)) => {
            let result = PkOptimization::from_allocation(name, &allocation);
            info!(
                table = name,
                points,
                beans = result.total_beans_won,
                diamonds = result.diamonds_consumed,
                "selected pk table"
            );
            result
        }
        None => PkOptimization::empty(points),
    }
}

/// [`optimize_reward`] for a Diamond amount, converted to points at 10:1
pub fn optimize_diamonds(diamonds: u64, tables: &RewardCatalog) -> PkOptimization {
    let points = diamonds.saturating_mul(POINTS_PER_DIAMOND);
    optimize_reward(i64::try_from(points).unwrap_or(i64::MAX), tables)
}
