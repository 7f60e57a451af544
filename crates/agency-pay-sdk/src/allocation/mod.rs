/*!
# Allocation

Converting a budget in one currency into another is a package-selection
problem: every catalog tier may be bought any number of times, and the goal is
to turn as much of the budget as possible into yield.

Two strategies are provided:

1. **Greedy** ([`allocate`]): most expensive tier first, one pass. Fast, always
   succeeds, but only optimal when bigger packages are never worse per unit of
   cost. Used for Beans→Diamonds.
2. **Exact** ([`allocate_optimal`]): unbounded-knapsack dynamic programming.
   Guarantees the maximum yield, costs O(budget × tiers) time and O(budget)
   memory. Used for Diamonds→Beans.

The Beans→Diamonds direction still uses the greedy pass even though it can
leave yield on the table; `beans-to-diamonds --compare-exact` reports the gap.

## Invariants

For every [`Allocation`]:
- `spent() + leftover == budget`
- `total_yield == Σ count × tier.yield`
- every recorded usage has `count > 0`
*/

mod exact;
mod greedy;

pub use exact::allocate_optimal;
pub use greedy::allocate;

use crate::catalog::ExchangeTier;
use crate::error::{AllocationError, AllocationResult};
use serde::{Deserialize, Serialize};

/// A validated, non-negative budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Budget(u64);

impl Budget {
    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn amount(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for Budget {
    type Error = AllocationError;

    fn try_from(amount: i64) -> AllocationResult<Self> {
        u64::try_from(amount)
            .map(Self)
            .map_err(|_| AllocationError::InvalidBudget(amount))
    }
}

impl From<Budget> for u64 {
    fn from(budget: Budget) -> Self {
        budget.0
    }
}

/// How many times one tier was bought
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierUsage {
    pub tier: ExchangeTier,
    pub count: u64,
}

impl TierUsage {
    pub fn total_cost(&self) -> u64 {
        self.count * self.tier.cost()
    }

    pub fn total_yield(&self) -> u64 {
        self.count.saturating_mul(self.tier.yield_amount())
    }
}

/// Breakdown of one conversion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Budget the allocation was computed for
    pub budget: u64,
    pub total_yield: u64,
    /// Tiers actually used, in the order the strategy reports them
    pub usage: Vec<TierUsage>,
    pub leftover: u64,
}

impl Allocation {
    /// Nothing bought; the whole budget is left over
    pub fn unspent(budget: u64) -> Self {
        Self {
            budget,
            total_yield: 0,
            usage: Vec::new(),
            leftover: budget,
        }
    }

    pub fn spent(&self) -> u64 {
        self.budget - self.leftover
    }

    pub fn is_empty(&self) -> bool {
        self.usage.is_empty()
    }

    /// Usage count for a given tier, zero if unused
    pub fn count_for(&self, tier: &ExchangeTier) -> u64 {
        self.usage
            .iter()
            .filter(|usage| usage.tier == *tier)
            .map(|usage| usage.count)
            .sum()
    }
}
