use super::{Allocation, TierUsage};
use crate::catalog::Catalog;
use tracing::debug;

/// Convert `budget` by buying the most expensive tier as often as it fits, then the next
///
/// Never fails: a zero budget or an empty catalog yields an allocation with no
/// usage. Tiers with equal cost are visited in catalog order.
///
/// This is a heuristic. With catalog `[(4, 5), (3, 3)]` and budget 6 it buys
/// one 4-cost tier (yield 5) where two 3-cost tiers would yield 6. Use
/// [`super::allocate_optimal`] when the maximum matters.
pub fn allocate(budget: u64, catalog: &Catalog) -> Allocation {
    if budget == 0 || catalog.is_empty() {
        return Allocation::unspent(budget);
    }

    let mut remaining = budget;
    let mut total_yield: u64 = 0;
    let mut usage = Vec::new();

    for tier in catalog.sorted_by_cost_desc() {
        let count = remaining / tier.cost();
        if count == 0 {
            continue;
        }

        remaining -= count * tier.cost();
        total_yield = total_yield.saturating_add(count.saturating_mul(tier.yield_amount()));
        usage.push(TierUsage { tier, count });
    }

    debug!(
        budget,
        tiers = catalog.len(),
        total_yield,
        leftover = remaining,
        "greedy allocation"
    );

    Allocation {
        budget,
        total_yield,
        usage,
        leftover: remaining,
    }
}
