use super::{Allocation, TierUsage};
use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::error::{AllocationError, AllocationResult};
use tracing::debug;

/// Convert `budget` into the maximum achievable yield (unbounded knapsack)
///
/// `best[b]` is the best yield spending at most `b`; `choice[b]` is the tier
/// that last improved it. Reconstruction walks back from `budget` through
/// `choice` until no tier improved the remaining amount, which is the leftover.
/// Usage is reported in catalog order.
///
/// Runs in O(budget × tiers) time and O(budget) memory. The cost grows with the
/// budget's magnitude, not its number of digits, so budgets are capped by
/// [`EngineConfig::max_exact_budget`].
///
/// # Errors
///
/// * `BudgetTooLarge` - if `budget` exceeds the configured ceiling; checked
///   before any table is allocated
pub fn allocate_optimal(
    budget: u64,
    catalog: &Catalog,
    config: &EngineConfig,
) -> AllocationResult<Allocation> {
    if budget > config.max_exact_budget {
        return Err(AllocationError::BudgetTooLarge {
            budget,
            max: config.max_exact_budget,
        });
    }

    if budget == 0 || catalog.is_empty() {
        return Ok(Allocation::unspent(budget));
    }

    // Bounded by max_exact_budget above
    let size = budget as usize + 1;
    let tiers = catalog.tiers();

    let mut best: Vec<u64> = vec![0; size];
    let mut choice: Vec<Option<u32>> = vec![None; size];

    for b in 1..size {
        for (index, tier) in tiers.iter().enumerate() {
            let cost = tier.cost() as usize;
            if cost > b {
                continue;
            }

            let candidate = best[b - cost].saturating_add(tier.yield_amount());
            if candidate > best[b] {
                best[b] = candidate;
                choice[b] = Some(index as u32);
            }
        }
    }

    let mut counts = vec![0u64; tiers.len()];
    let mut b = budget as usize;
    while let Some(index) = choice[b] {
        let index = index as usize;
        counts[index] += 1;
        b -= tiers[index].cost() as usize;
    }

    let usage: Vec<TierUsage> = tiers
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(tier, count)| TierUsage { tier: *tier, count })
        .collect();

    let allocation = Allocation {
        budget,
        total_yield: best[budget as usize],
        usage,
        leftover: b as u64,
    };

    debug!(
        budget,
        tiers = tiers.len(),
        total_yield = allocation.total_yield,
        leftover = allocation.leftover,
        "exact allocation"
    );

    Ok(allocation)
}
