use agency_pay_sdk::{
    allocate, allocate_optimal, catalogs, Allocation, Catalog, EngineConfig, ExchangeTier,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_catalog(rng: &mut StdRng) -> Catalog {
    let size = rng.gen_range(1..=6);
    (0..size)
        .map(|_| {
            let cost = rng.gen_range(1..=60);
            let yield_amount = rng.gen_range(1..=80);
            ExchangeTier::new(cost, yield_amount).unwrap()
        })
        .collect()
}

fn assert_conserved(allocation: &Allocation) {
    let spent: u64 = allocation.usage.iter().map(|u| u.count * u.tier.cost()).sum();
    let total_yield: u64 = allocation
        .usage
        .iter()
        .map(|u| u.count * u.tier.yield_amount())
        .sum();

    assert_eq!(spent + allocation.leftover, allocation.budget);
    assert_eq!(total_yield, allocation.total_yield);
    assert!(allocation.usage.iter().all(|u| u.count > 0));
}

/// Test that both allocators account for every unit of budget
///
/// Covers random catalogs and budgets, checking:
/// - spent + leftover == budget
/// - total yield == Σ count × yield
/// - no zero-count usage entries
#[test]
fn test_budget_is_conserved() {
    let mut rng = StdRng::seed_from_u64(42);
    let config = EngineConfig::default();

    for _ in 0..200 {
        let catalog = random_catalog(&mut rng);
        let budget = rng.gen_range(0..=2_000);

        assert_conserved(&allocate(budget, &catalog));
        assert_conserved(&allocate_optimal(budget, &catalog, &config).unwrap());
    }
}

/// Test that the exact allocator never yields less than the greedy pass
#[test]
fn test_exact_never_worse_than_greedy() {
    let mut rng = StdRng::seed_from_u64(7);
    let config = EngineConfig::default();

    for _ in 0..200 {
        let catalog = random_catalog(&mut rng);
        let budget = rng.gen_range(0..=2_000);

        let greedy = allocate(budget, &catalog);
        let exact = allocate_optimal(budget, &catalog, &config).unwrap();
        assert!(
            exact.total_yield >= greedy.total_yield,
            "budget {} catalog {:?}: exact {} < greedy {}",
            budget,
            catalog,
            exact.total_yield,
            greedy.total_yield
        );
    }
}

/// Test exact >= greedy on the platform's own catalogs across a budget sweep
#[test]
fn test_exact_never_worse_on_builtin_catalogs() {
    let config = EngineConfig::default();

    for catalog in [catalogs::beans_to_diamonds(), catalogs::diamonds_to_beans()] {
        for budget in (0..=25_000).step_by(37) {
            let greedy = allocate(budget, &catalog);
            let exact = allocate_optimal(budget, &catalog, &config).unwrap();
            assert!(exact.total_yield >= greedy.total_yield);
        }
    }
}

/// Test that repeated calls with identical input return identical results
#[test]
fn test_allocators_are_idempotent() {
    let config = EngineConfig::default();
    let catalog = catalogs::diamonds_to_beans();

    assert_eq!(allocate(12_345, &catalog), allocate(12_345, &catalog));
    assert_eq!(
        allocate_optimal(12_345, &catalog, &config).unwrap(),
        allocate_optimal(12_345, &catalog, &config).unwrap()
    );
}

/// Test the boundary inputs: zero budget and empty catalog
#[test]
fn test_zero_budget_and_empty_catalog_boundaries() {
    let config = EngineConfig::default();
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..20 {
        let catalog = random_catalog(&mut rng);
        assert_eq!(allocate(0, &catalog), Allocation::unspent(0));
        assert_eq!(
            allocate_optimal(0, &catalog, &config).unwrap(),
            Allocation::unspent(0)
        );
    }

    for budget in [0, 1, 999, 10_000] {
        assert_eq!(allocate(budget, &Catalog::empty()), Allocation::unspent(budget));
        assert_eq!(
            allocate_optimal(budget, &Catalog::empty(), &config).unwrap(),
            Allocation::unspent(budget)
        );
    }
}
