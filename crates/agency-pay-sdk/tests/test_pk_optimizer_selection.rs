use agency_pay_sdk::{
    allocate, catalogs, optimize_diamonds, optimize_reward, Catalog, RewardCatalog, RewardTable,
    POINTS_PER_DIAMOND,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Test that the chosen table beats or ties every other table
///
/// Sweeps Diamond amounts across the built-in tables and checks:
/// - chosen table's Beans >= greedy Beans of every table
/// - diamonds_consumed × 10 <= points budget
/// - points_spent + leftover_points == points budget
#[test]
fn test_chosen_table_dominates() {
    let tables = catalogs::pk_reward_tables();

    for diamonds in (0..=20_000).step_by(173) {
        let result = optimize_diamonds(diamonds, &tables);
        let points = diamonds * POINTS_PER_DIAMOND;

        for table in tables.iter() {
            assert!(result.total_beans_won >= allocate(points, &table.rungs).total_yield);
        }
        assert!(result.diamonds_consumed * POINTS_PER_DIAMOND <= points);
        assert_eq!(result.points_spent + result.leftover_points, points);
        assert_eq!(result.points_budget, points);
    }
}

/// Test dominance over randomly generated reward tables
#[test]
fn test_chosen_table_dominates_random_tables() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..100 {
        let table_count = rng.gen_range(1..=4);
        let tables: Vec<RewardTable> = (0..table_count)
            .map(|i| {
                let rungs: Catalog = (0..rng.gen_range(1..=5))
                    .map(|_| {
                        let cost = rng.gen_range(1..=50) * 100;
                        let win = rng.gen_range(1..=400);
                        agency_pay_sdk::ExchangeTier::new(cost, win).unwrap()
                    })
                    .collect();
                RewardTable::new(format!("table-{i}"), rungs)
            })
            .collect();
        let tables = RewardCatalog::new(tables).unwrap();
        let budget = rng.gen_range(0..=30_000);

        let result = optimize_reward(budget, &tables);
        let best = tables
            .iter()
            .map(|t| allocate(budget as u64, &t.rungs).total_yield)
            .max()
            .unwrap_or(0);

        assert_eq!(result.total_beans_won, best);
        if best == 0 {
            assert_eq!(result.chosen_table, None);
        }
    }
}

/// Test that the chosen table name always refers to a table in the catalog
#[test]
fn test_chosen_table_exists() {
    let tables = catalogs::pk_reward_tables();

    for points in [200, 1_999, 4_500, 20_000, 100_000, 1_000_000] {
        let result = optimize_reward(points, &tables);
        if let Some(name) = &result.chosen_table {
            assert!(tables.get(name).is_some());
        }
    }
}
