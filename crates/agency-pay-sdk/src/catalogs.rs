//! Built-in exchange catalogs and PK reward tables.
//!
//! These are the platform's published rates; a packages.csv or
//! reward_tables.csv replaces them when the rates change.

use crate::catalog::{Catalog, ExchangeTier, RewardCatalog, RewardTable};

/// (beans, diamonds)
const BEANS_TO_DIAMONDS: &[(u64, u64)] = &[
    (10999, 3045),
    (3999, 1105),
    (999, 275),
    (109, 29),
    (8, 2),
];

/// (diamonds, beans)
const DIAMONDS_TO_BEANS: &[(u64, u64)] = &[
    (2, 8),
    (29, 109),
    (275, 999),
    (1105, 3999),
    (3045, 10999),
];

/// (table, [(points, beans won)])
const PK_REWARD_TABLES: &[(&str, &[(u64, u64)])] = &[
    (
        "Daily PK",
        &[
            (7000, 210),
            (10000, 300),
            (20000, 600),
            (30000, 900),
            (50000, 1000),
            (100000, 1800),
            (150000, 2700),
        ],
    ),
    (
        "Talent PK",
        &[
            (5000, 150),
            (10000, 350),
            (20000, 700),
            (30000, 1000),
            (50000, 1700),
        ],
    ),
    (
        "Agency 2 vs 2 PK",
        &[
            (5000, 150),
            (10000, 300),
            (25000, 800),
            (50000, 1700),
            (70000, 2300),
            (100000, 3500),
        ],
    ),
    (
        "Star Tasks PK",
        &[
            (2000, 60),
            (10000, 320),
            (50000, 1700),
            (80000, 2800),
            (100000, 3500),
            (120000, 4000),
        ],
    ),
];

fn static_catalog(pairs: &[(u64, u64)]) -> Catalog {
    pairs
        .iter()
        .filter_map(|&(cost, yield_amount)| ExchangeTier::new(cost, yield_amount).ok())
        .collect()
}

/// Beans→Diamonds packages, most expensive first
pub fn beans_to_diamonds() -> Catalog {
    static_catalog(BEANS_TO_DIAMONDS)
}

/// Diamonds→Beans packages, cheapest first
pub fn diamonds_to_beans() -> Catalog {
    static_catalog(DIAMONDS_TO_BEANS)
}

/// The four PK event tables in evaluation order
pub fn pk_reward_tables() -> RewardCatalog {
    let tables = PK_REWARD_TABLES
        .iter()
        .map(|(name, rungs)| RewardTable::new(*name, static_catalog(rungs)))
        .collect();

    // Names above are distinct
    RewardCatalog::new(tables).unwrap_or_default()
}
