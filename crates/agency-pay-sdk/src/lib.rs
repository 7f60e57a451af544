/*!
# Agency Pay SDK

Currency conversion and reward optimization for agency broadcasters.

Three currencies circulate on the platform: Beans, Diamonds and PK points. They
convert through fixed package catalogs, and PK events pay out Beans according to
reward tables. This crate answers three questions:

- how many Diamonds a Bean balance buys ([`allocate`], greedy);
- how many Beans a Diamond balance buys at best ([`allocate_optimal`], exact);
- which PK event wins the most Beans for a Diamond balance ([`optimize_reward`]).

Every function is a pure computation over an in-memory catalog. Catalogs come
from [`catalogs`] or from CSVs read with `agency_pay_csvs`.

## Example

```rust
use agency_pay_sdk::{allocate, allocate_optimal, catalogs, EngineConfig};

let diamonds = allocate(10_000, &catalogs::beans_to_diamonds());
assert_eq!(diamonds.total_yield, 2760);
assert_eq!(diamonds.leftover, 4);

let beans = allocate_optimal(10, &catalogs::diamonds_to_beans(), &EngineConfig::default())
    .expect("budget under ceiling");
assert_eq!(beans.total_yield, 40);
```
*/

mod allocation;
mod breakdown_export;
mod catalog;
pub mod catalogs;
mod config;
mod constants;
mod error;
mod pay_chart;
mod pk_optimizer;
mod pk_rules;

pub use allocation::{allocate, allocate_optimal, Allocation, Budget, TierUsage};
pub use breakdown_export::{
    conversion_breakdown_rows, export_allocation, export_pk_optimization, pk_breakdown_rows,
};
pub use catalog::{Catalog, ExchangeTier, RewardCatalog, RewardTable};
pub use config::EngineConfig;
pub use constants::{DEFAULT_MAX_EXACT_BUDGET, POINTS_PER_DIAMOND};
pub use error::{AllocationError, AllocationResult};
pub use pay_chart::{
    bean_to_usd_rate, diamond_bounds, display_rows, filter_pay_chart, rank_options,
    salary_bounds, PayChartFilter,
};
pub use pk_optimizer::{optimize_diamonds, optimize_reward, PkOptimization, PkStep};
pub use pk_rules::summarize_pk_rules;
