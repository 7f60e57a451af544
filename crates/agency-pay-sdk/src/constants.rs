/// PK points bought by one Diamond. Fixed by the platform, not derived from any catalog.
pub const POINTS_PER_DIAMOND: u64 = 10;

/// Default ceiling for the exact allocator's budget.
///
/// The DP table holds one yield and one choice per budget unit (16 bytes), so
/// 5M units stays under 100 MB.
pub const DEFAULT_MAX_EXACT_BUDGET: u64 = 5_000_000;
