use crate::constants::DEFAULT_MAX_EXACT_BUDGET;
use serde::{Deserialize, Serialize};

/// Per-request engine settings, passed explicitly into the calls that need them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Largest budget the exact allocator accepts before refusing to build its table
    pub max_exact_budget: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_exact_budget: DEFAULT_MAX_EXACT_BUDGET,
        }
    }
}
