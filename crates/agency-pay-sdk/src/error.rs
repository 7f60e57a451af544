use thiserror::Error;

/// Errors that can occur while building catalogs or allocating a budget
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocationError {
    #[error("Invalid budget: {0} (must not be negative)")]
    InvalidBudget(i64),

    #[error("Catalog has no packages")]
    EmptyCatalog,

    #[error("Budget {budget} exceeds the exact allocator ceiling of {max}")]
    BudgetTooLarge { budget: u64, max: u64 },

    #[error("Invalid tier: {0}")]
    InvalidTier(String),

    #[error("Duplicate reward table: {0}")]
    DuplicateTable(String),
}

pub type AllocationResult<T> = Result<T, AllocationError>;
