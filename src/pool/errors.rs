//! Pool error types.

use thiserror::Error;

/// Pool and catalog errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Entry fee must be positive
    #[error("Entry fee must be positive, got {0}")]
    InvalidEntryFee(i64),

    /// Pool capacity must be positive
    #[error("Pool capacity must be positive")]
    InvalidCapacity,

    /// Occupancy exceeds capacity
    #[error("Occupancy {current} exceeds capacity {max}")]
    OverCapacity { current: usize, max: usize },

    /// Catalog tier has no entry fees
    #[error("Tier for {0} has no entry fees")]
    EmptyTier(super::models::GameType),

    /// Catalog tier occupancy range is empty or exceeds capacity
    #[error("Tier for {0} has an invalid occupancy range")]
    InvalidOccupancyRange(super::models::GameType),

    /// Two catalog tiers share a game type (would produce duplicate pool ids)
    #[error("Duplicate tier for game type {0}")]
    DuplicateTier(super::models::GameType),

    /// Unrecognized game type string
    #[error("Unknown game type: {0}")]
    UnknownGameType(String),
}

/// Result type for pool operations
pub type PoolResult<T> = Result<T, PoolError>;
