//! Session error types.

use crate::pool::PoolId;
use thiserror::Error;

/// Session errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Join attempted against a pool id absent from the catalog
    #[error("Pool not found: {0}")]
    PoolNotFound(PoolId),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
