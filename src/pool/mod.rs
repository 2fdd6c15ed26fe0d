//! Pool module providing betting pool models and the mock catalog.
//!
//! This module implements:
//! - Pool, game type, and status models with validated invariants
//! - Catalog configuration with per-game fee ladders
//! - Mock catalog construction from an injected random source
//!
//! ## Example
//!
//! ```
//! use game_lobby::pool::CatalogConfig;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let pools = CatalogConfig::default().build(&mut rng)?;
//! assert_eq!(pools.len(), 16);
//! # Ok::<(), game_lobby::pool::PoolError>(())
//! ```

pub mod catalog;
pub mod errors;
pub mod models;

pub use catalog::{CatalogConfig, GameTier};
pub use errors::{PoolError, PoolResult};
pub use models::{GameType, Pool, PoolId, PoolStatus};
