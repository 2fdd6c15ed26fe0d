//! # Game Lobby
//!
//! In-memory lobby and session state for a real-money betting UI.
//!
//! This library owns the client-side catalog of joinable betting pools and the
//! player leaderboard roster, and tracks which pool the user has joined. There
//! is no server, no persistence, and no money movement here: the catalog and
//! roster are synthetic data built once at startup from a seedable random
//! source, and every operation runs synchronously inside a single UI event
//! handler.
//!
//! ## Core Modules
//!
//! - [`pool`]: Pool models, validation, and the mock catalog builder
//! - [`roster`]: Synthetic player roster with derived win-rate statistics
//! - [`session`]: The store owning lobby state and the join/leave commands
//!
//! ## Example
//!
//! ```
//! use game_lobby::{GameType, SessionStore};
//!
//! let mut store = SessionStore::with_mock_data(7)?;
//!
//! // Render the Bluff The Tough lobby tab
//! let bluff = store.pools_by_game_type(GameType::Bluff);
//! assert_eq!(bluff.len(), 7);
//!
//! // User taps "join" on the cheapest pool
//! let pool = store.join_pool("bluff-0")?;
//! assert_eq!(pool.entry_fee, 20);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Pool models and the mock catalog.
pub mod pool;
pub use pool::{CatalogConfig, GameTier, GameType, Pool, PoolError, PoolId, PoolResult, PoolStatus};

/// Synthetic player roster.
pub mod roster;
pub use roster::{DEFAULT_ROSTER_SIZE, Player, PlayerStats, RosterGenerator};

/// Lobby session state store.
pub mod session;
pub use session::{SessionError, SessionResult, SessionStore};
