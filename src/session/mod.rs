//! Session module providing the lobby state store.
//!
//! This module implements:
//! - Exclusive ownership of the pool catalog and player roster
//! - The single current-pool session pointer
//! - Join/leave commands and read-only queries for the presentation layer
//!
//! ## Example
//!
//! ```
//! use game_lobby::session::SessionStore;
//!
//! let mut store = SessionStore::with_mock_data(7)?;
//!
//! let pool = store.join_pool("bluff-0")?;
//! assert_eq!(pool.entry_fee, 20);
//!
//! store.leave_pool();
//! assert!(store.current_pool().is_none());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod errors;
pub mod store;

pub use errors::{SessionError, SessionResult};
pub use store::SessionStore;
