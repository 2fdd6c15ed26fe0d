//! Roster module providing the synthetic player leaderboard.
//!
//! This module implements:
//! - Player and statistics models with a derived win rate
//! - Mock roster generation from a seedable random source
//!
//! ## Example
//!
//! ```
//! use game_lobby::roster::RosterGenerator;
//!
//! let players = RosterGenerator::from_seed(7).generate(100);
//! assert_eq!(players.len(), 100);
//! assert_eq!(players[0].id, "player-0");
//! ```

pub mod generator;
pub mod models;

pub use generator::{DEFAULT_ROSTER_SIZE, RosterGenerator};
pub use models::{Player, PlayerStats};
