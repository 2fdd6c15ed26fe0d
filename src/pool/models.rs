//! Pool data models.

use super::errors::PoolError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Pool identifier type
pub type PoolId = String;

/// Game variants a pool can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Bluff,
    TopSpot,
    Jackpot,
}

impl GameType {
    /// All game variants, in catalog order
    pub const ALL: [GameType; 3] = [GameType::Bluff, GameType::TopSpot, GameType::Jackpot];
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameType::Bluff => write!(f, "bluff"),
            GameType::TopSpot => write!(f, "topspot"),
            GameType::Jackpot => write!(f, "jackpot"),
        }
    }
}

impl FromStr for GameType {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bluff" => Ok(GameType::Bluff),
            "topspot" => Ok(GameType::TopSpot),
            "jackpot" => Ok(GameType::Jackpot),
            other => Err(PoolError::UnknownGameType(other.to_string())),
        }
    }
}

/// Pool lifecycle status
///
/// Ordered by progression: waiting < active < completed. No transition is
/// triggered by this layer; pools are built `Waiting` and stay there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolStatus {
    Waiting,
    Active,
    Completed,
}

impl std::fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolStatus::Waiting => write!(f, "waiting"),
            PoolStatus::Active => write!(f, "active"),
            PoolStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A joinable betting round with a fixed entry fee and capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    /// Unique pool ID (e.g. `bluff-0`)
    pub id: PoolId,

    /// Game variant this pool belongs to
    pub game_type: GameType,

    /// Entry fee amount; the currency unit is owned by the wallet layer
    pub entry_fee: i64,

    /// Maximum number of players
    pub max_players: usize,

    /// Players currently in the pool
    pub current_players: usize,

    /// Lifecycle status
    pub status: PoolStatus,
}

impl Pool {
    /// Create a new pool, validating its invariants
    ///
    /// # Errors
    ///
    /// * `PoolError::InvalidEntryFee` - entry fee is not positive
    /// * `PoolError::InvalidCapacity` - capacity is zero
    /// * `PoolError::OverCapacity` - occupancy exceeds capacity
    pub fn new(
        id: PoolId,
        game_type: GameType,
        entry_fee: i64,
        max_players: usize,
        current_players: usize,
        status: PoolStatus,
    ) -> Result<Self, PoolError> {
        if entry_fee <= 0 {
            return Err(PoolError::InvalidEntryFee(entry_fee));
        }

        if max_players == 0 {
            return Err(PoolError::InvalidCapacity);
        }

        if current_players > max_players {
            return Err(PoolError::OverCapacity {
                current: current_players,
                max: max_players,
            });
        }

        Ok(Self {
            id,
            game_type,
            entry_fee,
            max_players,
            current_players,
            status,
        })
    }

    /// Whether the pool has no seats left
    pub fn is_full(&self) -> bool {
        self.current_players >= self.max_players
    }

    /// Number of open seats
    pub fn seats_left(&self) -> usize {
        self.max_players - self.current_players
    }
}
