//! Player roster models.

use serde::{Deserialize, Serialize};

/// Lifetime statistics for a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Games won
    pub wins: u32,

    /// Games played, always >= wins
    pub total_played: u32,

    /// Win percentage in [0, 100], derived from wins and total
    pub win_rate: u32,
}

impl PlayerStats {
    /// Create stats, deriving the win rate
    ///
    /// `win_rate` is `round(wins / total_played * 100)`, or 0 for a player who
    /// has never played. Callers must pass `total_played >= wins`.
    pub fn new(wins: u32, total_played: u32) -> Self {
        debug_assert!(total_played >= wins);

        let win_rate = if total_played > 0 {
            (f64::from(wins) / f64::from(total_played) * 100.0).round() as u32
        } else {
            0
        };

        Self {
            wins,
            total_played,
            win_rate,
        }
    }
}

/// A player on the mock leaderboard roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique player ID (e.g. `player-0`)
    pub id: String,

    /// Display name
    pub username: String,

    /// Lifetime statistics
    pub stats: PlayerStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_rate_zero_when_never_played() {
        let stats = PlayerStats::new(0, 0);
        assert_eq!(stats.win_rate, 0);
    }

    #[test]
    fn test_win_rate_rounds_to_nearest() {
        // 1/3 = 33.33..% rounds down
        assert_eq!(PlayerStats::new(1, 3).win_rate, 33);
        // 2/3 = 66.66..% rounds up
        assert_eq!(PlayerStats::new(2, 3).win_rate, 67);
        // exact halves round away from zero
        assert_eq!(PlayerStats::new(1, 8).win_rate, 13);
    }

    #[test]
    fn test_win_rate_full_record() {
        assert_eq!(PlayerStats::new(10, 10).win_rate, 100);
        assert_eq!(PlayerStats::new(0, 10).win_rate, 0);
    }

    #[test]
    fn test_player_serde_shape() {
        let player = Player {
            id: "player-0".to_string(),
            username: "Player1".to_string(),
            stats: PlayerStats::new(3, 10),
        };

        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(json["id"], "player-0");
        assert_eq!(json["stats"]["win_rate"], 30);
    }
}
