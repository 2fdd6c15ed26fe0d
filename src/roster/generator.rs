//! Mock roster generation.

use super::models::{Player, PlayerStats};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Roster size the application requests at startup
pub const DEFAULT_ROSTER_SIZE: usize = 100;

/// Generator for synthetic leaderboard players
///
/// Wraps a seedable random source so tests can reproduce a roster exactly.
pub struct RosterGenerator {
    rng: StdRng,
}

impl RosterGenerator {
    /// Create a generator seeded for reproducible output
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a generator from an existing random source
    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Generate `count` synthetic players
    ///
    /// Each player draws `wins` from [0, 100) and a further [0, 200) games
    /// beyond those wins, so `total_played >= wins` always holds. Ids are
    /// `player-0 .. player-{count-1}` with display names `Player1` onward.
    pub fn generate(&mut self, count: usize) -> Vec<Player> {
        let players = (0..count)
            .map(|index| {
                let wins: u32 = self.rng.random_range(0..100);
                let beyond_wins: u32 = self.rng.random_range(0..200);

                Player {
                    id: format!("player-{index}"),
                    username: format!("Player{}", index + 1),
                    stats: PlayerStats::new(wins, wins + beyond_wins),
                }
            })
            .collect();

        log::info!("Generated mock roster of {count} players");

        players
    }
}
