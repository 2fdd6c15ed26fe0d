//! Session store owning the pool catalog, player roster, and current pool.

use super::errors::{SessionError, SessionResult};
use crate::{
    pool::{CatalogConfig, GameType, Pool, PoolResult},
    roster::{DEFAULT_ROSTER_SIZE, Player, RosterGenerator},
};
use rand::{SeedableRng, rngs::StdRng};

/// In-memory lobby state for one UI session
///
/// Exclusively owns the pool catalog, the player roster, and the single
/// current-pool pointer. The catalog and roster are built once at construction
/// and never change afterward; the only mutations are joining and leaving a
/// pool. Intended to be constructed explicitly and passed by reference to the
/// presentation components that need it.
pub struct SessionStore {
    /// Pool catalog, immutable after construction
    pools: Vec<Pool>,

    /// Mock leaderboard roster, immutable after construction
    players: Vec<Player>,

    /// Index of the joined pool, if any
    current: Option<usize>,
}

impl SessionStore {
    /// Create a store over an existing catalog and roster
    pub fn new(pools: Vec<Pool>, players: Vec<Player>) -> Self {
        Self {
            pools,
            players,
            current: None,
        }
    }

    /// Create a store with the default mock catalog and a 100-player roster
    ///
    /// This is the application startup path. The catalog and roster are both
    /// derived from `seed`, so the same seed reproduces the same store.
    pub fn with_mock_data(seed: u64) -> PoolResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let pools = CatalogConfig::default().build(&mut rng)?;
        let players = RosterGenerator::from_rng(rng).generate(DEFAULT_ROSTER_SIZE);

        Ok(Self::new(pools, players))
    }

    /// Join a pool by id
    ///
    /// Looks the pool up in the catalog and sets it as the current pool.
    ///
    /// # Errors
    ///
    /// * `SessionError::PoolNotFound` - id is not in the catalog; the current
    ///   pool is left unchanged
    pub fn join_pool(&mut self, pool_id: &str) -> SessionResult<&Pool> {
        // Catalog stays small (<100 pools), linear scan is fine
        match self.pools.iter().position(|pool| pool.id == pool_id) {
            Some(index) => {
                self.current = Some(index);
                let pool = &self.pools[index];
                log::info!(
                    "Joined pool {} ({}, entry fee {})",
                    pool.id,
                    pool.game_type,
                    pool.entry_fee
                );
                Ok(pool)
            }
            None => {
                log::warn!("Join rejected, pool not found: {pool_id}");
                Err(SessionError::PoolNotFound(pool_id.to_string()))
            }
        }
    }

    /// Leave the current pool
    ///
    /// Total: clearing an already-absent pool is a no-op.
    pub fn leave_pool(&mut self) {
        if let Some(index) = self.current.take() {
            log::info!("Left pool {}", self.pools[index].id);
        }
    }

    /// Pools of one game type, in catalog order
    pub fn pools_by_game_type(&self, game_type: GameType) -> Vec<&Pool> {
        self.pools
            .iter()
            .filter(|pool| pool.game_type == game_type)
            .collect()
    }

    /// The full pool catalog
    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    /// The mock player roster
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The currently joined pool, if any
    pub fn current_pool(&self) -> Option<&Pool> {
        self.current.map(|index| &self.pools[index])
    }
}
