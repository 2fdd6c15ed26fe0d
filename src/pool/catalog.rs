//! Mock pool catalog construction.

use super::{
    errors::{PoolError, PoolResult},
    models::{GameType, Pool, PoolStatus},
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, ops::Range};

/// Fee ladder and seating for one game type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTier {
    /// Game variant this tier builds pools for
    pub game_type: GameType,

    /// Entry fee ladder, one pool per fee
    pub entry_fees: Vec<i64>,

    /// Seat capacity for every pool in the tier
    pub max_players: usize,

    /// Range the starting occupancy is drawn from
    pub occupancy: Range<usize>,
}

/// Mock catalog configuration
///
/// `Default` reproduces the catalog the application builds at startup: seven
/// Bluff The Tough pools and seven Top Spot pools at 50 seats each, plus two
/// Jackpot Horse pools at 10,000 seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Tiers in catalog order
    pub tiers: Vec<GameTier>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        const STANDARD_FEES: [i64; 7] = [20, 50, 100, 500, 1000, 1500, 2000];

        Self {
            tiers: vec![
                GameTier {
                    game_type: GameType::Bluff,
                    entry_fees: STANDARD_FEES.to_vec(),
                    max_players: 50,
                    occupancy: 5..35,
                },
                GameTier {
                    game_type: GameType::TopSpot,
                    entry_fees: STANDARD_FEES.to_vec(),
                    max_players: 50,
                    occupancy: 5..35,
                },
                GameTier {
                    game_type: GameType::Jackpot,
                    entry_fees: vec![20, 50],
                    max_players: 10_000,
                    occupancy: 1000..6000,
                },
            ],
        }
    }
}

impl CatalogConfig {
    /// Validate configuration
    ///
    /// Rejects empty fee ladders, non-positive fees, zero capacities, empty
    /// occupancy ranges, ranges that could seat more players than capacity,
    /// and repeated game types (pool ids are derived from the game type, so a
    /// repeated tier would collide).
    pub fn validate(&self) -> PoolResult<()> {
        let mut seen = HashSet::new();

        for tier in &self.tiers {
            if !seen.insert(tier.game_type) {
                return Err(PoolError::DuplicateTier(tier.game_type));
            }

            if tier.entry_fees.is_empty() {
                return Err(PoolError::EmptyTier(tier.game_type));
            }

            if let Some(&fee) = tier.entry_fees.iter().find(|&&fee| fee <= 0) {
                return Err(PoolError::InvalidEntryFee(fee));
            }

            if tier.max_players == 0 {
                return Err(PoolError::InvalidCapacity);
            }

            if tier.occupancy.is_empty() || tier.occupancy.end > tier.max_players + 1 {
                return Err(PoolError::InvalidOccupancyRange(tier.game_type));
            }
        }

        Ok(())
    }

    /// Build the pool catalog
    ///
    /// Produces one `Waiting` pool per entry fee, with ids `{type}-{index}`
    /// following fee-ladder order and the starting occupancy drawn from the
    /// tier's range. Deterministic for a given configuration and RNG state.
    pub fn build<R: Rng>(&self, rng: &mut R) -> PoolResult<Vec<Pool>> {
        self.validate()?;

        let mut pools = Vec::new();

        for tier in &self.tiers {
            for (index, &entry_fee) in tier.entry_fees.iter().enumerate() {
                let current_players = rng.random_range(tier.occupancy.clone());
                pools.push(Pool::new(
                    format!("{}-{}", tier.game_type, index),
                    tier.game_type,
                    entry_fee,
                    tier.max_players,
                    current_players,
                    PoolStatus::Waiting,
                )?);
            }
        }

        log::info!("Built mock catalog with {} pools", pools.len());

        Ok(pools)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_default_catalog_shape() {
        let mut rng = StdRng::seed_from_u64(0);
        let pools = CatalogConfig::default().build(&mut rng).unwrap();

        assert_eq!(pools.len(), 16);

        let bluff: Vec<_> = pools
            .iter()
            .filter(|p| p.game_type == GameType::Bluff)
            .collect();
        assert_eq!(bluff.len(), 7);
        assert_eq!(bluff[0].id, "bluff-0");
        assert_eq!(bluff[0].entry_fee, 20);
        assert_eq!(bluff[6].id, "bluff-6");
        assert_eq!(bluff[6].entry_fee, 2000);

        let jackpot: Vec<_> = pools
            .iter()
            .filter(|p| p.game_type == GameType::Jackpot)
            .collect();
        assert_eq!(jackpot.len(), 2);
        assert_eq!(jackpot[0].max_players, 10_000);
    }

    #[test]
    fn test_default_catalog_occupancy_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let pools = CatalogConfig::default().build(&mut rng).unwrap();

        for pool in &pools {
            assert!(pool.current_players <= pool.max_players);
            match pool.game_type {
                GameType::Bluff | GameType::TopSpot => {
                    assert!((5..35).contains(&pool.current_players));
                }
                GameType::Jackpot => {
                    assert!((1000..6000).contains(&pool.current_players));
                }
            }
            assert_eq!(pool.status, PoolStatus::Waiting);
        }
    }

    #[test]
    fn test_build_reproducible_from_seed() {
        let config = CatalogConfig::default();
        let first = config.build(&mut StdRng::seed_from_u64(7)).unwrap();
        let second = config.build(&mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_validate_rejects_duplicate_tier() {
        let mut config = CatalogConfig::default();
        let tier = config.tiers[0].clone();
        config.tiers.push(tier);

        let err = config.validate().unwrap_err();
        assert!(matches!(err, PoolError::DuplicateTier(GameType::Bluff)));
    }

    #[test]
    fn test_validate_rejects_non_positive_fee() {
        let mut config = CatalogConfig::default();
        config.tiers[0].entry_fees[2] = 0;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, PoolError::InvalidEntryFee(0)));
    }

    #[test]
    fn test_validate_rejects_occupancy_beyond_capacity() {
        let mut config = CatalogConfig::default();
        config.tiers[0].occupancy = 5..52;

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            PoolError::InvalidOccupancyRange(GameType::Bluff)
        ));
    }

    #[test]
    fn test_validate_allows_occupancy_up_to_capacity() {
        let mut config = CatalogConfig::default();
        config.tiers[0].occupancy = 0..51;

        assert!(config.validate().is_ok());
        let pools = config.build(&mut StdRng::seed_from_u64(3)).unwrap();
        assert!(pools.iter().all(|p| p.current_players <= p.max_players));
    }
}
