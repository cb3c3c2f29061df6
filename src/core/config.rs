//! Session configuration.
//!
//! The defaults reproduce the table rules exactly (20 starting blood, a
//! trade-balance cap of 10, a +3 lethal-hunt bonus). The builder methods
//! exist so tests can pin a deterministic seed and so variants can be
//! explored without touching the engine.

use serde::{Deserialize, Serialize};

/// Configuration for one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of players at the table, 6-13.
    pub player_count: usize,

    /// Seed for the identity shuffle. Same seed, same deal.
    pub seed: u64,

    /// Blood every player starts with.
    pub starting_blood: i64,

    /// Upper bound on a receiver's trade balance.
    pub trade_cap: i64,

    /// Blood granted on top of the victim's remaining blood for a kill.
    pub lethal_bonus: i64,
}

impl SessionConfig {
    /// Create a configuration with the standard rules for `player_count`.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            seed: 0,
            starting_blood: 20,
            trade_cap: 10,
            lethal_bonus: 3,
        }
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting blood.
    #[must_use]
    pub fn starting_blood(mut self, blood: i64) -> Self {
        self.starting_blood = blood;
        self
    }

    /// Set the trade-balance cap.
    #[must_use]
    pub fn trade_cap(mut self, cap: i64) -> Self {
        self.trade_cap = cap;
        self
    }

    /// Set the lethal-hunt bonus.
    #[must_use]
    pub fn lethal_bonus(mut self, bonus: i64) -> Self {
        self.lethal_bonus = bonus;
        self
    }
}
