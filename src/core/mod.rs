//! Core types: identities, players, RNG, configuration, errors.
//!
//! These are the building blocks shared by the deck composer, the restraint
//! resolver, and the session engine.

pub mod config;
pub mod error;
pub mod identity;
pub mod player;
pub mod rng;

pub use config::SessionConfig;
pub use error::{ActionError, SetupError};
pub use identity::{Identity, Rank, Suit};
pub use player::{Player, PlayerId, Roster};
pub use rng::{GameRng, GameRngState};
