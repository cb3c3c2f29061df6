//! Player identification and the session roster.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Table ids are 1-based, matching how seats
//! are called out at a real table: the first player is `PlayerId(1)`.
//!
//! ## Roster
//!
//! Fixed-size player storage backed by `Vec` for O(1) access by id. Players
//! are created at setup and never removed; death only flips `alive`.

use serde::{Deserialize, Serialize};

use super::error::ActionError;
use super::identity::Identity;

/// Player identifier, 1-based and unique within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Iterate over all player IDs for a session with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// One participant's mutable record.
///
/// Blood, trade balance, and liveness are mutated only by the session
/// engine; the identity is bound exactly once by the allocator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    pub(crate) blood: i64,
    pub(crate) trade_balance: i64,
    pub(crate) identity: Option<Identity>,
    pub(crate) alive: bool,
}

impl Player {
    pub(crate) fn new(id: PlayerId, starting_blood: i64) -> Self {
        Self {
            id,
            blood: starting_blood,
            trade_balance: 0,
            identity: None,
            alive: true,
        }
    }

    /// This player's id.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Current blood total. Never negative.
    #[must_use]
    pub const fn blood(&self) -> i64 {
        self.blood
    }

    /// Net blood received via trades. Capped above, unbounded below.
    #[must_use]
    pub const fn trade_balance(&self) -> i64 {
        self.trade_balance
    }

    /// The assigned identity, or `None` before allocation.
    #[must_use]
    pub const fn identity(&self) -> Option<Identity> {
        self.identity
    }

    /// Whether the player is still in the game.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Bind the identity. Called exactly once, by the allocator.
    pub(crate) fn bind_identity(&mut self, identity: Identity) {
        assert!(self.identity.is_none(), "identity is bound exactly once");
        self.identity = Some(identity);
    }
}

/// The fixed, ordered set of players in a session.
///
/// Index = id - 1; creation order is id order and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create a roster of `player_count` players with ids `1..=player_count`,
    /// each starting at `starting_blood` with no identity.
    #[must_use]
    pub fn new(player_count: usize, starting_blood: i64) -> Self {
        let players = PlayerId::all(player_count)
            .map(|id| Player::new(id, starting_blood))
            .collect();
        Self { players }
    }

    /// Number of players (alive and dead).
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the roster is empty. Never true for a set-up session.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    fn position(&self, id: PlayerId) -> Result<usize, ActionError> {
        let raw = id.0 as usize;
        if raw >= 1 && raw <= self.players.len() {
            Ok(raw - 1)
        } else {
            Err(ActionError::UnknownPlayer(id))
        }
    }

    /// Look up a player by id.
    pub fn get(&self, id: PlayerId) -> Result<&Player, ActionError> {
        self.position(id).map(|i| &self.players[i])
    }

    pub(crate) fn get_mut(&mut self, id: PlayerId) -> Result<&mut Player, ActionError> {
        self.position(id).map(move |i| &mut self.players[i])
    }

    /// Iterate over all players in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    /// Iterate over living players in id order.
    pub fn alive(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.alive)
    }
}
