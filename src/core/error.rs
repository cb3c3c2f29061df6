//! Error taxonomy for setup and for in-session actions.
//!
//! Setup failures are fatal to session construction; action failures are
//! reported to the caller with the specific reason and leave player state
//! untouched. Nothing here is used for control flow beyond local
//! validation, and no operation is retried automatically.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerId;

/// Errors raised while building a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SetupError {
    /// The rules only cover tables of 6 to 13 players.
    #[error("player count {0} is outside the supported 6-13 range")]
    PlayerCount(usize),

    /// Deck size and roster size disagree. Unreachable when the deck comes
    /// from `compose` for the same player count.
    #[error("deck of {cards} cards cannot cover {players} players")]
    DeckMismatch { cards: usize, players: usize },
}

/// Errors raised by trade, hunt, and blood-override actions.
///
/// Rejections that name a rule violation (dead player, trade cap,
/// insufficient blood) are also recorded in the audit log; an unknown id is
/// reported to the caller only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ActionError {
    /// The id does not belong to this session.
    #[error("{0} is not part of this session")]
    UnknownPlayer(PlayerId),

    /// The target is already dead.
    #[error("{0} is dead")]
    PlayerDead(PlayerId),

    /// The trade would push the receiver's balance above the cap.
    #[error("trade would raise {player}'s balance to {would_be}, above the cap of {cap}")]
    TradeCapExceeded {
        player: PlayerId,
        would_be: i64,
        cap: i64,
    },

    /// The giver cannot cover the traded amount.
    #[error("{player} has {blood} blood and cannot give {amount}")]
    InsufficientBlood {
        player: PlayerId,
        blood: i64,
        amount: i64,
    },

    /// A hunt reached a player with no identity bound. Unreachable for
    /// sessions built through `Session::setup`.
    #[error("{0} has no identity assigned")]
    IdentityUnassigned(PlayerId),
}
