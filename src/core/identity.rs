//! Identity cards: rank, suit, and the combined identity value.
//!
//! An identity is the secret rank+suit pair assigned to a player at setup.
//! It is an immutable `Copy` value; after assignment it is a read-only fact
//! about the player, consulted by the restraint resolver.
//!
//! Joker is both a rank and a suit: a card is either a full Joker or a
//! regular rank/suit pair, never a mix.

use serde::{Deserialize, Serialize};

/// Card rank. `Joker` only ever pairs with the `Joker` suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    K,
    Q,
    J,
    Joker,
}

impl Rank {
    /// Whether this is the Joker rank.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Rank::Joker)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Rank::K => "K",
            Rank::Q => "Q",
            Rank::J => "J",
            Rank::Joker => "Joker",
        };
        write!(f, "{s}")
    }
}

/// Card suit. `Joker` only ever pairs with the `Joker` rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Club,
    Diamond,
    Joker,
}

impl Suit {
    /// Whether this is the Joker suit.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Suit::Joker)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Suit::Spade => "Spade",
            Suit::Heart => "Heart",
            Suit::Club => "Club",
            Suit::Diamond => "Diamond",
            Suit::Joker => "Joker",
        };
        write!(f, "{s}")
    }
}

/// A secret identity card: a rank and a suit.
///
/// Invariant: rank is Joker if and only if suit is Joker. Use
/// [`Identity::new`] for regular cards and [`Identity::joker`] for Jokers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    rank: Rank,
    suit: Suit,
}

impl Identity {
    /// Create an identity card.
    ///
    /// Panics if exactly one of rank/suit is Joker; a half-Joker card does
    /// not exist in any deck.
    #[must_use]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        assert!(
            rank.is_joker() == suit.is_joker(),
            "rank and suit must agree on Joker"
        );
        Self { rank, suit }
    }

    /// The Joker identity.
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            rank: Rank::Joker,
            suit: Suit::Joker,
        }
    }

    /// Get the rank.
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Get the suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Whether this card is the Joker.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        self.rank.is_joker()
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_joker() {
            write!(f, "Joker")
        } else {
            write!(f, "{} {}", self.suit, self.rank)
        }
    }
}
