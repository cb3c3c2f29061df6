//! Deck composition table.
//!
//! The deck always carries K, Q, and J of every included suit, plus zero to
//! two Jokers, so that the card count equals the player count:
//!
//! | players | suits                      | jokers |
//! |---------|----------------------------|--------|
//! | 13      | Spade Heart Club Diamond   | 1      |
//! | 12      | Spade Heart Club Diamond   | 0      |
//! | 11      | Spade Heart Club           | 2      |
//! | 10      | Spade Heart Club           | 1      |
//! | 9       | Spade Heart Club           | 0      |
//! | 8       | Spade Heart                | 2      |
//! | 7       | Spade Heart                | 1      |
//! | 6       | Spade Heart                | 0      |

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, Identity, Rank, SetupError, Suit};

/// The three playing ranks every included suit contributes.
pub const PLAYING_RANKS: [Rank; 3] = [Rank::K, Rank::Q, Rank::J];

const FOUR_SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond];
const THREE_SUITS: [Suit; 3] = [Suit::Spade, Suit::Heart, Suit::Club];
const TWO_SUITS: [Suit; 2] = [Suit::Spade, Suit::Heart];

/// A composed identity deck.
///
/// At most 13 cards, so the storage is inline. Jokers, when multiple, are
/// interchangeable repeated values rather than distinguishable instances.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: SmallVec<[Identity; 13]>,
    joker_count: usize,
}

impl Deck {
    /// The cards, in composition order until shuffled.
    #[must_use]
    pub fn cards(&self) -> &[Identity] {
        &self.cards
    }

    /// Number of cards. Equals the player count the deck was composed for.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is empty. Never true for a composed deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of Jokers in the deck.
    #[must_use]
    pub fn joker_count(&self) -> usize {
        self.joker_count
    }

    /// Shuffle the cards in place.
    pub(crate) fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }
}

/// Compose the deck for a table of `player_count` players.
///
/// Fails if the count is outside 6-13. The result always holds exactly
/// `player_count` cards.
pub fn compose(player_count: usize) -> Result<Deck, SetupError> {
    let (suits, joker_count): (&[Suit], usize) = match player_count {
        13 => (&FOUR_SUITS, 1),
        12 => (&FOUR_SUITS, 0),
        11 => (&THREE_SUITS, 2),
        10 => (&THREE_SUITS, 1),
        9 => (&THREE_SUITS, 0),
        8 => (&TWO_SUITS, 2),
        7 => (&TWO_SUITS, 1),
        6 => (&TWO_SUITS, 0),
        other => return Err(SetupError::PlayerCount(other)),
    };

    let mut cards = SmallVec::new();
    for &suit in suits {
        for &rank in &PLAYING_RANKS {
            cards.push(Identity::new(rank, suit));
        }
    }
    for _ in 0..joker_count {
        cards.push(Identity::joker());
    }

    debug_assert_eq!(cards.len(), player_count);
    Ok(Deck { cards, joker_count })
}
