//! Restraint resolution between two identities.
//!
//! Evaluation order, first match wins:
//!
//! 1. Joker cases. Two Jokers tie on tables that deal a Joker pair (11 and
//!    8 players) and otherwise favor the first argument. A single Joker,
//!    on either side, favors the first argument — the published rule table
//!    is asymmetric here and is reproduced literally.
//! 2. Rank cycle K→Q→J→K.
//! 3. Suit tier, only when ranks are equal:
//!    - four suits (13/12 players): Spade→Heart→Club→Diamond→Spade, with
//!      the two diagonals (Spade/Club, Heart/Diamond) tying
//!    - three suits (11/10/9): Spade→Heart→Club→Spade, no ties
//!    - two suits (8/7/6): Spade beats Heart
//! 4. Anything else ties.
//!
//! `resolve` is pure, total, and deterministic for fixed inputs.

use serde::{Deserialize, Serialize};

use crate::core::{Identity, Rank, SetupError, Suit};

/// Outcome of a restraint check between a first and a second identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The first identity restrains the second.
    FirstDominates,
    /// The second identity restrains the first.
    SecondDominates,
    /// Neither side restrains the other.
    Tie,
}

impl Verdict {
    /// Whether neither side won.
    #[must_use]
    pub const fn is_tie(self) -> bool {
        matches!(self, Verdict::Tie)
    }

    /// The same verdict seen from the other side.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Verdict::FirstDominates => Verdict::SecondDominates,
            Verdict::SecondDominates => Verdict::FirstDominates,
            Verdict::Tie => Verdict::Tie,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Verdict::FirstDominates => "first dominates",
            Verdict::SecondDominates => "second dominates",
            Verdict::Tie => "tie",
        };
        write!(f, "{s}")
    }
}

/// Which suit table applies, by table size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuitTier {
    /// 13 or 12 players: the full four-suit cycle with diagonal ties.
    FourSuit,
    /// 11, 10, or 9 players: the three-suit cycle, no ties.
    ThreeSuit,
    /// 8, 7, or 6 players: Spade over Heart.
    TwoSuit,
}

/// The restraint rules in force for one session.
///
/// Derived from the player count once at setup, so resolution never
/// re-consults the deck table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Suit table for equal-rank matchups.
    pub suit_tier: SuitTier,
    /// Whether the deck holds two Jokers, which then tie with each other.
    pub paired_jokers: bool,
}

impl RuleSet {
    /// The rules for a table of `player_count` players.
    pub fn for_player_count(player_count: usize) -> Result<Self, SetupError> {
        let suit_tier = match player_count {
            13 | 12 => SuitTier::FourSuit,
            11 | 10 | 9 => SuitTier::ThreeSuit,
            8 | 7 | 6 => SuitTier::TwoSuit,
            other => return Err(SetupError::PlayerCount(other)),
        };
        Ok(Self {
            suit_tier,
            paired_jokers: matches!(player_count, 11 | 8),
        })
    }
}

/// Resolve the restraint relation between `first` and `second`.
pub fn resolve(first: Identity, second: Identity, rules: RuleSet) -> Verdict {
    match (first.is_joker(), second.is_joker()) {
        (true, true) => {
            return if rules.paired_jokers {
                Verdict::Tie
            } else {
                Verdict::FirstDominates
            };
        }
        // One Joker, either side: the first argument wins. Asymmetric by
        // the published rule table.
        (true, false) | (false, true) => return Verdict::FirstDominates,
        (false, false) => {}
    }

    if let Some(verdict) = rank_cycle(first.rank(), second.rank()) {
        return verdict;
    }

    match rules.suit_tier {
        SuitTier::FourSuit => four_suit(first.suit(), second.suit()),
        SuitTier::ThreeSuit => three_suit(first.suit(), second.suit()),
        SuitTier::TwoSuit => two_suit(first.suit(), second.suit()),
    }
}

/// K→Q→J→K. `None` when the ranks are equal and the suit tier decides.
fn rank_cycle(a: Rank, b: Rank) -> Option<Verdict> {
    use Rank::{J, K, Q};
    match (a, b) {
        (K, Q) | (Q, J) | (J, K) => Some(Verdict::FirstDominates),
        (Q, K) | (J, Q) | (K, J) => Some(Verdict::SecondDominates),
        _ => None,
    }
}

/// Spade→Heart→Club→Diamond→Spade, diagonals tie.
fn four_suit(a: Suit, b: Suit) -> Verdict {
    use Suit::{Club, Diamond, Heart, Spade};
    match (a, b) {
        (Spade, Club) | (Club, Spade) | (Heart, Diamond) | (Diamond, Heart) => Verdict::Tie,
        (Spade, Heart) | (Heart, Club) | (Club, Diamond) | (Diamond, Spade) => {
            Verdict::FirstDominates
        }
        (Heart, Spade) | (Club, Heart) | (Diamond, Club) | (Spade, Diamond) => {
            Verdict::SecondDominates
        }
        _ => Verdict::Tie,
    }
}

/// Spade→Heart→Club→Spade. No tie pairs; a Diamond never reaches this
/// table through a composed deck.
fn three_suit(a: Suit, b: Suit) -> Verdict {
    use Suit::{Club, Heart, Spade};
    match (a, b) {
        (Spade, Heart) | (Heart, Club) | (Club, Spade) => Verdict::FirstDominates,
        (Heart, Spade) | (Club, Heart) | (Spade, Club) => Verdict::SecondDominates,
        _ => Verdict::Tie,
    }
}

/// Spade over Heart.
fn two_suit(a: Suit, b: Suit) -> Verdict {
    use Suit::{Heart, Spade};
    match (a, b) {
        (Spade, Heart) => Verdict::FirstDominates,
        (Heart, Spade) => Verdict::SecondDominates,
        _ => Verdict::Tie,
    }
}
