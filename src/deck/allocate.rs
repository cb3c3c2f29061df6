//! Random identity allocation.
//!
//! Applies a uniformly random permutation to the composed deck and binds
//! one card to each player in roster order: a bijection, every card
//! consumed exactly once, no player left unassigned.

use tracing::debug;

use super::compose::Deck;
use crate::core::{GameRng, Roster, SetupError};
use crate::events::{AuditLog, Event};

/// Shuffle `deck` and bind one identity to every player in `roster`.
///
/// Fails if deck and roster sizes disagree; this cannot happen when the
/// deck was composed for the roster's player count. Appends one
/// `SessionInitialized` event per player.
pub fn allocate(
    roster: &mut Roster,
    mut deck: Deck,
    rng: &mut GameRng,
    log: &mut AuditLog,
) -> Result<(), SetupError> {
    if deck.len() != roster.len() {
        return Err(SetupError::DeckMismatch {
            cards: deck.len(),
            players: roster.len(),
        });
    }

    deck.shuffle(rng);

    for (player, &card) in roster.iter_mut().zip(deck.cards()) {
        player.bind_identity(card);
        debug!(player = %player.id(), "identity dealt");
        log.push(Event::SessionInitialized {
            player: player.id(),
            identity: card,
            blood: player.blood(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::deck::compose;

    #[test]
    fn test_bijection() {
        let mut roster = Roster::new(11, 20);
        let deck = compose(11).unwrap();
        let mut expected: Vec<_> = deck.cards().to_vec();

        let mut log = AuditLog::new();
        allocate(&mut roster, deck, &mut GameRng::new(7), &mut log).unwrap();

        let mut dealt: Vec<_> = roster.iter().map(|p| p.identity().unwrap()).collect();

        // Same multiset of cards, every player assigned.
        let key = |i: &crate::core::Identity| format!("{i}");
        expected.sort_by_key(key);
        dealt.sort_by_key(key);
        assert_eq!(expected, dealt);
    }

    #[test]
    fn test_emits_one_event_per_player() {
        let mut roster = Roster::new(6, 20);
        let mut log = AuditLog::new();
        allocate(&mut roster, compose(6).unwrap(), &mut GameRng::new(1), &mut log).unwrap();

        assert_eq!(log.len(), 6);
        for (i, event) in log.iter().enumerate() {
            match event {
                Event::SessionInitialized { player, blood, .. } => {
                    assert_eq!(*player, PlayerId::new(i as u8 + 1));
                    assert_eq!(*blood, 20);
                }
                other => panic!("unexpected event {other:?}"),
            }
        }
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let mut roster = Roster::new(7, 20);
        let deck = compose(8).unwrap();
        let mut log = AuditLog::new();

        let err = allocate(&mut roster, deck, &mut GameRng::new(1), &mut log).unwrap_err();
        assert_eq!(err, SetupError::DeckMismatch { cards: 8, players: 7 });

        // Nothing bound, nothing logged.
        assert!(roster.iter().all(|p| p.identity().is_none()));
        assert!(log.is_empty());
    }

    #[test]
    fn test_same_seed_same_deal() {
        let deal = |seed| {
            let mut roster = Roster::new(10, 20);
            let mut log = AuditLog::new();
            allocate(&mut roster, compose(10).unwrap(), &mut GameRng::new(seed), &mut log)
                .unwrap();
            roster
                .iter()
                .map(|p| p.identity().unwrap())
                .collect::<Vec<_>>()
        };

        assert_eq!(deal(42), deal(42));
        assert_ne!(deal(42), deal(43));
    }
}
