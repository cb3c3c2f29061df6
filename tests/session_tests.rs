//! End-to-end session flows: setup, play, death, reporting data.

use cardhunt::{
    Event, HuntOutcome, Identity, PlayerId, Rank, Session, SessionConfig, SetupError, Suit,
    Verdict,
};

fn p(id: u8) -> PlayerId {
    PlayerId::new(id)
}

/// Spade and Heart courts in order: player 1 = Spade K .. player 6 = Heart J.
fn six_court_cards() -> Vec<Identity> {
    let mut cards = Vec::new();
    for suit in [Suit::Spade, Suit::Heart] {
        for rank in [Rank::K, Rank::Q, Rank::J] {
            cards.push(Identity::new(rank, suit));
        }
    }
    cards
}

#[test]
fn setup_deals_a_full_table() {
    let session = Session::setup(SessionConfig::new(8).seed(7)).unwrap();

    assert_eq!(session.player_count(), 8);
    assert_eq!(session.joker_count(), 2);
    assert_eq!(session.alive_players().count(), 8);
    assert_eq!(session.log().len(), 8);

    let jokers_dealt = session
        .players()
        .filter(|pl| pl.identity().is_some_and(Identity::is_joker))
        .count();
    assert_eq!(jokers_dealt, 2);

    for player in session.players() {
        assert_eq!(player.blood(), 20);
        assert_eq!(player.trade_balance(), 0);
        assert!(player.is_alive());
    }
}

#[test]
fn setup_is_deterministic_per_seed() {
    let deal = |seed: u64| {
        Session::setup(SessionConfig::new(13).seed(seed))
            .unwrap()
            .players()
            .map(|pl| pl.identity().unwrap())
            .collect::<Vec<_>>()
    };

    assert_eq!(deal(42), deal(42));
}

#[test]
fn setup_rejects_out_of_range_tables() {
    assert_eq!(
        Session::setup(SessionConfig::new(5)).unwrap_err(),
        SetupError::PlayerCount(5)
    );
    assert_eq!(
        Session::setup(SessionConfig::new(14)).unwrap_err(),
        SetupError::PlayerCount(14)
    );
}

#[test]
fn scripted_deal_requires_matching_count() {
    let err = Session::with_identities(SessionConfig::new(8), &six_court_cards()).unwrap_err();
    assert_eq!(
        err,
        SetupError::DeckMismatch {
            cards: 6,
            players: 8
        }
    );
}

#[test]
fn a_short_game_plays_out() {
    let mut session =
        Session::with_identities(SessionConfig::new(6), &six_court_cards()).unwrap();

    // A cooperative start.
    session.trade(p(2), p(3), 4).unwrap();

    // Heart K hunts Heart Q: rank decides.
    let receipt = session.hunt(p(4), p(5), 6).unwrap();
    assert_eq!(receipt.verdict, Verdict::FirstDominates);
    assert_eq!(session.player(p(4)).unwrap().blood(), 26);
    assert_eq!(session.player(p(5)).unwrap().blood(), 14);

    // A GM ruling bleeds player 5 close to death, then a second hunt ends
    // them.
    session.modify_blood(p(5), -10, "caught in the open").unwrap();
    let receipt = session.hunt(p(4), p(5), 6).unwrap();
    match receipt.outcome {
        HuntOutcome::Strike {
            lethal, transfer, ..
        } => {
            assert!(lethal);
            assert_eq!(transfer, 4 + 3);
        }
        HuntOutcome::Standoff => panic!("K over Q never stands off"),
    }

    assert_eq!(session.alive_players().count(), 5);
    assert!(!session.player(p(5)).unwrap().is_alive());

    // The dead stay on the roster for reporting but are out of the game.
    assert!(session.hunt(p(5), p(1), 2).is_err());
    assert!(session.trade(p(1), p(5), 2).is_err());

    // 6 deals + 2 hunts + 1 trade + 1 override + 2 rejections.
    assert_eq!(session.log().len(), 12);
}

#[test]
fn log_renders_a_running_report() {
    let mut session =
        Session::with_identities(SessionConfig::new(6), &six_court_cards()).unwrap();
    session.trade(p(1), p(2), 5).unwrap();
    session.hunt(p(1), p(5), 10).unwrap();

    let lines: Vec<String> = session.log().iter().map(ToString::to_string).collect();

    assert_eq!(lines[0], "player 1 dealt Spade K, 20 blood");
    assert!(lines.iter().any(|l| l.starts_with("trade: player 1 -> player 2")));
    assert!(lines.iter().any(|l| l.starts_with("hunt: player 1 vs player 5")));
}

#[test]
fn joker_favors_whoever_is_named_first() {
    // 7 players: both courts plus a single Joker, held by player 7.
    let mut cards = six_court_cards();
    cards.push(Identity::joker());

    let mut session = Session::with_identities(SessionConfig::new(7), &cards).unwrap();
    assert_eq!(session.joker_count(), 1);

    // Joker attacks: the attacker wins.
    let receipt = session.hunt(p(7), p(1), 5).unwrap();
    assert_eq!(receipt.verdict, Verdict::FirstDominates);
    assert_eq!(session.player(p(7)).unwrap().blood(), 25);
    assert_eq!(session.player(p(1)).unwrap().blood(), 15);

    // Joker is attacked: the attacker wins again.
    let receipt = session.hunt(p(1), p(7), 5).unwrap();
    assert_eq!(receipt.verdict, Verdict::FirstDominates);
    assert_eq!(session.player(p(1)).unwrap().blood(), 20);
    assert_eq!(session.player(p(7)).unwrap().blood(), 20);
}

#[test]
fn paired_jokers_stand_off() {
    // 8 players: both courts plus two Jokers.
    let mut cards = six_court_cards();
    cards.push(Identity::joker());
    cards.push(Identity::joker());

    let mut session = Session::with_identities(SessionConfig::new(8), &cards).unwrap();
    assert_eq!(session.joker_count(), 2);

    let receipt = session.hunt(p(7), p(8), 5).unwrap();
    assert_eq!(receipt.verdict, Verdict::Tie);
    assert_eq!(receipt.outcome, HuntOutcome::Standoff);
    assert_eq!(session.player(p(7)).unwrap().blood(), 20);
    assert_eq!(session.player(p(8)).unwrap().blood(), 20);
}

#[test]
fn session_snapshot_round_trips() {
    let mut session = Session::setup(SessionConfig::new(9).seed(3)).unwrap();
    session.trade(p(1), p(2), 3).unwrap();
    session.modify_blood(p(4), -6, "ambushed").unwrap();

    let json = serde_json::to_string(&session).unwrap();
    let restored: Session = serde_json::from_str(&json).unwrap();

    assert_eq!(session, restored);
    assert_eq!(restored.log().len(), session.log().len());
}

#[test]
fn independent_sessions_do_not_share_state() {
    let mut one = Session::with_identities(SessionConfig::new(6), &six_court_cards()).unwrap();
    let two = Session::with_identities(SessionConfig::new(6), &six_court_cards()).unwrap();

    one.trade(p(1), p(2), 5).unwrap();

    assert_eq!(one.player(p(1)).unwrap().blood(), 15);
    assert_eq!(two.player(p(1)).unwrap().blood(), 20);
    assert_eq!(two.log().len(), 6);
}

#[test]
fn cloning_snapshots_the_log() {
    let mut session =
        Session::with_identities(SessionConfig::new(6), &six_court_cards()).unwrap();
    let checkpoint = session.clone();

    session.hunt(p(1), p(5), 10).unwrap();

    assert_eq!(checkpoint.log().len(), 6);
    assert_eq!(session.log().len(), 7);
    assert_eq!(checkpoint.player(p(5)).unwrap().blood(), 20);
}

#[test]
fn events_pattern_match_exhaustively() {
    // The exporter can classify every record without rule knowledge.
    let mut session =
        Session::with_identities(SessionConfig::new(6), &six_court_cards()).unwrap();
    session.trade(p(1), p(2), 5).unwrap();
    session.hunt(p(1), p(5), 10).unwrap();
    session.modify_blood(p(3), -2, "").unwrap();
    let _ = session.trade(p(1), p(2), 100);

    let mut kinds = std::collections::HashMap::new();
    for event in session.log().iter() {
        let kind = match event {
            Event::SessionInitialized { .. } => "init",
            Event::TradeApplied { .. } => "trade",
            Event::TradeRejected { .. } => "trade_rejected",
            Event::HuntResolved { .. } => "hunt",
            Event::HuntRejected { .. } => "hunt_rejected",
            Event::BloodModified { .. } => "blood",
        };
        *kinds.entry(kind).or_insert(0) += 1;
    }

    assert_eq!(kinds["init"], 6);
    assert_eq!(kinds["trade"], 1);
    assert_eq!(kinds["hunt"], 1);
    assert_eq!(kinds["blood"], 1);
    assert_eq!(kinds["trade_rejected"], 1);
}
