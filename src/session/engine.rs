//! Session state and the three mutating operations.
//!
//! ## Lifecycle
//!
//! `Session::setup` composes the deck for the configured table size, deals
//! identities with the seeded RNG, and records one `SessionInitialized`
//! event per player. From then on the session accepts `trade`, `hunt`, and
//! `modify_blood` calls, one at a time, each fully validated and logged
//! before the next.
//!
//! ## Death
//!
//! A player whose blood reaches zero is marked dead. Death is terminal:
//! dead players stay on the roster for reporting but are rejected as a
//! party to any further action.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{
    ActionError, GameRng, Identity, Player, PlayerId, Roster, SessionConfig, SetupError,
};
use crate::deck::{allocate, compose};
use crate::events::{AuditLog, Event, HuntOutcome};
use crate::restraint::{resolve, RuleSet, Verdict};

/// A read-only copy of one player's state, as of one operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub identity: Option<Identity>,
    pub blood: i64,
    pub trade_balance: i64,
    pub alive: bool,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            identity: player.identity(),
            blood: player.blood(),
            trade_balance: player.trade_balance(),
            alive: player.is_alive(),
        }
    }
}

/// Result of a successful trade. Snapshots are post-trade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeReceipt {
    pub giver: PlayerSnapshot,
    pub receiver: PlayerSnapshot,
    pub amount: i64,
}

/// Result of a resolved hunt. Snapshots are post-resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuntReceipt {
    pub attacker: PlayerSnapshot,
    pub defender: PlayerSnapshot,
    pub amount: i64,
    pub verdict: Verdict,
    pub outcome: HuntOutcome,
}

/// Result of a successful blood override. Snapshot is post-adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodReceipt {
    pub player: PlayerSnapshot,
    pub delta: i64,
}

/// One game session: roster, rules, and audit log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    config: SessionConfig,
    rules: RuleSet,
    joker_count: usize,
    roster: Roster,
    log: AuditLog,
}

impl Session {
    /// Build a session: compose the deck, create the roster, deal
    /// identities with the configured seed.
    pub fn setup(config: SessionConfig) -> Result<Self, SetupError> {
        let rules = RuleSet::for_player_count(config.player_count)?;
        let deck = compose(config.player_count)?;
        let joker_count = deck.joker_count();

        let mut roster = Roster::new(config.player_count, config.starting_blood);
        let mut rng = GameRng::new(config.seed);
        let mut log = AuditLog::new();
        allocate(&mut roster, deck, &mut rng, &mut log)?;

        info!(
            player_count = config.player_count,
            joker_count,
            seed = config.seed,
            "session ready"
        );

        Ok(Self {
            config,
            rules,
            joker_count,
            roster,
            log,
        })
    }

    /// Build a session with a scripted deal instead of a shuffle: card `i`
    /// goes to player `i + 1`. For replays and scripted scenarios.
    ///
    /// The cards must match the configured player count; no check is made
    /// that they form a legal deck for that table size.
    pub fn with_identities(
        config: SessionConfig,
        cards: &[Identity],
    ) -> Result<Self, SetupError> {
        let rules = RuleSet::for_player_count(config.player_count)?;
        if cards.len() != config.player_count {
            return Err(SetupError::DeckMismatch {
                cards: cards.len(),
                players: config.player_count,
            });
        }

        let mut roster = Roster::new(config.player_count, config.starting_blood);
        let mut log = AuditLog::new();
        let mut joker_count = 0;
        for (player, &card) in roster.iter_mut().zip(cards) {
            player.bind_identity(card);
            if card.is_joker() {
                joker_count += 1;
            }
            log.push(Event::SessionInitialized {
                player: player.id(),
                identity: card,
                blood: player.blood(),
            });
        }

        Ok(Self {
            config,
            rules,
            joker_count,
            roster,
            log,
        })
    }

    // === Queries ===

    /// The configuration the session was built with.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The restraint rules in force.
    #[must_use]
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Number of players, alive and dead.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    /// Number of Jokers dealt at this table.
    #[must_use]
    pub fn joker_count(&self) -> usize {
        self.joker_count
    }

    /// Look up one player.
    pub fn player(&self, id: PlayerId) -> Result<&Player, ActionError> {
        self.roster.get(id)
    }

    /// All players in id order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.roster.iter()
    }

    /// Living players in id order.
    pub fn alive_players(&self) -> impl Iterator<Item = &Player> {
        self.roster.alive()
    }

    /// The audit log.
    #[must_use]
    pub fn log(&self) -> &AuditLog {
        &self.log
    }

    // === Mutations ===

    /// Transfer `amount` blood from `giver` to `receiver`.
    ///
    /// Preconditions, first failure wins: both exist, both alive, the
    /// receiver's trade balance stays at or under the cap, the giver can
    /// cover the amount. A rule rejection is recorded in the log; an
    /// unknown id is reported to the caller only.
    pub fn trade(
        &mut self,
        giver: PlayerId,
        receiver: PlayerId,
        amount: i64,
    ) -> Result<TradeReceipt, ActionError> {
        let g = self.roster.get(giver)?;
        let r = self.roster.get(receiver)?;

        if let Err(reason) = Self::check_trade(g, r, amount, self.config.trade_cap) {
            debug!(%giver, %receiver, amount, %reason, "trade refused");
            self.log.push(Event::TradeRejected {
                giver,
                receiver,
                amount,
                reason,
            });
            return Err(reason);
        }

        // One side at a time; a self-trade nets to zero, as at a real table.
        {
            let g = self.roster.get_mut(giver)?;
            g.blood -= amount;
            g.trade_balance -= amount;
        }
        {
            let r = self.roster.get_mut(receiver)?;
            r.blood += amount;
            r.trade_balance += amount;
        }

        let giver_snap = PlayerSnapshot::from(self.roster.get(giver)?);
        let receiver_snap = PlayerSnapshot::from(self.roster.get(receiver)?);
        self.log.push(Event::TradeApplied {
            giver,
            receiver,
            amount,
            giver_blood: giver_snap.blood,
            receiver_blood: receiver_snap.blood,
            giver_balance: giver_snap.trade_balance,
            receiver_balance: receiver_snap.trade_balance,
        });
        debug!(%giver, %receiver, amount, "trade applied");

        Ok(TradeReceipt {
            giver: giver_snap,
            receiver: receiver_snap,
            amount,
        })
    }

    fn check_trade(
        giver: &Player,
        receiver: &Player,
        amount: i64,
        cap: i64,
    ) -> Result<(), ActionError> {
        if !giver.is_alive() {
            return Err(ActionError::PlayerDead(giver.id()));
        }
        if !receiver.is_alive() {
            return Err(ActionError::PlayerDead(receiver.id()));
        }
        if receiver.trade_balance() + amount > cap {
            return Err(ActionError::TradeCapExceeded {
                player: receiver.id(),
                would_be: receiver.trade_balance() + amount,
                cap,
            });
        }
        if giver.blood() < amount {
            return Err(ActionError::InsufficientBlood {
                player: giver.id(),
                blood: giver.blood(),
                amount,
            });
        }
        Ok(())
    }

    /// `attacker` hunts `defender` for `amount` blood.
    ///
    /// The restraint verdict between the two identities decides who takes
    /// blood from whom; the attacker loses a reversed hunt exactly as a
    /// defender would. A side whose blood is covered by the stake dies and
    /// yields its remaining blood plus the lethal bonus. A tie moves no
    /// blood but is still recorded.
    pub fn hunt(
        &mut self,
        attacker: PlayerId,
        defender: PlayerId,
        amount: i64,
    ) -> Result<HuntReceipt, ActionError> {
        let a = self.roster.get(attacker)?;
        let d = self.roster.get(defender)?;

        let dead = [a, d].into_iter().find(|p| !p.is_alive()).map(Player::id);
        if let Some(id) = dead {
            let reason = ActionError::PlayerDead(id);
            debug!(%attacker, %defender, amount, %reason, "hunt refused");
            self.log.push(Event::HuntRejected {
                attacker,
                defender,
                amount,
                reason,
            });
            return Err(reason);
        }

        let attacker_identity = a
            .identity()
            .ok_or(ActionError::IdentityUnassigned(attacker))?;
        let defender_identity = d
            .identity()
            .ok_or(ActionError::IdentityUnassigned(defender))?;
        let attacker_before = a.blood();
        let defender_before = d.blood();

        let verdict = resolve(attacker_identity, defender_identity, self.rules);
        let outcome = match verdict {
            Verdict::FirstDominates => self.strike(attacker, defender, amount)?,
            Verdict::SecondDominates => self.strike(defender, attacker, amount)?,
            Verdict::Tie => HuntOutcome::Standoff,
        };

        let attacker_snap = PlayerSnapshot::from(self.roster.get(attacker)?);
        let defender_snap = PlayerSnapshot::from(self.roster.get(defender)?);
        self.log.push(Event::HuntResolved {
            attacker,
            defender,
            amount,
            verdict,
            outcome,
            attacker_blood_before: attacker_before,
            attacker_blood_after: attacker_snap.blood,
            defender_blood_before: defender_before,
            defender_blood_after: defender_snap.blood,
        });
        debug!(%attacker, %defender, amount, %verdict, "hunt resolved");

        Ok(HuntReceipt {
            attacker: attacker_snap,
            defender: defender_snap,
            amount,
            verdict,
            outcome,
        })
    }

    /// Apply one side's win. The loser dies when the stake covers their
    /// blood; the kill yields the blood held at the moment of death plus
    /// the lethal bonus.
    fn strike(
        &mut self,
        winner: PlayerId,
        loser: PlayerId,
        amount: i64,
    ) -> Result<HuntOutcome, ActionError> {
        let loser_blood = self.roster.get(loser)?.blood();
        let lethal = loser_blood <= amount;
        let transfer = if lethal {
            loser_blood + self.config.lethal_bonus
        } else {
            amount
        };

        self.roster.get_mut(winner)?.blood += transfer;
        {
            let l = self.roster.get_mut(loser)?;
            if lethal {
                l.blood = 0;
                l.alive = false;
            } else {
                l.blood -= amount;
            }
        }

        if lethal {
            info!(%winner, %loser, transfer, "kill");
        }

        Ok(HuntOutcome::Strike {
            winner,
            loser,
            transfer,
            lethal,
        })
    }

    /// Directly adjust a living player's blood (narrative/GM override).
    ///
    /// Blood clamps at zero; reaching zero kills the player.
    pub fn modify_blood(
        &mut self,
        player: PlayerId,
        delta: i64,
        note: impl Into<String>,
    ) -> Result<BloodReceipt, ActionError> {
        if !self.roster.get(player)?.is_alive() {
            return Err(ActionError::PlayerDead(player));
        }

        let (blood, died) = {
            let p = self.roster.get_mut(player)?;
            p.blood = (p.blood + delta).max(0);
            let died = p.blood == 0;
            if died {
                p.alive = false;
            }
            (p.blood, died)
        };

        if died {
            info!(%player, delta, "blood override death");
        } else {
            debug!(%player, delta, blood, "blood modified");
        }
        self.log.push(Event::BloodModified {
            player,
            delta,
            blood,
            died,
            note: note.into(),
        });

        Ok(BloodReceipt {
            player: PlayerSnapshot::from(self.roster.get(player)?),
            delta,
        })
    }
}
