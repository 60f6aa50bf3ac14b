//! Duel rules: the mana/creature game.
//!
//! Phase flow per turn:
//!
//! ```text
//! Main --enter_attack_phase--> Attack --end_attack_phase--> Defense
//!   ^  \                                                      |
//!   |   `--end_turn_directly--> (next turn, Main)             |
//!   `------------- end_defense_phase: combat + next turn -----'
//! ```
//!
//! `enter_attack_phase` without an untapped creature leaves the game in Main.

use log::{debug, info, warn};

use crate::cards::CardCatalog;
use crate::core::command::Command;
use crate::core::config::GameConfig;
use crate::core::entity::InstanceId;
use crate::core::error::{CardRef, CatalogError, RuleViolation};
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::core::state::{GameState, Phase};
use crate::zones::build_deck;

use super::combat::{self, CombatReport};
use super::engine::RulesEngine;
use super::mana;
use super::phase::require_phase;
use super::turn;

/// Rules for a two-player mana/creature duel.
#[derive(Clone, Debug, Default)]
pub struct DuelRules {
    config: GameConfig,
}

impl DuelRules {
    /// Create rules with the given configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Deal a new game.
    ///
    /// Each player gets an independently shuffled deck with one copy of
    /// every catalog entry and draws the opening hand from its front.
    pub fn new_game(
        &self,
        catalog: &CardCatalog,
        rng: &mut GameRng,
    ) -> Result<GameState, CatalogError> {
        if catalog.is_empty() {
            return Err(CatalogError::Empty);
        }

        if self.config.starting_hand_size > catalog.len() {
            warn!(
                "starting hand size {} exceeds the {} card deck",
                self.config.starting_hand_size,
                catalog.len()
            );
        }

        let mut state = GameState::new(self.config.starting_life);

        for seat in PlayerId::both() {
            let deck = build_deck(catalog, &mut state.ids, rng);

            let player = state.player_mut(seat);
            player.deck = deck;
            for _ in 0..self.config.starting_hand_size {
                if player.draw().is_none() {
                    break;
                }
            }
        }

        info!(
            "new game: {} card catalog, seed {}, {} starting life",
            catalog.len(),
            rng.seed(),
            self.config.starting_life
        );
        Ok(state)
    }

    /// Play a card from `player`'s hand.
    pub fn play_card(
        &self,
        state: &GameState,
        player: PlayerId,
        hand_index: usize,
    ) -> Result<GameState, RuleViolation> {
        mana::play_card(state, player, hand_index).map(|(next, _)| next)
    }

    /// Move from Main to Attack.
    ///
    /// Without an untapped creature the state stays in Main; this is not an
    /// error, so callers may always attempt it.
    pub fn enter_attack_phase(&self, state: &GameState) -> Result<GameState, RuleViolation> {
        require_phase(state, Phase::Main)?;

        let mut next = state.clone();
        if state.active().battlefield.has_ready_creature() {
            next.phase = Phase::Attack;
            debug!("{} enters attack phase", state.active_player);
        } else {
            debug!("{} has no ready creatures, staying in main phase", state.active_player);
        }
        Ok(next)
    }

    /// Toggle a creature in or out of the attacking set.
    ///
    /// Declaring does not tap the attacker.
    pub fn declare_attacker(
        &self,
        state: &GameState,
        card: InstanceId,
    ) -> Result<GameState, RuleViolation> {
        require_phase(state, Phase::Attack)?;

        let attacker = state
            .active()
            .battlefield
            .get(card)
            .filter(|c| c.is_creature())
            .ok_or(RuleViolation::InvalidCardReference(CardRef::Instance(card)))?;

        let mut next = state.clone();
        let declaring = !state.attacking_cards.contains(&card);

        if declaring {
            if attacker.tapped {
                return Err(RuleViolation::TappedCardSelected(card));
            }
            next.attacking_cards.insert(card);
        } else {
            next.attacking_cards.remove(&card);
        }

        let seat = next.active_player;
        if let Some(attacker) = next.player_mut(seat).battlefield.get_mut(card) {
            attacker.attacking = declaring;
        }
        Ok(next)
    }

    /// Move from Attack to Defense, even with no attackers declared.
    pub fn end_attack_phase(&self, state: &GameState) -> Result<GameState, RuleViolation> {
        require_phase(state, Phase::Attack)?;

        let mut next = state.clone();
        next.phase = Phase::Defense;
        debug!("{} attacks with {} creatures", state.active_player, state.attacking_cards.len());
        Ok(next)
    }

    /// Assign a defending creature to block an attacker. Taps the defender.
    ///
    /// Several defenders may block one attacker.
    pub fn declare_defender(
        &self,
        state: &GameState,
        defender: InstanceId,
        attacker: InstanceId,
    ) -> Result<GameState, RuleViolation> {
        require_phase(state, Phase::Defense)?;

        let blocker = state
            .defending()
            .battlefield
            .get(defender)
            .filter(|c| c.is_creature())
            .ok_or(RuleViolation::InvalidCardReference(CardRef::Instance(defender)))?;
        if blocker.tapped {
            return Err(RuleViolation::TappedCardSelected(defender));
        }
        if !state.attacking_cards.contains(&attacker) {
            return Err(RuleViolation::InvalidCardReference(CardRef::Instance(attacker)));
        }

        let mut next = state.clone();
        next.defender_assignments.insert(defender, attacker);

        let seat = next.active_player.opponent();
        if let Some(blocker) = next.player_mut(seat).battlefield.get_mut(defender) {
            blocker.defending_target = Some(attacker);
            blocker.tapped = true;
        }
        Ok(next)
    }

    /// Resolve combat, then end the turn, as one step.
    pub fn end_defense_phase(&self, state: &GameState) -> Result<GameState, RuleViolation> {
        self.resolve_combat(state).map(|(next, _)| next)
    }

    /// `end_defense_phase`, also returning what combat did.
    pub fn resolve_combat(
        &self,
        state: &GameState,
    ) -> Result<(GameState, CombatReport), RuleViolation> {
        require_phase(state, Phase::Defense)?;

        let report = combat::resolve(state);
        let mut next = state.clone();
        combat::apply(&mut next, &report);

        info!(
            "combat: {} damage to {}, {} attackers and {} defenders destroyed",
            report.player_damage,
            state.active_player.opponent(),
            report.destroyed_attackers.len(),
            report.destroyed_defenders.len()
        );

        turn::end_turn(&mut next, self.config.turn_numbering);
        Ok((next, report))
    }

    /// End the turn from Main without combat.
    pub fn end_turn_directly(&self, state: &GameState) -> Result<GameState, RuleViolation> {
        require_phase(state, Phase::Main)?;

        let mut next = state.clone();
        turn::end_turn(&mut next, self.config.turn_numbering);
        Ok(next)
    }
}

impl RulesEngine for DuelRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn apply(&self, state: &GameState, command: Command) -> Result<GameState, RuleViolation> {
        let result = match command {
            Command::PlayCard { player, hand_index } => self.play_card(state, player, hand_index),
            Command::EnterAttackPhase => self.enter_attack_phase(state),
            Command::DeclareAttacker(card) => self.declare_attacker(state, card),
            Command::EndAttackPhase => self.end_attack_phase(state),
            Command::DeclareDefender { defender, attacker } => {
                self.declare_defender(state, defender, attacker)
            }
            Command::EndDefensePhase => self.end_defense_phase(state),
            Command::EndTurn => self.end_turn_directly(state),
        };

        result.map_err(|violation| {
            debug!("rejected {}: {violation}", command.name());
            violation
        })
    }

    fn legal_commands(&self, state: &GameState) -> Vec<Command> {
        let mut commands = Vec::new();
        let active = state.active_player;

        match state.phase {
            Phase::Main => {
                for hand_index in 0..state.active().hand.len() {
                    if mana::check_play(state, active, hand_index).is_ok() {
                        commands.push(Command::PlayCard {
                            player: active,
                            hand_index,
                        });
                    }
                }
                if state.active().battlefield.has_ready_creature() {
                    commands.push(Command::EnterAttackPhase);
                }
                commands.push(Command::EndTurn);
            }
            Phase::Attack => {
                for card in state.active().battlefield.iter().filter(|c| c.is_creature()) {
                    if !card.tapped || state.attacking_cards.contains(&card.id) {
                        commands.push(Command::DeclareAttacker(card.id));
                    }
                }
                commands.push(Command::EndAttackPhase);
            }
            Phase::Defense => {
                for blocker in state.defending().battlefield.ready_creatures() {
                    for &attacker in &state.attacking_cards {
                        commands.push(Command::DeclareDefender {
                            defender: blocker.id,
                            attacker,
                        });
                    }
                }
                commands.push(Command::EndDefensePhase);
            }
        }

        commands
    }
}
