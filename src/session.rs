//! Game session: current state, history, and observers.
//!
//! `GameSession` is the single owner of a game's current `GameState`.
//! Commands are applied one at a time; a rejected command leaves the
//! session exactly as it was. After each accepted command every observer
//! receives the read-only snapshot and the command record, which is where
//! a host hooks in rendering or submission to an external service. The
//! local transition has already happened by then, and an observer cannot
//! undo it.
//!
//! ## Example
//!
//! ```
//! use mana_duel::cards::{CardCatalog, CardDefinition};
//! use mana_duel::core::{Command, GameConfig, GameRng, Phase};
//! use mana_duel::session::GameSession;
//!
//! let catalog: CardCatalog = vec![
//!     CardDefinition::new("forest", 0, 1, 0, 0),
//!     CardDefinition::new("bear", 1, 0, 2, 2),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut rng = GameRng::new(1);
//! let mut session = GameSession::start(GameConfig::default(), &catalog, &mut rng).unwrap();
//! session.submit(Command::EndTurn).unwrap();
//!
//! assert_eq!(session.state().phase, Phase::Main);
//! assert_eq!(session.history().len(), 1);
//! ```

use im::Vector;

use crate::cards::CardCatalog;
use crate::core::command::{Command, CommandRecord};
use crate::core::config::GameConfig;
use crate::core::error::{CatalogError, RuleViolation};
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::rules::{DuelRules, RulesEngine};

/// Receives every accepted transition.
pub trait StateObserver {
    /// Called with the new snapshot after each accepted command.
    fn on_state(&mut self, state: &GameState);

    /// External submission hook, called after `on_state`.
    ///
    /// Default: do nothing.
    fn on_submit(&mut self, _record: &CommandRecord, _state: &GameState) {}
}

/// A running game.
pub struct GameSession<R: RulesEngine = DuelRules> {
    rules: R,
    initial: GameState,
    state: GameState,
    history: Vector<CommandRecord>,
    observers: Vec<Box<dyn StateObserver>>,
}

impl GameSession<DuelRules> {
    /// Deal a new duel and wrap it in a session.
    pub fn start(
        config: GameConfig,
        catalog: &CardCatalog,
        rng: &mut GameRng,
    ) -> Result<Self, CatalogError> {
        let rules = DuelRules::new(config);
        let state = rules.new_game(catalog, rng)?;
        Ok(Self::new(rules, state))
    }
}

impl<R: RulesEngine> GameSession<R> {
    /// Wrap an existing state.
    #[must_use]
    pub fn new(rules: R, state: GameState) -> Self {
        Self {
            rules,
            initial: state.clone(),
            state,
            history: Vector::new(),
            observers: Vec::new(),
        }
    }

    /// Attach an observer (builder pattern).
    #[must_use]
    pub fn with_observer(mut self, observer: Box<dyn StateObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Attach an observer.
    pub fn add_observer(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The state the session started from.
    #[must_use]
    pub fn initial_state(&self) -> &GameState {
        &self.initial
    }

    /// Accepted commands, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        &self.history
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Commands the current state would accept.
    #[must_use]
    pub fn legal_commands(&self) -> Vec<Command> {
        self.rules.legal_commands(&self.state)
    }

    /// Apply a command.
    ///
    /// On success the session advances, the command is recorded, and
    /// observers are notified. On rejection nothing changes.
    pub fn submit(&mut self, command: Command) -> Result<&GameState, RuleViolation> {
        let actor = self.rules.actor(&self.state, command);
        let turn = self.state.turn_number;
        let next = self.rules.apply(&self.state, command)?;

        let record = CommandRecord::new(actor, command, turn, self.history.len() as u32);
        self.state = next;
        self.history.push_back(record.clone());

        for observer in &mut self.observers {
            observer.on_state(&self.state);
            observer.on_submit(&record, &self.state);
        }

        Ok(&self.state)
    }

    /// Rebuild the current state by re-applying the history to the
    /// initial state. Used to verify a history received from elsewhere.
    pub fn replay(&self) -> Result<GameState, RuleViolation> {
        self.history
            .iter()
            .try_fold(self.initial.clone(), |state, record| {
                self.rules.apply(&state, record.command)
            })
    }
}
