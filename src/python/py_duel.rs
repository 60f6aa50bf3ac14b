//! Duel bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::CardCatalog;
use crate::core::{Command, GameConfig, GameRng, GameState, InstanceId, Phase};
use crate::rules::GameResult;
use crate::session::GameSession;

use super::py_core::{rejected, seat, PyPlayerId};

/// Python wrapper for a running duel.
///
/// Every mutating method raises `ValueError` with the rule that was broken
/// and leaves the game unchanged.
#[pyclass(name = "Duel", unsendable)]
pub struct PyDuel {
    session: GameSession,
}

impl PyDuel {
    fn submit(&mut self, command: Command) -> PyResult<()> {
        self.session.submit(command).map(|_| ()).map_err(rejected)
    }

    fn state(&self) -> &GameState {
        self.session.state()
    }
}

#[pymethods]
impl PyDuel {
    /// Deal a new duel.
    ///
    /// # Arguments
    /// - catalog_json: Card catalog as a JSON object keyed by card name
    /// - seed: RNG seed for the deck shuffle; random when omitted
    /// - starting_life: Life total for each player
    /// - starting_hand_size: Cards drawn before the first turn
    #[new]
    #[pyo3(signature = (catalog_json, seed = None, starting_life = 20, starting_hand_size = 3))]
    fn new(
        catalog_json: &str,
        seed: Option<u64>,
        starting_life: i64,
        starting_hand_size: usize,
    ) -> PyResult<Self> {
        let catalog =
            CardCatalog::from_json(catalog_json).map_err(|e| PyValueError::new_err(e.to_string()))?;
        let config = GameConfig::new()
            .with_starting_life(starting_life)
            .with_starting_hand_size(starting_hand_size);
        let mut rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);

        let session = GameSession::start(config, &catalog, &mut rng)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { session })
    }

    /// Play the card at `hand_index` from `player`'s hand.
    fn play_card(&mut self, player: usize, hand_index: usize) -> PyResult<()> {
        let player = seat(player)?;
        self.submit(Command::PlayCard { player, hand_index })
    }

    fn enter_attack_phase(&mut self) -> PyResult<()> {
        self.submit(Command::EnterAttackPhase)
    }

    /// Toggle a creature in or out of the attacking set.
    fn declare_attacker(&mut self, card: u32) -> PyResult<()> {
        self.submit(Command::DeclareAttacker(InstanceId::new(card)))
    }

    fn end_attack_phase(&mut self) -> PyResult<()> {
        self.submit(Command::EndAttackPhase)
    }

    fn declare_defender(&mut self, defender: u32, attacker: u32) -> PyResult<()> {
        self.submit(Command::DeclareDefender {
            defender: InstanceId::new(defender),
            attacker: InstanceId::new(attacker),
        })
    }

    /// Resolve combat and pass the turn.
    fn end_defense_phase(&mut self) -> PyResult<()> {
        self.submit(Command::EndDefensePhase)
    }

    /// End the turn from the main phase.
    fn end_turn(&mut self) -> PyResult<()> {
        self.submit(Command::EndTurn)
    }

    /// Get the active player (whose turn it is).
    #[getter]
    fn active_player(&self) -> PyPlayerId {
        PyPlayerId(self.state().active_player)
    }

    #[getter]
    fn turn_number(&self) -> u32 {
        self.state().turn_number
    }

    /// Current phase: "main", "attack" or "defense".
    #[getter]
    fn phase(&self) -> &'static str {
        match self.state().phase {
            Phase::Main => "main",
            Phase::Attack => "attack",
            Phase::Defense => "defense",
        }
    }

    fn life(&self, player: usize) -> PyResult<i64> {
        Ok(self.state().player(seat(player)?).life)
    }

    /// Returns (available, total) mana.
    fn mana(&self, player: usize) -> PyResult<(u32, u32)> {
        let p = self.state().player(seat(player)?);
        Ok((p.available_mana, p.total_mana))
    }

    /// Instance IDs in `player`'s hand, in hand order.
    fn hand(&self, player: usize) -> PyResult<Vec<u32>> {
        Ok(self.state().player(seat(player)?).hand.iter().map(|c| c.id.raw()).collect())
    }

    fn battlefield(&self, player: usize) -> PyResult<Vec<u32>> {
        Ok(self
            .state()
            .player(seat(player)?)
            .battlefield
            .iter()
            .map(|c| c.id.raw())
            .collect())
    }

    /// Winner's seat index, -1 for a draw, or None while both players live.
    fn outcome(&self) -> Option<i64> {
        self.state().outcome().map(|result| match result {
            GameResult::Winner(p) => p.index() as i64,
            GameResult::Draw => -1,
        })
    }

    /// Number of accepted commands so far.
    fn history_len(&self) -> usize {
        self.session.history().len()
    }

    /// Full snapshot as JSON.
    fn snapshot_json(&self) -> PyResult<String> {
        serde_json::to_string(self.state()).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        let state = self.state();
        format!(
            "Duel(turn={}, active={}, phase={:?})",
            state.turn_number, state.active_player, state.phase
        )
    }
}
