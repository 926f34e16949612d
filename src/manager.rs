use maud::Markup;

use crate::error::ScorecardError;
use crate::model::RoundState;
use crate::mvu::Host;
use crate::mvu::round::{Deps, Msg, RoundModel};
use crate::mvu::runtime::dispatch;
use crate::storage::KeyValueStore;
use crate::view::round::render_round;

/// Owns the round and the store it is mirrored into.
///
/// Every mutating operation runs to completion (persist, then render) before
/// returning. Precondition failures are silent no-ops.
pub struct RoundManager<S: KeyValueStore> {
    model: RoundModel,
    store: S,
}

impl<S: KeyValueStore> RoundManager<S> {
    /// Wraps a store with an empty, unstarted round. Call [`Self::hydrate`] to
    /// pick up whatever the store already holds.
    pub fn new(store: S) -> Self {
        Self {
            model: RoundModel::new(),
            store,
        }
    }

    /// Creates the manager and hydrates it in one go.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the store can't be read.
    pub fn open(store: S) -> Result<Self, ScorecardError> {
        let mut manager = Self::new(store);
        manager.hydrate()?;
        Ok(manager)
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.model.state
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the stored round. Corrupt data is logged and leaves an empty round.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the store itself fails.
    pub fn hydrate(&mut self) -> Result<(), ScorecardError> {
        self.run(Msg::Hydrate, &mut crate::mvu::host::Headless)
    }

    /// # Errors
    ///
    /// Will return `Err` if persisting the new player fails.
    pub fn add_player(&mut self, name: &str, host: &mut dyn Host) -> Result<(), ScorecardError> {
        self.run(Msg::AddPlayer(name.to_string()), host)
    }

    /// # Errors
    ///
    /// Starting never touches the store; this only fails if rendering does.
    pub fn start_round(&mut self, host: &mut dyn Host) -> Result<(), ScorecardError> {
        self.run(Msg::StartRound, host)
    }

    /// Records the raw text typed into a grid cell.
    ///
    /// # Errors
    ///
    /// Will return [`ScorecardError::CellOutOfRange`] if there is no such cell,
    /// or a storage error if persisting fails.
    pub fn record_score(
        &mut self,
        player: usize,
        hole: usize,
        raw: &str,
        host: &mut dyn Host,
    ) -> Result<(), ScorecardError> {
        if self.model.state.score(player, hole).is_none() {
            return Err(ScorecardError::CellOutOfRange { player, hole });
        }
        self.run(
            Msg::RecordScore {
                player,
                hole,
                raw: raw.to_string(),
            },
            host,
        )
    }

    /// Asks the host to confirm, then wipes the round and the store.
    ///
    /// # Errors
    ///
    /// Will return `Err` if clearing the store fails.
    pub fn reset_round(&mut self, host: &mut dyn Host) -> Result<(), ScorecardError> {
        self.run(Msg::ResetRequested, host)
    }

    /// Pure projection of the current round.
    #[must_use]
    pub fn render(&self) -> Markup {
        render_round(&self.model.state)
    }

    /// The markup from the last render, or a fresh one if nothing has rendered yet.
    #[must_use]
    pub fn markup(&self) -> Markup {
        self.model.markup.clone().unwrap_or_else(|| self.render())
    }

    fn run(&mut self, msg: Msg, host: &mut dyn Host) -> Result<(), ScorecardError> {
        dispatch(
            &mut self.model,
            msg,
            Deps {
                store: &mut self.store,
                host,
            },
        )
    }
}
