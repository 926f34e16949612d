use maud::Markup;

use crate::error::ScorecardError;
use crate::model::{RoundState, parse_score};
use crate::mvu::Host;
use crate::storage::{KeyValueStore, StoredRound, clear_round, load_round, save_round};
use crate::view::round::render_round;

pub const INVALID_SCORE_MESSAGE: &str = "Please enter a valid number.";
pub const RESET_PROMPT: &str =
    "Are you sure you want to start a new round? This will erase current data.";

#[derive(Debug, Clone, Default)]
pub struct RoundModel {
    pub state: RoundState,
    pub markup: Option<Markup>,
}

impl RoundModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    Hydrate,
    Loaded(StoredRound),
    AddPlayer(String),
    StartRound,
    RecordScore {
        player: usize,
        hole: usize,
        raw: String,
    },
    ResetRequested,
    ResetConfirmed,
    ResetDeclined,
    Rendered(Markup),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadStored,
    Persist,
    ClearStored,
    Confirm(&'static str),
    Notify(&'static str),
    RevertCell { player: usize, hole: usize, value: i32 },
    Render,
}

pub fn update(model: &mut RoundModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::Hydrate => vec![Effect::LoadStored],
        Msg::Loaded(stored) => {
            match stored {
                StoredRound::Round(state) => model.state = state,
                StoredRound::Empty | StoredRound::Corrupt(_) => model.state.clear(),
            }
            vec![Effect::Render]
        }
        Msg::AddPlayer(name) => {
            let name = name.trim();
            if name.is_empty() {
                log::debug!("ignoring blank player name");
                vec![]
            } else if model.state.started {
                log::debug!("ignoring player '{name}', round already started");
                vec![]
            } else {
                model.state.push_player(name.to_string());
                vec![Effect::Persist, Effect::Render]
            }
        }
        Msg::StartRound => {
            if model.state.players().is_empty() || model.state.started {
                log::debug!("start ignored, no players or round already running");
                vec![]
            } else {
                model.state.started = true;
                log::info!("round started with {} players", model.state.players().len());
                vec![Effect::Render]
            }
        }
        Msg::RecordScore { player, hole, raw } => {
            let Some(previous) = model.state.score(player, hole) else {
                return vec![];
            };
            match parse_score(&raw) {
                Some(value) => {
                    model.state.set_score(player, hole, value);
                    vec![Effect::Persist, Effect::Render]
                }
                None => vec![
                    Effect::Notify(INVALID_SCORE_MESSAGE),
                    Effect::RevertCell {
                        player,
                        hole,
                        value: previous,
                    },
                ],
            }
        }
        Msg::ResetRequested => vec![Effect::Confirm(RESET_PROMPT)],
        Msg::ResetConfirmed => {
            log::info!("resetting round");
            model.state.clear();
            vec![Effect::ClearStored, Effect::Render]
        }
        Msg::ResetDeclined => vec![],
        Msg::Rendered(markup) => {
            model.markup = Some(markup);
            vec![]
        }
    }
}

pub struct Deps<'a> {
    pub store: &'a mut dyn KeyValueStore,
    pub host: &'a mut dyn Host,
}

/// Carries out one effect, returning the message it produces, if any.
///
/// # Errors
///
/// Storage faults are not recovered here and come back as `Err`.
pub fn run_effect(
    effect: Effect,
    model: &RoundModel,
    deps: &mut Deps<'_>,
) -> Result<Option<Msg>, ScorecardError> {
    match effect {
        Effect::LoadStored => {
            let stored = load_round(&*deps.store)?;
            if let StoredRound::Corrupt(reason) = &stored {
                log::error!("Error loading stored round, starting empty: {reason}");
            }
            Ok(Some(Msg::Loaded(stored)))
        }
        Effect::Persist => {
            save_round(&mut *deps.store, &model.state)?;
            Ok(None)
        }
        Effect::ClearStored => {
            clear_round(&mut *deps.store)?;
            Ok(None)
        }
        Effect::Confirm(message) => Ok(Some(if deps.host.confirm(message) {
            Msg::ResetConfirmed
        } else {
            Msg::ResetDeclined
        })),
        Effect::Notify(message) => {
            deps.host.alert(message);
            Ok(None)
        }
        Effect::RevertCell {
            player,
            hole,
            value,
        } => {
            deps.host.revert_cell(player, hole, value);
            Ok(None)
        }
        Effect::Render => Ok(Some(Msg::Rendered(render_round(&model.state)))),
    }
}
