use crate::error::ScorecardError;
use crate::model::{FIRST_HOLE, HoleScores, RoundState};

use super::{KeyValueStore, StorageError};

pub const PLAYERS_KEY: &str = "players";
pub const SCORES_KEY: &str = "scores";
pub const CURRENT_HOLE_KEY: &str = "currentHole";

pub const ROUND_KEYS: [&str; 3] = [PLAYERS_KEY, SCORES_KEY, CURRENT_HOLE_KEY];

/// What a store holds for the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredRound {
    /// No `players` key, nothing was saved.
    Empty,
    Round(RoundState),
    /// Something was saved but it does not decode into a valid round.
    Corrupt(String),
}

/// Writes the whole round, replacing whatever was stored.
///
/// # Errors
///
/// Will return [`ScorecardError::Parse`] if serialising fails, or
/// [`ScorecardError::Storage`] if the store rejects a write.
pub fn save_round<S>(store: &mut S, state: &RoundState) -> Result<(), ScorecardError>
where
    S: KeyValueStore + ?Sized,
{
    let players = serde_json::to_string(state.players())?;
    let scores = serde_json::to_string(state.scores())?;
    store.set(PLAYERS_KEY, &players)?;
    store.set(SCORES_KEY, &scores)?;
    store.set(CURRENT_HOLE_KEY, &state.current_hole.to_string())?;
    Ok(())
}

/// Reads the round back. A successful read yields a started round unless the
/// stored player list is empty.
///
/// # Errors
///
/// Will return `Err` only when the store itself fails; undecodable data comes
/// back as [`StoredRound::Corrupt`].
pub fn load_round<S>(store: &S) -> Result<StoredRound, StorageError>
where
    S: KeyValueStore + ?Sized,
{
    let Some(players_json) = store.get(PLAYERS_KEY)? else {
        return Ok(StoredRound::Empty);
    };
    let scores_json = store.get(SCORES_KEY)?;
    let current_hole_json = store.get(CURRENT_HOLE_KEY)?;

    let players: Vec<String> = match serde_json::from_str(&players_json) {
        Ok(p) => p,
        Err(e) => return Ok(StoredRound::Corrupt(format!("{PLAYERS_KEY}: {e}"))),
    };
    let Some(scores_json) = scores_json else {
        return Ok(StoredRound::Corrupt(format!("{SCORES_KEY}: missing")));
    };
    let scores: Vec<HoleScores> = match serde_json::from_str(&scores_json) {
        Ok(s) => s,
        Err(e) => return Ok(StoredRound::Corrupt(format!("{SCORES_KEY}: {e}"))),
    };
    let current_hole = current_hole_json
        .and_then(|s| s.trim().parse::<i32>().ok())
        .unwrap_or(FIRST_HOLE);

    let started = !players.is_empty();
    Ok(match RoundState::from_parts(players, scores, current_hole, started) {
        Ok(state) => StoredRound::Round(state),
        Err(e) => StoredRound::Corrupt(e),
    })
}

/// Removes every round key.
///
/// # Errors
///
/// Will return `Err` if the store rejects a removal.
pub fn clear_round<S>(store: &mut S) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
{
    for key in ROUND_KEYS {
        store.remove(key)?;
    }
    Ok(())
}
