use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ScorecardError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("no score cell for player {player}, hole {hole}")]
    CellOutOfRange { player: usize, hole: usize },
    #[error("config error: {0}")]
    Config(String),
}

impl From<StorageError> for ScorecardError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ScorecardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
