use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use super::types::{Args, CleanArgs, StorageKind};
use crate::error::ScorecardError;

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if the bind address doesn't parse or, for sqlite, the
    /// database file can't be created in its directory.
    pub fn validate(self) -> Result<CleanArgs, ScorecardError> {
        check_bind_addr(&self.bind)?;
        if self.storage == StorageKind::Sqlite {
            check_parent_dir_is_writeable(&self.db_name)?;
        }
        Ok(CleanArgs {
            storage: self.storage,
            db_name: self.db_name,
            bind: self.bind,
            static_dir: self.static_dir,
        })
    }
}

/// # Errors
///
/// Will return `Err` if `addr` isn't a `host:port` socket address.
pub fn check_bind_addr(addr: &str) -> Result<(), ScorecardError> {
    addr.parse::<SocketAddr>()
        .map(|_| ())
        .map_err(|e| ScorecardError::Config(format!("bind address '{addr}' is invalid: {e}")))
}

/// # Errors
///
/// Will return `Err` if the directory that would hold `file` is missing or read-only.
pub fn check_parent_dir_is_writeable(file: &Path) -> Result<(), ScorecardError> {
    let parent = match file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let metadata = fs::metadata(parent).map_err(|e| {
        ScorecardError::Config(format!(
            "The directory '{}' for the database is not readable: {e}",
            parent.display()
        ))
    })?;
    if !metadata.is_dir() {
        return Err(ScorecardError::Config(format!(
            "'{}' is not a directory.",
            parent.display()
        )));
    }
    if metadata.permissions().readonly() {
        return Err(ScorecardError::Config(format!(
            "The directory '{}' is not writeable.",
            parent.display()
        )));
    }
    Ok(())
}
