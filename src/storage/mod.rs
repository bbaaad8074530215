//! Flat-file JSON persistence for the ledger.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{errors::LedgerError, ledger::Ledger};

pub const DATA_FILE_NAME: &str = "budget_data.json";

/// Why `load_ledger` produced the ledger it did. A default ledger coming
/// from a missing or corrupt file means no usable prior state exists, which
/// the shell treats differently from a loaded one (it prompts for a budget).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Well-formed state was read from disk.
    Loaded,
    /// No file at the given path; first run.
    Missing,
    /// File existed but could not be read or parsed; recovered as fresh.
    Corrupt,
}

impl LoadOutcome {
    /// True when no usable persisted state backed the returned ledger.
    pub fn needs_setup(self) -> bool {
        !matches!(self, Self::Loaded)
    }
}

/// Resolves the storage location: `budget_data.json` under the platform
/// data directory, or relative to the working directory when none exists.
pub fn default_data_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("budget_tracker").join(DATA_FILE_NAME),
        None => PathBuf::from(DATA_FILE_NAME),
    }
}

/// Loads the ledger from disk. A missing or corrupt file is equivalent to a
/// first run and yields the default empty ledger, never an error; corrupt
/// contents are reported through a tracing diagnostic only.
pub fn load_ledger(path: &Path) -> (Ledger, LoadOutcome) {
    if !path.exists() {
        debug!(path = %path.display(), "no ledger file found, starting fresh");
        return (Ledger::default(), LoadOutcome::Missing);
    }
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            warn!(path = %path.display(), %err, "ledger file unreadable, starting fresh");
            return (Ledger::default(), LoadOutcome::Corrupt);
        }
    };
    match serde_json::from_str(&data) {
        Ok(ledger) => {
            debug!(path = %path.display(), "ledger loaded");
            (ledger, LoadOutcome::Loaded)
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "ledger file malformed, starting fresh");
            (Ledger::default(), LoadOutcome::Corrupt)
        }
    }
}

/// Writes the ledger to disk as pretty JSON, replacing prior contents.
/// Stages to a sibling temporary file before renaming into place.
pub fn save_ledger(ledger: &Ledger, path: &Path) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(ledger)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    debug!(path = %path.display(), "ledger saved");
    Ok(())
}
