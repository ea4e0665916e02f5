pub mod add;
pub mod list;
pub mod remove;
pub mod view;
pub mod watch;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use memocal_core::prefs::{FilePrefs, PrefStore, MEMOS_KEY};
use memocal_core::MemoStore;

use crate::config;

/// Open the preference store named by the config.
pub fn open_prefs() -> Result<FilePrefs> {
    let cfg = config::load_config()?;
    Ok(FilePrefs::load(config::expand_path(&cfg.data_file)))
}

/// Load the memo collection from the preference store.
/// An absent key means no memos have been saved yet.
pub fn load_store(prefs: &FilePrefs) -> MemoStore {
    match prefs.get(MEMOS_KEY) {
        Some(encoded) => MemoStore::deserialize(encoded),
        None => MemoStore::new(),
    }
}

/// Write-through persist after a mutation. A failed write is reported but
/// never reverts the in-memory state.
pub fn persist(prefs: &mut FilePrefs, store: &MemoStore) {
    if let Err(e) = prefs.put(MEMOS_KEY, &store.serialize()) {
        eprintln!(
            "Warning: failed to save memos to {}: {}",
            prefs.path().display(),
            e
        );
    }
}

/// Parse YYYY-MM-DD.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}'. Expected YYYY-MM-DD", input))
}

/// Parse HH:MM (seconds also accepted).
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M"))
        .with_context(|| format!("Invalid time '{}'. Expected HH:MM", input))
}
