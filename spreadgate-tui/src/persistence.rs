//! Credit input persistence — the one piece of state that survives a
//! restart. Everything else is recomputed from scratch on refresh.

use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub credit: f64,
}

/// Load the persisted credit. Returns `None` when the file is missing or
/// unreadable, so the caller falls back to the config default.
pub fn load(path: &Path) -> Option<PersistedState> {
    let content = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Save the persisted credit, creating parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}
