//! Browse-state file kept beside the ROMs.
//!
//! Plain text, one value per line:
//!
//! ```text
//! 3
//! spaceinvaders.gba
//! asteroids.gba
//! ...
//! ```
//!
//! Line 1 is the index, line 2 the active ROM name, and every following line
//! one catalog entry in catalog order. The entry lines are informational:
//! the catalog itself is always rebuilt from the directory.

use std::fs;
use std::path::Path;

use pbrom_core::CatalogError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedState {
    pub index: usize,
    pub active_name: String,
    pub entries: Vec<String>,
}

impl SavedState {
    pub fn new(index: usize, active_name: impl Into<String>, entries: Vec<String>) -> Self {
        Self {
            index,
            active_name: active_name.into(),
            entries,
        }
    }

    /// Render the newline-delimited file body.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n{}\n", self.index, self.active_name);
        for entry in &self.entries {
            out.push_str(entry);
            out.push('\n');
        }
        out
    }

    /// Parse a file body. `path` is only used for error reporting.
    pub fn parse(path: &Path, text: &str) -> Result<Self, CatalogError> {
        let mut lines = text.lines();
        let first = lines
            .next()
            .ok_or_else(|| CatalogError::malformed(path, "empty file"))?;
        let index = first
            .trim()
            .parse::<usize>()
            .map_err(|e| CatalogError::malformed(path, format!("bad index '{first}': {e}")))?;
        let active_name = lines.next().unwrap_or_default().to_string();
        let entries = lines
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Self {
            index,
            active_name,
            entries,
        })
    }
}

/// Write `state` to `path`.
///
/// The body goes to a sibling temp file first and is renamed over `path`,
/// so a failed write leaves any previous state file intact.
pub fn save(path: &Path, state: &SavedState) -> Result<(), CatalogError> {
    let tmp = path.with_extension("cfg.tmp");
    fs::write(&tmp, state.to_text()).map_err(|e| CatalogError::persistence(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        CatalogError::persistence(path, e)
    })?;
    log::debug!(
        "saved state to {} (index {}, {} entries)",
        path.display(),
        state.index,
        state.entries.len()
    );
    Ok(())
}

/// Read the state at `path`. Missing, unreadable or malformed files give `None`.
pub fn load(path: &Path) -> Option<SavedState> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("no saved state at {}: {}", path.display(), e);
            return None;
        }
    };
    match SavedState::parse(path, &text) {
        Ok(state) => {
            log::debug!(
                "loaded state from {} (index {}, '{}')",
                path.display(),
                state.index,
                state.active_name
            );
            Some(state)
        }
        Err(e) => {
            log::warn!("{e}");
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
