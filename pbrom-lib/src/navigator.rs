//! Cursor over an ordered ROM catalog.
//!
//! `next` wraps from the last entry back to the first; `previous` stops at
//! the first entry. Entries flagged bad are tracked by file name, so a
//! rescan that shifts positions keeps each flag on the file it was set for.

use std::collections::BTreeSet;
use std::path::PathBuf;

/// Root directory plus the ordered ROM names found there by the last scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub root: PathBuf,
    pub entries: Vec<String>,
}

impl Catalog {
    pub fn new(root: impl Into<PathBuf>, entries: Vec<String>) -> Self {
        Self {
            root: root.into(),
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e == name)
    }

    pub fn full_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

#[derive(Debug, Default)]
pub struct Navigator {
    catalog: Catalog,
    index: usize,
    active_name: String,
    bad: BTreeSet<String>,
}

impl Navigator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            catalog: Catalog::new(root, Vec::new()),
            ..Self::default()
        }
    }

    /// Swap in a freshly scanned catalog.
    ///
    /// The index survives if it is still in range, otherwise it resets to 0.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        if self.index >= self.catalog.len() {
            self.index = 0;
        }
        self.sync_active_name();
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn count(&self) -> usize {
        self.catalog.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Step forward, wrapping to the first entry after the last.
    pub fn next(&mut self) -> Option<&str> {
        let len = self.catalog.len();
        if len == 0 {
            log::debug!("next: no entries");
            return None;
        }
        self.index = if self.index + 1 >= len { 0 } else { self.index + 1 };
        self.sync_active_name();
        log::debug!("next: {}/{} '{}'", self.index, len, self.active_name);
        self.current_entry()
    }

    /// Step back, stopping at the first entry.
    pub fn previous(&mut self) -> Option<&str> {
        let len = self.catalog.len();
        if len == 0 {
            log::debug!("previous: no entries");
            return None;
        }
        self.index = self.index.saturating_sub(1).min(len - 1);
        self.sync_active_name();
        log::debug!("previous: {}/{} '{}'", self.index, len, self.active_name);
        self.current_entry()
    }

    /// Jump to `index`. Returns false and changes nothing if it is out of range.
    pub fn set_index(&mut self, index: usize) -> bool {
        if index >= self.catalog.len() {
            log::debug!("set_index: {} rejected ({} entries)", index, self.catalog.len());
            return false;
        }
        self.index = index;
        self.sync_active_name();
        true
    }

    /// Flag the current entry as bad. Returns false on an empty catalog.
    pub fn mark_current_bad(&mut self) -> bool {
        if self.catalog.is_empty() {
            return false;
        }
        self.bad.insert(self.active_name.clone());
        true
    }

    pub fn is_current_bad(&self) -> bool {
        !self.catalog.is_empty() && self.bad.contains(&self.active_name)
    }

    pub fn bad_entries(&self) -> impl Iterator<Item = &str> {
        self.bad.iter().map(String::as_str)
    }

    pub fn current_entry(&self) -> Option<&str> {
        if self.catalog.is_empty() {
            None
        } else {
            Some(&self.active_name)
        }
    }

    pub fn current_full_path(&self) -> Option<PathBuf> {
        self.current_entry().map(|name| self.catalog.full_path(name))
    }

    /// Cached active name; empty while the catalog is empty.
    pub fn active_name(&self) -> &str {
        &self.active_name
    }

    fn sync_active_name(&mut self) {
        match self.catalog.entries.get(self.index) {
            Some(name) => self.active_name.clone_from(name),
            None => self.active_name.clear(),
        }
    }
}

#[cfg(test)]
#[path = "tests/navigator_tests.rs"]
mod tests;
