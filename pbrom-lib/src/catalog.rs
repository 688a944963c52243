//! `RomCatalog`: the per-console ROM list an emulator shell talks to.
//!
//! Combines root resolution, scanning, navigation and the state file behind
//! one lock. A refresh holds the lock from scan to index clamp, so readers
//! never see a half-replaced catalog.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use pbrom_core::{CatalogError, ConsoleType, ExtensionSet, RomRoot, STATE_FILE_NAME};

use crate::navigator::{Catalog, Navigator};
use crate::scanner;
use crate::state::{self, SavedState};

struct Inner {
    root: RomRoot,
    navigator: Navigator,
    /// State loaded from disk, applied by the next refresh.
    pending_restore: Option<SavedState>,
}

impl Inner {
    fn refresh(&mut self) -> usize {
        let directory = self.root.directory.clone();
        let entries = scanner::scan(&directory, &self.root.extensions);
        self.navigator.replace_catalog(Catalog::new(directory, entries));

        if let Some(saved) = self.pending_restore.take() {
            restore(&mut self.navigator, &saved);
        }
        self.navigator.count()
    }

    fn snapshot(&self) -> SavedState {
        let nav = &self.navigator;
        SavedState::new(nav.index(), nav.active_name(), nav.catalog().entries.clone())
    }
}

pub struct RomCatalog {
    inner: Mutex<Inner>,
}

impl RomCatalog {
    /// Create an empty catalog for `console` under `base`.
    ///
    /// Loads any state file in the resolved root; it takes effect on the
    /// first [`refresh_from_disk`](Self::refresh_from_disk).
    pub fn new(console: ConsoleType, base: &Path) -> Self {
        let root = RomRoot::resolve(base, console);
        log::debug!("{} catalog rooted at {}", console.short_name(), root.directory.display());
        let pending_restore = state::load(&root.directory.join(STATE_FILE_NAME));
        let navigator = Navigator::new(root.directory.clone());
        Self {
            inner: Mutex::new(Inner {
                root,
                navigator,
                pending_restore,
            }),
        }
    }

    /// Build a catalog and scan it straight away.
    pub fn open(console: ConsoleType, base: &Path) -> Self {
        let catalog = Self::new(console, base);
        catalog.refresh_from_disk();
        catalog
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Every mutation leaves Inner consistent, so a poisoned lock is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn console(&self) -> ConsoleType {
        self.lock().root.console
    }

    pub fn extensions(&self) -> ExtensionSet {
        self.lock().root.extensions
    }

    pub fn root_directory(&self) -> PathBuf {
        self.lock().root.directory.clone()
    }

    pub fn state_path(&self) -> PathBuf {
        self.lock().root.directory.join(STATE_FILE_NAME)
    }

    /// Rescan the active root and replace the catalog. Returns the new count.
    pub fn refresh_from_disk(&self) -> usize {
        self.lock().refresh()
    }

    /// Browse `path` instead of the current root.
    ///
    /// Only switches if `path` is a listable directory; the catalog is then
    /// rescanned and the state file follows the new root.
    pub fn set_active_root_directory(&self, path: &Path) -> bool {
        if !scanner::path_exists(path) {
            log::warn!("ROM directory {} not usable, keeping current root", path.display());
            return false;
        }
        self.switch_root(path.to_path_buf());
        true
    }

    /// Move to `<alternate_base>/<subdir>` if `alternate_base` is a directory.
    ///
    /// This is the removable-media probe. The extension set is unchanged and
    /// the new root does not have to exist yet; it just scans as empty.
    pub fn use_alternate_base(&self, alternate_base: &Path) -> bool {
        if !scanner::path_is_directory(alternate_base) {
            log::debug!("alternate base {} not present", alternate_base.display());
            return false;
        }
        let directory = self.lock().root.rebased(alternate_base).directory;
        log::info!("using alternate ROM root {}", directory.display());
        self.switch_root(directory);
        true
    }

    fn switch_root(&self, directory: PathBuf) {
        let pending = state::load(&directory.join(STATE_FILE_NAME));
        let mut inner = self.lock();
        inner.root.directory = directory.clone();
        inner.navigator = Navigator::new(directory);
        inner.pending_restore = pending;
        inner.refresh();
    }

    pub fn rom_count(&self) -> usize {
        self.lock().navigator.count()
    }

    pub fn next(&self) -> Option<String> {
        self.lock().navigator.next().map(str::to_string)
    }

    pub fn previous(&self) -> Option<String> {
        self.lock().navigator.previous().map(str::to_string)
    }

    pub fn set_index(&self, index: usize) -> bool {
        self.lock().navigator.set_index(index)
    }

    pub fn index(&self) -> usize {
        self.lock().navigator.index()
    }

    pub fn mark_current_bad(&self) -> bool {
        self.lock().navigator.mark_current_bad()
    }

    pub fn is_current_bad(&self) -> bool {
        self.lock().navigator.is_current_bad()
    }

    pub fn bad_entries(&self) -> Vec<String> {
        self.lock()
            .navigator
            .bad_entries()
            .map(str::to_string)
            .collect()
    }

    /// Name of the current ROM, without its directory.
    pub fn active_rom_name(&self) -> Option<String> {
        self.lock().navigator.current_entry().map(str::to_string)
    }

    pub fn current_full_path(&self) -> Option<PathBuf> {
        self.lock().navigator.current_full_path()
    }

    pub fn entries(&self) -> Vec<String> {
        self.lock().navigator.catalog().entries.clone()
    }

    pub fn full_paths(&self) -> Vec<PathBuf> {
        let inner = self.lock();
        let catalog = inner.navigator.catalog();
        catalog.entries.iter().map(|e| catalog.full_path(e)).collect()
    }

    /// Write the state file into the active root.
    ///
    /// A failed write is returned to the caller; in-memory state is untouched.
    pub fn save_state(&self) -> Result<(), CatalogError> {
        let inner = self.lock();
        state::save(&inner.root.directory.join(STATE_FILE_NAME), &inner.snapshot())
    }
}

/// Put the cursor back where a previous session left it.
///
/// Prefers the saved name, so added or removed files do not move the
/// cursor to a different ROM; falls back to the saved index.
fn restore(navigator: &mut Navigator, saved: &SavedState) {
    let by_name = if saved.active_name.is_empty() {
        None
    } else {
        navigator.catalog().position(&saved.active_name)
    };
    let restored = match by_name {
        Some(index) => navigator.set_index(index),
        None => navigator.set_index(saved.index),
    };
    if restored {
        log::debug!(
            "restored cursor to {} '{}'",
            navigator.index(),
            navigator.active_name()
        );
    } else {
        log::debug!("saved cursor {} out of range, starting at 0", saved.index);
    }
}
