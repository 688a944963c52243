//! Console type to ROM directory resolution.
//!
//! Pure lookups over the per-console table: no filesystem access happens
//! here. Making sure the directory exists is left to the caller.

use std::path::{Path, PathBuf};

use crate::console::{ConsoleType, ExtensionSet};

/// Where a console's ROMs live and which files count as ROMs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomRoot {
    pub console: ConsoleType,
    pub directory: PathBuf,
    pub extensions: ExtensionSet,
}

impl RomRoot {
    /// Resolve the ROM root for `console` under `base`.
    ///
    /// `base/<subdir>` for known consoles, `base` itself for `Unknown`.
    pub fn resolve(base: &Path, console: ConsoleType) -> Self {
        let directory = match console.subdirectory() {
            Some(sub) => base.join(sub),
            None => base.to_path_buf(),
        };
        Self {
            console,
            directory,
            extensions: console.extensions(),
        }
    }

    /// The same console's root under a different storage base
    /// (e.g. removable media). The extension set is unchanged.
    pub fn rebased(&self, alternate_base: &Path) -> Self {
        Self::resolve(alternate_base, self.console)
    }
}
