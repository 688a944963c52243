//! Directory scanner for a single console's ROM folder.
//!
//! Lists the direct children of the root, keeps the names whose extension
//! is in the console's set, and returns them in byte-wise ascending order.
//! Listing failures never escape: they are logged and yield an empty list.

use std::path::Path;

use pbrom_core::{CatalogError, ExtensionSet};

/// True if `path` is a directory. Any stat failure reports false.
pub fn path_is_directory(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// True if `path` is a directory that can also be opened for listing.
pub fn path_exists(path: &Path) -> bool {
    path_is_directory(path) && std::fs::read_dir(path).is_ok()
}

/// Scan `root` and return the accepted ROM names in order.
///
/// An empty path, a missing directory and an unreadable directory all
/// produce an empty list.
pub fn scan(root: &Path, extensions: &ExtensionSet) -> Vec<String> {
    if root.as_os_str().is_empty() {
        return Vec::new();
    }
    match collect_candidates(root, extensions) {
        Ok(candidates) => {
            let ordered = order(candidates);
            log::info!("{}: {} ROM(s) found", root.display(), ordered.len());
            ordered
        }
        Err(e) => {
            log::warn!("{e}");
            Vec::new()
        }
    }
}

/// List `root` and keep the names accepted by `extensions`, unordered.
pub fn collect_candidates(
    root: &Path,
    extensions: &ExtensionSet,
) -> Result<Vec<String>, CatalogError> {
    if !path_is_directory(root) {
        return Err(CatalogError::NotADirectory(root.to_path_buf()));
    }

    let entries = std::fs::read_dir(root).map_err(|e| CatalogError::unreadable(root, e))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CatalogError::unreadable(root, e))?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                log::debug!("skip non-UTF-8 name {:?}", raw);
                continue;
            }
        };
        // Self/parent entries are never catalogued.
        if name == "." || name == ".." {
            continue;
        }
        if extensions.accepts(&name) {
            log::debug!("ROM -> {name}");
            candidates.push(name);
        } else {
            log::debug!("reject {name}");
        }
    }
    Ok(candidates)
}

/// Sort candidates ascending by their bytes. Lists of 0 or 1 are returned as-is.
pub fn order(mut candidates: Vec<String>) -> Vec<String> {
    if candidates.len() > 1 {
        candidates.sort_unstable();
    }
    candidates
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
