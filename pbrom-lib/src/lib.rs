//! Per-console ROM catalog: scanning, ordering, browsing and browse-state
//! persistence for one ROM directory at a time.
//!
//! ```no_run
//! use std::path::Path;
//! use pbrom_lib::{ConsoleType, RomCatalog};
//!
//! let roms = RomCatalog::open(ConsoleType::MegaDrive, Path::new("/storage/roms"));
//! if let Some(name) = roms.next() {
//!     println!("loading {name}");
//! }
//! roms.save_state().ok();
//! ```

pub mod catalog;
pub mod navigator;
pub mod scanner;
pub mod settings;
pub mod state;

pub use catalog::RomCatalog;
pub use navigator::{Catalog, Navigator};
pub use state::SavedState;

// Re-export core types so frontends only need this crate.
pub use pbrom_core::{
    CatalogError, ConsoleParseError, ConsoleType, ExtensionSet, RomRoot, STATE_FILE_NAME,
};
