//! Console identities, extension tables and ROM directory resolution.

pub mod console;
pub mod error;
pub mod resolver;

pub use console::{ConsoleParseError, ConsoleType, ExtensionSet, extension_of};
pub use error::CatalogError;
pub use resolver::RomRoot;

/// Name of the browse-state file kept inside each ROM directory.
pub const STATE_FILE_NAME: &str = "pbrom.cfg";
