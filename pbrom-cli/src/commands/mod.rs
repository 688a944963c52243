pub(crate) mod browse;
pub(crate) mod config;
pub(crate) mod consoles;
pub(crate) mod init;
pub(crate) mod navigate;

use std::path::PathBuf;

use pbrom_lib::settings::Settings;
use pbrom_lib::{ConsoleType, RomCatalog};

use crate::error::CliError;

/// Pick the console from the CLI flag, falling back to the settings file.
pub(crate) fn select_console(
    cli_console: Option<ConsoleType>,
    settings: &Settings,
) -> Result<ConsoleType, CliError> {
    cli_console
        .or(settings.catalog.default_console)
        .ok_or(CliError::NoConsole)
}

/// Build and scan the catalog for the selected console.
///
/// A removable base (flag first, then settings) replaces the internal one
/// when it is present.
pub(crate) fn open_catalog(
    cli_console: Option<ConsoleType>,
    cli_base: Option<PathBuf>,
    cli_removable: Option<PathBuf>,
    settings: &Settings,
) -> Result<RomCatalog, CliError> {
    let console = select_console(cli_console, settings)?;
    let base = settings.resolve_base(cli_base);
    let catalog = RomCatalog::new(console, &base);

    let removable = cli_removable.or_else(|| settings.roots.removable.clone());
    let switched = removable
        .as_deref()
        .is_some_and(|alt| catalog.use_alternate_base(alt));
    if !switched {
        catalog.refresh_from_disk();
    }
    log::debug!(
        "{} ROM(s) in {}",
        catalog.rom_count(),
        catalog.root_directory().display()
    );
    Ok(catalog)
}
