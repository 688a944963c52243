use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pbrom_lib::ConsoleType;
use pbrom_lib::settings::{self, Settings};

use crate::error::CliError;

/// Show the settings file location and the effective values.
pub(crate) fn run_config_show(settings: &Settings) -> Result<(), CliError> {
    let path = settings::settings_path();
    let status = if path.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(not found, using defaults)"
            .if_supports_color(Stdout, |t| t.dimmed())
            .to_string()
    };
    println!(
        "Settings file: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status
    );
    println!(
        "Effective base: {}",
        settings.resolve_base(None).display()
    );
    println!();

    let contents = toml::to_string_pretty(settings).map_err(|e| CliError::config(e.to_string()))?;
    if contents.trim().is_empty() {
        println!("{}", "(no values set)".if_supports_color(Stdout, |t| t.dimmed()));
    } else {
        print!("{}", contents);
    }
    Ok(())
}

pub(crate) fn run_config_path() {
    println!("{}", settings::settings_path().display());
}

/// Apply the given values and write the settings file.
pub(crate) fn run_config_set(
    mut settings: Settings,
    internal: Option<PathBuf>,
    removable: Option<PathBuf>,
    default_console: Option<ConsoleType>,
) -> Result<(), CliError> {
    if internal.is_none() && removable.is_none() && default_console.is_none() {
        return Err(CliError::usage(
            "nothing to set: pass --internal, --removable or --default-console",
        ));
    }

    if let Some(path) = internal {
        settings.roots.internal = Some(path);
    }
    if let Some(path) = removable {
        settings.roots.removable = Some(path);
    }
    if let Some(console) = default_console {
        settings.catalog.default_console = Some(console);
    }

    settings::save_settings(&settings)
        .map_err(|e| CliError::config(format!("could not save settings: {e}")))?;
    log::info!("Saved settings to {}", settings::settings_path().display());
    Ok(())
}
