//! pbrom CLI
//!
//! Command-line front end for browsing per-console ROM folders.

mod cli_types;
mod commands;
mod error;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!(
            "{} {}",
            "error:".if_supports_color(Stderr, |t| t.bright_red()),
            e
        );
        std::process::exit(1);
    }
}

/// Route log output through env_logger. `RUST_LOG` still wins over the flags.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else if quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).format_target(false);
    if !verbose {
        builder.format_timestamp(None);
    }
    builder.parse_default_env().init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = pbrom_lib::settings::load_settings();
    let Cli {
        console,
        base,
        removable,
        command,
        ..
    } = cli;
    let open = || commands::open_catalog(console, base.clone(), removable.clone(), &settings);

    match command {
        Commands::Consoles => commands::consoles::run_consoles(),
        Commands::Init { all } => {
            let console = if all {
                None
            } else {
                Some(commands::select_console(console, &settings)?)
            };
            commands::init::run_init(&settings.resolve_base(base.clone()), console)?;
        }
        Commands::List => commands::navigate::run_list(&open()?),
        Commands::Current => commands::navigate::run_current(&open()?),
        Commands::Next => commands::navigate::run_next(&open()?),
        Commands::Prev => commands::navigate::run_prev(&open()?),
        Commands::Goto { index } => commands::navigate::run_goto(&open()?, index)?,
        Commands::Browse => {
            let catalog = open()?;
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            commands::browse::run_browse(&catalog, stdin.lock(), stdout.lock())?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&settings)?,
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::Set {
                internal,
                removable,
                default_console,
            } => commands::config::run_config_set(
                settings.clone(),
                internal,
                removable,
                default_console,
            )?,
        },
    }
    Ok(())
}
