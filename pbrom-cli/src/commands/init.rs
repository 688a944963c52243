use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pbrom_lib::{ConsoleType, RomRoot};

use crate::error::CliError;

/// Create ROM folders under `base`: one console's, or every console's.
pub(crate) fn run_init(base: &Path, console: Option<ConsoleType>) -> Result<(), CliError> {
    let consoles: Vec<ConsoleType> = match console {
        Some(c) => vec![c],
        None => ConsoleType::all().to_vec(),
    };

    for console in consoles {
        let root = RomRoot::resolve(base, console);
        let existed = root.directory.is_dir();
        std::fs::create_dir_all(&root.directory)?;
        let status = if existed { "exists " } else { "created" };
        println!(
            "  {} {} ({})",
            status.if_supports_color(Stdout, |t| t.green()),
            root.directory.display(),
            console.short_name(),
        );
    }
    Ok(())
}
