use std::io::{BufRead, Write};

use pbrom_lib::RomCatalog;

use crate::error::CliError;

const HELP: &str = "commands: n next, p prev, g <i> goto, b mark bad, ? is bad, l list, r refresh, q quit";

/// One line of input in an interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BrowseCommand {
    Next,
    Previous,
    Goto(usize),
    MarkBad,
    IsBad,
    List,
    Refresh,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub(crate) fn parse_command(line: &str) -> Result<Option<BrowseCommand>, CliError> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(None);
    };

    let command = match word {
        "n" | "next" => BrowseCommand::Next,
        "p" | "prev" => BrowseCommand::Previous,
        "g" | "goto" => {
            let arg = parts
                .next()
                .ok_or_else(|| CliError::usage("goto needs an index"))?;
            let index = arg
                .parse::<usize>()
                .map_err(|_| CliError::usage(format!("not an index: '{arg}'")))?;
            BrowseCommand::Goto(index)
        }
        "b" | "bad" => BrowseCommand::MarkBad,
        "?" => BrowseCommand::IsBad,
        "l" | "list" => BrowseCommand::List,
        "r" | "refresh" => BrowseCommand::Refresh,
        "q" | "quit" => BrowseCommand::Quit,
        other => return Err(CliError::usage(format!("unknown command '{other}'"))),
    };
    Ok(Some(command))
}

/// Run a browsing session until `q` or end of input, then save the position.
///
/// Bad input is reported on `out` and the session continues.
pub(crate) fn run_browse<R: BufRead, W: Write>(
    catalog: &RomCatalog,
    input: R,
    mut out: W,
) -> Result<(), CliError> {
    writeln!(
        out,
        "{} ROM(s) in {}",
        catalog.rom_count(),
        catalog.root_directory().display()
    )?;
    writeln!(out, "{HELP}")?;
    write_current(catalog, &mut out)?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{e}")?;
                writeln!(out, "{HELP}")?;
                continue;
            }
        };
        log::debug!("browse: {:?}", command);

        match command {
            BrowseCommand::Next => {
                catalog.next();
                write_current(catalog, &mut out)?;
            }
            BrowseCommand::Previous => {
                catalog.previous();
                write_current(catalog, &mut out)?;
            }
            BrowseCommand::Goto(index) => {
                if catalog.set_index(index) {
                    write_current(catalog, &mut out)?;
                } else {
                    writeln!(
                        out,
                        "index {} out of range (0..{})",
                        index,
                        catalog.rom_count()
                    )?;
                }
            }
            BrowseCommand::MarkBad => {
                if catalog.mark_current_bad() {
                    let name = catalog.active_rom_name().unwrap_or_default();
                    writeln!(out, "marked bad: {name}")?;
                } else {
                    writeln!(out, "No ROMs found")?;
                }
            }
            BrowseCommand::IsBad => {
                let answer = if catalog.is_current_bad() { "bad" } else { "ok" };
                writeln!(out, "{answer}")?;
            }
            BrowseCommand::List => {
                let current = catalog.index();
                let bad = catalog.bad_entries();
                for (i, name) in catalog.entries().iter().enumerate() {
                    let marker = if i == current { '>' } else { ' ' };
                    let flag = if bad.contains(name) { " [bad]" } else { "" };
                    writeln!(out, "{marker} {i:>4}  {name}{flag}")?;
                }
            }
            BrowseCommand::Refresh => {
                let count = catalog.refresh_from_disk();
                writeln!(out, "{count} ROM(s)")?;
                write_current(catalog, &mut out)?;
            }
            BrowseCommand::Quit => break,
        }
    }

    if let Err(e) = catalog.save_state() {
        log::warn!("Could not save position: {e}");
    }
    Ok(())
}

fn write_current<W: Write>(catalog: &RomCatalog, out: &mut W) -> Result<(), CliError> {
    match catalog.active_rom_name() {
        Some(name) => writeln!(out, "[{}] {}", catalog.index(), name)?,
        None => writeln!(out, "No ROMs found")?,
    }
    Ok(())
}
