use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pbrom_lib::RomCatalog;

use crate::error::CliError;

pub(crate) fn print_no_roms(catalog: &RomCatalog) {
    println!(
        "{}",
        format!("No ROMs found in {}", catalog.root_directory().display())
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
}

pub(crate) fn run_list(catalog: &RomCatalog) {
    let entries = catalog.entries();
    if entries.is_empty() {
        print_no_roms(catalog);
        return;
    }

    println!(
        "{} ({} ROMs, {})",
        catalog.root_directory().display(),
        entries.len(),
        catalog.console().short_name(),
    );
    let current = catalog.index();
    for (i, name) in entries.iter().enumerate() {
        if i == current {
            println!(
                "{} {:>4}  {}",
                ">".if_supports_color(Stdout, |t| t.green()),
                i,
                name.if_supports_color(Stdout, |t| t.bold()),
            );
        } else {
            println!("  {:>4}  {}", i, name);
        }
    }
}

pub(crate) fn run_current(catalog: &RomCatalog) {
    match catalog.current_full_path() {
        Some(path) => println!("{}", path.display()),
        None => print_no_roms(catalog),
    }
}

pub(crate) fn run_next(catalog: &RomCatalog) {
    if catalog.next().is_none() {
        print_no_roms(catalog);
        return;
    }
    run_current(catalog);
    save_position(catalog);
}

pub(crate) fn run_prev(catalog: &RomCatalog) {
    if catalog.previous().is_none() {
        print_no_roms(catalog);
        return;
    }
    run_current(catalog);
    save_position(catalog);
}

pub(crate) fn run_goto(catalog: &RomCatalog, index: usize) -> Result<(), CliError> {
    if catalog.rom_count() == 0 {
        print_no_roms(catalog);
        return Ok(());
    }
    if !catalog.set_index(index) {
        return Err(CliError::usage(format!(
            "index {} out of range (0..{})",
            index,
            catalog.rom_count()
        )));
    }
    run_current(catalog);
    save_position(catalog);
    Ok(())
}

/// Persist the cursor; a failure is reported but does not fail the command.
pub(crate) fn save_position(catalog: &RomCatalog) {
    if let Err(e) = catalog.save_state() {
        log::warn!("Could not save position: {e}");
    }
}
