use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pbrom_lib::ConsoleType;

pub(crate) fn run_consoles() {
    println!("Supported consoles:");
    println!();

    for console in ConsoleType::all() {
        let folder = console.subdirectory().unwrap_or("(base)");
        let extensions = console.extensions().as_slice().join(", ");

        println!(
            "  {} [{}]",
            console.short_name().if_supports_color(Stdout, |t| t.bold()),
            console.display_name().if_supports_color(Stdout, |t| t.cyan()),
        );
        println!("    Folder: {}", folder);
        println!(
            "    Extensions: {}",
            if extensions.is_empty() {
                "(none)".to_string()
            } else {
                extensions
            }
        );
        println!("    Aliases: {}", console.aliases().join(", "));
    }
}
