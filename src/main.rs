//! App Arch Inventory - lists installed applications by CPU architecture.
//!
//! Scans /Applications, resolves each bundle's main executable from its
//! Info.plist and prints Intel, Apple Silicon and Universal executables.

use std::process;

fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match app_arch_inventory::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
