//! Command-line listing of available skins.

use std::path::Path;

use crate::skins;

/// What: Print available skins one per line and exit.
///
/// Inputs:
/// - `packages_dir`: Packages tree to scan.
/// - `package`: Optional package filter.
///
/// Output:
/// - Prints `PACKAGE/NAME` lines in display order to stdout and exits 0;
///   an empty registry is reported on stderr with exit code 1.
pub fn handle_list(packages_dir: &Path, package: Option<&str>) -> ! {
    tracing::info!(package = ?package, "skin listing requested from CLI");
    let registry = skins::scan(packages_dir);
    let listed = match package {
        Some(p) => registry.in_package(p),
        None => registry.ordered(),
    };
    if listed.is_empty() {
        match package {
            Some(p) => eprintln!("No skins found in package {p:?}"),
            None => eprintln!("No skins found under {}", packages_dir.display()),
        }
        std::process::exit(1);
    }
    for skin in listed {
        println!("{}", skin.id());
    }
    std::process::exit(0);
}
