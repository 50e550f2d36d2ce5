//! Command-line deletion of a user skin.

use std::path::Path;

use crate::skins;

/// What: Remove a named skin from the user skins file, then exit.
///
/// Inputs:
/// - `packages_dir`: Packages tree holding the user skins file.
/// - `name`: Skin name to remove.
///
/// Output:
/// - Exits 0 after deleting; exits 1 with a message when the name is not
///   present or the file cannot be rewritten.
pub fn handle_delete(packages_dir: &Path, name: &str) -> ! {
    tracing::info!(name = %name, "user skin delete requested from CLI");
    match skins::delete_user_skin(packages_dir, name) {
        Ok(()) => {
            println!("Deleted skin User/{name}");
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("{e}");
            tracing::error!(error = %e, "user skin delete failed");
            std::process::exit(1);
        }
    }
}
