//! Command-line save of the current settings as a user skin.

use std::path::Path;

use crate::skins;

/// What: Capture the current settings per template and persist them under
/// the given name, then exit.
///
/// Inputs:
/// - `packages_dir`: Packages tree holding the live settings stores.
/// - `name`: Name to save the skin under.
///
/// Output:
/// - Exits 0 after saving; exits 1 with a message when the captured skin
///   fails validation or the user skins file cannot be written.
pub fn handle_save(packages_dir: &Path, name: &str) -> ! {
    tracing::info!(name = %name, "user skin save requested from CLI");
    match skins::save_user_skin(packages_dir, name) {
        Ok(skin) => {
            println!("Saved skin {}", skin.id());
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("{e}");
            tracing::error!(error = %e, "user skin save failed");
            std::process::exit(1);
        }
    }
}
