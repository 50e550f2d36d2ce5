//! Applying a skin: direct command-line mode and the interactive selector.

use std::path::Path;

use crate::config::Palette;
use crate::settings::{self, SettingsStore};
use crate::skins::{self, CURRENT_SKIN_KEY, PREFERENCES};

/// What: Apply a skin named on the command line and exit.
///
/// Inputs:
/// - `packages_dir`: Packages tree to scan and mutate.
/// - `package`: Owning package of the requested skin.
/// - `name`: Skin name within that package.
///
/// Output:
/// - Exits 0 after applying; exits 1 with a message when the skin is not
///   in the registry.
pub fn handle_apply(packages_dir: &Path, package: &str, name: &str) -> ! {
    tracing::info!(package = %package, name = %name, "direct skin apply requested from CLI");
    let registry = skins::scan(packages_dir);
    match registry.find(package, name) {
        Ok(skin) => {
            settings::apply(packages_dir, skin);
            println!("Applied skin {}", skin.id());
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("{e}");
            tracing::error!(error = %e, "direct skin apply failed");
            std::process::exit(1);
        }
    }
}

/// What: Run the interactive selector and apply the confirmed choice.
///
/// Inputs:
/// - `packages_dir`: Packages tree to scan and mutate.
/// - `package`: Optional package filter for the candidate list.
/// - `palette`: Selector colors from `skinner.conf`.
///
/// Output:
/// - Applies the selected skin and prints a confirmation; cancellation
///   performs no action and leaves every settings file untouched.
pub fn handle_interactive(packages_dir: &Path, package: Option<&str>, palette: &Palette) {
    let registry = skins::scan(packages_dir);
    let current = current_skin_id(packages_dir);
    match crate::ui::run_selector(&registry, package, palette, current) {
        Ok(Some(skin)) => {
            settings::apply(packages_dir, &skin);
            println!("Applied skin {}", skin.id());
        }
        Ok(None) => {
            tracing::info!("selector cancelled; no settings changed");
        }
        Err(msg) => {
            eprintln!("{msg}");
            tracing::error!(error = %msg, "selector unavailable");
            std::process::exit(1);
        }
    }
}

/// Identifier of the currently applied skin, read from the preferences
/// store; `None` when unset or the store is unreadable.
fn current_skin_id(packages_dir: &Path) -> Option<String> {
    let store = SettingsStore::load(packages_dir, PREFERENCES).ok()?;
    store
        .get(CURRENT_SKIN_KEY)
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}
