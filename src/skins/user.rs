use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::store::load_skins_file;
use super::template::{capture, template_from_settings};
use super::types::{Skin, SkinTargets};
use super::{SELF_SETTINGS_TARGET, USER_PACKAGE, USER_SKINS_FILE};
use crate::error::{Error, Result};
use crate::settings::SettingsStore;

/// Path of the well-known user skins file inside the packages tree.
#[must_use]
pub fn user_skins_path(packages_dir: &Path) -> PathBuf {
    packages_dir.join(USER_PACKAGE).join(USER_SKINS_FILE)
}

/// What: Read every skin stored in the user skins file.
///
/// Inputs:
/// - `packages_dir`: Packages tree containing the `User` package.
///
/// Output:
/// - Mapping of skin name to body; empty when the file is missing or
///   unreadable (a parse failure is logged and treated as empty).
fn read_user_skins(packages_dir: &Path) -> BTreeMap<String, SkinTargets> {
    let path = user_skins_path(packages_dir);
    if !path.is_file() {
        return BTreeMap::new();
    }
    match load_skins_file(&path) {
        Ok(skins) => skins,
        Err(e) => {
            tracing::warn!(error = %e, "user skins file unreadable; treating as empty");
            BTreeMap::new()
        }
    }
}

/// Persist the full user skins mapping as pretty-printed JSON.
fn write_user_skins(packages_dir: &Path, skins: &BTreeMap<String, SkinTargets>) -> Result<()> {
    let path = user_skins_path(packages_dir);
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    let body = serde_json::to_string_pretty(skins).unwrap_or_else(|_| "{}".to_string());
    fs::write(&path, body).map_err(|source| Error::Write { path, source })
}

/// What: Capture the current settings per template and persist them as a
/// named user skin.
///
/// Inputs:
/// - `packages_dir`: Packages tree holding the live settings stores.
/// - `name`: Name to save the skin under; an existing user skin of that
///   name is overwritten.
///
/// Output:
/// - The saved skin on success. [`Error::InvalidSkin`] when the captured
///   settings lack the required theme group; nothing is written then.
///
/// Details:
/// - The template comes from the `skin-template` key of the `Skinner`
///   settings store, falling back to the built-in default.
/// - Targets whose live store is unreadable are skipped with a warning.
/// - All other skins already present in the user skins file are preserved.
pub fn save_user_skin(packages_dir: &Path, name: &str) -> Result<Skin> {
    let template = match SettingsStore::load(packages_dir, SELF_SETTINGS_TARGET) {
        Ok(store) => template_from_settings(store.values()),
        Err(e) => {
            tracing::warn!(error = %e, "skinner settings unreadable; using default template");
            template_from_settings(&super::types::TargetSettings::new())
        }
    };

    let mut targets = SkinTargets::new();
    for (target, node) in &template {
        let store = match SettingsStore::load(packages_dir, target) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!(capture_target = %target, error = %e, "skipping unreadable capture target");
                continue;
            }
        };
        let source = Value::Object(store.values().clone());
        if let Some(Value::Object(values)) = capture(node, &source) {
            targets.insert(target.clone(), values);
        }
    }

    let skin = Skin {
        package: USER_PACKAGE.to_string(),
        name: name.to_string(),
        targets,
    };
    if !skin.is_valid() {
        return Err(Error::InvalidSkin {
            name: name.to_string(),
        });
    }

    let mut skins = read_user_skins(packages_dir);
    skins.insert(name.to_string(), skin.targets.clone());
    write_user_skins(packages_dir, &skins)?;
    tracing::info!(skin = %skin.id(), "saved user skin");
    Ok(skin)
}

/// What: Remove a named skin from the user skins file.
///
/// Inputs:
/// - `packages_dir`: Packages tree holding the user skins file.
/// - `name`: Skin name to remove.
///
/// Output:
/// - `Ok(())` when the skin existed and the file was rewritten without it.
///   A missing name is a reported [`Error::SkinNotFound`], never a silent
///   no-op.
pub fn delete_user_skin(packages_dir: &Path, name: &str) -> Result<()> {
    let mut skins = read_user_skins(packages_dir);
    if skins.remove(name).is_none() {
        return Err(Error::SkinNotFound {
            package: USER_PACKAGE.to_string(),
            name: name.to_string(),
        });
    }
    write_user_skins(packages_dir, &skins)?;
    tracing::info!(package = USER_PACKAGE, name = %name, "deleted user skin");
    Ok(())
}
