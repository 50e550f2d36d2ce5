use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::skins::{SETTINGS_EXT, TargetSettings, USER_PACKAGE};

/// One persisted target settings file, held in memory between load and save.
///
/// The on-disk form is read as JSON-with-comments and written back as
/// pretty-printed JSON; user comments do not survive a rewrite.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    /// Backing file.
    path: PathBuf,
    /// Decoded top-level key/value pairs.
    values: TargetSettings,
}

impl SettingsStore {
    /// Path of the settings file for a target name:
    /// `<packages>/User/<target>.settings`.
    #[must_use]
    pub fn target_path(packages_dir: &Path, target: &str) -> PathBuf {
        packages_dir
            .join(USER_PACKAGE)
            .join(format!("{target}.{SETTINGS_EXT}"))
    }

    /// What: Open the settings store for a target, creating an empty one
    /// in memory when the file does not exist yet.
    ///
    /// Inputs:
    /// - `packages_dir`: Packages tree holding the `User` package.
    /// - `target`: Target settings file name (without extension).
    ///
    /// Output:
    /// - The loaded store, or [`Error::Read`] / [`Error::Parse`] when an
    ///   existing file cannot be used.
    pub fn load(packages_dir: &Path, target: &str) -> Result<Self> {
        let path = Self::target_path(packages_dir, target);
        if !path.is_file() {
            return Ok(Self {
                path,
                values: TargetSettings::new(),
            });
        }
        let text = fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        let values: TargetSettings = json5::from_str(&text).map_err(|e| Error::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(Self { path, values })
    }

    /// All top-level key/value pairs.
    #[must_use]
    pub fn values(&self) -> &TargetSettings {
        &self.values
    }

    /// Current value of a key, if set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Set or overwrite a key.
    pub fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    /// Remove a key; a no-op when absent.
    pub fn erase(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// What: Flush the store to its backing file as pretty-printed JSON.
    ///
    /// Inputs: none.
    ///
    /// Output:
    /// - `Ok(())` on success, [`Error::Write`] otherwise. The parent
    ///   directory is created when missing.
    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        let body = serde_json::to_string_pretty(&self.values).unwrap_or_else(|_| "{}".to_string());
        fs::write(&self.path, body).map_err(|source| Error::Write {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    /// What: Load tolerates a missing file and round-trips set/erase/save.
    ///
    /// Inputs:
    /// - Empty packages tree; a key set, saved, reloaded, erased.
    ///
    /// Output:
    /// - Values survive the save/load cycle; erased keys disappear.
    fn load_set_save_roundtrip() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let pkgs = tmp.path();

        let mut store = SettingsStore::load(pkgs, "Preferences").expect("load empty");
        assert!(store.values().is_empty());
        store.set("theme", json!("Nord.theme"));
        store.save().expect("save");

        let mut reloaded = SettingsStore::load(pkgs, "Preferences").expect("reload");
        assert_eq!(reloaded.get("theme"), Some(&json!("Nord.theme")));
        reloaded.erase("theme");
        reloaded.erase("never_there");
        reloaded.save().expect("save after erase");

        let emptied = SettingsStore::load(pkgs, "Preferences").expect("reload again");
        assert!(emptied.values().is_empty());
    }

    #[test]
    fn load_reads_comments_in_existing_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let pkgs = tmp.path();
        let path = SettingsStore::target_path(pkgs, "Preferences");
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(&path, "{ // user comment\n \"font_size\": 12 }").expect("write");

        let store = SettingsStore::load(pkgs, "Preferences").expect("load");
        assert_eq!(store.get("font_size"), Some(&json!(12)));
    }

    #[test]
    fn load_surfaces_parse_errors() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let pkgs = tmp.path();
        let path = SettingsStore::target_path(pkgs, "Preferences");
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(&path, "{ definitely broken").expect("write");

        let err = SettingsStore::load(pkgs, "Preferences").expect_err("parse error");
        assert!(matches!(err, Error::Parse { .. }));
    }
}
