use std::path::Path;

use serde_json::{Map, Value};

use super::store::SettingsStore;
use crate::error::Result;
use crate::skins::{CURRENT_SKIN_KEY, PREFERENCES, Skin, TargetSettings};

/// What: Apply every override of a skin into the live target settings stores.
///
/// Inputs:
/// - `packages_dir`: Packages tree holding the target stores.
/// - `skin`: Resolved skin whose targets get merged in.
///
/// Output:
/// - Side effects only. Each target store is loaded, mutated key-by-key,
///   and flushed; the applied skin is recorded under the `skin` key of the
///   `Preferences` store first.
///
/// Details:
/// - A `null` override removes the key (no-op when absent); object values
///   deep-merge into any existing object; everything else overwrites.
/// - A target whose store cannot be read or written is logged and skipped;
///   the remaining targets are still applied. Nothing is rolled back.
/// - Applying the same skin twice leaves the stores unchanged after the
///   first application.
pub fn apply(packages_dir: &Path, skin: &Skin) {
    record_current_skin(packages_dir, skin);
    for (target, overrides) in &skin.targets {
        if let Err(e) = apply_target(packages_dir, target, overrides) {
            tracing::warn!(
                skin = %skin.id(),
                settings_target = %target,
                error = %e,
                "skipping target while applying skin"
            );
        }
    }
    tracing::info!(skin = %skin.id(), targets = skin.targets.len(), "applied skin");
}

/// Remember the applied skin so the selector can pre-select it next time.
fn record_current_skin(packages_dir: &Path, skin: &Skin) {
    match SettingsStore::load(packages_dir, PREFERENCES) {
        Ok(mut store) => {
            store.set(CURRENT_SKIN_KEY, Value::String(skin.id()));
            if let Err(e) = store.save() {
                tracing::warn!(error = %e, "failed to record current skin");
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to record current skin");
        }
    }
}

/// Merge one target's overrides into its settings store and flush it.
fn apply_target(packages_dir: &Path, target: &str, overrides: &TargetSettings) -> Result<()> {
    let mut store = SettingsStore::load(packages_dir, target)?;
    for (key, value) in overrides {
        match value {
            Value::Null => store.erase(key),
            Value::Object(incoming) => {
                let mut merged = store
                    .get(key)
                    .cloned()
                    .unwrap_or_else(|| Value::Object(Map::new()));
                merge_into(&mut merged, incoming);
                store.set(key, merged);
            }
            other => store.set(key, other.clone()),
        }
    }
    store.save()
}

/// What: Deep-merge an object override into an existing value, key by key.
///
/// Inputs:
/// - `existing`: Value currently stored; replaced by an empty object first
///   when it is not an object.
/// - `incoming`: Override object to fold in.
///
/// Output:
/// - `existing` mutated in place: `null` children delete, object children
///   recurse, all other children overwrite. Sibling keys not mentioned by
///   `incoming` are left untouched.
pub(crate) fn merge_into(existing: &mut Value, incoming: &Map<String, Value>) {
    if !existing.is_object() {
        *existing = Value::Object(Map::new());
    }
    let Some(map) = existing.as_object_mut() else {
        return;
    };
    for (key, value) in incoming {
        match value {
            Value::Null => {
                map.remove(key);
            }
            Value::Object(inner) => {
                let slot = map.entry(key.clone()).or_insert_with(|| Value::Object(Map::new()));
                merge_into(slot, inner);
            }
            other => {
                map.insert(key.clone(), other.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    /// What: Deep merge overwrites listed keys, deletes nulls, keeps siblings.
    ///
    /// Inputs:
    /// - Existing nested object; override touching one branch with a set,
    ///   a nested set, and a nested delete.
    ///
    /// Output:
    /// - Only the touched keys change; untouched siblings survive.
    fn merge_into_is_key_by_key() {
        let mut existing = json!({
            "editor": { "ligatures": true, "rulers": [80], "minimap": true },
            "untouched": 1
        });
        let incoming = json!({
            "editor": { "ligatures": false, "minimap": null },
            "added": "yes"
        });
        let Value::Object(incoming) = incoming else {
            panic!("incoming must be an object")
        };
        merge_into(&mut existing, &incoming);
        assert_eq!(
            existing,
            json!({
                "editor": { "ligatures": false, "rulers": [80] },
                "untouched": 1,
                "added": "yes"
            })
        );
    }

    #[test]
    fn merge_into_replaces_non_object_existing() {
        let mut existing = json!("scalar");
        let incoming = json!({ "a": 1 });
        let Value::Object(incoming) = incoming else {
            panic!("incoming must be an object")
        };
        merge_into(&mut existing, &incoming);
        assert_eq!(existing, json!({ "a": 1 }));
    }
}
