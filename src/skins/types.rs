use std::collections::BTreeMap;

use serde_json::Value;

use super::PREFERENCES;

/// Key/value overrides for one target settings file.
///
/// Values are plain JSON: string, number, boolean, nested object, or `null`
/// as the reserved delete sentinel (never a legitimate stored value).
pub type TargetSettings = serde_json::Map<String, Value>;

/// A skin body: target-settings-file name mapped to its overrides.
pub type SkinTargets = BTreeMap<String, TargetSettings>;

/// A named, package-scoped bundle of settings overrides.
///
/// Skin names are unique within their owning package, not globally; two
/// packages may both ship a skin called "Nord".
#[derive(Debug, Clone, PartialEq)]
pub struct Skin {
    /// Package providing the skin (directory name under the packages tree).
    pub package: String,
    /// Skin name (top-level key in its skins file).
    pub name: String,
    /// Per-target overrides applied when the skin is selected.
    pub targets: SkinTargets,
}

impl Skin {
    /// Display identifier `"<package>/<name>"`, also persisted as the
    /// current-skin marker in the preferences store.
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}/{}", self.package, self.name)
    }

    /// What: Check skin integrity.
    ///
    /// Inputs: none (inspects `self.targets`).
    ///
    /// Output:
    /// - `true` when the skin provides non-empty string values for both
    ///   `"theme"` and `"color_scheme"` under the `"Preferences"` target.
    ///
    /// Details:
    /// - Skins failing this check are skipped by the scanner and refused by
    ///   the user-skin writer; applying them would leave the editor in an
    ///   unpredictable half-themed state.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let Some(prefs) = self.targets.get(PREFERENCES) else {
            return false;
        };
        ["theme", "color_scheme"].iter().all(|key| {
            prefs
                .get(*key)
                .and_then(Value::as_str)
                .is_some_and(|s| !s.trim().is_empty())
        })
    }
}

/// All skins discovered across all scanned packages at a point in time.
///
/// Rebuilt on demand by [`super::scan`]; never cached between invocations.
#[derive(Debug, Clone, Default)]
pub struct SkinRegistry {
    /// Discovered skins, sorted by (package, name) for deterministic scans.
    pub skins: Vec<Skin>,
}

impl SkinRegistry {
    /// Number of skins in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.skins.len()
    }

    /// Whether the registry holds no skins at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skins.is_empty()
    }
}
