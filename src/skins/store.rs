use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use super::SKINS_EXT;
use super::types::{Skin, SkinRegistry, SkinTargets};
use crate::error::{Error, Result};

/// What: Scan a packages tree and aggregate every valid skin into a registry.
///
/// Inputs:
/// - `packages_dir`: Root directory whose immediate subdirectories are
///   packages; `*.skins` files are picked up at any depth below a package.
///
/// Output:
/// - A [`SkinRegistry`] sorted by (package, name). Rebuilt from scratch on
///   every call; callers re-invoke to reflect filesystem changes.
///
/// Details:
/// - A file that fails to parse is logged and skipped; scanning continues
///   with the remaining files.
/// - Skins missing the required theme settings group are logged and skipped.
#[must_use]
pub fn scan(packages_dir: &Path) -> SkinRegistry {
    let mut registry = SkinRegistry::default();
    for entry in WalkDir::new(packages_dir)
        .min_depth(2)
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(OsStr::to_str) != Some(SKINS_EXT) {
            continue;
        }
        let Some(package) = package_of(packages_dir, entry.path()) else {
            continue;
        };
        match load_skins_file(entry.path()) {
            Ok(skins) => {
                for (name, targets) in skins {
                    let skin = Skin {
                        package: package.clone(),
                        name,
                        targets,
                    };
                    if skin.is_valid() {
                        registry.skins.push(skin);
                    } else {
                        tracing::warn!(
                            path = %entry.path().display(),
                            skin = %skin.id(),
                            "skipping skin without theme/color_scheme settings"
                        );
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "skipping unparsable skins file");
            }
        }
    }
    registry
        .skins
        .sort_by(|a, b| (&a.package, &a.name).cmp(&(&b.package, &b.name)));
    tracing::debug!(
        packages_dir = %packages_dir.display(),
        skins = registry.len(),
        "scanned packages for skins"
    );
    registry
}

/// Owning package of a skins file: the first path component below the
/// packages root. `None` for paths outside the root.
fn package_of(packages_dir: &Path, path: &Path) -> Option<String> {
    path.strip_prefix(packages_dir)
        .ok()?
        .components()
        .next()
        .and_then(|c| c.as_os_str().to_str())
        .map(ToOwned::to_owned)
}

/// What: Load and decode a single skins file.
///
/// Inputs:
/// - `path`: File expected to hold a JSON-with-comments mapping of skin
///   name to per-target overrides.
///
/// Output:
/// - The decoded mapping, or [`Error::Read`] / [`Error::Parse`].
pub(crate) fn load_skins_file(path: &Path) -> Result<BTreeMap<String, SkinTargets>> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    json5::from_str(&text).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
