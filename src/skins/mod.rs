//! Skins: named, package-scoped bundles of settings-file overrides.
//!
//! A skins file (`*.skins`, JSON-with-comments) maps skin names to a
//! mapping of target-settings-file name to key/value overrides. The store
//! scans package directories for such files, the resolver picks candidates
//! out of the resulting registry, and the user module maintains the single
//! user-owned skins file.

/// Candidate lookup and display ordering over a scanned registry.
mod resolve;
/// Filesystem scanning of package directories for skins files.
mod store;
/// Capture-template parsing and filtering for saving user skins.
mod template;
/// Skin and registry type definitions.
mod types;
/// The user-owned skins file: saving and deleting named skins.
mod user;

pub use store::scan;
pub use template::{Template, TemplateNode, capture, default_template, template_from_settings};
pub use types::{Skin, SkinRegistry, SkinTargets, TargetSettings};
pub use user::{delete_user_skin, save_user_skin, user_skins_path};

/// Target name of the main preferences settings file.
pub const PREFERENCES: &str = "Preferences";

/// File extension of target settings stores (without the dot).
pub const SETTINGS_EXT: &str = "settings";

/// File extension of skins files (without the dot).
pub const SKINS_EXT: &str = "skins";

/// Name of the package owning user-saved skins and all live settings stores.
pub const USER_PACKAGE: &str = "User";

/// Well-known file aggregating all user-saved skins.
pub const USER_SKINS_FILE: &str = "Saved Skins.skins";

/// Target settings file holding skinner's own configuration keys.
pub const SELF_SETTINGS_TARGET: &str = "Skinner";

/// Key in [`SELF_SETTINGS_TARGET`] describing which keys to capture on save.
pub const TEMPLATE_KEY: &str = "skin-template";

/// Key in [`PREFERENCES`] recording the currently applied skin as
/// `"<package>/<name>"`.
pub const CURRENT_SKIN_KEY: &str = "skin";
