//! Configuration for skinner itself: paths, `skinner.conf`, selector palette.
//!
//! Skins and target settings files are the domain data; this module only
//! covers the tool's own ambient configuration. Public re-exports keep the
//! `crate::config::*` API stable.

/// Path resolution for config, log, and packages directories.
mod paths;
/// Parsing utilities for `key = value` configuration lines.
mod parsing;
/// Settings access and the skeleton configuration file.
mod settings;

pub use paths::{config_dir, default_packages_dir, logs_dir, resolve_conf_path};
pub use settings::{Palette, Settings, parse_settings, settings};
