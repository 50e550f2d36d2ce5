use std::env;
use std::path::{Path, PathBuf};

/// Determine the configuration file path for skinner, searching in priority order.
///
/// Inputs: none
///
/// Output: First existing candidate among `$HOME/.config/skinner/skinner.conf`
/// and `$XDG_CONFIG_HOME/skinner/skinner.conf`, or `None`.
pub fn resolve_conf_path() -> Option<PathBuf> {
    let home = env::var("HOME").ok();
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(h) = home.as_deref() {
        candidates.push(Path::new(h).join(".config").join("skinner").join("skinner.conf"));
    }
    if let Some(xdg) = xdg_config.as_deref() {
        candidates.push(Path::new(xdg).join("skinner").join("skinner.conf"));
    }
    candidates.into_iter().find(|p| p.is_file())
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/skinner`, ensuring it exists.
///
/// Inputs: none
///
/// Output: `Some(PathBuf)` when HOME is set and the directory can be created;
/// `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join("skinner");
        if std::fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }
    None
}

/// XDG config directory for skinner (ensured to exist)
pub fn config_dir() -> PathBuf {
    // Prefer HOME ~/.config/skinner first
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    // Fallback: use XDG_CONFIG_HOME (or default to ~/.config) and ensure
    let base = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]);
    let dir = base.join("skinner");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `$HOME/.config/skinner/logs` (ensured to exist)
pub fn logs_dir() -> PathBuf {
    let base = config_dir();
    let dir = base.join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Default packages tree scanned for skins: `$HOME/.config/skinner/packages`
/// (ensured to exist). A different tree can be configured via `packages_dir`
/// in `skinner.conf` or the `--packages-dir` flag.
pub fn default_packages_dir() -> PathBuf {
    let base = config_dir();
    let dir = base.join("packages");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
