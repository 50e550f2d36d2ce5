//! Command-line argument definition and processing.

use std::path::{Path, PathBuf};

use clap::Parser;

/// skinner - switch between named bundles of editor settings
#[derive(Parser, Debug)]
#[command(name = "skinner")]
#[command(version)]
#[command(about = "Switch between named bundles of editor settings (skins)", long_about = None)]
pub struct Args {
    /// Package providing the skin: applies directly with --name, otherwise
    /// filters the selector and --list
    #[arg(short, long)]
    pub package: Option<String>,

    /// Skin name to apply directly (requires --package; otherwise the
    /// selector opens)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Capture the current settings per template and save them as a user
    /// skin with the given name
    #[arg(short = 's', long, value_name = "NAME")]
    pub save: Option<String>,

    /// Delete a user skin by name
    #[arg(short = 'd', long, value_name = "NAME")]
    pub delete: Option<String>,

    /// List available skins as PACKAGE/NAME lines and exit
    #[arg(short, long)]
    pub list: bool,

    /// Override the packages directory scanned for *.skins files
    #[arg(long, value_name = "DIR")]
    pub packages_dir: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Process command-line arguments and handle early-exit modes.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `packages_dir`: Resolved packages tree to operate on.
///
/// Output:
/// - Returns only when the interactive selector should be launched; every
///   command-line mode exits the process from its handler.
///
/// Details:
/// - Handles `--list`, `--save`, `--delete`, and direct `--package --name`
///   application, in that order.
/// - A `--name` without `--package` is logged and falls through to the
///   selector, mirroring an incomplete direct-apply request.
pub fn process_args(args: &Args, packages_dir: &Path) {
    use crate::args::{delete, list, save, set};

    if args.list {
        list::handle_list(packages_dir, args.package.as_deref());
    }

    if let Some(name) = &args.save {
        save::handle_save(packages_dir, name);
    }

    if let Some(name) = &args.delete {
        delete::handle_delete(packages_dir, name);
    }

    if let (Some(package), Some(name)) = (&args.package, &args.name) {
        set::handle_apply(packages_dir, package, name);
    }

    if args.name.is_some() {
        tracing::info!("--name given without --package; opening selector");
    }
}
