//! Error taxonomy for skin operations.
//!
//! Failures degrade rather than abort: scanners skip unparsable files,
//! appliers skip unwritable targets, and only direct lookups surface a
//! hard error to the user. The variants below mirror those three classes.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while scanning, resolving, applying, or editing skins.
#[derive(Debug, Error)]
pub enum Error {
    /// A skins or settings file did not parse as JSON-with-comments.
    #[error("failed to parse {}: {message}", path.display())]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser diagnostic, verbatim.
        message: String,
    },

    /// The requested (package, name) combination is not in the registry.
    #[error("no skin named {name:?} in package {package:?}")]
    SkinNotFound {
        /// Package the lookup was scoped to.
        package: String,
        /// Skin name that was requested.
        name: String,
    },

    /// A file could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A settings or skins file could not be written.
    #[error("failed to write {}", path.display())]
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A skin lacks the required theme settings group.
    #[error(
        "skin {name:?} does not provide \"theme\" and \"color_scheme\" under \"Preferences\""
    )]
    InvalidSkin {
        /// Name of the offending skin.
        name: String,
    },
}

/// Shorthand result type used throughout the library layer.
pub type Result<T> = std::result::Result<T, Error>;
