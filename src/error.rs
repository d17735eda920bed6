//! # Error Handling
//!
//! This module defines the centralized error type for the `hmerge` library.
//! It uses `thiserror` to build a single `Error` enum covering every failure
//! mode of a merge run, each variant carrying enough context (folder, file or
//! fragment name) to diagnose the problem without re-running.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum for all library failures.
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Errors fall into three families:
//!
//! - Configuration problems (missing folder, nothing matches the selector,
//!   missing settings, a malformed selector). No artifact is produced and the
//!   run ends unsuccessfully; see [`Error::is_configuration_error`].
//! - Dependency cycles, which are fatal because no valid order exists.
//! - I/O and parsing failures, which abort the run rather than produce a
//!   truncated artifact.
//!
//! An include that names a file outside the loaded fragment set is *not* an
//! error and has no variant here.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for hmerge operations
#[derive(Error, Debug)]
pub enum Error {
    /// The YAML configuration file could not be interpreted.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A required setting was supplied neither on the command line nor in
    /// the configuration file.
    #[error("Missing setting: {setting} (pass it on the command line or set it in the config file)")]
    MissingSetting { setting: String },

    /// The selector string is not a valid glob pattern.
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// The input folder does not exist or is not a directory.
    #[error("The folder '{}' does not exist.", folder.display())]
    FolderNotFound { folder: PathBuf },

    /// The folder exists but no file in it matches the selector.
    #[error("No matching files found in '{}' for selector '{selector}'.", folder.display())]
    NoMatchingFiles { folder: PathBuf, selector: String },

    /// A circular include chain was found among loaded fragments.
    #[error("Circular dependency detected in {fragment}: {cycle}")]
    CycleDetected {
        /// The fragment reached again while already on the traversal path
        fragment: String,
        /// The path that closes the cycle, e.g. `a.h -> b.h -> a.h`
        cycle: String,
    },

    /// A fragment could not be read.
    #[error("Failed to read fragment '{}': {source}", path.display())]
    ReadFragment {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The merged output could not be written.
    #[error("Failed to write output '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be read.
    #[error("Failed to read config file '{}': {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether this error means "nothing to merge" rather than a failed merge.
    ///
    /// Configuration errors are reported to the user and end the run without
    /// writing output, but they are not crashes: the inputs simply did not
    /// describe anything to merge.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Error::FolderNotFound { .. }
                | Error::NoMatchingFiles { .. }
                | Error::MissingSetting { .. }
                | Error::InvalidSelector { .. }
        )
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
