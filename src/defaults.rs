//! Default values for hmerge configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

/// Config file looked up in the working directory when none is named.
pub const DEFAULT_CONFIG_FILENAME: &str = "hmerge.yaml";

/// Selector that matches every file in the input folder.
pub const ALL_FILES_SELECTOR: &str = "*";

/// Selector used when neither the command line nor the config file sets one.
pub const DEFAULT_SELECTOR: &str = ALL_FILES_SELECTOR;

/// Banner author used when no user name can be determined.
pub const UNKNOWN_AUTHOR: &str = "unknown";
