//! File-name selectors for choosing which files in a folder are fragments.
//!
//! A selector is written the way users type it on the command line:
//!
//! - `*` (or an empty string) selects every file.
//! - A string with glob metacharacters (`*`, `?`, `[`) is a glob pattern
//!   matched against the bare file name, e.g. `*.h*`.
//! - Anything else is a suffix, e.g. `.hpp`.

use std::fmt;
use std::str::FromStr;

use glob::Pattern;

use crate::defaults::ALL_FILES_SELECTOR;
use crate::error::{Error, Result};

/// Which files in the input folder participate in the merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Every regular file in the folder
    All,
    /// File names ending with the given string
    Suffix(String),
    /// File names matching a glob pattern
    Glob(Pattern),
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() || raw == ALL_FILES_SELECTOR {
            return Ok(Selector::All);
        }

        if raw.contains(['*', '?', '[']) {
            let pattern = Pattern::new(raw).map_err(|e| Error::InvalidSelector {
                selector: raw.to_string(),
                message: e.to_string(),
            })?;
            return Ok(Selector::Glob(pattern));
        }

        Ok(Selector::Suffix(raw.to_string()))
    }

    /// Check whether a bare file name is selected.
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Suffix(suffix) => file_name.ends_with(suffix.as_str()),
            Selector::Glob(pattern) => pattern.matches(file_name),
        }
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Selector::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str(ALL_FILES_SELECTOR),
            Selector::Suffix(suffix) => f.write_str(suffix),
            Selector::Glob(pattern) => f.write_str(pattern.as_str()),
        }
    }
}
