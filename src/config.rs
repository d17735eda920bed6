//! # Configuration
//!
//! Merge runs are configured in layers, highest precedence first:
//!
//! 1.  Command-line arguments ([`Overrides`]).
//! 2.  An optional YAML file ([`MergeConfig`]), `hmerge.yaml` by default:
//!
//!     ```yaml
//!     input: include
//!     selector: .hpp
//!     output: pimu.hpp
//!     author: release-bot
//!     ```
//!
//!     Relative paths in the file are resolved against the file's directory.
//!
//! 3.  Built-in defaults from [`crate::defaults`].
//!
//! [`MergeSettings::resolve`] combines the layers and reports a
//! [`Error::MissingSetting`] when the input folder is given nowhere.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::defaults::DEFAULT_SELECTOR;
use crate::error::{Error, Result};
use crate::selector::Selector;

/// Contents of an `hmerge.yaml` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MergeConfig {
    /// Folder holding the fragments
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// Selector string (`*`, a suffix, or a glob)
    #[serde(default)]
    pub selector: Option<String>,
    /// Merged output file
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// Name written to the banner's `Created by:` line
    #[serde(default)]
    pub author: Option<String>,
}

/// Parse a YAML configuration string.
///
/// An empty or comment-only document yields the default (empty) config.
pub fn parse(yaml_content: &str) -> Result<MergeConfig> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml_content).map_err(config_error)?;
    if value.is_null() {
        return Ok(MergeConfig::default());
    }
    serde_yaml::from_value(value).map_err(config_error)
}

fn config_error(err: serde_yaml::Error) -> Error {
    let message = err.to_string();
    let hint = if message.contains("unknown field") {
        Some("valid keys are: input, selector, output, author".to_string())
    } else if message.contains("invalid type") {
        Some("the config file must be a mapping of key: value pairs".to_string())
    } else {
        None
    };
    Error::ConfigParse { message, hint }
}

/// Load a configuration file, resolving relative paths against its directory
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<MergeConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config = parse(&content)?;

    if let Some(base) = path.parent() {
        config.input = config.input.map(|p| relative_to(base, p));
        config.output = config.output.map(|p| relative_to(base, p));
    }

    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Load a configuration file that may legitimately be absent.
///
/// When `required` is false a missing file yields `Ok(None)`; otherwise a
/// missing file is [`Error::ReadConfig`].
pub fn load(path: &Path, required: bool) -> Result<Option<MergeConfig>> {
    if !required && !path.exists() {
        debug!("No configuration file at {}", path.display());
        return Ok(None);
    }
    from_file(path).map(Some)
}

fn relative_to(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() || base.as_os_str().is_empty() {
        path
    } else {
        base.join(path)
    }
}

/// Settings given on the command line, each overriding the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub selector: Option<String>,
    pub output: Option<PathBuf>,
    pub author: Option<String>,
}

/// Fully resolved settings for a run
#[derive(Debug, Clone)]
pub struct MergeSettings {
    /// Folder holding the fragments
    pub input: PathBuf,
    /// Which files are fragments
    pub selector: Selector,
    /// Output file, when the command writes one
    pub output: Option<PathBuf>,
    /// Banner author override
    pub author: Option<String>,
}

impl MergeSettings {
    /// Combine command-line overrides with an optional config file
    pub fn resolve(overrides: Overrides, file: Option<MergeConfig>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let input = overrides
            .input
            .or(file.input)
            .ok_or_else(|| Error::MissingSetting {
                setting: "input folder".to_string(),
            })?;
        let selector_raw = overrides
            .selector
            .or(file.selector)
            .unwrap_or_else(|| DEFAULT_SELECTOR.to_string());

        Ok(Self {
            input,
            selector: Selector::parse(&selector_raw)?,
            output: overrides.output.or(file.output),
            author: overrides.author.or(file.author),
        })
    }

    /// The output path, which merging cannot do without
    pub fn require_output(&self) -> Result<&Path> {
        self.output
            .as_deref()
            .ok_or_else(|| Error::MissingSetting {
                setting: "output file".to_string(),
            })
    }
}
