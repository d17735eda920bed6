//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the `hmerge`
//! command-line tool. Each subcommand is defined in its own file.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic by calling into the `hmerge` library.
//!
//! Commands that read a fragment folder share [`SourceArgs`], which layers the
//! positional arguments over the optional `hmerge.yaml` config file.

pub mod completions;
pub mod graph;
pub mod merge;
pub mod order;

use std::path::PathBuf;

use clap::Args;

use hmerge::config::{self, MergeSettings, Overrides};
use hmerge::defaults::DEFAULT_CONFIG_FILENAME;

/// Where the fragments come from
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Folder containing the fragments (only its top level is read).
    #[arg(value_name = "FOLDER")]
    pub folder: Option<PathBuf>,

    /// Which files are fragments: `*` for every file, a suffix such as
    /// `.hpp`, or a glob such as `*.h*`.
    #[arg(value_name = "SELECTOR")]
    pub selector: Option<String>,

    /// Path to an hmerge.yaml configuration file.
    ///
    /// Defaults to `hmerge.yaml` in the current directory, which is used only
    /// if it exists. Can also be set with the `HMERGE_CONFIG` environment
    /// variable.
    #[arg(short, long, value_name = "FILE", env = "HMERGE_CONFIG")]
    pub config: Option<PathBuf>,
}

impl SourceArgs {
    /// Resolve the run settings from these arguments and the config file.
    pub fn settings(
        &self,
        output: Option<PathBuf>,
        author: Option<String>,
    ) -> hmerge::Result<MergeSettings> {
        let file = match &self.config {
            Some(path) => config::load(path, true)?,
            None => config::load(&PathBuf::from(DEFAULT_CONFIG_FILENAME), false)?,
        };

        let overrides = Overrides {
            input: self.folder.clone(),
            selector: self.selector.clone(),
            output,
            author,
        };
        MergeSettings::resolve(overrides, file)
    }
}
