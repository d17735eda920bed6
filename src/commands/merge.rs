//! # Merge Command Implementation
//!
//! This module implements the `merge` subcommand, which writes every fragment
//! in the input folder into a single output file, dependencies first.
//!
//! ```bash
//! hmerge merge include .hpp pimu.hpp
//! ```
//!
//! On success the run information banner is echoed to stdout along with the
//! number of fragments merged. A dependency cycle, a missing folder, or a
//! selector matching nothing ends the run without creating the output file.
//! `--dry-run` prints the merged text instead of writing it.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::SourceArgs;
use hmerge::output::OutputConfig;
use hmerge::phases::orchestrator;

/// Merge the fragments in a folder into a single file
#[derive(Args, Debug)]
pub struct MergeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// File to write the merged result to.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Name recorded on the banner's `Created by:` line.
    ///
    /// Defaults to the current user. Can also be set with the
    /// `HMERGE_AUTHOR` environment variable.
    #[arg(long, value_name = "NAME", env = "HMERGE_AUTHOR")]
    pub author: Option<String>,

    /// Print the merged result to stdout instead of writing the output file.
    #[arg(long)]
    pub dry_run: bool,
}

/// Execute the `merge` command.
pub fn execute(args: MergeArgs, out: &OutputConfig) -> Result<()> {
    let settings = args.source.settings(args.output, args.author)?;

    if args.dry_run {
        let rendered = orchestrator::render_merge(&settings)?;
        print!("{}", rendered.text);
        return Ok(());
    }

    let report = orchestrator::execute_merge(&settings)?;

    println!("{}", out.heading("System Information:"));
    println!("{}", report.info.render(report.order.iter()));
    println!(
        "{}",
        out.success(&format!(
            "Successfully merged {} files into '{}'.",
            report.merged,
            report.output.display()
        ))
    );

    Ok(())
}
