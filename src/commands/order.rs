//! # Order Command Implementation
//!
//! This module implements the `order` subcommand, which prints the order the
//! fragments in a folder would be merged in, one name per line, without
//! writing anything. `--format json` adds the includes that point outside the
//! fragment set.
//!
//! This command is a safe, read-only operation that does not modify any files.
//! It runs phases 1-3 of the pipeline and stops before writing (phase 4).

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

use super::SourceArgs;
use hmerge::phases::orchestrator::{self, MergePlan};

/// Print the order fragments would be merged in
#[derive(Args, Debug)]
pub struct OrderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OrderFormat,
}

/// Output formats for the resolved order
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OrderFormat {
    /// One fragment name per line
    #[default]
    Text,
    /// A JSON document with the order and external includes
    Json,
}

#[derive(Debug, Serialize)]
struct OrderReport<'a> {
    folder: String,
    selector: String,
    order: Vec<&'a str>,
    external: Vec<ExternalInclude>,
}

#[derive(Debug, Serialize)]
struct ExternalInclude {
    fragment: String,
    include: String,
}

/// Execute the `order` command.
pub fn execute(args: OrderArgs) -> Result<()> {
    let settings = args.source.settings(None, None)?;
    let plan = orchestrator::plan(&settings.input, &settings.selector)?;

    match args.format {
        OrderFormat::Text => {
            for name in plan.order.iter() {
                println!("{}", name);
            }
        }
        OrderFormat::Json => {
            let report = build_report(
                &plan,
                settings.input.display().to_string(),
                settings.selector.to_string(),
            );
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn build_report(plan: &MergePlan, folder: String, selector: String) -> OrderReport<'_> {
    OrderReport {
        folder,
        selector,
        order: plan.order.iter().collect(),
        external: plan
            .unresolved()
            .into_iter()
            .map(|u| ExternalInclude {
                fragment: u.fragment,
                include: u.include,
            })
            .collect(),
    }
}
