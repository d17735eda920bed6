//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use hmerge::output::OutputConfig;

/// hmerge - Merge header fragments in include-dependency order
#[derive(Parser, Debug)]
#[command(name = "hmerge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge the fragments in a folder into a single file
    Merge(commands::merge::MergeArgs),

    /// Print the order fragments would be merged in
    Order(commands::order::OrderArgs),

    /// Display the include dependency tree
    Graph(commands::graph::GraphArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let out = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Merge(args) => commands::merge::execute(args, &out),
            Commands::Order(args) => commands::order::execute(args),
            Commands::Graph(args) => commands::graph::execute(args, &out),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Initialise `env_logger`; `RUST_LOG` takes precedence over `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // Ignore the error if a logger is already installed
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
