//! Process exit codes used by the `hmerge` binary.
//!
//! - `0`: the command succeeded.
//! - `1`: a fatal error (dependency cycle, unreadable fragment, unwritable
//!   output, malformed config file).
//! - `2`: invalid command-line usage. Produced by `clap` itself.
//! - `3`: nothing to merge. The folder is missing, nothing matched the
//!   selector, or a required setting was never given. No output is written.

use crate::error::Error;

/// The command completed successfully.
pub const SUCCESS: i32 = 0;

/// A fatal error aborted the run.
pub const ERROR: i32 = 1;

/// Invalid command-line usage (emitted by clap).
pub const USAGE: i32 = 2;

/// The inputs did not describe anything to merge.
pub const NO_INPUT: i32 = 3;

/// Map an error surfaced at the binary boundary to its exit code.
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<Error>() {
        Some(e) if e.is_configuration_error() => NO_INPUT,
        _ => ERROR,
    }
}
