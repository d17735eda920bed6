//! # hmerge
//!
//! Merge a folder of header fragments into a single file. Fragments refer to
//! each other through quoted include directives (`#include "name.hpp"`);
//! the merged file contains every fragment exactly once, each one after all
//! the fragments it includes. Circular includes are detected and rejected.
//!
//! ## Quick Example
//!
//! ```
//! use hmerge::fragment::{Fragment, FragmentSet};
//! use hmerge::phases::{ordering, DependencyGraph};
//!
//! let fragments = FragmentSet::from_fragments(vec![
//!     Fragment::new("a.hpp", "#include \"b.hpp\"\nint a;\n"),
//!     Fragment::new("b.hpp", "int b;\n"),
//! ]);
//! let graph = DependencyGraph::build(&fragments);
//! let order = ordering::execute(&fragments, &graph).unwrap();
//!
//! assert_eq!(order.order, vec!["b.hpp", "a.hpp"]);
//! ```
//!
//! ## Execution Flow
//!
//! The `phases::orchestrator` runs four phases, each consuming only the
//! output of the ones before it:
//!
//! 1.  **Discovery**: Load the files in the input folder that match the
//!     selector, in name order.
//! 2.  **Graph Construction**: Extract each fragment's quoted includes.
//! 3.  **Ordering**: Depth-first linearization with cycle detection.
//! 4.  **Writing**: Emit the metadata banner and each fragment once.
//!
//! Includes naming files outside the loaded set are recorded but impose no
//! ordering; they are left for the compiler to resolve.

pub mod banner;
pub mod config;
pub mod defaults;
pub mod error;
pub mod exit_codes;
pub mod fragment;
pub mod output;
pub mod phases;
pub mod selector;

pub use error::{Error, Result};

#[cfg(test)]
mod ordering_proptest;
