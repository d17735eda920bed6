//! Implementation of the phases of an hmerge run.
//!
//! ## Overview
//!
//! A merge follows 4 phases:
//! 1. Discovery - Load the fragments in the input folder matching the selector
//! 2. Graph Construction - Extract each fragment's quoted includes
//! 3. Ordering - Linearize the graph so dependencies precede dependents
//! 4. Writing - Emit the banner and every fragment once, in order
//!
//! Data flows strictly forward. Each phase depends only on the previous
//! phases and the foundation modules (`fragment`, `selector`, `error`).

// Phase modules
pub mod discovery;
pub mod extraction;
pub mod graph;
pub mod orchestrator;
pub mod ordering;
pub mod write;

// Re-export phase modules under their pipeline position
pub use discovery as phase1;
pub use graph as phase2;
pub use ordering as phase3;
pub use write as phase4;

pub use graph::{DependencyGraph, UnresolvedInclude};

/// Fragment names in dependency order (dependencies first)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOrder {
    /// Ordered list of fragment names
    pub order: Vec<String>,
}

impl ResolvedOrder {
    pub fn new(order: Vec<String>) -> Self {
        Self { order }
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Position of a fragment in the order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.order.iter().position(|n| n == name)
    }
}
