//! Phase 4: Writing the Merged Output
//!
//! This is the final phase of the hmerge pipeline. It walks the resolved
//! order and produces a single text artifact:
//!
//! 1.  **Banner**: `/* <run metadata> */` listing the fragments in order.
//!
//! 2.  **Sections**: For every fragment, a `// ===== <name> =====` delimiter
//!     followed by the fragment's content verbatim. A name already emitted is
//!     skipped, so the output never contains a fragment twice even if the
//!     order it is given does.
//!
//! The artifact is rendered in memory and written with a single call, so a
//! failure cannot leave a partially written file behind.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, warn};

use super::ResolvedOrder;
use crate::banner::RunInfo;
use crate::error::{Error, Result};
use crate::fragment::FragmentSet;

/// A rendered merge artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutput {
    /// Full text of the merged file
    pub text: String,
    /// Number of fragment sections emitted
    pub merged: usize,
}

/// Section delimiter placed before each fragment's content
pub fn section_marker(name: &str) -> String {
    format!("// ===== {} =====", name)
}

/// Render the merged artifact without touching the filesystem.
pub fn render(order: &ResolvedOrder, fragments: &FragmentSet, info: &RunInfo) -> MergeOutput {
    let mut text = format!("/* {}*/\n", info.render(order.iter()));
    let mut emitted: HashSet<&str> = HashSet::new();

    for name in order.iter() {
        if emitted.contains(name) {
            debug!("{} already emitted; skipping duplicate", name);
            continue;
        }
        let Some(fragment) = fragments.get(name) else {
            warn!("{} is in the merge order but was never loaded", name);
            continue;
        };
        emitted.insert(name);

        text.push('\n');
        text.push_str(&section_marker(name));
        text.push('\n');
        text.push_str(&fragment.content);
        text.push('\n');
    }

    MergeOutput {
        merged: emitted.len(),
        text,
    }
}

/// Execute Phase 4: Render and write the merged artifact to `output_path`
///
/// Creates the parent directory when missing and overwrites an existing file.
/// Returns the number of fragments merged.
pub fn execute(
    order: &ResolvedOrder,
    fragments: &FragmentSet,
    info: &RunInfo,
    output_path: &Path,
) -> Result<usize> {
    let output = render(order, fragments, info);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::WriteOutput {
            path: output_path.to_path_buf(),
            source,
        })?;
    }

    fs::write(output_path, &output.text).map_err(|source| Error::WriteOutput {
        path: output_path.to_path_buf(),
        source,
    })?;

    Ok(output.merged)
}
