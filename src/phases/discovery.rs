//! Phase 1: Fragment Discovery
//!
//! This is the first phase of the hmerge pipeline. It enumerates the files
//! directly inside the input folder, keeps those the selector matches, and
//! reads their contents into a [`FragmentSet`].
//!
//! ## Process
//!
//! 1.  **Folder Check**: A missing folder is reported as
//!     [`Error::FolderNotFound`] before anything is read.
//!
//! 2.  **Enumeration**: `walkdir` lists the folder at depth 1 only, sorted by
//!     file name. This sorted order is the enumeration order every later phase
//!     breaks ties with, so output does not depend on the host filesystem's
//!     listing order.
//!
//! 3.  **Selection**: Only regular files (symlinks are followed) whose names
//!     match the selector are kept. Names that are not valid UTF-8 are skipped.
//!
//! 4.  **Loading**: Each kept file is read as UTF-8 text. A read failure aborts
//!     the run.
//!
//! An empty selection is reported as [`Error::NoMatchingFiles`].

use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::fragment::{Fragment, FragmentSet};
use crate::selector::Selector;

/// Execute Phase 1: Load fragments from `folder` matching `selector`
pub fn execute(folder: &Path, selector: &Selector) -> Result<FragmentSet> {
    if !folder.is_dir() {
        return Err(Error::FolderNotFound {
            folder: folder.to_path_buf(),
        });
    }

    let mut fragments = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(folder).to_path_buf();
            Error::ReadFragment {
                path,
                source: e.into(),
            }
        })?;

        let path = entry.path();
        if !path.is_file() {
            debug!("Skipping non-file entry {}", path.display());
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            warn!("Skipping file with non UTF-8 name: {}", path.display());
            continue;
        };

        if !selector.matches(name) {
            debug!("Selector '{}' does not match {}", selector, name);
            continue;
        }

        let content = fs::read_to_string(path).map_err(|source| Error::ReadFragment {
            path: path.to_path_buf(),
            source,
        })?;
        fragments.push(Fragment::new(name, content));
    }

    if fragments.is_empty() {
        return Err(Error::NoMatchingFiles {
            folder: folder.to_path_buf(),
            selector: selector.to_string(),
        });
    }

    info!(
        "Loaded {} fragment(s) from {}",
        fragments.len(),
        folder.display()
    );

    // WalkDir already yields entries sorted by name and a directory cannot
    // hold two entries with the same name.
    Ok(FragmentSet::from_ordered(fragments))
}
