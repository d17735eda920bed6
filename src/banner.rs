//! # Run Metadata Banner
//!
//! Every merged file opens with a C block comment describing how it was
//! produced:
//!
//! ```text
//! /* File: pimu.hpp
//! Created by: maino
//! Date: 2025-05-05 12:50:54
//! OS: Linux 6.8.0
//! Folder: include
//!
//! Merged Files:
//! delay.hpp
//! Writer.hpp
//! */
//! ```
//!
//! [`RunInfo`] gathers the metadata (output name, author, timestamp,
//! platform, source folder) and renders the text between `/* ` and `*/`.

use std::env;
use std::path::Path;
use std::process::Command;

use chrono::{Local, NaiveDateTime};

use crate::defaults::UNKNOWN_AUTHOR;

/// Format used for the `Date:` line
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Environment variables naming the current user, in lookup order
const USER_VARS: [&str; 4] = ["LOGNAME", "USER", "LNAME", "USERNAME"];

/// Metadata describing one merge run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInfo {
    /// Output file name as given by the user
    pub output: String,
    /// User the artifact is attributed to
    pub author: String,
    /// Local time the run started
    pub timestamp: NaiveDateTime,
    /// Platform name and release, e.g. `Linux 6.8.0`
    pub platform: String,
    /// Input folder as given by the user
    pub folder: String,
}

impl RunInfo {
    /// Collect metadata for a run happening now.
    ///
    /// `author` overrides the detected user name when set.
    pub fn collect(output: &Path, folder: &Path, author: Option<&str>) -> Self {
        Self {
            output: output.display().to_string(),
            author: author.map_or_else(current_user, str::to_string),
            timestamp: Local::now().naive_local(),
            platform: platform(),
            folder: folder.display().to_string(),
        }
    }

    /// Render the banner text listing `merged` in the given order.
    ///
    /// The text ends with a newline; the caller wraps it in `/* ` and `*/`.
    pub fn render<'a>(&self, merged: impl IntoIterator<Item = &'a str>) -> String {
        let files: Vec<&str> = merged.into_iter().collect();
        format!(
            "File: {}\nCreated by: {}\nDate: {}\nOS: {}\nFolder: {}\n\nMerged Files:\n{}\n",
            self.output,
            self.author,
            self.timestamp.format(DATE_FORMAT),
            self.platform,
            self.folder,
            files.join("\n"),
        )
    }
}

/// Name of the user running the merge.
///
/// Reads `LOGNAME`, `USER`, `LNAME` and `USERNAME` in that order, falling
/// back to `unknown`.
pub fn current_user() -> String {
    USER_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|name| !name.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}

/// Platform family and release, e.g. `Linux 6.8.0` or `Windows`.
pub fn platform() -> String {
    let family = os_family();
    match os_release() {
        Some(release) => format!("{} {}", family, release),
        None => family.to_string(),
    }
}

fn os_family() -> &'static str {
    match env::consts::OS {
        "linux" => "Linux",
        "macos" | "ios" => "Darwin",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "netbsd" => "NetBSD",
        "openbsd" => "OpenBSD",
        "android" => "Android",
        other => other,
    }
}

#[cfg(unix)]
fn os_release() -> Option<String> {
    let output = Command::new("uname").arg("-r").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let release = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!release.is_empty()).then_some(release)
}

#[cfg(not(unix))]
fn os_release() -> Option<String> {
    let output = Command::new("cmd").args(["/C", "ver"]).output().ok()?;
    let text = String::from_utf8_lossy(&output.stdout);
    // "Microsoft Windows [Version 10.0.22631.3447]"
    let start = text.find("Version ")? + "Version ".len();
    let end = text[start..].find(']')? + start;
    Some(text[start..end].trim().to_string())
}
