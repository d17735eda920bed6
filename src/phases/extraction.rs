//! Include directive extraction
//!
//! Scans a fragment's text for local, quoted includes. A line declares a
//! dependency only when it *starts* with `#include`, followed by whitespace
//! and a double-quoted name:
//!
//! ```text
//! #include "Writer.hpp"     -> Writer.hpp
//! #include <unistd.h>       -> (system include, ignored)
//!   #include "Gyro.hpp"     -> (indented, ignored)
//! ```
//!
//! Lines end at `\n`, `\r\n` or a lone `\r`. Only the first quoted name on
//! a line is taken. Malformed lines never fail; they simply yield nothing.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static INCLUDE_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^#include\s+"(.+?)""#).expect("include pattern is valid"));

/// Extract the set of locally included names from fragment content.
pub fn extract_includes(content: &str) -> BTreeSet<String> {
    content
        .split(['\n', '\r'])
        .filter_map(|line| INCLUDE_DIRECTIVE.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
