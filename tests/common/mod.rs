//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_fragment("a.hpp", "int a;\n");
//!     fixture.command().args(["merge", "include", ".hpp", "out.hpp"]).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::fragments;
    pub use super::TestFixture;
}

/// Fragment contents used across tests.
#[allow(dead_code)]
pub mod fragments {
    /// Leaf fragment with a system include only.
    pub const DELAY: &str = "#include <unistd.h>\n\nvoid delay(int ms);\n";

    /// Depends on `delay.hpp`.
    pub const WRITER: &str = "#include \"delay.hpp\"\n\nstruct Writer {};\n";

    /// Depends on `Writer.hpp` and an include that lives outside the folder.
    pub const IMU: &str = "#include \"Writer.hpp\"\n#include \"I2Cdev.hpp\"\n\nstruct Imu {};\n";
}

/// Name of the fragment folder inside every fixture.
pub const FRAGMENT_DIR: &str = "include";

/// A test fixture that provides a temporary directory holding a fragment
/// folder and, optionally, an `hmerge.yaml` configuration.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_fragment("a.hpp", "#include \"b.hpp\"\n")
///     .with_fragment("b.hpp", "int b;\n");
///
/// fixture.command().args(["order", "include"]).assert().success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add an `hmerge.yaml` configuration file with the given content.
    #[allow(dead_code)]
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child("hmerge.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add a fragment to the fragment folder.
    pub fn with_fragment(self, name: &str, content: &str) -> Self {
        self.temp_dir
            .child(FRAGMENT_DIR)
            .child(name)
            .write_str(content)
            .expect("Failed to write fragment");
        self
    }

    /// Add the `delay.hpp` / `Writer.hpp` / `Imu.hpp` chain.
    #[allow(dead_code)]
    pub fn with_imu_fragments(self) -> Self {
        self.with_fragment("Imu.hpp", fragments::IMU)
            .with_fragment("Writer.hpp", fragments::WRITER)
            .with_fragment("delay.hpp", fragments::DELAY)
    }

    /// Create the fragment folder without any fragments in it.
    #[allow(dead_code)]
    pub fn with_empty_fragment_dir(self) -> Self {
        self.temp_dir
            .child(FRAGMENT_DIR)
            .create_dir_all()
            .expect("Failed to create fragment directory");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path to the fragment folder.
    #[allow(dead_code)]
    pub fn fragment_dir(&self) -> std::path::PathBuf {
        self.temp_dir.path().join(FRAGMENT_DIR)
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Read a file in the temp directory to a string.
    #[allow(dead_code)]
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.temp_dir.path().join(path)).expect("Failed to read file")
    }

    /// Create a CLI command for the hmerge binary running in the temp
    /// directory, isolated from the caller's hmerge environment variables.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("hmerge");
        cmd.current_dir(self.path())
            .env_remove("HMERGE_CONFIG")
            .env_remove("HMERGE_AUTHOR")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
