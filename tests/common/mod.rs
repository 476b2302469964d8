//! Shared test utilities for integration and E2E tests.
//!
//! This module provides a fixture that lays out a unit library in a
//! temporary directory, plus the unit documents most tests start from.
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
//!     let fixture = TestFixture::new().with_standard_library();
//!     fixture.command().args(["compose", "--profile", "default"]).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::units;
    pub use super::TestFixture;
}

/// Unit and template sources for testing.
#[allow(dead_code)]
pub mod units {
    /// Profile with an unconditional item, a filtered item and a nested item.
    pub const DEFAULT_PROFILE: &str = r#"
kind: profile
name: default
sections:
  Rules:
    - always
    - text: ci-only
      when:
        profiles: [other]
    - shared line
  Workflow:
    - Setup:
        - step 1
        - step 2
"#;

    /// Target with a pack exclusion and a detailed item with children.
    pub const NODE_TARGET: &str = r#"
kind: target
name: node
sections:
  Rules:
    - shared line
    - text: use npm
      exclude_when:
        packs: [bun]
  Tooling:
    - text: Node tooling
      items:
        - npm ci
        - npm test
"#;

    /// Pack that repeats an item the profile already has.
    pub const BUN_PACK: &str = r#"
kind: pack
name: bun
sections:
  Tooling:
    - use bun
  Rules:
    - shared line
"#;

    /// Template using every placeholder.
    pub const TEMPLATE: &str =
        "# Agent guide\n\nProfile: {{ profile }}\nTargets: {{ targets }}\nPacks: {{ packs }}\n\n{{ sections }}";

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "invalid: yaml: content:";
}

/// A test fixture that provides a temporary unit library.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_unit("profiles/default.yml", units::DEFAULT_PROFILE)
///     .with_template(units::TEMPLATE);
///
/// fixture.command().args(["ls"]).assert().success();
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

    /// Add a unit file at `path`, relative to the library root.
    pub fn with_unit(self, path: &str, content: &str) -> Self {
        self.with_file(path, content)
    }

    /// Add the default template.
    pub fn with_template(self, content: &str) -> Self {
        self.with_file("templates/claude.md.tmpl", content)
    }

    /// The default profile, the node target, the bun pack and the template.
    pub fn with_standard_library(self) -> Self {
        self.with_unit("profiles/default.yml", units::DEFAULT_PROFILE)
            .with_unit("targets/node.yml", units::NODE_TARGET)
            .with_unit("packs/bun.yml", units::BUN_PACK)
            .with_template(units::TEMPLATE)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of a file inside the fixture.
    #[allow(dead_code)]
    pub fn file_path(&self, path: &str) -> PathBuf {
        self.temp_dir.path().join(path)
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    /// Create a command that runs in this fixture's directory.
    ///
    /// `MDCOMPOSE_ROOT` and `MDCOMPOSE_TEMPLATE` are cleared so the library
    /// root is the fixture directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("mdcompose");
        cmd.current_dir(self.path())
            .env_remove("MDCOMPOSE_ROOT")
            .env_remove("MDCOMPOSE_TEMPLATE")
            .env_remove("RUST_LOG");
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_standard_library_layout() {
        let fixture = TestFixture::new().with_standard_library();
        assert!(fixture.file_path("profiles/default.yml").exists());
        assert!(fixture.file_path("targets/node.yml").exists());
        assert!(fixture.file_path("packs/bun.yml").exists());
        assert!(fixture.file_path("templates/claude.md.tmpl").exists());
    }

    #[test]
    fn test_units_are_valid_yaml() {
        for unit in [units::DEFAULT_PROFILE, units::NODE_TARGET, units::BUN_PACK] {
            serde_yaml::from_str::<serde_yaml::Value>(unit).expect("Unit should be valid YAML");
        }
    }

    #[test]
    fn test_invalid_yaml_is_actually_invalid() {
        let result = serde_yaml::from_str::<serde_yaml::Value>(units::INVALID_YAML);
        assert!(result.is_err(), "INVALID_YAML should not parse");
    }
}
