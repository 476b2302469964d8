//! Default values for mdcompose configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::{Path, PathBuf};

/// Environment variable naming the unit library root.
pub const ROOT_ENV: &str = "MDCOMPOSE_ROOT";

/// Environment variable naming the template file.
pub const TEMPLATE_ENV: &str = "MDCOMPOSE_TEMPLATE";

/// Directory inside the library root that holds templates.
pub const TEMPLATES_DIR: &str = "templates";

/// Template file used when none is given.
pub const DEFAULT_TEMPLATE_FILENAME: &str = "claude.md.tmpl";

/// Unit library root used when neither `--root` nor `MDCOMPOSE_ROOT` is set.
pub const DEFAULT_ROOT: &str = ".";

/// Returns the default template path for a library root.
///
/// This can be overridden by the `--template` CLI flag or the
/// `MDCOMPOSE_TEMPLATE` environment variable.
pub fn default_template_path(root: &Path) -> PathBuf {
    root.join(TEMPLATES_DIR).join(DEFAULT_TEMPLATE_FILENAME)
}
