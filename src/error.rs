//! # Error Handling
//!
//! This module defines the centralized error type for the `mdcompose`
//! library. It uses `thiserror` to build a single `Error` enum covering every
//! way a composition can fail, with enough context (unit kind, unit name,
//! offending item) for the CLI to print an actionable message.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum of failure modes.
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Every failure is fatal for the composition that raised it. Nothing is
//! retried and no partial document is produced: inputs are static files, so a
//! retry would reproduce the same failure.
//!
//! The failure modes are:
//!
//! - A requested unit does not exist in the store.
//! - A loaded unit declares a different kind or name than requested.
//! - A raw section item has an unrecognised shape.
//! - The composition request has no profile.
//! - A request or unit document is malformed.
//! - The template file is missing.
//! - Wrapped I/O, YAML and glob errors.

use thiserror::Error;

use crate::unit::UnitKind;

/// Main error type for mdcompose operations
#[derive(Error, Debug)]
pub enum Error {
    /// The unit store has no unit of this kind and name.
    #[error("Unit not found: {kind} '{name}'")]
    NotFound { kind: UnitKind, name: String },

    /// A loaded unit declares a different kind than the one requested.
    #[error("Kind mismatch for '{name}': expected kind '{requested}', found '{found}'")]
    KindMismatch {
        requested: UnitKind,
        found: String,
        name: String,
    },

    /// A loaded unit declares a different name than the one requested.
    #[error("Name mismatch in {kind} '{requested}': document declares name '{found}'")]
    NameMismatch {
        kind: UnitKind,
        requested: String,
        found: String,
    },

    /// A raw item matches none of the accepted item shapes.
    #[error("Invalid item: {item}")]
    InvalidItem { item: String },

    /// An invalid item, located inside a specific unit section.
    #[error("Invalid item in {kind} '{name}', section '{heading}': {item}")]
    InvalidUnitItem {
        kind: UnitKind,
        name: String,
        heading: String,
        item: String,
    },

    /// The composition request does not name a profile.
    #[error("Composition request is missing 'profile'")]
    MissingProfile,

    /// A composition request or unit document could not be interpreted.
    ///
    /// This error includes the specific issue and optionally a hint about how
    /// to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the document
        hint: Option<String>,
    },

    /// The template file does not exist.
    #[error("Template not found: {path}")]
    TemplateNotFound { path: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),
}

impl Error {
    /// Attach the unit and section an [`Error::InvalidItem`] was found in.
    ///
    /// Other variants are returned unchanged.
    pub fn in_section(self, kind: UnitKind, name: &str, heading: &str) -> Self {
        match self {
            Error::InvalidItem { item } => Error::InvalidUnitItem {
                kind,
                name: name.to_string(),
                heading: heading.to_string(),
                item,
            },
            other => other,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
