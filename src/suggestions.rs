//! # Error Suggestions
//!
//! Helpers that turn library errors into CLI errors carrying `hint:` lines.
//! An error should say what went wrong and how to fix it.
//!
//! ```rust,ignore
//! use mdcompose::suggestions;
//!
//! return Err(suggestions::unit_not_found(kind, name, &available, root));
//! ```

use std::path::Path;

use crate::defaults::{ROOT_ENV, TEMPLATE_ENV};
use crate::error::Error;
use crate::store::UnitStore;
use crate::unit::UnitKind;

/// Generate an error for when the composition request file is not found.
pub fn request_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Composition request not found: {path}\n\n\
         hint: Pass the request file as the first argument\n\
         hint: Or select units directly with --profile, --target and --pack",
        path = path.display()
    )
}

/// Generate an error for a request without a profile.
pub fn missing_profile() -> anyhow::Error {
    anyhow::anyhow!(
        "Composition request is missing 'profile'\n\n\
         hint: Add 'profile: <name>' to the request file\n\
         hint: Or pass --profile <name>"
    )
}

/// Generate an error for a unit the store does not have.
///
/// Lists the units of that kind that do exist, if any.
pub fn unit_not_found(kind: UnitKind, name: &str, available: &[String], root: &Path) -> anyhow::Error {
    let listing = if available.is_empty() {
        format!(
            "hint: No {} units found in {}",
            kind,
            root.join(kind.dir_name()).display()
        )
    } else {
        format!("hint: Available {}s: {}", kind, available.join(", "))
    };

    anyhow::anyhow!(
        "Unit not found: {kind} '{name}'\n\n\
         {listing}\n\
         hint: Use --root or {ROOT_ENV} to point at your unit library"
    )
}

/// Generate an error for a missing template file.
pub fn template_not_found(path: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Template not found: {path}\n\n\
         hint: Create the template, or pass --template <FILE>\n\
         hint: {TEMPLATE_ENV} also selects the template"
    )
}

/// Convert a library error into a CLI error, adding hints where one helps.
///
/// `store` and `root` are used to list alternatives for a missing unit.
pub fn explain<S: UnitStore + ?Sized>(error: Error, store: &S, root: &Path) -> anyhow::Error {
    match error {
        Error::NotFound { kind, name } => {
            let available = store.list(kind).unwrap_or_default();
            unit_not_found(kind, &name, &available, root)
        }
        Error::MissingProfile => missing_profile(),
        Error::TemplateNotFound { path } => template_not_found(&path),
        Error::KindMismatch { .. } | Error::NameMismatch { .. } => anyhow::anyhow!(
            "{error}\n\n\
             hint: The 'kind' and 'name' in a unit file must match the directory and file name"
        ),
        other => anyhow::Error::new(other),
    }
}
