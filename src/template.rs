//! # Template Rendering
//!
//! The output document is produced by literal placeholder substitution into a
//! template. Only four tokens are recognised; everything else in the template,
//! including unknown `{{ ... }}` tokens, is copied through unchanged.
//!
//! | Token | Replaced with |
//! |---|---|
//! | `{{ profile }}` | the profile name |
//! | `{{ targets }}` | targets joined with `", "`, or `none` |
//! | `{{ packs }}` | packs joined with `", "`, or `none` |
//! | `{{ sections }}` | the rendered outline |

use std::path::Path;

use crate::error::{Error, Result};

pub const PROFILE_PLACEHOLDER: &str = "{{ profile }}";
pub const TARGETS_PLACEHOLDER: &str = "{{ targets }}";
pub const PACKS_PLACEHOLDER: &str = "{{ packs }}";
pub const SECTIONS_PLACEHOLDER: &str = "{{ sections }}";

const EMPTY_LIST: &str = "none";

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        EMPTY_LIST.to_string()
    } else {
        names.join(", ")
    }
}

/// Substitute the composition into `template`.
pub fn render_template(
    template: &str,
    profile: &str,
    targets: &[String],
    packs: &[String],
    outline: &str,
) -> String {
    template
        .replace(PROFILE_PLACEHOLDER, profile)
        .replace(TARGETS_PLACEHOLDER, &join_or_none(targets))
        .replace(PACKS_PLACEHOLDER, &join_or_none(packs))
        .replace(SECTIONS_PLACEHOLDER, outline)
}

/// Read a template file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::TemplateNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}
