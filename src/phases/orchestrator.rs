//! Orchestrator for a complete composition
//!
//! Runs the phases in order for one request:
//! 1. Resolve the request into an active configuration
//! 2. Load and validate the units it selects
//! 3. Merge their sections
//! 4. Render the outline
//! 5. Substitute everything into the template
//!
//! Every call starts from scratch; nothing is cached between compositions.

use log::debug;

use super::load::{self, LoadOptions};
use crate::config::{ActiveConfig, CompositionRequest};
use crate::error::Result;
use crate::merge::{merge_sections, MergedSections};
use crate::outline::render_outline;
use crate::store::UnitStore;
use crate::template::render_template;

/// The result of composing one request.
#[derive(Debug, Clone)]
pub struct Composition {
    pub active: ActiveConfig,
    pub sections: MergedSections,
    pub outline: String,
    pub document: String,
}

/// Resolve, load and merge, stopping before any rendering.
pub fn merge_request<S: UnitStore + ?Sized>(
    request: &CompositionRequest,
    store: &S,
    options: LoadOptions,
) -> Result<(ActiveConfig, MergedSections)> {
    let active = request.resolve()?;
    let units = load::execute(store, &active, options)?;
    let sections = merge_sections(&units, &active)?;
    debug!(
        "Merged {} section(s), {} item(s) from {} unit(s)",
        sections.len(),
        sections.node_count(),
        units.len()
    );
    Ok((active, sections))
}

/// Compose `request` into a finished document using `template`.
pub fn compose<S: UnitStore + ?Sized>(
    request: &CompositionRequest,
    store: &S,
    template: &str,
    options: LoadOptions,
) -> Result<Composition> {
    let (active, sections) = merge_request(request, store, options)?;
    let outline = render_outline(&sections);
    let document = render_template(
        template,
        &active.profile,
        &active.targets,
        &active.packs,
        &outline,
    );
    Ok(Composition {
        active,
        sections,
        outline,
        document,
    })
}
