//! Load phase: resolve every unit a composition needs.
//!
//! The request is expanded into a load plan (the profile, then each target,
//! then each pack, in request order). Each entry is fetched from the store
//! and checked with [`validate`]. Loads may run in parallel, but the result
//! always comes back in plan order, and if several loads fail the error
//! reported is the one earliest in the plan.

use log::debug;
use rayon::prelude::*;

use crate::config::ActiveConfig;
use crate::error::Result;
use crate::store::UnitStore;
use crate::unit::{validate, Unit, UnitKind};

/// How units are fetched from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Fetch units concurrently.
    pub parallel: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl LoadOptions {
    pub fn sequential() -> Self {
        Self { parallel: false }
    }
}

/// The units to load for `active`, in merge order.
pub fn plan(active: &ActiveConfig) -> Vec<(UnitKind, &str)> {
    std::iter::once((UnitKind::Profile, active.profile.as_str()))
        .chain(active.targets.iter().map(|t| (UnitKind::Target, t.as_str())))
        .chain(active.packs.iter().map(|p| (UnitKind::Pack, p.as_str())))
        .collect()
}

/// Load and validate a single unit.
pub fn load_unit<S: UnitStore + ?Sized>(store: &S, kind: UnitKind, name: &str) -> Result<Unit> {
    let doc = store.load(kind, name)?;
    validate(kind, name, doc)
}

/// Load every unit selected by `active`, in merge order.
pub fn execute<S: UnitStore + ?Sized>(
    store: &S,
    active: &ActiveConfig,
    options: LoadOptions,
) -> Result<Vec<Unit>> {
    let plan = plan(active);
    debug!(
        "Loading {} unit(s) ({})",
        plan.len(),
        if options.parallel { "parallel" } else { "sequential" }
    );

    if !options.parallel {
        return plan
            .into_iter()
            .map(|(kind, name)| load_unit(store, kind, name))
            .collect();
    }

    // Collect every outcome first so the earliest failure in plan order wins.
    let outcomes: Vec<Result<Unit>> = plan
        .par_iter()
        .map(|&(kind, name)| load_unit(store, kind, name))
        .collect();
    outcomes.into_iter().collect()
}
