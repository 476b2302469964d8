//! Whole-library audit.
//!
//! Checks every unit a store knows about, independent of any composition:
//! each unit must load, declare the kind and name it is stored under, and
//! every item in every section must normalize. Unlike composition, an audit
//! does not stop at the first problem; it reports one result per unit.

use log::debug;

use super::load::load_unit;
use crate::error::{Error, Result};
use crate::node::normalize;
use crate::store::UnitStore;
use crate::unit::UnitKind;

/// Audit outcome for one unit.
#[derive(Debug)]
pub struct UnitAudit {
    pub kind: UnitKind,
    pub name: String,
    /// Number of authored items checked, when the unit loaded.
    pub items: usize,
    pub error: Option<Error>,
}

impl UnitAudit {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

fn audit_unit<S: UnitStore + ?Sized>(store: &S, kind: UnitKind, name: &str) -> UnitAudit {
    let mut audit = UnitAudit {
        kind,
        name: name.to_string(),
        items: 0,
        error: None,
    };

    let unit = match load_unit(store, kind, name) {
        Ok(unit) => unit,
        Err(e) => {
            audit.error = Some(e);
            return audit;
        }
    };

    for section in &unit.sections {
        for raw in &section.items {
            audit.items += 1;
            if let Err(e) = normalize(raw) {
                audit.error = Some(e.in_section(kind, name, &section.heading));
                return audit;
            }
        }
    }
    audit
}

/// Audit every unit of every kind in `store`.
///
/// Only listing failures are returned as `Err`; problems with individual
/// units are reported in their [`UnitAudit`].
pub fn audit<S: UnitStore + ?Sized>(store: &S) -> Result<Vec<UnitAudit>> {
    let mut audits = Vec::new();
    for kind in UnitKind::ALL {
        for name in store.list(kind)? {
            audits.push(audit_unit(store, kind, &name));
        }
    }
    debug!(
        "Audited {} unit(s), {} with errors",
        audits.len(),
        audits.iter().filter(|a| !a.is_ok()).count()
    );
    Ok(audits)
}
