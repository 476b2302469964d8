//! The phases of a composition.
//!
//! ## Overview
//!
//! A composition runs in three phases:
//! 1. Load - Resolve the profile, target and pack units from a store and
//!    validate them (`load`)
//! 2. Merge - Normalize, filter and deduplicate section items across units
//!    (`crate::merge`)
//! 3. Render - Produce the outline and substitute it into the template
//!    (`crate::outline`, `crate::template`)
//!
//! `orchestrator` chains the phases for a single request. `library` audits a
//! whole unit library without composing anything.

pub mod library;
pub mod load;
pub mod orchestrator;

pub use library::{audit, UnitAudit};
pub use load::LoadOptions;
pub use orchestrator::{compose, merge_request, Composition};
