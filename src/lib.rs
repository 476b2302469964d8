//! # mdcompose
//!
//! This library composes a single Markdown document from reusable YAML
//! fragments called *units*. It is designed to be used by the `mdcompose`
//! command-line tool, but the composition engine has no filesystem
//! dependency and can be embedded directly.
//!
//! ## Quick Example
//!
//! ```
//! use mdcompose::config::CompositionRequest;
//! use mdcompose::phases::{compose, LoadOptions};
//! use mdcompose::store::MemoryStore;
//! use mdcompose::unit::UnitKind;
//!
//! let store = MemoryStore::new()
//!     .with(UnitKind::Profile, "default", r#"
//! kind: profile
//! name: default
//! sections:
//!   Rules:
//!     - always
//!     - text: ci-only
//!       when: { profiles: [ci] }
//! "#)
//!     .with(UnitKind::Target, "node", r#"
//! kind: target
//! name: node
//! sections:
//!   Rules:
//!     - always
//!     - Setup: [npm ci, npm test]
//! "#);
//!
//! let request = CompositionRequest {
//!     profile: Some("default".to_string()),
//!     targets: vec!["node".to_string()],
//!     packs: vec![],
//! };
//!
//! let composition = compose(&request, &store, "{{ sections }}", LoadOptions::default()).unwrap();
//! assert_eq!(
//!     composition.document,
//!     "## Rules\n- always\n- Setup\n  - npm ci\n  - npm test\n"
//! );
//! ```
//!
//! ## Core Concepts
//!
//! - **Units (`unit`)**: Profile, target and pack documents, and the validator
//!   that checks a loaded document declares the kind and name it was
//!   requested by.
//! - **Nodes (`node`)**: The canonical tree form every authored item is
//!   normalized into.
//! - **Conditions (`condition`)**: `when` / `exclude_when` evaluation against
//!   the active profile, targets and packs.
//! - **Merging (`merge`)**: Cross-unit section merging with first-seen
//!   ordering and structural deduplication.
//! - **Rendering (`outline`, `template`)**: The nested bullet outline and the
//!   placeholder substitution that produces the final document.
//! - **Stores (`store`)**: Where units come from, on disk or in memory.
//!
//! ## Execution Flow
//!
//! `phases::compose` resolves the request (`config`), loads and validates
//! every unit (`phases::load`), merges their sections, renders the outline
//! and fills in the template.

pub mod condition;
pub mod config;
pub mod defaults;
pub mod error;
pub mod merge;
pub mod node;
pub mod outline;
pub mod output;
pub mod phases;
pub mod store;
pub mod suggestions;
pub mod template;
pub mod unit;

#[cfg(test)]
mod merge_proptest;
