//! # Section Merging
//!
//! Combines the sections of every unit in a composition into one ordered
//! [`MergedSections`] map.
//!
//! ## Ordering
//!
//! Units are visited in the order they are given (profile, then targets, then
//! packs, each in request order). Within a unit, sections and items are
//! visited in authored order. The first unit to mention a heading fixes that
//! heading's position, and items keep first-seen order. Nothing is sorted.
//!
//! ## Filtering and deduplication
//!
//! Each authored item is normalized and its root node is tested against the
//! active configuration. Children are carried along as they are; their own
//! conditions are not evaluated here. A surviving node is dropped if an
//! identical subtree was already added under the same heading (see
//! [`DedupKey`]); filtered nodes never enter the seen set.

pub mod dedup;

use std::collections::{HashMap, HashSet};

use crate::condition::included;
use crate::config::ActiveConfig;
use crate::error::Result;
use crate::node::{normalize, Node};
use crate::unit::Unit;

pub use dedup::{DedupKey, NodeShape};

/// One heading and its merged nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedSection {
    pub heading: String,
    pub nodes: Vec<Node>,
}

/// Counts gathered while merging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Authored items seen across all units.
    pub items: usize,
    /// Items dropped by their `when` / `exclude_when` conditions.
    pub filtered: usize,
    /// Items dropped as duplicates of an earlier item.
    pub duplicates: usize,
}

/// An insertion-ordered map from heading to merged nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedSections {
    sections: Vec<MergedSection>,
    index: HashMap<String, usize>,
    stats: MergeStats,
}

impl MergedSections {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bucket for `heading`, created at the end if it does not exist yet.
    fn bucket(&mut self, heading: &str) -> &mut Vec<Node> {
        let idx = match self.index.get(heading) {
            Some(&idx) => idx,
            None => {
                self.sections.push(MergedSection {
                    heading: heading.to_string(),
                    nodes: Vec::new(),
                });
                let idx = self.sections.len() - 1;
                self.index.insert(heading.to_string(), idx);
                idx
            }
        };
        &mut self.sections[idx].nodes
    }

    /// Nodes merged under `heading`, if the heading was seen.
    pub fn get(&self, heading: &str) -> Option<&[Node]> {
        self.index
            .get(heading)
            .map(|&idx| self.sections[idx].nodes.as_slice())
    }

    /// Headings in first-seen order.
    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.heading.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &MergedSection> {
        self.sections.iter()
    }

    /// Number of headings.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of top-level nodes across all headings.
    pub fn node_count(&self) -> usize {
        self.sections.iter().map(|s| s.nodes.len()).sum()
    }

    pub fn stats(&self) -> MergeStats {
        self.stats
    }
}

/// Merge the sections of `units`, in order, under the active configuration.
///
/// Fails on the first item that cannot be normalized; no partial result is
/// returned.
pub fn merge_sections(units: &[Unit], active: &ActiveConfig) -> Result<MergedSections> {
    let mut merged = MergedSections::new();
    let mut seen: HashSet<DedupKey> = HashSet::new();

    for unit in units {
        for section in &unit.sections {
            merged.bucket(&section.heading);

            for raw in &section.items {
                merged.stats.items += 1;

                let node = normalize(raw)
                    .map_err(|e| e.in_section(unit.kind, &unit.name, &section.heading))?;

                if !included(&node, active) {
                    merged.stats.filtered += 1;
                    continue;
                }

                if !seen.insert(DedupKey::new(&section.heading, &node)) {
                    merged.stats.duplicates += 1;
                    continue;
                }

                merged.bucket(&section.heading).push(node);
            }
        }
    }

    Ok(merged)
}
