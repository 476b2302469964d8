//! # Condition Evaluation
//!
//! Decides whether a normalized [`Node`] takes part in a composition.
//!
//! - `when` is a conjunction: every populated axis must be satisfied, and a
//!   populated `targets` or `packs` axis needs *all* of its names active.
//! - `exclude_when` is a disjunction: the first populated axis with an active
//!   name excludes the node. Axes are checked profiles, targets, packs.
//!
//! A node is included iff `when` holds and `exclude_when` does not. Only the
//! node itself is evaluated here; its children are not consulted.

use crate::config::ActiveConfig;
use crate::node::{Condition, Node};

/// Names on one axis, or `None` if the axis is not populated.
fn populated(axis: &Option<Vec<String>>) -> Option<&[String]> {
    axis.as_deref().filter(|names| !names.is_empty())
}

impl Condition {
    /// The inclusion test for a `when` condition.
    pub fn matches(&self, active: &ActiveConfig) -> bool {
        if let Some(profiles) = populated(&self.profiles) {
            if !profiles.contains(&active.profile) {
                return false;
            }
        }
        if let Some(targets) = populated(&self.targets) {
            if !targets.iter().all(|t| active.targets.contains(t)) {
                return false;
            }
        }
        if let Some(packs) = populated(&self.packs) {
            if !packs.iter().all(|p| active.packs.contains(p)) {
                return false;
            }
        }
        true
    }

    /// The exclusion test for an `exclude_when` condition.
    pub fn excludes(&self, active: &ActiveConfig) -> bool {
        if let Some(profiles) = populated(&self.profiles) {
            if profiles.contains(&active.profile) {
                return true;
            }
        }
        if let Some(targets) = populated(&self.targets) {
            if targets.iter().any(|t| active.targets.contains(t)) {
                return true;
            }
        }
        if let Some(packs) = populated(&self.packs) {
            if packs.iter().any(|p| active.packs.contains(p)) {
                return true;
            }
        }
        false
    }
}

/// Whether `node` is included under the active configuration.
pub fn included(node: &Node, active: &ActiveConfig) -> bool {
    let wanted = node.when.as_ref().is_none_or(|c| c.matches(active));
    wanted && !node.exclude_when.as_ref().is_some_and(|c| c.excludes(active))
}
