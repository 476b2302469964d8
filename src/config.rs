//! # Composition Requests
//!
//! A composition request names the units to compose: exactly one profile, and
//! any number of targets and packs in the order they should be layered.
//!
//! ```yaml
//! profile: default
//! targets: [node, docker]
//! packs: [bun]
//! ```
//!
//! [`parse`] and [`from_file`] read a request from YAML. The CLI can also build
//! one from flags and use [`CompositionRequest::with_overrides`] to layer flags
//! over a file. [`CompositionRequest::resolve`] checks the request and produces
//! the [`ActiveConfig`] that conditions are evaluated against.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// A composition request as written by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompositionRequest {
    /// The profile unit. Required, but optional here so that a missing
    /// profile is reported as [`Error::MissingProfile`].
    #[serde(default)]
    pub profile: Option<String>,
    /// Target units, in layering order.
    #[serde(default)]
    pub targets: Vec<String>,
    /// Pack units, in layering order.
    #[serde(default)]
    pub packs: Vec<String>,
}

/// The resolved configuration that item conditions are evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveConfig {
    pub profile: String,
    pub targets: Vec<String>,
    pub packs: Vec<String>,
}

impl ActiveConfig {
    /// Number of units this configuration selects.
    pub fn unit_count(&self) -> usize {
        1 + self.targets.len() + self.packs.len()
    }
}

impl CompositionRequest {
    /// Replace fields with command-line values where they were given.
    ///
    /// `profile` replaces the file's profile; a non-empty `targets` or `packs`
    /// list replaces the file's list rather than extending it.
    pub fn with_overrides(
        mut self,
        profile: Option<String>,
        targets: Vec<String>,
        packs: Vec<String>,
    ) -> Self {
        if profile.is_some() {
            self.profile = profile;
        }
        if !targets.is_empty() {
            self.targets = targets;
        }
        if !packs.is_empty() {
            self.packs = packs;
        }
        self
    }

    /// Check the request and produce the active configuration.
    ///
    /// Names are used exactly as written. A blank profile counts as missing.
    pub fn resolve(&self) -> Result<ActiveConfig> {
        let profile = match self.profile.as_deref() {
            Some(p) if !p.trim().is_empty() => p.to_string(),
            _ => return Err(Error::MissingProfile),
        };

        for name in self.targets.iter().chain(&self.packs) {
            if name.trim().is_empty() {
                return Err(Error::ConfigParse {
                    message: "Target and pack names must not be empty".to_string(),
                    hint: None,
                });
            }
        }

        Ok(ActiveConfig {
            profile,
            targets: self.targets.clone(),
            packs: self.packs.clone(),
        })
    }
}

/// Parse a composition request from YAML.
pub fn parse(yaml_content: &str) -> Result<CompositionRequest> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml_content)?;
    if value.is_null() {
        // An empty file is a request with nothing in it.
        return Ok(CompositionRequest::default());
    }
    serde_yaml::from_value(value).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: Some("A composition request has 'profile', 'targets' and 'packs' keys".to_string()),
    })
}

/// Read and parse a composition request file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<CompositionRequest> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}
