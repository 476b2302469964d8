//! # Units
//!
//! A unit is a named, kind-tagged YAML document that contributes sections of
//! content to a composition. This module defines the unit kinds, the parsed
//! (not yet trusted) [`UnitDocument`], and the validator that turns a document
//! into a [`Unit`] once its declared kind and name agree with the request.
//!
//! ```yaml
//! kind: target
//! name: node
//! sections:
//!   Rules:
//!     - use the lockfile
//!     - text: use npm
//!       exclude_when: { packs: [bun] }
//! ```

use clap::ValueEnum;
use serde::Serialize;
use serde_yaml::Value;
use std::fmt;

use crate::error::{Error, Result};

/// The three kinds of unit a composition draws from.
///
/// Also accepted on the command line (`ls --kind pack`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Profile,
    Target,
    Pack,
}

impl UnitKind {
    /// All kinds, in merge order.
    pub const ALL: [UnitKind; 3] = [UnitKind::Profile, UnitKind::Target, UnitKind::Pack];

    /// The identifier used in unit documents (`kind: profile`).
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKind::Profile => "profile",
            UnitKind::Target => "target",
            UnitKind::Pack => "pack",
        }
    }

    /// The directory holding units of this kind inside a library root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            UnitKind::Profile => "profiles",
            UnitKind::Target => "targets",
            UnitKind::Pack => "packs",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One heading of a unit together with its raw, unnormalized items.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    pub items: Vec<Value>,
}

/// A unit document as read from a store, before validation.
///
/// `kind` is kept as the raw declared string so that a document declaring an
/// unknown kind is reported as a kind mismatch rather than a parse error.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDocument {
    pub kind: Option<String>,
    pub name: Option<String>,
    pub sections: Vec<Section>,
}

impl UnitDocument {
    /// Parse a unit document from YAML text.
    ///
    /// `origin` names the document in error messages (usually its path).
    pub fn parse(content: &str, origin: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(content)?;
        Self::from_value(value, origin)
    }

    /// Build a unit document from an already parsed YAML value.
    pub fn from_value(value: Value, origin: &str) -> Result<Self> {
        let Value::Mapping(mut map) = value else {
            return Err(Error::ConfigParse {
                message: format!("Unit document {} must be a YAML mapping", origin),
                hint: Some("Start the file with 'kind:', 'name:' and 'sections:'".to_string()),
            });
        };

        let kind = scalar_field(map.remove("kind"), "kind", origin)?;
        let name = scalar_field(map.remove("name"), "name", origin)?;

        let sections = match map.remove("sections") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Mapping(sections)) => {
                let mut parsed = Vec::with_capacity(sections.len());
                for (heading, items) in sections {
                    let heading = match heading {
                        Value::String(heading) => heading,
                        other => {
                            return Err(Error::ConfigParse {
                                message: format!(
                                    "Section heading {:?} in {} is not a string",
                                    other, origin
                                ),
                                hint: None,
                            })
                        }
                    };
                    let items = match items {
                        Value::Null => Vec::new(),
                        Value::Sequence(items) => items,
                        _ => {
                            return Err(Error::ConfigParse {
                                message: format!(
                                    "Section '{}' in {} must be a list of items",
                                    heading, origin
                                ),
                                hint: None,
                            })
                        }
                    };
                    parsed.push(Section { heading, items });
                }
                parsed
            }
            Some(_) => {
                return Err(Error::ConfigParse {
                    message: format!("'sections' in {} must be a mapping of headings", origin),
                    hint: None,
                })
            }
        };

        Ok(Self {
            kind,
            name,
            sections,
        })
    }
}

fn scalar_field(value: Option<Value>, field: &str, origin: &str) -> Result<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(Error::ConfigParse {
            message: format!("'{}' in {} must be a string, got {:?}", field, origin, other),
            hint: None,
        }),
    }
}

/// A validated unit whose kind and name match the request that loaded it.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub kind: UnitKind,
    pub name: String,
    pub sections: Vec<Section>,
}

/// Check a loaded document against the kind and name it was requested by.
///
/// A document without a `name` is accepted under the requested name; a
/// document with a different `name` is rejected.
pub fn validate(requested_kind: UnitKind, requested_name: &str, doc: UnitDocument) -> Result<Unit> {
    if doc.kind.as_deref() != Some(requested_kind.as_str()) {
        return Err(Error::KindMismatch {
            requested: requested_kind,
            found: doc.kind.unwrap_or_else(|| "(none)".to_string()),
            name: requested_name.to_string(),
        });
    }

    if let Some(found) = doc.name {
        if found != requested_name {
            return Err(Error::NameMismatch {
                kind: requested_kind,
                requested: requested_name.to_string(),
                found,
            });
        }
    }

    Ok(Unit {
        kind: requested_kind,
        name: requested_name.to_string(),
        sections: doc.sections,
    })
}
