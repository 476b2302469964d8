//! # Item Normalization
//!
//! Section items are authored in three shapes:
//!
//! ```yaml
//! Rules:
//!   - plain text
//!   - text: detailed item
//!     when: { profiles: [ci] }
//!     exclude_when: { packs: [bun] }
//!     items:
//!       - nested child
//!   - Setup:
//!       - step 1
//!       - step 2
//! ```
//!
//! [`RawItem::classify`] resolves a YAML value to exactly one of these shapes,
//! and [`normalize`] turns it into the canonical [`Node`] tree every later
//! stage works on. Nothing downstream of this module looks at raw YAML.

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};

/// An inclusion or exclusion condition attached to an item.
///
/// Each axis is a set of names. An axis that is absent or empty is not
/// populated and places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Condition {
    #[serde(default, deserialize_with = "one_or_many")]
    pub profiles: Option<Vec<String>>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub targets: Option<Vec<String>>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub packs: Option<Vec<String>>,
}

/// Accept either `profiles: ci` or `profiles: [ci, release]`.
fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(
        Option::<OneOrMany>::deserialize(deserializer)?.map(|v| match v {
            OneOrMany::One(name) => vec![name],
            OneOrMany::Many(names) => names,
        }),
    )
}

/// A normalized content item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub text: String,
    pub when: Option<Condition>,
    pub exclude_when: Option<Condition>,
    pub children: Vec<Node>,
}

impl Node {
    /// A node with no conditions and no children.
    pub fn leaf(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            when: None,
            exclude_when: None,
            children: Vec::new(),
        }
    }
}

/// The shape an authored item was written in.
#[derive(Debug, Clone, PartialEq)]
pub enum RawItem<'a> {
    /// `- some text`
    Text(String),
    /// `- text: ...` with optional conditions and nested items
    Detailed(&'a Mapping),
    /// `- Heading: [children...]`
    Nested { text: &'a str, items: &'a [Value] },
}

impl<'a> RawItem<'a> {
    /// Resolve which shape a YAML value is. The first matching shape wins.
    pub fn classify(value: &'a Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(RawItem::Text(text.clone())),
            Value::Mapping(map) if map.contains_key("text") => Ok(RawItem::Detailed(map)),
            Value::Mapping(map) if map.len() == 1 => match map.iter().next() {
                Some((Value::String(text), Value::Sequence(items))) => Ok(RawItem::Nested {
                    text: text.as_str(),
                    items: items.as_slice(),
                }),
                _ => Err(invalid(value)),
            },
            _ => Err(invalid(value)),
        }
    }
}

/// Normalize one authored item, recursively.
pub fn normalize(value: &Value) -> Result<Node> {
    match RawItem::classify(value)? {
        RawItem::Text(text) => Ok(Node::leaf(text)),
        RawItem::Detailed(map) => {
            let text = match map.get("text") {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                Some(Value::Bool(b)) => b.to_string(),
                _ => return Err(invalid(value)),
            };
            let when = condition(map.get("when"), value)?;
            let exclude_when = condition(map.get("exclude_when"), value)?;
            let children = match child_list(map.get("items")).or_else(|| child_list(map.get("subitems")))
            {
                None => Vec::new(),
                Some(Value::Sequence(items)) => normalize_all(items)?,
                Some(_) => return Err(invalid(value)),
            };
            Ok(Node {
                text,
                when,
                exclude_when,
                children,
            })
        }
        RawItem::Nested { text, items } => Ok(Node {
            text: text.to_string(),
            when: None,
            exclude_when: None,
            children: normalize_all(items)?,
        }),
    }
}

/// Normalize a list of items, preserving order.
pub fn normalize_all(items: &[Value]) -> Result<Vec<Node>> {
    items.iter().map(normalize).collect()
}

fn non_null(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// A children field counts only when it is non-null and not an empty list.
fn child_list(value: Option<&Value>) -> Option<&Value> {
    non_null(value).filter(|v| v.as_sequence().is_none_or(|items| !items.is_empty()))
}

fn condition(value: Option<&Value>, item: &Value) -> Result<Option<Condition>> {
    match non_null(value) {
        None => Ok(None),
        Some(v) => serde_yaml::from_value(v.clone())
            .map(Some)
            .map_err(|e| Error::InvalidItem {
                item: format!("{} ({})", describe(item), e),
            }),
    }
}

fn invalid(value: &Value) -> Error {
    Error::InvalidItem {
        item: describe(value),
    }
}

/// Render a raw item compactly for error messages.
fn describe(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{:?}", value))
}
