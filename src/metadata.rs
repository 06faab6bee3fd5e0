//! Flat catalog metadata with a fixed key template.
//!
//! A Bib that has no MARC record (or whose record lacks a value) answers from a
//! flat key/value mapping. Every [`Metadata`] holds at least the keys of
//! [`TEMPLATE`], each with a fixed [`Shape`]:
//!
//! | key | shape |
//! |-----|-------|
//! | `bibid`, `title`, `author`, `edition`, `publisher`, `pubplace`, `pubyear`, `langcode`, `libcode`, `formatcode`, `isbn`, `issn`, `oclc` | text |
//! | `addedentries`, `isbns`, `issns` | list of text |
//!
//! Input arrives as JSON. Text keys accept strings, integers (stored in
//! decimal form) or `null`; list keys accept arrays of strings or `null`.
//! `null` leaves the key at its empty default. Keys outside the template are
//! kept as text.

use crate::error::{BibError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether a metadata key holds one string or a list of strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A single string, empty when unset
    Text,
    /// An ordered list of strings, empty when unset
    List,
}

/// The keys every [`Metadata`] carries, in dump order.
pub const TEMPLATE: &[(&str, Shape)] = &[
    ("bibid", Shape::Text),
    ("title", Shape::Text),
    ("author", Shape::Text),
    ("addedentries", Shape::List),
    ("edition", Shape::Text),
    ("publisher", Shape::Text),
    ("pubplace", Shape::Text),
    ("pubyear", Shape::Text),
    ("langcode", Shape::Text),
    ("libcode", Shape::Text),
    ("formatcode", Shape::Text),
    ("isbn", Shape::Text),
    ("isbns", Shape::List),
    ("issn", Shape::Text),
    ("issns", Shape::List),
    ("oclc", Shape::Text),
];

/// The shape the template fixes for `key`, or `None` for keys outside it.
#[must_use]
pub fn template_shape(key: &str) -> Option<Shape> {
    TEMPLATE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, shape)| *shape)
}

/// A metadata value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    /// Single string
    Text(String),
    /// List of strings
    List(Vec<String>),
}

impl MetaValue {
    fn empty(shape: Shape) -> Self {
        match shape {
            Shape::Text => MetaValue::Text(String::new()),
            Shape::List => MetaValue::List(Vec::new()),
        }
    }

    /// The string, or `None` for a list.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetaValue::Text(s) => Some(s),
            MetaValue::List(_) => None,
        }
    }

    /// The list, or `None` for a string.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            MetaValue::Text(_) => None,
            MetaValue::List(l) => Some(l),
        }
    }
}

/// Ordered metadata mapping that always contains every template key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Metadata {
    values: IndexMap<String, MetaValue>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self::template()
    }
}

impl Metadata {
    /// Every template key with its empty default.
    #[must_use]
    pub fn template() -> Self {
        Metadata {
            values: TEMPLATE
                .iter()
                .map(|(key, shape)| ((*key).to_string(), MetaValue::empty(*shape)))
                .collect(),
        }
    }

    /// Validate a JSON object and lay it over a fresh template.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::TypeValidation`] if `input` is not an object or any
    /// value has the wrong shape for its key. Nothing is built on failure.
    pub fn from_json(input: &Value) -> Result<Self> {
        let object = input.as_object().ok_or_else(|| {
            BibError::type_validation("metadata", format!("expected an object, got {input}"))
        })?;

        let mut overlay = Vec::with_capacity(object.len());
        for (key, value) in object {
            if let Some(converted) = convert(key, value)? {
                overlay.push((key.clone(), converted));
            }
        }

        let mut metadata = Self::template();
        metadata.values.extend(overlay);
        Ok(metadata)
    }

    /// Value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.values.get(key)
    }

    /// Text stored under `key`; empty for missing keys and list values.
    #[must_use]
    pub fn text(&self, key: &str) -> &str {
        self.values
            .get(key)
            .and_then(MetaValue::as_text)
            .unwrap_or("")
    }

    /// List stored under `key`; empty for missing keys and text values.
    #[must_use]
    pub fn list(&self, key: &str) -> &[String] {
        self.values
            .get(key)
            .and_then(MetaValue::as_list)
            .unwrap_or(&[])
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Keys in order: template keys first, then extra keys as supplied.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetaValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of keys, template keys included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: the template keys are never removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Check one input value against its key's shape. `Ok(None)` means "leave the default".
fn convert(key: &str, value: &Value) -> Result<Option<MetaValue>> {
    match (template_shape(key), value) {
        (_, Value::Null) => Ok(None),
        (Some(Shape::List), Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    BibError::type_validation(key, format!("list items must be strings, got {item}"))
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(|list| Some(MetaValue::List(list))),
        (Some(Shape::List), other) => Err(BibError::type_validation(
            key,
            format!("must be a list, got {other}"),
        )),
        (_, Value::String(s)) => Ok(Some(MetaValue::Text(s.clone()))),
        (_, Value::Number(n)) if n.is_i64() || n.is_u64() => {
            Ok(Some(MetaValue::Text(n.to_string())))
        }
        (_, other) => Err(BibError::type_validation(
            key,
            format!("must be a string, integer or null, got {other}"),
        )),
    }
}
