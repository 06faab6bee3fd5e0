//! MARC record structures.
//!
//! This module provides the record types a [`Bib`](crate::Bib) wraps:
//! - [`Record`] — a parsed MARC bibliographic record
//! - [`Field`] — variable data fields (010+)
//! - [`Subfield`] — coded data elements within fields
//!
//! Records are normally produced by a MARC parser upstream; the builders here
//! exist so callers and tests can assemble one by hand.
//!
//! ```ignore
//! use bibrec::{Field, Leader, Record};
//!
//! let record = Record::builder(Leader::default())
//!     .control_field_str("001", "12345")
//!     .field(
//!         Field::builder("245", '1', '0')
//!             .subfield_str('a', "Tsurezuregusa")
//!             .build(),
//!     )
//!     .build();
//! ```

use crate::leader::Leader;
use crate::marc_source::MarcSource;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A MARC bibliographic record
///
/// Data fields are kept in record order, the order a cataloger entered them,
/// even when tags interleave (650, 651, 650). Lookups by tag scan that list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Record leader (24 characters)
    pub leader: Leader,
    /// Control fields (001-009) - tag -> value
    pub control_fields: IndexMap<String, String>,
    /// Data fields (010+) in record order
    pub fields: Vec<Field>,
}

/// A data field in a MARC record (fields 010 and higher)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field tag (3 digits)
    pub tag: String,
    /// First indicator
    pub indicator1: char,
    /// Second indicator
    pub indicator2: char,
    /// Subfields (most fields carry four or fewer)
    pub subfields: SmallVec<[Subfield; 4]>,
}

/// A subfield within a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subfield {
    /// Subfield code (single character)
    pub code: char,
    /// Subfield value
    pub value: String,
}

impl Record {
    /// Create a new, empty MARC record with the given leader
    #[must_use]
    pub fn new(leader: Leader) -> Self {
        Record {
            leader,
            control_fields: IndexMap::new(),
            fields: Vec::new(),
        }
    }

    /// Create a builder for fluently constructing MARC records
    #[must_use]
    pub fn builder(leader: Leader) -> RecordBuilder {
        RecordBuilder {
            record: Record::new(leader),
        }
    }

    /// Add or replace a control field (001-009)
    pub fn add_control_field(&mut self, tag: impl Into<String>, value: impl Into<String>) {
        self.control_fields.insert(tag.into(), value.into());
    }

    /// Get a control field value
    #[must_use]
    pub fn get_control_field(&self, tag: &str) -> Option<&str> {
        self.control_fields.get(tag).map(String::as_str)
    }

    /// Append a data field
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Iterate over all data fields in record order
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }
}

impl MarcSource for Record {
    fn get_field(&self, tag: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.tag == tag)
    }

    fn get_fields(&self, tags: &[&str]) -> Vec<&Field> {
        self.fields
            .iter()
            .filter(|f| tags.iter().any(|t| *t == f.tag))
            .collect()
    }

    fn to_marcjson(&self) -> serde_json::Value {
        crate::marcjson::record_to_marcjson(self)
    }
}

/// Builder for fluently constructing MARC records
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Add a control field
    #[must_use]
    pub fn control_field_str(mut self, tag: &str, value: &str) -> Self {
        self.record.add_control_field(tag, value);
        self
    }

    /// Add a data field
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.record.add_field(field);
        self
    }

    /// Build the record
    #[must_use]
    pub fn build(self) -> Record {
        self.record
    }
}

impl Field {
    /// Create a new data field with no subfields
    #[must_use]
    pub fn new(tag: impl Into<String>, indicator1: char, indicator2: char) -> Self {
        Field {
            tag: tag.into(),
            indicator1,
            indicator2,
            subfields: SmallVec::new(),
        }
    }

    /// Create a builder for constructing fields fluently
    ///
    /// # Examples
    ///
    /// ```
    /// use bibrec::Field;
    ///
    /// let field = Field::builder("260", ' ', ' ')
    ///     .subfield_str('a', "Tokyo :")
    ///     .subfield_str('b', "Iwanami Shoten,")
    ///     .build();
    /// assert_eq!(field.get_subfield('b'), Some("Iwanami Shoten,"));
    /// ```
    #[must_use]
    pub fn builder(tag: impl Into<String>, indicator1: char, indicator2: char) -> FieldBuilder {
        FieldBuilder {
            field: Field::new(tag, indicator1, indicator2),
        }
    }

    /// Add a subfield
    pub fn add_subfield(&mut self, code: char, value: String) {
        self.subfields.push(Subfield { code, value });
    }

    /// Add a subfield using a string slice
    pub fn add_subfield_str(&mut self, code: char, value: &str) {
        self.add_subfield(code, value.to_string());
    }

    /// Get first value for a subfield code
    #[must_use]
    pub fn get_subfield(&self, code: char) -> Option<&str> {
        self.subfields
            .iter()
            .find(|sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }

    /// Get all subfield values matching any of the given codes
    ///
    /// Values come back in the order they appear in the field.
    #[must_use]
    pub fn get_subfields(&self, codes: &[char]) -> Vec<&str> {
        self.subfields
            .iter()
            .filter(|sf| codes.contains(&sf.code))
            .map(|sf| sf.value.as_str())
            .collect()
    }

    /// Concatenate all subfield values with spaces
    #[must_use]
    pub fn value(&self) -> String {
        self.subfields
            .iter()
            .map(|sf| sf.value.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render the field for display
    ///
    /// Subfield values are joined with spaces, the linkage subfield (6) is
    /// skipped, and subject subdivisions (v, x, y, z in 6XX fields) are
    /// introduced with " -- ".
    #[must_use]
    pub fn format_field(&self) -> String {
        let is_subject = self.tag.starts_with('6');
        let mut out = String::new();

        for subfield in &self.subfields {
            if subfield.code == '6' {
                continue;
            }
            if is_subject && matches!(subfield.code, 'v' | 'x' | 'y' | 'z') {
                out.push_str(" -- ");
            } else {
                out.push(' ');
            }
            out.push_str(&subfield.value);
        }

        out.trim().to_string()
    }
}

/// Builder for fluently constructing MARC fields
#[derive(Debug)]
pub struct FieldBuilder {
    field: Field,
}

impl FieldBuilder {
    /// Add a subfield using a string slice
    #[must_use]
    pub fn subfield_str(mut self, code: char, value: &str) -> Self {
        self.field.add_subfield_str(code, value);
        self
    }

    /// Build the field
    #[must_use]
    pub fn build(self) -> Field {
        self.field
    }
}
