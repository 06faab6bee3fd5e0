//! The record capability a [`Bib`](crate::Bib) reads from.
//!
//! [`MarcSource`] abstracts over whatever produced the MARC data: the crate's
//! own [`Record`](crate::Record), a wrapper around another parser, or a test
//! double. Implementors supply field lookup and a MARC-in-JSON dump; the
//! derived bibliographic accessors are default methods built on top of that
//! lookup.
//!
//! # Examples
//!
//! ```ignore
//! use bibrec::{MarcSource, Record};
//!
//! fn describe(source: &dyn MarcSource) -> String {
//!     format!(
//!         "{} / {}",
//!         source.author().unwrap_or_default(),
//!         source.publisher().unwrap_or_default()
//!     )
//! }
//! ```

use crate::record::Field;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

/// Tags of added-entry fields (7XX name and title entries).
pub const ADDED_ENTRY_TAGS: &[&str] = &[
    "700", "710", "711", "720", "730", "740", "752", "753", "754", "790", "791", "792", "793",
    "796", "797", "798", "799",
];

/// Tags of subject access fields (6XX).
pub const SUBJECT_TAGS: &[&str] = &[
    "600", "610", "611", "630", "648", "650", "651", "653", "654", "655", "656", "657", "658",
    "662", "690", "691", "692", "693", "694", "695", "696", "697", "698", "699",
];

lazy_static! {
    // ISBN token, optionally followed by whitespace and a qualifier
    static ref ISBN: Regex = Regex::new(r"^([0-9\-xX]+)(\s+.*)?$").expect("valid ISBN regex");
}

/// Read access to a MARC bibliographic record.
///
/// Only [`get_fields`](MarcSource::get_fields) and
/// [`to_marcjson`](MarcSource::to_marcjson) are required.
pub trait MarcSource: fmt::Debug + Send + Sync {
    /// Get every field whose tag is one of `tags`, in record order.
    fn get_fields(&self, tags: &[&str]) -> Vec<&Field>;

    /// Get the first field with a given tag.
    fn get_field(&self, tag: &str) -> Option<&Field> {
        self.get_fields(&[tag]).into_iter().next()
    }

    /// Dump the whole record as MARC-in-JSON.
    fn to_marcjson(&self) -> serde_json::Value;

    /// Main entry (100, 110 or 111, first present), formatted for display.
    #[must_use]
    fn author(&self) -> Option<String> {
        ["100", "110", "111"]
            .iter()
            .find_map(|tag| self.get_field(tag))
            .map(Field::format_field)
            .filter(|s| !s.is_empty())
    }

    /// Every added-entry field, in record order.
    #[must_use]
    fn addedentries(&self) -> Vec<&Field> {
        self.get_fields(ADDED_ENTRY_TAGS)
    }

    /// First ISBN from 020 $a, without hyphens.
    ///
    /// A qualifier separated by whitespace is dropped: `"0-13-110362-8 (pbk.)"`
    /// becomes `"0131103628"`. A subfield that does not start with an ISBN
    /// token, such as `"ISBN 0-13-110362-8"`, yields `None`.
    #[must_use]
    fn isbn(&self) -> Option<String> {
        let raw = self.get_field("020")?.get_subfield('a')?;
        let token = ISBN.captures(raw)?.get(1)?.as_str();
        Some(token.replace('-', "")).filter(|s| !s.is_empty())
    }

    /// First ISSN from 022 $a.
    #[must_use]
    fn issn(&self) -> Option<&str> {
        self.get_field("022")?.get_subfield('a')
    }

    /// Every subject access field, in record order.
    #[must_use]
    fn subjects(&self) -> Vec<&Field> {
        self.get_fields(SUBJECT_TAGS)
    }

    /// Uniform title from 130, or 240 when there is no 130, formatted for display.
    #[must_use]
    fn uniformtitle(&self) -> Option<String> {
        self.get_field("130")
            .or_else(|| self.get_field("240"))
            .map(Field::format_field)
    }

    /// Publisher name from 260 $b, falling back to 264 $b.
    #[must_use]
    fn publisher(&self) -> Option<&str> {
        self.imprint_subfield('b')
    }

    /// Publication date statement from 260 $c, falling back to 264 $c.
    #[must_use]
    fn pubyear(&self) -> Option<&str> {
        self.imprint_subfield('c')
    }

    /// Place of publication from 260 $a, falling back to 264 $a.
    #[must_use]
    fn pubplace(&self) -> Option<&str> {
        self.imprint_subfield('a')
    }

    /// A subfield of the imprint: 260 when it carries the code, otherwise 264.
    #[must_use]
    fn imprint_subfield(&self, code: char) -> Option<&str> {
        self.get_field("260")
            .and_then(|f| f.get_subfield(code))
            .or_else(|| self.get_field("264").and_then(|f| f.get_subfield(code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leader::Leader;
    use crate::record::Record;

    fn record_with(fields: Vec<Field>) -> Record {
        let mut record = Record::new(Leader::default());
        for field in fields {
            record.add_field(field);
        }
        record
    }

    #[test]
    fn test_author_prefers_personal_name() {
        let record = record_with(vec![
            Field::builder("110", '2', ' ')
                .subfield_str('a', "Kokusai Bunka Shinkokai.")
                .build(),
            Field::builder("100", '1', ' ')
                .subfield_str('6', "880-01")
                .subfield_str('a', "Yoshida, Kenko,")
                .subfield_str('d', "1283?-1350?")
                .build(),
        ]);
        assert_eq!(record.author().as_deref(), Some("Yoshida, Kenko, 1283?-1350?"));
    }

    #[test]
    fn test_author_falls_back_to_meeting_name() {
        let record = record_with(vec![Field::builder("111", '2', ' ')
            .subfield_str('a', "Symposium on Archives")
            .build()]);
        assert_eq!(record.author().as_deref(), Some("Symposium on Archives"));
    }

    #[test]
    fn test_isbn_strips_hyphens_and_qualifiers() {
        let record = record_with(vec![Field::builder("020", ' ', ' ')
            .subfield_str('a', "0-13-110362-8 (pbk.)")
            .build()]);
        assert_eq!(record.isbn().as_deref(), Some("0131103628"));
    }

    #[test]
    fn test_isbn_requires_leading_token() {
        for raw in ["ISBN 0-13-110362-8", "0131103628(pbk.)"] {
            let record = record_with(vec![Field::builder("020", ' ', ' ')
                .subfield_str('a', raw)
                .build()]);
            assert_eq!(record.isbn(), None, "accepted {raw}");
        }
    }

    #[test]
    fn test_isbn_without_subfield_a() {
        let record = record_with(vec![Field::builder("020", ' ', ' ')
            .subfield_str('z', "0131103628")
            .build()]);
        assert_eq!(record.isbn(), None);
    }

    #[test]
    fn test_imprint_falls_back_to_264() {
        let record = record_with(vec![Field::builder("264", ' ', '1')
            .subfield_str('a', "[Tokyo] :")
            .subfield_str('b', "Iwanami Shoten,")
            .subfield_str('c', "2011.")
            .build()]);
        assert_eq!(record.pubplace(), Some("[Tokyo] :"));
        assert_eq!(record.publisher(), Some("Iwanami Shoten,"));
        assert_eq!(record.pubyear(), Some("2011."));
    }

    #[test]
    fn test_subjects_and_added_entries_keep_record_order() {
        let record = record_with(vec![
            Field::builder("651", ' ', '0').subfield_str('a', "Japan").build(),
            Field::builder("650", ' ', '0').subfield_str('a', "Essays").build(),
            Field::builder("710", '2', ' ').subfield_str('a', "Press").build(),
            Field::builder("700", '1', ' ').subfield_str('a', "Keene, Donald").build(),
        ]);
        let subjects: Vec<_> = record.subjects().iter().map(|f| f.value()).collect();
        assert_eq!(subjects, vec!["Japan", "Essays"]);
        let entries: Vec<_> = record
            .addedentries()
            .iter()
            .filter_map(|f| f.get_subfield('a'))
            .collect();
        assert_eq!(entries, vec!["Press", "Keene, Donald"]);
    }

    #[test]
    fn test_uniformtitle_prefers_130() {
        let record = record_with(vec![
            Field::builder("240", '1', '0').subfield_str('a', "Essays").build(),
            Field::builder("130", '0', ' ').subfield_str('a', "Tsurezuregusa.").build(),
        ]);
        assert_eq!(record.uniformtitle().as_deref(), Some("Tsurezuregusa."));
    }
}
