//! Flat presentation dumps of a [`Bib`].
//!
//! Each template key is filled from the Bib accessor of the same name, so the
//! dump reflects MARC-first resolution rather than the raw metadata.

use crate::bib::Bib;
use crate::error::Result;
use indexmap::IndexMap;
use serde_json::Value;

type Accessor = fn(&Bib) -> Result<Value>;

/// Template keys, in template order.
const TEMPLATE_ACCESSORS: &[(&str, Accessor)] = &[
    ("bibid", |b| Ok(b.bibid().into())),
    ("title", |b| Ok(b.title().into())),
    ("author", |b| Ok(b.author().into())),
    ("addedentries", |b| Ok(b.addedentries().into())),
    ("edition", |b| Ok(b.edition().into())),
    ("publisher", |b| Ok(b.publisher().into())),
    ("pubplace", |b| Ok(b.pubplace().into())),
    ("pubyear", |b| Ok(b.pubyear().into())),
    ("langcode", |b| Ok(b.langcode().into())),
    ("libcode", |b| Ok(b.libcode().into())),
    ("formatcode", |b| Ok(b.formatcode().into())),
    ("isbn", |b| Ok(b.isbn().into())),
    ("isbns", |b| Ok(b.isbns().into())),
    ("issn", |b| Ok(b.issn().into())),
    ("issns", |b| Ok(b.issns().into())),
    ("oclc", |b| Ok(b.oclc().into())),
];

/// Derived keys appended after the template keys.
const EXTRA_ACCESSORS: &[(&str, Accessor)] = &[
    ("trunctitle", |b| Ok(b.trunctitle().into())),
    ("altmeta", |b| Ok(serde_json::to_value(b.altmeta())?)),
    ("subjects", |b| Ok(b.subjects().into())),
    ("uniformtitle", |b| Ok(b.uniformtitle().into())),
    ("language", |b| Ok(b.language().into())),
    ("library", |b| match b.library()? {
        Some(library) => Ok(serde_json::to_value(library)?),
        None => Ok(Value::Null),
    }),
    ("microdatatype", |b| Ok(b.microdatatype().into())),
];

impl Bib {
    /// Ordered presentation mapping.
    ///
    /// Keys: every template key, then `trunctitle`, `altmeta`, `subjects`,
    /// `uniformtitle`, `language`, `library` and `microdatatype`, then `marc`
    /// when a record is attached, then `holdings` when `include_holdings`.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::Lookup`](crate::BibError::Lookup) when the library
    /// code is unknown, or [`BibError::Json`](crate::BibError::Json) if a value
    /// cannot be serialized.
    pub fn dump_dict(&self, include_holdings: bool) -> Result<IndexMap<String, Value>> {
        let mut dump = IndexMap::with_capacity(TEMPLATE_ACCESSORS.len() + EXTRA_ACCESSORS.len() + 2);

        for (key, accessor) in TEMPLATE_ACCESSORS.iter().chain(EXTRA_ACCESSORS) {
            dump.insert((*key).to_string(), accessor(self)?);
        }

        if let Some(marc) = self.marc() {
            dump.insert("marc".to_string(), marc.to_marcjson());
        }

        if include_holdings {
            let holdings = self.holdings().iter().map(|h| h.dump_dict()).collect();
            dump.insert("holdings".to_string(), Value::Array(holdings));
        }

        tracing::trace!(bibid = self.bibid(), keys = dump.len(), "dumped bib");
        Ok(dump)
    }

    /// [`Bib::dump_dict`] as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Fails as [`Bib::dump_dict`] does.
    pub fn dump_json(&self, include_holdings: bool) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.dump_dict(include_holdings)?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::TEMPLATE;
    use serde_json::json;

    #[test]
    fn test_accessor_table_covers_template() {
        let keys: Vec<&str> = TEMPLATE_ACCESSORS.iter().map(|(k, _)| *k).collect();
        let template: Vec<&str> = TEMPLATE.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, template);
    }

    #[test]
    fn test_empty_bib_dump() {
        let bib = Bib::builder().build().unwrap();
        let dump = bib.dump_dict(false).unwrap();
        assert_eq!(dump.len(), TEMPLATE.len() + EXTRA_ACCESSORS.len());
        assert_eq!(dump["altmeta"], json!({}));
        assert_eq!(dump["library"], Value::Null);
        assert_eq!(dump["microdatatype"], "http://schema.org/CreativeWork");
        assert!(!dump.contains_key("marc"));
        assert!(!dump.contains_key("holdings"));
    }

    #[test]
    fn test_holdings_key_only_when_requested() {
        let bib = Bib::builder().build().unwrap();
        assert_eq!(bib.dump_dict(true).unwrap()["holdings"], json!([]));
    }

    #[test]
    fn test_unknown_library_fails_dump() {
        let bib = Bib::builder()
            .metadata(json!({"libcode": "nowhere"}))
            .build()
            .unwrap();
        assert!(bib.dump_dict(false).is_err());
    }
}
