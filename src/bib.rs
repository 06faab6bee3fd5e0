//! The bibliographic record view.
//!
//! A [`Bib`] answers display questions (title, author, identifiers, imprint)
//! the same way whether the catalog handed it a MARC record, flat metadata,
//! or both. When a MARC record is attached and yields a value, that value
//! wins; otherwise the accessor falls back to the metadata key of the same
//! name.
//!
//! # Examples
//!
//! ```
//! use bibrec::{Bib, Field, Leader, Record};
//! use serde_json::json;
//!
//! let record = Record::builder(Leader::default())
//!     .field(
//!         Field::builder("245", '1', '0')
//!             .subfield_str('a', "Essays in idleness :")
//!             .subfield_str('b', "the Tsurezuregusa of Kenkō /")
//!             .build(),
//!     )
//!     .build();
//!
//! let bib = Bib::builder()
//!     .metadata(json!({"title": "Essays in Idleness", "formatcode": "am"}))
//!     .marc(record)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(bib.title(), "Essays in idleness : the Tsurezuregusa of Kenkō /");
//! assert_eq!(bib.microdatatype(), "http://schema.org/Book");
//! ```

use crate::altmeta::AltMeta;
use crate::error::Result;
use crate::holding::{Holding, Item};
use crate::language::language_name;
use crate::library::{Library, LibraryRegistry};
use crate::marc_source::MarcSource;
use crate::metadata::Metadata;
use serde_json::Value;
use std::sync::Arc;

/// Titles longer than this many characters are shortened by [`Bib::trunctitle`].
pub const TRUNCATED_TITLE_LEN: usize = 252;

/// schema.org type for books.
pub const SCHEMA_BOOK: &str = "http://schema.org/Book";

/// schema.org type for everything else.
pub const SCHEMA_CREATIVE_WORK: &str = "http://schema.org/CreativeWork";

/// A bibliographic record: MARC and/or flat metadata, plus its holdings.
///
/// Alternate-script metadata is derived from the MARC record once, when the
/// Bib is built. Replacing the record later with [`Bib::set_marc`] does not
/// recompute it; call [`Bib::refresh_altmeta`] for that.
#[derive(Debug)]
pub struct Bib {
    metadata: Metadata,
    marc: Option<Box<dyn MarcSource>>,
    holdings: Vec<Box<dyn Holding>>,
    altmeta: AltMeta,
    libraries: Arc<LibraryRegistry>,
}

impl Bib {
    /// Build a Bib from metadata, an optional MARC record and holdings.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::TypeValidation`](crate::BibError::TypeValidation)
    /// if `metadata` is not a JSON object or a value has the wrong shape for
    /// its key.
    pub fn new(
        metadata: &Value,
        marc: Option<Box<dyn MarcSource>>,
        holdings: Vec<Box<dyn Holding>>,
    ) -> Result<Self> {
        let metadata = Metadata::from_json(metadata)?;
        let altmeta = marc
            .as_deref()
            .map(|m| AltMeta::from_source(m))
            .unwrap_or_default();

        let bib = Bib {
            metadata,
            marc,
            holdings,
            altmeta,
            libraries: Arc::default(),
        };
        tracing::debug!(
            bibid = bib.bibid(),
            has_marc = bib.marc.is_some(),
            holdings = bib.holdings.len(),
            "built bib"
        );
        Ok(bib)
    }

    /// Create a builder for assembling a Bib piece by piece.
    #[must_use]
    pub fn builder() -> BibBuilder {
        BibBuilder::default()
    }

    /// Use `libraries` to resolve [`Bib::library`].
    #[must_use]
    pub fn with_libraries(mut self, libraries: Arc<LibraryRegistry>) -> Self {
        self.libraries = libraries;
        self
    }

    // ========================================================================
    // Backing stores
    // ========================================================================

    /// The flat metadata, template keys always present.
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Replace all metadata.
    ///
    /// Keys absent from `metadata` (or given as `null`) return to their empty
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::TypeValidation`](crate::BibError::TypeValidation)
    /// on a shape mismatch, in which case the current metadata is kept.
    pub fn set_metadata(&mut self, metadata: &Value) -> Result<()> {
        self.metadata = Metadata::from_json(metadata)?;
        Ok(())
    }

    /// Reset metadata to the empty template.
    pub fn clear_metadata(&mut self) {
        self.metadata = Metadata::template();
    }

    /// The attached MARC record, if any.
    #[must_use]
    pub fn marc(&self) -> Option<&dyn MarcSource> {
        self.marc.as_deref()
    }

    /// Attach a MARC record, replacing any current one.
    ///
    /// Alternate-script metadata is left as it was; see [`Bib::refresh_altmeta`].
    pub fn set_marc(&mut self, marc: impl MarcSource + 'static) {
        self.marc = Some(Box::new(marc));
    }

    /// Detach the MARC record.
    pub fn clear_marc(&mut self) {
        self.marc = None;
    }

    /// The holdings, in display order.
    #[must_use]
    pub fn holdings(&self) -> &[Box<dyn Holding>] {
        &self.holdings
    }

    /// Replace all holdings.
    pub fn set_holdings(&mut self, holdings: Vec<Box<dyn Holding>>) {
        self.holdings = holdings;
    }

    /// Remove all holdings.
    pub fn clear_holdings(&mut self) {
        self.holdings.clear();
    }

    /// Every item of every holding, holding by holding.
    #[must_use]
    pub fn items(&self) -> Vec<&dyn Item> {
        self.holdings.iter().flat_map(|h| h.items()).collect()
    }

    /// Alternate-script metadata as derived when the Bib was built.
    #[must_use]
    pub fn altmeta(&self) -> &AltMeta {
        &self.altmeta
    }

    /// Re-derive alternate-script metadata from the current MARC record.
    pub fn refresh_altmeta(&mut self) {
        self.altmeta = self
            .marc
            .as_deref()
            .map(|m| AltMeta::from_source(m))
            .unwrap_or_default();
    }

    // ========================================================================
    // Metadata-only accessors
    // ========================================================================

    /// Local bibliographic record identifier.
    #[must_use]
    pub fn bibid(&self) -> &str {
        self.metadata.text("bibid")
    }

    /// OCLC number.
    #[must_use]
    pub fn oclc(&self) -> &str {
        self.metadata.text("oclc")
    }

    /// Format code (record type plus bibliographic level, e.g. `am` for a book).
    #[must_use]
    pub fn formatcode(&self) -> &str {
        self.metadata.text("formatcode")
    }

    /// ISO 639-2/B language code.
    #[must_use]
    pub fn langcode(&self) -> &str {
        self.metadata.text("langcode")
    }

    /// Code of the owning library.
    #[must_use]
    pub fn libcode(&self) -> &str {
        self.metadata.text("libcode")
    }

    /// Free-text imprint statement, when the metadata supplies one.
    #[must_use]
    pub fn imprint(&self) -> &str {
        self.metadata.text("imprint")
    }

    // ========================================================================
    // MARC-first accessors
    // ========================================================================

    /// Title proper and remainder of title (245 $a $b).
    #[must_use]
    pub fn title(&self) -> String {
        let from_marc = self.from_marc(|m| join_a_b(m, "245"));
        self.or_metadata(from_marc, "title")
    }

    /// [`Bib::title`] shortened for display.
    ///
    /// Titles up to [`TRUNCATED_TITLE_LEN`] characters come back unchanged, with
    /// no `...` appended.
    /// Longer ones are cut at the last space inside that window (or at the
    /// window edge when it holds no space) and get `...` appended.
    #[must_use]
    pub fn trunctitle(&self) -> String {
        truncate_title(&self.title())
    }

    /// Edition statement (250 $a $b).
    #[must_use]
    pub fn edition(&self) -> String {
        let from_marc = self.from_marc(|m| join_a_b(m, "250"));
        self.or_metadata(from_marc, "edition")
    }

    /// Main entry (100/110/111).
    #[must_use]
    pub fn author(&self) -> String {
        self.or_metadata(self.from_marc(|m| m.author()), "author")
    }

    /// Added entry names and titles (7XX $a).
    #[must_use]
    pub fn addedentries(&self) -> Vec<String> {
        let from_marc = self.from_marc(|m| {
            Some(
                m.addedentries()
                    .iter()
                    .filter_map(|f| f.get_subfield('a'))
                    .map(str::to_string)
                    .collect::<Vec<_>>(),
            )
        });
        match from_marc {
            Some(entries) if !entries.is_empty() => entries,
            _ => self.metadata.list("addedentries").to_vec(),
        }
    }

    /// First ISBN, normalized.
    #[must_use]
    pub fn isbn(&self) -> String {
        self.or_metadata(self.from_marc(|m| m.isbn()), "isbn")
    }

    /// Every ISBN.
    ///
    /// With a MARC record these are the 020 $a values; without one, the
    /// metadata ISBN on its own.
    #[must_use]
    pub fn isbns(&self) -> Vec<String> {
        self.identifiers("020", self.isbn())
    }

    /// First ISSN.
    #[must_use]
    pub fn issn(&self) -> String {
        let from_marc = self.from_marc(|m| m.issn().map(str::to_string));
        self.or_metadata(from_marc, "issn")
    }

    /// Every ISSN, following the same rules as [`Bib::isbns`].
    #[must_use]
    pub fn issns(&self) -> Vec<String> {
        self.identifiers("022", self.issn())
    }

    /// Subject headings, one string per 6XX field.
    #[must_use]
    pub fn subjects(&self) -> Vec<String> {
        self.from_marc(|m| Some(m.subjects().iter().map(|f| f.value()).collect()))
            .unwrap_or_default()
    }

    /// Uniform title (130 or 240).
    #[must_use]
    pub fn uniformtitle(&self) -> String {
        self.from_marc(|m| m.uniformtitle()).unwrap_or_default()
    }

    /// Publisher, without trailing ISBD punctuation.
    #[must_use]
    pub fn publisher(&self) -> String {
        let from_marc = self.from_marc(|m| m.publisher().map(|p| trim_trailing(p).to_string()));
        self.or_metadata(from_marc, "publisher")
    }

    /// Publication date statement, without trailing ISBD punctuation.
    #[must_use]
    pub fn pubyear(&self) -> String {
        let from_marc = self.from_marc(|m| m.pubyear().map(|y| trim_trailing(y).to_string()));
        self.or_metadata(from_marc, "pubyear")
    }

    /// Place of publication, without brackets and ISBD punctuation.
    #[must_use]
    pub fn pubplace(&self) -> String {
        let from_marc = self.from_marc(|m| {
            m.pubplace().map(|p| trim_place(p).to_string())
        });
        self.or_metadata(from_marc, "pubplace")
    }

    // ========================================================================
    // Alternate-script accessors
    // ========================================================================

    /// Vernacular title.
    #[must_use]
    pub fn alttitle(&self) -> &str {
        self.altmeta.title.as_deref().unwrap_or("")
    }

    /// Vernacular main entry.
    #[must_use]
    pub fn altauthor(&self) -> &str {
        self.altmeta.author.as_deref().unwrap_or("")
    }

    /// Vernacular added entries.
    #[must_use]
    pub fn altaddedentries(&self) -> &[String] {
        self.altmeta.addedentries.as_deref().unwrap_or(&[])
    }

    /// Vernacular publisher.
    #[must_use]
    pub fn altpublisher(&self) -> &str {
        trim_trailing(self.altmeta.publisher.as_deref().unwrap_or(""))
    }

    /// Vernacular publication date.
    #[must_use]
    pub fn altpubyear(&self) -> &str {
        trim_trailing(self.altmeta.pubdate.as_deref().unwrap_or(""))
    }

    /// Vernacular place of publication.
    #[must_use]
    pub fn altpubplace(&self) -> &str {
        trim_place(self.altmeta.pubplace.as_deref().unwrap_or(""))
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// English name of the record's language, or the raw code when unknown.
    #[must_use]
    pub fn language(&self) -> String {
        let code = self.langcode();
        language_name(code).map_or_else(
            || {
                tracing::trace!(code, "no language name; using code");
                code.to_string()
            },
            str::to_string,
        )
    }

    /// The owning library, or `None` when the record has no library code.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::Lookup`](crate::BibError::Lookup) when the code is
    /// not in the library registry.
    pub fn library(&self) -> Result<Option<&Library>> {
        match self.libcode() {
            "" => Ok(None),
            code => self.libraries.get(code).map(Some),
        }
    }

    /// schema.org type for embedded microdata.
    #[must_use]
    pub fn microdatatype(&self) -> &'static str {
        if self.formatcode() == "am" || !self.isbns().is_empty() {
            SCHEMA_BOOK
        } else {
            SCHEMA_CREATIVE_WORK
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn from_marc<T>(&self, derive: impl FnOnce(&dyn MarcSource) -> Option<T>) -> Option<T> {
        self.marc().and_then(derive)
    }

    fn or_metadata(&self, from_marc: Option<String>, key: &str) -> String {
        match from_marc.filter(|value| !value.is_empty()) {
            Some(value) => value,
            None => {
                tracing::trace!(key, "no MARC value; using metadata");
                self.metadata.text(key).to_string()
            }
        }
    }

    fn identifiers(&self, tag: &str, single: String) -> Vec<String> {
        match self.marc() {
            Some(m) => m
                .get_fields(&[tag])
                .into_iter()
                .filter_map(|f| f.get_subfield('a'))
                .filter(|a| !a.is_empty())
                .map(str::to_string)
                .collect(),
            None if !single.is_empty() => vec![single],
            None => Vec::new(),
        }
    }
}

/// `$a $b` of the first `tag` field, or `None` without a non-blank `$a`.
fn join_a_b(marc: &dyn MarcSource, tag: &str) -> Option<String> {
    let field = marc.get_field(tag)?;
    let a = field.get_subfield('a').map(str::trim).filter(|a| !a.is_empty())?;
    Some(match field.get_subfield('b').map(str::trim).filter(|b| !b.is_empty()) {
        Some(b) => format!("{a} {b}"),
        None => a.to_string(),
    })
}

/// Strip trailing commas, periods and spaces left over from ISBD punctuation.
fn trim_trailing(value: &str) -> &str {
    value.trim_end_matches(|c| matches!(c, ',' | '.' | ' '))
}

/// Strip the brackets and colon cataloging rules put around a place name.
fn trim_place(value: &str) -> &str {
    value.trim_matches(|c| matches!(c, '[' | ']' | ':' | ' '))
}

/// Shorten `title` to [`TRUNCATED_TITLE_LEN`] characters at a word boundary.
///
/// The ellipsis marks an actual cut: a title that already fits is returned
/// as is, without `...`. Lengths count characters, not bytes.
///
/// ```
/// use bibrec::bib::truncate_title;
///
/// assert_eq!(truncate_title("Short title"), "Short title");
/// let long = format!("{} tail", "word ".repeat(60));
/// let short = truncate_title(&long);
/// assert!(short.ends_with("word ..."));
/// assert!(short.chars().count() <= 255);
/// ```
#[must_use]
pub fn truncate_title(title: &str) -> String {
    let Some((end, _)) = title.char_indices().nth(TRUNCATED_TITLE_LEN) else {
        return title.to_string();
    };
    let window = &title[..end];
    let cut = match window.rfind(' ') {
        Some(space) => &window[..=space],
        None => window,
    };
    format!("{cut}...")
}

/// Builder for [`Bib`].
#[derive(Debug, Default)]
pub struct BibBuilder {
    metadata: Option<Value>,
    marc: Option<Box<dyn MarcSource>>,
    holdings: Vec<Box<dyn Holding>>,
    libraries: Option<Arc<LibraryRegistry>>,
}

impl BibBuilder {
    /// Set the metadata object.
    #[must_use]
    pub fn metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Attach a MARC record.
    #[must_use]
    pub fn marc(mut self, marc: impl MarcSource + 'static) -> Self {
        self.marc = Some(Box::new(marc));
        self
    }

    /// Append a holding.
    #[must_use]
    pub fn holding(mut self, holding: impl Holding + 'static) -> Self {
        self.holdings.push(Box::new(holding));
        self
    }

    /// Resolve library codes against `libraries`.
    #[must_use]
    pub fn libraries(mut self, libraries: Arc<LibraryRegistry>) -> Self {
        self.libraries = Some(libraries);
        self
    }

    /// Build the Bib.
    ///
    /// # Errors
    ///
    /// Fails as [`Bib::new`] does on invalid metadata.
    pub fn build(self) -> Result<Bib> {
        let metadata = self
            .metadata
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));
        let bib = Bib::new(&metadata, self.marc, self.holdings)?;
        Ok(match self.libraries {
            Some(libraries) => bib.with_libraries(libraries),
            None => bib,
        })
    }
}
