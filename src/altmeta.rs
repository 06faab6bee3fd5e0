//! Alternate-script metadata drawn from 880 fields.
//!
//! Records for non-Latin-script material carry a romanized main text and
//! vernacular renditions in 880 fields. [`AltMeta::from_source`] collects the
//! renditions a display needs by looking at which tag each 880 renders:
//!
//! | rendered tag | collected as |
//! |--------------|--------------|
//! | 245 | `title` ($a and $b joined with a space) |
//! | 260 | `publisher` ($b), `pubdate` ($c) and `pubplace` ($a, not serialized) |
//! | 100, 110, 111 | `author` ($a) |
//! | 700, 710, 711, 712, 720, 730, 740, 752-754, 790-793, 796-799 | `addedentries` ($a, in record order) |
//!
//! When several 880s render the same single-valued tag, the last one wins.

use crate::field_linkage::linked_tag;
use crate::marc_source::MarcSource;
use crate::record::Field;
use serde::{Deserialize, Serialize};

/// Added-entry tags whose 880 renditions are collected.
const ALT_ADDED_ENTRY_TAGS: &[&str] = &[
    "700", "710", "711", "712", "720", "730", "740", "752", "753", "754", "790", "791", "792",
    "793", "796", "797", "798", "799",
];

/// Vernacular renditions of a record's display fields.
///
/// Serializes with only the keys that were found, so a record without 880
/// fields dumps as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AltMeta {
    /// Title proper and remainder (245)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Main entry (100/110/111)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Publisher (260 $b)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Publication date (260 $c)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubdate: Option<String>,
    /// Added entries (7XX $a)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addedentries: Option<Vec<String>>,
    /// Place of publication (260 $a); kept out of dumps
    #[serde(skip)]
    pub pubplace: Option<String>,
}

impl AltMeta {
    /// Collect alternate-script metadata from every 880 field of `source`.
    #[must_use]
    pub fn from_source(source: &dyn MarcSource) -> Self {
        let mut alts = AltMeta::default();

        for field in source.get_fields(&["880"]) {
            let Some(tag) = field.get_subfield('6').and_then(linked_tag) else {
                tracing::trace!("skipping 880 without usable linkage");
                continue;
            };

            match tag {
                "245" => alts.title = Some(field.get_subfields(&['a', 'b']).join(" ")),
                "260" => {
                    alts.pubplace = field.get_subfield('a').map(str::to_string);
                    alts.publisher = field.get_subfield('b').map(str::to_string);
                    alts.pubdate = field.get_subfield('c').map(str::to_string);
                }
                "100" | "110" | "111" => alts.author = subfield_a(field),
                t if ALT_ADDED_ENTRY_TAGS.iter().any(|known| *known == t) => {
                    if let Some(entry) = subfield_a(field) {
                        alts.addedentries.get_or_insert_with(Vec::new).push(entry);
                    }
                }
                other => tracing::trace!(tag = other, "ignoring 880 for unhandled tag"),
            }
        }

        tracing::debug!(found = !alts.is_empty(), "derived alternate-script metadata");
        alts
    }

    /// Whether no alternate-script value was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == AltMeta::default()
    }
}

fn subfield_a(field: &Field) -> Option<String> {
    field.get_subfield('a').map(str::to_string)
}
