//! Linkage (subfield 6) parsing for MARC 880 alternate graphic representations.
//!
//! An 880 field carries a vernacular or transliterated rendition of another
//! field in the same record. The two are tied together through subfield 6:
//!
//! - `245: $6 880-02 $a Tsurezuregusa`
//! - `880: $6 245-02/$1 $a 徒然草`
//!
//! In an 880 the first three characters of subfield 6 name the field it
//! renders, which is all [`linked_tag`] looks at. [`LinkageInfo`] parses the
//! full `TAG-OCC[/script][/r]` form.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // TAG-OCC[/SCRIPT][/r]
    //   TAG    three-digit tag
    //   OCC    two or three digit occurrence number
    //   SCRIPT "(" or "$" followed by the script identification character
    static ref LINKAGE: Regex =
        Regex::new(r"^(\d{3})-(\d{2,3})(?:/([\(\$][A-Za-z0-9]))?(?:/r)?$")
            .expect("valid linkage regex");
}

/// Information extracted from a subfield 6 (Linkage) value.
///
/// ```
/// use bibrec::LinkageInfo;
///
/// let info = LinkageInfo::parse("245-02/$1").unwrap();
/// assert_eq!(info.tag, "245");
/// assert_eq!(info.occurrence, "02");
/// assert_eq!(info.script_id, "$1");
/// assert!(!info.is_reverse);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkageInfo {
    /// Tag of the linked field
    pub tag: String,
    /// Occurrence number pairing the two fields
    pub occurrence: String,
    /// Script identification code, empty when absent
    pub script_id: String,
    /// Whether the right-to-left orientation flag (`/r`) is present
    pub is_reverse: bool,
}

impl LinkageInfo {
    /// Parse a subfield 6 value.
    ///
    /// Returns `None` when the value does not follow `TAG-OCC[/script][/r]`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let caps = LINKAGE.captures(value)?;
        Some(LinkageInfo {
            tag: caps.get(1)?.as_str().to_string(),
            occurrence: caps.get(2)?.as_str().to_string(),
            script_id: caps
                .get(3)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            is_reverse: value.ends_with("/r"),
        })
    }
}

/// The tag an 880 field renders: the first three characters of its linkage.
///
/// Unlike [`LinkageInfo::parse`] this accepts anything at least three
/// characters long, so hand-keyed linkages like `"245-1"` still resolve.
///
/// ```
/// use bibrec::field_linkage::linked_tag;
///
/// assert_eq!(linked_tag("100-01/(3/r"), Some("100"));
/// assert_eq!(linked_tag("24"), None);
/// ```
#[must_use]
pub fn linked_tag(linkage: &str) -> Option<&str> {
    linkage
        .char_indices()
        .nth(3)
        .map_or_else(
            || (linkage.chars().count() == 3).then_some(linkage),
            |(end, _)| Some(&linkage[..end]),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let info = LinkageInfo::parse("100-01").unwrap();
        assert_eq!(info.tag, "100");
        assert_eq!(info.occurrence, "01");
        assert_eq!(info.script_id, "");
        assert!(!info.is_reverse);
    }

    #[test]
    fn test_parse_with_script_and_reverse() {
        let info = LinkageInfo::parse("100-01/(3/r").unwrap();
        assert_eq!(info.script_id, "(3");
        assert!(info.is_reverse);
    }

    #[test]
    fn test_parse_three_digit_occurrence() {
        let info = LinkageInfo::parse("700-123").unwrap();
        assert_eq!(info.occurrence, "123");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(LinkageInfo::parse("").is_none());
        assert!(LinkageInfo::parse("10-01").is_none());
        assert!(LinkageInfo::parse("100").is_none());
        assert!(LinkageInfo::parse("abc-01").is_none());
    }

    #[test]
    fn test_linked_tag() {
        assert_eq!(linked_tag("245-01"), Some("245"));
        assert_eq!(linked_tag("260"), Some("260"));
        assert_eq!(linked_tag("245-1"), Some("245"));
        assert_eq!(linked_tag(""), None);
        assert_eq!(linked_tag("70"), None);
    }
}
