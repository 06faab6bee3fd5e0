//! Property tests for metadata templating, identifier fallback and title
//! truncation.

use bibrec::bib::{truncate_title, TRUNCATED_TITLE_LEN};
use bibrec::metadata::{Shape, TEMPLATE};
use bibrec::{Bib, Metadata};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

/// A conforming value for each template key, or `None` to leave it out.
fn conforming_metadata() -> impl Strategy<Value = Value> {
    let entries: Vec<_> = TEMPLATE
        .iter()
        .map(|(key, shape)| {
            let value = match shape {
                Shape::Text => prop_oneof![
                    Just(Value::Null),
                    "[a-zA-Z0-9 ]{0,12}".prop_map(Value::from),
                    any::<u32>().prop_map(Value::from),
                ]
                .boxed(),
                Shape::List => prop_oneof![
                    Just(Value::Null),
                    prop::collection::vec("[a-z]{1,8}", 0..4).prop_map(Value::from),
                ]
                .boxed(),
            };
            (Just((*key).to_string()), prop::option::of(value))
        })
        .collect();

    entries.prop_map(|pairs| {
        let object: Map<String, Value> = pairs
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect();
        Value::Object(object)
    })
}

proptest! {
    #[test]
    fn prop_every_template_key_present(input in conforming_metadata()) {
        let bib = Bib::new(&input, None, Vec::new()).unwrap();
        for (key, shape) in TEMPLATE {
            let value = bib.metadata().get(key);
            prop_assert!(value.is_some(), "missing {}", key);
            let absent = matches!(input.get(*key), None | Some(Value::Null));
            if absent {
                match shape {
                    Shape::Text => prop_assert_eq!(bib.metadata().text(key), ""),
                    Shape::List => prop_assert!(bib.metadata().list(key).is_empty()),
                }
            }
        }
    }

    #[test]
    fn prop_set_then_clear_is_template(input in conforming_metadata()) {
        let mut bib = Bib::new(&json!({}), None, Vec::new()).unwrap();
        bib.set_metadata(&input).unwrap();
        bib.clear_metadata();
        prop_assert_eq!(bib.metadata(), &Metadata::template());
    }

    #[test]
    fn prop_metadata_isbn_is_sole_isbns_entry(isbn in "[0-9]{9}[0-9X]") {
        let bib = Bib::new(&json!({"isbn": isbn.clone()}), None, Vec::new()).unwrap();
        prop_assert_eq!(bib.isbns(), vec![isbn]);
    }

    #[test]
    fn prop_truncated_title_is_bounded(title in "[a-zA-Z ]{0,400}") {
        let short = truncate_title(&title);
        let len = title.chars().count();
        if len <= TRUNCATED_TITLE_LEN {
            prop_assert_eq!(short, title);
        } else {
            prop_assert!(short.chars().count() <= TRUNCATED_TITLE_LEN + 3);
            prop_assert!(short.ends_with("..."));
            let kept = &short[..short.len() - 3];
            prop_assert!(title.starts_with(kept));
        }
    }
}

#[test]
fn test_no_isbn_gives_empty_isbns() {
    let bib = Bib::new(&json!({}), None, Vec::new()).unwrap();
    assert!(bib.isbns().is_empty());
}

#[test]
fn test_trunctitle_of_unbroken_title() {
    let title = "A".repeat(300);
    let bib = Bib::new(&json!({ "title": title }), None, Vec::new()).unwrap();
    let short = bib.trunctitle();
    assert!(short.chars().count() <= 255);
    assert!(short.ends_with("..."));
}
