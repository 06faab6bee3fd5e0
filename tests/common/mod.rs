//! Common test helpers and fixtures shared across the test suite.

#![allow(dead_code)]

use bibrec::holding::encode_date;
use bibrec::{Field, Holding, Item, Leader, Record};
use chrono::NaiveDate;
use serde_json::{json, Value};

/// Creates a default leader for test records.
pub fn make_leader() -> Leader {
    Leader::default()
}

/// Builds a field from a tag, indicators and `(code, value)` pairs.
pub fn field(tag: &str, ind1: char, ind2: char, subfields: &[(char, &str)]) -> Field {
    let mut field = Field::new(tag, ind1, ind2);
    for (code, value) in subfields {
        field.add_subfield_str(*code, value);
    }
    field
}

/// A romanized Japanese monograph with vernacular 880 fields.
///
/// Carries 001, 020 (twice), 100, 245, 250, 260, 650, 700 and 880s linked to
/// 100, 245, 260 and 700.
pub fn create_tsurezuregusa() -> Record {
    Record::builder(make_leader())
        .control_field_str("001", "2468101")
        .field(field("020", ' ', ' ', &[('a', "4-00-007152-8 (pbk.)")]))
        .field(field("020", ' ', ' ', &[('a', "4000071529")]))
        .field(field(
            "100",
            '0',
            ' ',
            &[('6', "880-01"), ('a', "Kenkō,"), ('d', "1283?-1350?")],
        ))
        .field(field(
            "245",
            '1',
            '0',
            &[
                ('6', "880-02"),
                ('a', "Tsurezuregusa :"),
                ('b', "zenchūshaku /"),
                ('c', "Yasuraoka Kōsaku."),
            ],
        ))
        .field(field("250", ' ', ' ', &[('a', "Dai 1-han.")]))
        .field(field(
            "260",
            ' ',
            ' ',
            &[
                ('6', "880-03"),
                ('a', "[Tōkyō] :"),
                ('b', "Kadokawa Shoten,"),
                ('c', "1967."),
            ],
        ))
        .field(field(
            "650",
            ' ',
            '0',
            &[('a', "Japanese essays"), ('y', "To 1600.")],
        ))
        .field(field(
            "700",
            '1',
            ' ',
            &[('6', "880-04"), ('a', "Yasuraoka, Kōsaku,"), ('d', "1917-2001.")],
        ))
        .field(field("880", '0', ' ', &[('6', "100-01/$1"), ('a', "兼好,")]))
        .field(field(
            "880",
            '1',
            '0',
            &[('6', "245-02/$1"), ('a', "徒然草 :"), ('b', "全注釈 /")],
        ))
        .field(field(
            "880",
            ' ',
            ' ',
            &[
                ('6', "260-03/$1"),
                ('a', "[東京] :"),
                ('b', "角川書店,"),
                ('c', "1967."),
            ],
        ))
        .field(field("880", '1', ' ', &[('6', "700-04/$1"), ('a', "安良岡康作,")]))
        .build()
}

/// A barcoded copy with a due date.
#[derive(Debug)]
pub struct TestItem {
    pub barcode: String,
    pub due: Option<NaiveDate>,
}

impl Item for TestItem {
    fn dump_dict(&self) -> Value {
        json!({
            "barcode": self.barcode,
            "due": self.due.map_or(Value::Null, encode_date),
        })
    }
}

/// A holding at one location.
#[derive(Debug)]
pub struct TestHolding {
    pub location: String,
    pub items: Vec<TestItem>,
}

impl Holding for TestHolding {
    fn items(&self) -> Vec<&dyn Item> {
        self.items.iter().map(|i| i as &dyn Item).collect()
    }

    fn dump_dict(&self) -> Value {
        json!({
            "location": self.location,
            "items": self.items.iter().map(Item::dump_dict).collect::<Vec<_>>(),
        })
    }
}

/// A holding at `location` with one item per barcode, none checked out.
pub fn create_holding(location: &str, barcodes: &[&str]) -> TestHolding {
    TestHolding {
        location: location.to_string(),
        items: barcodes
            .iter()
            .map(|b| TestItem {
                barcode: (*b).to_string(),
                due: None,
            })
            .collect(),
    }
}
