//! MARC-in-JSON conversion.
//!
//! This is the shape a Bib dump uses for its `marc` key:
//!
//! ```json
//! {
//!   "leader": "00714cam a2200205 a 4500",
//!   "fields": [
//!     {"001": "12345"},
//!     {"245": {"ind1": "1", "ind2": "0", "subfields": [{"a": "Title"}]}}
//!   ]
//! }
//! ```
//!
//! Control fields (001-009) map a tag to a string; data fields map a tag to an
//! object with indicators and an ordered list of single-entry subfield objects.

use crate::error::{BibError, Result};
use crate::leader::Leader;
use crate::record::{Field, Record};
use serde_json::{json, Map, Value};

/// Convert a MARC record to MARC-in-JSON.
#[must_use]
pub fn record_to_marcjson(record: &Record) -> Value {
    let mut fields = Vec::new();

    for (tag, value) in &record.control_fields {
        let mut field = Map::new();
        field.insert(tag.clone(), Value::String(value.clone()));
        fields.push(Value::Object(field));
    }

    for field in record.fields() {
        let subfields: Vec<Value> = field
            .subfields
            .iter()
            .map(|sf| {
                let mut entry = Map::new();
                entry.insert(sf.code.to_string(), Value::String(sf.value.clone()));
                Value::Object(entry)
            })
            .collect();

        let mut field_obj = Map::new();
        field_obj.insert(
            field.tag.clone(),
            json!({
                "ind1": field.indicator1.to_string(),
                "ind2": field.indicator2.to_string(),
                "subfields": subfields,
            }),
        );
        fields.push(Value::Object(field_obj));
    }

    json!({
        "leader": record.leader.to_string(),
        "fields": fields,
    })
}

/// Convert MARC-in-JSON back to a MARC record.
///
/// # Errors
///
/// Returns [`BibError::InvalidRecord`] if the document is not an object with a
/// leader and a field list, [`BibError::InvalidLeader`] for a malformed leader,
/// and [`BibError::InvalidField`] for a field whose content has the wrong shape.
pub fn marcjson_to_record(json: &Value) -> Result<Record> {
    let obj = json
        .as_object()
        .ok_or_else(|| BibError::InvalidRecord("Expected JSON object".to_string()))?;

    let leader_str = obj
        .get("leader")
        .and_then(Value::as_str)
        .ok_or_else(|| BibError::InvalidRecord("Missing leader".to_string()))?;
    let mut record = Record::new(Leader::parse(leader_str)?);

    let fields = match obj.get("fields") {
        None => return Ok(record),
        Some(Value::Array(fields)) => fields,
        Some(_) => {
            return Err(BibError::InvalidRecord(
                "\"fields\" must be an array".to_string(),
            ))
        }
    };

    for item in fields {
        let entry = item
            .as_object()
            .ok_or_else(|| BibError::InvalidRecord("Field must be object".to_string()))?;

        for (tag, value) in entry {
            if tag.len() != 3 {
                return Err(BibError::InvalidField(format!("Invalid tag '{tag}'")));
            }

            if tag.as_str() < "010" {
                let text = value.as_str().ok_or_else(|| {
                    BibError::InvalidField(format!("Control field {tag} must be a string"))
                })?;
                record.add_control_field(tag.clone(), text);
            } else {
                record.add_field(parse_data_field(tag, value)?);
            }
        }
    }

    Ok(record)
}

fn parse_data_field(tag: &str, value: &Value) -> Result<Field> {
    let obj = value
        .as_object()
        .ok_or_else(|| BibError::InvalidField(format!("Field {tag} must be object")))?;

    let indicator = |key: &str| {
        obj.get(key)
            .and_then(Value::as_str)
            .and_then(|s| s.chars().next())
            .unwrap_or(' ')
    };
    let mut field = Field::new(tag, indicator("ind1"), indicator("ind2"));

    let subfields = obj
        .get("subfields")
        .and_then(Value::as_array)
        .ok_or_else(|| BibError::InvalidField(format!("Field {tag} has no subfield list")))?;

    for sf in subfields {
        let sf_obj = sf.as_object().ok_or_else(|| {
            BibError::InvalidField(format!("Subfield in {tag} must be object"))
        })?;
        for (code, val) in sf_obj {
            let code = code.chars().next().ok_or_else(|| {
                BibError::InvalidField(format!("Empty subfield code in {tag}"))
            })?;
            let text = val.as_str().ok_or_else(|| {
                BibError::InvalidField(format!("Subfield {tag}${code} must be a string"))
            })?;
            field.add_subfield_str(code, text);
        }
    }

    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marc_source::MarcSource;

    fn sample() -> Record {
        Record::builder(Leader::default())
            .control_field_str("001", "ocm01234567")
            .field(
                Field::builder("245", '1', '0')
                    .subfield_str('a', "Tsurezuregusa /")
                    .subfield_str('c', "Kenko.")
                    .build(),
            )
            .build()
    }

    #[test]
    fn test_record_to_marcjson_shape() {
        let value = record_to_marcjson(&sample());
        assert_eq!(value["leader"], Leader::default().to_string());
        assert_eq!(value["fields"][0]["001"], "ocm01234567");
        assert_eq!(value["fields"][1]["245"]["ind1"], "1");
        assert_eq!(value["fields"][1]["245"]["subfields"][0]["a"], "Tsurezuregusa /");
        assert_eq!(value["fields"][1]["245"]["subfields"][1]["c"], "Kenko.");
    }

    #[test]
    fn test_marcjson_to_record_restores_fields() {
        let record = sample();
        let restored = marcjson_to_record(&record_to_marcjson(&record)).unwrap();
        assert_eq!(restored, record);
        assert_eq!(
            restored.get_field("245").and_then(|f| f.get_subfield('c')),
            Some("Kenko.")
        );
    }

    #[test]
    fn test_marcjson_keeps_interleaved_field_order() {
        let mut record = Record::new(Leader::default());
        for (tag, note) in [("500", "first"), ("520", "summary"), ("500", "second")] {
            record.add_field(Field::builder(tag, ' ', ' ').subfield_str('a', note).build());
        }
        let value = record_to_marcjson(&record);
        assert_eq!(value["fields"][0]["500"]["subfields"][0]["a"], "first");
        assert_eq!(value["fields"][1]["520"]["subfields"][0]["a"], "summary");
        assert_eq!(value["fields"][2]["500"]["subfields"][0]["a"], "second");
        assert_eq!(marcjson_to_record(&value).unwrap(), record);
    }

    #[test]
    fn test_marcjson_to_record_rejects_missing_leader() {
        let err = marcjson_to_record(&json!({"fields": []})).unwrap_err();
        assert!(matches!(err, BibError::InvalidRecord(_)));
    }

    #[test]
    fn test_marcjson_to_record_rejects_bad_subfield() {
        let doc = json!({
            "leader": "00000nam a2200000 a 4500",
            "fields": [{"245": {"ind1": "1", "ind2": "0", "subfields": [{"a": 5}]}}]
        });
        let err = marcjson_to_record(&doc).unwrap_err();
        assert!(matches!(err, BibError::InvalidField(_)));
    }
}
