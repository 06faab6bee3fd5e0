//! Holdings attached to a Bib.
//!
//! A holding is a physical-copy or location record; it groups the items
//! (barcoded copies) a library has for a bibliographic record. Holdings are
//! built elsewhere, typically from an ILS or a MARC holdings record, and
//! handed to a [`Bib`](crate::Bib) as trait objects. The Bib only ever asks a
//! holding for its items and for its dump.
//!
//! Dumps end up inside [`Bib::dump_json`](crate::Bib::dump_json), so dates in
//! them should be ISO 8601 strings. [`encode_date`] and [`encode_datetime`]
//! produce those for hand-built dumps; `chrono` types serialized through
//! `serde_json::to_value` already come out that way.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde_json::Value;
use std::fmt;

/// A single copy belonging to a holding.
pub trait Item: fmt::Debug + Send + Sync {
    /// Presentation form of the item.
    fn dump_dict(&self) -> Value;
}

/// A holding: a location-level record owning a list of items.
pub trait Holding: fmt::Debug + Send + Sync {
    /// The holding's items, in display order.
    fn items(&self) -> Vec<&dyn Item>;

    /// Presentation form of the holding, including its items.
    fn dump_dict(&self) -> Value;
}

/// Encode a date as `YYYY-MM-DD`.
///
/// ```
/// use bibrec::holding::encode_date;
/// use chrono::NaiveDate;
///
/// let due = NaiveDate::from_ymd_opt(2013, 4, 1).unwrap();
/// assert_eq!(encode_date(due), serde_json::json!("2013-04-01"));
/// ```
#[must_use]
pub fn encode_date(date: NaiveDate) -> Value {
    Value::String(date.format("%Y-%m-%d").to_string())
}

/// Encode a timestamp as `YYYY-MM-DDTHH:MM:SS`, adding six fractional digits
/// (`.ffffff`) only when the time has a sub-second part.
#[must_use]
pub fn encode_datetime(datetime: NaiveDateTime) -> Value {
    let format = if datetime.nanosecond() == 0 {
        "%Y-%m-%dT%H:%M:%S"
    } else {
        "%Y-%m-%dT%H:%M:%S%.6f"
    };
    Value::String(datetime.format(format).to_string())
}
