//! MARC record leader.
//!
//! The leader is the 24-character header of every MARC record. Bib views only
//! need it to carry the record type through to the MARC-in-JSON dump, so this
//! module keeps parsing and rendering and nothing else.
//!
//! - Positions 0-4: Record length (5 digits)
//! - Position 5: Record status
//! - Position 6: Record type (a = language material, c = music, etc.)
//! - Position 7: Bibliographic level (m = monograph, s = serial, etc.)
//! - Position 8: Control record type
//! - Position 9: Character coding (space = MARC-8, a = UTF-8)
//! - Positions 10-11: Indicator count and subfield code count
//! - Positions 12-16: Base address of data (5 digits)
//! - Positions 17-19: Encoding level, cataloging form, multipart level
//! - Positions 20-23: Entry map (usually "4500")

use crate::error::{BibError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// MARC Leader - 24 characters at the start of every MARC record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    /// Record length (5 digits) - positions 0-4
    pub record_length: u32,
    /// Record status (1 char) - position 5
    pub record_status: char,
    /// Type of record (1 char) - position 6
    pub record_type: char,
    /// Bibliographic level (1 char) - position 7
    pub bibliographic_level: char,
    /// Type of control record (1 char) - position 8
    pub control_record_type: char,
    /// Character coding scheme (1 char) - position 9
    pub character_coding: char,
    /// Indicator count (1 digit) - position 10
    pub indicator_count: u8,
    /// Subfield code count (1 digit) - position 11
    pub subfield_code_count: u8,
    /// Base address of data (5 digits) - positions 12-16
    pub data_base_address: u32,
    /// Encoding level (1 char) - position 17
    pub encoding_level: char,
    /// Cataloging form (1 char) - position 18
    pub cataloging_form: char,
    /// Multipart resource record level (1 char) - position 19
    pub multipart_level: char,
    /// Entry map (4 chars) - positions 20-23
    pub reserved: String,
}

impl Default for Leader {
    /// A new, unencoded language-material monograph.
    fn default() -> Self {
        Leader {
            record_length: 0,
            record_status: 'n',
            record_type: 'a',
            bibliographic_level: 'm',
            control_record_type: ' ',
            character_coding: 'a',
            indicator_count: 2,
            subfield_code_count: 2,
            data_base_address: 0,
            encoding_level: ' ',
            cataloging_form: 'a',
            multipart_level: ' ',
            reserved: "4500".to_string(),
        }
    }
}

impl Leader {
    /// Parse a leader from its 24-character string form.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::InvalidLeader`] if the value is not 24 ASCII
    /// characters or a numeric position does not hold digits.
    pub fn parse(value: &str) -> Result<Self> {
        let bytes = value.as_bytes();
        if bytes.len() != 24 || !value.is_ascii() {
            return Err(BibError::InvalidLeader(format!(
                "Leader must be 24 ASCII characters, got {value:?}"
            )));
        }

        let digit = |pos: usize| -> Result<u8> {
            (bytes[pos] as char)
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or_else(|| {
                    BibError::InvalidLeader(format!(
                        "Expected digit at position {pos}, got '{}'",
                        bytes[pos] as char
                    ))
                })
        };

        Ok(Leader {
            record_length: parse_digits(&value[0..5])?,
            record_status: bytes[5] as char,
            record_type: bytes[6] as char,
            bibliographic_level: bytes[7] as char,
            control_record_type: bytes[8] as char,
            character_coding: bytes[9] as char,
            indicator_count: digit(10)?,
            subfield_code_count: digit(11)?,
            data_base_address: parse_digits(&value[12..17])?,
            encoding_level: bytes[17] as char,
            cataloging_form: bytes[18] as char,
            multipart_level: bytes[19] as char,
            reserved: value[20..24].to_string(),
        })
    }
}

impl fmt::Display for Leader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:05}{}{}{}{}{}{}{}{:05}{}{}{}{:<4.4}",
            self.record_length % 100_000,
            self.record_status,
            self.record_type,
            self.bibliographic_level,
            self.control_record_type,
            self.character_coding,
            self.indicator_count % 10,
            self.subfield_code_count % 10,
            self.data_base_address % 100_000,
            self.encoding_level,
            self.cataloging_form,
            self.multipart_level,
            self.reserved,
        )
    }
}

fn parse_digits(s: &str) -> Result<u32> {
    s.parse::<u32>()
        .map_err(|_| BibError::InvalidLeader(format!("Invalid numeric field: '{s}'")))
}
