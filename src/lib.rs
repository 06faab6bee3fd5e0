#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! ## Modules
//!
//! - [`bib`] — The [`Bib`] record view and its accessors
//! - [`metadata`] — Flat metadata with a fixed key template
//! - [`altmeta`] — Alternate-script metadata from 880 fields
//! - [`marc_source`] — The [`MarcSource`] trait a Bib reads MARC data through
//! - [`record`] — In-memory MARC records (`Record`, `Field`, `Subfield`)
//! - [`leader`] — MARC record leader (24-byte header)
//! - [`field_linkage`] — Subfield 6 linkage parsing
//! - [`marcjson`] — MARC-in-JSON conversion
//! - [`holding`] — Holding and item traits and date encoding
//! - [`library`] — Library registry used to resolve library codes
//! - [`language`] — ISO 639-2/B language names
//! - [`error`] — Error types

pub mod altmeta;
pub mod bib;
mod dump;
pub mod error;
pub mod field_linkage;
pub mod holding;
pub mod language;
pub mod leader;
pub mod library;
pub mod marc_source;
pub mod marcjson;
pub mod metadata;
pub mod record;

pub use altmeta::AltMeta;
pub use bib::{Bib, BibBuilder};
pub use error::{BibError, Result};
pub use field_linkage::LinkageInfo;
pub use holding::{Holding, Item};
pub use leader::Leader;
pub use library::{Library, LibraryRegistry};
pub use marc_source::MarcSource;
pub use metadata::{MetaValue, Metadata, Shape};
pub use record::{Field, FieldBuilder, Record, RecordBuilder, Subfield};
