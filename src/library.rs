//! Library settings: the registry of libraries a catalog serves.
//!
//! Every Bib carries a library code (`libcode`). The [`LibraryRegistry`] maps
//! those codes to the [`Library`] metadata shown alongside the record. A
//! registry is usually loaded once from a JSON settings document and shared
//! between records behind an `Arc`:
//!
//! ```json
//! {
//!   "gwu": {"name": "George Washington University", "url": "https://library.gwu.edu"},
//!   "gm":  {"name": "George Mason University", "hours": "24/7"}
//! }
//! ```
//!
//! Keys of the top-level object are library codes. Attributes other than
//! `name` and `url` are kept as-is in [`Library::extra`].

use crate::error::{BibError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Display metadata for one library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Library {
    /// Library code, filled from the registry key when loading settings
    #[serde(default)]
    pub code: String,
    /// Display name
    pub name: String,
    /// Home page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Any further attributes the settings document defines
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Library {
    /// Create a library with a code and display name.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Library {
            code: code.into(),
            name: name.into(),
            url: None,
            extra: IndexMap::new(),
        }
    }

    /// Set the home page.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Library code to [`Library`] lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LibraryRegistry {
    libraries: IndexMap<String, Library>,
}

impl LibraryRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a library, keyed by its code.
    pub fn insert(&mut self, library: Library) {
        self.libraries.insert(library.code.clone(), library);
    }

    /// Look up a library by code.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::Lookup`] when no library has that code.
    pub fn get(&self, code: &str) -> Result<&Library> {
        self.libraries.get(code).ok_or_else(|| {
            tracing::warn!(code, "library code not found in registry");
            BibError::Lookup(code.to_string())
        })
    }

    /// Whether a library with this code is registered.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.libraries.contains_key(code)
    }

    /// Number of registered libraries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    /// Whether the registry has no libraries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }

    /// Iterate over libraries in settings order.
    pub fn iter(&self) -> impl Iterator<Item = &Library> {
        self.libraries.values()
    }

    /// Load a registry from a JSON settings document.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::Json`] if the document is not an object of library
    /// objects each with at least a `name`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let registry: LibraryRegistry = serde_json::from_str(json)?;
        Ok(registry.with_codes_from_keys())
    }

    /// Load a registry from a reader producing a JSON settings document.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::Json`] on malformed input, including read failures.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let registry: LibraryRegistry = serde_json::from_reader(reader)?;
        Ok(registry.with_codes_from_keys())
    }

    /// Load a registry from a JSON settings file.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::Io`] if the file cannot be opened and
    /// [`BibError::Json`] if it is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let registry = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(path = %path.display(), libraries = registry.len(), "loaded library settings");
        Ok(registry)
    }

    fn with_codes_from_keys(mut self) -> Self {
        for (code, library) in &mut self.libraries {
            library.code.clone_from(code);
        }
        self
    }
}

impl FromIterator<Library> for LibraryRegistry {
    fn from_iter<I: IntoIterator<Item = Library>>(iter: I) -> Self {
        let mut registry = LibraryRegistry::new();
        for library in iter {
            registry.insert(library);
        }
        registry
    }
}
