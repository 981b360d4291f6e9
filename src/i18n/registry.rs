//! Language registry: the languages a data source can serve.
//!
//! The registry for the bundled data set is built once from the embedded
//! directory layout and shared through a `OnceLock`.

use crate::error::FakeError;
use crate::source::{DataSource, EmbeddedData};
use std::sync::OnceLock;

/// Language used when a sample is missing in the requested language.
pub const CANONICAL_LANGUAGE: &str = "en";

/// Sorted set of language identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRegistry {
    languages: Vec<String>,
}

/// Registry of the embedded data set (initialized lazily)
static EMBEDDED_REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the registry for the bundled data set.
    ///
    /// Initialized on first call from the embedded directory layout and
    /// shared afterwards.
    pub fn embedded() -> &'static LanguageRegistry {
        EMBEDDED_REGISTRY.get_or_init(|| Self::from_source(&EmbeddedData))
    }

    /// Build a registry from the top-level directories of a data source.
    pub fn from_source(source: &dyn DataSource) -> Self {
        Self::from_codes(source.languages())
    }

    /// Build a registry from explicit identifiers.
    ///
    /// Duplicates and empty identifiers are dropped; order is normalized.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut languages: Vec<String> = codes
            .into_iter()
            .map(Into::into)
            .filter(|code| !code.is_empty())
            .collect();
        languages.sort();
        languages.dedup();
        Self { languages }
    }

    /// All available identifiers, sorted.
    pub fn list(&self) -> &[String] {
        &self.languages
    }

    /// Exact membership check (no case folding or aliasing).
    pub fn is_available(&self, code: &str) -> bool {
        self.languages.iter().any(|lang| lang == code)
    }

    /// Check that `code` is available.
    ///
    /// # Errors
    /// Returns [`FakeError::LanguageNotAvailable`] when it is not.
    pub fn validate(&self, code: &str) -> Result<(), FakeError> {
        if self.is_available(code) {
            Ok(())
        } else {
            Err(FakeError::LanguageNotAvailable(code.to_string()))
        }
    }

    /// The canonical (fallback) language identifier.
    pub fn canonical(&self) -> &'static str {
        CANONICAL_LANGUAGE
    }
}
