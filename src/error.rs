use thiserror::Error;

/// Errors produced while configuring a generator or resolving samples.
#[derive(Debug, Error)]
pub enum FakeError {
    /// The requested language is not part of the registry
    #[error("The language passed ({0}) is not available")]
    LanguageNotAvailable(String),

    /// No resource exists for the (language, category) pair
    #[error("No samples found for language: {language} (category: {category})")]
    ResourceNotFound { language: String, category: String },

    /// The resource exists but could not be read
    #[error("Failed to read samples for {language}/{category}")]
    ResourceUnreadable {
        language: String,
        category: String,
        #[source]
        source: std::io::Error,
    },

    /// The resource contained no usable lines
    #[error("Resource {language}/{category} contains no samples")]
    EmptyResource { language: String, category: String },
}

impl FakeError {
    /// Whether this error should trigger the English fallback.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FakeError::ResourceNotFound { .. })
    }
}
