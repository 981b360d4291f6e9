//! Process-wide generator.
//!
//! Free functions operating on one lazily created [`Generator`] over the
//! bundled data. Code that needs independent settings should own a
//! [`Generator`] instead.

use crate::error::FakeError;
use crate::generator::Generator;
use std::sync::OnceLock;

/// Global generator instance (initialized lazily)
static GENERATOR: OnceLock<Generator> = OnceLock::new();

/// Get the process-wide generator.
pub fn global() -> &'static Generator {
    GENERATOR.get_or_init(Generator::new)
}

/// Available languages of the bundled data set.
pub fn languages() -> Vec<String> {
    global().languages()
}

/// Set the language samples are generated in.
///
/// # Errors
/// Returns [`FakeError::LanguageNotAvailable`] for an unknown identifier.
pub fn set_language(language: &str) -> Result<(), FakeError> {
    global().set_language(language)
}

/// Allow falling back to English samples when a category is missing.
pub fn set_fallback(enabled: bool) {
    global().set_fallback_enabled(enabled)
}

/// Read samples from `./data` instead of the bundled set.
pub fn set_external_data(enabled: bool) {
    global().set_external_data(enabled)
}

/// Random expanded template of `category` (see [`Generator::generate`]).
pub fn generate(category: &str) -> String {
    global().generate(category)
}

/// Random sample of `category` (see [`Generator::sample`]).
pub fn sample(category: &str) -> String {
    global().sample(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn reset() {
        set_language("en").unwrap();
        set_fallback(true);
        set_external_data(false);
    }

    #[test]
    fn test_global_returns_same_instance() {
        assert!(std::ptr::eq(global(), global()));
    }

    #[test]
    fn test_languages_are_stable() {
        assert_eq!(languages(), languages());
        assert!(languages().contains(&"en".to_string()));
    }

    #[test]
    #[serial]
    fn test_set_language_unknown() {
        reset();
        let err = set_language("xx").unwrap_err();
        assert!(matches!(err, FakeError::LanguageNotAvailable(_)));
        assert_eq!(global().language(), "en");
    }

    #[test]
    #[serial]
    fn test_sample_in_configured_language() {
        reset();
        set_language("es").unwrap();
        let city = sample("cities");
        reset();

        let spanish = [
            "Madrid",
            "Barcelona",
            "Valencia",
            "Sevilla",
            "Zaragoza",
            "Málaga",
            "Bilbao",
            "Granada",
        ];
        assert!(spanish.contains(&city.as_str()), "unexpected city {:?}", city);
    }

    #[test]
    #[serial]
    fn test_fallback_toggle() {
        reset();
        set_language("es").unwrap();
        assert!(!generate("zip").is_empty());

        set_fallback(false);
        assert_eq!(generate("phone"), "");
        reset();
    }
}
