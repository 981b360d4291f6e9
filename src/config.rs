use crate::i18n::CANONICAL_LANGUAGE;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Language samples are drawn from
    pub language: String,

    // Fall back to English when a category is missing
    pub fallback_enabled: bool,

    // External data
    pub use_external_data: bool,
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: CANONICAL_LANGUAGE.to_string(),
            fallback_enabled: true,
            use_external_data: false,
            data_dir: PathBuf::from("data"),
        }
    }
}

impl Config {
    /// Read overrides from `FAKE_*` variables.
    ///
    /// Every setting has a default, so missing or unparsable values never fail.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            language: std::env::var("FAKE_LANG").unwrap_or(defaults.language),

            fallback_enabled: std::env::var("FAKE_FALLBACK")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.fallback_enabled),

            use_external_data: std::env::var("FAKE_EXTERNAL_DATA")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.use_external_data),
            data_dir: std::env::var("FAKE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
