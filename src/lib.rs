//! Localized fake data.
//!
//! Samples live in newline-separated files addressed as
//! `/data/<language>/<category>`. A [`Generator`] picks a random line from a
//! category, or, for `<category>_format` templates, replaces every `#` with a
//! random digit.
//!
//! ```rust,ignore
//! use fake_data::Generator;
//!
//! let generator = Generator::new();
//! generator.set_language("fr")?;
//! let city = generator.sample("cities");
//! let phone = generator.generate("phone");
//! ```

pub mod cache;
pub mod categories;
pub mod config;
pub mod error;
pub mod generator;
pub mod global;
pub mod i18n;
pub mod source;
pub mod template;

pub use categories::join;
pub use config::Config;
pub use error::FakeError;
pub use generator::Generator;
pub use global::{generate, languages, sample, set_external_data, set_fallback, set_language};
pub use source::{DataSource, EmbeddedData, ExternalData};
