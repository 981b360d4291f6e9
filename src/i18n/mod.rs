//! Language handling for sample generation.
//!
//! # Architecture
//!
//! - `registry`: the set of language identifiers a data source provides,
//!   plus the canonical fallback language
//! - `metrics`: cache and fallback counters for one generator
//!
//! # Example
//!
//! ```rust,ignore
//! use fake_data::i18n::LanguageRegistry;
//!
//! let registry = LanguageRegistry::embedded();
//! assert!(registry.is_available("en"));
//! ```

mod metrics;
mod registry;

pub use metrics::{CacheMetrics, MetricsReport};
pub use registry::{LanguageRegistry, CANONICAL_LANGUAGE};
