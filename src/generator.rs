//! Sample resolution.
//!
//! A [`Generator`] owns its configuration, sample cache, language registry,
//! random source and data sources. Lookups go cache first, then to the active
//! data source; a category missing in a non-English language is retried once
//! in English when fallback is allowed.

use crate::cache::{SampleCache, SamplePool};
use crate::config::Config;
use crate::error::FakeError;
use crate::i18n::{CacheMetrics, LanguageRegistry, CANONICAL_LANGUAGE};
use crate::source::{read_resource, split_samples, DataSource, EmbeddedData, ExternalData};
use crate::template::{expand, format_category};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

pub struct Generator {
    registry: LanguageRegistry,
    language: RwLock<String>,
    fallback_enabled: AtomicBool,
    use_external_data: AtomicBool,
    embedded: Box<dyn DataSource>,
    external: Box<dyn DataSource>,
    cache: RwLock<SampleCache>,
    rng: Mutex<StdRng>,
    metrics: CacheMetrics,
}

impl Generator {
    /// Generator over the bundled data, English, fallback on.
    ///
    /// External data (when switched on) is read from `./data`.
    pub fn new() -> Self {
        let defaults = Config::default();
        Self::build(
            LanguageRegistry::embedded().clone(),
            Box::new(EmbeddedData),
            Box::new(ExternalData::new(defaults.data_dir)),
        )
    }

    /// Generator configured from `config`.
    ///
    /// # Errors
    /// Returns [`FakeError::LanguageNotAvailable`] if `config.language` is not
    /// one of the bundled languages.
    pub fn from_config(config: &Config) -> Result<Self, FakeError> {
        let generator = Self::build(
            LanguageRegistry::embedded().clone(),
            Box::new(EmbeddedData),
            Box::new(ExternalData::new(config.data_dir.clone())),
        );
        generator.set_language(&config.language)?;
        generator.set_fallback_enabled(config.fallback_enabled);
        generator.set_external_data(config.use_external_data);
        Ok(generator)
    }

    /// Generator over custom sources.
    ///
    /// Available languages are taken from `primary`, which is also the source
    /// used while external data is off.
    pub fn with_sources(
        primary: impl DataSource + 'static,
        external: impl DataSource + 'static,
    ) -> Self {
        Self::build(
            LanguageRegistry::from_source(&primary),
            Box::new(primary),
            Box::new(external),
        )
    }

    /// Reseed the random source for reproducible output.
    pub fn with_seed(self, seed: u64) -> Self {
        *self.rng.lock().unwrap() = StdRng::seed_from_u64(seed);
        self
    }

    fn build(
        registry: LanguageRegistry,
        embedded: Box<dyn DataSource>,
        external: Box<dyn DataSource>,
    ) -> Self {
        Self {
            registry,
            language: RwLock::new(CANONICAL_LANGUAGE.to_string()),
            fallback_enabled: AtomicBool::new(true),
            use_external_data: AtomicBool::new(false),
            embedded,
            external,
            cache: RwLock::new(SampleCache::new()),
            rng: Mutex::new(StdRng::from_entropy()),
            metrics: CacheMetrics::new(),
        }
    }

    // ==================== Configuration ====================

    /// Switch the language samples are drawn from.
    ///
    /// On error the current language is left unchanged.
    pub fn set_language(&self, language: &str) -> Result<(), FakeError> {
        self.registry.validate(language)?;
        *self.language.write().unwrap() = language.to_string();
        info!("Language set to {}", language);
        Ok(())
    }

    pub fn language(&self) -> String {
        self.language.read().unwrap().clone()
    }

    /// Allow or forbid falling back to English for missing categories.
    pub fn set_fallback_enabled(&self, enabled: bool) {
        self.fallback_enabled.store(enabled, Ordering::Relaxed);
        info!("English fallback {}", if enabled { "enabled" } else { "disabled" });
    }

    pub fn fallback_enabled(&self) -> bool {
        self.fallback_enabled.load(Ordering::Relaxed)
    }

    /// Read samples from the external source instead of the bundled one.
    ///
    /// Pools already cached stay cached.
    pub fn set_external_data(&self, enabled: bool) {
        self.use_external_data.store(enabled, Ordering::Relaxed);
        info!("External data {}", if enabled { "enabled" } else { "disabled" });
    }

    pub fn uses_external_data(&self) -> bool {
        self.use_external_data.load(Ordering::Relaxed)
    }

    /// Available language identifiers, sorted.
    pub fn languages(&self) -> Vec<String> {
        self.registry.list().to_vec()
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    /// Whether a pool for (language, category) has been loaded.
    pub fn is_cached(&self, language: &str, category: &str) -> bool {
        self.cache.read().unwrap().has(language, category)
    }

    // ==================== Lookup ====================

    /// Random sample of `category` in the current language.
    ///
    /// Returns an empty string when no sample can be found; use
    /// [`Generator::try_sample`] to see why.
    pub fn sample(&self, category: &str) -> String {
        self.try_sample(category)
            .unwrap_or_else(|e| self.absorb(category, e))
    }

    pub fn try_sample(&self, category: &str) -> Result<String, FakeError> {
        let language = self.language();
        self.resolve(&language, category, true)
            .inspect_err(|_| self.metrics.record_failure())
    }

    /// Random template from `<category>_format` with every `#` replaced by a
    /// random digit.
    ///
    /// Returns an empty string when no template can be found.
    pub fn generate(&self, category: &str) -> String {
        self.try_generate(category)
            .unwrap_or_else(|e| self.absorb(category, e))
    }

    pub fn try_generate(&self, category: &str) -> Result<String, FakeError> {
        let language = self.language();
        let format = self
            .resolve(&language, &format_category(category), true)
            .inspect_err(|_| self.metrics.record_failure())?;

        let mut rng = self.rng.lock().unwrap();
        Ok(expand(&format, &mut *rng))
    }

    /// Pick one sample of `category` in `language`.
    ///
    /// A missing resource in a language other than English is retried once
    /// in English when both `allow_fallback` and the generator's fallback
    /// flag are set. The retry itself never falls back again.
    pub fn resolve(
        &self,
        language: &str,
        category: &str,
        allow_fallback: bool,
    ) -> Result<String, FakeError> {
        let canonical = self.registry.canonical();
        match self.pool(language, category) {
            Ok(pool) => Ok(self.pick(&pool)),
            Err(e)
                if e.is_not_found()
                    && language != canonical
                    && allow_fallback
                    && self.fallback_enabled() =>
            {
                debug!(
                    "No {} samples for {}, falling back to {}",
                    category, language, canonical
                );
                self.metrics.record_fallback();
                self.resolve(canonical, category, false)
            }
            Err(e) => Err(e),
        }
    }

    fn pool(&self, language: &str, category: &str) -> Result<SamplePool, FakeError> {
        if let Some(pool) = self.cache.read().unwrap().get(language, category) {
            self.metrics.record_cache_hit();
            return Ok(pool);
        }
        self.metrics.record_cache_miss();

        let bytes = read_resource(self.active_source(), language, category)?;
        let samples = split_samples(&bytes, language, category)?;
        self.metrics.record_resource_read();
        debug!(
            "Cached {} samples for {}/{}",
            samples.len(),
            language,
            category
        );

        Ok(self.cache.write().unwrap().put(language, category, samples))
    }

    fn active_source(&self) -> &dyn DataSource {
        if self.uses_external_data() {
            self.external.as_ref()
        } else {
            self.embedded.as_ref()
        }
    }

    fn pick(&self, pool: &[String]) -> String {
        let mut rng = self.rng.lock().unwrap();
        pool.choose(&mut *rng).cloned().unwrap_or_default()
    }

    fn absorb(&self, category: &str, error: FakeError) -> String {
        match error {
            FakeError::ResourceNotFound { .. } => debug!("{}", error),
            _ => warn!("Lookup of {} failed: {:?}", category, error),
        }
        String::new()
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
