//! Sample data sources.
//!
//! Resources are addressed as `/data/<language>/<category>`. A [`DataSource`]
//! turns such a path into raw bytes; [`read_resource`] builds the path and
//! classifies failures so the resolver only falls back on a missing resource.

use crate::error::FakeError;
use rust_embed::RustEmbed;
use std::collections::BTreeSet;
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Fixed root every resource path starts with.
pub const DATA_ROOT: &str = "/data";

/// Capability to open resources by path and to enumerate languages.
pub trait DataSource: Send + Sync {
    /// Read the full contents of the resource at `path`.
    ///
    /// Must return an error of kind [`io::ErrorKind::NotFound`] when the
    /// resource does not exist.
    fn open(&self, path: &str) -> io::Result<Vec<u8>>;

    /// Language identifiers available in this source (top-level directories).
    fn languages(&self) -> Vec<String>;
}

/// Sample files bundled into the binary at build time.
#[derive(RustEmbed)]
#[folder = "data/"]
struct BundledSamples;

/// Read-only data set compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedData;

impl DataSource for EmbeddedData {
    fn open(&self, path: &str) -> io::Result<Vec<u8>> {
        let relative = strip_root(path);
        BundledSamples::get(relative)
            .map(|file| file.data.into_owned())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.to_string()))
    }

    fn languages(&self) -> Vec<String> {
        let langs: BTreeSet<String> = BundledSamples::iter()
            .filter_map(|file| {
                file.split_once('/')
                    .map(|(lang, _)| lang.to_string())
            })
            .collect();
        langs.into_iter().collect()
    }
}

/// Sample files read from a directory on disk.
///
/// The directory plays the role of `/data`: `<root>/<language>/<category>`.
#[derive(Debug, Clone)]
pub struct ExternalData {
    root: PathBuf,
}

impl ExternalData {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DataSource for ExternalData {
    fn open(&self, path: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.root.join(strip_root(path)))
    }

    fn languages(&self) -> Vec<String> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Cannot list external data dir {}: {}", self.root.display(), e);
                return Vec::new();
            }
        };

        let mut langs: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .collect();
        langs.sort();
        langs
    }
}

// Drops a single leading `/data/`; paths without it are already relative.
fn strip_root(path: &str) -> &str {
    path.strip_prefix(DATA_ROOT)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(path)
}

/// Path of the resource holding `category` samples for `language`.
pub fn resource_path(language: &str, category: &str) -> String {
    format!("{}/{}/{}", DATA_ROOT, language, category)
}

// A segment that would escape its directory can never name a resource.
fn is_plain_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\'])
}

/// Read the raw bytes for (language, category) from `source`.
pub fn read_resource(
    source: &dyn DataSource,
    language: &str,
    category: &str,
) -> Result<Vec<u8>, FakeError> {
    let not_found = || FakeError::ResourceNotFound {
        language: language.to_string(),
        category: category.to_string(),
    };

    if !is_plain_segment(language) || !is_plain_segment(category) {
        return Err(not_found());
    }

    let path = resource_path(language, category);
    debug!("Reading resource {}", path);

    match source.open(&path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(not_found()),
        Err(e) => Err(FakeError::ResourceUnreadable {
            language: language.to_string(),
            category: category.to_string(),
            source: e,
        }),
    }
}

/// Split raw resource bytes into a sample pool.
///
/// The blob is trimmed as a whole, then split on newlines. Carriage returns
/// are dropped and blank lines are skipped, so every sample is non-empty.
pub fn split_samples(
    bytes: &[u8],
    language: &str,
    category: &str,
) -> Result<Vec<String>, FakeError> {
    let text = std::str::from_utf8(bytes).map_err(|e| FakeError::ResourceUnreadable {
        language: language.to_string(),
        category: category.to_string(),
        source: io::Error::new(io::ErrorKind::InvalidData, e),
    })?;

    let samples: Vec<String> = text
        .trim()
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    if samples.is_empty() {
        return Err(FakeError::EmptyResource {
            language: language.to_string(),
            category: category.to_string(),
        });
    }

    Ok(samples)
}
