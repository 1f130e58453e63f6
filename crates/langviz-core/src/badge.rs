// File: crates/langviz-core/src/badge.rs
// Summary: Badge resolution: shields-style URL building, a pluggable HTTP transport, and a
//          two-level (memory + disk) PNG cache that degrades to text labels on failure.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use skia_safe as skia;
use thiserror::Error;
use tracing::{debug, warn};

use crate::languages::{LanguageTable, MetaLookup};

/// Badge service endpoint; labels render in its `for-the-badge` style.
pub const BADGE_SERVICE: &str = "https://img.shields.io/badge";

/// Badge background used when a language has no `badge_color` entry.
pub const DEFAULT_BADGE_COLOR: &str = "888888";

/// Seconds to wait for the badge service before giving up on a label.
pub const BADGE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum BadgeError {
    #[error("badge request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("badge service answered HTTP {status}")]
    Service { status: u16 },
    #[error("badge bytes did not decode as an image")]
    Decode,
    #[error("badge cache I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Fetches badge bytes for a URL. The default transport speaks HTTP;
/// tests substitute canned implementations.
pub trait BadgeTransport {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, BadgeError>;
}

/// reqwest-backed transport with a bounded request timeout.
pub struct HttpBadgeTransport {
    client: reqwest::blocking::Client,
}

impl HttpBadgeTransport {
    pub fn new() -> Result<Self, BadgeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(BADGE_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

impl BadgeTransport for HttpBadgeTransport {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, BadgeError> {
        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(BadgeError::Service { status: response.status().as_u16() });
        }
        Ok(response.bytes()?.to_vec())
    }
}

/// Filesystem-safe cache key: spaces and slashes become underscores so
/// names like `Visual Basic .NET` map to flat files without colliding.
pub fn cache_key(language: &str) -> String {
    language.replace(' ', "_").replace('/', "_")
}

/// Badge URL for a language label. Spaces become underscores before
/// percent-encoding, so `C#` yields `C%23` and survives the badge path.
/// A logo rides along only when a badge color is configured; entries
/// without one get the plain gray badge.
pub fn badge_url(language: &str, table: &LanguageTable) -> String {
    let (color, logo) = match table.lookup(language) {
        MetaLookup::Known(meta) => match meta.badge_color.as_deref() {
            Some(color) => (color, meta.logo.as_deref()),
            None => (DEFAULT_BADGE_COLOR, None),
        },
        MetaLookup::Unknown => (DEFAULT_BADGE_COLOR, None),
    };
    let label = urlencoding::encode(&language.replace(' ', "_")).into_owned();
    let mut url = format!("{BADGE_SERVICE}/{label}-{color}.png?style=for-the-badge");
    if let Some(logo) = logo {
        url.push_str(&format!("&logo={}&logoColor=white", urlencoding::encode(logo)));
    }
    url
}

/// A resolved row label: the badge image when the service (or a cache
/// level) produced one, the plain language name otherwise.
pub enum Badge {
    Image(skia::Image),
    TextFallback(String),
}

/// Two-level badge store. Memory hits are free, disk hits avoid the
/// network, and anything else goes through the transport once.
///
/// Single-owner and synchronous; nothing guards the disk files against
/// a second process writing the same key. Sharing a cache directory
/// across processes would need per-key exclusion or an atomic rename
/// on store.
pub struct BadgeCache {
    cache_dir: PathBuf,
    transport: Box<dyn BadgeTransport>,
    images: HashMap<String, skia::Image>,
}

impl BadgeCache {
    pub fn new(cache_dir: impl Into<PathBuf>, transport: Box<dyn BadgeTransport>) -> Result<Self, BadgeError> {
        let cache_dir = cache_dir.into();
        std::fs::create_dir_all(&cache_dir)?;
        Ok(Self { cache_dir, transport, images: HashMap::new() })
    }

    pub fn set_transport(&mut self, transport: Box<dyn BadgeTransport>) {
        self.transport = transport;
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn disk_path(&self, language: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.png", cache_key(language)))
    }

    /// Look a badge up through memory, then disk, then the transport.
    /// `None` means every level failed; the chart falls back to a text
    /// label for this row and rendering continues.
    pub fn resolve(&mut self, language: &str, table: &LanguageTable) -> Option<skia::Image> {
        if let Some(image) = self.images.get(language) {
            return Some(image.clone());
        }
        let path = self.disk_path(language);
        if path.exists() {
            match std::fs::read(&path) {
                Ok(bytes) => match decode(&bytes) {
                    Some(image) => {
                        self.images.insert(language.to_string(), image.clone());
                        return Some(image);
                    }
                    // Corrupt entries stay in place; a successful fetch
                    // below overwrites them.
                    None => {
                        debug!(language, path = %path.display(), "cached badge did not decode, refetching")
                    }
                },
                Err(err) => debug!(language, error = %err, "cached badge unreadable, refetching"),
            }
        }
        match self.fetch_and_store(language, table, &path) {
            Ok(image) => Some(image),
            Err(err) => {
                warn!(language, error = %err, "badge unavailable, using text label");
                None
            }
        }
    }

    /// Convenience wrapper producing the render-side label type.
    pub fn badge_for(&mut self, language: &str, table: &LanguageTable) -> Badge {
        match self.resolve(language, table) {
            Some(image) => Badge::Image(image),
            None => Badge::TextFallback(language.to_string()),
        }
    }

    fn fetch_and_store(
        &mut self,
        language: &str,
        table: &LanguageTable,
        path: &Path,
    ) -> Result<skia::Image, BadgeError> {
        let url = badge_url(language, table);
        let bytes = self.transport.fetch(&url)?;
        let image = decode(&bytes).ok_or(BadgeError::Decode)?;
        std::fs::write(path, &bytes)?;
        self.images.insert(language.to_string(), image.clone());
        Ok(image)
    }
}

fn decode(bytes: &[u8]) -> Option<skia::Image> {
    skia::Image::from_encoded(skia::Data::new_copy(bytes))
}
