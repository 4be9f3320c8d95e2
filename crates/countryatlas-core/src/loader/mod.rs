// crates/countryatlas-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (Binary cache vs JSON dump). The in-memory atlas itself
//! never knows where its bytes came from.

use crate::error::{AtlasError, Result};
use crate::model::{Atlas, DefaultBackend};
#[cfg(feature = "fetch")]
use once_cell::sync::OnceCell;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

mod cache;

#[cfg(feature = "json")]
mod json;

#[cfg(feature = "fetch")]
static ATLAS_CACHE: OnceCell<Atlas<DefaultBackend>> = OnceCell::new();

/// Filename of the binary cache inside the data directory.
#[cfg(not(feature = "compact"))]
pub const CACHE_FILENAME: &str = "countries.bin";
#[cfg(feature = "compact")]
pub const CACHE_FILENAME: &str = "countries.comp.bin";

impl Atlas<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_cache_path() -> PathBuf {
        Self::default_data_dir().join(CACHE_FILENAME)
    }

    /// **Shared Loader:** process-wide lazily initialized atlas.
    ///
    /// First call resolves through [`Atlas::load_or_fetch`] against the
    /// default data directory; later calls clone the cached value.
    #[cfg(feature = "fetch")]
    pub fn load() -> Result<Self> {
        ATLAS_CACHE
            .get_or_try_init(|| Self::load_or_fetch(Self::default_data_dir()))
            .cloned()
    }

    /// **Smart Load:** binary cache if present, otherwise fetch and cache.
    ///
    /// The cache is purely a network-avoidance measure; deleting the file is
    /// always safe and [`Atlas::refresh`] rebuilds it from the live API.
    #[cfg(feature = "fetch")]
    pub fn load_or_fetch(data_dir: impl AsRef<Path>) -> Result<Self> {
        let cache_path = data_dir.as_ref().join(CACHE_FILENAME);

        // 1. Check Cache
        if cache_path.exists() {
            if let Ok(atlas) = Self::load_cache(&cache_path) {
                return Ok(atlas);
            }
            // Unreadable cache: fall through to a fresh fetch.
        }

        // 2. Fetch
        Self::refresh(data_dir)
    }

    /// Fetch the full set from the live API and (re)write the binary cache.
    ///
    /// Cache write failures are swallowed: a read-only data directory should
    /// not take the listing down.
    #[cfg(feature = "fetch")]
    pub fn refresh(data_dir: impl AsRef<Path>) -> Result<Self> {
        let client = crate::client::RestCountriesClient::new();
        let atlas: Self = client.fetch_atlas()?;

        let dir = data_dir.as_ref();
        if fs::create_dir_all(dir).is_ok() {
            atlas.save_cache(dir.join(CACHE_FILENAME)).ok();
        }

        Ok(atlas)
    }

    // -----------------------------------------------------------------------
    // INTERNAL TRANSPORT HELPER (DRY)
    // -----------------------------------------------------------------------

    /// Opens a file, buffers it, and wraps it in a Gzip decoder when the
    /// extension asks for one. Returns a generic Reader so the caller doesn't
    /// care about the compression.
    #[cfg(feature = "json")]
    pub(crate) fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
        let file = fs::File::open(path).map_err(|e| {
            AtlasError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
        })?;

        let reader = BufReader::new(file);

        #[cfg(feature = "compact")]
        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz")) {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }

        Ok(Box::new(reader))
    }
}
