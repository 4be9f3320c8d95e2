// crates/countryatlas-core/src/error.rs

use thiserror::Error;

/// Crate-wide error type.
///
/// Loader, client and context operations all funnel into this enum so callers
/// can handle everything through a single [`Result`] alias.
#[derive(Debug, Error)]
pub enum AtlasError {
    /// A dataset file (dump or cache) was not found on disk.
    #[error("dataset not found: {0}")]
    NotFound(String),

    /// The API (or the in-memory atlas) had no record for the given code.
    #[error("no country found for code `{0}`")]
    CountryNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary cache could not be decoded; delete the cache file and retry.
    #[error("cache decode error: {0}")]
    Cache(#[from] bincode::Error),

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AtlasError>;
