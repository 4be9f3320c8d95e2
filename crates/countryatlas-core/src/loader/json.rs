// crates/countryatlas-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "json")]

use crate::error::{AtlasError, Result};
use crate::model::{build_atlas, Atlas, DefaultBackend};
use crate::raw::CountriesRaw;
use std::path::Path;

impl Atlas<DefaultBackend> {
    /// Load directly from an `/all`-style JSON dump on disk.
    ///
    /// Accepts plain `.json` and, with the `compact` feature, `.json.gz`.
    /// Useful for air-gapped runs and for pinning a dataset snapshot; slower
    /// than the binary cache.
    pub fn load_raw_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = Self::open_stream(path)?;
        let raw: CountriesRaw = serde_json::from_reader(reader).map_err(AtlasError::Json)?;
        Ok(build_atlas(raw))
    }
}
