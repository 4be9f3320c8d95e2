// crates/countryatlas-core/src/loader/cache.rs

//! Binary cache read/write. Bincode payload, gzip-wrapped when the `compact`
//! feature is on (which also switches [`super::CACHE_FILENAME`]).

use crate::error::{AtlasError, Result};
use crate::model::Atlas;
use crate::traits::AtlasBackend;
use bincode::Options;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

// Caps the deserializer so a corrupt or hostile cache file cannot allocate
// unbounded memory. ~250 flat records fit in a fraction of this.
const CACHE_SIZE_LIMIT: u64 = 64 * 1024 * 1024;

impl<B: AtlasBackend> Atlas<B>
where
    B: serde::Serialize + for<'de> serde::Deserialize<'de>,
{
    /// Write the atlas to `path` as a binary cache.
    pub fn save_cache(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref()).map_err(AtlasError::Io)?;
        let writer = BufWriter::new(file);

        #[cfg(feature = "compact")]
        let mut encoder: Box<dyn Write> = Box::new(GzEncoder::new(writer, Compression::default()));
        #[cfg(not(feature = "compact"))]
        let mut encoder: Box<dyn Write> = Box::new(writer);

        bincode::DefaultOptions::new()
            .with_limit(CACHE_SIZE_LIMIT)
            .serialize_into(&mut encoder, self)
            .map_err(AtlasError::Cache)?;
        encoder.flush().map_err(AtlasError::Io)?;
        Ok(())
    }

    /// Read an atlas back from a binary cache file.
    pub fn load_cache(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AtlasError::NotFound(format!("Cache not found at {}: {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);

        #[cfg(feature = "compact")]
        let mut stream: Box<dyn Read> = Box::new(GzDecoder::new(reader));
        #[cfg(not(feature = "compact"))]
        let mut stream: Box<dyn Read> = Box::new(reader);

        let mut data = Vec::new();
        stream.read_to_end(&mut data).map_err(AtlasError::Io)?;
        Self::from_cache_bytes(&data)
    }

    /// Reconstruct the atlas from already-decompressed cache bytes.
    pub fn from_cache_bytes(data: &[u8]) -> Result<Self> {
        bincode::DefaultOptions::new()
            .with_limit(CACHE_SIZE_LIMIT)
            .allow_trailing_bytes()
            .deserialize(data)
            .map_err(AtlasError::Cache)
    }

    /// Serialize the atlas to cache bytes (no compression).
    pub fn to_cache_bytes(&self) -> Result<Vec<u8>> {
        bincode::DefaultOptions::new()
            .with_limit(CACHE_SIZE_LIMIT)
            .serialize(self)
            .map_err(AtlasError::Cache)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{build_atlas, DefaultAtlas};

    #[test]
    fn cache_bytes_round_trip() {
        let raw = serde_json::from_str(
            r#"[
                {"name": {"common": "Chile"}, "cca2": "CL", "cca3": "CHL",
                 "capital": ["Santiago"], "region": "Americas",
                 "latlng": [-30.0, -71.0], "borders": ["ARG", "BOL", "PER"]},
                {"name": {"common": "Argentina"}, "cca2": "AR", "cca3": "ARG",
                 "capital": ["Buenos Aires"], "region": "Americas"}
            ]"#,
        )
        .unwrap();
        let atlas: DefaultAtlas = build_atlas(raw);

        let bytes = atlas.to_cache_bytes().unwrap();
        let restored = DefaultAtlas::from_cache_bytes(&bytes).unwrap();

        assert_eq!(restored.country_count(), atlas.country_count());
        assert_eq!(restored.countries[0].cca3(), "CHL");
        assert_eq!(restored.countries[0].capital_display(), "Santiago");
    }
}
