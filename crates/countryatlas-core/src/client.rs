// crates/countryatlas-core/src/client.rs
#![cfg(feature = "fetch")]

//! Blocking HTTP client for the REST Countries v3.1 API.
//!
//! Two read-only GET endpoints, both returning arrays of the raw country
//! record:
//! - `GET {base}/all` — the full country set (the listing view's fetch)
//! - `GET {base}/alpha/{code}` — one country by short code (the detail fetch)

use crate::error::{AtlasError, Result};
use crate::model::{build_atlas, Atlas, Country};
use crate::raw::CountriesRaw;
use crate::traits::{AtlasBackend, CountrySource};

/// Production endpoint base.
pub const API_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Blocking client for the country API.
///
/// Cheap to construct; holds a connection pool internally. Use
/// [`RestCountriesClient::with_base_url`] to point at a test server.
pub struct RestCountriesClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl Default for RestCountriesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RestCountriesClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        RestCountriesClient {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/all` — the raw full country set.
    pub fn fetch_all_raw(&self) -> Result<CountriesRaw> {
        let url = format!("{}/all", self.base_url);
        let body = self.http.get(&url).send()?.error_for_status()?.text()?;
        serde_json::from_str(&body).map_err(AtlasError::Json)
    }

    /// `GET {base}/alpha/{code}` — raw records for one short code.
    ///
    /// The API answers with an array even for a single code. A 404 becomes
    /// [`AtlasError::CountryNotFound`] so callers see one error shape for
    /// "no such country" regardless of source.
    pub fn fetch_by_code_raw(&self, code: &str) -> Result<CountriesRaw> {
        let url = format!("{}/alpha/{}", self.base_url, code.trim());
        let response = self.http.get(&url).send()?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AtlasError::CountryNotFound(code.trim().to_string()));
        }
        let body = response.error_for_status()?.text()?;
        serde_json::from_str(&body).map_err(AtlasError::Json)
    }

    /// Fetch and normalize the full set in one step.
    pub fn fetch_atlas<B: AtlasBackend>(&self) -> Result<Atlas<B>> {
        Ok(build_atlas(self.fetch_all_raw()?))
    }
}

impl<B: AtlasBackend> CountrySource<B> for RestCountriesClient {
    fn fetch_all(&self) -> Result<Vec<Country<B>>> {
        Ok(self.fetch_atlas()?.countries)
    }

    fn fetch_by_code(&self, code: &str) -> Result<Country<B>> {
        let raw = self.fetch_by_code_raw(code)?;
        let atlas: Atlas<B> = build_atlas(raw);
        // First matching record from the response array.
        atlas
            .countries
            .into_iter()
            .next()
            .ok_or_else(|| AtlasError::CountryNotFound(code.trim().to_string()))
    }
}
