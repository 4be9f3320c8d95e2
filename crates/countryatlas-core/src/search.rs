// crates/countryatlas-core/src/search.rs

//! Search and lookup operations on the in-memory [`Atlas`].
//!
//! Codes are ASCII and use `eq_ignore_ascii_case`; human-readable names go
//! through the Unicode folding in [`crate::text`].

use crate::error::{AtlasError, Result};
use crate::model::{Atlas, AtlasStats, Country};
use crate::text::fold_key;
use crate::traits::{AtlasBackend, CountrySource};
use std::collections::HashSet;

impl<B: AtlasBackend> Atlas<B> {
    /// Find a country by ISO 3166-1 alpha-2 code, case-insensitive (e.g. "DE", "us").
    pub fn find_by_cca2(&self, cca2: &str) -> Option<&Country<B>> {
        self.countries
            .iter()
            .find(|c| c.cca2.as_ref().eq_ignore_ascii_case(cca2))
    }

    /// Find a country by ISO 3166-1 alpha-3 code, case-insensitive (e.g. "DEU", "usa").
    pub fn find_by_cca3(&self, cca3: &str) -> Option<&Country<B>> {
        self.countries
            .iter()
            .find(|c| c.cca3.as_ref().eq_ignore_ascii_case(cca3))
    }

    /// Find a country by code, trying cca2 first and then cca3 (both
    /// case-insensitive).
    ///
    /// Examples:
    /// - "DE"  → matches cca2
    /// - "de"  → matches cca2 (case-insensitive)
    /// - "DEU" → matches cca3
    /// - "deu" → matches cca3 (case-insensitive)
    pub fn find_by_code(&self, code: &str) -> Option<&Country<B>> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }

        // Try cca2 first, then cca3.
        self.find_by_cca2(code).or_else(|| self.find_by_cca3(code))
    }

    /// Filter countries whose common name *loosely matches* the given query.
    ///
    /// This is the listing filter, applied on every keystroke:
    /// - **case-insensitive**
    /// - **accent/diacritic-insensitive**
    /// - based on substring matching (not prefix)
    /// - an empty (or whitespace-only) query returns the full list unchanged
    ///
    /// The normalization is performed using [`fold_key`], which
    /// transliterates Unicode to ASCII (e.g. `"Türkiye"` → `"turkiye"`).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use countryatlas_core::{Atlas, StandardBackend};
    ///
    /// fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let atlas: Atlas<StandardBackend> = Atlas::load()?;
    ///     // "united" should match both "United States" and "United Kingdom"
    ///     let matches = atlas.filter_by_name("united");
    ///     assert!(matches.iter().any(|c| c.name() == "United Kingdom"));
    ///     // "turk" should match "Türkiye"
    ///     let matches = atlas.filter_by_name("turk");
    ///     assert!(matches.iter().any(|c| c.name() == "Türkiye"));
    ///     Ok(())
    /// }
    /// ```
    ///
    /// # Note
    ///
    /// For codes (cca2/cca3), use [`Atlas::find_by_code`]; this search is for
    /// *names* only.
    pub fn filter_by_name(&self, query: &str) -> Vec<&Country<B>> {
        let q = fold_key(query.trim());
        if q.is_empty() {
            return self.countries.iter().collect();
        }

        self.countries
            .iter()
            .filter(|c| fold_key(c.name()).contains(&q))
            .collect()
    }

    /// Resolve a country's border codes to the records present in the atlas.
    ///
    /// Order follows the record's own border list (which is API order).
    /// Codes the atlas cannot resolve are skipped rather than erroring: a
    /// filtered or partial atlas is still navigable.
    pub fn borders_of<'a>(&'a self, country: &Country<B>) -> Vec<&'a Country<B>> {
        country
            .borders
            .iter()
            .filter_map(|code| self.find_by_cca3(code.as_ref()))
            .collect()
    }

    /// All countries whose region label matches, accent- and
    /// case-insensitively.
    pub fn countries_in_region(&self, region: &str) -> Vec<&Country<B>> {
        let q = fold_key(region.trim());
        if q.is_empty() {
            return Vec::new();
        }

        self.countries
            .iter()
            .filter(|c| fold_key(c.region()) == q)
            .collect()
    }

    /// Aggregate statistics for the atlas.
    pub fn stats(&self) -> AtlasStats {
        let mut regions: HashSet<String> = HashSet::new();
        let mut borderless = 0usize;

        for country in &self.countries {
            if !country.region().is_empty() {
                regions.insert(fold_key(country.region()));
            }
            if !country.has_borders() {
                borderless += 1;
            }
        }

        AtlasStats {
            countries: self.countries.len(),
            regions: regions.len(),
            borderless,
        }
    }
}

/// The in-memory atlas doubles as an offline [`CountrySource`]: lookups are
/// served from the loaded set instead of the network.
impl<B: AtlasBackend> CountrySource<B> for Atlas<B> {
    fn fetch_all(&self) -> Result<Vec<Country<B>>> {
        Ok(self.countries.clone())
    }

    fn fetch_by_code(&self, code: &str) -> Result<Country<B>> {
        self.find_by_code(code)
            .cloned()
            .ok_or_else(|| AtlasError::CountryNotFound(code.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{build_atlas, DefaultAtlas};

    fn fixture() -> DefaultAtlas {
        let raw = serde_json::from_str(
            r#"[
                {"name": {"common": "United States"}, "cca2": "US", "cca3": "USA",
                 "region": "Americas", "borders": ["CAN", "MEX"]},
                {"name": {"common": "United Kingdom"}, "cca2": "GB", "cca3": "GBR",
                 "region": "Europe", "borders": ["IRL"]},
                {"name": {"common": "Türkiye"}, "cca2": "TR", "cca3": "TUR",
                 "region": "Asia", "borders": ["ARM", "AZE", "BGR", "GEO", "GRC", "IRN", "IRQ", "SYR"]},
                {"name": {"common": "Ireland"}, "cca2": "IE", "cca3": "IRL",
                 "region": "Europe", "borders": ["GBR"]},
                {"name": {"common": "Japan"}, "cca2": "JP", "cca3": "JPN",
                 "region": "Asia"}
            ]"#,
        )
        .unwrap();
        build_atlas(raw)
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let atlas = fixture();
        let hits = atlas.filter_by_name("UNITED");
        let names: Vec<&str> = hits.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["United States", "United Kingdom"]);

        // Substring, not prefix.
        assert_eq!(atlas.filter_by_name("kingdom").len(), 1);
    }

    #[test]
    fn empty_query_returns_full_list() {
        let atlas = fixture();
        assert_eq!(atlas.filter_by_name("").len(), atlas.country_count());
        assert_eq!(atlas.filter_by_name("   ").len(), atlas.country_count());
    }

    #[test]
    fn filter_folds_diacritics() {
        let atlas = fixture();
        let hits = atlas.filter_by_name("turkiye");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].cca3(), "TUR");
    }

    #[test]
    fn find_by_code_tries_cca2_then_cca3() {
        let atlas = fixture();
        assert_eq!(atlas.find_by_code("gb").unwrap().name(), "United Kingdom");
        assert_eq!(atlas.find_by_code("GBR").unwrap().name(), "United Kingdom");
        assert_eq!(atlas.find_by_code(" usa ").unwrap().name(), "United States");
        assert!(atlas.find_by_code("").is_none());
        assert!(atlas.find_by_code("ZZ").is_none());
    }

    #[test]
    fn borders_resolve_in_api_order_and_skip_unknown() {
        let atlas = fixture();
        let uk = atlas.find_by_code("GBR").unwrap();
        let borders = atlas.borders_of(uk);
        assert_eq!(borders.len(), 1);
        assert_eq!(borders[0].name(), "Ireland");

        // Türkiye's neighbours are mostly absent from the fixture; the ones
        // that are missing get skipped, not error.
        let tr = atlas.find_by_code("TUR").unwrap();
        assert!(atlas.borders_of(tr).is_empty());
    }

    #[test]
    fn region_filter_and_stats() {
        let atlas = fixture();
        assert_eq!(atlas.countries_in_region("europe").len(), 2);

        let stats = atlas.stats();
        assert_eq!(stats.countries, 5);
        assert_eq!(stats.regions, 3);
        assert_eq!(stats.borderless, 1); // Japan
    }

    #[test]
    fn atlas_serves_as_offline_source() {
        let atlas = fixture();
        let japan = CountrySource::<crate::DefaultBackend>::fetch_by_code(&atlas, "JPN").unwrap();
        assert_eq!(japan.name(), "Japan");

        let missing = CountrySource::<crate::DefaultBackend>::fetch_by_code(&atlas, "XXX");
        assert!(matches!(missing, Err(AtlasError::CountryNotFound(_))));
    }
}
