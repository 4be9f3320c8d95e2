// crates/countryatlas-core/src/raw.rs

//! Wire-format mirror of the REST Countries v3.1 payload.
//!
//! Both `GET /v3.1/all` and `GET /v3.1/alpha/{code}` return arrays of this
//! record. The schema is owned by the remote API; we mirror it field-for-field
//! and do not expose these types from the public API. Every field the API may
//! omit carries `#[serde(default)]` so partial records still parse.

use serde::Deserialize;

/// Raw name object as it comes from JSON:
/// {
///   "common": "Germany",
///   "official": "Federal Republic of Germany"
/// }
#[derive(Debug, Deserialize)]
pub struct CountryNameRaw {
    pub common: String,
    #[serde(default)]
    pub official: Option<String>,
}

/// Raw flag-image links for a country.
#[derive(Debug, Default, Deserialize)]
pub struct FlagsRaw {
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Raw map links for a country.
#[derive(Debug, Default, Deserialize)]
pub struct MapsRaw {
    #[serde(rename = "googleMaps", default)]
    pub google_maps: Option<String>,
    #[serde(rename = "openStreetMaps", default)]
    pub open_street_maps: Option<String>,
}

/// Raw country structure from JSON.
/// NOTE: This type mirrors the external API response and is treated as an
/// opaque pass-through. We do *not* expose this type from the public API.
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    pub name: CountryNameRaw,
    /// ISO 3166-1 alpha-2 (e.g. "DE").
    pub cca2: String,
    /// ISO 3166-1 alpha-3 (e.g. "DEU"); the navigation key for borders.
    pub cca3: String,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub flags: FlagsRaw,
    /// A country may have zero, one or several capitals.
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub area: Option<f64>,
    /// `[latitude, longitude]`; absent or short for a handful of records.
    #[serde(default)]
    pub latlng: Vec<f64>,
    #[serde(default)]
    pub landlocked: bool,
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default)]
    pub maps: MapsRaw,
    /// cca3 codes of adjacent countries; empty for islands.
    #[serde(default)]
    pub borders: Vec<String>,
}

pub type CountriesRaw = Vec<CountryRaw>;

#[cfg(test)]
mod tests {
    use super::*;

    const GERMANY: &str = r#"{
        "name": {"common": "Germany", "official": "Federal Republic of Germany"},
        "cca2": "DE",
        "cca3": "DEU",
        "flag": "🇩🇪",
        "flags": {"png": "https://flagcdn.com/w320/de.png", "svg": "https://flagcdn.com/de.svg"},
        "capital": ["Berlin"],
        "region": "Europe",
        "subregion": "Western Europe",
        "population": 83240525,
        "area": 357114.0,
        "latlng": [51.0, 9.0],
        "landlocked": false,
        "timezones": ["UTC+01:00"],
        "maps": {"googleMaps": "https://goo.gl/maps/mD9FBMq1nvXUBrkv6",
                 "openStreetMaps": "https://www.openstreetmap.org/relation/51477"},
        "borders": ["AUT", "BEL", "CZE", "DNK", "FRA", "LUX", "NLD", "POL", "CHE"]
    }"#;

    #[test]
    fn parses_full_record() {
        let c: CountryRaw = serde_json::from_str(GERMANY).unwrap();
        assert_eq!(c.name.common, "Germany");
        assert_eq!(c.cca3, "DEU");
        assert_eq!(c.capital, vec!["Berlin"]);
        assert_eq!(c.latlng, vec![51.0, 9.0]);
        assert_eq!(c.borders.len(), 9);
        assert_eq!(
            c.maps.open_street_maps.as_deref(),
            Some("https://www.openstreetmap.org/relation/51477")
        );
    }

    #[test]
    fn optional_fields_default() {
        // Antarctica-style record: no capital, no borders, no population.
        let c: CountryRaw = serde_json::from_str(
            r#"{"name": {"common": "Antarctica"}, "cca2": "AQ", "cca3": "ATA"}"#,
        )
        .unwrap();
        assert!(c.capital.is_empty());
        assert!(c.borders.is_empty());
        assert!(c.population.is_none());
        assert!(c.latlng.is_empty());
        assert!(!c.landlocked);
    }

    #[test]
    fn parses_array_payload() {
        let payload = format!("[{GERMANY}]");
        let all: CountriesRaw = serde_json::from_str(&payload).unwrap();
        assert_eq!(all.len(), 1);
    }
}
