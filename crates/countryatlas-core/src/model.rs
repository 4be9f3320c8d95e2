// crates/countryatlas-core/src/model.rs
use crate::raw::CountriesRaw;
use crate::traits::{AtlasBackend, NameMatch};
use serde::{Deserialize, Serialize};

/// Default backend: plain `String` + `f64`.
///
/// This backend is used by the convenient aliases
/// [`StandardBackend`] and [`DefaultAtlas`]. It provides the best
/// ergonomics and is suitable for most applications.
#[derive(Clone, Serialize, Deserialize)]
pub struct DefaultBackend;

impl AtlasBackend for DefaultBackend {
    type Str = String;
    type Float = f64;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn float_from(f: f64) -> Self::Float {
        f
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }

    fn float_to_f64(v: Self::Float) -> f64 {
        v
    }
}

/// A geographic coordinate pair.
///
/// Ephemeral by design: the explorer session creates one when the user asks
/// for a map preview and drops it again when the preview closes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}

/// A country entry in the normalized atlas.
///
/// Normalized from the raw API record; the field set is what the explorer
/// views actually touch. Optional fields stay optional, render fallbacks live
/// in the accessors.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Country<B: AtlasBackend> {
    pub name: B::Str,
    pub official_name: Option<B::Str>,
    pub cca2: B::Str,
    pub cca3: B::Str,

    pub flag_emoji: Option<B::Str>,
    pub flag_png: Option<B::Str>,
    pub flag_svg: Option<B::Str>,
    pub flag_alt: Option<B::Str>,

    pub capitals: Vec<B::Str>,
    pub region: Option<B::Str>,
    pub subregion: Option<B::Str>,
    pub population: Option<u64>,
    pub area: Option<B::Float>,

    pub latitude: Option<B::Float>,
    pub longitude: Option<B::Float>,
    pub landlocked: bool,

    pub timezones: Vec<B::Str>,
    pub osm_url: Option<B::Str>,

    /// cca3 codes of adjacent countries, in API order.
    pub borders: Vec<B::Str>,
}

/// Top-level country set.
///
/// Holds the full listing and provides the search helpers. Constructed by the
/// loader from a dump/cache file or by the client from the live API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Atlas<B: AtlasBackend> {
    pub countries: Vec<Country<B>>,
}

/// Convenient alias for the default backend.
pub type DefaultAtlas = Atlas<DefaultBackend>;
/// Convenient alias used in demos.
pub type StandardBackend = DefaultBackend;

/// Simple aggregate statistics for the atlas.
///
/// Returned by [`Atlas::stats`]; counts reflect the materialized in-memory
/// set after whatever loading path produced it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AtlasStats {
    pub countries: usize,
    /// Distinct region labels.
    pub regions: usize,
    /// Countries with an empty borders list.
    pub borderless: usize,
}

fn latlng_pair(latlng: &[f64]) -> Option<(f64, f64)> {
    match latlng {
        [lat, lng, ..] => Some((*lat, *lng)),
        _ => None,
    }
}

/// Convert raw API records into an [`Atlas`] using the given backend.
pub fn build_atlas<B: AtlasBackend>(raw: CountriesRaw) -> Atlas<B> {
    let countries = raw
        .into_iter()
        .map(|c| {
            let (latitude, longitude) = match latlng_pair(&c.latlng) {
                Some((lat, lng)) => (Some(B::float_from(lat)), Some(B::float_from(lng))),
                None => (None, None),
            };

            Country::<B> {
                name: B::str_from(&c.name.common),
                official_name: c.name.official.as_deref().map(B::str_from),
                cca2: B::str_from(&c.cca2),
                cca3: B::str_from(&c.cca3),

                flag_emoji: c.flag.as_deref().map(B::str_from),
                flag_png: c.flags.png.as_deref().map(B::str_from),
                flag_svg: c.flags.svg.as_deref().map(B::str_from),
                flag_alt: c.flags.alt.as_deref().map(B::str_from),

                capitals: c.capital.iter().map(|s| B::str_from(s)).collect(),
                region: c.region.as_deref().map(B::str_from),
                subregion: c.subregion.as_deref().map(B::str_from),
                population: c.population,
                area: c.area.map(B::float_from),

                latitude,
                longitude,
                landlocked: c.landlocked,

                timezones: c.timezones.iter().map(|s| B::str_from(s)).collect(),
                osm_url: c.maps.open_street_maps.as_deref().map(B::str_from),

                borders: c.borders.iter().map(|s| B::str_from(s)).collect(),
            }
        })
        .collect();

    Atlas { countries }
}

impl<B: AtlasBackend> Atlas<B> {
    /// All countries in the atlas.
    pub fn countries(&self) -> &[Country<B>] {
        &self.countries
    }

    /// Total number of countries in the atlas.
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }
}

impl<B: AtlasBackend> Country<B> {
    /// Common display name.
    ///
    /// Always non-empty.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Official long-form name, if the API provides one.
    pub fn official_name(&self) -> Option<&str> {
        self.official_name.as_ref().map(|s| s.as_ref())
    }

    /// ISO 3166-1 alpha-2 code (e.g. "DE").
    pub fn cca2(&self) -> &str {
        self.cca2.as_ref()
    }

    /// ISO 3166-1 alpha-3 code (e.g. "DEU").
    ///
    /// This is the key borders refer to, and the code embedded in detail
    /// navigation.
    pub fn cca3(&self) -> &str {
        self.cca3.as_ref()
    }

    /// Alias for [`Country::cca3`]; the navigation key.
    pub fn code(&self) -> &str {
        self.cca3.as_ref()
    }

    /// Flag emoji (e.g. "🇩🇪"), or empty string when unavailable.
    pub fn flag_emoji(&self) -> &str {
        self.flag_emoji.as_ref().map(|s| s.as_ref()).unwrap_or("")
    }

    /// PNG flag image URL, if any.
    pub fn flag_png(&self) -> Option<&str> {
        self.flag_png.as_ref().map(|s| s.as_ref())
    }

    /// Capital city list; may be empty.
    pub fn capitals(&self) -> &[B::Str] {
        &self.capitals
    }

    /// Capital list rendered for display: joined with ", ", or the
    /// "No capital" fallback when the list is empty.
    pub fn capital_display(&self) -> String {
        if self.capitals.is_empty() {
            "No capital".to_string()
        } else {
            self.capitals
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    /// Region/continent label (e.g. "Europe") or empty string if unknown.
    pub fn region(&self) -> &str {
        self.region.as_ref().map(|s| s.as_ref()).unwrap_or("")
    }

    /// Subregion label (e.g. "Western Europe") or empty string if unknown.
    pub fn subregion(&self) -> &str {
        self.subregion.as_ref().map(|s| s.as_ref()).unwrap_or("")
    }

    /// Country population (if present in the dataset).
    pub fn population(&self) -> Option<u64> {
        self.population
    }

    /// Surface area in km² (if present in the dataset).
    pub fn area(&self) -> Option<f64> {
        self.area.map(B::float_to_f64)
    }

    /// Geographic center as a coordinate pair, when the record carries one.
    pub fn latlng(&self) -> Option<LatLng> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(LatLng {
                lat: B::float_to_f64(lat),
                lng: B::float_to_f64(lng),
            }),
            _ => None,
        }
    }

    /// Location rendered for display: "lat, lng", or the
    /// "No location data" fallback.
    pub fn location_display(&self) -> String {
        match self.latlng() {
            Some(pos) => pos.to_string(),
            None => "No location data".to_string(),
        }
    }

    /// Timezone labels as provided by the dataset.
    pub fn timezones(&self) -> &[B::Str] {
        &self.timezones
    }

    /// OpenStreetMap link for the country, if any.
    pub fn osm_url(&self) -> Option<&str> {
        self.osm_url.as_ref().map(|s| s.as_ref())
    }

    /// Border codes (cca3), in API order; empty for islands.
    pub fn borders(&self) -> &[B::Str] {
        &self.borders
    }

    pub fn has_borders(&self) -> bool {
        !self.borders.is_empty()
    }

    /// Border list rendered for display: codes joined with ", ", or the
    /// "No borders" fallback badge text when the list is empty.
    pub fn borders_display(&self) -> String {
        if self.borders.is_empty() {
            "No borders".to_string()
        } else {
            self.borders
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

impl<B: AtlasBackend> NameMatch for Country<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::CountriesRaw;

    fn mini_atlas() -> DefaultAtlas {
        let raw: CountriesRaw = serde_json::from_str(
            r#"[
                {"name": {"common": "Germany", "official": "Federal Republic of Germany"},
                 "cca2": "DE", "cca3": "DEU",
                 "capital": ["Berlin"], "region": "Europe", "population": 83240525,
                 "latlng": [51.0, 9.0], "borders": ["AUT", "FRA", "POL"]},
                {"name": {"common": "Antarctica"}, "cca2": "AQ", "cca3": "ATA",
                 "latlng": [-90.0, 0.0]},
                {"name": {"common": "South Africa"},
                 "cca2": "ZA", "cca3": "ZAF",
                 "capital": ["Pretoria", "Bloemfontein", "Cape Town"],
                 "region": "Africa"}
            ]"#,
        )
        .unwrap();
        build_atlas(raw)
    }

    #[test]
    fn capital_fallback_is_verbatim() {
        let atlas = mini_atlas();
        assert_eq!(atlas.countries[1].capital_display(), "No capital");
    }

    #[test]
    fn capitals_join_in_order() {
        let atlas = mini_atlas();
        assert_eq!(
            atlas.countries[2].capital_display(),
            "Pretoria, Bloemfontein, Cape Town"
        );
    }

    #[test]
    fn location_display_matches_wire_shape() {
        let atlas = mini_atlas();
        assert_eq!(atlas.countries[0].location_display(), "51, 9");
        assert_eq!(atlas.countries[2].location_display(), "No location data");
    }

    #[test]
    fn borders_preserved_in_api_order() {
        let atlas = mini_atlas();
        let borders: Vec<&str> = atlas.countries[0].borders().iter().map(|b| b.as_ref()).collect();
        assert_eq!(borders, vec!["AUT", "FRA", "POL"]);
        assert!(!atlas.countries[1].has_borders());
    }

    #[test]
    fn borders_fallback_is_verbatim() {
        let atlas = mini_atlas();
        assert_eq!(atlas.countries[1].borders_display(), "No borders");
        assert_eq!(atlas.countries[0].borders_display(), "AUT, FRA, POL");
    }
}
