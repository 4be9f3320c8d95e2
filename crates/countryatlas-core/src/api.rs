// crates/countryatlas-core/src/api.rs

//! JSON views over the model.
//!
//! Borrowed wrappers with hand-written `Serialize` impls, so machine output
//! (`--json`, the WASM boundary) has a stable field set independent of how
//! the model stores its strings.

use crate::model::Country;
use crate::traits::AtlasBackend;
use serde::ser::{Serialize, SerializeStruct, Serializer};

fn str_vec<'a, B: AtlasBackend>(items: &'a [B::Str]) -> Vec<&'a str> {
    items.iter().map(|s| s.as_ref()).collect()
}

/// Listing-card view: what the card grid shows for one country.
pub struct CountryCard<'a, B: AtlasBackend>(pub &'a Country<B>);

impl<B: AtlasBackend> Serialize for CountryCard<'_, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let c = self.0;
        let mut s = serializer.serialize_struct("CountryCard", 6)?;
        s.serialize_field("name", c.name())?;
        s.serialize_field("flag", &c.flag_png())?;
        s.serialize_field("capital", &c.capital_display())?;
        s.serialize_field("cca3", c.cca3())?;
        s.serialize_field("borders", &str_vec::<B>(c.borders()))?;
        s.serialize_field("latlng", &c.latlng())?;
        s.end()
    }
}

/// Detail view: the full field set for one country.
pub struct CountryDetail<'a, B: AtlasBackend>(pub &'a Country<B>);

impl<B: AtlasBackend> Serialize for CountryDetail<'_, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let c = self.0;
        let mut s = serializer.serialize_struct("CountryDetail", 13)?;
        s.serialize_field("name", c.name())?;
        s.serialize_field("official_name", &c.official_name())?;
        s.serialize_field("cca2", c.cca2())?;
        s.serialize_field("cca3", c.cca3())?;
        s.serialize_field("flag", &c.flag_png())?;
        s.serialize_field("capital", &c.capital_display())?;
        s.serialize_field("region", c.region())?;
        s.serialize_field("subregion", c.subregion())?;
        s.serialize_field("population", &c.population())?;
        s.serialize_field("area", &c.area())?;
        s.serialize_field("latlng", &c.latlng())?;
        s.serialize_field("timezones", &str_vec::<B>(c.timezones()))?;
        s.serialize_field("borders", &str_vec::<B>(c.borders()))?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_atlas;
    use crate::DefaultBackend;

    #[test]
    fn card_view_carries_fallback_capital() {
        let raw = serde_json::from_str(
            r#"[{"name": {"common": "Antarctica"}, "cca2": "AQ", "cca3": "ATA"}]"#,
        )
        .unwrap();
        let atlas = build_atlas::<DefaultBackend>(raw);

        let v = serde_json::to_value(CountryCard(&atlas.countries[0])).unwrap();
        assert_eq!(v["capital"], "No capital");
        assert_eq!(v["cca3"], "ATA");
        assert!(v["borders"].as_array().unwrap().is_empty());
        assert!(v["latlng"].is_null());
    }

    #[test]
    fn detail_view_field_set() {
        let raw = serde_json::from_str(
            r#"[{"name": {"common": "Nepal", "official": "Federal Democratic Republic of Nepal"},
                 "cca2": "NP", "cca3": "NPL", "capital": ["Kathmandu"],
                 "region": "Asia", "subregion": "Southern Asia",
                 "population": 29136808, "latlng": [28.0, 84.0],
                 "borders": ["CHN", "IND"]}]"#,
        )
        .unwrap();
        let atlas = build_atlas::<DefaultBackend>(raw);

        let v = serde_json::to_value(CountryDetail(&atlas.countries[0])).unwrap();
        assert_eq!(v["name"], "Nepal");
        assert_eq!(v["capital"], "Kathmandu");
        assert_eq!(v["population"], 29136808u64);
        assert_eq!(v["latlng"]["lat"], 28.0);
        assert_eq!(v["borders"].as_array().unwrap().len(), 2);
    }
}
