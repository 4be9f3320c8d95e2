//! End-to-end walk through the explorer flow on a fixture dataset:
//! parse the wire payload, build the atlas, filter the listing, pivot the
//! detail context through border codes, and render the fallback texts.

use countryatlas_core::prelude::*;

const ALL_PAYLOAD: &str = r#"[
    {"name": {"common": "Germany", "official": "Federal Republic of Germany"},
     "cca2": "DE", "cca3": "DEU", "flag": "🇩🇪",
     "flags": {"png": "https://flagcdn.com/w320/de.png"},
     "capital": ["Berlin"], "region": "Europe", "subregion": "Western Europe",
     "population": 83240525, "area": 357114.0, "latlng": [51.0, 9.0],
     "timezones": ["UTC+01:00"],
     "maps": {"openStreetMaps": "https://www.openstreetmap.org/relation/51477"},
     "borders": ["AUT", "CHE", "FRA"]},
    {"name": {"common": "France"}, "cca2": "FR", "cca3": "FRA",
     "capital": ["Paris"], "region": "Europe", "latlng": [46.0, 2.0],
     "borders": ["CHE", "DEU"]},
    {"name": {"common": "Switzerland"}, "cca2": "CH", "cca3": "CHE",
     "capital": ["Bern"], "region": "Europe", "landlocked": true,
     "latlng": [47.0, 8.0], "borders": ["DEU", "FRA"]},
    {"name": {"common": "Austria"}, "cca2": "AT", "cca3": "AUT",
     "capital": ["Vienna"], "region": "Europe", "landlocked": true,
     "latlng": [47.3333, 13.3333], "borders": ["CHE", "DEU"]},
    {"name": {"common": "Bouvet Island"}, "cca2": "BV", "cca3": "BVT",
     "region": "Antarctic", "latlng": [-54.4332, 3.4],
     "timezones": ["UTC"]}
]"#;

fn load_fixture() -> DefaultAtlas {
    let raw = serde_json::from_str(ALL_PAYLOAD).expect("fixture payload parses");
    build_atlas(raw)
}

#[test]
fn listing_search_narrows_and_resets() {
    let atlas = load_fixture();
    let mut session = ExplorerSession::new();

    session.set_query("land");
    let hits = session.filtered(&atlas);
    let names: Vec<&str> = hits.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Switzerland", "Bouvet Island"]);

    session.set_query("");
    assert_eq!(session.filtered(&atlas).len(), atlas.country_count());
}

#[test]
fn detail_pivots_across_borders() {
    let atlas = load_fixture();
    let ctx = CountryContext::new(atlas.clone());

    ctx.fetch_country_data("DEU").unwrap();
    let germany = ctx.current().unwrap();
    assert_eq!(germany.capital_display(), "Berlin");
    assert_eq!(germany.region(), "Europe");

    // Walk every border button the detail view would offer.
    for code in germany.borders() {
        let outcome = ctx.fetch_country_data(code.as_ref()).unwrap();
        assert_eq!(outcome, FetchOutcome::Applied);
    }
    assert_eq!(ctx.current().unwrap().cca3(), "FRA");
    assert_eq!(ctx.version(), 4);
}

#[test]
fn fallbacks_render_verbatim() {
    let atlas = load_fixture();
    let bouvet = atlas.find_by_code("BVT").unwrap();

    assert_eq!(bouvet.capital_display(), "No capital");
    assert_eq!(bouvet.borders_display(), "No borders");
    assert!(atlas.borders_of(bouvet).is_empty());

    // The one fallback a coordinate-less record would show.
    let raw = serde_json::from_str(
        r#"[{"name": {"common": "Nowhere"}, "cca2": "XX", "cca3": "XXX"}]"#,
    )
    .unwrap();
    let tiny: DefaultAtlas = build_atlas(raw);
    assert_eq!(tiny.countries()[0].location_display(), "No location data");
}

#[test]
fn location_preview_from_listing_card() {
    let atlas = load_fixture();
    let mut session = ExplorerSession::new();

    let austria = atlas.find_by_code("AUT").unwrap();
    let latlng = austria.latlng().unwrap();
    session.select_location(latlng);

    assert_eq!(session.selected_location().unwrap().to_string(), "47.3333, 13.3333");
    session.close_map();
    assert!(session.selected_location().is_none());
}

#[test]
fn cache_round_trip_preserves_the_set() {
    let atlas = load_fixture();
    let bytes = atlas.to_cache_bytes().unwrap();
    let restored = DefaultAtlas::from_cache_bytes(&bytes).unwrap();

    assert_eq!(restored.country_count(), atlas.country_count());
    let codes: Vec<&str> = restored.countries().iter().map(|c| c.cca3()).collect();
    assert_eq!(codes, vec!["DEU", "FRA", "CHE", "AUT", "BVT"]);
}

#[test]
fn stats_summarize_the_listing() {
    let atlas = load_fixture();
    let stats = atlas.stats();
    assert_eq!(stats.countries, 5);
    assert_eq!(stats.regions, 2);
    assert_eq!(stats.borderless, 1);
}
