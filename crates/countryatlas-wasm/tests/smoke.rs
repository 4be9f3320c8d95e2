use wasm_bindgen_test::*;

// Import the wasm functions from this crate
use countryatlas_wasm::{borders_of, country_count, country_name, load_countries};

const FIXTURE: &str = r#"[
    {"name": {"common": "Iceland"}, "cca2": "IS", "cca3": "ISL",
     "capital": ["Reykjavík"], "region": "Europe", "latlng": [65.0, -18.0]},
    {"name": {"common": "Norway"}, "cca2": "NO", "cca3": "NOR",
     "capital": ["Oslo"], "region": "Europe",
     "borders": ["FIN", "SWE", "RUS"]}
]"#;

#[wasm_bindgen_test]
fn can_load_and_count() {
    let loaded = load_countries(FIXTURE).expect("fixture loads");
    assert!(loaded > 0, "expected at least one country, got {loaded}");
    assert_eq!(country_count(), loaded);
}

#[wasm_bindgen_test]
fn can_lookup_country_name() {
    load_countries(FIXTURE).expect("fixture loads");

    let name = country_name("IS");
    assert_eq!(name.as_deref(), Some("Iceland"));
}

#[wasm_bindgen_test]
fn borders_come_back_as_codes() {
    load_countries(FIXTURE).expect("fixture loads");

    let codes = borders_of("NOR");
    let codes: Vec<String> = js_sys::Array::from(&codes)
        .iter()
        .filter_map(|v| v.as_string())
        .collect();
    assert_eq!(codes, vec!["FIN", "SWE", "RUS"]);
}
